//! Logs each event in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use cmcbot_core::{Handler, HandlerResponse, InboundEvent, OutboundReply, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &InboundEvent) -> Result<bool> {
        info!(
            kind = %event.kind(),
            chat_id = ?event.chat_id(),
            event = ?event,
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &InboundEvent, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(OutboundReply::Message(_)) => "chat_message",
            HandlerResponse::Reply(OutboundReply::Inline(_)) => "inline_answer",
            HandlerResponse::Stop => "stop",
            HandlerResponse::Continue => "no_reply",
        };
        debug!(kind = %event.kind(), outcome = outcome, "Processed event");
        Ok(())
    }
}
