//! Dispatch loop: pulls update batches, classifies each update, runs the handler chain and
//! delivers at most one reply per update.
//!
//! One update is handled completely before the next is taken. Handler failures become the
//! generic error reply; delivery failures are logged. Neither stops the loop.

use cmcbot_core::{
    classify, Bot, ChatReply, HandlerResponse, InboundEvent, InlineAnswer, OutboundReply,
    RawUpdate, Replies, UpdateSource,
};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Owns the handler chain, the reply sink and the fixed reply texts.
pub struct Dispatcher {
    chain: HandlerChain,
    bot: Arc<dyn Bot>,
    replies: Arc<Replies>,
}

impl Dispatcher {
    pub fn new(chain: HandlerChain, bot: Arc<dyn Bot>, replies: Arc<Replies>) -> Self {
        Self {
            chain,
            bot,
            replies,
        }
    }

    /// Consumes batches until the source closes.
    pub async fn run<S>(&self, source: &mut S)
    where
        S: UpdateSource + ?Sized,
    {
        info!("Dispatch loop started");
        loop {
            match source.next_batch().await {
                Ok(Some(batch)) => {
                    for update in &batch {
                        self.dispatch(update).await;
                    }
                }
                Ok(None) => {
                    info!("Update source closed, dispatch loop stopped");
                    break;
                }
                Err(e) => {
                    error!(error = %e, "Update source failed, waiting for next batch");
                }
            }
        }
    }

    /// Handles one update. Returns the reply that was sent (or attempted), if any.
    #[instrument(skip(self, update))]
    pub async fn dispatch(&self, update: &RawUpdate) -> Option<OutboundReply> {
        let Some(event) = classify(update) else {
            debug!(update = ?update, "Update matches no interaction kind, ignored");
            return None;
        };

        let reply = match self.chain.handle(&event).await {
            Ok(HandlerResponse::Reply(reply)) => reply,
            Ok(response) => {
                debug!(kind = %event.kind(), response = ?response, "No reply for event");
                return None;
            }
            Err(e) => {
                error!(error = %e, kind = %event.kind(), "Handler failed, sending error reply");
                self.error_reply(&event)
            }
        };

        if let Err(e) = self.bot.deliver(&reply).await {
            error!(error = %e, kind = %event.kind(), "Failed to deliver reply");
        }
        Some(reply)
    }

    /// Generic error reply: a chat message, or an inline article titled with the error title.
    pub fn error_reply(&self, event: &InboundEvent) -> OutboundReply {
        match event {
            InboundEvent::InlineQuery { id, .. } => OutboundReply::Inline(InlineAnswer {
                query_id: id.clone(),
                title: self.replies.error_title.clone(),
                body: self.replies.error_text.clone(),
            }),
            InboundEvent::Command { chat_id, .. }
            | InboundEvent::FreeText { chat_id, .. }
            | InboundEvent::ButtonCallback { chat_id, .. } => {
                OutboundReply::Message(ChatReply::new(*chat_id, &self.replies.error_text))
            }
        }
    }
}
