//! Free chat text is a ticker lookup.

use async_trait::async_trait;
use cmcbot_core::format::ticker_text;
use cmcbot_core::{
    ChatReply, Handler, HandlerResponse, InboundEvent, MarketDataGateway, OutboundReply, Result,
};
use tracing::{info, instrument};

/// Looks the text up as a ticker symbol and replies with the ticker block.
/// Provider failures propagate; the dispatcher turns them into the generic error reply.
pub struct TickerHandler {
    gateway: MarketDataGateway,
}

impl TickerHandler {
    pub fn new(gateway: MarketDataGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl Handler for TickerHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let InboundEvent::FreeText { text, chat_id } = event else {
            return Ok(HandlerResponse::Continue);
        };
        info!(symbol = %text, chat_id = chat_id, "step: TickerHandler fetching ticker");
        let ticker = self.gateway.fetch_ticker(text).await?;
        Ok(HandlerResponse::Reply(OutboundReply::Message(ChatReply::new(
            *chat_id,
            ticker_text(&ticker),
        ))))
    }
}
