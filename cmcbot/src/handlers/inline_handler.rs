//! Inline queries: the query text is a ticker, answered with a single article.

use async_trait::async_trait;
use cmcbot_core::format::{ticker_text, ticker_title};
use cmcbot_core::{
    Handler, HandlerResponse, InboundEvent, InlineAnswer, MarketDataGateway, OutboundReply, Result,
};
use tracing::{info, instrument};

/// Answers an inline query with one article titled `Name (SYMBOL)` carrying the ticker block.
pub struct InlineTickerHandler {
    gateway: MarketDataGateway,
}

impl InlineTickerHandler {
    pub fn new(gateway: MarketDataGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl Handler for InlineTickerHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let InboundEvent::InlineQuery { id, query } = event else {
            return Ok(HandlerResponse::Continue);
        };
        info!(query_id = %id, query = %query, "step: InlineTickerHandler fetching ticker");
        let ticker = self.gateway.fetch_ticker(query).await?;
        Ok(HandlerResponse::Reply(OutboundReply::Inline(InlineAnswer {
            query_id: id.clone(),
            title: ticker_title(&ticker),
            body: ticker_text(&ticker),
        })))
    }
}
