//! Button presses from the `/check` keyboard: payload → limit → top-N list.

use async_trait::async_trait;
use cmcbot_core::format::top_text;
use cmcbot_core::{
    ButtonMenu, ChatReply, Handler, HandlerResponse, InboundEvent, MarketDataGateway,
    OutboundReply, Result,
};
use tracing::{info, instrument, warn};

/// Answers a menu button with the top-N list for its limit. A payload the menu does not know
/// stops the chain without a reply.
pub struct CallbackHandler {
    menu: ButtonMenu,
    gateway: MarketDataGateway,
}

impl CallbackHandler {
    pub fn new(menu: ButtonMenu, gateway: MarketDataGateway) -> Self {
        Self { menu, gateway }
    }
}

#[async_trait]
impl Handler for CallbackHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let InboundEvent::ButtonCallback { payload, chat_id } = event else {
            return Ok(HandlerResponse::Continue);
        };

        let Some(limit) = self.menu.limit_for(payload) else {
            warn!(payload = %payload, chat_id = chat_id, "Callback payload not in button menu, no reply");
            return Ok(HandlerResponse::Stop);
        };

        info!(limit = limit, chat_id = chat_id, "step: CallbackHandler fetching top list");
        let list = self.gateway.fetch_top(limit).await?;
        Ok(HandlerResponse::Reply(OutboundReply::Message(ChatReply::new(
            *chat_id,
            top_text(&list),
        ))))
    }
}
