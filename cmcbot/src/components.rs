//! Component factory: market data gateway and handler chain from config.

use cmcbot_core::{ButtonMenu, MarketDataGateway, Replies};
use coinmarketcap_client::CoinMarketCapClient;
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::{
    CallbackHandler, CommandHandler, InlineTickerHandler, LoggingHandler, TickerHandler,
};

/// Gateway backed by the CoinMarketCap client at the configured URL.
#[instrument(skip(config))]
pub fn build_gateway(config: &BotConfig) -> MarketDataGateway {
    info!(
        cmc_api_url = %config.cmc_api_url,
        api_key_set = !config.cmc_api_key.is_empty(),
        "Using CoinMarketCap provider"
    );
    let client =
        CoinMarketCapClient::with_base_url(config.cmc_api_key.clone(), config.cmc_api_url.clone());
    MarketDataGateway::new(Arc::new(client))
}

/// Chain: logging, then one handler per interaction kind.
pub fn build_handler_chain(
    replies: Arc<Replies>,
    menu: ButtonMenu,
    gateway: MarketDataGateway,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(replies, menu.clone())))
        .add_handler(Arc::new(CallbackHandler::new(menu, gateway.clone())))
        .add_handler(Arc::new(TickerHandler::new(gateway.clone())))
        .add_handler(Arc::new(InlineTickerHandler::new(gateway)))
}
