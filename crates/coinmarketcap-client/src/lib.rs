//! # CoinMarketCap client
//!
//! Implements [`cmcbot_core::MarketDataProvider`] over the CoinMarketCap HTTP API:
//!
//! - quote: `GET /v1/cryptocurrency/quotes/latest?symbol=BTC&convert=USD`
//! - listings: `GET /v1/cryptocurrency/listings/latest?start=1&limit=10&convert=USD`
//!
//! ## Example
//!
//! ```rust,no_run
//! use cmcbot_core::MarketDataGateway;
//! use coinmarketcap_client::CoinMarketCapClient;
//! use std::sync::Arc;
//!
//! async fn example() -> Result<(), cmcbot_core::ProviderError> {
//!     let gateway = MarketDataGateway::new(Arc::new(CoinMarketCapClient::new("api-key".to_string())));
//!     let btc = gateway.fetch_ticker("btc").await?;
//!     println!("{} = {}", btc.symbol, btc.price);
//!     Ok(())
//! }
//! ```
//!
//! No retries and no client-side timeout beyond reqwest's defaults.

mod client;
mod models;

pub use client::{CoinMarketCapClient, API_KEY_HEADER, DEFAULT_BASE_URL};
