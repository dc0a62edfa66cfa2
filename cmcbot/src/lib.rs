//! # cmcbot
//!
//! Telegram bot that answers ticker lookups, top-N rankings and inline queries with CoinMarketCap
//! data. Updates flow: Telegram long poll → [`Dispatcher`] → classifier → handler chain →
//! market data gateway → formatter → Telegram.

pub mod cli;
pub mod components;
pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_gateway, build_handler_chain};
pub use config::{BotConfig, FileConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE};
pub use dispatch::Dispatcher;
pub use handlers::{
    CallbackHandler, CommandHandler, InlineTickerHandler, LoggingHandler, TickerHandler,
};
pub use runner::run_bot;
