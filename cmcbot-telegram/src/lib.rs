//! # cmcbot-telegram
//!
//! Telegram transport layer: update adapters, [`cmcbot_core::Bot`] implementation, long-poll
//! [`cmcbot_core::UpdateSource`], minimal config and startup checks.
//! Handles only Telegram connectivity; no routing or market-data logic.

mod adapters;
mod bot_adapter;
mod config;
mod polling;
mod runner;

pub use adapters::TelegramUpdateWrapper;
pub use bot_adapter::{to_inline_keyboard, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use polling::{TelegramPolling, POLL_TIMEOUT_SECS};
pub use runner::connect;
