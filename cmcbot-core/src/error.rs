//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`ProviderError`] covers market-data provider failures.

use thiserror::Error;

/// Top-level error for the bot (provider, reply delivery, update source, config, IO).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Update source error: {0}")]
    Source(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a market-data provider call. Never carries a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Provider API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Malformed provider response: {0}")]
    Decode(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
