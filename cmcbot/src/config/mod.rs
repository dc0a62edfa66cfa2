//! Bot configuration: JSON config file (token, CoinMarketCap key) overlaid by env and CLI.

mod bot_config;
mod file_config;

#[cfg(test)]
mod tests;

pub use bot_config::{BotConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE};
pub use file_config::FileConfig;
