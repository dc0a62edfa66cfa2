//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "cmcbot")]
#[command(about = "Telegram bot for CoinMarketCap prices and rankings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (token from --token, BOT_TOKEN or the config file, in that order).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// JSON config file; defaults to config/config.json.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Load BotConfig from the config file and environment. `token` overrides both.
pub fn load_config(token: Option<String>, config_path: Option<&Path>) -> Result<BotConfig> {
    BotConfig::load(token, config_path)
}
