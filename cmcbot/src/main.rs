//! Binary for the CoinMarketCap Telegram bot.

use anyhow::Result;
use clap::Parser;
use cmcbot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, config } => {
            let config = load_config(token, config.as_deref())?;
            run_bot(config).await
        }
    }
}
