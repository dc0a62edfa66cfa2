use anyhow::{Context, Result};
use cmcbot_core::{init_tracing, ButtonMenu, Replies};
use cmcbot_telegram::{connect, TelegramBotAdapter, TelegramPolling};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::components::{build_gateway, build_handler_chain};
use crate::config::BotConfig;
use crate::dispatch::Dispatcher;

/// Main entry: validate config, init logging, connect to Telegram (fatal on failure), build the
/// gateway and handler chain, then run the dispatch loop until the update source closes.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    let log_file = config.log_file();
    if let Some(dir) = Path::new(log_file).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        }
    }
    init_tracing(Some(log_file))?;

    info!(log_file = %log_file, "Initializing bot");

    let bot = connect(&config.telegram).await?;

    let replies = Arc::new(Replies::default());
    let chain = build_handler_chain(replies.clone(), ButtonMenu::default(), build_gateway(&config));
    let dispatcher = Dispatcher::new(chain, Arc::new(TelegramBotAdapter::new(bot.clone())), replies);
    let mut source = TelegramPolling::new(bot);

    info!("Bot started successfully");

    dispatcher.run(&mut source).await;

    Ok(())
}
