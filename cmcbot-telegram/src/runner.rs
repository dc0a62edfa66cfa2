//! Startup: builds the teloxide Bot, authenticates with getMe and switches the bot to long polling.
//! Both checks are fatal; nothing is retried.

use anyhow::{Context, Result};
use teloxide::prelude::*;
use tracing::{info, instrument};

use crate::config::TelegramConfig;

/// Connects to Telegram: builds the Bot, calls getMe (fails on a bad token) and deleteWebhook
/// (getUpdates is refused while a webhook is set). Returns the ready Bot.
#[instrument(skip(config))]
pub async fn connect(config: &TelegramConfig) -> Result<teloxide::Bot> {
    config.validate()?;
    let bot = config.build_bot()?;

    let me = bot
        .get_me()
        .await
        .context("Telegram authentication (getMe) failed")?;
    info!(
        username = %me.user.username.as_deref().unwrap_or("-"),
        "Authorized on account"
    );

    bot.delete_webhook()
        .await
        .context("Failed to switch bot to long polling (deleteWebhook)")?;

    Ok(bot)
}
