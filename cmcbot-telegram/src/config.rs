//! Minimal Telegram config: token, optional API URL and log file path.
//! Env: TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE. The token is resolved by the caller.

use anyhow::Result;
use std::env;

/// Telegram connectivity and logging config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Uses the given token; TELEGRAM_API_URL (or TELOXIDE_API_URL) and LOG_FILE from env.
    pub fn load(bot_token: String) -> Self {
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Self {
            bot_token,
            telegram_api_url,
            log_file,
        }
    }

    /// Builds config with the given token; other fields None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Token must be non-empty; API URL, if set, must parse.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("Telegram bot token is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// teloxide Bot for this config, pointed at `telegram_api_url` when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => Ok(bot.set_api_url(reqwest::Url::parse(url_str)?)),
            None => Ok(bot),
        }
    }
}
