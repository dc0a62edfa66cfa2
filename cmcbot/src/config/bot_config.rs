//! Resolved bot config. Token precedence: CLI > BOT_TOKEN > config file.

use anyhow::Result;
use cmcbot_telegram::TelegramConfig;
use coinmarketcap_client::DEFAULT_BASE_URL;
use std::env;
use std::path::Path;
use tracing::debug;

use super::file_config::FileConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";
pub const DEFAULT_LOG_FILE: &str = "logs/cmcbot.log";

/// Full bot config: Telegram connectivity and logging plus the CoinMarketCap endpoint and key.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// CMC_API_KEY or `CoinMarketCapApiKey`; empty means no key header is sent.
    pub cmc_api_key: String,
    /// CMC_API_URL; defaults to the CoinMarketCap pro API.
    pub cmc_api_url: String,
}

impl BotConfig {
    /// Loads from `config_path` (default [`DEFAULT_CONFIG_PATH`]) and env. `token` overrides both.
    pub fn load(token: Option<String>, config_path: Option<&Path>) -> Result<Self> {
        let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        let file = FileConfig::read(path)?.unwrap_or_else(|| {
            debug!(path = %path.display(), "Config file not found, using env only");
            FileConfig::default()
        });

        let bot_token = non_empty(token)
            .or_else(|| non_empty(env::var("BOT_TOKEN").ok()))
            .or_else(|| non_empty(file.telegram_bot_token.clone()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Telegram bot token not set: pass --token, set BOT_TOKEN or TelegramBotToken in {}",
                    path.display()
                )
            })?;

        let cmc_api_key = non_empty(env::var("CMC_API_KEY").ok())
            .or(file.coinmarketcap_api_key)
            .unwrap_or_default();
        let cmc_api_url =
            env::var("CMC_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut telegram = TelegramConfig::load(bot_token);
        if telegram.log_file.is_none() {
            telegram.log_file = Some(DEFAULT_LOG_FILE.to_string());
        }

        Ok(Self {
            telegram,
            cmc_api_key,
            cmc_api_url,
        })
    }

    /// Token must be non-empty; Telegram and CoinMarketCap URLs must parse.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if reqwest::Url::parse(&self.cmc_api_url).is_err() {
            anyhow::bail!("CMC_API_URL is not a valid URL: {}", self.cmc_api_url);
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }

    pub fn log_file(&self) -> &str {
        self.telegram.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
