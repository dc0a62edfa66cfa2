//! On-disk JSON config: `{"TelegramBotToken": "...", "CoinMarketCapApiKey": "..."}`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Contents of the JSON config file. Both keys are optional here; the token may come from elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    #[serde(rename = "TelegramBotToken", default)]
    pub telegram_bot_token: Option<String>,
    #[serde(rename = "CoinMarketCapApiKey", default)]
    pub coinmarketcap_api_key: Option<String>,
}

impl FileConfig {
    /// Reads the file at `path`. A missing file is `Ok(None)`; unreadable or malformed is an error.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file {}", path.display()))
            }
        };
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed config file {}", path.display()))?;
        Ok(Some(config))
    }
}
