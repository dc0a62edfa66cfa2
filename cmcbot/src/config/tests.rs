//! Config tests.

use crate::config::{BotConfig, FileConfig, DEFAULT_LOG_FILE};
use coinmarketcap_client::DEFAULT_BASE_URL;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_env() {
    for key in [
        "BOT_TOKEN",
        "CMC_API_KEY",
        "CMC_API_URL",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
    ] {
        env::remove_var(key);
    }
}

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
#[serial]
fn test_load_from_file_with_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"TelegramBotToken": "file_token", "CoinMarketCapApiKey": "file_key"}"#,
    );

    let config = BotConfig::load(None, Some(&path)).unwrap();

    assert_eq!(config.bot_token(), "file_token");
    assert_eq!(config.cmc_api_key, "file_key");
    assert_eq!(config.cmc_api_url, DEFAULT_BASE_URL);
    assert_eq!(config.log_file(), DEFAULT_LOG_FILE);
    assert!(config.telegram.telegram_api_url.is_none());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_token_precedence_cli_env_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"TelegramBotToken": "file_token"}"#);

    env::set_var("BOT_TOKEN", "env_token");
    let from_env = BotConfig::load(None, Some(&path)).unwrap();
    assert_eq!(from_env.bot_token(), "env_token");

    let from_cli = BotConfig::load(Some("cli_token".to_string()), Some(&path)).unwrap();
    assert_eq!(from_cli.bot_token(), "cli_token");

    env::remove_var("BOT_TOKEN");
}

#[test]
#[serial]
fn test_empty_cli_token_falls_through() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"TelegramBotToken": "file_token"}"#);

    let config = BotConfig::load(Some("  ".to_string()), Some(&path)).unwrap();
    assert_eq!(config.bot_token(), "file_token");
}

#[test]
#[serial]
fn test_missing_file_ok_when_token_from_env() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let config = BotConfig::load(None, Some(&path)).unwrap();

    assert_eq!(config.bot_token(), "env_token");
    assert!(config.cmc_api_key.is_empty());
    env::remove_var("BOT_TOKEN");
}

#[test]
#[serial]
fn test_missing_token_everywhere_is_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"CoinMarketCapApiKey": "key"}"#);

    let err = BotConfig::load(None, Some(&path)).unwrap_err();
    assert!(err.to_string().contains("token not set"));
}

#[test]
#[serial]
fn test_malformed_file_is_fatal_even_with_cli_token() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ not json");

    let result = BotConfig::load(Some("cli_token".to_string()), Some(&path));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"TelegramBotToken": "file_token", "CoinMarketCapApiKey": "file_key"}"#,
    );
    env::set_var("CMC_API_KEY", "env_key");
    env::set_var("CMC_API_URL", "http://127.0.0.1:8080");
    env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
    env::set_var("LOG_FILE", "/tmp/cmcbot-test.log");

    let config = BotConfig::load(None, Some(&path)).unwrap();

    assert_eq!(config.cmc_api_key, "env_key");
    assert_eq!(config.cmc_api_url, "http://127.0.0.1:8080");
    assert_eq!(
        config.telegram.telegram_api_url.as_deref(),
        Some("http://127.0.0.1:8081")
    );
    assert_eq!(config.log_file(), "/tmp/cmcbot-test.log");
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_bad_cmc_url() {
    clear_env();
    env::set_var("CMC_API_URL", "not a url");
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"TelegramBotToken": "file_token"}"#);

    let config = BotConfig::load(None, Some(&path)).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
fn test_file_config_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"TelegramBotToken": "t"}"#);

    let file = FileConfig::read(&path).unwrap().unwrap();
    assert_eq!(file.telegram_bot_token.as_deref(), Some("t"));
    assert!(file.coinmarketcap_api_key.is_none());
}
