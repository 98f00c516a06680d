//! Configuration management for lingo-bot
//!
//! Supports loading configuration from:
//! - TOML/YAML/JSON files under `config/`
//! - Environment variables (`LINGO_BOT__` prefix, `__` separator)
//! - `TELEGRAM_TOKEN` for the bot token

pub mod adapters;
pub mod settings;

pub use adapters::{AsrConfig, AudioConfig, DetectionConfig, EmotionConfig, TranslationConfig};
pub use settings::{
    load_settings, resolve_token, BotConfig, ObservabilityConfig, Settings, ENV_PREFIX, TOKEN_ENV,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing bot token: export TELEGRAM_TOKEN before starting the bot")]
    MissingToken,

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(path) => ConfigError::FileNotFound(path),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}
