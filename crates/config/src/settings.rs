//! Main settings module

use config::{Config, Environment, File};
use lingo_bot_core::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{AsrConfig, AudioConfig, ConfigError, DetectionConfig, EmotionConfig, TranslationConfig};

/// Environment variable carrying the bot token
pub const TOKEN_ENV: &str = "TELEGRAM_TOKEN";

/// Prefix for layered environment overrides (`LINGO_BOT__EMOTION__TOP_K=2`)
pub const ENV_PREFIX: &str = "LINGO_BOT";

const SUPPORTED_SAMPLE_RATES: [u32; 4] = [8000, 16000, 24000, 48000];

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Bot behaviour
    #[serde(default)]
    pub bot: BotConfig,

    /// Speech-to-text adapter
    #[serde(default)]
    pub asr: AsrConfig,

    /// Translation adapter
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Emotion adapter and label policy
    #[serde(default)]
    pub emotion: EmotionConfig,

    /// Text language detection
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Voice note decoding
    #[serde(default)]
    pub audio: AudioConfig,

    /// Logging
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        if self.bot.max_message_chars == 0 {
            return Err(ConfigError::invalid("bot.max_message_chars", "must be positive"));
        }

        if !(0.0..=1.0).contains(&self.emotion.min_confidence) {
            return Err(ConfigError::invalid(
                "emotion.min_confidence",
                format!("{} is outside 0.0..=1.0", self.emotion.min_confidence),
            ));
        }

        if self.emotion.top_k == 0 {
            return Err(ConfigError::invalid("emotion.top_k", "must be at least 1"));
        }

        if !(0.0..=1.0).contains(&self.detection.min_confidence) {
            return Err(ConfigError::invalid(
                "detection.min_confidence",
                format!("{} is outside 0.0..=1.0", self.detection.min_confidence),
            ));
        }

        if !SUPPORTED_SAMPLE_RATES.contains(&self.audio.sample_rate) {
            return Err(ConfigError::invalid(
                "audio.sample_rate",
                format!(
                    "{} Hz not supported, use one of {:?}",
                    self.audio.sample_rate, SUPPORTED_SAMPLE_RATES
                ),
            ));
        }

        let timeouts = [
            ("asr.timeout_ms", self.asr.timeout_ms),
            ("translation.timeout_ms", self.translation.timeout_ms),
            ("emotion.timeout_ms", self.emotion.timeout_ms),
            ("audio.decode_timeout_ms", self.audio.decode_timeout_ms),
        ];
        for (field, value) in timeouts {
            if value == 0 {
                return Err(ConfigError::invalid(field, "timeout must be positive"));
            }
        }

        let endpoints = [
            ("asr.endpoint", &self.asr.endpoint),
            ("translation.endpoint", &self.translation.endpoint),
            ("emotion.endpoint", &self.emotion.endpoint),
        ];
        for (field, value) in endpoints {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::invalid(
                    field,
                    format!("'{}' is not an http(s) URL", value),
                ));
            }
        }

        Ok(())
    }
}

/// Bot behaviour and chat platform constants
#[derive(Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot API token (normally supplied through `TELEGRAM_TOKEN`)
    #[serde(default)]
    pub token: String,

    /// UI language for users whose client language is neither en nor es
    #[serde(default)]
    pub default_language: Language,

    /// Source language assumed when text language detection is inconclusive
    #[serde(default)]
    pub detection_fallback: Language,

    /// Telegram text limit per message
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,

    /// Largest voice note downloaded (Bot API download cap is 20 MB)
    #[serde(default = "default_max_voice_bytes")]
    pub max_voice_bytes: usize,
}

fn default_max_message_chars() -> usize {
    4096
}
fn default_max_voice_bytes() -> usize {
    20 * 1024 * 1024
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            default_language: Language::English,
            detection_fallback: Language::English,
            max_message_chars: default_max_message_chars(),
            max_voice_bytes: default_max_voice_bytes(),
        }
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("BotConfig")
            .field("token", &token)
            .field("default_language", &self.default_language)
            .field("detection_fallback", &self.detection_fallback)
            .field("max_message_chars", &self.max_message_chars)
            .field("max_voice_bytes", &self.max_voice_bytes)
            .finish()
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Pick the bot token: `TELEGRAM_TOKEN` first, then the configured value.
///
/// Blank values count as missing.
pub fn resolve_token<F>(configured: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(TOKEN_ENV)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| {
            let configured = configured.trim();
            (!configured.is_empty()).then(|| configured.to_string())
        })
        .ok_or(ConfigError::MissingToken)
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. `TELEGRAM_TOKEN` (token only)
/// 2. Environment variables (`LINGO_BOT__` prefix)
/// 3. config/{env}.* (if env specified)
/// 4. config/default.*
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder = builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let mut settings: Settings = config.try_deserialize()?;

    settings.bot.token = resolve_token(&settings.bot.token, |key| std::env::var(key).ok())?;

    // Validate
    settings.validate()?;

    tracing::debug!(?settings, "Settings loaded");

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "123:abc".to_string();
        settings
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.bot.max_message_chars, 4096);
        assert_eq!(settings.bot.default_language, Language::English);
        assert_eq!(settings.emotion.top_k, 3);
        assert!((settings.emotion.min_confidence - 0.30).abs() < f32::EPSILON);
        assert_eq!(settings.audio.sample_rate, 16000);
        assert_eq!(settings.translation.en_es_model, "Helsinki-NLP/opus-mt-en-es");
    }

    #[test]
    fn test_missing_token_fails_validation() {
        let settings = Settings::default();
        assert!(matches!(settings.validate(), Err(ConfigError::MissingToken)));
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_resolve_token_prefers_env() {
        let token = resolve_token("from-file", |_| Some("from-env".to_string())).unwrap();
        assert_eq!(token, "from-env");

        let token = resolve_token("from-file", |_| None).unwrap();
        assert_eq!(token, "from-file");

        let token = resolve_token("from-file", |_| Some("   ".to_string())).unwrap();
        assert_eq!(token, "from-file");
    }

    #[test]
    fn test_resolve_token_missing() {
        let err = resolve_token("", |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
        assert!(err.to_string().contains(TOKEN_ENV));
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = valid();
        settings.emotion.min_confidence = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = valid();
        settings.emotion.top_k = 0;
        assert!(settings.validate().is_err());

        let mut settings = valid();
        settings.audio.sample_rate = 44100;
        assert!(settings.validate().is_err());

        let mut settings = valid();
        settings.translation.timeout_ms = 0;
        assert!(settings.validate().is_err());

        let mut settings = valid();
        settings.asr.endpoint = "localhost:6006".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", valid());
        assert!(!rendered.contains("123:abc"));
        assert!(rendered.contains("<redacted>"));
    }
}
