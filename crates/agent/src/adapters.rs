//! Injected model adapters and per-stage limits

use lingo_bot_config::Settings;
use lingo_bot_core::{
    AudioDecoder, EmotionClassifier, Language, LanguageDetector, ModelError, SpeechToText, Stage,
    Translator,
};
use lingo_bot_text_processing::EmotionPolicy;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Everything the dispatcher calls out to
#[derive(Clone)]
pub struct Adapters {
    pub decoder: Arc<dyn AudioDecoder>,
    pub stt: Arc<dyn SpeechToText>,
    pub translator: Arc<dyn Translator>,
    pub emotion: Arc<dyn EmotionClassifier>,
    pub detector: Arc<dyn LanguageDetector>,
}

/// Dispatcher behaviour
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// UI language when the client language is unknown or unsupported
    pub default_language: Language,
    /// Source language assumed when text detection is inconclusive
    pub detection_fallback: Language,
    pub emotion_policy: EmotionPolicy,
    pub decode_timeout: Duration,
    pub transcribe_timeout: Duration,
    pub translate_timeout: Duration,
    pub classify_timeout: Duration,
}

impl DispatchConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            default_language: settings.bot.default_language,
            detection_fallback: settings.bot.detection_fallback,
            emotion_policy: EmotionPolicy::new(
                settings.emotion.top_k,
                settings.emotion.min_confidence,
            ),
            decode_timeout: Duration::from_millis(settings.audio.decode_timeout_ms),
            transcribe_timeout: Duration::from_millis(settings.asr.timeout_ms),
            translate_timeout: Duration::from_millis(settings.translation.timeout_ms),
            classify_timeout: Duration::from_millis(settings.emotion.timeout_ms),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Run an adapter call under a deadline; expiry counts as a failure of `stage`
pub(crate) async fn bounded<T, F>(stage: Stage, limit: Duration, call: F) -> Result<T, ModelError>
where
    F: Future<Output = Result<T, ModelError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(ModelError::Timeout {
            stage,
            ms: limit.as_millis() as u64,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.emotion.top_k = 2;
        settings.translation.timeout_ms = 1234;
        settings.bot.detection_fallback = Language::Spanish;

        let config = DispatchConfig::from_settings(&settings);
        assert_eq!(config.emotion_policy.top_k, 2);
        assert_eq!(config.translate_timeout, Duration::from_millis(1234));
        assert_eq!(config.detection_fallback, Language::Spanish);
    }

    #[tokio::test]
    async fn test_bounded_passes_result_through() {
        let out = bounded(Stage::Translate, Duration::from_secs(1), async {
            Ok::<_, ModelError>("hola")
        })
        .await;
        assert_eq!(out, Ok("hola"));
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let out: Result<(), ModelError> = bounded(Stage::Classify, Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert_eq!(
            out,
            Err(ModelError::Timeout {
                stage: Stage::Classify,
                ms: 20
            })
        );
    }
}
