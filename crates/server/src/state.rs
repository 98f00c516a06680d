//! Application State
//!
//! Adapters, session store and dispatcher built once at startup.

use lingo_bot_agent::{Adapters, BotDispatcher, DispatchConfig};
use lingo_bot_config::Settings;
use lingo_bot_persistence::{InMemorySessionStore, SessionStore};
use lingo_bot_pipeline::{GoEmotionsHttpClassifier, MarianHttpTranslator, SymphoniaDecoder, WhisperHttpStt};
use lingo_bot_text_processing::LinguaDetector;
use lingo_bot_transport::TelegramConfig;
use std::sync::Arc;

use crate::ServerError;

/// Application state
pub struct AppState {
    pub settings: Arc<Settings>,
    pub dispatcher: Arc<BotDispatcher>,
    pub sessions: Arc<dyn SessionStore>,
    stt: Arc<WhisperHttpStt>,
    translator: Arc<MarianHttpTranslator>,
    emotion: Arc<GoEmotionsHttpClassifier>,
}

impl AppState {
    /// Build every adapter from settings, with a fresh in-memory session store
    pub fn from_settings(settings: Settings) -> Result<Self, ServerError> {
        Self::with_store(settings, Arc::new(InMemorySessionStore::new()))
    }

    pub fn with_store(settings: Settings, sessions: Arc<dyn SessionStore>) -> Result<Self, ServerError> {
        let stt = Arc::new(
            WhisperHttpStt::new(settings.asr.clone()).map_err(|e| ServerError::Adapter(e.to_string()))?,
        );
        let translator = Arc::new(
            MarianHttpTranslator::new(settings.translation.clone())
                .map_err(|e| ServerError::Adapter(e.to_string()))?,
        );
        let emotion = Arc::new(
            GoEmotionsHttpClassifier::new(settings.emotion.clone())
                .map_err(|e| ServerError::Adapter(e.to_string()))?,
        );

        let adapters = Adapters {
            decoder: Arc::new(SymphoniaDecoder::new(
                settings.audio.sample_rate,
                settings.bot.max_voice_bytes,
            )),
            stt: stt.clone(),
            translator: translator.clone(),
            emotion: emotion.clone(),
            detector: Arc::new(LinguaDetector::new(settings.detection.min_confidence)),
        };

        let dispatcher = Arc::new(BotDispatcher::new(
            adapters,
            sessions.clone(),
            DispatchConfig::from_settings(&settings),
        ));

        tracing::info!(
            asr = %settings.asr.endpoint,
            translation = %settings.translation.endpoint,
            emotion = %settings.emotion.endpoint,
            "Adapters configured"
        );

        Ok(Self {
            settings: Arc::new(settings),
            dispatcher,
            sessions,
            stt,
            translator,
            emotion,
        })
    }

    pub fn telegram_config(&self) -> TelegramConfig {
        TelegramConfig::from_bot_config(&self.settings.bot)
    }

    /// Check each model sidecar once; failures are logged, never fatal
    ///
    /// Returns the number of sidecars that answered.
    pub async fn probe_sidecars(&self) -> usize {
        let (asr, translation, emotion) = tokio::join!(
            self.stt.health_check(),
            self.translator.health_check(),
            self.emotion.health_check(),
        );

        let mut healthy = 0;
        for (name, result) in [("asr", asr), ("translation", translation), ("emotion", emotion)] {
            match result {
                Ok(()) => {
                    healthy += 1;
                    tracing::info!(sidecar = name, "Sidecar healthy");
                }
                Err(e) => {
                    tracing::warn!(sidecar = name, error = %e, "Sidecar not reachable, requests will fail until it is up");
                }
            }
        }
        healthy
    }
}
