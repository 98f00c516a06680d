//! Adapter traits for the pretrained models
//!
//! Every external capability the bot depends on sits behind one of these
//! traits so implementations can be swapped by configuration and replaced
//! with fakes in tests.
//!
//! ```text
//!   AudioDecoder:      container bytes -> 16 kHz mono PCM
//!   SpeechToText:      PCM -> text + detected language
//!   Translator:        text (en <-> es)
//!   EmotionClassifier: text -> emotion labels with scores
//!   LanguageDetector:  text -> en | es | inconclusive
//! ```

use async_trait::async_trait;

use crate::{AudioError, EmotionScore, Language, ModelError, PcmAudio, Transcription};

/// Decodes an uploaded audio blob into the sample format the ASR model expects
pub trait AudioDecoder: Send + Sync {
    /// Decode to mono PCM at the decoder's target sample rate
    fn decode(&self, bytes: &[u8], mime_type: Option<&str>) -> Result<PcmAudio, AudioError>;
}

/// Speech-to-text with automatic language detection
#[async_trait]
pub trait SpeechToText: Send + Sync {
    async fn transcribe(&self, audio: &PcmAudio) -> Result<Transcription, ModelError>;

    /// Backend name for logs
    fn name(&self) -> &str;
}

/// Machine translation between supported languages
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String, ModelError>;

    /// Whether the pair is served
    fn supports_pair(&self, from: Language, to: Language) -> bool {
        from != to
    }

    fn name(&self) -> &str;
}

/// Multi-label emotion classification
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Scores for every label the model knows, in any order
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ModelError>;

    /// Whether the model understands text in `language`
    fn supports(&self, _language: Language) -> bool {
        true
    }

    fn name(&self) -> &str;
}

/// Text language identification restricted to the supported languages
pub trait LanguageDetector: Send + Sync {
    /// `None` when detection is inconclusive
    fn detect(&self, text: &str) -> Option<Language>;
}
