//! Inference adapter configuration

use serde::{Deserialize, Serialize};

/// Speech-to-text sidecar (faster-whisper)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsrConfig {
    /// Base URL of the ASR service
    #[serde(default = "default_asr_endpoint")]
    pub endpoint: String,

    /// Whisper model size served by the sidecar
    #[serde(default = "default_asr_model")]
    pub model: String,

    /// Beam size for decoding
    #[serde(default = "default_beam_size")]
    pub beam_size: u32,

    /// Let the sidecar strip silence before decoding
    #[serde(default = "default_true")]
    pub vad_filter: bool,

    /// Request timeout in milliseconds
    #[serde(default = "default_asr_timeout")]
    pub timeout_ms: u64,
}

fn default_asr_endpoint() -> String {
    "http://127.0.0.1:6006".to_string()
}
fn default_asr_model() -> String {
    "small".to_string()
}
fn default_beam_size() -> u32 {
    5
}
fn default_asr_timeout() -> u64 {
    60_000
}

impl Default for AsrConfig {
    fn default() -> Self {
        Self {
            endpoint: default_asr_endpoint(),
            model: default_asr_model(),
            beam_size: default_beam_size(),
            vad_filter: true,
            timeout_ms: default_asr_timeout(),
        }
    }
}

/// Translation sidecar (MarianMT)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Base URL of the translation service
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// English -> Spanish model
    #[serde(default = "default_en_es_model")]
    pub en_es_model: String,

    /// Spanish -> English model
    #[serde(default = "default_es_en_model")]
    pub es_en_model: String,

    /// Generation cap
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(default = "default_translation_timeout")]
    pub timeout_ms: u64,
}

fn default_translation_endpoint() -> String {
    "http://127.0.0.1:6007".to_string()
}
fn default_en_es_model() -> String {
    "Helsinki-NLP/opus-mt-en-es".to_string()
}
fn default_es_en_model() -> String {
    "Helsinki-NLP/opus-mt-es-en".to_string()
}
fn default_max_new_tokens() -> u32 {
    512
}
fn default_translation_timeout() -> u64 {
    30_000
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translation_endpoint(),
            en_es_model: default_en_es_model(),
            es_en_model: default_es_en_model(),
            max_new_tokens: default_max_new_tokens(),
            timeout_ms: default_translation_timeout(),
        }
    }
}

/// Emotion classification sidecar (GoEmotions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionConfig {
    /// Base URL of the classification service
    #[serde(default = "default_emotion_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_emotion_model")]
    pub model: String,

    /// Maximum number of labels shown
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Minimum score for a label to be shown (0.0 - 1.0)
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,

    /// Request timeout in milliseconds
    #[serde(default = "default_emotion_timeout")]
    pub timeout_ms: u64,
}

fn default_emotion_endpoint() -> String {
    "http://127.0.0.1:6008".to_string()
}
fn default_emotion_model() -> String {
    "SamLowe/roberta-base-go_emotions".to_string()
}
fn default_top_k() -> usize {
    3
}
fn default_min_confidence() -> f32 {
    0.30
}
fn default_emotion_timeout() -> u64 {
    15_000
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_emotion_endpoint(),
            model: default_emotion_model(),
            top_k: default_top_k(),
            min_confidence: default_min_confidence(),
            timeout_ms: default_emotion_timeout(),
        }
    }
}

/// Text language detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Confidence needed to accept a language the detector did not pick outright
    #[serde(default = "default_detection_confidence")]
    pub min_confidence: f64,
}

fn default_detection_confidence() -> f64 {
    0.70
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_detection_confidence(),
        }
    }
}

/// Voice note decoding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Sample rate handed to the ASR model
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Decode budget in milliseconds
    #[serde(default = "default_decode_timeout")]
    pub decode_timeout_ms: u64,
}

fn default_sample_rate() -> u32 {
    16000
}
fn default_decode_timeout() -> u64 {
    10_000
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            decode_timeout_ms: default_decode_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}
