//! Inference result types returned by the model adapters

use serde::{Deserialize, Serialize};

use crate::Language;

/// Speech-to-text output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,

    /// Detected language as reported by the model (ISO 639-1, may be unsupported)
    pub language: String,

    /// Language detection probability (0.0 - 1.0)
    pub probability: f32,
}

impl Transcription {
    pub fn new(text: impl Into<String>, language: impl Into<String>, probability: f32) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            probability,
        }
    }

    /// Detected language if it is one the bot translates between
    pub fn supported_language(&self) -> Option<Language> {
        Language::from_code(&self.language)
    }

    /// Probability as a whole percentage, clamped to 0..=100
    pub fn probability_percent(&self) -> u8 {
        (self.probability.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// Check if transcript is empty
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One emotion label with its confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f32,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}
