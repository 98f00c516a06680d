//! Core traits and types for lingo-bot
//!
//! This crate provides foundational types used across all other crates:
//! - Supported languages and user identifiers
//! - Decoded audio buffers
//! - Inference results (transcription, emotion scores)
//! - Error types
//! - Adapter traits for the pretrained models

pub mod audio;
pub mod error;
pub mod inference;
pub mod language;
pub mod traits;

pub use audio::PcmAudio;
pub use error::{AudioError, ModelError, Stage, UserInputError};
pub use inference::{EmotionScore, Transcription};
pub use language::{flag_for_code, Language};
pub use traits::{AudioDecoder, EmotionClassifier, LanguageDetector, SpeechToText, Translator};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chat platform user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
