//! Error types for lingo-bot

use std::fmt;
use thiserror::Error;

/// Processing stage an adapter call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Transcribe,
    Translate,
    Classify,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Transcribe => "transcribe",
            Stage::Translate => "translate",
            Stage::Classify => "classify",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    #[error("Empty audio payload")]
    Empty,

    #[error("Audio payload too large: {size} bytes exceeds {limit}")]
    TooLarge { size: usize, limit: usize },

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Resampling error: {0}")]
    Resampling(String),

    #[error("Decoding timed out after {0}ms")]
    Timeout(u64),
}

/// Model/inference errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{stage} timed out after {ms}ms")]
    Timeout { stage: Stage, ms: u64 },

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedPair { from: String, to: String },
}

/// Input rejected before reaching any adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserInputError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Malformed selection: {0}")]
    MalformedSelection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let err = ModelError::Timeout {
            stage: Stage::Translate,
            ms: 1500,
        };
        assert_eq!(err.to_string(), "translate timed out after 1500ms");
    }

    #[test]
    fn test_selection_errors() {
        let err = UserInputError::MalformedSelection("lang=es".to_string());
        assert_eq!(err.to_string(), "Malformed selection: lang=es");
    }
}
