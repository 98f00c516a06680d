//! Error types for text processing

use lingo_bot_core::Language;
use thiserror::Error;

use crate::MessageKey;

/// Text processing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextProcessingError {
    /// No template for the key in the resolved language
    #[error("Template missing: {key} ({language})")]
    TemplateMissing { language: Language, key: MessageKey },
}

/// Result type for text processing
pub type Result<T> = std::result::Result<T, TextProcessingError>;
