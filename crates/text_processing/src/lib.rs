//! Text processing for lingo-bot
//!
//! This crate provides the string-level pieces the dispatcher composes:
//! - **i18n**: (language, key) -> template lookup with placeholder rendering
//! - **Emotion**: label selection policy and localized emotion display
//! - **Detection**: English/Spanish identification for free text
//!
//! # Example
//!
//! ```
//! use lingo_bot_core::Language;
//! use lingo_bot_text_processing::{Catalog, MessageKey};
//!
//! let catalog = Catalog::new(Language::English);
//! let text = catalog.render(Language::Spanish, MessageKey::EmotionHeader, &[("emo", "alegría 😊 (0.91)")]);
//! assert!(text.contains("alegría"));
//! ```

pub mod detect;
pub mod emotion;
pub mod i18n;

mod error;

pub use detect::LinguaDetector;
pub use emotion::{emoji_for, format_emotions, localized_label, EmotionPolicy};
pub use error::{Result, TextProcessingError};
pub use i18n::{Catalog, MessageKey, FALLBACK_TEXT};
