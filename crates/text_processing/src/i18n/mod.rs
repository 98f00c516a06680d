//! Localized message catalog
//!
//! Templates are keyed by (language, message key) and may contain `{name}`
//! placeholders filled in by [`Catalog::render`].

mod catalog;

use lingo_bot_core::Language;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::{Result, TextProcessingError};

/// Shown instead of a template that is missing from the catalog
pub const FALLBACK_TEXT: &str = "⚠️ Something went wrong / Algo salió mal.";

/// Every user-facing message the bot can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    Welcome,
    Help,
    About,
    ChooseLang,
    LangSet,
    InvalidLanguage,
    UnknownCommand,
    NoTranscription,
    AudioError,
    AnalysisSkipped,
    TranslationSkipped,
    TranslationFailed,
    TranscriptionHeader,
    TranslationHeader,
    EmotionHeader,
    YouWrote,
    GenericError,
}

impl MessageKey {
    pub const ALL: [MessageKey; 17] = [
        MessageKey::Welcome,
        MessageKey::Help,
        MessageKey::About,
        MessageKey::ChooseLang,
        MessageKey::LangSet,
        MessageKey::InvalidLanguage,
        MessageKey::UnknownCommand,
        MessageKey::NoTranscription,
        MessageKey::AudioError,
        MessageKey::AnalysisSkipped,
        MessageKey::TranslationSkipped,
        MessageKey::TranslationFailed,
        MessageKey::TranscriptionHeader,
        MessageKey::TranslationHeader,
        MessageKey::EmotionHeader,
        MessageKey::YouWrote,
        MessageKey::GenericError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Welcome => "welcome",
            MessageKey::Help => "help",
            MessageKey::About => "about",
            MessageKey::ChooseLang => "choose_lang",
            MessageKey::LangSet => "lang_set",
            MessageKey::InvalidLanguage => "invalid_language",
            MessageKey::UnknownCommand => "unknown_cmd",
            MessageKey::NoTranscription => "no_transcription",
            MessageKey::AudioError => "audio_error",
            MessageKey::AnalysisSkipped => "analysis_skipped",
            MessageKey::TranslationSkipped => "translation_skipped",
            MessageKey::TranslationFailed => "translation_failed",
            MessageKey::TranscriptionHeader => "transcription_header",
            MessageKey::TranslationHeader => "translation_header",
            MessageKey::EmotionHeader => "emotion_header",
            MessageKey::YouWrote => "you_wrote",
            MessageKey::GenericError => "generic_error",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static BUILTIN: Lazy<HashMap<(Language, MessageKey), &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(catalog::ENTRIES.len() * 2);
    for (key, en, es) in catalog::ENTRIES {
        map.insert((Language::English, *key), *en);
        map.insert((Language::Spanish, *key), *es);
    }
    map
});

/// Read-only template table shared by all handlers
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    default_language: Language,
    templates: &'static HashMap<(Language, MessageKey), &'static str>,
}

impl Catalog {
    /// Built-in catalog; `default_language` serves unsupported language codes
    pub fn new(default_language: Language) -> Self {
        Self {
            default_language,
            templates: &BUILTIN,
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Look a template up by loose language code (`es-AR`, `EN`, `pt`)
    ///
    /// Unsupported codes resolve to the catalog's default language.
    pub fn lookup(&self, language_code: &str, key: MessageKey) -> Result<&'static str> {
        let language = Language::from_code(language_code).unwrap_or(self.default_language);
        self.get(language, key)
    }

    /// Typed lookup
    pub fn get(&self, language: Language, key: MessageKey) -> Result<&'static str> {
        self.templates
            .get(&(language, key))
            .copied()
            .ok_or(TextProcessingError::TemplateMissing { language, key })
    }

    /// Look up and fill `{name}` placeholders
    ///
    /// A missing template is logged and replaced with [`FALLBACK_TEXT`].
    pub fn render(&self, language: Language, key: MessageKey, args: &[(&str, &str)]) -> String {
        match self.get(language, key) {
            Ok(template) => fill(template, args),
            Err(e) => {
                tracing::error!(error = %e, "Template lookup failed");
                FALLBACK_TEXT.to_string()
            }
        }
    }

    /// Render a template without placeholders
    pub fn text(&self, language: Language, key: MessageKey) -> String {
        self.render(language, key, &[])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Replace `{name}` placeholders; unknown placeholders are left untouched
fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keys the handlers send, with the placeholders each template must carry
    const PLACEHOLDERS: &[(MessageKey, &[&str])] = &[
        (MessageKey::TranscriptionHeader, &["flag", "lang", "conf"]),
        (MessageKey::TranslationHeader, &["flag", "src", "tgt"]),
        (MessageKey::EmotionHeader, &["emo"]),
        (MessageKey::YouWrote, &["flag", "lang"]),
    ];

    #[test]
    fn test_every_key_has_both_languages() {
        let catalog = Catalog::default();
        for lang in Language::ALL {
            for key in MessageKey::ALL {
                let text = catalog.get(lang, key).unwrap();
                assert!(!text.trim().is_empty(), "{} empty for {}", key, lang);
            }
        }
    }

    #[test]
    fn test_placeholders_present() {
        let catalog = Catalog::default();
        for lang in Language::ALL {
            for (key, names) in PLACEHOLDERS {
                let template = catalog.get(lang, *key).unwrap();
                for name in *names {
                    assert!(
                        template.contains(&format!("{{{}}}", name)),
                        "{} ({}) lacks {{{}}}",
                        key,
                        lang,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_lookup_falls_back_to_default_language() {
        let catalog = Catalog::new(Language::English);
        let fallback = catalog.lookup("pt-BR", MessageKey::Welcome).unwrap();
        assert_eq!(fallback, catalog.get(Language::English, MessageKey::Welcome).unwrap());

        let spanish = Catalog::new(Language::Spanish);
        let fallback = spanish.lookup("", MessageKey::Help).unwrap();
        assert_eq!(fallback, spanish.get(Language::Spanish, MessageKey::Help).unwrap());
    }

    #[test]
    fn test_lookup_loose_codes() {
        let catalog = Catalog::default();
        let es = catalog.lookup("es-MX", MessageKey::LangSet).unwrap();
        assert!(es.contains("Español"));
        let en = catalog.lookup("EN", MessageKey::LangSet).unwrap();
        assert!(en.contains("English"));
    }

    #[test]
    fn test_render_fills_placeholders() {
        let catalog = Catalog::default();
        let text = catalog.render(
            Language::English,
            MessageKey::TranslationHeader,
            &[("flag", "🇪🇸"), ("src", "en"), ("tgt", "es")],
        );
        assert_eq!(text, "🔁 Translation 🇪🇸 (en→es):\n");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{a} {b}", &[("a", "1")]), "1 {b}");
        assert_eq!(fill("no placeholders", &[("a", "1")]), "no placeholders");
    }

    #[test]
    fn test_message_key_names_unique() {
        let mut names: Vec<_> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MessageKey::ALL.len());
    }
}
