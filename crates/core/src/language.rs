//! Supported UI and translation languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::UserInputError;

/// Languages the bot speaks and translates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// All supported languages, in menu order
    pub const ALL: [Language; 2] = [Language::Spanish, Language::English];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Native display name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }

    /// Flag emoji shown next to the language
    pub fn flag(&self) -> &'static str {
        match self {
            Language::English => "🇬🇧",
            Language::Spanish => "🇪🇸",
        }
    }

    /// The translation target for text written in this language
    pub fn other(&self) -> Language {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::English,
        }
    }

    /// Resolve a loose language code such as `es-MX`, `EN` or `en_US`.
    ///
    /// Returns `None` for anything that is not English or Spanish.
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim().to_ascii_lowercase();
        if code.starts_with("en") {
            Some(Language::English)
        } else if code.starts_with("es") {
            Some(Language::Spanish)
        } else {
            None
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UserInputError;

    /// Strict parse: only the exact codes `en` and `es` are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            other => Err(UserInputError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Flag for an arbitrary language code reported by a model
pub fn flag_for_code(code: &str) -> &'static str {
    Language::from_code(code).map(|l| l.flag()).unwrap_or("🌐")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_prefixes() {
        assert_eq!(Language::from_code("es-MX"), Some(Language::Spanish));
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code("en_US"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Spanish);
        assert!("es-MX".parse::<Language>().is_err());
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_other_is_involution() {
        for lang in Language::ALL {
            assert_ne!(lang.other(), lang);
            assert_eq!(lang.other().other(), lang);
        }
    }

    #[test]
    fn test_flags() {
        assert_eq!(flag_for_code("es"), "🇪🇸");
        assert_eq!(flag_for_code("en"), "🇬🇧");
        assert_eq!(flag_for_code("ja"), "🌐");
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Language::Spanish).unwrap();
        assert_eq!(json, "\"es\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
