//! English/Spanish identification for free text

use lingo_bot_core::{Language, LanguageDetector};
use lingua::{Language as LinguaLanguage, LanguageDetectorBuilder};

/// lingua detector restricted to the supported languages
pub struct LinguaDetector {
    detector: lingua::LanguageDetector,
    min_confidence: f64,
}

impl LinguaDetector {
    /// `min_confidence` applies only when lingua declines to pick outright
    pub fn new(min_confidence: f64) -> Self {
        let detector =
            LanguageDetectorBuilder::from_languages(&[LinguaLanguage::English, LinguaLanguage::Spanish])
                .build();
        Self {
            detector,
            min_confidence,
        }
    }

    fn map(language: LinguaLanguage) -> Option<Language> {
        match language {
            LinguaLanguage::English => Some(Language::English),
            LinguaLanguage::Spanish => Some(Language::Spanish),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

impl Default for LinguaDetector {
    fn default() -> Self {
        Self::new(0.70)
    }
}

impl std::fmt::Debug for LinguaDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinguaDetector")
            .field("min_confidence", &self.min_confidence)
            .finish()
    }
}

impl LanguageDetector for LinguaDetector {
    fn detect(&self, text: &str) -> Option<Language> {
        if text.trim().is_empty() {
            return None;
        }

        if let Some(language) = self.detector.detect_language_of(text).and_then(Self::map) {
            return Some(language);
        }

        let (best, confidence) = self
            .detector
            .compute_language_confidence_values(text)
            .into_iter()
            .next()?;

        if confidence >= self.min_confidence {
            Self::map(best)
        } else {
            tracing::debug!(confidence, "Text language inconclusive");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let detector = LinguaDetector::default();
        assert_eq!(
            detector.detect("The weather is lovely today and I am going for a walk"),
            Some(Language::English)
        );
    }

    #[test]
    fn test_detects_spanish() {
        let detector = LinguaDetector::default();
        assert_eq!(
            detector.detect("Hoy hace un tiempo estupendo y voy a dar un paseo por el parque"),
            Some(Language::Spanish)
        );
    }

    #[test]
    fn test_blank_is_inconclusive() {
        let detector = LinguaDetector::default();
        assert_eq!(detector.detect("   "), None);
        assert_eq!(detector.detect(""), None);
    }

    #[test]
    fn test_no_letters_is_inconclusive() {
        let detector = LinguaDetector::default();
        assert_eq!(detector.detect("12345 !!!"), None);
    }
}
