//! Emotion label selection and display
//!
//! The classifier returns a sigmoid score for every GoEmotions label. The
//! policy keeps the strongest few; the formatter localizes them for the
//! user's UI language.

mod labels;

pub use labels::DEFAULT_EMOJI;

use lingo_bot_core::{EmotionScore, Language};
use serde::{Deserialize, Serialize};

/// Shown when the classifier produced nothing to display
pub const NEUTRAL_DISPLAY: &str = "neutral 😐";

/// Which labels make it into the reply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionPolicy {
    /// Maximum number of labels shown
    pub top_k: usize,
    /// Labels scoring below this are dropped unless nothing passes
    pub min_confidence: f32,
}

impl Default for EmotionPolicy {
    fn default() -> Self {
        Self {
            top_k: 3,
            min_confidence: 0.30,
        }
    }
}

impl EmotionPolicy {
    pub fn new(top_k: usize, min_confidence: f32) -> Self {
        Self {
            top_k,
            min_confidence,
        }
    }

    /// Best labels first, at most `top_k`, all at or above the threshold.
    ///
    /// When no label reaches the threshold the single best one is kept.
    pub fn select(&self, scores: &[EmotionScore]) -> Vec<EmotionScore> {
        let mut sorted: Vec<EmotionScore> = scores
            .iter()
            .filter(|s| s.score.is_finite())
            .cloned()
            .collect();
        sorted.sort_by(|a, b| b.score.total_cmp(&a.score));

        let picked: Vec<EmotionScore> = sorted
            .iter()
            .filter(|s| s.score >= self.min_confidence)
            .take(self.top_k.max(1))
            .cloned()
            .collect();

        if picked.is_empty() {
            sorted.into_iter().take(1).collect()
        } else {
            picked
        }
    }
}

/// Label name in the UI language; unknown labels pass through unchanged
pub fn localized_label(label: &str, language: Language) -> &str {
    match (language, labels::find(label)) {
        (Language::Spanish, Some((_, _, es))) => *es,
        _ => label,
    }
}

/// Emoji for a GoEmotions label
pub fn emoji_for(label: &str) -> &'static str {
    labels::find(label).map(|(_, emoji, _)| *emoji).unwrap_or(DEFAULT_EMOJI)
}

/// "alegría 😊 (0.91), amor ❤️ (0.40)"
pub fn format_emotions(scores: &[EmotionScore], language: Language) -> String {
    if scores.is_empty() {
        return NEUTRAL_DISPLAY.to_string();
    }

    scores
        .iter()
        .map(|s| {
            format!(
                "{} {} ({:.2})",
                localized_label(&s.label, language),
                emoji_for(&s.label),
                s.score
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
