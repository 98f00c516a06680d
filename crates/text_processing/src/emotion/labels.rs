//! GoEmotions label table

/// Emoji used for labels outside the table
pub const DEFAULT_EMOJI: &str = "🎭";

/// (model label, emoji, Spanish name); the English name is the label itself
pub(super) const GO_EMOTIONS: [(&str, &str, &str); 28] = [
    ("admiration", "👏", "admiración"),
    ("amusement", "😄", "diversión"),
    ("anger", "😠", "ira"),
    ("annoyance", "😒", "molestia"),
    ("approval", "👍", "aprobación"),
    ("caring", "🤗", "afecto"),
    ("confusion", "😕", "confusión"),
    ("curiosity", "🤔", "curiosidad"),
    ("desire", "😍", "deseo"),
    ("disappointment", "😞", "decepción"),
    ("disapproval", "👎", "desaprobación"),
    ("disgust", "🤢", "asco"),
    ("embarrassment", "😳", "vergüenza"),
    ("excitement", "🤩", "entusiasmo"),
    ("fear", "😨", "temor"),
    ("gratitude", "🙏", "gratitud"),
    ("grief", "😢", "duelo"),
    ("joy", "😊", "alegría"),
    ("love", "❤️", "amor"),
    ("nervousness", "😬", "nerviosismo"),
    ("optimism", "🌤️", "optimismo"),
    ("pride", "🦁", "orgullo"),
    ("realization", "💡", "revelación"),
    ("relief", "😮‍💨", "alivio"),
    ("remorse", "😔", "remordimiento"),
    ("sadness", "😢", "tristeza"),
    ("surprise", "😮", "sorpresa"),
    ("neutral", "😐", "neutral"),
];

pub(super) fn find(label: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    GO_EMOTIONS.iter().find(|(name, _, _)| *name == label)
}
