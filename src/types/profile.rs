//! Emotion profiles and the sentiment polarity table

use crate::types::EmotionLabel;

/// One emotion's keyword list and weight
///
/// Keywords are stored as written; the index normalizes them when it is built.
#[derive(Debug, Clone, Copy)]
pub struct EmotionProfile {
    pub label: EmotionLabel,
    pub keywords: &'static [&'static str],
    pub weight: f64,
}

/// Profiles in priority order
pub const EMOTION_PROFILES: [EmotionProfile; 12] = [
    EmotionProfile {
        label: EmotionLabel::Happy,
        keywords: &["happy", "good", "great", "awesome", "wonderful", "love", "excellent"],
        weight: 1.0,
    },
    EmotionProfile {
        label: EmotionLabel::Sad,
        keywords: &["sad", "unhappy", "crying", "depressed", "miserable"],
        weight: 1.0,
    },
    EmotionProfile {
        label: EmotionLabel::Angry,
        keywords: &["angry", "mad", "furious", "annoyed", "hate", "frustrated", "frustrating", "nerves"],
        weight: 1.2,
    },
    EmotionProfile {
        label: EmotionLabel::Anxious,
        keywords: &["worried", "anxious", "nervous", "scared", "panic"],
        weight: 1.1,
    },
    EmotionProfile {
        label: EmotionLabel::Tired,
        keywords: &["tired", "sleepy", "exhausted", "bored", "sleep"],
        weight: 0.8,
    },
    EmotionProfile {
        label: EmotionLabel::Loving,
        keywords: &["love", "adore", "crush", "beautiful"],
        weight: 1.5,
    },
    EmotionProfile {
        label: EmotionLabel::Curious,
        keywords: &["think", "wonder", "curious", "confused", "maybe"],
        weight: 1.0,
    },
    EmotionProfile {
        label: EmotionLabel::Laughing,
        keywords: &["lol", "haha", "funny", "joke"],
        weight: 1.3,
    },
    EmotionProfile {
        label: EmotionLabel::Confident,
        keywords: &["cool", "confident", "winning", "success"],
        weight: 1.2,
    },
    EmotionProfile {
        label: EmotionLabel::Caring,
        keywords: &["hug", "care", "support", "friendly"],
        weight: 1.0,
    },
    EmotionProfile {
        label: EmotionLabel::Determined,
        keywords: &["determined", "motivated", "ready", "pumped"],
        weight: 1.4,
    },
    EmotionProfile {
        label: EmotionLabel::Calm,
        keywords: &["calm", "peaceful", "relaxed", "serene", "zen"],
        weight: 0.9,
    },
];

/// Word polarity for the sentiment bonus pass
///
/// Looked up with normalized tokens, so entries whose stem differs from the
/// written form (e.g. "depressed") never fire.
pub const SENTIMENT_WORDS: [(&str, f64); 16] = [
    ("happy", 1.0),
    ("joy", 1.0),
    ("love", 1.0),
    ("excited", 1.0),
    ("great", 1.0),
    ("good", 1.0),
    ("sad", -1.0),
    ("depressed", -1.0),
    ("cry", -1.0),
    ("angry", -1.0),
    ("hate", -1.0),
    ("frustrated", -1.0),
    ("tired", -0.5),
    ("bored", -0.5),
    ("calm", 0.5),
    ("relaxed", 0.5),
];

/// Label pair credited by positive sentiment (primary, secondary)
pub const POSITIVE_PAIR: (EmotionLabel, EmotionLabel) = (EmotionLabel::Happy, EmotionLabel::Loving);

/// Label pair credited by negative sentiment (primary, secondary)
pub const NEGATIVE_PAIR: (EmotionLabel, EmotionLabel) = (EmotionLabel::Sad, EmotionLabel::Angry);
