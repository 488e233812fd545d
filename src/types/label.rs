//! Emotion label definitions

use serde::{Deserialize, Serialize};

/// The twelve emotions the avatar can show
///
/// Declaration order is the priority order used to break score ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Anxious,
    Tired,
    Loving,
    Curious,
    Laughing,
    Confident,
    Caring,
    Determined,
    Calm,
}

impl EmotionLabel {
    /// All labels in priority order
    pub const ALL: [EmotionLabel; 12] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Anxious,
        EmotionLabel::Tired,
        EmotionLabel::Loving,
        EmotionLabel::Curious,
        EmotionLabel::Laughing,
        EmotionLabel::Confident,
        EmotionLabel::Caring,
        EmotionLabel::Determined,
        EmotionLabel::Calm,
    ];

    /// Number of labels
    pub const COUNT: usize = 12;

    /// Position in the priority order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Glyph shown on the widget
    pub fn emoji(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "😊",
            EmotionLabel::Sad => "😢",
            EmotionLabel::Angry => "😡",
            EmotionLabel::Anxious => "😰",
            EmotionLabel::Tired => "😴",
            EmotionLabel::Loving => "😍",
            EmotionLabel::Curious => "🤔",
            EmotionLabel::Laughing => "😂",
            EmotionLabel::Confident => "😎",
            EmotionLabel::Caring => "🤗",
            EmotionLabel::Determined => "😤",
            EmotionLabel::Calm => "😌",
        }
    }

    /// Widget background color (CSS hex)
    pub fn color(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "#fff9c4",
            EmotionLabel::Sad => "#bbdefb",
            EmotionLabel::Angry => "#ffcdd2",
            EmotionLabel::Anxious => "#ffecb3",
            EmotionLabel::Tired => "#e0e0e0",
            EmotionLabel::Loving => "#f8bbd0",
            EmotionLabel::Curious => "#cfd8dc",
            EmotionLabel::Laughing => "#ffe0b2",
            EmotionLabel::Confident => "#c8e6c9",
            EmotionLabel::Caring => "#d1c4e9",
            EmotionLabel::Determined => "#ffe082",
            EmotionLabel::Calm => "#b2dfdb",
        }
    }

    /// Lowercase name, matches the serde representation
    pub fn name(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Anxious => "anxious",
            EmotionLabel::Tired => "tired",
            EmotionLabel::Loving => "loving",
            EmotionLabel::Curious => "curious",
            EmotionLabel::Laughing => "laughing",
            EmotionLabel::Confident => "confident",
            EmotionLabel::Caring => "caring",
            EmotionLabel::Determined => "determined",
            EmotionLabel::Calm => "calm",
        }
    }
}

impl Default for EmotionLabel {
    fn default() -> Self {
        EmotionLabel::Happy
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}
