//! Core types for emotion-avatar

mod label;
mod profile;
mod classification;
mod widget;
mod event;
mod patch;

pub use label::EmotionLabel;
pub use profile::{EmotionProfile, EMOTION_PROFILES, SENTIMENT_WORDS, POSITIVE_PAIR, NEGATIVE_PAIR};
pub use classification::{Classification, ClassifyReason, LabelScores};
pub use widget::{Point, Rect, Interaction, WidgetState};
pub use event::{FieldKind, InputEvent, PageEvent, TimedEvent};
pub use patch::{AvatarSurface, CursorStyle, RecordingSurface, WidgetPatch};
