//! emotion-avatar: an emoji companion that reads the mood of typed text
//!
//! text → Classifier → AvatarController → WidgetPatch → AvatarSurface

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use error::{to_pretty_json, AvatarError, Result};

// =============================================================================
// TIMERS - page event loop
// =============================================================================

/// Quiet period after the last keystroke before classifying (milliseconds)
pub const DEBOUNCE_MS: u64 = 200;

/// How long the pulse/fade classes stay on the widget (milliseconds)
pub const PULSE_MS: u64 = 500;

/// Classifications closer together than this count as rapid typing (milliseconds)
pub const FAST_TYPING_MS: u64 = 150;

// =============================================================================
// POSITIONING
// =============================================================================

/// Vertical offset of the widget relative to the focused field (pixels)
pub const FOLLOW_OFFSET_Y: f64 = -80.0;

/// Horizontal offset of the widget relative to the focused field (pixels)
pub const FOLLOW_OFFSET_X: f64 = 0.0;

// =============================================================================
// SENTIMENT BONUS SPLIT
// =============================================================================

/// Share of a positive sentiment word credited to the happy label
pub const SENTIMENT_PRIMARY_SHARE: f64 = 0.5;

/// Share of a sentiment word credited to the secondary label of its pair
pub const SENTIMENT_SECONDARY_SHARE: f64 = 0.3;

// =============================================================================
// WIDGET
// =============================================================================

/// Transient marker classes added on every label change
pub const PULSE_CLASSES: [&str; 2] = ["pulse", "fade"];

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
