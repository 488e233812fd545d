//! Widget state owned by the avatar controller

use serde::{Deserialize, Serialize};
use crate::types::EmotionLabel;

/// A point in page or client coordinates (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Bounding box of a field in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// The two states of the drag interaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interaction {
    /// Widget follows the focused field
    Idle,
    /// Widget tracks the pointer; `grab` is pointer minus widget origin at pointer-down
    Dragging { grab: Point },
}

impl Interaction {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interaction::Idle => write!(f, "IDLE"),
            Interaction::Dragging { .. } => write!(f, "DRAGGING"),
        }
    }
}

/// Everything the controller knows about the widget
///
/// Lives for one page session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetState {
    /// Label currently shown
    pub current_label: EmotionLabel,
    /// Widget origin in page coordinates
    pub position: Point,
    pub interaction: Interaction,
    /// When the last classification ran (event-loop milliseconds)
    pub last_input_ms: u64,
    /// Pulse classes currently applied
    pub pulsing: bool,
    /// Tooltip text currently set
    pub tooltip: Option<String>,
}

impl WidgetState {
    pub fn new(label: EmotionLabel, mounted_at_ms: u64) -> Self {
        Self {
            current_label: label,
            position: Point::default(),
            interaction: Interaction::Idle,
            last_input_ms: mounted_at_ms,
            pulsing: false,
            tooltip: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }
}
