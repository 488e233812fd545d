//! Widget patches and the surface that applies them

use serde::{Deserialize, Serialize};
use crate::types::Point;

/// Cursor shown over the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    Move,
    Grabbing,
}

impl CursorStyle {
    pub fn css(&self) -> &'static str {
        match self {
            CursorStyle::Move => "move",
            CursorStyle::Grabbing => "grabbing",
        }
    }
}

/// One change to the rendered widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum WidgetPatch {
    /// Replace the text content (the emoji)
    Glyph { text: String },
    /// Inline background color
    Background { color: String },
    /// Inline top/left in page coordinates
    Position { at: Point },
    AddClasses { classes: Vec<String> },
    RemoveClasses { classes: Vec<String> },
    Tooltip { text: String },
    Cursor { style: CursorStyle },
}

/// Something that can host the avatar widget
///
/// A browser binding would map patches onto the injected element; the CLI
/// renders them to the terminal and tests record them.
pub trait AvatarSurface {
    fn apply(&mut self, patch: &WidgetPatch);

    fn apply_all(&mut self, patches: &[WidgetPatch]) {
        for patch in patches {
            self.apply(patch);
        }
    }
}

/// Surface that keeps every patch it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub patches: Vec<WidgetPatch>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last glyph applied, if any
    pub fn glyph(&self) -> Option<&str> {
        self.patches.iter().rev().find_map(|p| match p {
            WidgetPatch::Glyph { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Last position applied, if any
    pub fn position(&self) -> Option<Point> {
        self.patches.iter().rev().find_map(|p| match p {
            WidgetPatch::Position { at } => Some(*at),
            _ => None,
        })
    }
}

impl AvatarSurface for RecordingSurface {
    fn apply(&mut self, patch: &WidgetPatch) {
        self.patches.push(patch.clone());
    }
}
