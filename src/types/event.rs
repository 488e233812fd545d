//! Page events consumed by the avatar controller

use serde::{Deserialize, Serialize};
use crate::types::{Point, Rect};

/// Kind of element an input event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// `input[type="text"]`
    TextInput,
    /// `input[type="search"]`
    SearchInput,
    TextArea,
    /// `[contenteditable="true"]`
    ContentEditable,
    /// Anything else (passwords, checkboxes, selects, ...)
    Other,
}

impl FieldKind {
    /// Does the companion react to input from this kind of field?
    pub fn is_tracked(&self) -> bool {
        !matches!(self, FieldKind::Other)
    }
}

/// An `input` event from a page element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub field: FieldKind,
    /// Form value, if the element has one
    #[serde(default)]
    pub value: Option<String>,
    /// Text content, used when there is no value
    #[serde(default)]
    pub text_content: Option<String>,
    /// Field bounding box in client coordinates
    pub rect: Rect,
    /// Page scroll offset at the time of the event
    #[serde(default)]
    pub scroll: Point,
}

impl InputEvent {
    /// Field text: value, else text content, else empty
    pub fn text(&self) -> &str {
        self.value
            .as_deref()
            .filter(|v| !v.is_empty())
            .or_else(|| self.text_content.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or("")
    }
}

/// Every event the controller understands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Input(InputEvent),
    /// Pointer pressed; `on_widget` is false when the press hit anything else
    PointerDown { client: Point, on_widget: bool },
    PointerMove { client: Point },
    PointerUp { client: Point },
}

/// An event stamped with event-loop time, one line of a replay script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub at_ms: u64,
    pub event: PageEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: Option<&str>, text_content: Option<&str>) -> InputEvent {
        InputEvent {
            field: FieldKind::TextArea,
            value: value.map(String::from),
            text_content: text_content.map(String::from),
            rect: Rect::default(),
            scroll: Point::default(),
        }
    }

    #[test]
    fn test_text_prefers_value() {
        assert_eq!(input(Some("typed"), Some("content")).text(), "typed");
    }

    #[test]
    fn test_text_falls_back_to_content() {
        assert_eq!(input(Some(""), Some("content")).text(), "content");
        assert_eq!(input(None, Some("content")).text(), "content");
    }

    #[test]
    fn test_text_defaults_to_empty() {
        assert_eq!(input(None, None).text(), "");
    }

    #[test]
    fn test_only_other_is_untracked() {
        assert!(FieldKind::TextInput.is_tracked());
        assert!(FieldKind::SearchInput.is_tracked());
        assert!(FieldKind::TextArea.is_tracked());
        assert!(FieldKind::ContentEditable.is_tracked());
        assert!(!FieldKind::Other.is_tracked());
    }

    #[test]
    fn test_script_line_parses() {
        let line = r#"{"at_ms":120,"event":{"type":"input","field":"text_input","value":"lol","rect":{"left":10,"top":200,"width":300,"height":24}}}"#;
        let timed: TimedEvent = serde_json::from_str(line).unwrap();
        assert_eq!(timed.at_ms, 120);
        match timed.event {
            PageEvent::Input(e) => {
                assert_eq!(e.text(), "lol");
                assert_eq!(e.scroll, Point::default());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
