//! Terminal rendering of the avatar widget

use colored::Colorize;

use crate::types::{AvatarSurface, CursorStyle, Point, WidgetPatch};

/// Surface that keeps a view of the widget and renders it as one terminal line
#[derive(Debug)]
pub struct TerminalSurface {
    glyph: String,
    background: Option<(u8, u8, u8)>,
    position: Point,
    classes: Vec<String>,
    tooltip: String,
    cursor: CursorStyle,
    no_color: bool,
}

impl TerminalSurface {
    pub fn new(no_color: bool) -> Self {
        Self {
            glyph: String::new(),
            background: None,
            position: Point::default(),
            classes: Vec::new(),
            tooltip: String::new(),
            cursor: CursorStyle::Move,
            no_color,
        }
    }

    pub fn render_line(&self) -> String {
        let glyph = format!(" {} ", self.glyph);
        let glyph = match (self.no_color, self.background) {
            (false, Some((r, g, b))) => glyph.on_truecolor(r, g, b).to_string(),
            _ => glyph,
        };
        let classes = if self.classes.is_empty() {
            "-".to_string()
        } else {
            self.classes.join(" ")
        };
        let line = format!(
            "{} @({:.0},{:.0}) cursor={} class={} | {}",
            glyph,
            self.position.x,
            self.position.y,
            self.cursor.css(),
            classes,
            self.tooltip
        );
        if self.no_color || self.classes.is_empty() {
            line
        } else {
            line.bold().to_string()
        }
    }
}

impl AvatarSurface for TerminalSurface {
    fn apply(&mut self, patch: &WidgetPatch) {
        match patch {
            WidgetPatch::Glyph { text } => self.glyph = text.clone(),
            WidgetPatch::Background { color } => self.background = parse_hex(color),
            WidgetPatch::Position { at } => self.position = *at,
            WidgetPatch::AddClasses { classes } => {
                for class in classes {
                    if !self.classes.contains(class) {
                        self.classes.push(class.clone());
                    }
                }
            }
            WidgetPatch::RemoveClasses { classes } => self.classes.retain(|c| !classes.contains(c)),
            WidgetPatch::Tooltip { text } => self.tooltip = text.clone(),
            WidgetPatch::Cursor { style } => self.cursor = *style,
        }
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render() {
        let mut surface = TerminalSurface::new(true);
        surface.apply_all(&[
            WidgetPatch::Glyph { text: "😴".to_string() },
            WidgetPatch::Position { at: Point::new(12.0, 40.0) },
            WidgetPatch::AddClasses { classes: vec!["pulse".to_string(), "fade".to_string()] },
            WidgetPatch::Tooltip { text: "tir, sleepy".to_string() },
        ]);
        assert_eq!(surface.render_line(), " 😴  @(12,40) cursor=move class=pulse fade | tir, sleepy");

        surface.apply(&WidgetPatch::RemoveClasses { classes: vec!["pulse".to_string(), "fade".to_string()] });
        assert!(surface.render_line().contains("class=-"));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#b2dfdb"), Some((0xb2, 0xdf, 0xdb)));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("b2dfdb"), None);
    }
}
