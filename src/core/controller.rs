//! Avatar controller: debounce, render, follow and drag
//!
//! Interaction states:
//! - IDLE → DRAGGING: pointer-down on the widget
//! - DRAGGING → IDLE: pointer-up anywhere
//!
//! The controller never touches a real page. Callers pass events stamped with
//! event-loop milliseconds and apply the returned patches to a surface.

use tracing::{debug, trace};

use crate::config::AvatarConfig;
use crate::core::classifier::Classifier;
use crate::core::debounce::Debouncer;
use crate::types::{
    Classification, CursorStyle, EmotionLabel, InputEvent, Interaction, PageEvent, Point,
    WidgetPatch, WidgetState,
};
use crate::PULSE_CLASSES;

/// Owns the widget state and reacts to page events
#[derive(Debug)]
pub struct AvatarController {
    config: AvatarConfig,
    classifier: Classifier,
    state: WidgetState,
    /// Text of the most recent keystroke in the current burst
    typing: Debouncer<String>,
    /// Pending removal of the pulse classes
    pulse: Debouncer<()>,
    last_classification: Option<Classification>,
    classification_count: u64,
}

impl AvatarController {
    /// Create a controller mounted at `now_ms`
    pub fn new(config: AvatarConfig, now_ms: u64) -> Self {
        let classifier = Classifier::with_config(config.classifier.clone());
        let state = WidgetState::new(config.classifier.default_label, now_ms);
        Self {
            typing: Debouncer::new(config.debounce_ms),
            pulse: Debouncer::new(config.pulse_ms),
            config,
            classifier,
            state,
            last_classification: None,
            classification_count: 0,
        }
    }

    /// Patches that draw the freshly injected widget
    pub fn mount(&self) -> Vec<WidgetPatch> {
        vec![WidgetPatch::Glyph {
            text: self.state.current_label.emoji().to_string(),
        }]
    }

    /// Feed one page event
    ///
    /// Timers that came due before `now_ms` fire first, so their patches lead
    /// the returned list.
    pub fn handle(&mut self, event: &PageEvent, now_ms: u64) -> Vec<WidgetPatch> {
        let mut patches = self.tick(now_ms);

        match event {
            PageEvent::Input(input) => self.on_input(input, now_ms, &mut patches),
            PageEvent::PointerDown { client, on_widget } => {
                if *on_widget {
                    self.on_grab(*client, &mut patches);
                }
            }
            PageEvent::PointerMove { client } => self.on_pointer_move(*client, &mut patches),
            PageEvent::PointerUp { .. } => self.on_release(&mut patches),
        }

        patches
    }

    /// Fire every timer whose deadline is at or before `now_ms`, earliest first
    pub fn tick(&mut self, now_ms: u64) -> Vec<WidgetPatch> {
        let mut patches = Vec::new();
        loop {
            let typing_due = self.typing.deadline().filter(|d| *d <= now_ms);
            let pulse_due = self.pulse.deadline().filter(|d| *d <= now_ms);
            match (typing_due, pulse_due) {
                (Some(t), Some(p)) if p <= t => self.end_pulse(p, &mut patches),
                (Some(t), _) => self.run_classification(t, &mut patches),
                (None, Some(p)) => self.end_pulse(p, &mut patches),
                (None, None) => break,
            }
        }
        patches
    }

    /// When the driver should call `tick` next
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.typing.deadline(), self.pulse.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn current_label(&self) -> EmotionLabel {
        self.state.current_label
    }

    pub fn interaction(&self) -> Interaction {
        self.state.interaction
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn last_classification(&self) -> Option<&Classification> {
        self.last_classification.as_ref()
    }

    /// How many debounced bursts have been classified
    pub fn classification_count(&self) -> u64 {
        self.classification_count
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    fn on_input(&mut self, input: &InputEvent, now_ms: u64, patches: &mut Vec<WidgetPatch>) {
        if !input.field.is_tracked() {
            trace!(field = ?input.field, "ignoring input from untracked field");
            return;
        }

        if self.typing.schedule(now_ms, input.text().to_string()) {
            trace!(restarts = self.typing.restarts(), "debounce restarted");
        }

        if self.state.is_dragging() {
            return;
        }

        let at = Point::new(
            input.rect.left + input.scroll.x + self.config.follow_offset_x,
            input.rect.top + input.scroll.y + self.config.follow_offset_y,
        );
        if at != self.state.position {
            self.state.position = at;
            patches.push(WidgetPatch::Position { at });
        }
    }

    fn run_classification(&mut self, at_ms: u64, patches: &mut Vec<WidgetPatch>) {
        let text = match self.typing.poll(at_ms) {
            Some(text) => text,
            None => return,
        };

        let elapsed = at_ms.saturating_sub(self.state.last_input_ms);
        self.state.last_input_ms = at_ms;

        let result = self.classifier.analyze(&text, elapsed);
        self.classification_count += 1;

        if result.label != self.state.current_label {
            self.render(result.label, at_ms, patches);
        }
        self.last_classification = Some(result);
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    fn render(&mut self, label: EmotionLabel, at_ms: u64, patches: &mut Vec<WidgetPatch>) {
        debug!(from = %self.state.current_label, to = %label, "avatar label changed");

        self.state.current_label = label;
        let tooltip = self.classifier.index().keywords_for(label).join(", ");
        self.state.tooltip = Some(tooltip.clone());
        self.state.pulsing = true;
        self.pulse.schedule(at_ms, ());

        patches.push(WidgetPatch::Glyph { text: label.emoji().to_string() });
        patches.push(WidgetPatch::Background { color: label.color().to_string() });
        patches.push(WidgetPatch::AddClasses { classes: pulse_classes() });
        patches.push(WidgetPatch::Tooltip { text: tooltip });
    }

    fn end_pulse(&mut self, at_ms: u64, patches: &mut Vec<WidgetPatch>) {
        if self.pulse.poll(at_ms).is_some() {
            self.state.pulsing = false;
            patches.push(WidgetPatch::RemoveClasses { classes: pulse_classes() });
        }
    }

    // -------------------------------------------------------------------------
    // Drag
    // -------------------------------------------------------------------------

    fn on_grab(&mut self, client: Point, patches: &mut Vec<WidgetPatch>) {
        let grab = client.offset_from(self.state.position);
        debug!(x = grab.x, y = grab.y, "drag started");
        self.state.interaction = Interaction::Dragging { grab };
        patches.push(WidgetPatch::Cursor { style: CursorStyle::Grabbing });
    }

    fn on_pointer_move(&mut self, client: Point, patches: &mut Vec<WidgetPatch>) {
        if let Interaction::Dragging { grab } = self.state.interaction {
            let at = client.offset_from(grab);
            self.state.position = at;
            patches.push(WidgetPatch::Position { at });
        }
    }

    fn on_release(&mut self, patches: &mut Vec<WidgetPatch>) {
        if self.state.is_dragging() {
            debug!(x = self.state.position.x, y = self.state.position.y, "drag ended");
            self.state.interaction = Interaction::Idle;
            patches.push(WidgetPatch::Cursor { style: CursorStyle::Move });
        }
    }
}

fn pulse_classes() -> Vec<String> {
    PULSE_CLASSES.iter().map(|c| c.to_string()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
