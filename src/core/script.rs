//! Event scripts: JSON lines of timed page events, replayed deterministically

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::core::controller::AvatarController;
use crate::types::{AvatarSurface, EmotionLabel, TimedEvent};
use crate::{AvatarError, Result};

/// Outcome of a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub classifications: u64,
    pub patches: usize,
    pub final_label: EmotionLabel,
    /// Event-loop time when the last timer fired
    pub finished_at_ms: u64,
}

/// Parse a script; blank lines and `#` comments are skipped
pub fn parse_script(text: &str) -> Result<Vec<TimedEvent>> {
    let mut events = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line)
            .map_err(|source| AvatarError::ScriptParse { line: i + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

/// Read and parse a script file
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<TimedEvent>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| AvatarError::io(path, e))?;
    parse_script(&text)
}

/// Feed every event, then let pending timers run out
pub fn replay<S: AvatarSurface>(
    controller: &mut AvatarController,
    events: &[TimedEvent],
    surface: &mut S,
) -> ReplaySummary {
    let mut patches = 0;
    let mut clock = 0;

    for timed in events {
        clock = clock.max(timed.at_ms);
        let out = controller.handle(&timed.event, clock);
        patches += out.len();
        surface.apply_all(&out);
    }

    while let Some(deadline) = controller.next_deadline() {
        clock = clock.max(deadline);
        let out = controller.tick(clock);
        patches += out.len();
        surface.apply_all(&out);
    }

    let summary = ReplaySummary {
        events: events.len(),
        classifications: controller.classification_count(),
        patches,
        final_label: controller.current_label(),
        finished_at_ms: clock,
    };
    info!(
        events = summary.events,
        classifications = summary.classifications,
        label = %summary.final_label,
        "replay finished"
    );
    summary
}
