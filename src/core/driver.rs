//! Real-time event loop: lines of text in, widget patches out
//!
//! Each line is treated as the new value of one text area. Lines are read as
//! raw bytes and decoded lossily, so stray non-UTF-8 input never ends the
//! session. Timers are slept on with tokio; the controller itself stays
//! synchronous.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::core::controller::AvatarController;
use crate::types::{AvatarSurface, FieldKind, InputEvent, PageEvent, Point, Rect, WidgetPatch};
use crate::{AvatarError, Result};

/// Where the simulated text area sits on the page
const FIELD_RECT: Rect = Rect { left: 0.0, top: 120.0, width: 640.0, height: 24.0 };

/// Drive `controller` from `reader` until EOF, then let pending timers finish
///
/// `start` is the instant the controller was mounted at (its millisecond 0).
/// `on_patches` sees the surface after every non-empty batch.
pub async fn drive_lines<R, S, F>(
    reader: R,
    controller: &mut AvatarController,
    surface: &mut S,
    start: Instant,
    mut on_patches: F,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    S: AvatarSurface,
    F: FnMut(&S, &[WidgetPatch]),
{
    let mut lines = reader.split(b'\n');
    let mut emit = |surface: &mut S, patches: Vec<WidgetPatch>| {
        if !patches.is_empty() {
            surface.apply_all(&patches);
            on_patches(&*surface, &patches);
        }
    };

    loop {
        let wake = controller.next_deadline().map(|ms| start + Duration::from_millis(ms));
        tokio::select! {
            segment = lines.next_segment() => {
                let segment = segment.map_err(|e| AvatarError::io("<input>", e))?;
                let text = match segment {
                    Some(bytes) => decode_line(&bytes),
                    None => break,
                };
                let now = elapsed_ms(start);
                debug!(now, chars = text.len(), "line received");
                let event = PageEvent::Input(InputEvent {
                    field: FieldKind::TextArea,
                    value: Some(text),
                    text_content: None,
                    rect: FIELD_RECT,
                    scroll: Point::default(),
                });
                let patches = controller.handle(&event, now);
                emit(surface, patches);
            }
            _ = wait_until(wake) => {
                let patches = controller.tick(elapsed_ms(start));
                emit(surface, patches);
            }
        }
    }

    while let Some(deadline) = controller.next_deadline() {
        sleep_until(start + Duration::from_millis(deadline)).await;
        let patches = controller.tick(elapsed_ms(start).max(deadline));
        emit(surface, patches);
    }

    Ok(())
}

/// Strip a trailing `\r` and decode, replacing invalid UTF-8
fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
