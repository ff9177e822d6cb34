use serde::{Deserialize, Serialize};
use tracing::trace;

/// Pointer displacement below which a press-release cycle stays a click.
pub const DRAG_DEADZONE_PX: f64 = 5.0;
/// Window after a drag release during which a trailing synthetic click
/// gesture from the pointer source is absorbed.
pub const CLICK_SUPPRESSION_WINDOW_MS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis domains and plot extent captured when a press starts.
///
/// A gesture converts pixel deltas with these frozen values, so a drag is
/// unaffected by any re-render that happens mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragFrame {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub plot_width: f64,
    pub plot_height: f64,
}

/// Terminal outcome of one press-release cycle.
///
/// Exactly one event fires per completed cycle: `Commit` when the deadzone
/// was exceeded, `Click` otherwise. A cancelled gesture fires neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Click { id: String },
    Commit { id: String, x: f64, y: f64 },
}

/// Visual-only position update emitted on every move while dragging.
///
/// Previews never touch the store; the final position commits on release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPreview {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Pressed,
    Dragging,
}

#[derive(Debug, Clone, PartialEq)]
struct PressState {
    bubble_id: String,
    origin: PointerPosition,
    original_x: f64,
    original_y: f64,
    frame: DragFrame,
    /// Press arrived inside the post-drag suppression window; the whole
    /// cycle is treated as a pointer-source artifact and emits nothing.
    suppressed: bool,
}

/// Per-chart pointer gesture state machine: `Idle → Pressed → (Dragging |
/// click) → Idle`.
///
/// Dragging converts the pixel delta since press into a domain delta via
/// the linear pixel-to-domain ratio and applies it to the press-time
/// original coordinates. Absolute inverse mapping is deliberately avoided:
/// the delta form does not accumulate rounding drift across moves.
#[derive(Debug, Default)]
pub struct DragController {
    press: Option<PressState>,
    dragging: bool,
    suppress_until_ms: Option<f64>,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match (&self.press, self.dragging) {
            (None, _) => DragPhase::Idle,
            (Some(_), false) => DragPhase::Pressed,
            (Some(_), true) => DragPhase::Dragging,
        }
    }

    pub fn on_press(
        &mut self,
        bubble_id: impl Into<String>,
        origin: PointerPosition,
        original_x: f64,
        original_y: f64,
        frame: DragFrame,
        now_ms: f64,
    ) {
        let suppressed = self
            .suppress_until_ms
            .is_some_and(|until| now_ms < until);
        let bubble_id = bubble_id.into();
        trace!(bubble_id = %bubble_id, suppressed, "gesture press");

        self.press = Some(PressState {
            bubble_id,
            origin,
            original_x,
            original_y,
            frame,
            suppressed,
        });
        self.dragging = false;
    }

    /// Processes a pointer move.
    ///
    /// Returns a preview position while dragging; `None` while the pointer
    /// is still inside the deadzone or no press is active.
    pub fn on_move(&mut self, position: PointerPosition) -> Option<DragPreview> {
        let press = self.press.as_ref()?;
        if press.suppressed {
            return None;
        }

        let delta_x = position.x - press.origin.x;
        let delta_y = position.y - press.origin.y;
        if !self.dragging && (delta_x.abs() > DRAG_DEADZONE_PX || delta_y.abs() > DRAG_DEADZONE_PX)
        {
            trace!(bubble_id = %press.bubble_id, "deadzone exceeded, drag starts");
            self.dragging = true;
        }
        if !self.dragging {
            return None;
        }

        let (x, y) = apply_pixel_delta(press, delta_x, delta_y);
        Some(DragPreview {
            id: press.bubble_id.clone(),
            x,
            y,
        })
    }

    /// Completes the cycle, emitting exactly one event for an unsuppressed
    /// press: `Commit` with the final clamped position when the deadzone was
    /// exceeded, `Click` otherwise.
    pub fn on_release(&mut self, position: PointerPosition, now_ms: f64) -> Option<GestureEvent> {
        let press = self.press.take()?;
        let was_dragging = std::mem::take(&mut self.dragging);

        if press.suppressed {
            trace!(bubble_id = %press.bubble_id, "suppressed cycle released");
            return None;
        }

        if !was_dragging {
            return Some(GestureEvent::Click {
                id: press.bubble_id,
            });
        }

        let delta_x = position.x - press.origin.x;
        let delta_y = position.y - press.origin.y;
        let (x, y) = apply_pixel_delta(&press, delta_x, delta_y);
        self.suppress_until_ms = Some(now_ms + CLICK_SUPPRESSION_WINDOW_MS);
        Some(GestureEvent::Commit {
            id: press.bubble_id,
            x,
            y,
        })
    }

    /// External cancellation (for example lost pointer capture): back to
    /// idle without emitting an event. The next store-driven render snaps
    /// the bubble to its persisted position.
    pub fn on_cancel(&mut self) {
        if let Some(press) = self.press.take() {
            trace!(bubble_id = %press.bubble_id, "gesture cancelled");
        }
        self.dragging = false;
    }
}

/// Original domain position plus the domain-space equivalent of a pixel
/// delta, clamped independently per axis. The y delta is negated because
/// the vertical pixel axis grows downward.
fn apply_pixel_delta(press: &PressState, delta_x: f64, delta_y: f64) -> (f64, f64) {
    let frame = press.frame;
    let domain_delta_x = delta_x / frame.plot_width * (frame.x_max - frame.x_min);
    let domain_delta_y = -(delta_y / frame.plot_height) * (frame.y_max - frame.y_min);

    let x = (press.original_x + domain_delta_x).clamp(frame.x_min, frame.x_max);
    let y = (press.original_y + domain_delta_y).clamp(frame.y_min, frame.y_max);
    (x, y)
}
