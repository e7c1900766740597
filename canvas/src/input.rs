//! Input model: gesture events, drop sessions, and the per-gesture state machine.
//!
//! Gestures arrive already recognized by the platform (tap, long press, pan,
//! pinch) with screen-space coordinates. `InputState` holds the baselines
//! captured when a continuous gesture begins, so every `Changed` event is
//! computed from the begin-time value plus the cumulative translation or
//! scale rather than accumulated incrementally.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::blueprint::WidgetBlueprint;
use crate::camera::Zoom;
use crate::geometry::{Corner, Point};
use crate::hit::Target;
use crate::widget::WidgetId;

/// Lifecycle phase of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A recognized gesture in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Single tap at `at`.
    Tap { at: Point },
    /// Press-and-hold at `at`.
    LongPress { at: Point },
    /// One-finger drag. `at` is the current location, `translation` is the
    /// cumulative movement since `Began`.
    Pan { phase: GesturePhase, at: Point, translation: Point },
    /// Two-finger pinch. `scale` is cumulative since `Began` (1.0 = unchanged).
    Pinch { phase: GesturePhase, scale: f64 },
}

/// What an in-flight pan is driving, with its begin-time baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanKind {
    /// Scrolling the canvas; `origin` is the pan offset at begin.
    Canvas { origin: Point },
    /// Moving the selected widget; `origin_center` is its center at begin.
    Widget { id: WidgetId, origin_center: Point },
    /// Resizing through a corner handle.
    Handle { corner: Corner },
}

/// An in-flight pan gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    /// Target resolved at begin.
    pub target: Target,
    /// Screen location at begin, used for the tap fallback.
    pub start: Point,
    /// Whether the translation has ever exceeded the drag threshold.
    pub moved: bool,
    pub kind: PanKind,
}

/// Gesture state carried between events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pub pan: Option<PanGesture>,
    /// Zoom captured when the current pinch began.
    pub pinch_baseline: Option<Zoom>,
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pan.is_none() && self.pinch_baseline.is_none()
    }
}

/// What a drag-and-drop session carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPayload {
    /// A palette blueprint.
    Blueprint(WidgetBlueprint),
    /// Anything else, described by its type name.
    Foreign(String),
}

/// A drop in progress or being performed.
#[derive(Debug, Clone, PartialEq)]
pub struct DropSession {
    /// Drop location in screen space.
    pub location: Point,
    /// Whether the drag started inside this app.
    pub local: bool,
    pub payload: Option<DropPayload>,
}

/// Outcome proposed for a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOperation {
    Copy,
    Cancel,
}
