//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// How far out the canvas may zoom: the scale must stay above `1 / MAX_ZOOM_OUT`.
pub const MAX_ZOOM_OUT: f64 = 4.0;

/// How far in the canvas may zoom: the scale must stay below `1 / MAX_ZOOM_IN`.
pub const MAX_ZOOM_IN: f64 = 0.5;

// ── Widgets ─────────────────────────────────────────────────────

/// Smallest width a widget can be resized to, in canvas units.
pub const MIN_WIDGET_WIDTH: f64 = 60.0;

/// Smallest height a widget can be resized to, in canvas units.
pub const MIN_WIDGET_HEIGHT: f64 = 60.0;

/// Size given to a widget dropped from the palette without an explicit size.
pub const DEFAULT_WIDGET_SIZE: f64 = 200.0;

// ── Gestures ────────────────────────────────────────────────────

/// Screen-space travel a pan must exceed before it counts as a drag.
pub const DRAG_THRESHOLD_PX: f64 = 8.0;

// ── Affordances ─────────────────────────────────────────────────

/// Base diameter of a transform handle ring, in screen pixels.
pub const HANDLE_SIZE_PX: f64 = 44.0;

/// Diameter of the delete button, in screen pixels.
pub const DELETE_BUTTON_SIZE_PX: f64 = 44.0;

/// Gap between the widget's top edge and the delete button, in button heights.
pub const DELETE_BUTTON_GAP: f64 = 1.2;

/// Stroke width of the outer handle ring, in screen pixels.
pub const HANDLE_RING_WIDTH_PX: f64 = 8.0;
