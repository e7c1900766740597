//! Engine limits and styling, passed into [`crate::engine::Engine::with_config`].
//!
//! Nothing in the engine reads process-wide globals for sizes or colors;
//! everything tunable lives here so hosts can override it per canvas.

use crate::consts::{
    DEFAULT_WIDGET_SIZE, DELETE_BUTTON_GAP, DELETE_BUTTON_SIZE_PX, DRAG_THRESHOLD_PX, HANDLE_RING_WIDTH_PX,
    HANDLE_SIZE_PX, MAX_ZOOM_IN, MAX_ZOOM_OUT, MIN_WIDGET_HEIGHT, MIN_WIDGET_WIDTH,
};
use crate::geometry::Size;

/// Colors used by the display list, as CSS hex strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Accent color: selected widgets and handle rings.
    pub main: String,
    /// Idle widget background.
    pub grey: String,
    /// Canvas background and the cross on the delete button.
    pub background: String,
    /// Delete button fill.
    pub danger: String,
    /// Inner highlight ring on handles.
    pub highlight: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            main: "#0E99C4".into(),
            grey: "#292929".into(),
            background: "#F9F9F9".into(),
            danger: "#FF3B30".into(),
            highlight: "#FFFFFF".into(),
        }
    }
}

/// Numeric limits for one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub min_widget_width: f64,
    pub min_widget_height: f64,
    pub max_zoom_out: f64,
    pub max_zoom_in: f64,
    pub default_widget_size: Size,
    pub drag_threshold_px: f64,
    pub handle_size_px: f64,
    pub handle_ring_width_px: f64,
    pub delete_button_size_px: f64,
    pub delete_button_gap: f64,
    pub style: Style,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_widget_width: MIN_WIDGET_WIDTH,
            min_widget_height: MIN_WIDGET_HEIGHT,
            max_zoom_out: MAX_ZOOM_OUT,
            max_zoom_in: MAX_ZOOM_IN,
            default_widget_size: Size::square(DEFAULT_WIDGET_SIZE),
            drag_threshold_px: DRAG_THRESHOLD_PX,
            handle_size_px: HANDLE_SIZE_PX,
            handle_ring_width_px: HANDLE_RING_WIDTH_PX,
            delete_button_size_px: DELETE_BUTTON_SIZE_PX,
            delete_button_gap: DELETE_BUTTON_GAP,
            style: Style::default(),
        }
    }
}

impl CanvasConfig {
    /// Minimum widget size as a [`Size`].
    #[must_use]
    pub fn min_widget_size(&self) -> Size {
        Size::new(self.min_widget_width, self.min_widget_height)
    }
}
