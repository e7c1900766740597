#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;

use crate::camera::Camera;
use crate::doc::WidgetStore;
use crate::geometry::{Point, Rect, Size};
use crate::widget::WidgetId;

/// The delete button shown above the selected widget.
///
/// Its position is derived from the target's frame: horizontally centered,
/// floating `gap` button-heights above the top edge. Its size is fixed in
/// screen pixels, so in canvas units it shrinks as the zoom grows.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteAffordance {
    target: WidgetId,
    center: Point,
    size: Size,
}

impl DeleteAffordance {
    #[must_use]
    pub fn new(target: WidgetId, frame: Rect, camera: &Camera, size_px: f64, gap: f64) -> Self {
        let size = camera.screen_size_to_canvas(size_px);
        Self { target, center: position(frame, size, gap), size }
    }

    #[must_use]
    pub fn target(&self) -> WidgetId {
        self.target
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.center, self.size)
    }

    /// Recompute size and position from the target's current frame.
    /// Returns false if the target widget no longer exists.
    pub fn update_position(&mut self, widgets: &WidgetStore, camera: &Camera, size_px: f64, gap: f64) -> bool {
        let Some(widget) = widgets.get(&self.target) else {
            return false;
        };
        self.size = camera.screen_size_to_canvas(size_px);
        self.center = position(widget.frame(), self.size, gap);
        true
    }
}

/// Center of a button of `size` placed above `frame`.
#[must_use]
pub fn position(frame: Rect, size: Size, gap: f64) -> Point {
    Point::new(frame.mid_x(), frame.min_y() - size.height * gap + size.height / 2.0)
}
