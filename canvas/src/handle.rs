//! Corner transform handles and the resize algorithm.
//!
//! A selected widget carries four handles, one per [`Corner`]. Handles hold
//! the target widget's id, never the widget itself, and look it up in the
//! [`WidgetStore`] on every access. When the lookup fails the widget is gone
//! and the handle reports itself orphaned so its owner can drop it.
//!
//! Dragging a handle moves the two edges adjacent to its corner and keeps the
//! opposite corner fixed. Each axis is clamped to the minimum size on its
//! own, so a drag that violates only the minimum height still resizes width
//! freely. While clamped the handle keeps following the pointer; the frame
//! simply stops shrinking, and the handle snaps back to the corner when the
//! drag ends.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use tracing::trace;

use crate::camera::Camera;
use crate::doc::WidgetStore;
use crate::geometry::{Corner, Point, Rect, Size};
use crate::widget::WidgetId;

/// Drag state of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlePhase {
    #[default]
    Idle,
    Dragging,
}

/// One draggable corner marker bound to a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformHandle {
    corner: Corner,
    target: WidgetId,
    center: Point,
    phase: HandlePhase,
}

impl TransformHandle {
    /// A handle sitting on `corner` of `frame`.
    #[must_use]
    pub fn new(target: WidgetId, corner: Corner, frame: Rect) -> Self {
        Self { corner, target, center: frame.corner(corner), phase: HandlePhase::Idle }
    }

    /// One handle per corner of `frame`, in [`Corner::ALL`] order.
    #[must_use]
    pub fn for_widget(target: WidgetId, frame: Rect) -> Vec<Self> {
        Corner::ALL.iter().map(|&c| Self::new(target, c, frame)).collect()
    }

    #[must_use]
    pub fn corner(&self) -> Corner {
        self.corner
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
    pub fn phase(&self) -> HandlePhase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == HandlePhase::Dragging
    }

    pub fn begin_drag(&mut self) {
        self.phase = HandlePhase::Dragging;
    }

    /// Leave the dragging state and snap back onto the corner.
    /// Returns false if the target widget no longer exists.
    pub fn end_drag(&mut self, widgets: &WidgetStore) -> bool {
        self.phase = HandlePhase::Idle;
        self.update_position(widgets)
    }

    /// Re-center on the target's corner. Returns false if the target widget
    /// no longer exists, in which case the handle should be discarded.
    pub fn update_position(&mut self, widgets: &WidgetStore) -> bool {
        let Some(widget) = widgets.get(&self.target) else {
            trace!(target_id = %self.target, corner = ?self.corner, "handle orphaned");
            return false;
        };
        self.center = widget.frame().corner(self.corner);
        true
    }

    /// Follow the pointer to `point` (canvas space) and resize the target.
    ///
    /// Returns the target's new frame, or `None` if the target is gone.
    pub fn drag_to(&mut self, point: Point, widgets: &mut WidgetStore, min: Size) -> Option<Rect> {
        let widget = widgets.get_mut(&self.target)?;
        self.center = point;
        let frame = resized_frame(widget.frame(), self.corner, point, min);
        widget.set_frame(frame);
        Some(frame)
    }

    /// Square hit area around the handle, sized in screen pixels.
    #[must_use]
    pub fn bounds(&self, camera: &Camera, size_px: f64) -> Rect {
        Rect::centered(self.center, camera.screen_size_to_canvas(size_px))
    }
}

/// Resize `frame` by dragging `corner` to `point`, keeping the opposite
/// corner fixed and never going below `min` on either axis.
#[must_use]
pub fn resized_frame(frame: Rect, corner: Corner, point: Point, min: Size) -> Rect {
    let (min_x, max_x) = if corner.is_left() {
        let fixed = frame.max_x();
        let x = if fixed - point.x < min.width { fixed - min.width } else { point.x };
        (x, fixed)
    } else {
        let fixed = frame.min_x();
        let x = if point.x - fixed < min.width { fixed + min.width } else { point.x };
        (fixed, x)
    };

    let (min_y, max_y) = if corner.is_top() {
        let fixed = frame.max_y();
        let y = if fixed - point.y < min.height { fixed - min.height } else { point.y };
        (y, fixed)
    } else {
        let fixed = frame.min_y();
        let y = if point.y - fixed < min.height { fixed + min.height } else { point.y };
        (fixed, y)
    };

    Rect::from_bounds(min_x, min_y, max_x, max_y)
}
