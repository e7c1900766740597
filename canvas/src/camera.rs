#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::geometry::{Point, Rect, Size};

/// Per-axis scale factor applied to the canvas.
///
/// Gestures only ever produce uniform zoom, but both axes are stored and
/// validated independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    pub x: f64,
    pub y: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl Zoom {
    #[must_use]
    pub fn uniform(scale: f64) -> Self {
        Self { x: scale, y: scale }
    }

    /// This zoom multiplied by `scale` on both axes.
    #[must_use]
    pub fn scaled_by(self, scale: f64) -> Self {
        Self { x: self.x * scale, y: self.y * scale }
    }

    /// Whether both axes lie strictly between `1 / max_zoom_out` and `1 / max_zoom_in`.
    #[must_use]
    pub fn within(self, max_zoom_out: f64, max_zoom_in: f64) -> bool {
        let lower = 1.0 / max_zoom_out;
        let upper = 1.0 / max_zoom_in;
        let ok = |s: f64| s > lower && s < upper;
        ok(self.x) && ok(self.y)
    }
}

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan` is the content offset in canvas units: a canvas point `c` appears
/// on screen at `(c + pan) * zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub pan: Point,
    pub zoom: Zoom,
}

impl Camera {
    /// Convert a screen-space point to canvas coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point {
            x: screen.x / self.zoom.x - self.pan.x,
            y: screen.y / self.zoom.y - self.pan.y,
        }
    }

    /// Convert a canvas-space point to screen coordinates.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point {
            x: (canvas.x + self.pan.x) * self.zoom.x,
            y: (canvas.y + self.pan.y) * self.zoom.y,
        }
    }

    /// Convert a screen-space translation to a canvas-space translation.
    #[must_use]
    pub fn screen_delta_to_canvas(&self, delta: Point) -> Point {
        Point::new(delta.x / self.zoom.x, delta.y / self.zoom.y)
    }

    /// Convert a canvas rectangle to screen space.
    #[must_use]
    pub fn canvas_rect_to_screen(&self, rect: Rect) -> Rect {
        let origin = self.canvas_to_screen(rect.origin());
        Rect::new(origin.x, origin.y, rect.width * self.zoom.x, rect.height * self.zoom.y)
    }

    /// A size fixed in screen pixels, expressed in canvas units.
    #[must_use]
    pub fn screen_size_to_canvas(&self, side_px: f64) -> Size {
        Size::new(side_px / self.zoom.x, side_px / self.zoom.y)
    }
}
