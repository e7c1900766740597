//! Plane geometry shared by every other module: points, sizes, rectangles
//! and the four rectangle corners.
//!
//! Everything here is a plain `Copy` value with no state. Rectangles are
//! stored as origin + size (the same `{x, y, width, height}` shape that is
//! persisted), with edge accessors for the min/max view.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length when the point is read as a vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }
}

/// One of the four corners of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in the order handles are created.
    pub const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

    /// Whether this corner sits on the left edge (so dragging it moves `min_x`).
    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Whether this corner sits on the top edge (so dragging it moves `min_y`).
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// Unit direction pointing away from the rectangle's interior.
    #[must_use]
    pub fn outward(self) -> Point {
        let x = if self.is_left() { -1.0 } else { 1.0 };
        let y = if self.is_top() { -1.0 } else { 1.0 };
        Point::new(x, y)
    }
}

/// An axis-aligned rectangle in origin + size form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanning `top_left` to `bottom_right`.
    ///
    /// Width and height are `max - min` and are not clamped: the caller must
    /// order the corners.
    #[must_use]
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self::from_bounds(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Rectangle from its four edges. Negative extents are passed through.
    #[must_use]
    pub fn from_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { x: min_x, y: min_y, width: max_x - min_x, height: max_y - min_y }
    }

    /// Rectangle of `size` whose center is `center`.
    #[must_use]
    pub fn centered(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// The same rectangle moved so its center lands on `center`.
    #[must_use]
    pub fn with_center(&self, center: Point) -> Self {
        Self::centered(center, self.size())
    }

    /// The point at `which` corner.
    #[must_use]
    pub fn corner(&self, which: Corner) -> Point {
        match which {
            Corner::TopLeft => Point::new(self.min_x(), self.min_y()),
            Corner::TopRight => Point::new(self.max_x(), self.min_y()),
            Corner::BottomLeft => Point::new(self.min_x(), self.max_y()),
            Corner::BottomRight => Point::new(self.max_x(), self.max_y()),
        }
    }

    /// All four corners in [`Corner::ALL`] order.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        Corner::ALL.map(|c| self.corner(c))
    }

    /// Whether `pt` lies inside or on the edge of this rectangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min_x() && pt.x <= self.max_x() && pt.y >= self.min_y() && pt.y <= self.max_y()
    }
}

/// Free-function form of [`Rect::corner`].
#[must_use]
pub fn corner(rect: Rect, which: Corner) -> Point {
    rect.corner(which)
}
