use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in CSS pixels, origin at the top-left of the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
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

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grows either dimension up to `min` if it falls short.
    #[must_use]
    pub fn at_least(self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }
}

/// Axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Builds a rectangle from its four edges.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(Point::new(left, top), Size::new(right - left, bottom - top))
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.origin.x
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.origin.y
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }
}

/// Visible area panels are kept inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

impl Viewport {
    /// Non-finite or negative dimensions are treated as zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Clamps a top-left corner so a box of `size` stays inside the viewport.
    ///
    /// When the box is larger than the viewport on an axis, that axis clamps at zero.
    #[must_use]
    pub fn clamp_origin(&self, origin: Point, size: Size) -> Point {
        Point::new(
            clamp_axis(origin.x, self.width - size.width),
            clamp_axis(origin.y, self.height - size.height),
        )
    }

    #[must_use]
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.left() >= 0.0
            && rect.top() >= 0.0
            && rect.right() <= self.width
            && rect.bottom() <= self.height
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    let value = if value.is_finite() { value } else { 0.0 };
    value.min(max).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_box_inside() {
        let viewport = Viewport::new(1000.0, 600.0);
        let size = Size::new(300.0, 200.0);
        assert_eq!(
            viewport.clamp_origin(Point::new(-50.0, 900.0), size),
            Point::new(0.0, 400.0)
        );
        assert_eq!(
            viewport.clamp_origin(Point::new(120.0, 30.0), size),
            Point::new(120.0, 30.0)
        );
    }

    #[test]
    fn oversized_box_clamps_at_zero() {
        let viewport = Viewport::new(200.0, 100.0);
        let origin = viewport.clamp_origin(Point::new(50.0, 50.0), Size::new(300.0, 200.0));
        assert_eq!(origin, Point::ORIGIN);
    }

    #[test]
    fn viewport_sanitizes_dimensions() {
        let viewport = Viewport::new(f64::NAN, -10.0);
        assert_eq!(viewport.size(), Size::new(0.0, 0.0));
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::from_edges(10.0, 20.0, 110.0, 220.0);
        assert_eq!(rect.size, Size::new(100.0, 200.0));
        assert_eq!(rect.bottom_right(), Point::new(110.0, 220.0));
    }
}
