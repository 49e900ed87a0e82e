//! Integer points and half-open rectangles in pixel space.

use core::fmt;
use core::ops::{Add, Sub};

/// A pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this point lies inside `r` (min inclusive, max exclusive).
    #[inline]
    pub const fn in_rect(self, r: Rectangle) -> bool {
        r.min.x <= self.x && self.x < r.max.x && r.min.y <= self.y && self.y < r.max.y
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned rectangle with an inclusive `min` and exclusive `max` corner.
///
/// A rectangle is well-formed when `min.x <= max.x` and `min.y <= max.y`.
/// [`Rectangle::new`] always produces a well-formed rectangle; the public
/// fields allow building others, which then behave as empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub min: Point,
    pub max: Point,
}

impl Rectangle {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Build a rectangle from two corners, swapping coordinates if needed.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Rectangle `[0, 0) - (width, height)`.
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// Width in pixels; zero for malformed rectangles.
    #[inline]
    pub const fn width(&self) -> u32 {
        if self.max.x > self.min.x {
            self.max.x.abs_diff(self.min.x)
        } else {
            0
        }
    }

    /// Height in pixels; zero for malformed rectangles.
    #[inline]
    pub const fn height(&self) -> u32 {
        if self.max.y > self.min.y {
            self.max.y.abs_diff(self.min.y)
        } else {
            0
        }
    }

    /// `(width, height)`.
    #[inline]
    pub const fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.in_rect(*self)
    }

    /// Largest rectangle contained in both `self` and `other`.
    ///
    /// Returns [`Rectangle::ZERO`] when they don't overlap.
    pub fn intersect(&self, other: Rectangle) -> Rectangle {
        let r = Rectangle {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Rectangle::ZERO } else { r }
    }

    /// Move the rectangle by `delta`.
    #[inline]
    pub fn translate(&self, delta: Point) -> Rectangle {
        Rectangle {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
