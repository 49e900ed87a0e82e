//! Generic image capability traits.
//!
//! Any pixel store that implements [`Image`] (and [`ImageMut`] for writes)
//! can be driven by the algorithms in [`draw`](crate::draw) without knowing
//! its memory layout.
//!
//! Pixel access is total: implementations return
//! [`Color::TRANSPARENT`] for reads outside [`bounds`](Image::bounds) and
//! ignore writes outside it. They must not panic on any coordinate.

use crate::color::{Color, ColorModel};
use crate::geometry::Rectangle;

/// Read access to a rectangular grid of colors.
pub trait Image {
    /// Domain of valid coordinates. May have a non-zero origin.
    fn bounds(&self) -> Rectangle;

    /// Native color encoding of this image.
    fn color_model(&self) -> ColorModel;

    /// Color of the pixel at `(x, y)`, or [`Color::TRANSPARENT`] outside
    /// [`bounds`](Self::bounds).
    fn color_at(&self, x: i32, y: i32) -> Color;

    /// Whether every pixel is fully opaque.
    ///
    /// The default scans the whole image; stores that cannot hold alpha
    /// should answer directly.
    fn is_opaque(&self) -> bool {
        let r = self.bounds();
        (r.min.y..r.max.y).all(|y| (r.min.x..r.max.x).all(|x| self.color_at(x, y).is_opaque()))
    }
}

/// Write access to a rectangular grid of colors.
pub trait ImageMut: Image {
    /// Set the pixel at `(x, y)`. Does nothing outside
    /// [`bounds`](Image::bounds).
    fn set_color(&mut self, x: i32, y: i32, c: Color);
}

impl<T: Image + ?Sized> Image for &T {
    fn bounds(&self) -> Rectangle {
        (**self).bounds()
    }

    fn color_model(&self) -> ColorModel {
        (**self).color_model()
    }

    fn color_at(&self, x: i32, y: i32) -> Color {
        (**self).color_at(x, y)
    }

    fn is_opaque(&self) -> bool {
        (**self).is_opaque()
    }
}

impl<T: Image + ?Sized> Image for &mut T {
    fn bounds(&self) -> Rectangle {
        (**self).bounds()
    }

    fn color_model(&self) -> ColorModel {
        (**self).color_model()
    }

    fn color_at(&self, x: i32, y: i32) -> Color {
        (**self).color_at(x, y)
    }

    fn is_opaque(&self) -> bool {
        (**self).is_opaque()
    }
}

impl<T: ImageMut + ?Sized> ImageMut for &mut T {
    fn set_color(&mut self, x: i32, y: i32, c: Color) {
        (**self).set_color(x, y, c);
    }
}

/// A single-color image covering the whole coordinate space.
///
/// Its bounds run from `i32::MIN` to `i32::MAX`, so they contain every
/// pixel of any [`Rectangle`]. Only the column `x == i32::MAX` and the row
/// `y == i32::MAX` fall outside. Useful as a source for
/// [`draw::copy`](crate::draw::copy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Uniform(pub Color);

impl Image for Uniform {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX)
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::RGBA8
    }

    fn color_at(&self, x: i32, y: i32) -> Color {
        if x == i32::MAX || y == i32::MAX {
            return Color::TRANSPARENT;
        }
        self.0
    }

    fn is_opaque(&self) -> bool {
        self.0.is_opaque()
    }
}
