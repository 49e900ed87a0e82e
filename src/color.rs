//! Colors and color models.
//!
//! [`Color`] is the device-independent color value passed between generic
//! image code and concrete pixel stores. A [`ColorModel`] pairs a
//! [`PixelDescriptor`] with the function that converts an arbitrary
//! [`Color`] into the model's native representation.
//!
//! Alpha follows the premultiplied convention unless a variant says
//! otherwise: a half-transparent red is `Rgba8 { r: 128, g: 0, b: 0, a: 128 }`.

use core::fmt;

use rgb::alt::{BGR, BGRA};
use rgb::{Rgb, Rgba};

use crate::descriptor::PixelDescriptor;

/// A single color value in one of several representations.
///
/// The variant is the representation tag: converters match on it to
/// short-circuit colors that are already in their native form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Color {
    /// 8-bit RGBA, alpha-premultiplied. The canonical representation.
    Rgba8(Rgba<u8>),
    /// 8-bit RGBA with straight (non-premultiplied) alpha.
    Nrgba8(Rgba<u8>),
    /// 16-bit RGBA, alpha-premultiplied.
    Rgba16(Rgba<u16>),
    /// 8-bit gray, opaque.
    Gray8(u8),
    /// 16-bit gray, opaque.
    Gray16(u16),
    /// 8-bit blue, green, red triple, opaque.
    Bgr8(BGR<u8>),
    /// 8-bit BGRA, alpha-premultiplied. Native form of [`ColorModel::BGR32`].
    Bgra8(BGRA<u8>),
}

impl Color {
    /// Fully transparent black. Returned for reads outside an image.
    pub const TRANSPARENT: Self = Self::Rgba8(Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    });

    /// Opaque 8-bit color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba8(Rgba { r, g, b, a: 0xff })
    }

    /// Premultiplied 8-bit color.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgba8(Rgba { r, g, b, a })
    }

    /// Full-precision premultiplied channels, each in `0..=0xffff`.
    ///
    /// 8-bit values are widened by replicating the byte (`0xab` becomes
    /// `0xabab`) so that `0xff` maps to `0xffff`. Straight alpha is
    /// premultiplied.
    pub fn to_rgba16(self) -> Rgba<u16> {
        match self {
            Self::Rgba8(c) => Rgba {
                r: widen(c.r),
                g: widen(c.g),
                b: widen(c.b),
                a: widen(c.a),
            },
            Self::Nrgba8(c) => {
                let a = u32::from(widen(c.a));
                let mul = |v: u8| (u32::from(widen(v)) * a / 0xffff) as u16;
                Rgba {
                    r: mul(c.r),
                    g: mul(c.g),
                    b: mul(c.b),
                    a: a as u16,
                }
            }
            Self::Rgba16(c) => c,
            Self::Gray8(y) => {
                let y = widen(y);
                Rgba {
                    r: y,
                    g: y,
                    b: y,
                    a: 0xffff,
                }
            }
            Self::Gray16(y) => Rgba {
                r: y,
                g: y,
                b: y,
                a: 0xffff,
            },
            Self::Bgr8(c) => Rgba {
                r: widen(c.r),
                g: widen(c.g),
                b: widen(c.b),
                a: 0xffff,
            },
            Self::Bgra8(c) => Rgba {
                r: widen(c.r),
                g: widen(c.g),
                b: widen(c.b),
                a: widen(c.a),
            },
        }
    }

    /// Canonical 8-bit premultiplied RGBA.
    ///
    /// `Rgba8` passes through untouched; everything else is reduced from
    /// [`to_rgba16`](Self::to_rgba16) by dropping the low byte.
    pub fn to_rgba8(self) -> Rgba<u8> {
        if let Self::Rgba8(c) = self {
            return c;
        }
        let c = self.to_rgba16();
        Rgba {
            r: narrow(c.r),
            g: narrow(c.g),
            b: narrow(c.b),
            a: narrow(c.a),
        }
    }

    /// Whether the color is fully opaque.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.to_rgba16().a == 0xffff
    }
}

impl From<Rgba<u8>> for Color {
    fn from(c: Rgba<u8>) -> Self {
        Self::Rgba8(c)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(c: Rgb<u8>) -> Self {
        Self::rgb(c.r, c.g, c.b)
    }
}

impl From<BGR<u8>> for Color {
    fn from(c: BGR<u8>) -> Self {
        Self::Bgr8(c)
    }
}

impl From<BGRA<u8>> for Color {
    fn from(c: BGRA<u8>) -> Self {
        Self::Bgra8(c)
    }
}

#[inline]
fn widen(v: u8) -> u16 {
    u16::from(v) * 0x101
}

#[inline]
fn narrow(v: u16) -> u8 {
    (v >> 8) as u8
}

// ---------------------------------------------------------------------------
// ColorModel
// ---------------------------------------------------------------------------

/// Describes a pixel store's native color encoding.
///
/// Generic code uses [`convert`](Self::convert) to bring a color into the
/// store's representation before comparing or writing it, and
/// [`descriptor`](Self::descriptor) to learn the memory layout.
///
/// ```
/// use zenbgr::{Color, ColorModel};
/// use zenbgr::rgb::alt::BGRA;
///
/// let c = ColorModel::BGR32.convert(Color::rgb(10, 20, 30));
/// assert_eq!(c, Color::Bgra8(BGRA { b: 30, g: 20, r: 10, a: 255 }));
/// ```
#[derive(Clone, Copy)]
pub struct ColorModel {
    name: &'static str,
    descriptor: PixelDescriptor,
    convert: fn(Color) -> Color,
}

impl ColorModel {
    /// Canonical 8-bit premultiplied RGBA.
    pub const RGBA8: Self = Self {
        name: "RGBA8",
        descriptor: PixelDescriptor::RGBA8,
        convert: rgba8_model,
    };

    /// BGR32 surfaces: blue, green, red and a padding byte, always opaque.
    ///
    /// Converted colors come back as [`Color::Bgra8`] with the input alpha
    /// preserved; the store itself drops alpha on write.
    pub const BGR32: Self = Self {
        name: "BGR32",
        descriptor: PixelDescriptor::BGRX8,
        convert: bgr32_model,
    };

    /// Build a custom color model.
    pub const fn new(
        name: &'static str,
        descriptor: PixelDescriptor,
        convert: fn(Color) -> Color,
    ) -> Self {
        Self {
            name,
            descriptor,
            convert,
        }
    }

    /// Short identifier, e.g. `"BGR32"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Memory layout of the native representation.
    #[inline]
    pub fn descriptor(&self) -> PixelDescriptor {
        self.descriptor
    }

    /// Convert `c` into this model's native representation.
    #[inline]
    pub fn convert(&self, c: Color) -> Color {
        (self.convert)(c)
    }
}

impl PartialEq for ColorModel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.descriptor == other.descriptor
    }
}

impl Eq for ColorModel {}

impl fmt::Debug for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorModel")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

fn rgba8_model(c: Color) -> Color {
    Color::Rgba8(c.to_rgba8())
}

fn bgr32_model(c: Color) -> Color {
    if let Color::Bgra8(_) = c {
        return c;
    }
    let c = c.to_rgba16();
    Color::Bgra8(BGRA {
        b: narrow(c.b),
        g: narrow(c.g),
        r: narrow(c.r),
        a: narrow(c.a),
    })
}
