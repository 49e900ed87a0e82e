//! BGR32 pixel store.
//!
//! [`Bgr32`] wraps a byte buffer laid out as rows of 4-byte pixels in
//! `[B, G, R, X]` order, where `X` is padding that is never read or
//! written. This is the layout used by most 32-bit framebuffers and
//! capture surfaces on little-endian machines (XRGB8888 / BGR0).

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use imgref::{ImgRef, ImgVec};
use rgb::Rgba;
use rgb::alt::BGR;

use crate::color::{Color, ColorModel};
use crate::descriptor::PixelDescriptor;
use crate::error::BufferError;
use crate::geometry::{Point, Rectangle};
use crate::image::{Image, ImageMut};
use crate::logging;

/// Bytes per pixel.
const BPP: usize = 4;

/// An image backed by a BGR32 byte buffer.
///
/// The pixel at `(x, y)` starts at byte
/// `(y - bounds.min.y) * stride + (x - bounds.min.x) * 4`.
///
/// `B` is the backing store: an owned `Vec<u8>`, a borrowed `&[u8]` for
/// read-only access, or `&mut [u8]` to draw into memory owned elsewhere
/// (a mapped framebuffer, a capture surface).
///
/// Reads always report an opaque color; alpha is dropped on write.
///
/// ```
/// use zenbgr::{Bgr32, Color, Rectangle};
///
/// let mut pix = [0u8; 16];
/// let mut img = Bgr32::new(&mut pix[..], Rectangle::from_size(2, 2), 8)?;
/// img.set_color(1, 1, Color::rgb(10, 20, 30));
/// assert_eq!(img.color_at(1, 1), Color::rgb(10, 20, 30));
/// assert_eq!(&pix[12..16], &[30, 20, 10, 0]);
/// # Ok::<(), zenbgr::BufferError>(())
/// ```
#[derive(Clone)]
pub struct Bgr32<B = Vec<u8>> {
    pix: B,
    rect: Rectangle,
    stride: usize,
}

impl Bgr32<Vec<u8>> {
    /// Allocate a zero-filled buffer covering `rect` with tightly packed rows.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if `rect` is malformed or
    /// its byte size overflows.
    pub fn with_bounds(rect: Rectangle) -> Result<Self, BufferError> {
        if is_malformed(rect) {
            return Err(BufferError::InvalidDimensions);
        }
        let stride = PixelDescriptor::BGRX8
            .min_stride(rect.width())
            .ok_or(BufferError::InvalidDimensions)?;
        // Allocations are capped at isize::MAX bytes.
        let len = stride
            .checked_mul(rect.height() as usize)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(BufferError::InvalidDimensions)?;
        Ok(Self {
            pix: vec![0u8; len],
            rect,
            stride,
        })
    }

    /// Copy an RGBA image into a new BGR32 buffer with origin `(0, 0)`.
    ///
    /// Alpha is dropped, exactly as [`set_color`](Bgr32::set_color) does.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if the image is wider or
    /// taller than `i32::MAX`.
    pub fn from_rgba_img(img: ImgRef<'_, Rgba<u8>>) -> Result<Self, BufferError> {
        let width = i32::try_from(img.width()).map_err(|_| BufferError::InvalidDimensions)?;
        let height = i32::try_from(img.height()).map_err(|_| BufferError::InvalidDimensions)?;
        let mut out = Self::with_bounds(Rectangle::new(0, 0, width, height))?;
        if out.rect.is_empty() {
            return Ok(out);
        }
        let stride = out.stride;
        for (row, dst) in img.rows().zip(out.pix.chunks_exact_mut(stride)) {
            for (p, px) in row.iter().zip(dst.chunks_exact_mut(BPP)) {
                px[0] = p.b;
                px[1] = p.g;
                px[2] = p.r;
            }
        }
        Ok(out)
    }
}

impl<B: AsRef<[u8]>> Bgr32<B> {
    /// Wrap `pix` after checking that every pixel in `rect` fits.
    ///
    /// # Errors
    ///
    /// - [`BufferError::StrideTooSmall`] if `stride < 4 * rect.width()`.
    /// - [`BufferError::InsufficientData`] if `pix` ends before the last
    ///   pixel of the last row.
    /// - [`BufferError::InvalidDimensions`] if `rect` is malformed or the
    ///   required size overflows.
    pub fn new(pix: B, rect: Rectangle, stride: usize) -> Result<Self, BufferError> {
        if let Err(e) = validate(pix.as_ref().len(), rect, stride) {
            logging::debug!("rejecting BGR32 buffer {rect} stride {stride}: {e}");
            return Err(e);
        }
        Ok(Self { pix, rect, stride })
    }

    /// Wrap `pix` without validation.
    ///
    /// Accessing a pixel that lies inside `rect` but outside `pix` panics
    /// instead of reading out of range. Prefer [`new`](Self::new) unless
    /// the layout is already known to be consistent.
    pub fn from_raw_parts(pix: B, rect: Rectangle, stride: usize) -> Self {
        if cfg!(feature = "log") {
            if let Err(e) = validate(pix.as_ref().len(), rect, stride) {
                logging::warn!("inconsistent BGR32 layout {rect} stride {stride}: {e}");
            }
        }
        Self { pix, rect, stride }
    }

    /// Domain of valid coordinates.
    #[inline]
    pub fn bounds(&self) -> Rectangle {
        self.rect
    }

    /// Always [`ColorModel::BGR32`].
    #[inline]
    pub fn color_model(&self) -> ColorModel {
        ColorModel::BGR32
    }

    /// Byte distance between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw byte offset of the pixel at `(x, y)`.
    ///
    /// No bounds check: coordinates outside [`bounds`](Self::bounds) yield
    /// offsets that may be negative or past the end of the buffer.
    #[inline]
    pub fn pixel_offset(&self, x: i32, y: i32) -> isize {
        let dy = y as isize - self.rect.min.y as isize;
        let dx = x as isize - self.rect.min.x as isize;
        dy.wrapping_mul(self.stride as isize)
            .wrapping_add(dx.wrapping_mul(BPP as isize))
    }

    /// Offset of an in-bounds pixel.
    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !Point::new(x, y).in_rect(self.rect) {
            return None;
        }
        let dy = y.abs_diff(self.rect.min.y) as usize;
        let dx = x.abs_diff(self.rect.min.x) as usize;
        Some(dy * self.stride + dx * BPP)
    }

    /// Color at `(x, y)`: stored blue, green and red with opaque alpha, or
    /// [`Color::TRANSPARENT`] outside the bounds.
    pub fn color_at(&self, x: i32, y: i32) -> Color {
        match self.offset(x, y) {
            Some(n) => {
                let p = &self.pix.as_ref()[n..n + 3];
                Color::Rgba8(Rgba {
                    r: p[2],
                    g: p[1],
                    b: p[0],
                    a: 0xff,
                })
            }
            None => Color::TRANSPARENT,
        }
    }

    /// Stored channels at `(x, y)`, or `None` outside the bounds.
    pub fn bgr_at(&self, x: i32, y: i32) -> Option<BGR<u8>> {
        let n = self.offset(x, y)?;
        let p = &self.pix.as_ref()[n..n + 3];
        Some(BGR {
            b: p[0],
            g: p[1],
            r: p[2],
        })
    }

    /// Pixel bytes of row `y` without trailing padding, or `None` outside
    /// the bounds.
    pub fn row(&self, y: i32) -> Option<&[u8]> {
        let start = self.offset(self.rect.min.x, y)?;
        let len = self.rect.width() as usize * BPP;
        Some(&self.pix.as_ref()[start..start + len])
    }

    /// The whole backing buffer, padding included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.pix.as_ref()
    }

    /// Give back the backing store.
    #[inline]
    pub fn into_inner(self) -> B {
        self.pix
    }

    /// Borrowed view of `r ∩ bounds`.
    ///
    /// The view shares pixels and stride with `self` and keeps the same
    /// coordinate space: `view.color_at(x, y) == self.color_at(x, y)` for
    /// every `(x, y)` in the view's bounds.
    pub fn sub_image(&self, r: Rectangle) -> Bgr32<&[u8]> {
        let r = r.intersect(self.rect);
        let pix = self.pix.as_ref();
        let start = match self.offset(r.min.x, r.min.y) {
            Some(n) if !r.is_empty() => n.min(pix.len()),
            _ => pix.len(),
        };
        Bgr32 {
            pix: &pix[start..],
            rect: r,
            stride: self.stride,
        }
    }

    /// Copy into a tightly packed RGBA image. Alpha is always opaque.
    pub fn to_rgba_img(&self) -> ImgVec<Rgba<u8>> {
        let (width, height) = self.rect.size();
        let mut out = Vec::with_capacity(width as usize * height as usize);
        for y in self.rect.min.y..self.rect.max.y {
            if let Some(row) = self.row(y) {
                out.extend(row.chunks_exact(BPP).map(|p| Rgba {
                    r: p[2],
                    g: p[1],
                    b: p[0],
                    a: 0xff,
                }));
            }
        }
        ImgVec::new(out, width as usize, height as usize)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Bgr32<B> {
    /// Store `c` at `(x, y)`. Alpha is dropped and the padding byte left as
    /// is. Does nothing outside the bounds.
    pub fn set_color(&mut self, x: i32, y: i32, c: Color) {
        let Some(n) = self.offset(x, y) else {
            return;
        };
        let c = c.to_rgba8();
        let p = &mut self.pix.as_mut()[n..n + 3];
        p[0] = c.b;
        p[1] = c.g;
        p[2] = c.r;
    }

    /// Store an already BGR-ordered triple at `(x, y)` without any color
    /// conversion. Does nothing outside the bounds.
    pub fn set_bgr(&mut self, x: i32, y: i32, c: BGR<u8>) {
        let Some(n) = self.offset(x, y) else {
            return;
        };
        let p = &mut self.pix.as_mut()[n..n + 3];
        p[0] = c.b;
        p[1] = c.g;
        p[2] = c.r;
    }

    /// Mutable access to the whole backing buffer, padding included.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.pix.as_mut()
    }

    /// Mutable view of `r ∩ bounds`. See [`sub_image`](Self::sub_image).
    pub fn sub_image_mut(&mut self, r: Rectangle) -> Bgr32<&mut [u8]> {
        let r = r.intersect(self.rect);
        let offset = self.offset(r.min.x, r.min.y);
        let stride = self.stride;
        let pix = self.pix.as_mut();
        let start = match offset {
            Some(n) if !r.is_empty() => n.min(pix.len()),
            _ => pix.len(),
        };
        Bgr32 {
            pix: &mut pix[start..],
            rect: r,
            stride,
        }
    }
}

impl<B: AsRef<[u8]>> Image for Bgr32<B> {
    fn bounds(&self) -> Rectangle {
        self.rect
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::BGR32
    }

    fn color_at(&self, x: i32, y: i32) -> Color {
        Bgr32::color_at(self, x, y)
    }

    fn is_opaque(&self) -> bool {
        true
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> ImageMut for Bgr32<B> {
    fn set_color(&mut self, x: i32, y: i32, c: Color) {
        Bgr32::set_color(self, x, y, c);
    }
}

impl<B: AsRef<[u8]>> fmt::Debug for Bgr32<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bgr32({}, stride {}, {} bytes)",
            self.rect,
            self.stride,
            self.pix.as_ref().len()
        )
    }
}

fn is_malformed(rect: Rectangle) -> bool {
    rect.min.x > rect.max.x || rect.min.y > rect.max.y
}

/// Check that every pixel of `rect` lies within `len` bytes.
fn validate(len: usize, rect: Rectangle, stride: usize) -> Result<(), BufferError> {
    if is_malformed(rect) {
        return Err(BufferError::InvalidDimensions);
    }
    let min = PixelDescriptor::BGRX8
        .min_stride(rect.width())
        .ok_or(BufferError::InvalidDimensions)?;
    if stride < min {
        return Err(BufferError::StrideTooSmall { stride, min });
    }
    if rect.is_empty() {
        return Ok(());
    }
    // The last row only needs its pixels, not a full stride.
    let required = (rect.height() as usize - 1)
        .checked_mul(stride)
        .and_then(|preceding| preceding.checked_add(min))
        .ok_or(BufferError::InvalidDimensions)?;
    if len < required {
        return Err(BufferError::InsufficientData { len, required });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use rgb::Rgb;

    fn two_by_two() -> Bgr32 {
        Bgr32::new(vec![0u8; 16], Rectangle::new(0, 0, 2, 2), 8).unwrap()
    }

    // --- construction ---

    #[test]
    fn new_accepts_exact_and_padded_layouts() {
        assert!(Bgr32::new(vec![0u8; 16], Rectangle::from_size(2, 2), 8).is_ok());
        // Last row needs no trailing padding.
        assert!(Bgr32::new(vec![0u8; 20], Rectangle::from_size(2, 2), 12).is_ok());
    }

    #[test]
    fn new_rejects_small_stride() {
        let err = Bgr32::new(vec![0u8; 64], Rectangle::from_size(4, 2), 12).unwrap_err();
        assert_eq!(err, BufferError::StrideTooSmall { stride: 12, min: 16 });
    }

    #[test]
    fn new_rejects_short_buffer() {
        let err = Bgr32::new(vec![0u8; 15], Rectangle::from_size(2, 2), 8).unwrap_err();
        assert_eq!(
            err,
            BufferError::InsufficientData {
                len: 15,
                required: 16
            }
        );
    }

    #[test]
    fn new_rejects_malformed_bounds() {
        let rect = Rectangle {
            min: Point::new(3, 0),
            max: Point::new(1, 2),
        };
        let err = Bgr32::new(vec![0u8; 64], rect, 16).unwrap_err();
        assert_eq!(err, BufferError::InvalidDimensions);
    }

    #[test]
    fn new_rejects_overflowing_layout() {
        let err = Bgr32::new(&[0u8; 0][..], Rectangle::from_size(1, 3), usize::MAX).unwrap_err();
        assert_eq!(err, BufferError::InvalidDimensions);
    }

    #[test]
    fn empty_bounds_need_no_bytes() {
        let img = Bgr32::new(&[0u8; 0][..], Rectangle::ZERO, 0).unwrap();
        assert!(img.bounds().is_empty());
        assert_eq!(img.color_at(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn with_bounds_packs_rows() {
        let img = Bgr32::with_bounds(Rectangle::new(-1, -1, 2, 1)).unwrap();
        assert_eq!(img.stride(), 12);
        assert_eq!(img.as_bytes().len(), 24);
        assert!(img.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn with_bounds_rejects_oversized_rect() {
        // Fits in usize on 64-bit targets but exceeds isize::MAX.
        let err = Bgr32::with_bounds(Rectangle::new(0, 0, i32::MAX, i32::MAX)).unwrap_err();
        assert_eq!(err, BufferError::InvalidDimensions);
        let err = Bgr32::with_bounds(Rectangle::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX))
            .unwrap_err();
        assert_eq!(err, BufferError::InvalidDimensions);
    }

    #[test]
    fn with_bounds_rejects_malformed_rect() {
        let rect = Rectangle {
            min: Point::new(0, 5),
            max: Point::new(2, 1),
        };
        assert_eq!(
            Bgr32::with_bounds(rect).unwrap_err(),
            BufferError::InvalidDimensions
        );
    }

    #[test]
    fn new_accepts_bounds_near_coordinate_limits() {
        let rect = Rectangle::new(i32::MAX - 2, i32::MIN, i32::MAX, i32::MIN + 1);
        let mut img = Bgr32::new(vec![0u8; 8], rect, 8).unwrap();
        img.set_color(i32::MAX - 1, i32::MIN, Color::rgb(1, 2, 3));
        assert_eq!(img.color_at(i32::MAX - 1, i32::MIN), Color::rgb(1, 2, 3));
        assert_eq!(img.color_at(i32::MAX, i32::MIN), Color::TRANSPARENT);
        assert_eq!(&img.as_bytes()[4..8], &[3, 2, 1, 0]);
    }

    #[test]
    #[should_panic]
    fn raw_parts_with_short_buffer_panics_on_access() {
        let img = Bgr32::from_raw_parts(vec![0u8; 4], Rectangle::from_size(2, 2), 8);
        let _ = img.color_at(1, 1);
    }

    // --- addressing ---

    #[test]
    fn pixel_offset_formula() {
        let img = Bgr32::from_raw_parts(vec![0u8; 100], Rectangle::new(3, 5, 6, 9), 20);
        for y in 5..9 {
            for x in 3..6 {
                let expected = (y - 5) as isize * 20 + (x - 3) as isize * 4;
                assert_eq!(img.pixel_offset(x, y), expected);
            }
        }
        // Unchecked outside the bounds.
        assert_eq!(img.pixel_offset(2, 5), -4);
        assert_eq!(img.pixel_offset(3, 20), 300);
    }

    #[test]
    fn worked_example() {
        let mut img = two_by_two();
        assert_eq!(img.pixel_offset(1, 1), 12);
        img.set_color(1, 1, Color::rgba(10, 20, 30, 255));
        let bytes = img.as_bytes();
        assert_eq!(bytes[12], 30);
        assert_eq!(bytes[13], 20);
        assert_eq!(bytes[14], 10);
        assert_eq!(bytes[15], 0);
        assert_eq!(img.color_at(1, 1), Color::rgba(10, 20, 30, 255));
    }

    // --- reads and writes ---

    #[test]
    fn out_of_bounds_read_is_transparent() {
        let mut img = two_by_two();
        img.as_bytes_mut().fill(0xaa);
        for (x, y) in [(5, 5), (-1, 0), (0, -1), (2, 0), (0, 2), (i32::MIN, i32::MAX)] {
            assert_eq!(img.color_at(x, y), Color::TRANSPARENT);
            assert_eq!(img.bgr_at(x, y), None);
        }
    }

    #[test]
    fn out_of_bounds_write_is_ignored() {
        let mut img = two_by_two();
        img.set_color(5, 5, Color::rgba(1, 2, 3, 4));
        img.set_color(-1, 1, Color::rgb(9, 9, 9));
        img.set_bgr(2, 0, BGR { b: 7, g: 7, r: 7 });
        assert!(img.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn write_drops_alpha_and_reads_opaque() {
        let mut img = two_by_two();
        img.set_color(0, 1, Color::rgba(10, 20, 30, 40));
        assert_eq!(img.color_at(0, 1), Color::rgba(10, 20, 30, 255));
    }

    #[test]
    fn write_reduces_to_8bit() {
        let mut img = two_by_two();
        img.set_color(
            1,
            0,
            Color::Rgba16(Rgba {
                r: 0x1234,
                g: 0xabcd,
                b: 0xff01,
                a: 0xffff,
            }),
        );
        assert_eq!(img.color_at(1, 0), Color::rgb(0x12, 0xab, 0xff));
    }

    #[test]
    fn padding_byte_is_never_touched() {
        let mut img = two_by_two();
        img.as_bytes_mut().fill(0x5a);
        img.set_color(0, 0, Color::rgb(1, 2, 3));
        img.set_bgr(1, 0, BGR { b: 4, g: 5, r: 6 });
        assert_eq!(&img.as_bytes()[..8], &[3, 2, 1, 0x5a, 4, 5, 6, 0x5a]);
        // The padding value doesn't leak into reads.
        assert_eq!(img.color_at(0, 0), Color::rgb(1, 2, 3));
    }

    #[test]
    fn set_bgr_round_trips() {
        let mut img = two_by_two();
        img.set_bgr(0, 1, BGR { b: 30, g: 20, r: 10 });
        assert_eq!(img.color_at(0, 1), Color::rgba(10, 20, 30, 255));
        assert_eq!(img.bgr_at(0, 1), Some(BGR { b: 30, g: 20, r: 10 }));
    }

    #[test]
    fn honours_origin_and_stride_padding() {
        let rect = Rectangle::new(-2, 10, 1, 12);
        let mut img = Bgr32::new(vec![0u8; 32], rect, 16).unwrap();
        img.set_color(-2, 10, Color::rgb(1, 1, 1));
        img.set_color(0, 11, Color::rgb(2, 2, 2));
        assert_eq!(&img.as_bytes()[0..3], &[1, 1, 1]);
        assert_eq!(&img.as_bytes()[24..27], &[2, 2, 2]);
        assert_eq!(img.row(11), Some(&[0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 0][..]));
        assert_eq!(img.row(12), None);
    }

    #[test]
    fn works_over_borrowed_memory() {
        let mut surface = [0u8; 8];
        {
            let mut img = Bgr32::new(&mut surface[..], Rectangle::from_size(2, 1), 8).unwrap();
            img.set_color(1, 0, Color::Gray8(0x40));
        }
        let img = Bgr32::new(&surface[..], Rectangle::from_size(2, 1), 8).unwrap();
        assert_eq!(img.color_at(1, 0), Color::rgb(0x40, 0x40, 0x40));
        assert_eq!(&surface[4..7], &[0x40, 0x40, 0x40]);
    }

    #[test]
    fn image_trait_reports_bgr32_model() {
        fn describe<I: Image>(img: &I) -> (Rectangle, ColorModel, bool) {
            (img.bounds(), img.color_model(), img.is_opaque())
        }
        let img = two_by_two();
        let (bounds, model, opaque) = describe(&img);
        assert_eq!(bounds, Rectangle::from_size(2, 2));
        assert_eq!(model, ColorModel::BGR32);
        assert!(opaque);
        assert_eq!(img.color_model().descriptor(), PixelDescriptor::BGRX8);
    }

    // --- sub-images ---

    #[test]
    fn sub_image_shares_coordinates() {
        let mut img = Bgr32::with_bounds(Rectangle::from_size(4, 4)).unwrap();
        img.set_color(2, 3, Color::rgb(7, 8, 9));
        let view = img.sub_image(Rectangle::new(1, 2, 3, 6));
        assert_eq!(view.bounds(), Rectangle::new(1, 2, 3, 4));
        assert_eq!(view.color_at(2, 3), Color::rgb(7, 8, 9));
        assert_eq!(view.color_at(3, 3), Color::TRANSPARENT);
        assert_eq!(view.pixel_offset(1, 2), 0);
    }

    #[test]
    fn sub_image_mut_writes_through() {
        let mut img = Bgr32::with_bounds(Rectangle::from_size(3, 3)).unwrap();
        {
            let mut view = img.sub_image_mut(Rectangle::new(1, 1, 3, 3));
            view.set_color(2, 2, Color::rgb(1, 2, 3));
            view.set_color(0, 0, Color::rgb(9, 9, 9));
        }
        assert_eq!(img.color_at(2, 2), Color::rgb(1, 2, 3));
        assert_eq!(img.color_at(0, 0), Color::rgb(0, 0, 0));
    }

    #[test]
    fn disjoint_sub_image_is_empty() {
        let img = two_by_two();
        let view = img.sub_image(Rectangle::new(10, 10, 20, 20));
        assert!(view.bounds().is_empty());
        assert!(view.as_bytes().is_empty());
        assert_eq!(view.color_at(10, 10), Color::TRANSPARENT);
    }

    // --- imgref interop ---

    #[test]
    fn rgba_img_round_trip() {
        let pixels = vec![
            Rgba { r: 1, g: 2, b: 3, a: 255 },
            Rgba { r: 4, g: 5, b: 6, a: 255 },
            Rgba { r: 7, g: 8, b: 9, a: 255 },
            Rgba { r: 10, g: 11, b: 12, a: 255 },
            Rgba { r: 13, g: 14, b: 15, a: 255 },
            Rgba { r: 16, g: 17, b: 18, a: 255 },
        ];
        let src = ImgVec::new(pixels.clone(), 3, 2);
        let img = Bgr32::from_rgba_img(src.as_ref()).unwrap();
        assert_eq!(img.bounds(), Rectangle::from_size(3, 2));
        assert_eq!(&img.as_bytes()[..4], &[3, 2, 1, 0]);
        assert_eq!(img.color_at(2, 1), Color::rgb(16, 17, 18));
        let back = img.to_rgba_img();
        assert_eq!(back.width(), 3);
        assert_eq!(back.height(), 2);
        assert_eq!(back.into_buf(), pixels);
    }

    #[test]
    fn to_rgba_img_skips_stride_padding() {
        let mut img = Bgr32::new(vec![0xffu8; 24], Rectangle::from_size(1, 2), 12).unwrap();
        img.set_color(0, 1, Color::from(Rgb { r: 1, g: 2, b: 3 }));
        let out = img.to_rgba_img();
        assert_eq!(
            out.into_buf(),
            vec![
                Rgba { r: 255, g: 255, b: 255, a: 255 },
                Rgba { r: 1, g: 2, b: 3, a: 255 },
            ]
        );
    }

    #[test]
    fn debug_format() {
        let img = two_by_two();
        assert_eq!(format!("{img:?}"), "Bgr32((0,0)-(2,2), stride 8, 16 bytes)");
    }
}
