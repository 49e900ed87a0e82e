//! Layout-agnostic algorithms over [`Image`] and [`ImageMut`].
//!
//! These work pixel by pixel through the traits, so they accept any
//! combination of stores. Every color is passed through the destination's
//! [`ColorModel`](crate::ColorModel) before it is written.

use crate::bgr32::Bgr32;
use crate::color::Color;
use crate::error::BufferError;
use crate::geometry::{Point, Rectangle};
use crate::image::{Image, ImageMut, Uniform};

/// Copy pixels from `src`, starting at `sp`, into the rectangle `r` of `dst`.
///
/// `r` is clipped to `dst`'s bounds and to the part of `src` that maps into
/// it; pixels of `r` with no source counterpart are left untouched.
pub fn copy<D, S>(dst: &mut D, r: Rectangle, src: &S, sp: Point)
where
    D: ImageMut + ?Sized,
    S: Image + ?Sized,
{
    let Some((r, sp)) = clip(dst.bounds(), r, src.bounds(), sp) else {
        return;
    };
    let model = dst.color_model();
    // Source and destination may sit at opposite ends of the i32 range, so
    // the offset between them only fits in i64. Each mapped coordinate
    // lies inside the source bounds and fits back into i32.
    let dx = i64::from(sp.x) - i64::from(r.min.x);
    let dy = i64::from(sp.y) - i64::from(r.min.y);
    for y in r.min.y..r.max.y {
        let sy = (i64::from(y) + dy) as i32;
        for x in r.min.x..r.max.x {
            let sx = (i64::from(x) + dx) as i32;
            let c = src.color_at(sx, sy);
            dst.set_color(x, y, model.convert(c));
        }
    }
}

/// Paint `r ∩ dst.bounds()` with `c`.
pub fn fill<D: ImageMut + ?Sized>(dst: &mut D, r: Rectangle, c: Color) {
    copy(dst, r, &Uniform(c), r.min);
}

/// Copy any image into a fresh BGR32 buffer with the same bounds.
///
/// # Errors
///
/// Returns [`BufferError::InvalidDimensions`] if `src`'s bounds are
/// malformed or their byte size overflows.
pub fn convert<S: Image + ?Sized>(src: &S) -> Result<Bgr32, BufferError> {
    let bounds = src.bounds();
    let mut out = Bgr32::with_bounds(bounds)?;
    copy(&mut out, bounds, src, bounds.min);
    Ok(out)
}

/// Clip `r` against the destination bounds and the source bounds mapped
/// into destination space, moving `sp` by the same amount as `r.min`.
///
/// Returns `None` when nothing is left to copy. The arithmetic runs in
/// `i64`; the results lie inside `dst_bounds` and `src_bounds`, so they
/// narrow back to `i32` without loss.
fn clip(
    dst_bounds: Rectangle,
    r: Rectangle,
    src_bounds: Rectangle,
    sp: Point,
) -> Option<(Rectangle, Point)> {
    let r = r.intersect(dst_bounds);
    if r.is_empty() {
        return None;
    }
    let shift_x = i64::from(r.min.x) - i64::from(sp.x);
    let shift_y = i64::from(r.min.y) - i64::from(sp.y);
    let min_x = i64::from(r.min.x).max(i64::from(src_bounds.min.x) + shift_x);
    let min_y = i64::from(r.min.y).max(i64::from(src_bounds.min.y) + shift_y);
    let max_x = i64::from(r.max.x).min(i64::from(src_bounds.max.x) + shift_x);
    let max_y = i64::from(r.max.y).min(i64::from(src_bounds.max.y) + shift_y);
    if min_x >= max_x || min_y >= max_y {
        return None;
    }
    let clipped = Rectangle {
        min: Point::new(min_x as i32, min_y as i32),
        max: Point::new(max_x as i32, max_y as i32),
    };
    let sp = Point::new((min_x - shift_x) as i32, (min_y - shift_y) as i32);
    Some((clipped, sp))
}
