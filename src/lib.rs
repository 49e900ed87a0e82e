//! BGR32 pixel buffers behind a generic image interface.
//!
//! This crate lets a raw byte buffer in BGR32 layout (blue, green, red and
//! one padding byte per pixel, rows separated by an explicit stride) be
//! treated as an image:
//!
//! - [`Bgr32`]: the pixel store, mapping coordinates to byte offsets and
//!   reading and writing pixels with channel reordering
//! - [`Image`] / [`ImageMut`]: the capability traits generic code drives
//! - [`Color`] / [`ColorModel`]: device-independent colors and the
//!   conversion into a store's native encoding
//! - [`PixelDescriptor`]: memory layout descriptors
//! - [`draw`]: copy, fill and convert over any [`Image`]
//!
//! Pixel access never fails. Reads outside the bounds return
//! [`Color::TRANSPARENT`]; writes outside the bounds are ignored.
//!
//! # Features
//!
//! - `log`: report rejected or inconsistent buffer layouts through the
//!   [`log`](https://docs.rs/log) facade.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod bgr32;
mod color;
mod descriptor;
pub mod draw;
mod error;
mod geometry;
mod image;
mod logging;

pub use bgr32::Bgr32;
pub use color::{Color, ColorModel};
pub use descriptor::{AlphaMode, ChannelLayout, ChannelType, PixelDescriptor};
pub use error::BufferError;
pub use geometry::{Point, Rectangle};
pub use image::{Image, ImageMut, Uniform};

// Re-exports for callers building colors and typed buffers.
pub use imgref::{ImgRef, ImgVec};
pub use rgb;
pub use rgb::alt::BGR as Bgr;
pub use rgb::alt::BGRA as Bgra;
pub use rgb::{Rgb, Rgba};
