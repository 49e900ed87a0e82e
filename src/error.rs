//! Construction errors.
//!
//! Only building a buffer can fail. Pixel access never errors: reads outside
//! the bounds return [`Color::TRANSPARENT`](crate::Color::TRANSPARENT) and
//! writes outside the bounds are ignored.

use core::fmt;

/// Errors from validated pixel buffer construction.
///
/// Implements [`core::error::Error`] so callers can wrap it in their own
/// error types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferError {
    /// Row stride is smaller than `width * bytes_per_pixel`.
    StrideTooSmall {
        /// Stride supplied by the caller.
        stride: usize,
        /// Smallest stride that fits one row.
        min: usize,
    },
    /// Byte buffer is too small for the bounds and stride.
    InsufficientData {
        /// Length of the supplied buffer.
        len: usize,
        /// Bytes needed to reach the end of the last row.
        required: usize,
    },
    /// Bounds are malformed or their byte size overflows `usize`.
    InvalidDimensions,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrideTooSmall { stride, min } => {
                write!(f, "stride {stride} is smaller than row size {min}")
            }
            Self::InsufficientData { len, required } => {
                write!(f, "buffer of {len} bytes is too small, need {required}")
            }
            Self::InvalidDimensions => write!(f, "bounds are malformed or overflow"),
        }
    }
}

impl core::error::Error for BufferError {}
