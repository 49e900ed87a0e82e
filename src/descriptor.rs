//! Pixel format descriptors.
//!
//! Describes how a pixel is laid out in memory without carrying any pixel
//! data. Every [`ColorModel`](crate::ColorModel) carries one so that generic
//! callers can tell a BGR32 surface from a packed RGBA buffer.

/// Channel storage type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ChannelType {
    /// 8-bit unsigned integer (1 byte per channel).
    U8 = 1,
    /// 16-bit unsigned integer (2 bytes per channel).
    U16 = 2,
}

impl ChannelType {
    /// Byte size of a single channel value.
    #[inline]
    pub const fn byte_size(self) -> usize {
        self as usize
    }
}

/// Channel layout (number, order and meaning of channels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ChannelLayout {
    /// Single luminance channel.
    Gray = 1,
    /// Red, green, blue.
    Rgb = 3,
    /// Red, green, blue, alpha.
    Rgba = 4,
    /// Blue, green, red, alpha (Windows/DirectX byte order).
    Bgra = 5,
    /// Blue, green, red, then one unused padding byte.
    ///
    /// Also known as BGR0 or XRGB8888 on little-endian framebuffers.
    Bgrx = 6,
}

impl ChannelLayout {
    /// Number of stored channels, padding included.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
            Self::Rgba | Self::Bgra | Self::Bgrx => 4,
        }
    }

    /// Number of channels that carry color information.
    #[inline]
    pub const fn color_channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb | Self::Rgba | Self::Bgra | Self::Bgrx => 3,
        }
    }

    /// Whether this layout includes an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Bgra)
    }

    /// Whether blue is stored before red.
    #[inline]
    pub const fn is_bgr_order(self) -> bool {
        matches!(self, Self::Bgra | Self::Bgrx)
    }
}

/// Alpha channel interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum AlphaMode {
    /// No alpha channel; every pixel reads back fully opaque.
    Opaque = 0,
    /// Straight (unassociated) alpha.
    Straight = 1,
    /// Premultiplied (associated) alpha.
    Premultiplied = 2,
}

/// Compact pixel format descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub struct PixelDescriptor {
    /// Channel storage type.
    pub channel_type: ChannelType,
    /// Channel layout.
    pub layout: ChannelLayout,
    /// Alpha interpretation.
    pub alpha: AlphaMode,
}

impl PixelDescriptor {
    /// Create a pixel format descriptor.
    pub const fn new(channel_type: ChannelType, layout: ChannelLayout, alpha: AlphaMode) -> Self {
        Self {
            channel_type,
            layout,
            alpha,
        }
    }

    // Named constants ---------------------------------------------------------

    /// 8-bit BGR with one padding byte per pixel, always opaque.
    pub const BGRX8: Self = Self::new(ChannelType::U8, ChannelLayout::Bgrx, AlphaMode::Opaque);

    /// 8-bit BGRA with premultiplied alpha.
    pub const BGRA8: Self = Self::new(
        ChannelType::U8,
        ChannelLayout::Bgra,
        AlphaMode::Premultiplied,
    );

    /// 8-bit RGBA with premultiplied alpha.
    pub const RGBA8: Self = Self::new(
        ChannelType::U8,
        ChannelLayout::Rgba,
        AlphaMode::Premultiplied,
    );

    /// 16-bit RGBA with premultiplied alpha.
    pub const RGBA16: Self = Self::new(
        ChannelType::U16,
        ChannelLayout::Rgba,
        AlphaMode::Premultiplied,
    );

    /// 8-bit RGB, always opaque.
    pub const RGB8: Self = Self::new(ChannelType::U8, ChannelLayout::Rgb, AlphaMode::Opaque);

    // Methods -----------------------------------------------------------------

    /// Bytes per pixel.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        self.channel_type.byte_size() * self.layout.channels()
    }

    /// Number of stored channels.
    #[inline]
    pub const fn channels(self) -> u8 {
        self.layout.channels() as u8
    }

    /// Whether this format stores alpha.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        self.layout.has_alpha()
    }

    /// Whether every pixel of this format is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        matches!(self.alpha, AlphaMode::Opaque)
    }

    /// Smallest legal row stride for `width` pixels, or `None` on overflow.
    #[inline]
    pub const fn min_stride(self, width: u32) -> Option<usize> {
        (width as usize).checked_mul(self.bytes_per_pixel())
    }
}
