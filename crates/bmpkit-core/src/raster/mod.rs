//! Raster - the in-memory image container
//!
//! Two concrete raster kinds exist, mirroring the two supported BMP
//! flavours:
//!
//! - [`Raster8`]: one byte per pixel, stored as a flat buffer in file order
//!   together with the verbatim 54-byte header and the 1024-byte color table
//! - [`Raster24`]: one [`Rgb`](crate::color::Rgb) per pixel in a flat
//!   row-major buffer, row 0 being the top row of the image
//!
//! [`Raster`] wraps either kind for callers that do not know the bit depth
//! in advance.
//!
//! # Ownership model
//!
//! A raster exclusively owns its pixel buffer. Engines borrow it mutably for
//! the duration of a call and never keep references beyond it. Dropping the
//! raster releases every buffer it owns.

pub mod arith;
mod gray;
pub mod histogram;
mod rgb;

pub use gray::Raster8;
pub use rgb::{Raster24, row_stride};

use crate::error::{Error, Result};
use crate::header::RasterHeader;
use std::fmt;

/// Bit depth of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorDepth {
    /// 8-bit indexed grayscale
    Gray8,
    /// 24-bit BGR true-color
    Rgb24,
}

impl ColorDepth {
    /// Create `ColorDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] for anything other than 8 or 24.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(Self::Gray8),
            24 => Ok(Self::Rgb24),
            other => Err(Error::NotSupported(format!("{other}-bit rasters"))),
        }
    }

    /// Bits per pixel.
    pub fn bits(self) -> u16 {
        match self {
            Self::Gray8 => 8,
            Self::Rgb24 => 24,
        }
    }
}

/// Summary of a raster's metadata, as shown by `print_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterInfo {
    pub width: u32,
    pub height: u32,
    /// Bits per pixel as declared in the header
    pub color_depth: u32,
    /// Declared raw data size (8-bit) or declared file size (24-bit)
    pub data_size: u32,
}

impl fmt::Display for RasterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image Info :")?;
        writeln!(f, "Width : {} pixels", self.width)?;
        writeln!(f, "Height : {} pixels", self.height)?;
        writeln!(f, "Color Depth : {} bits", self.color_depth)?;
        write!(f, "Data Size : {} bytes", self.data_size)
    }
}

/// A raster of either supported kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raster {
    Gray(Raster8),
    Color(Raster24),
}

impl Raster {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Self::Gray(r) => r.width(),
            Self::Color(r) => r.width(),
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            Self::Gray(r) => r.height(),
            Self::Color(r) => r.height(),
        }
    }

    /// Bit depth of the underlying raster.
    pub fn depth(&self) -> ColorDepth {
        match self {
            Self::Gray(_) => ColorDepth::Gray8,
            Self::Color(_) => ColorDepth::Rgb24,
        }
    }

    /// Flattened header fields.
    pub fn header(&self) -> RasterHeader {
        match self {
            Self::Gray(r) => r.raster_header(),
            Self::Color(r) => r.raster_header(),
        }
    }

    /// Metadata summary.
    pub fn info(&self) -> RasterInfo {
        match self {
            Self::Gray(r) => r.info(),
            Self::Color(r) => r.info(),
        }
    }

    /// The grayscale raster, if this is one.
    pub fn as_gray(&self) -> Option<&Raster8> {
        match self {
            Self::Gray(r) => Some(r),
            Self::Color(_) => None,
        }
    }

    /// Mutable access to the grayscale raster, if this is one.
    pub fn as_gray_mut(&mut self) -> Option<&mut Raster8> {
        match self {
            Self::Gray(r) => Some(r),
            Self::Color(_) => None,
        }
    }

    /// The color raster, if this is one.
    pub fn as_color(&self) -> Option<&Raster24> {
        match self {
            Self::Color(r) => Some(r),
            Self::Gray(_) => None,
        }
    }

    /// Mutable access to the color raster, if this is one.
    pub fn as_color_mut(&mut self) -> Option<&mut Raster24> {
        match self {
            Self::Color(r) => Some(r),
            Self::Gray(_) => None,
        }
    }
}

impl From<Raster8> for Raster {
    fn from(r: Raster8) -> Self {
        Self::Gray(r)
    }
}

impl From<Raster24> for Raster {
    fn from(r: Raster24) -> Self {
        Self::Color(r)
    }
}

/// Validate header dimensions and convert them to unsigned.
pub(crate) fn checked_dimensions(width: i32, height: i32) -> Result<(u32, u32)> {
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidDimension {
            width: width.into(),
            height: height.into(),
        });
    }
    Ok((width as u32, height as u32))
}
