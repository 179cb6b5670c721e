//! 24-bit true-color raster
//!
//! Pixels are held in a single flat buffer indexed `y * width + x`, with row
//! 0 being the top of the image. The on-disk bottom-up order and BGR byte
//! order are handled entirely by the codec.

use super::{RasterInfo, checked_dimensions};
use crate::alloc::{sample_count, try_filled};
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::header::{
    BMP_SIGNATURE, FileHeader, HEADER_SIZE, INFO_HEADER_SIZE, InfoHeader, RasterHeader,
};

/// Number of bytes one row occupies on disk, padded to a 4-byte boundary.
///
/// `ceil(width * 3 / 4) * 4`
#[inline]
pub fn row_stride(width: u32) -> usize {
    (width as usize * 3).div_ceil(4) * 4
}

/// 24-bit true-color raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster24 {
    file_header: FileHeader,
    info: InfoHeader,
    /// Bytes between the 54-byte header and the pixel array
    extra_header: Vec<u8>,
    width: u32,
    height: u32,
    data: Vec<Rgb>,
    /// Bytes found after the pixel array, re-emitted on save
    trailer: Vec<u8>,
}

impl Raster24 {
    /// Create a black raster with freshly generated headers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0 or does
    /// not fit in a signed 32-bit header field, and
    /// [`Error::AllocationFailed`] if the pixel buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let invalid = || Error::InvalidDimension {
            width: width.into(),
            height: height.into(),
        };
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(invalid());
        }
        let count = sample_count(width, height)?;
        let image_size = row_stride(width)
            .checked_mul(height as usize)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid)?;

        let file_header = FileHeader {
            signature: BMP_SIGNATURE,
            size: (HEADER_SIZE as u32).saturating_add(image_size),
            reserved1: 0,
            reserved2: 0,
            offset: HEADER_SIZE as u32,
        };
        let info = InfoHeader {
            size: INFO_HEADER_SIZE as u32,
            width: width as i32,
            height: height as i32,
            planes: 1,
            bits: 24,
            compression: 0,
            image_size,
            x_resolution: 0,
            y_resolution: 0,
            colors_used: 0,
            important_colors: 0,
        };

        Ok(Self {
            file_header,
            info,
            extra_header: Vec::new(),
            width,
            height,
            data: try_filled(count, Rgb::default())?,
            trailer: Vec::new(),
        })
    }

    /// Assemble a raster from decoded file parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for non-positive header dimensions
    /// and [`Error::DimensionMismatch`] if `data` has the wrong length.
    pub fn from_parts(
        file_header: FileHeader,
        info: InfoHeader,
        extra_header: Vec<u8>,
        data: Vec<Rgb>,
        trailer: Vec<u8>,
    ) -> Result<Self> {
        let (width, height) = checked_dimensions(info.width, info.height)?;
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            file_header,
            info,
            extra_header,
            width,
            height,
            data,
            trailer,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bits per pixel, as declared in the info header.
    pub fn color_depth(&self) -> u16 {
        self.info.bits
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info
    }

    /// Flattened header fields.
    pub fn raster_header(&self) -> RasterHeader {
        RasterHeader::from_parts(&self.file_header, &self.info)
    }

    /// Bytes between the 54-byte header and the pixel array.
    pub fn extra_header(&self) -> &[u8] {
        &self.extra_header
    }

    /// Bytes that followed the pixel array in the source file.
    pub fn trailer(&self) -> &[u8] {
        &self.trailer
    }

    /// On-disk row size in bytes, including padding.
    pub fn stride(&self) -> usize {
        row_stride(self.width)
    }

    /// All pixels in row-major order, top row first.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// Mutable access to all pixels.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Swap in a new pixel buffer of the same size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data` has the wrong length;
    /// the raster is left untouched in that case.
    pub fn replace_pixels(&mut self, data: Vec<Rgb>) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(Error::DimensionMismatch {
                expected: self.data.len(),
                actual: data.len(),
            });
        }
        self.data = data;
        Ok(())
    }

    /// Pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside
    /// the raster.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = pixel;
        Ok(())
    }

    /// Row `y` as a slice of `width` pixels.
    pub fn row(&self, y: u32) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.data[start..start + w])
    }

    /// Metadata summary.
    ///
    /// The reported data size is the declared file size.
    pub fn info(&self) -> RasterInfo {
        RasterInfo {
            width: self.width,
            height: self.height,
            color_depth: self.info.bits.into(),
            data_size: self.file_header.size,
        }
    }
}
