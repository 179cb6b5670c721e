//! 8-bit grayscale raster
//!
//! The header and color table are kept as opaque byte arrays so that a
//! loaded image can be written back unchanged. Samples are stored without
//! row padding, `width * height` bytes in file order.

use super::{RasterInfo, checked_dimensions};
use crate::alloc::{sample_count, try_filled};
use crate::error::{Error, Result};
use crate::header::{
    BMP_SIGNATURE, COLOR_TABLE_SIZE, FileHeader, HEADER_SIZE, INFO_HEADER_SIZE, InfoHeader,
    RasterHeader,
};

/// 8-bit grayscale raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster8 {
    header: [u8; HEADER_SIZE],
    color_table: [u8; COLOR_TABLE_SIZE],
    width: u32,
    height: u32,
    color_depth: u16,
    data_size: u32,
    data: Vec<u8>,
    /// Bytes found after the samples, re-emitted on save
    trailer: Vec<u8>,
}

/// Identity gray palette: entry `i` is `(i, i, i, 0)` in BGRA order.
fn linear_gray_palette() -> [u8; COLOR_TABLE_SIZE] {
    let mut table = [0u8; COLOR_TABLE_SIZE];
    for (i, entry) in table.chunks_exact_mut(4).enumerate() {
        let v = i as u8;
        entry.copy_from_slice(&[v, v, v, 0]);
    }
    table
}

impl Raster8 {
    /// Create a black raster with a linear grayscale palette.
    ///
    /// The generated header is a well-formed 8-bit BMP header whose declared
    /// sizes match the unpadded sample layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0 or does
    /// not fit in a signed 32-bit header field, and
    /// [`Error::AllocationFailed`] if the sample buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(Error::InvalidDimension {
                width: width.into(),
                height: height.into(),
            });
        }
        let count = sample_count(width, height)?;
        let data_size = u32::try_from(count).map_err(|_| Error::InvalidDimension {
            width: width.into(),
            height: height.into(),
        })?;
        let offset = (HEADER_SIZE + COLOR_TABLE_SIZE) as u32;

        let file = FileHeader {
            signature: BMP_SIGNATURE,
            size: offset.saturating_add(data_size),
            reserved1: 0,
            reserved2: 0,
            offset,
        };
        let info = InfoHeader {
            size: INFO_HEADER_SIZE as u32,
            width: width as i32,
            height: height as i32,
            planes: 1,
            bits: 8,
            compression: 0,
            image_size: data_size,
            x_resolution: 0,
            y_resolution: 0,
            colors_used: 256,
            important_colors: 0,
        };
        let mut header = [0u8; HEADER_SIZE];
        header[..14].copy_from_slice(&file.to_bytes());
        header[14..].copy_from_slice(&info.to_bytes());

        Ok(Self {
            header,
            color_table: linear_gray_palette(),
            width,
            height,
            color_depth: 8,
            data_size,
            data: try_filled(count, 0u8)?,
            trailer: Vec::new(),
        })
    }

    /// Assemble a raster from decoded file parts.
    ///
    /// Width, height, bit depth and declared data size are taken from the
    /// header bytes. `data` must hold exactly `width * height` samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for non-positive header dimensions
    /// and [`Error::DimensionMismatch`] if `data` has the wrong length.
    pub fn from_parts(
        header: [u8; HEADER_SIZE],
        color_table: [u8; COLOR_TABLE_SIZE],
        data: Vec<u8>,
        trailer: Vec<u8>,
    ) -> Result<Self> {
        let fields = RasterHeader::from_bytes(&header);
        let (width, height) = checked_dimensions(fields.width, fields.height)?;
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            header,
            color_table,
            width,
            height,
            color_depth: fields.bits_per_pixel,
            data_size: fields.data_size,
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

    /// Bits per pixel, as declared in the header.
    pub fn color_depth(&self) -> u16 {
        self.color_depth
    }

    /// Raw data size, as declared in the header.
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// The verbatim 54-byte header.
    pub fn header(&self) -> &[u8; HEADER_SIZE] {
        &self.header
    }

    /// Flattened header fields.
    pub fn raster_header(&self) -> RasterHeader {
        RasterHeader::from_bytes(&self.header)
    }

    /// The 256-entry BGRA color table.
    pub fn color_table(&self) -> &[u8; COLOR_TABLE_SIZE] {
        &self.color_table
    }

    /// All samples, `width * height` bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to all samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Bytes that followed the samples in the source file.
    pub fn trailer(&self) -> &[u8] {
        &self.trailer
    }

    /// Sample at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside
    /// the raster.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Iterate over rows as slices of `width` samples.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Metadata summary.
    pub fn info(&self) -> RasterInfo {
        RasterInfo {
            width: self.width,
            height: self.height,
            color_depth: self.color_depth.into(),
            data_size: self.data_size,
        }
    }
}
