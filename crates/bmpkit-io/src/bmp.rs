//! BMP image format support
//!
//! Reads and writes the two BMP flavours handled by bmpkit.
//!
//! # 8-bit layout
//!
//! 54-byte header (kept verbatim), 1024-byte color table, then
//! `width * height` samples with no row padding.
//!
//! # 24-bit layout
//!
//! 14-byte file header, 40-byte info header, optional bytes up to the
//! declared pixel offset, then bottom-up rows of BGR triples, each row
//! padded to a multiple of 4 bytes.

use crate::header::{read_exact_or_truncated, validate_header};
use crate::{IoError, IoResult, ReadOptions};
use bmpkit_core::alloc::{sample_count, try_filled};
use bmpkit_core::color::Rgb;
use bmpkit_core::header::{
    COLOR_TABLE_SIZE, FILE_HEADER_SIZE, HEADER_SIZE, INFO_HEADER_SIZE,
};
use bmpkit_core::{
    ColorDepth, FileHeader, InfoHeader, Raster8, Raster24, RasterHeader, row_stride,
};
use std::io::{Read, Seek, SeekFrom, Write};
use tracing::{debug, warn};

/// Read an 8-bit grayscale BMP
pub fn read_bmp8<R: Read>(reader: R) -> IoResult<Raster8> {
    read_bmp8_with(reader, &ReadOptions::default())
}

/// Read an 8-bit grayscale BMP with explicit options
pub fn read_bmp8_with<R: Read>(mut reader: R, options: &ReadOptions) -> IoResult<Raster8> {
    let mut header = [0u8; HEADER_SIZE];
    read_exact_or_truncated(&mut reader, &mut header, "header")?;

    let fields = RasterHeader::from_bytes(&header);
    let (width, height) = validate_header(&fields, ColorDepth::Gray8, options)?;
    let count = sample_count(width, height)?;

    if fields.data_size != 0 && fields.data_size as usize != count {
        if options.strict_data_size {
            return Err(IoError::InvalidData(format!(
                "declared data size {} does not match {}x{}",
                fields.data_size, width, height
            )));
        }
        warn!(
            declared = fields.data_size,
            computed = count,
            "8-bit BMP declares a data size different from width*height"
        );
    }

    let mut color_table = [0u8; COLOR_TABLE_SIZE];
    read_exact_or_truncated(&mut reader, &mut color_table, "color table")?;

    let data = read_samples(&mut reader, count)?;

    let mut trailer = Vec::new();
    reader.read_to_end(&mut trailer).map_err(IoError::Io)?;

    let total = HEADER_SIZE + COLOR_TABLE_SIZE + count + trailer.len();
    if total != fields.file_size as usize {
        warn!(
            declared = fields.file_size,
            actual = total,
            "BMP file size field does not match file length"
        );
    }

    debug!(width, height, trailer = trailer.len(), "decoded 8-bit BMP");
    Ok(Raster8::from_parts(header, color_table, data, trailer)?)
}

/// Read exactly `count` samples, growing the buffer only as bytes arrive.
///
/// A header that declares more samples than the stream holds fails as
/// truncated without first committing a buffer of the declared size.
fn read_samples<R: Read>(reader: &mut R, count: usize) -> IoResult<Vec<u8>> {
    const CHUNK: usize = 64 * 1024;
    let mut data = Vec::new();
    data.try_reserve_exact(count.min(CHUNK))
        .map_err(|_| bmpkit_core::Error::AllocationFailed { requested: count })?;
    let read = reader
        .by_ref()
        .take(count as u64)
        .read_to_end(&mut data)
        .map_err(IoError::Io)?;
    if read < count {
        return Err(IoError::InvalidData(format!(
            "truncated pixel data: need {count} bytes, got {read}"
        )));
    }
    Ok(data)
}

/// Write an 8-bit grayscale BMP
///
/// Emits header, color table, samples and any retained trailing bytes
/// exactly as held by the raster.
pub fn write_bmp8<W: Write>(raster: &Raster8, mut writer: W) -> IoResult<()> {
    writer.write_all(raster.header()).map_err(IoError::Io)?;
    writer.write_all(raster.color_table()).map_err(IoError::Io)?;
    writer.write_all(raster.data()).map_err(IoError::Io)?;
    writer.write_all(raster.trailer()).map_err(IoError::Io)?;
    Ok(())
}

/// Placement of 24-bit pixels inside a file.
///
/// Pixel (x, y), with y = 0 the top row, lives at
/// `offset + (height - 1 - y) * stride + x * 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    /// Absolute offset of the pixel array
    pub offset: u64,
    pub width: u32,
    pub height: u32,
}

impl PixelLayout {
    /// Layout described by a raster's own headers.
    pub fn of(raster: &Raster24) -> Self {
        Self {
            offset: raster.file_header().offset as u64,
            width: raster.width(),
            height: raster.height(),
        }
    }

    /// Padded row size in bytes.
    pub fn stride(&self) -> u64 {
        row_stride(self.width) as u64
    }

    /// Absolute byte position of pixel (x, y).
    ///
    /// `(x, y)` must lie inside the layout.
    pub fn position(&self, x: u32, y: u32) -> u64 {
        self.offset + (self.height - 1 - y) as u64 * self.stride() + x as u64 * 3
    }

    /// Absolute position just past the last padded row.
    pub fn end(&self) -> u64 {
        self.offset + self.height as u64 * self.stride()
    }
}

/// Read one pixel at its absolute file position.
///
/// Returns [`bmpkit_core::Error::IndexOutOfBounds`] when `(x, y)` lies
/// outside the layout.
pub fn read_pixel_value<R: Read + Seek>(
    reader: &mut R,
    layout: &PixelLayout,
    x: u32,
    y: u32,
) -> IoResult<Rgb> {
    if x >= layout.width || y >= layout.height {
        return Err(IoError::Core(bmpkit_core::Error::IndexOutOfBounds {
            x,
            y,
            width: layout.width,
            height: layout.height,
        }));
    }
    reader
        .seek(SeekFrom::Start(layout.position(x, y)))
        .map_err(IoError::Io)?;
    let mut bgr = [0u8; 3];
    read_exact_or_truncated(reader, &mut bgr, "pixel data")?;
    Ok(Rgb::from_bgr(bgr))
}

/// Write one pixel of `raster` at its absolute file position.
pub fn write_pixel_value<W: Write + Seek>(
    writer: &mut W,
    raster: &Raster24,
    x: u32,
    y: u32,
) -> IoResult<()> {
    let pixel = raster.get(x, y).ok_or_else(|| {
        IoError::Core(bmpkit_core::Error::IndexOutOfBounds {
            x,
            y,
            width: raster.width(),
            height: raster.height(),
        })
    })?;
    let layout = PixelLayout::of(raster);
    writer
        .seek(SeekFrom::Start(layout.position(x, y)))
        .map_err(IoError::Io)?;
    writer.write_all(&pixel.to_bgr()).map_err(IoError::Io)?;
    Ok(())
}

/// Read a 24-bit true-color BMP
pub fn read_bmp24<R: Read + Seek>(reader: R) -> IoResult<Raster24> {
    read_bmp24_with(reader, &ReadOptions::default())
}

/// Read a 24-bit true-color BMP with explicit options
///
/// All positions are absolute offsets from the start of the stream.
pub fn read_bmp24_with<R: Read + Seek>(
    mut reader: R,
    options: &ReadOptions,
) -> IoResult<Raster24> {
    let len = reader.seek(SeekFrom::End(0)).map_err(IoError::Io)?;
    reader.seek(SeekFrom::Start(0)).map_err(IoError::Io)?;

    let mut file_bytes = [0u8; FILE_HEADER_SIZE];
    read_exact_or_truncated(&mut reader, &mut file_bytes, "file header")?;
    let mut info_bytes = [0u8; INFO_HEADER_SIZE];
    read_exact_or_truncated(&mut reader, &mut info_bytes, "info header")?;

    let file_header = FileHeader::from_bytes(&file_bytes);
    let info = InfoHeader::from_bytes(&info_bytes);
    let fields = RasterHeader::from_parts(&file_header, &info);
    let (width, height) = validate_header(&fields, ColorDepth::Rgb24, options)?;

    let layout = PixelLayout {
        offset: file_header.offset as u64,
        width,
        height,
    };
    if layout.offset < HEADER_SIZE as u64 {
        return Err(IoError::InvalidData(format!(
            "pixel data offset {} overlaps the header",
            layout.offset
        )));
    }
    // Every row, the last included, must carry its full padded stride.
    let row_bytes = width as u64 * 3;
    let required = layout.end();
    if len < required {
        return Err(IoError::InvalidData(format!(
            "truncated pixel data: need {required} bytes, file has {len}"
        )));
    }
    if len != file_header.size as u64 {
        warn!(
            declared = file_header.size,
            actual = len,
            "BMP file size field does not match file length"
        );
    }

    let mut extra_header = try_filled((layout.offset - HEADER_SIZE as u64) as usize, 0u8)?;
    read_exact_or_truncated(&mut reader, &mut extra_header, "header extension")?;

    let mut data = try_filled(sample_count(width, height)?, Rgb::default())?;
    let mut row_buffer = try_filled(row_bytes as usize, 0u8)?;
    for (y, row) in data.chunks_exact_mut(width as usize).enumerate() {
        reader
            .seek(SeekFrom::Start(layout.position(0, y as u32)))
            .map_err(IoError::Io)?;
        read_exact_or_truncated(&mut reader, &mut row_buffer, "pixel data")?;
        for (pixel, bgr) in row.iter_mut().zip(row_buffer.chunks_exact(3)) {
            *pixel = Rgb::from_bgr([bgr[0], bgr[1], bgr[2]]);
        }
    }

    let mut trailer = Vec::new();
    if len > layout.end() {
        reader
            .seek(SeekFrom::Start(layout.end()))
            .map_err(IoError::Io)?;
        reader.read_to_end(&mut trailer).map_err(IoError::Io)?;
    }

    debug!(
        width,
        height,
        stride = layout.stride(),
        extra = extra_header.len(),
        trailer = trailer.len(),
        "decoded 24-bit BMP"
    );
    Ok(Raster24::from_parts(
        file_header,
        info,
        extra_header,
        data,
        trailer,
    )?)
}

/// Write a 24-bit true-color BMP
///
/// Headers and any retained extension/trailing bytes are written verbatim;
/// rows are written bottom-up in BGR order with zero padding.
pub fn write_bmp24<W: Write>(raster: &Raster24, mut writer: W) -> IoResult<()> {
    let layout = PixelLayout::of(raster);
    let expected_offset = (HEADER_SIZE + raster.extra_header().len()) as u64;
    if layout.offset != expected_offset {
        return Err(IoError::InvalidData(format!(
            "pixel data offset {} does not follow the {}-byte header",
            layout.offset, expected_offset
        )));
    }

    writer
        .write_all(&raster.file_header().to_bytes())
        .map_err(IoError::Io)?;
    writer
        .write_all(&raster.info_header().to_bytes())
        .map_err(IoError::Io)?;
    writer
        .write_all(raster.extra_header())
        .map_err(IoError::Io)?;

    let mut row_buffer = try_filled(layout.stride() as usize, 0u8)?;
    for y in (0..raster.height()).rev() {
        let row = raster.row(y).unwrap_or(&[]);
        for (bgr, pixel) in row_buffer.chunks_exact_mut(3).zip(row) {
            bgr.copy_from_slice(&pixel.to_bgr());
        }
        writer.write_all(&row_buffer).map_err(IoError::Io)?;
    }

    writer.write_all(raster.trailer()).map_err(IoError::Io)?;
    Ok(())
}
