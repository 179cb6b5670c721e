//! bmpkit-io - BMP codec
//!
//! Translates between BMP files and in-memory rasters:
//!
//! - [`load_gray`] / [`save_gray`] for 8-bit grayscale files
//! - [`load_color`] / [`save_color`] for 24-bit true-color files
//! - [`read_image`] / [`write_image`] when the bit depth is not known up front
//! - [`read_header`] to inspect a file without decoding pixels
//!
//! Files are opened, used and closed within a single call. A failed save
//! may leave a partially written file behind.

pub mod bmp;
mod error;
pub mod header;
mod options;

pub use bmp::{
    PixelLayout, read_bmp8, read_bmp8_with, read_bmp24, read_bmp24_with, read_pixel_value,
    write_bmp8, write_bmp24, write_pixel_value,
};
pub use error::{IoError, IoErrorKind, IoResult};
pub use header::{read_header, read_header_mem};
pub use options::ReadOptions;

use bmpkit_core::{ColorDepth, Raster, Raster8, Raster24};
use std::fs::File;
use std::io::{BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::info;

/// Load an 8-bit grayscale BMP from a file path.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be opened or read
/// - [`IoError::InvalidData`] on a bad signature or truncated file
/// - [`IoError::UnsupportedFormat`] if the file is not 8-bit uncompressed
pub fn load_gray<P: AsRef<Path>>(path: P) -> IoResult<Raster8> {
    load_gray_with(path, &ReadOptions::default())
}

/// Load an 8-bit grayscale BMP with explicit options.
pub fn load_gray_with<P: AsRef<Path>>(path: P, options: &ReadOptions) -> IoResult<Raster8> {
    let path = path.as_ref();
    let file = File::open(path).map_err(IoError::Io)?;
    let raster = read_bmp8_with(BufReader::new(file), options)?;
    info!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "loaded 8-bit BMP"
    );
    Ok(raster)
}

/// Load a 24-bit true-color BMP from a file path.
///
/// # Errors
///
/// Same as [`load_gray`], with the bit-depth check reversed.
pub fn load_color<P: AsRef<Path>>(path: P) -> IoResult<Raster24> {
    load_color_with(path, &ReadOptions::default())
}

/// Load a 24-bit true-color BMP with explicit options.
pub fn load_color_with<P: AsRef<Path>>(path: P, options: &ReadOptions) -> IoResult<Raster24> {
    let path = path.as_ref();
    let file = File::open(path).map_err(IoError::Io)?;
    let raster = read_bmp24_with(BufReader::new(file), options)?;
    info!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "loaded 24-bit BMP"
    );
    Ok(raster)
}

/// Save an 8-bit grayscale raster, creating or truncating the file.
pub fn save_gray<P: AsRef<Path>>(raster: &Raster8, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path).map_err(IoError::Io)?);
    write_bmp8(raster, &mut writer)?;
    writer.flush().map_err(IoError::Io)?;
    info!(path = %path.display(), "saved 8-bit BMP");
    Ok(())
}

/// Save a 24-bit true-color raster, creating or truncating the file.
pub fn save_color<P: AsRef<Path>>(raster: &Raster24, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path).map_err(IoError::Io)?);
    write_bmp24(raster, &mut writer)?;
    writer.flush().map_err(IoError::Io)?;
    info!(path = %path.display(), "saved 24-bit BMP");
    Ok(())
}

/// Load a BMP of either supported depth.
///
/// Dispatches on the declared bits per pixel: 8 yields [`Raster::Gray`],
/// 24 yields [`Raster::Color`], anything else is rejected.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    read_image_with(path, &ReadOptions::default())
}

/// Load a BMP of either supported depth with explicit options.
pub fn read_image_with<P: AsRef<Path>>(path: P, options: &ReadOptions) -> IoResult<Raster> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path).map_err(IoError::Io)?);
    let header = header::read_header_from(&mut reader)?;
    reader.seek(SeekFrom::Start(0)).map_err(IoError::Io)?;

    let depth = ColorDepth::from_bits(header.bits_per_pixel).map_err(|_| {
        IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            header.bits_per_pixel
        ))
    })?;
    let raster = match depth {
        ColorDepth::Gray8 => Raster::Gray(read_bmp8_with(reader, options)?),
        ColorDepth::Rgb24 => Raster::Color(read_bmp24_with(reader, options)?),
    };
    info!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        depth = ?raster.depth(),
        "loaded BMP"
    );
    Ok(raster)
}

/// Save a raster of either kind.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    match raster {
        Raster::Gray(r) => save_gray(r, path),
        Raster::Color(r) => save_color(r, path),
    }
}

/// Human-readable metadata summary of a raster.
pub fn print_info(raster: &Raster) -> String {
    raster.info().to_string()
}
