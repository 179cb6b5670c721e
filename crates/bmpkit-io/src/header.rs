//! Header probing and validation
//!
//! Reads the fixed 54-byte header region without decoding pixel data and
//! checks it against the requirements of a given raster kind.

use crate::{IoError, IoResult, ReadOptions};
use bmpkit_core::header::HEADER_SIZE;
use bmpkit_core::{ColorDepth, RasterHeader};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Read header metadata from a file path without decoding pixel data.
pub fn read_header<P: AsRef<Path>>(path: P) -> IoResult<RasterHeader> {
    let file = File::open(path.as_ref()).map_err(IoError::Io)?;
    read_header_from(BufReader::new(file))
}

/// Read header metadata from bytes without decoding pixel data.
pub fn read_header_mem(data: &[u8]) -> IoResult<RasterHeader> {
    read_header_from(data)
}

/// Read and signature-check the 54-byte header from a stream.
pub(crate) fn read_header_from<R: Read>(mut reader: R) -> IoResult<RasterHeader> {
    let mut bytes = [0u8; HEADER_SIZE];
    read_exact_or_truncated(&mut reader, &mut bytes, "header")?;
    let header = RasterHeader::from_bytes(&bytes);
    if !header.has_valid_signature() {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }
    debug!(
        width = header.width,
        height = header.height,
        bits = header.bits_per_pixel,
        "read BMP header"
    );
    Ok(header)
}

/// Fill `buf` from `reader`, reporting a short read as a format error.
pub(crate) fn read_exact_or_truncated<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    what: &str,
) -> IoResult<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => IoError::InvalidData(format!("truncated {what}")),
        _ => IoError::Io(e),
    })
}

/// Check a header against the expected raster kind.
///
/// Checks run in order: signature, bit depth, compression, dimensions,
/// dimension limit. Returns the validated `(width, height)`.
pub(crate) fn validate_header(
    header: &RasterHeader,
    expected: ColorDepth,
    options: &ReadOptions,
) -> IoResult<(u32, u32)> {
    if !header.has_valid_signature() {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    if header.bits_per_pixel != expected.bits() {
        return Err(IoError::UnsupportedFormat(format!(
            "expected {}-bit BMP, found {}-bit",
            expected.bits(),
            header.bits_per_pixel
        )));
    }

    if header.compression != 0 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            header.compression
        )));
    }

    if header.width <= 0 || header.height <= 0 {
        return Err(IoError::InvalidData(format!(
            "invalid BMP dimensions: {}x{}",
            header.width, header.height
        )));
    }
    let width = header.width as u32;
    let height = header.height as u32;

    if let Some(max) = options.max_dimension
        && (width > max || height > max)
    {
        return Err(IoError::InvalidData(format!(
            "image {width}x{height} exceeds maximum dimension {max}"
        )));
    }

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmpkit_core::Raster24;

    fn color_header() -> RasterHeader {
        Raster24::new(4, 3).unwrap().raster_header()
    }

    #[test]
    fn test_validate_ok() {
        let h = color_header();
        let dims = validate_header(&h, ColorDepth::Rgb24, &ReadOptions::default()).unwrap();
        assert_eq!(dims, (4, 3));
    }

    #[test]
    fn test_validate_wrong_depth() {
        let h = color_header();
        let err = validate_header(&h, ColorDepth::Gray8, &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_validate_bad_signature() {
        let mut h = color_header();
        h.signature = *b"XX";
        let err = validate_header(&h, ColorDepth::Rgb24, &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::InvalidData(_)));
    }

    #[test]
    fn test_validate_compression() {
        let mut h = color_header();
        h.compression = 1;
        assert!(validate_header(&h, ColorDepth::Rgb24, &ReadOptions::default()).is_err());
    }

    #[test]
    fn test_validate_top_down_rejected() {
        let mut h = color_header();
        h.height = -3;
        assert!(validate_header(&h, ColorDepth::Rgb24, &ReadOptions::default()).is_err());
    }

    #[test]
    fn test_validate_max_dimension() {
        let h = color_header();
        let opts = ReadOptions::default().with_max_dimension(3);
        assert!(validate_header(&h, ColorDepth::Rgb24, &opts).is_err());
        let opts = ReadOptions::default().with_max_dimension(4);
        assert!(validate_header(&h, ColorDepth::Rgb24, &opts).is_ok());
    }

    #[test]
    fn test_read_header_mem_short() {
        let err = read_header_mem(b"BM\0\0").unwrap_err();
        assert!(matches!(err, IoError::InvalidData(_)));
    }
}
