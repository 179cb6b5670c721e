//! BMP header structures
//!
//! Byte-exact models of the 14-byte file header and the 40-byte
//! `BITMAPINFOHEADER`. All multi-byte fields are little-endian on disk.
//!
//! # Layout
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0  | 2 | signature (`BM`) |
//! | 2  | 4 | file size |
//! | 6  | 4 | reserved |
//! | 10 | 4 | pixel data offset |
//! | 14 | 4 | info header size |
//! | 18 | 4 | width (signed) |
//! | 22 | 4 | height (signed) |
//! | 26 | 2 | planes |
//! | 28 | 2 | bits per pixel |
//! | 30 | 4 | compression |
//! | 34 | 4 | raw image size |
//! | 38 | 4 | x resolution |
//! | 42 | 4 | y resolution |
//! | 46 | 4 | colors used |
//! | 50 | 4 | important colors |

/// The 2-byte BMP signature.
pub const BMP_SIGNATURE: [u8; 2] = *b"BM";

/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the `BITMAPINFOHEADER` in bytes.
pub const INFO_HEADER_SIZE: usize = 40;

/// Combined size of file header and info header.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Size of the 256-entry BGRA color table of an 8-bit image.
pub const COLOR_TABLE_SIZE: usize = 256 * 4;

/// Byte offsets of the fields used by the 8-bit codec.
pub mod offsets {
    pub const SIGNATURE: usize = 0x00;
    pub const FILE_SIZE: usize = 0x02;
    pub const DATA_OFFSET: usize = 0x0A;
    pub const WIDTH: usize = 0x12;
    pub const HEIGHT: usize = 0x16;
    pub const BITS: usize = 0x1C;
    pub const COMPRESSION: usize = 0x1E;
    pub const DATA_SIZE: usize = 0x22;
}

#[inline]
pub(crate) fn le_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

#[inline]
pub(crate) fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
pub(crate) fn le_i32(bytes: &[u8], at: usize) -> i32 {
    le_u32(bytes, at) as i32
}

/// BMP file header (14 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// File type identifier, `BM` for valid files
    pub signature: [u8; 2],
    /// Total file size in bytes, as declared
    pub size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset from the start of the file to the pixel array
    pub offset: u32,
}

impl FileHeader {
    /// Decode from the first 14 bytes of a file.
    pub fn from_bytes(bytes: &[u8; FILE_HEADER_SIZE]) -> Self {
        Self {
            signature: [bytes[0], bytes[1]],
            size: le_u32(bytes, 2),
            reserved1: le_u16(bytes, 6),
            reserved2: le_u16(bytes, 8),
            offset: le_u32(bytes, 10),
        }
    }

    /// Encode to 14 bytes.
    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut out = [0u8; FILE_HEADER_SIZE];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.size.to_le_bytes());
        out[6..8].copy_from_slice(&self.reserved1.to_le_bytes());
        out[8..10].copy_from_slice(&self.reserved2.to_le_bytes());
        out[10..14].copy_from_slice(&self.offset.to_le_bytes());
        out
    }

    /// Whether the signature matches `BM`.
    pub fn has_valid_signature(&self) -> bool {
        self.signature == BMP_SIGNATURE
    }
}

/// BMP information header (`BITMAPINFOHEADER`, 40 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    /// Declared size of this header (40 for `BITMAPINFOHEADER`)
    pub size: u32,
    pub width: i32,
    /// Positive for bottom-up images
    pub height: i32,
    pub planes: u16,
    pub bits: u16,
    /// 0 = uncompressed
    pub compression: u32,
    /// Declared size of the raw pixel data
    pub image_size: u32,
    /// Horizontal resolution in pixels per meter
    pub x_resolution: i32,
    /// Vertical resolution in pixels per meter
    pub y_resolution: i32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    /// Decode from the 40 bytes following the file header.
    pub fn from_bytes(bytes: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            size: le_u32(bytes, 0),
            width: le_i32(bytes, 4),
            height: le_i32(bytes, 8),
            planes: le_u16(bytes, 12),
            bits: le_u16(bytes, 14),
            compression: le_u32(bytes, 16),
            image_size: le_u32(bytes, 20),
            x_resolution: le_i32(bytes, 24),
            y_resolution: le_i32(bytes, 28),
            colors_used: le_u32(bytes, 32),
            important_colors: le_u32(bytes, 36),
        }
    }

    /// Encode to 40 bytes.
    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut out = [0u8; INFO_HEADER_SIZE];
        out[0..4].copy_from_slice(&self.size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bits.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_resolution.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_resolution.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.important_colors.to_le_bytes());
        out
    }
}

/// The header fields shared by both raster kinds.
///
/// A flattened view of [`FileHeader`] and [`InfoHeader`] holding only what
/// the codec validates and what `print_info` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub data_offset: u32,
    pub width: i32,
    pub height: i32,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub data_size: u32,
}

impl RasterHeader {
    /// Decode the combined 54-byte header region.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        Self {
            signature: [bytes[offsets::SIGNATURE], bytes[offsets::SIGNATURE + 1]],
            file_size: le_u32(bytes, offsets::FILE_SIZE),
            data_offset: le_u32(bytes, offsets::DATA_OFFSET),
            width: le_i32(bytes, offsets::WIDTH),
            height: le_i32(bytes, offsets::HEIGHT),
            bits_per_pixel: le_u16(bytes, offsets::BITS),
            compression: le_u32(bytes, offsets::COMPRESSION),
            data_size: le_u32(bytes, offsets::DATA_SIZE),
        }
    }

    /// Build the flattened view from the two structured headers.
    pub fn from_parts(file: &FileHeader, info: &InfoHeader) -> Self {
        Self {
            signature: file.signature,
            file_size: file.size,
            data_offset: file.offset,
            width: info.width,
            height: info.height,
            bits_per_pixel: info.bits,
            compression: info.compression,
            data_size: info.image_size,
        }
    }

    /// Whether the signature matches `BM`.
    pub fn has_valid_signature(&self) -> bool {
        self.signature == BMP_SIGNATURE
    }
}
