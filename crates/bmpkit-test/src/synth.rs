//! Hand-assembled BMP files
//!
//! The builders here lay out headers and pixel bytes directly, without
//! touching the codec, so that decoder tests have an independent source of
//! truth. Sample generators receive `(x, y)` in raster coordinates, with
//! `y = 0` the first row of the in-memory image.

/// Options for [`color_bmp_with`].
#[derive(Debug, Clone, Default)]
pub struct ColorLayout {
    /// Bytes inserted between the 54-byte header and the pixel data
    pub extra_header: Vec<u8>,
    /// Bytes appended after the last padded row
    pub trailer: Vec<u8>,
    /// Value written into each row's padding bytes
    pub padding_byte: u8,
}

fn put_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn headers(
    file_size: u32,
    offset: u32,
    width: i32,
    height: i32,
    bits: u16,
    image_size: u32,
    colors_used: u32,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(54);
    buf.extend_from_slice(b"BM");
    put_u32(&mut buf, file_size);
    put_u16(&mut buf, 0);
    put_u16(&mut buf, 0);
    put_u32(&mut buf, offset);
    put_u32(&mut buf, 40);
    buf.extend_from_slice(&width.to_le_bytes());
    buf.extend_from_slice(&height.to_le_bytes());
    put_u16(&mut buf, 1);
    put_u16(&mut buf, bits);
    put_u32(&mut buf, 0);
    put_u32(&mut buf, image_size);
    put_u32(&mut buf, 2835);
    put_u32(&mut buf, 2835);
    put_u32(&mut buf, colors_used);
    put_u32(&mut buf, 0);
    buf
}

/// Build an 8-bit grayscale BMP.
///
/// Samples follow the 1078-byte header region in raster order with no row
/// padding, matching how 8-bit files are stored and re-emitted.
pub fn gray_bmp(width: u32, height: u32, sample: impl Fn(u32, u32) -> u8) -> Vec<u8> {
    let data_size = width * height;
    let offset = 54 + 1024;
    let mut buf = headers(
        offset + data_size,
        offset,
        width as i32,
        height as i32,
        8,
        data_size,
        256,
    );
    for i in 0..=255u8 {
        buf.extend_from_slice(&[i, i, i, 0]);
    }
    for y in 0..height {
        for x in 0..width {
            buf.push(sample(x, y));
        }
    }
    buf
}

/// Build a 24-bit BMP with a 54-byte header, zero padding and no trailer.
pub fn color_bmp(width: u32, height: u32, pixel: impl Fn(u32, u32) -> [u8; 3]) -> Vec<u8> {
    color_bmp_with(width, height, pixel, &ColorLayout::default())
}

/// Build a 24-bit BMP with custom layout details.
///
/// `pixel` returns `[r, g, b]`. Rows are written bottom-up in BGR order,
/// each padded to a multiple of 4 bytes.
pub fn color_bmp_with(
    width: u32,
    height: u32,
    pixel: impl Fn(u32, u32) -> [u8; 3],
    layout: &ColorLayout,
) -> Vec<u8> {
    let stride = (width * 3).div_ceil(4) * 4;
    let image_size = stride * height;
    let offset = 54 + layout.extra_header.len() as u32;
    let file_size = offset + image_size + layout.trailer.len() as u32;

    let mut buf = headers(
        file_size,
        offset,
        width as i32,
        height as i32,
        24,
        image_size,
        0,
    );
    buf.extend_from_slice(&layout.extra_header);
    for y in (0..height).rev() {
        for x in 0..width {
            let [r, g, b] = pixel(x, y);
            buf.extend_from_slice(&[b, g, r]);
        }
        for _ in width * 3..stride {
            buf.push(layout.padding_byte);
        }
    }
    buf.extend_from_slice(&layout.trailer);
    buf
}

/// Overwrite a little-endian `u16` field at `at`.
pub fn patch_u16(bytes: &mut [u8], at: usize, value: u16) {
    bytes[at..at + 2].copy_from_slice(&value.to_le_bytes());
}

/// Overwrite a little-endian `u32` field at `at`.
pub fn patch_u32(bytes: &mut [u8], at: usize, value: u32) {
    bytes[at..at + 4].copy_from_slice(&value.to_le_bytes());
}
