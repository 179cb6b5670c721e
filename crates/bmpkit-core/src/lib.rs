//! bmpkit Core - Raster store for BMP image processing
//!
//! This crate provides the in-memory data structures shared by the codec
//! and the processing engines:
//!
//! - [`Raster8`] - 8-bit grayscale raster with an opaque 54-byte header
//!   and a 256-entry color table
//! - [`Raster24`] - 24-bit true-color raster with structured headers
//! - [`Raster`] - Either of the above, for format-agnostic callers
//! - [`FileHeader`] / [`InfoHeader`] / [`RasterHeader`] - BMP header models
//! - [`color`] - RGB pixel type and the YUV transform used by equalization
//!
//! Point transforms that apply to both raster kinds (negative, brightness)
//! and histogram computation live here as well.

pub mod alloc;
pub mod error;
pub mod header;
pub mod raster;

pub use error::{Error, Result};
pub use header::{FileHeader, InfoHeader, RasterHeader};
pub use raster::histogram::{HISTOGRAM_LEVELS, Histogram};
pub use raster::{ColorDepth, Raster, Raster8, Raster24, RasterInfo, row_stride};

/// Pixel type and color-space helpers for 24-bit rasters.
///
/// # YUV transform
///
/// The forward transform is
///
/// ```text
/// Y =  0.299   R + 0.587   G + 0.114   B
/// U = -0.14713 R - 0.28886 G + 0.436   B
/// V =  0.625   R - 0.51419 G - 0.10001 B
/// ```
///
/// and the inverse used after equalization is
///
/// ```text
/// R = Y + 1.13983 V
/// G = Y - 0.39465 U - 0.58060 V
/// B = Y + 2.03211 U
/// ```
///
/// The V row of the forward matrix differs from BT.601; both directions are
/// kept exactly as listed so that equalized output is reproducible.
pub mod color {
    /// A 24-bit pixel in memory order (red, green, blue).
    ///
    /// On disk the channels are stored blue-green-red.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Rgb {
        pub red: u8,
        pub green: u8,
        pub blue: u8,
    }

    impl Rgb {
        /// Create a pixel from its three channels.
        #[inline]
        pub const fn new(red: u8, green: u8, blue: u8) -> Self {
            Self { red, green, blue }
        }

        /// Create a pixel from disk-order bytes `[b, g, r]`.
        #[inline]
        pub const fn from_bgr(bgr: [u8; 3]) -> Self {
            Self {
                red: bgr[2],
                green: bgr[1],
                blue: bgr[0],
            }
        }

        /// Disk-order bytes `[b, g, r]`.
        #[inline]
        pub const fn to_bgr(self) -> [u8; 3] {
            [self.blue, self.green, self.red]
        }

        /// Apply `f` to each channel.
        #[inline]
        pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Self {
            Self {
                red: f(self.red),
                green: f(self.green),
                blue: f(self.blue),
            }
        }
    }

    /// Luminance/chrominance sample.
    ///
    /// Only ever a transient working value during equalization.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Yuv {
        pub y: f32,
        pub u: f32,
        pub v: f32,
    }

    impl Yuv {
        /// Luminance rounded to the nearest level and clamped into `[0, 255]`.
        #[inline]
        pub fn luma_level(&self) -> usize {
            (self.y as f64).round().clamp(0.0, 255.0) as usize
        }
    }

    /// Convert a pixel to YUV.
    #[inline]
    pub fn rgb_to_yuv(p: Rgb) -> Yuv {
        let r = p.red as f64;
        let g = p.green as f64;
        let b = p.blue as f64;
        Yuv {
            y: (0.299 * r + 0.587 * g + 0.114 * b) as f32,
            u: (-0.14713 * r - 0.28886 * g + 0.436 * b) as f32,
            v: (0.625 * r - 0.51419 * g - 0.10001 * b) as f32,
        }
    }

    /// Convert YUV back to a pixel.
    ///
    /// Each channel is rounded, clamped to `[0, 255]`, then narrowed.
    #[inline]
    pub fn yuv_to_rgb(yuv: Yuv) -> Rgb {
        let y = yuv.y as f64;
        let u = yuv.u as f64;
        let v = yuv.v as f64;
        let channel = |x: f64| x.round().clamp(0.0, 255.0) as u8;
        Rgb {
            red: channel(y + 1.13983 * v),
            green: channel(y - 0.39465 * u - 0.58060 * v),
            blue: channel(y + 2.03211 * u),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_bgr_order() {
            let p = Rgb::from_bgr([1, 2, 3]);
            assert_eq!(p, Rgb::new(3, 2, 1));
            assert_eq!(p.to_bgr(), [1, 2, 3]);
        }

        #[test]
        fn test_yuv_gray_chroma() {
            // The V row sums to 0.0108, so gray carries a small V term.
            let yuv = rgb_to_yuv(Rgb::new(128, 128, 128));
            assert!((yuv.y - 128.0).abs() < 1e-3);
            assert!(yuv.u.abs() < 1e-2);
            assert!((yuv.v - 1.3824).abs() < 1e-3, "v = {}", yuv.v);
            assert_eq!(yuv.luma_level(), 128);
        }

        #[test]
        fn test_yuv_white_luma_clamped() {
            let yuv = rgb_to_yuv(Rgb::new(255, 255, 255));
            assert_eq!(yuv.luma_level(), 255);
            let yuv = rgb_to_yuv(Rgb::new(0, 0, 0));
            assert_eq!(yuv.luma_level(), 0);
        }

        #[test]
        fn test_yuv_roundtrip_close() {
            let colors = [
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 0, 255),
                Rgb::new(10, 20, 30),
                Rgb::new(128, 64, 32),
            ];
            for c in colors {
                let back = yuv_to_rgb(rgb_to_yuv(c));
                assert!(
                    (back.red as i32 - c.red as i32).abs() <= 3
                        && (back.green as i32 - c.green as i32).abs() <= 3
                        && (back.blue as i32 - c.blue as i32).abs() <= 3,
                    "roundtrip drifted for {c:?}: got {back:?}"
                );
            }
        }

        #[test]
        fn test_yuv_to_rgb_clamps() {
            let out = yuv_to_rgb(Yuv {
                y: 300.0,
                u: 0.0,
                v: 0.0,
            });
            assert_eq!(out, Rgb::new(255, 255, 255));
            let out = yuv_to_rgb(Yuv {
                y: -20.0,
                u: 0.0,
                v: 0.0,
            });
            assert_eq!(out, Rgb::new(0, 0, 0));
        }
    }
}
