//! Grayscale conversion
//!
//! Uses the plain channel average, `(r + g + b) / 3` with integer
//! truncation. This is not the luminance weighting used by equalization.

use crate::{ColorError, ColorResult};
use bmpkit_core::color::Rgb;
use bmpkit_core::{ColorDepth, Raster, Raster24};
use tracing::debug;

/// Average of the three channels, truncated.
#[inline]
pub fn average_gray(p: Rgb) -> u8 {
    ((p.red as u16 + p.green as u16 + p.blue as u16) / 3) as u8
}

/// Replace every pixel of a 24-bit raster with its channel average.
///
/// The raster stays 24-bit; all three channels receive the same value.
pub fn grayscale_color(raster: &mut Raster24) {
    debug!(
        width = raster.width(),
        height = raster.height(),
        "grayscale 24-bit"
    );
    for p in raster.pixels_mut() {
        let g = average_gray(*p);
        *p = Rgb::new(g, g, g);
    }
}

/// Grayscale conversion on a raster of either kind.
///
/// # Errors
///
/// [`ColorError::UnsupportedKind`] for 8-bit rasters.
pub fn grayscale(raster: &mut Raster) -> ColorResult<()> {
    match raster {
        Raster::Color(r) => {
            grayscale_color(r);
            Ok(())
        }
        Raster::Gray(_) => Err(ColorError::UnsupportedKind {
            expected: ColorDepth::Rgb24,
            actual: ColorDepth::Gray8,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmpkit_core::Raster8;

    #[test]
    fn test_average_truncates() {
        assert_eq!(average_gray(Rgb::new(10, 20, 30)), 20);
        assert_eq!(average_gray(Rgb::new(1, 1, 0)), 0);
        assert_eq!(average_gray(Rgb::new(2, 2, 1)), 1);
        assert_eq!(average_gray(Rgb::new(255, 255, 255)), 255);
    }

    #[test]
    fn test_grayscale_fills_channels() {
        let mut r = Raster24::new(4, 4).unwrap();
        for p in r.pixels_mut() {
            *p = Rgb::new(10, 20, 30);
        }
        grayscale_color(&mut r);
        assert!(r.pixels().iter().all(|&p| p == Rgb::new(20, 20, 20)));
    }

    #[test]
    fn test_grayscale_rejects_gray() {
        let mut r = Raster::from(Raster8::new(2, 2).unwrap());
        let err = grayscale(&mut r).unwrap_err();
        assert!(matches!(err, ColorError::UnsupportedKind { .. }));
    }
}
