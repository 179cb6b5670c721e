//! Binary thresholding

use crate::{ColorError, ColorResult};
use bmpkit_core::{ColorDepth, Raster, Raster8};
use tracing::debug;

/// Map every sample to 255 if it is strictly greater than `threshold`,
/// otherwise to 0.
///
/// `threshold` may lie outside `[0, 255]`: below 0 every sample becomes
/// 255, at 255 or above every sample becomes 0.
pub fn threshold_gray(raster: &mut Raster8, threshold: i32) {
    debug!(threshold, "threshold 8-bit");
    for v in raster.data_mut() {
        *v = if i32::from(*v) > threshold { 255 } else { 0 };
    }
}

/// Threshold a raster of either kind.
///
/// # Errors
///
/// [`ColorError::UnsupportedKind`] for 24-bit rasters.
pub fn threshold(raster: &mut Raster, threshold: i32) -> ColorResult<()> {
    match raster {
        Raster::Gray(r) => {
            threshold_gray(r, threshold);
            Ok(())
        }
        Raster::Color(_) => Err(ColorError::UnsupportedKind {
            expected: ColorDepth::Gray8,
            actual: ColorDepth::Rgb24,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmpkit_core::Raster24;

    fn ramp() -> Raster8 {
        let mut r = Raster8::new(16, 16).unwrap();
        for (i, v) in r.data_mut().iter_mut().enumerate() {
            *v = i as u8;
        }
        r
    }

    #[test]
    fn test_strictly_greater() {
        let mut r = ramp();
        threshold_gray(&mut r, 128);
        assert_eq!(r.data()[128], 0);
        assert_eq!(r.data()[129], 255);
        assert_eq!(r.data()[0], 0);
        assert_eq!(r.data()[255], 255);
    }

    #[test]
    fn test_out_of_range_thresholds() {
        let mut r = ramp();
        threshold_gray(&mut r, -1);
        assert!(r.data().iter().all(|&v| v == 255));

        let mut r = ramp();
        threshold_gray(&mut r, 255);
        assert!(r.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_rejects_color() {
        let mut r = Raster::from(Raster24::new(2, 2).unwrap());
        assert!(threshold(&mut r, 10).is_err());
    }
}
