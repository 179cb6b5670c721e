//! Intensity histograms
//!
//! - 8-bit rasters: direct frequency count of sample values
//! - 24-bit rasters: frequency count of the rounded YUV luminance of each
//!   pixel, clamped into `[0, 255]`

use super::{Raster, Raster8, Raster24};
use crate::color::rgb_to_yuv;

/// Number of intensity levels.
pub const HISTOGRAM_LEVELS: usize = 256;

/// Frequency table over the 256 intensity levels.
pub type Histogram = [u32; HISTOGRAM_LEVELS];

impl Raster8 {
    /// Count the occurrences of each sample value.
    ///
    /// The counts sum to `width * height`.
    pub fn histogram(&self) -> Histogram {
        let mut hist = [0u32; HISTOGRAM_LEVELS];
        for &v in self.data() {
            hist[v as usize] += 1;
        }
        hist
    }
}

impl Raster24 {
    /// Count the occurrences of each luminance level.
    ///
    /// Each pixel contributes once, at `round(Y)` of its YUV transform.
    pub fn histogram(&self) -> Histogram {
        let mut hist = [0u32; HISTOGRAM_LEVELS];
        for &p in self.pixels() {
            hist[rgb_to_yuv(p).luma_level()] += 1;
        }
        hist
    }
}

impl Raster {
    /// Intensity histogram of either raster kind.
    pub fn histogram(&self) -> Histogram {
        match self {
            Self::Gray(r) => r.histogram(),
            Self::Color(r) => r.histogram(),
        }
    }
}
