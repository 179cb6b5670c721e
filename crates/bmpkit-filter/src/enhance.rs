//! Histogram equalization
//!
//! Equalization runs in three steps: histogram, cumulative distribution,
//! then a 256-entry lookup table applied to the intensity of every pixel.
//! For 8-bit rasters the intensity is the sample itself. For 24-bit
//! rasters it is the rounded YUV luminance; chrominance is carried through
//! and RGB is rebuilt with the inverse transform.

use crate::FilterResult;
use bmpkit_core::color::{Yuv, rgb_to_yuv, yuv_to_rgb};
use bmpkit_core::{HISTOGRAM_LEVELS, Histogram, Raster, Raster8, Raster24};
use tracing::debug;

/// Cumulative distribution over the 256 intensity levels.
pub type Cdf = [u32; HISTOGRAM_LEVELS];

/// A 256-entry lookup table from input level to equalized level.
pub type EqualizationMap = [u8; HISTOGRAM_LEVELS];

fn identity_map() -> EqualizationMap {
    let mut map = [0u8; HISTOGRAM_LEVELS];
    for (i, entry) in map.iter_mut().enumerate() {
        *entry = i as u8;
    }
    map
}

/// Running sum of a histogram.
///
/// `cdf[255]` is the total pixel count.
pub fn compute_cdf(hist: &Histogram) -> Cdf {
    let mut cdf = [0u32; HISTOGRAM_LEVELS];
    let mut acc = 0u32;
    for (out, &count) in cdf.iter_mut().zip(hist) {
        acc = acc.saturating_add(count);
        *out = acc;
    }
    cdf
}

/// Build the equalization lookup table for a cumulative distribution.
///
/// With `n = cdf[255]` and `cdf_min` the smallest positive entry among
/// `cdf[1..]`, level `i` maps to
/// `round((cdf[i] - cdf_min) / (n - cdf_min) * 255)`, clamped to
/// `[0, 255]`. `cdf[0]` is never considered for `cdf_min`.
///
/// When every pixel shares one level (`n == cdf_min`), or the distribution
/// is empty, the identity table is returned.
pub fn equalization_map(cdf: &Cdf) -> EqualizationMap {
    let n = cdf[HISTOGRAM_LEVELS - 1];
    let Some(cdf_min) = cdf[1..].iter().copied().filter(|&c| c > 0).min() else {
        return identity_map();
    };
    if n == cdf_min {
        return identity_map();
    }

    let range = (n - cdf_min) as f32;
    let mut map = [0u8; HISTOGRAM_LEVELS];
    for (entry, &c) in map.iter_mut().zip(cdf) {
        let level = (c as f32 - cdf_min as f32) / range * 255.0;
        *entry = level.round().clamp(0.0, 255.0) as u8;
    }
    map
}

/// Equalize an 8-bit raster in place.
pub fn equalize_gray(raster: &mut Raster8) -> FilterResult<()> {
    let map = equalization_map(&compute_cdf(&raster.histogram()));
    debug!(
        width = raster.width(),
        height = raster.height(),
        "equalize 8-bit"
    );
    for v in raster.data_mut() {
        *v = map[*v as usize];
    }
    Ok(())
}

/// Equalize the luminance of a 24-bit raster in place.
pub fn equalize_color(raster: &mut Raster24) -> FilterResult<()> {
    let map = equalization_map(&compute_cdf(&raster.histogram()));
    debug!(
        width = raster.width(),
        height = raster.height(),
        "equalize 24-bit"
    );
    for p in raster.pixels_mut() {
        let yuv = rgb_to_yuv(*p);
        let y = map[yuv.luma_level()] as f32;
        *p = yuv_to_rgb(Yuv { y, ..yuv });
    }
    Ok(())
}

/// Equalize a raster of either kind.
pub fn equalize(raster: &mut Raster) -> FilterResult<()> {
    match raster {
        Raster::Gray(r) => equalize_gray(r),
        Raster::Color(r) => equalize_color(r),
    }
}
