//! Edge and relief filters
//!
//! Kernel presets that emphasize local differences rather than smooth them.

use crate::convolve::Convolve;
use crate::kernel::KernelPreset;
use crate::{FilterResult, Kernel};

/// Apply the Laplacian outline filter.
///
/// Flat regions go to 0; edges are brightened.
pub fn outline<R: Convolve + ?Sized>(raster: &mut R) -> FilterResult<()> {
    raster.convolve(&Kernel::outline())
}

/// Apply the emboss filter.
pub fn emboss<R: Convolve + ?Sized>(raster: &mut R) -> FilterResult<()> {
    raster.convolve(&Kernel::emboss())
}

/// Apply the sharpening filter.
///
/// Flat regions are unchanged.
pub fn sharpen<R: Convolve + ?Sized>(raster: &mut R) -> FilterResult<()> {
    raster.convolve(&Kernel::sharpen())
}

/// Apply a named preset.
pub fn apply_preset<R: Convolve + ?Sized>(raster: &mut R, preset: KernelPreset) -> FilterResult<()> {
    raster.convolve(&preset.kernel())
}
