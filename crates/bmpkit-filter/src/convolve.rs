//! Convolution operations
//!
//! Applies a [`Kernel`] to every pixel whose full kernel footprint lies
//! inside the image. Pixels within `kernel.center()` of any edge keep their
//! original values. Each output value is the `f32` weighted sum of the
//! pre-filter neighborhood, clamped to `[0, 255]` and truncated.

use crate::{FilterResult, Kernel};
use bmpkit_core::alloc::try_copy;
use bmpkit_core::color::Rgb;
use bmpkit_core::{Raster, Raster8, Raster24};
use tracing::debug;

/// Rasters that can be convolved in place.
pub trait Convolve {
    /// Apply `kernel` to the interior of the raster.
    fn convolve(&mut self, kernel: &Kernel) -> FilterResult<()>;
}

impl Convolve for Raster8 {
    fn convolve(&mut self, kernel: &Kernel) -> FilterResult<()> {
        convolve_gray(self, kernel)
    }
}

impl Convolve for Raster24 {
    fn convolve(&mut self, kernel: &Kernel) -> FilterResult<()> {
        convolve_color(self, kernel)
    }
}

impl Convolve for Raster {
    fn convolve(&mut self, kernel: &Kernel) -> FilterResult<()> {
        convolve(self, kernel)
    }
}

#[inline]
fn clamp_truncate(sum: f32) -> u8 {
    sum.clamp(0.0, 255.0) as u8
}

/// Convolve an 8-bit grayscale raster in place.
///
/// The neighborhood is read from a copy of the samples taken before any
/// output is written; border samples are never touched.
pub fn convolve_gray(raster: &mut Raster8, kernel: &Kernel) -> FilterResult<()> {
    let w = raster.width() as usize;
    let h = raster.height() as usize;
    let size = kernel.size() as usize;
    let c = kernel.center() as usize;
    debug!(width = w, height = h, kernel = size, "convolve 8-bit");

    let source = try_copy(raster.data())?;
    let weights = kernel.data();
    let out = raster.data_mut();

    for y in c..h.saturating_sub(c) {
        for x in c..w.saturating_sub(c) {
            let mut sum = 0.0f32;
            for i in 0..size {
                let row = (y + i - c) * w;
                for j in 0..size {
                    sum += source[row + x + j - c] as f32 * weights[i * size + j];
                }
            }
            out[y * w + x] = clamp_truncate(sum);
        }
    }

    Ok(())
}

/// Convolve a 24-bit raster, channel by channel.
///
/// Output is assembled in a fresh buffer seeded with the original pixels,
/// then swapped in, so border pixels carry over unchanged.
pub fn convolve_color(raster: &mut Raster24, kernel: &Kernel) -> FilterResult<()> {
    let w = raster.width() as usize;
    let h = raster.height() as usize;
    let size = kernel.size() as usize;
    let c = kernel.center() as usize;
    debug!(width = w, height = h, kernel = size, "convolve 24-bit");

    let source = raster.pixels();
    let weights = kernel.data();
    let mut out = try_copy(source)?;

    for y in c..h.saturating_sub(c) {
        for x in c..w.saturating_sub(c) {
            let (mut red, mut green, mut blue) = (0.0f32, 0.0f32, 0.0f32);
            for i in 0..size {
                let row = (y + i - c) * w;
                for j in 0..size {
                    let k = weights[i * size + j];
                    let p = source[row + x + j - c];
                    red += p.red as f32 * k;
                    green += p.green as f32 * k;
                    blue += p.blue as f32 * k;
                }
            }
            out[y * w + x] = Rgb::new(
                clamp_truncate(red),
                clamp_truncate(green),
                clamp_truncate(blue),
            );
        }
    }

    raster.replace_pixels(out)?;
    Ok(())
}

/// Convolve a raster of either kind.
pub fn convolve(raster: &mut Raster, kernel: &Kernel) -> FilterResult<()> {
    match raster {
        Raster::Gray(r) => convolve_gray(r, kernel),
        Raster::Color(r) => convolve_color(r, kernel),
    }
}

/// Apply the 3x3 box blur.
pub fn box_blur<R: Convolve + ?Sized>(raster: &mut R) -> FilterResult<()> {
    raster.convolve(&Kernel::box_blur())
}

/// Apply the 3x3 binomial Gaussian blur.
pub fn gaussian_blur<R: Convolve + ?Sized>(raster: &mut R) -> FilterResult<()> {
    raster.convolve(&Kernel::gaussian())
}
