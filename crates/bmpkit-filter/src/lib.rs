//! bmpkit-filter - Neighborhood and histogram operations
//!
//! This crate provides:
//!
//! - Convolution with arbitrary odd-sized square kernels
//! - 3x3 presets: box blur, Gaussian blur, outline, emboss, sharpen
//! - Histogram equalization (8-bit samples, 24-bit luminance)
//!
//! All operations modify the raster in place and work on [`Raster8`],
//! [`Raster24`] or the dispatching [`Raster`].
//!
//! [`Raster8`]: bmpkit_core::Raster8
//! [`Raster24`]: bmpkit_core::Raster24
//! [`Raster`]: bmpkit_core::Raster

pub mod convolve;
pub mod edge;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, KernelPreset};

pub use convolve::{Convolve, box_blur, convolve, convolve_color, convolve_gray, gaussian_blur};
pub use edge::{apply_preset, emboss, outline, sharpen};
pub use enhance::{
    Cdf, EqualizationMap, compute_cdf, equalization_map, equalize, equalize_color, equalize_gray,
};
