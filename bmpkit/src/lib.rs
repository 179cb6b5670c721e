//! bmpkit - BMP image processing
//!
//! Loads and saves uncompressed 8-bit grayscale and 24-bit true-color BMP
//! files and edits them in place:
//!
//! - Point transforms (negative, brightness, grayscale, threshold)
//! - Convolution with odd-sized square kernels and 3x3 presets
//! - Histogram equalization
//!
//! # Example
//!
//! ```
//! use bmpkit::{Raster, Raster8};
//! use bmpkit::filter::{KernelPreset, apply_preset, equalize};
//!
//! let mut gray = Raster8::new(8, 8).unwrap();
//! gray.set(3, 3, 200).unwrap();
//! apply_preset(&mut gray, KernelPreset::Gaussian).unwrap();
//! assert_eq!(gray.get(3, 3), Some(50));
//!
//! let mut raster = Raster::from(gray);
//! raster.negative();
//! equalize(&mut raster).unwrap();
//! assert_eq!(raster.width(), 8);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bmpkit_core::*;

// Re-export engine crates as modules to avoid name conflicts
pub use bmpkit_color as point;
pub use bmpkit_filter as filter;
pub use bmpkit_io as io;
