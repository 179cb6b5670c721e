//! bmpkit-color - Kind-specific point transforms
//!
//! - [`colorspace`]: average-based grayscale conversion of 24-bit rasters
//! - [`threshold`](mod@threshold): binary thresholding of 8-bit rasters
//!
//! The dispatching entry points reject the other raster kind with
//! [`ColorError::UnsupportedKind`].

pub mod colorspace;
mod error;
pub mod threshold;

pub use colorspace::{average_gray, grayscale, grayscale_color};
pub use error::{ColorError, ColorResult};
pub use threshold::{threshold, threshold_gray};
