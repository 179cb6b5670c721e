//! Point transforms shared by both raster kinds
//!
//! - Negative: `255 - v` per channel
//! - Brightness: `clamp(v + delta, 0, 255)` per channel
//!
//! Both are position independent and run in place. Grayscale conversion and
//! thresholding are kind-specific and live in `bmpkit-color`.

use super::{Raster, Raster8, Raster24};
use tracing::debug;

#[inline]
fn invert(v: u8) -> u8 {
    255 - v
}

#[inline]
fn shift(v: u8, delta: i32) -> u8 {
    (v as i32).saturating_add(delta).clamp(0, 255) as u8
}

impl Raster8 {
    /// Invert every sample in place.
    ///
    /// Applying it twice restores the original image.
    pub fn negative(&mut self) {
        debug!(width = self.width(), height = self.height(), "negative (8-bit)");
        for v in self.data_mut() {
            *v = invert(*v);
        }
    }

    /// Add `delta` to every sample, clamping to `[0, 255]`.
    ///
    /// # Example
    ///
    /// ```
    /// use bmpkit_core::Raster8;
    ///
    /// let mut r = Raster8::new(2, 2).unwrap();
    /// r.brightness(300);
    /// assert!(r.data().iter().all(|&v| v == 255));
    /// ```
    pub fn brightness(&mut self, delta: i32) {
        debug!(delta, "brightness (8-bit)");
        for v in self.data_mut() {
            *v = shift(*v, delta);
        }
    }
}

impl Raster24 {
    /// Invert every channel of every pixel in place.
    pub fn negative(&mut self) {
        debug!(width = self.width(), height = self.height(), "negative (24-bit)");
        for p in self.pixels_mut() {
            *p = p.map(invert);
        }
    }

    /// Add `delta` to every channel, clamping to `[0, 255]`.
    pub fn brightness(&mut self, delta: i32) {
        debug!(delta, "brightness (24-bit)");
        for p in self.pixels_mut() {
            *p = p.map(|c| shift(c, delta));
        }
    }
}

impl Raster {
    /// Invert every channel in place.
    pub fn negative(&mut self) {
        match self {
            Self::Gray(r) => r.negative(),
            Self::Color(r) => r.negative(),
        }
    }

    /// Add `delta` to every channel, clamping to `[0, 255]`.
    pub fn brightness(&mut self, delta: i32) {
        match self {
            Self::Gray(r) => r.brightness(delta),
            Self::Color(r) => r.brightness(delta),
        }
    }
}
