//! Fallible buffer allocation
//!
//! Every pixel buffer in the workspace is created through these helpers so
//! that an oversized image surfaces as [`Error::AllocationFailed`] instead of
//! aborting the process.

use crate::error::{Error, Result};

/// Allocate a vector of `len` copies of `value`.
pub fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed { requested: len })?;
    buf.resize(len, value);
    Ok(buf)
}

/// Allocate a copy of `src`.
///
/// Used to take frozen snapshots of pixel data before a neighbourhood
/// operation overwrites the live buffer.
pub fn try_copy<T: Copy>(src: &[T]) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|_| Error::AllocationFailed {
            requested: src.len(),
        })?;
    buf.extend_from_slice(src);
    Ok(buf)
}

/// Number of samples in a `width` x `height` raster.
///
/// Returns [`Error::InvalidDimension`] if the product does not fit in `usize`.
pub fn sample_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension {
            width: width.into(),
            height: height.into(),
        })
}
