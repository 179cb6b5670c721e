//! Error types for bmpkit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// bmpkit-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    /// Buffer length does not agree with the raster dimensions
    #[error("dimension mismatch: expected {expected} samples, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("pixel ({x}, {y}) outside {width}x{height} raster")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Operation not supported for this raster kind
    #[error("operation not supported: {0}")]
    NotSupported(String),

    /// Memory allocation failed
    #[error("memory allocation failed ({requested} elements)")]
    AllocationFailed { requested: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
