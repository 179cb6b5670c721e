//! Error types for bmpkit-color

use bmpkit_core::ColorDepth;
use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// The operation is only defined for the other raster kind
    #[error("unsupported raster kind: expected {expected:?}, got {actual:?}")]
    UnsupportedKind {
        expected: ColorDepth,
        actual: ColorDepth,
    },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
