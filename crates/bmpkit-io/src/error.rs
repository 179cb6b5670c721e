//! I/O error types
//!
//! Provides a unified error type for all codec operations. Every failure
//! falls into one of three kinds (see [`IoErrorKind`]): the file could not
//! be opened, read or written; the bytes are not an acceptable BMP; or a
//! buffer could not be allocated.

use thiserror::Error;

/// Error type for BMP load and save operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bit depth or compression is not the one this loader handles
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The bytes are structurally invalid (bad signature, truncated, ...)
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library (allocation, dimensions)
    #[error("core error: {0}")]
    Core(#[from] bmpkit_core::Error),
}

/// Coarse classification of an [`IoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
    /// The file cannot be opened, created, read or written
    Io,
    /// Signature mismatch, wrong bit depth, malformed or undersized header
    Format,
    /// A pixel buffer could not be allocated
    Allocation,
}

impl IoError {
    /// Which of the three failure kinds this error belongs to.
    pub fn kind(&self) -> IoErrorKind {
        match self {
            Self::Io(_) => IoErrorKind::Io,
            Self::UnsupportedFormat(_) | Self::InvalidData(_) => IoErrorKind::Format,
            Self::Core(bmpkit_core::Error::AllocationFailed { .. }) => IoErrorKind::Allocation,
            Self::Core(_) => IoErrorKind::Format,
        }
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
