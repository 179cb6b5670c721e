//! Loader configuration

/// Options controlling how strictly BMP files are accepted.
///
/// The default accepts any well-formed file of the requested depth.
///
/// ```
/// use bmpkit_io::ReadOptions;
///
/// let opts = ReadOptions::default()
///     .with_max_dimension(8192)
///     .with_strict_data_size(true);
/// assert_eq!(opts.max_dimension, Some(8192));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// Reject images whose width or height exceeds this many pixels,
    /// before any pixel buffer is allocated
    pub max_dimension: Option<u32>,
    /// For 8-bit files, reject a non-zero declared data size that differs
    /// from `width * height` instead of only logging a warning
    pub strict_data_size: bool,
}

impl ReadOptions {
    /// Set the maximum accepted width and height.
    pub fn with_max_dimension(mut self, max: u32) -> Self {
        self.max_dimension = Some(max);
        self
    }

    /// Enable or disable the strict data size check.
    pub fn with_strict_data_size(mut self, strict: bool) -> Self {
        self.strict_data_size = strict;
        self
    }
}
