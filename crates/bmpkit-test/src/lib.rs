//! bmpkit-test - Regression test framework for bmpkit
//!
//! Provides the pieces shared by the regression tests of every crate:
//!
//! - [`RegParams`]: indexed comparisons with a summary at the end
//! - [`synth`]: hand-assembled BMP files, built without going through the
//!   codec under test
//! - [`scratch_dir`] / [`write_file`]: temporary files for path-level tests
//! - [`init_logging`]: a `tracing` subscriber driven by `RUST_LOG`
//!
//! # Usage
//!
//! ```ignore
//! use bmpkit_test::{RegParams, scratch_dir, synth};
//!
//! let mut rp = RegParams::new("bmpio");
//! let dir = scratch_dir().unwrap();
//! let path = bmpkit_test::write_file(&dir, "a.bmp", &synth::gray_bmp(4, 4, |x, y| (x + y) as u8)).unwrap();
//! let raster = bmpkit_io::load_gray(&path).unwrap();
//! rp.compare_values(4.0, raster.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"
//! - `RUST_LOG`: Log filter for [`init_logging`] (default `warn`)

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber for test output.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Create a fresh temporary directory, removed when dropped.
pub fn scratch_dir() -> TestResult<TempDir> {
    Ok(tempfile::Builder::new().prefix("bmpkit-reg").tempdir()?)
}

/// Write `bytes` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> TestResult<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).map_err(|e| TestError::ImageWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}

/// Load any supported BMP, mapping codec errors into [`TestError`].
pub fn load_test_image<P: AsRef<Path>>(path: P) -> TestResult<bmpkit_core::Raster> {
    let path = path.as_ref();
    bmpkit_io::read_image(path).map_err(|e| TestError::ImageLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
