//! Convolution kernels
//!
//! A kernel is a square matrix of `f32` weights with odd side length. Its
//! center is at `((size - 1) / 2, (size - 1) / 2)`.
//!
//! The 3x3 presets:
//!
//! | Preset | Weights | Sum |
//! |---|---|---|
//! | box blur | all `1/9` | 1 |
//! | Gaussian | `[1 2 1; 2 4 2; 1 2 1] / 16` | 1 |
//! | outline | `-1` everywhere, `8` in the center | 0 |
//! | emboss | `[-2 -1 0; -1 1 1; 0 1 2]` | 1 |
//! | sharpen | `[0 -1 0; -1 5 -1; 0 -1 0]` | 1 |

use crate::{FilterError, FilterResult};

/// A square convolution kernel of odd size.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd, >= 1)
    size: u32,
    /// Weights in row-major order
    data: Vec<f32>,
}

impl Kernel {
    /// Create a zero kernel of the given size.
    pub fn new(size: u32) -> FilterResult<Self> {
        check_size(size)?;
        let len = (size as usize) * (size as usize);
        Ok(Self {
            size,
            data: bmpkit_core::alloc::try_filled(len, 0.0f32)?,
        })
    }

    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidKernel`] if `size` is even or zero, if
    /// `data.len() != size * size`, or if any weight is not finite.
    pub fn from_slice(size: u32, data: &[f32]) -> FilterResult<Self> {
        check_size(size)?;
        let expected = (size as usize) * (size as usize);
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for a {}x{} kernel, got {}",
                expected,
                size,
                size,
                data.len()
            )));
        }
        if let Some(bad) = data.iter().find(|v| !v.is_finite()) {
            return Err(FilterError::InvalidKernel(format!(
                "non-finite weight {bad}"
            )));
        }
        Ok(Self {
            size,
            data: bmpkit_core::alloc::try_copy(data)?,
        })
    }

    /// Create a kernel from nested rows.
    pub fn from_rows<const N: usize>(rows: [[f32; N]; N]) -> FilterResult<Self> {
        let flat: Vec<f32> = rows.iter().flatten().copied().collect();
        Self::from_slice(N as u32, &flat)
    }

    fn preset(rows: [[f32; 3]; 3]) -> Self {
        Self {
            size: 3,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// 3x3 identity kernel: 1 in the center, 0 elsewhere.
    pub fn identity() -> Self {
        Self::preset([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]])
    }

    /// 3x3 box blur, every weight `1/9`.
    pub fn box_blur() -> Self {
        let w = 1.0 / 9.0;
        Self::preset([[w; 3]; 3])
    }

    /// 3x3 binomial Gaussian blur.
    pub fn gaussian() -> Self {
        Self::preset([
            [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
            [1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
            [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
        ])
    }

    /// 3x3 Laplacian outline kernel.
    pub fn outline() -> Self {
        Self::preset([[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]])
    }

    /// 3x3 emboss kernel, lit from the bottom right.
    pub fn emboss() -> Self {
        Self::preset([[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]])
    }

    /// 3x3 sharpen kernel.
    pub fn sharpen() -> Self {
        Self::preset([[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]])
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Offset of the center from each edge, `(size - 1) / 2`.
    #[inline]
    pub fn center(&self) -> u32 {
        (self.size - 1) / 2
    }

    /// Weights in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Weight at `(row, col)`.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<f32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.data[(row * self.size + col) as usize])
    }

    /// Set the weight at `(row, col)`.
    pub fn set(&mut self, row: u32, col: u32, value: f32) -> FilterResult<()> {
        if row >= self.size || col >= self.size {
            return Err(FilterError::InvalidKernel(format!(
                "({row}, {col}) outside {0}x{0} kernel",
                self.size
            )));
        }
        self.data[(row * self.size + col) as usize] = value;
        Ok(())
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Scale the weights so they sum to 1. Zero-sum kernels are unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() > f32::EPSILON {
            for v in &mut self.data {
                *v /= sum;
            }
        }
    }
}

fn check_size(size: u32) -> FilterResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel size must be odd and positive, got {size}"
        )));
    }
    Ok(())
}

/// Named 3x3 kernel presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelPreset {
    BoxBlur,
    Gaussian,
    Outline,
    Emboss,
    Sharpen,
}

impl KernelPreset {
    /// All presets, in menu order.
    pub const ALL: [KernelPreset; 5] = [
        Self::BoxBlur,
        Self::Gaussian,
        Self::Outline,
        Self::Emboss,
        Self::Sharpen,
    ];

    /// Build the kernel for this preset.
    pub fn kernel(self) -> Kernel {
        match self {
            Self::BoxBlur => Kernel::box_blur(),
            Self::Gaussian => Kernel::gaussian(),
            Self::Outline => Kernel::outline(),
            Self::Emboss => Kernel::emboss(),
            Self::Sharpen => Kernel::sharpen(),
        }
    }
}
