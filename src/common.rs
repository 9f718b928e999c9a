//! Error types and the numeric status codes of a reconstruction run.

use alloc::string::String;
use thiserror::Error;

/// Status code reported by a successful run.
pub const STATUS_OK: u8 = 0;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum FftError {
    #[error("Data buffer size does not match FFT size")]
    SizeMismatch,
    #[error("Size must be a power of 2")]
    NotPowerOfTwo,
    #[error("Could not allocate FFT tables")]
    Allocation,
}

/// Everything that can stop a reconstruction run.
///
/// Each variant maps onto one of the numeric status codes through
/// [`ReconstructionError::status`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReconstructionError {
    #[error("Required input array `{0}` is missing or empty")]
    MissingData(&'static str),
    #[error("Input array `{name}` has {actual} samples, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Window of {half_width} samples around index {center} leaves the {len} sample array")]
    WindowOutOfRange {
        center: usize,
        half_width: usize,
        len: usize,
    },
    #[error("Radius spacing must be positive, got {0}")]
    InvalidSpacing(f64),
    #[error("Could not allocate {0} samples")]
    Allocation(usize),
    #[error("Legendre order {0} is outside 2..=20")]
    InvalidOrder(u32),
    #[error("Unknown transform regime `{0}`")]
    UnknownRegime(String),
    #[error("Unknown ring region `{0}`")]
    UnknownRegion(String),
    #[error("Unknown window function `{0}`")]
    UnknownWindow(String),
    #[error("FFT failed: {0}")]
    Fft(#[from] FftError),
}

impl ReconstructionError {
    /// Numeric status code of the failure (1 through 5).
    pub const fn status(&self) -> u8 {
        match self {
            Self::MissingData(_) | Self::LengthMismatch { .. } => 1,
            Self::WindowOutOfRange { .. } | Self::InvalidSpacing(_) => 2,
            Self::Allocation(_) | Self::Fft(_) => 3,
            Self::InvalidOrder(_) | Self::UnknownRegime(_) | Self::UnknownRegion(_) => 4,
            Self::UnknownWindow(_) => 5,
        }
    }
}

/// Status code of a finished run, `0` on success.
pub fn status_of<T>(result: &Result<T, ReconstructionError>) -> u8 {
    match result {
        Ok(_) => STATUS_OK,
        Err(err) => err.status(),
    }
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
