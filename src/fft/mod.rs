//! Radix-2 complex FFT used by the fast convolution path.

pub mod complex;
mod core;

pub use crate::common::FftError;
pub use complex::ComplexFft;
