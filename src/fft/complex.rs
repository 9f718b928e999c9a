use alloc::vec::Vec;
use num_complex::Complex64;

use super::core::{precompute_bitrev, precompute_twiddles, radix_2_dit_fft_core};
use crate::common::FftError;

/// Radix-2 transform of a fixed power-of-two size with its tables.
#[derive(Debug, Clone)]
pub struct ComplexFft {
    twiddles: Vec<Complex64>,
    bitrev: Vec<usize>,
    n: usize,
}

impl ComplexFft {
    /// Builds the twiddle and bit-reversal tables for size `n`.
    pub fn new(n: usize) -> Result<Self, FftError> {
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo);
        }

        let mut twiddles = Vec::new();
        let mut bitrev = Vec::new();
        twiddles
            .try_reserve_exact(n / 2)
            .map_err(|_| FftError::Allocation)?;
        bitrev.try_reserve_exact(n).map_err(|_| FftError::Allocation)?;
        twiddles.resize(n / 2, Complex64::default());
        bitrev.resize(n, 0);

        precompute_bitrev(&mut bitrev, n);
        precompute_twiddles(&mut twiddles, n);
        Ok(Self { twiddles, bitrev, n })
    }

    /// Smallest transform that holds `len` samples.
    pub fn covering(len: usize) -> Result<Self, FftError> {
        Self::new(len.max(1).next_power_of_two())
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Executes the transform in place. The inverse includes the `1/N`.
    pub fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        if inverse {
            radix_2_dit_fft_core::<true>(buffer, &self.twiddles, &self.bitrev);
        } else {
            radix_2_dit_fft_core::<false>(buffer, &self.twiddles, &self.bitrev);
        }

        Ok(())
    }

    /// Circular convolution of `signal` with `kernel`, written into `signal`.
    ///
    /// Both buffers must hold exactly `len()` samples; `kernel` is left in
    /// the frequency domain.
    pub fn convolve(
        &self,
        signal: &mut [Complex64],
        kernel: &mut [Complex64],
    ) -> Result<(), FftError> {
        if kernel.len() != self.n {
            return Err(FftError::SizeMismatch);
        }
        self.process(signal, false)?;
        self.process(kernel, false)?;
        for (s, k) in signal.iter_mut().zip(kernel.iter()) {
            *s *= *k;
        }
        self.process(signal, true)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
