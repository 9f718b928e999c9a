//! Table setup and the in-place radix-2 butterflies behind [`super::ComplexFft`].

use core::f64::consts::PI;
use num_complex::Complex64;

use crate::math;

/// Fills the N/2 twiddle factors `exp(-2πij/N)` of a radix-2 transform.
pub(crate) fn precompute_twiddles(twiddles: &mut [Complex64], n: usize) {
    for (j, tw) in twiddles.iter_mut().take(n / 2).enumerate() {
        let angle = -2.0 * PI * (j as f64) / (n as f64);
        let (sin, cos) = math::sin_cos(angle);
        *tw = Complex64::new(cos, sin);
    }
}

/// Fills the bit-reversal permutation table for a transform of size `n`.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    bitrev[0] = 0;
    let mut j = 0;
    for slot in bitrev.iter_mut().take(n).skip(1) {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        *slot = j;
    }
}

/// In-place decimation-in-time butterfly network.
///
/// The inverse halves every stage, so a forward/inverse pair is the
/// identity without a separate `1/N` pass.
pub(crate) fn radix_2_dit_fft_core<const INVERSE: bool>(
    buffer: &mut [Complex64],
    twiddles: &[Complex64],
    bitrev: &[usize],
) {
    let n = buffer.len();
    if n < 2 {
        return;
    }

    for i in 1..(n - 1) {
        let j = bitrev[i];
        if i < j {
            buffer.swap(i, j);
        }
    }

    let mut stride = 1;
    let mut tw_index = n >> 1;

    while stride < n {
        let jmax = n - stride;

        for j in (0..jmax).step_by(stride << 1) {
            for i in 0..stride {
                let mut w = twiddles[i * tw_index];

                // Folded away at compile time.
                if INVERSE {
                    w = w.conj();
                }

                let index = j + i;
                let a = buffer[index];
                let t = buffer[index + stride] * w;

                let mut v1 = a + t;
                let mut v2 = a - t;

                if INVERSE {
                    v1 = v1.scale(0.5);
                    v2 = v2.scale(0.5);
                }

                buffer[index] = v1;
                buffer[index + stride] = v2;
            }
        }
        stride <<= 1;
        tw_index >>= 1;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
