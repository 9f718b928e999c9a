//! Fast path: the whole range as one FFT convolution.
//!
//! Geometry and window width are frozen at the midpoint of the range, so the
//! kernel `K_j = w_j e^{∓iψ_j}` is the same for every output sample and
//! `T_out[c] = Σ_j K_j T[c + j]` becomes a linear convolution. The signal
//! block `a[i] = T[start - h + i]` of length `L = n_used + 1 + 2h` and the
//! reflected kernel `g[-j mod N] = K_j` are zero padded to `N >= L`, so the
//! circular convolution never wraps and `T_out[start + t] = (a * g)[t + h]`.

use alloc::vec::Vec;
use num_complex::Complex64;

use super::Direction;
use crate::common::ReconstructionError;
use crate::fft::ComplexFft;
use crate::kernel::NewtonTolerance;
use crate::kernel::newton::stationary_azimuth;
use crate::reconstruction::{Profile, SampleRange};
use crate::window::{WindowKind, WindowState};

pub(crate) fn zeroed(len: usize) -> Result<Vec<Complex64>, ReconstructionError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| ReconstructionError::Allocation(len))?;
    buffer.resize(len, Complex64::default());
    Ok(buffer)
}

/// Midpoint of the range, where the geometry is frozen.
pub fn midpoint(range: SampleRange) -> usize {
    range.start + range.n_used / 2
}

/// Transforms `input` over `range`, returning `range.len()` samples.
///
/// The caller has checked that the midpoint window fits on both ends of
/// the range.
pub fn fresnel_fft<const NORM: bool>(
    profile: &Profile,
    input: &[Complex64],
    range: SampleRange,
    kind: WindowKind,
    direction: Direction,
    tol: NewtonTolerance,
) -> Result<Vec<Complex64>, ReconstructionError> {
    let dx = profile.dx();
    let mid = midpoint(range);
    let window = WindowState::new(kind, profile.w[mid], dx)?;
    let h = window.half();
    let geo = profile.geometry(mid);

    let len = range.len() + 2 * h;
    let fft = ComplexFft::covering(len)?;
    let n = fft.len();

    let mut kernel = zeroed(n)?;
    let mut norm = Complex64::default();
    for (i, (&x, &w)) in window.offsets().iter().zip(window.weights()).enumerate() {
        let r = geo.r0 + x;
        let psi = stationary_azimuth(&geo, r, tol).psi(&geo);
        let k = direction.phasor(w, psi);
        norm += k;
        // Offset j = i - h lands at -j mod N.
        let slot = if i >= h { (n - (i - h)) % n } else { h - i };
        kernel[slot] = k;
    }

    let mut signal = zeroed(n)?;
    signal[..len].copy_from_slice(&input[range.start - h..range.start - h + len]);

    fft.convolve(&mut signal, &mut kernel)?;

    let f = profile.f[mid];
    signal.truncate(h + range.len());
    signal.drain(..h);
    for s in signal.iter_mut() {
        *s = direction.scale::<NORM>(*s, norm, dx, f);
    }
    Ok(signal)
}

#[cfg(test)]
#[path = "fft_tests.rs"]
mod tests;
