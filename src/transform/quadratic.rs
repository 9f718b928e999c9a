//! Fresnel (quadratic) approximation `ψ = (π/2)(x/F)²`.

use core::f64::consts::FRAC_PI_2;
use num_complex::Complex64;

use super::Frame;

/// Quadratic kernel. The phase is even in the offset, so the two halves of
/// the window are folded onto each other and only the left half is
/// evaluated.
pub fn fresnel_quadratic<const NORM: bool>(frame: &Frame<'_>) -> Complex64 {
    let f = frame.fresnel_scale();
    let factor = FRAC_PI_2 / (f * f);
    let window = frame.window;
    let h = window.half();
    let offsets = window.offsets();
    let weights = window.weights();
    let samples = frame.samples();

    let mut acc = frame.accumulator();
    acc.add(weights[h], 0.0, samples[h]);
    for j in 0..h {
        let x = offsets[j];
        acc.add_pair(weights[j], factor * x * x, samples[j], samples[2 * h - j]);
    }
    acc.finish::<NORM>(frame.dx(), f)
}
