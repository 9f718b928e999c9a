//! Legendre expansion of the Fresnel phase.
//!
//! `ψ ≈ kD Σ_{m=0}^{N-2} c_m (x/D)^{m+2}` where the `c_m` come from the
//! Legendre polynomials at `cos B cos φ` and depend on the local geometry,
//! so they are rebuilt for every output sample.

use num_complex::Complex64;

use super::Frame;
use crate::math;
use crate::special::{alt_legendre_into, fresnel_legendre_into, horner, legendre_into};

/// Highest supported expansion order.
pub const MAX_ORDER: usize = 20;
/// Lowest supported expansion order.
pub const MIN_ORDER: usize = 2;

/// Expansion coefficients `c_0 ..= c_{N-2}` at the frame's geometry.
///
/// Returns the buffer and the number of coefficients in use.
fn coefficients(frame: &Frame<'_>, order: usize) -> ([f64; MAX_ORDER], usize) {
    let geo = frame.geometry();
    let cb = math::cos(geo.b);
    let (sp, cp) = math::sin_cos(geo.phi0);
    let a = cb * cp;
    let beta = (cb * sp) * (cb * sp);

    let mut poly = [0.0; MAX_ORDER + 1];
    let mut alt = [0.0; MAX_ORDER];
    let mut coeffs = [0.0; MAX_ORDER];
    legendre_into(a, &mut poly[..=order]);
    alt_legendre_into(a, &poly[..=order], &mut alt[..order]);
    fresnel_legendre_into(&poly[..=order], &alt[..order], beta, &mut coeffs[..order - 1]);
    (coeffs, order - 1)
}

/// Even orders. Even and odd powers are summed separately, so each pair of
/// mirrored samples costs one polynomial evaluation.
pub fn fresnel_legendre_even<const NORM: bool>(frame: &Frame<'_>, order: usize) -> Complex64 {
    let (coeffs, n) = coefficients(frame, order);
    let coeffs = &coeffs[..n];
    let geo = frame.geometry();
    let kd = geo.k * geo.d;
    let window = frame.window;
    let h = window.half();
    let offsets = window.offsets();
    let weights = window.weights();
    let samples = frame.samples();

    let mut acc = frame.accumulator();
    acc.add(weights[h], 0.0, samples[h]);
    for j in 0..h {
        let x = math::abs(offsets[j]) / geo.d;
        let x2 = x * x;
        let mut even = 0.0;
        let mut odd = 0.0;
        let mut power = x2;
        for (m, c) in coeffs.iter().enumerate() {
            if m % 2 == 0 {
                even += c * power;
            } else {
                odd += c * power;
            }
            power *= x;
        }
        let w = weights[j];
        // Left sample sits at -x, right sample at +x.
        acc.add(w, kd * (even - odd), samples[j]);
        acc.add(w, kd * (even + odd), samples[2 * h - j]);
    }
    acc.finish::<NORM>(frame.dx(), frame.fresnel_scale())
}

/// Odd orders, evaluated over the whole window.
pub fn fresnel_legendre_odd<const NORM: bool>(frame: &Frame<'_>, order: usize) -> Complex64 {
    let (coeffs, n) = coefficients(frame, order);
    let coeffs = &coeffs[..n];
    let geo = frame.geometry();
    let kd = geo.k * geo.d;
    let window = frame.window;

    let mut acc = frame.accumulator();
    for ((&offset, &w), &sample) in window
        .offsets()
        .iter()
        .zip(window.weights())
        .zip(frame.samples())
    {
        let x = offset / geo.d;
        acc.add(w, kd * x * x * horner(coeffs, x), sample);
    }
    acc.finish::<NORM>(frame.dx(), frame.fresnel_scale())
}
