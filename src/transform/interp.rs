//! Newton phase interpolated by a quartic in the window offset.
//!
//! `ψ` is solved exactly at the window samples `±h` and `±⌊h/2⌋` only. The
//! even and odd parts of those four values pin down
//! `ψ(x) = C₀x + C₁x² + C₂x³ + C₃x⁴`, which is then evaluated over the whole
//! window.

use num_complex::Complex64;

use super::Frame;
use super::newton::newton_sum;
use crate::kernel::newton::{stationary_azimuth, stationary_azimuth_d};
use crate::kernel::{NewtonTolerance, Spacecraft};

/// Coefficients `[C₀, C₁, C₂, C₃]` through `ψ(-a), ψ(-b), ψ(b), ψ(a)`.
pub fn quartic_fit(a: f64, b: f64, psi: [f64; 4]) -> [f64; 4] {
    let [left_outer, left_inner, right_inner, right_outer] = psi;
    let even_a = 0.5 * (right_outer + left_outer) / (a * a);
    let even_b = 0.5 * (right_inner + left_inner) / (b * b);
    let odd_a = 0.5 * (right_outer - left_outer) / a;
    let odd_b = 0.5 * (right_inner - left_inner) / b;
    let spread = a * a - b * b;

    let c3 = (even_a - even_b) / spread;
    let c1 = even_b - c3 * b * b;
    let c2 = (odd_a - odd_b) / spread;
    let c0 = odd_b - c2 * b * b;
    [c0, c1, c2, c3]
}

fn quartic_sum<const NORM: bool, P>(frame: &Frame<'_>, mut exact: P) -> Complex64
where
    P: FnMut(f64) -> f64,
{
    let window = frame.window;
    let h = window.half();
    if h < 2 {
        // Not enough samples for four distinct nodes.
        return newton_sum::<NORM, _>(frame, exact);
    }

    let inner = h / 2;
    let radii = frame.radii();
    let offsets = window.offsets();
    let nodes = [0, h - inner, h + inner, 2 * h];
    let psi = nodes.map(|i| exact(radii[i]));
    let [c0, c1, c2, c3] = quartic_fit(offsets[2 * h], offsets[h + inner], psi);

    let mut acc = frame.accumulator();
    for ((&x, &w), &sample) in offsets.iter().zip(window.weights()).zip(frame.samples()) {
        let psi = (((c3 * x + c2) * x + c1) * x + c0) * x;
        acc.add(w, psi, sample);
    }
    acc.finish::<NORM>(frame.dx(), frame.fresnel_scale())
}

/// Quartic interpolation of the fixed-distance Newton phase.
pub fn fresnel_quartic<const NORM: bool>(frame: &Frame<'_>, tol: NewtonTolerance) -> Complex64 {
    let geo = frame.geometry();
    quartic_sum::<NORM, _>(frame, |r| stationary_azimuth(&geo, r, tol).psi(&geo))
}

/// Quartic interpolation of the distance-tracking Newton phase.
pub fn fresnel_quartic_d<const NORM: bool>(
    frame: &Frame<'_>,
    craft: &Spacecraft,
    tol: NewtonTolerance,
) -> Complex64 {
    let geo = frame.geometry();
    quartic_sum::<NORM, _>(frame, |r| stationary_azimuth_d(&geo, r, craft, tol).psi(&geo))
}

#[cfg(test)]
#[path = "interp_tests.rs"]
mod tests;
