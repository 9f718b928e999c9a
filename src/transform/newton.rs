//! Kernels that evaluate `ψ` at the stationary azimuth of every window
//! sample. No symmetry is assumed, the whole window is summed.

use num_complex::Complex64;

use super::Frame;
use crate::kernel::newton::{
    stationary_azimuth, stationary_azimuth_d, stationary_azimuth_dd, stationary_azimuth_ellipse,
};
use crate::kernel::{Ellipse, NewtonTolerance, Spacecraft};
use crate::special::horner;

/// Sums the window with the phase of each sample given by `psi_at(r)`.
pub(crate) fn newton_sum<const NORM: bool, P>(frame: &Frame<'_>, mut psi_at: P) -> Complex64
where
    P: FnMut(f64) -> f64,
{
    let mut acc = frame.accumulator();
    for ((&r, &w), &sample) in frame
        .radii()
        .iter()
        .zip(frame.window.weights())
        .zip(frame.samples())
    {
        acc.add(w, psi_at(r), sample);
    }
    acc.finish::<NORM>(frame.dx(), frame.fresnel_scale())
}

/// Circular ring at fixed distance.
pub fn fresnel_newton<const NORM: bool>(frame: &Frame<'_>, tol: NewtonTolerance) -> Complex64 {
    let geo = frame.geometry();
    newton_sum::<NORM, _>(frame, |r| stationary_azimuth(&geo, r, tol).psi(&geo))
}

/// Circular ring, distance recomputed from the spacecraft position.
pub fn fresnel_newton_d<const NORM: bool>(
    frame: &Frame<'_>,
    craft: &Spacecraft,
    tol: NewtonTolerance,
) -> Complex64 {
    let geo = frame.geometry();
    newton_sum::<NORM, _>(frame, |r| stationary_azimuth_d(&geo, r, craft, tol).psi(&geo))
}

/// Circular ring with `∂D/∂φ` in the stationary condition.
pub fn fresnel_newton_dd<const NORM: bool>(
    frame: &Frame<'_>,
    craft: &Spacecraft,
    tol: NewtonTolerance,
) -> Complex64 {
    let geo = frame.geometry();
    newton_sum::<NORM, _>(frame, |r| stationary_azimuth_dd(&geo, r, craft, tol).psi(&geo))
}

/// Newton phase plus `kD Σ p_n ((r - r₀)/D)^n`.
pub fn fresnel_newton_perturbed<const NORM: bool>(
    frame: &Frame<'_>,
    tol: NewtonTolerance,
    perturb: &[f64; 5],
) -> Complex64 {
    let geo = frame.geometry();
    let kd = geo.k * geo.d;
    newton_sum::<NORM, _>(frame, |r| {
        let x = (r - geo.r0) / geo.d;
        stationary_azimuth(&geo, r, tol).psi(&geo) + kd * horner(perturb, x)
    })
}

/// Eccentric ring.
pub fn fresnel_elliptical<const NORM: bool>(
    frame: &Frame<'_>,
    craft: &Spacecraft,
    ring: &Ellipse,
    tol: NewtonTolerance,
) -> Complex64 {
    let geo = frame.geometry();
    newton_sum::<NORM, _>(frame, |r| {
        stationary_azimuth_ellipse(&geo, r, craft, ring, tol).psi(&geo)
    })
}
