//! Newton-Raphson search for the stationary azimuth `∂ψ/∂φ = 0`.
//!
//! The iteration is seeded at the reconstruction azimuth and stops either
//! when `|∂ψ/∂φ| <= eps` or after `max_iterations` steps. Running out of
//! steps is not an error: the last azimuth is used as is.

use super::psi::{Ellipse, Geometry, Spacecraft};
use crate::math;

/// Convergence threshold and iteration cap of the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonTolerance {
    pub eps: f64,
    pub max_iterations: u32,
}

impl Default for NewtonTolerance {
    fn default() -> Self {
        Self { eps: 1.0e-4, max_iterations: 5 }
    }
}

/// Result of one stationary-phase search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stationary {
    /// Stationary azimuth.
    pub phi: f64,
    /// Ring radius at `phi` (differs from the input only on eccentric rings).
    pub r: f64,
    /// Spacecraft distance at `phi`.
    pub d: f64,
    pub iterations: u32,
    pub converged: bool,
}

impl Stationary {
    /// `ψ` at the stationary point.
    pub fn psi(&self, geo: &Geometry) -> f64 {
        geo.with_distance(self.d).psi(self.r, self.phi)
    }
}

/// Runs the iteration. `step` maps an azimuth to `(∂ψ/∂φ, ∂²ψ/∂φ²)`.
fn iterate<F>(seed: f64, tol: NewtonTolerance, mut step: F) -> (f64, u32, bool)
where
    F: FnMut(f64) -> (f64, f64),
{
    let mut phi = seed;
    let mut iterations = 0;
    let (mut first, mut second) = step(phi);
    while math::abs(first) > tol.eps && iterations < tol.max_iterations {
        phi -= first / second;
        iterations += 1;
        (first, second) = step(phi);
    }
    let converged = math::abs(first) <= tol.eps;
    if !converged {
        tracing::trace!(iterations, residual = first, "stationary phase not reached");
    }
    (phi, iterations, converged)
}

/// Circular ring, distance held at `geo.d`.
pub fn stationary_azimuth(geo: &Geometry, r: f64, tol: NewtonTolerance) -> Stationary {
    let (phi, iterations, converged) = iterate(geo.phi0, tol, |phi| {
        (geo.dpsi_dphi(r, phi), geo.d2psi_dphi2(r, phi))
    });
    Stationary { phi, r, d: geo.d, iterations, converged }
}

/// Circular ring, distance recomputed from the spacecraft position every
/// step but treated as constant in the derivative.
pub fn stationary_azimuth_d(
    geo: &Geometry,
    r: f64,
    craft: &Spacecraft,
    tol: NewtonTolerance,
) -> Stationary {
    let (phi, iterations, converged) = iterate(geo.phi0, tol, |phi| {
        let g = geo.with_distance(craft.distance(r, phi));
        (g.dpsi_dphi(r, phi), g.d2psi_dphi2(r, phi))
    });
    Stationary { phi, r, d: craft.distance(r, phi), iterations, converged }
}

/// As [`stationary_azimuth_d`], with `∂D/∂φ` included in the first
/// derivative.
pub fn stationary_azimuth_dd(
    geo: &Geometry,
    r: f64,
    craft: &Spacecraft,
    tol: NewtonTolerance,
) -> Stationary {
    let (phi, iterations, converged) = iterate(geo.phi0, tol, |phi| {
        let d = craft.distance(r, phi);
        let dd = craft.distance_dphi(r, phi, d);
        let g = geo.with_distance(d);
        (g.dpsi_dphi_moving(r, phi, dd), g.d2psi_dphi2(r, phi))
    });
    Stationary { phi, r, d: craft.distance(r, phi), iterations, converged }
}

/// Eccentric ring: the radius follows the ellipse through `(r, φ₀)` and the
/// distance is recomputed at every step.
pub fn stationary_azimuth_ellipse(
    geo: &Geometry,
    r: f64,
    craft: &Spacecraft,
    ring: &Ellipse,
    tol: NewtonTolerance,
) -> Stationary {
    let semi_latus = ring.semi_latus(r, geo.phi0);
    let (phi, iterations, converged) = iterate(geo.phi0, tol, |phi| {
        let radius = ring.radius(semi_latus, phi);
        let g = geo.with_distance(craft.distance(radius, phi));
        let dr = ring.radius_dphi(radius, phi);
        (g.dpsi_dphi_ellipse(radius, dr, phi), g.d2psi_dphi2(radius, phi))
    });
    let radius = ring.radius(semi_latus, phi);
    Stationary {
        phi,
        r: radius,
        d: craft.distance(radius, phi),
        iterations,
        converged,
    }
}

#[cfg(test)]
#[path = "newton_tests.rs"]
mod tests;
