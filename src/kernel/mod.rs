//! Fresnel phase `ψ`, its azimuthal derivatives and the stationary-phase solver.

pub mod newton;
pub mod psi;

pub use newton::{NewtonTolerance, Stationary};
pub use psi::{Ellipse, Geometry, Spacecraft};

use crate::math;
use core::f64::consts::TAU;

/// Wavelength (km) of a wavenumber in rad/km.
#[inline]
pub fn wavelength(k: f64) -> f64 {
    TAU / k
}

/// Fresnel scale `sqrt(λD(1 - cos²B sin²φ) / (2 sin²B))`.
pub fn fresnel_scale(lambda: f64, d: f64, phi: f64, b: f64) -> f64 {
    let (sb, cb) = math::sin_cos(b);
    let sp = math::sin(phi);
    math::sqrt(0.5 * lambda * d * (1.0 - cb * cb * sp * sp) / (sb * sb))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
