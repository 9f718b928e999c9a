//! Special functions behind the kernels and the window tapers.

pub mod bessel;
pub mod fresnel;
pub mod lambert;
pub mod legendre;

pub use bessel::bessel_i0;
pub use fresnel::{fresnel_cos, fresnel_sin, fresnel_sin_cos};
pub use lambert::lambert_w0;
pub use legendre::{alt_legendre_into, fresnel_legendre_into, legendre_into};

/// Evaluates `Σ coeffs[n]·x^n` by Horner's rule, lowest order first.
#[inline]
pub(crate) fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
