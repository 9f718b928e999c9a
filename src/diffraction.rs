//! Closed-form Fresnel diffraction patterns of simple ring features.
//!
//! Each model gives the complex transmittance seen at radius `x` for a
//! feature whose sharp profile is 0 or 1, with the Fresnel scale `f`
//! assumed constant over the feature. They are the forward ground truth
//! for testing a reconstruction.

use num_complex::Complex64;

use crate::special::fresnel::normalized_fresnel_sin_cos;

/// `(1 - i)/2`, the free-space factor of the forward transform.
const HALF_CONJ: Complex64 = Complex64::new(0.5, -0.5);

#[inline]
fn integral(edge: f64, x: f64, f: f64) -> (f64, f64) {
    normalized_fresnel_sin_cos((edge - x) / f)
}

/// Opaque for `r < edge`, clear beyond.
pub fn left_straightedge(x: f64, edge: f64, f: f64) -> Complex64 {
    let (s, c) = integral(edge, x, f);
    HALF_CONJ * Complex64::new(0.5 - c, 0.5 - s)
}

/// Clear for `r < edge`, opaque beyond.
pub fn right_straightedge(x: f64, edge: f64, f: f64) -> Complex64 {
    let (s, c) = integral(edge, x, f);
    HALF_CONJ * Complex64::new(c + 0.5, s + 0.5)
}

/// Clear gap `inner < r < outer` in an opaque ring.
pub fn gap(x: f64, inner: f64, outer: f64, f: f64) -> Complex64 {
    let (sa, ca) = integral(inner, x, f);
    let (sb, cb) = integral(outer, x, f);
    HALF_CONJ * Complex64::new(cb - ca, sb - sa)
}

/// Opaque ringlet `inner < r < outer` in free space.
pub fn ringlet(x: f64, inner: f64, outer: f64, f: f64) -> Complex64 {
    Complex64::new(1.0, 0.0) - gap(x, inner, outer, f)
}

#[cfg(test)]
#[path = "diffraction_tests.rs"]
mod tests;
