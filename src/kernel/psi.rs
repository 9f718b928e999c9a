//! Optical path phase between the stationary ray and a ring-plane point.
//!
//! With `u = r cos φ - r₀ cos φ₀`, `v = r² + r₀² - 2 r r₀ cos(φ - φ₀)` and
//! `R = sqrt(D² + v - 2 D u cos B)` the phase is
//! `ψ = k (R + u cos B - D)`. Derivatives below are taken in `φ`, with the
//! radius and the distance either held fixed or following the ring and
//! spacecraft geometry.

use crate::math;

/// Geometry of the point being reconstructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Wavenumber (rad/km).
    pub k: f64,
    /// Ring radius of the reconstruction point (km).
    pub r0: f64,
    /// Ring azimuth of the reconstruction point (rad).
    pub phi0: f64,
    /// Ring opening angle (rad).
    pub b: f64,
    /// Spacecraft to ring distance (km).
    pub d: f64,
}

/// `u`, `v` and their first derivatives at one azimuth.
#[derive(Debug, Clone, Copy)]
struct Path {
    u: f64,
    du: f64,
    v: f64,
    dv: f64,
}

impl Geometry {
    pub fn with_distance(self, d: f64) -> Self {
        Self { d, ..self }
    }

    /// `r` may follow `φ` with slope `dr`.
    fn path(&self, r: f64, dr: f64, phi: f64) -> Path {
        let (sp, cp) = math::sin_cos(phi);
        let cp0 = math::cos(self.phi0);
        let (sdp, cdp) = math::sin_cos(phi - self.phi0);
        Path {
            u: r * cp - self.r0 * cp0,
            du: dr * cp - r * sp,
            v: r * r + self.r0 * self.r0 - 2.0 * r * self.r0 * cdp,
            dv: 2.0 * r * dr - 2.0 * self.r0 * (dr * cdp - r * sdp),
        }
    }

    #[inline]
    fn range(&self, d: f64, cb: f64, u: f64, v: f64) -> f64 {
        math::sqrt(d * d + v - 2.0 * d * cb * u)
    }

    /// `ψ(r, φ)` at this geometry's distance.
    pub fn psi(&self, r: f64, phi: f64) -> f64 {
        let cb = math::cos(self.b);
        let p = self.path(r, 0.0, phi);
        self.k * (self.range(self.d, cb, p.u, p.v) + cb * p.u - self.d)
    }

    /// `∂ψ/∂φ` with `r` and `D` fixed.
    pub fn dpsi_dphi(&self, r: f64, phi: f64) -> f64 {
        self.dpsi_general(r, 0.0, phi, 0.0)
    }

    /// `∂ψ/∂φ` when the distance moves with `φ` at rate `dd`.
    pub fn dpsi_dphi_moving(&self, r: f64, phi: f64, dd: f64) -> f64 {
        self.dpsi_general(r, 0.0, phi, dd)
    }

    /// `∂ψ/∂φ` when the radius moves with `φ` at rate `dr`, `D` fixed.
    pub fn dpsi_dphi_ellipse(&self, r: f64, dr: f64, phi: f64) -> f64 {
        self.dpsi_general(r, dr, phi, 0.0)
    }

    fn dpsi_general(&self, r: f64, dr: f64, phi: f64, dd: f64) -> f64 {
        let cb = math::cos(self.b);
        let d = self.d;
        let p = self.path(r, dr, phi);
        let range = self.range(d, cb, p.u, p.v);
        let num = 2.0 * d * dd + p.dv - 2.0 * cb * (dd * p.u + d * p.du);
        self.k * (0.5 * num / range + cb * p.du - dd)
    }

    /// `∂²ψ/∂φ²` with `r` and `D` fixed.
    pub fn d2psi_dphi2(&self, r: f64, phi: f64) -> f64 {
        let cb = math::cos(self.b);
        let d = self.d;
        let (sp, cp) = math::sin_cos(phi);
        let (sdp, cdp) = math::sin_cos(phi - self.phi0);
        let cp0 = math::cos(self.phi0);

        let u = r * cp - self.r0 * cp0;
        let v = r * r + self.r0 * self.r0 - 2.0 * r * self.r0 * cdp;
        let du = -r * sp;
        let d2u = -r * cp;
        let dv = 2.0 * r * self.r0 * sdp;
        let d2v = 2.0 * r * self.r0 * cdp;

        let range = self.range(d, cb, u, v);
        let first = dv - 2.0 * cb * d * du;
        let second = d2v - 2.0 * cb * d * d2u;
        self.k * (0.5 * second / range - 0.25 * first * first / (range * range * range) + cb * d2u)
    }
}

/// Spacecraft position in ring-plane coordinates (km).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacecraft {
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl Spacecraft {
    /// Distance to the ring point at radius `r`, azimuth `phi`.
    pub fn distance(&self, r: f64, phi: f64) -> f64 {
        let (sp, cp) = math::sin_cos(phi);
        let x = r * cp - self.rx;
        let y = r * sp - self.ry;
        math::sqrt(x * x + y * y + self.rz * self.rz)
    }

    /// `∂D/∂φ` given the distance `d` already evaluated at `(r, phi)`.
    pub fn distance_dphi(&self, r: f64, phi: f64, d: f64) -> f64 {
        let (sp, cp) = math::sin_cos(phi);
        r * (self.rx * sp - self.ry * cp) / d
    }
}

/// Eccentric ring with periapse azimuth `peri`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    pub ecc: f64,
    pub peri: f64,
}

impl Ellipse {
    /// Semi-latus rectum of the ring passing through `(r, phi)`.
    pub fn semi_latus(&self, r: f64, phi: f64) -> f64 {
        r * (1.0 + self.ecc * math::cos(phi - self.peri))
    }

    /// Ring radius at `phi` for a given semi-latus rectum.
    pub fn radius(&self, semi_latus: f64, phi: f64) -> f64 {
        semi_latus / (1.0 + self.ecc * math::cos(phi - self.peri))
    }

    /// `dr/dφ` at radius `r`.
    pub fn radius_dphi(&self, r: f64, phi: f64) -> f64 {
        let (s, c) = math::sin_cos(phi - self.peri);
        r * self.ecc * s / (1.0 + self.ecc * c)
    }
}

#[cfg(test)]
#[path = "psi_tests.rs"]
mod tests;
