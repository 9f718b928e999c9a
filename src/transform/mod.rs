//! Fresnel transform kernels.
//!
//! Every kernel turns one window of samples into one output value through
//! the Riemann sum `Σ w_j e^{∓iψ_j} T_j`. They differ only in how `ψ_j` is
//! obtained. The `NORM` parameter picks the output scaling at compile time,
//! the same way the FFT core picks its direction.

pub mod fft;
pub mod interp;
pub mod legendre;
pub mod newton;
pub mod quadratic;

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use num_complex::Complex64;

use crate::common::ReconstructionError;
use crate::kernel::{Geometry, Spacecraft};
use crate::math;
use crate::reconstruction::Profile;
use crate::window::WindowState;

/// Sense of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Diffraction correction, kernel `e^{-iψ}`.
    #[default]
    Inverse,
    /// Re-diffraction of a sharp profile, kernel `e^{+iψ}`.
    Forward,
}

impl Direction {
    /// `w e^{-iψ}` for the inverse, `w e^{+iψ}` for the forward transform.
    #[inline]
    pub fn phasor(self, weight: f64, psi: f64) -> Complex64 {
        let (s, c) = math::sin_cos(psi);
        match self {
            Self::Inverse => Complex64::new(weight * c, -weight * s),
            Self::Forward => Complex64::new(weight * c, weight * s),
        }
    }

    /// The opposite sense, used to re-diffract a reconstruction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Inverse => Self::Forward,
            Self::Forward => Self::Inverse,
        }
    }

    /// `1 + i` for the inverse, `1 - i` for the forward transform.
    #[inline]
    pub fn prefactor(self) -> Complex64 {
        match self {
            Self::Inverse => Complex64::new(1.0, 1.0),
            Self::Forward => Complex64::new(1.0, -1.0),
        }
    }

    /// Scales a raw sum into transmittance.
    ///
    /// Normalized output divides by the kernel's own free-space response
    /// `Σ w e^{∓iψ}`, so a unit input maps to exactly `1 + 0i` for every
    /// window and sampling. Otherwise the sum is treated as an integral with
    /// step `dx` and Fresnel scale `f` and carries the `(1 ± i)/2F` factor.
    #[inline]
    pub fn scale<const NORM: bool>(self, sum: Complex64, norm: Complex64, dx: f64, f: f64) -> Complex64 {
        if NORM {
            sum / norm
        } else {
            sum * self.prefactor() * (dx / (2.0 * f))
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inverse => "inverse",
            Self::Forward => "forward",
        })
    }
}

impl FromStr for Direction {
    type Err = ReconstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inverse" | "inv" | "reconstruct" => Ok(Self::Inverse),
            "forward" | "fwd" | "diffract" => Ok(Self::Forward),
            _ => Err(ReconstructionError::UnknownRegime(s.to_string())),
        }
    }
}

/// Running sums of one output sample.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator {
    direction: Direction,
    sum: Complex64,
    norm: Complex64,
}

impl Accumulator {
    pub(crate) fn new(direction: Direction) -> Self {
        Self { direction, sum: Complex64::default(), norm: Complex64::default() }
    }

    #[inline]
    pub(crate) fn add(&mut self, weight: f64, psi: f64, sample: Complex64) {
        let e = self.direction.phasor(weight, psi);
        self.norm += e;
        self.sum += e * sample;
    }

    /// Two samples that share weight and phase.
    #[inline]
    pub(crate) fn add_pair(&mut self, weight: f64, psi: f64, left: Complex64, right: Complex64) {
        let e = self.direction.phasor(weight, psi);
        self.norm += e.scale(2.0);
        self.sum += e * (left + right);
    }

    pub(crate) fn finish<const NORM: bool>(self, dx: f64, f: f64) -> Complex64 {
        self.direction.scale::<NORM>(self.sum, self.norm, dx, f)
    }
}

/// Everything a kernel needs to produce the sample at `center`.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub profile: &'a Profile,
    /// Signal being transformed, indexed like the profile.
    pub input: &'a [Complex64],
    pub window: &'a WindowState,
    pub center: usize,
    pub direction: Direction,
}

impl<'a> Frame<'a> {
    pub fn geometry(&self) -> Geometry {
        self.profile.geometry(self.center)
    }

    pub fn spacecraft(&self) -> Option<Spacecraft> {
        self.profile.spacecraft(self.center)
    }

    pub fn fresnel_scale(&self) -> f64 {
        self.profile.f[self.center]
    }

    pub fn dx(&self) -> f64 {
        self.window.dx()
    }

    /// Input samples covered by the window.
    pub fn samples(&self) -> &'a [Complex64] {
        let h = self.window.half();
        &self.input[self.center - h..=self.center + h]
    }

    /// Radii covered by the window.
    pub fn radii(&self) -> &'a [f64] {
        let h = self.window.half();
        &self.profile.rho[self.center - h..=self.center + h]
    }

    pub(crate) fn accumulator(&self) -> Accumulator {
        Accumulator::new(self.direction)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
