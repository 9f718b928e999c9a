//! Run configuration and the textual selectors.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::common::ReconstructionError;
use crate::kernel::{Ellipse, NewtonTolerance};
use crate::transform::Direction;
use crate::transform::legendre::{MAX_ORDER, MIN_ORDER};
use crate::window::WindowKind;

/// Approximation used for the Fresnel phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    /// Quadratic phase, `ψ = (π/2)(x/F)²`.
    #[default]
    Fresnel,
    /// Legendre expansion of the given order.
    Legendre(u32),
    /// Exact phase at the stationary azimuth, fixed distance.
    Newton,
    /// Exact phase with the distance recomputed from the spacecraft.
    NewtonD,
    /// As `NewtonD` with `∂D/∂φ` in the stationary condition.
    NewtonDdDphi,
    /// Four exact Newton samples, quartic in between.
    QuarticInterp,
    /// Four exact `NewtonD` samples, quartic in between.
    QuarticDInterp,
    /// Newton phase plus a fixed quartic correction.
    NewtonPerturbed,
    /// Newton phase on an eccentric ring.
    Elliptical,
    /// One FFT convolution with the geometry frozen at the midpoint.
    Fft,
}

impl Regime {
    /// Whether the regime reads the spacecraft position arrays.
    pub fn needs_spacecraft(self) -> bool {
        matches!(
            self,
            Self::NewtonD | Self::NewtonDdDphi | Self::QuarticDInterp | Self::Elliptical
        )
    }

    /// Rejects Legendre orders outside the supported range.
    pub fn check(self) -> Result<(), ReconstructionError> {
        match self {
            Self::Legendre(order) if !(MIN_ORDER..=MAX_ORDER).contains(&(order as usize)) => {
                Err(ReconstructionError::InvalidOrder(order))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresnel => f.write_str("fresnel"),
            Self::Legendre(order) => write!(f, "legendre{}", order),
            Self::Newton => f.write_str("newton"),
            Self::NewtonD => f.write_str("newton-d"),
            Self::NewtonDdDphi => f.write_str("newton-dD/dphi"),
            Self::QuarticInterp => f.write_str("newton-quartic-interp"),
            Self::QuarticDInterp => f.write_str("newton-quartic-d-interp"),
            Self::NewtonPerturbed => f.write_str("newton-perturbed"),
            Self::Elliptical => f.write_str("elliptical"),
            Self::Fft => f.write_str("fft"),
        }
    }
}

impl FromStr for Regime {
    type Err = ReconstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '"' | '\'' | '-' | '_' | '/'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let regime = match key.as_str() {
            "fresnel" | "quadratic" => Self::Fresnel,
            "newton" => Self::Newton,
            "newtond" => Self::NewtonD,
            "newtonddphi" | "newtondphi" => Self::NewtonDdDphi,
            "newtonquarticinterp" | "quarticinterp" | "quartic" => Self::QuarticInterp,
            "newtonquarticdinterp" | "quarticdinterp" | "quarticd" => Self::QuarticDInterp,
            "newtonperturbed" | "perturbednewton" | "perturbed" => Self::NewtonPerturbed,
            "elliptical" | "ellipse" | "newtonelliptical" => Self::Elliptical,
            "fft" | "simplefft" => Self::Fft,
            other => {
                let digits = other
                    .strip_prefix("legendre")
                    .or_else(|| other.strip_prefix("fresnel"))
                    .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
                    .ok_or_else(|| ReconstructionError::UnknownRegime(s.to_string()))?;
                let order = digits.parse::<u32>().unwrap_or(u32::MAX);
                Self::Legendre(order)
            }
        };
        regime.check()?;
        Ok(regime)
    }
}

/// Settings of one run. Fixed for the run's duration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub regime: Regime,
    pub window: WindowKind,
    /// Scale each output by the kernel's own free-space response.
    pub normalize: bool,
    pub direction: Direction,
    pub tolerance: NewtonTolerance,
    /// Ring shape for [`Regime::Elliptical`].
    pub ellipse: Ellipse,
    /// Coefficients `p_0..p_4` for [`Regime::NewtonPerturbed`].
    pub perturb: [f64; 5],
    /// Re-diffract the result and report it next to the reconstruction.
    pub forward_check: bool,
    /// Processing resolution (km), used for the optical-depth threshold.
    pub resolution: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            regime: Regime::Fresnel,
            window: WindowKind::Kb25,
            normalize: true,
            direction: Direction::Inverse,
            tolerance: NewtonTolerance::default(),
            ellipse: Ellipse::default(),
            perturb: [0.0; 5],
            forward_check: false,
            resolution: None,
        }
    }
}

impl Config {
    /// Configuration from the textual regime and window selectors.
    pub fn from_names(regime: &str, window: &str) -> Result<Self, ReconstructionError> {
        Ok(Self {
            regime: regime.parse()?,
            window: window.parse()?,
            ..Self::default()
        })
    }

    pub fn with_regime(mut self, regime: Regime) -> Self {
        self.regime = regime;
        self
    }

    pub fn with_window(mut self, window: WindowKind) -> Self {
        self.window = window;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_tolerance(mut self, eps: f64, max_iterations: u32) -> Self {
        self.tolerance = NewtonTolerance { eps, max_iterations };
        self
    }

    pub fn with_ellipse(mut self, ecc: f64, peri: f64) -> Self {
        self.ellipse = Ellipse { ecc, peri };
        self
    }

    pub fn with_perturbation(mut self, perturb: [f64; 5]) -> Self {
        self.perturb = perturb;
        self
    }

    pub fn with_forward_check(mut self, forward_check: bool) -> Self {
        self.forward_check = forward_check;
        self
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
