//! Tapering windows and the per-run window state.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::f64::consts::{E, PI};
use core::str::FromStr;

use crate::common::ReconstructionError;
use crate::math;
use crate::special::bessel::{KaiserAlpha, kaiser_bessel, modified_kaiser_bessel};
use crate::special::lambert_w0;

/// The recognised window functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WindowKind {
    Rect,
    Coss,
    Kb20,
    #[default]
    Kb25,
    Kb35,
    Kbmd20,
    Kbmd25,
    Kbmd35,
}

impl WindowKind {
    pub const ALL: [WindowKind; 8] = [
        WindowKind::Rect,
        WindowKind::Coss,
        WindowKind::Kb20,
        WindowKind::Kb25,
        WindowKind::Kb35,
        WindowKind::Kbmd20,
        WindowKind::Kbmd25,
        WindowKind::Kbmd35,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Coss => "coss",
            Self::Kb20 => "kb20",
            Self::Kb25 => "kb25",
            Self::Kb35 => "kb35",
            Self::Kbmd20 => "kbmd20",
            Self::Kbmd25 => "kbmd25",
            Self::Kbmd35 => "kbmd35",
        }
    }

    /// Taper weight at signed offset `x` from the center of a window of
    /// full width `width`. Even in `x` and zero beyond `|x| = W/2`.
    pub fn weight(self, x: f64, width: f64) -> f64 {
        let half = 0.5 * width;
        match self {
            Self::Rect => {
                if math::abs(x) < half {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Coss => {
                if math::abs(x) < half {
                    let c = math::cos(PI * x / width);
                    c * c
                } else {
                    0.0
                }
            }
            Self::Kb20 => kaiser_bessel(x, width, KaiserAlpha::Two),
            Self::Kb25 => kaiser_bessel(x, width, KaiserAlpha::TwoAndHalf),
            Self::Kb35 => kaiser_bessel(x, width, KaiserAlpha::ThreeAndHalf),
            Self::Kbmd20 => modified_kaiser_bessel(x, width, KaiserAlpha::Two),
            Self::Kbmd25 => modified_kaiser_bessel(x, width, KaiserAlpha::TwoAndHalf),
            Self::Kbmd35 => modified_kaiser_bessel(x, width, KaiserAlpha::ThreeAndHalf),
        }
    }

    /// Normalized equivalent width of the taper (1 for the boxcar).
    pub fn normalized_equivalent_width(self) -> f64 {
        match self {
            Self::Rect => 1.0,
            Self::Coss => 1.5,
            Self::Kb20 => 1.49634231,
            Self::Kb25 => 1.65191895,
            Self::Kb35 => 1.92844639,
            Self::Kbmd20 => 1.52048174,
            Self::Kbmd25 => 1.65994218,
            Self::Kbmd35 => 1.92922948,
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowKind {
    type Err = ReconstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches(|c| c == '"' || c == '\'');
        WindowKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ReconstructionError::UnknownWindow(s.to_string()))
    }
}

/// Window width `normeq · 2F²/res` for a requested resolution.
pub fn window_width(fresnel_scale: f64, resolution: f64, kind: WindowKind) -> f64 {
    2.0 * fresnel_scale * fresnel_scale / resolution * kind.normalized_equivalent_width()
}

/// Parameters limiting resolution through the Allan deviation of the
/// receiver clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllanLimit {
    /// Sky frequency in Hz.
    pub sky_frequency: f64,
    /// Allan deviation of the frequency reference.
    pub sigma: f64,
    /// Radial velocity of the ring intercept point, km/s.
    pub rho_dot: f64,
}

impl AllanLimit {
    pub const DEFAULT_SIGMA: f64 = 2.0e-13;
}

/// Window width with the Allan-deviation correction.
///
/// `None` when the resolution is finer than the clock allows
/// (`res / (αF²) <= 1`).
pub fn window_width_allan(
    fresnel_scale: f64,
    resolution: f64,
    kind: WindowKind,
    limit: AllanLimit,
) -> Option<f64> {
    let omega = 2.0 * PI * limit.sky_frequency;
    let alpha = omega * omega * limit.sigma * limit.sigma / (2.0 * limit.rho_dot);
    let p = resolution / (alpha * fresnel_scale * fresnel_scale);
    if p.is_nan() || p <= 1.0 {
        return None;
    }
    let p1 = p / (1.0 - p);
    let p2 = p1 * math::exp(p1);
    let raw = if 1.0 / E + p2 < 1.0e-16 {
        2.0 * fresnel_scale * fresnel_scale / resolution
    } else {
        math::abs(lambert_w0(p2) - p1) / alpha
    };
    Some(raw * kind.normalized_equivalent_width())
}

/// Factor that maps a raw Riemann sum of the kernel onto unit free-space
/// transmittance: `√2 F / |dx Σ w|`.
pub fn window_normalization(weights: &[f64], dx: f64, fresnel_scale: f64) -> f64 {
    let sum: f64 = weights.iter().sum();
    core::f64::consts::SQRT_2 * fresnel_scale / math::abs(dx * sum)
}

/// Half width in samples of a window of width `width` on spacing `dx`.
#[inline]
pub fn half_samples(width: f64, dx: f64) -> usize {
    let h = math::floor(width / (2.0 * dx));
    if h > 0.0 { h as usize } else { 0 }
}

/// Offsets and taper weights of the active window.
///
/// Owned by one reconstruction run. The buffers are reused across rebuilds
/// and only grow when a wider window needs more room.
#[derive(Debug, Clone)]
pub struct WindowState {
    kind: WindowKind,
    dx: f64,
    width: f64,
    half: usize,
    offsets: Vec<f64>,
    weights: Vec<f64>,
}

impl WindowState {
    pub fn new(kind: WindowKind, width: f64, dx: f64) -> Result<Self, ReconstructionError> {
        let mut state = Self {
            kind,
            dx,
            width,
            half: 0,
            offsets: Vec::new(),
            weights: Vec::new(),
        };
        state.rebuild(width)?;
        Ok(state)
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// Width the window was last built for.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Number of samples either side of the center.
    pub fn half(&self) -> usize {
        self.half
    }

    /// Total sample count, `2·half + 1`.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Signed offsets `j·dx` for `j = -half..=half`.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Whether `width` has drifted at least `2·dx` from the built width.
    pub fn needs_resize(&self, width: f64) -> bool {
        drifted(self.width, width, self.dx)
    }

    /// Rebuilds the window at `width` if it has drifted. Returns whether a
    /// rebuild happened.
    pub fn track(&mut self, width: f64) -> Result<bool, ReconstructionError> {
        if !self.needs_resize(width) {
            return Ok(false);
        }
        let previous = self.half;
        self.rebuild(width)?;
        tracing::debug!(
            old_half = previous,
            new_half = self.half,
            width,
            "rebuilt {} window",
            self.kind
        );
        Ok(true)
    }

    fn rebuild(&mut self, width: f64) -> Result<(), ReconstructionError> {
        let half = half_samples(width, self.dx);
        let len = 2 * half + 1;

        self.offsets.clear();
        self.weights.clear();
        self.offsets
            .try_reserve(len)
            .map_err(|_| ReconstructionError::Allocation(len))?;
        self.weights
            .try_reserve(len)
            .map_err(|_| ReconstructionError::Allocation(len))?;

        for j in 0..len {
            let x = (j as f64 - half as f64) * self.dx;
            self.offsets.push(x);
            self.weights.push(self.kind.weight(x, width));
        }

        self.width = width;
        self.half = half;
        Ok(())
    }
}

#[inline]
pub(crate) fn drifted(built: f64, width: f64, dx: f64) -> bool {
    math::abs(built - width) >= 2.0 * dx
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
