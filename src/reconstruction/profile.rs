use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use num_complex::Complex64;

use crate::common::ReconstructionError;
use crate::kernel::{Geometry, Spacecraft};

/// Per-sample arrays of one occultation.
///
/// Filled once by whoever reads the data; a run only reads it. The
/// spacecraft position and the raw optical-depth threshold are optional
/// and left empty when unknown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    /// Ring radius (km), strictly increasing.
    pub rho: Vec<f64>,
    /// Ring azimuth (rad).
    pub phi: Vec<f64>,
    /// Ring opening angle (rad).
    pub b: Vec<f64>,
    /// Spacecraft to ring distance (km).
    pub d: Vec<f64>,
    /// Fresnel scale (km).
    pub f: Vec<f64>,
    /// Wavenumber (rad/km).
    pub k: Vec<f64>,
    /// Window width (km).
    pub w: Vec<f64>,
    /// Diffracted complex transmittance.
    pub t_in: Vec<Complex64>,
    pub rx: Vec<f64>,
    pub ry: Vec<f64>,
    pub rz: Vec<f64>,
    pub raw_tau_threshold: Vec<f64>,
}

impl Profile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rho: Vec<f64>,
        phi: Vec<f64>,
        b: Vec<f64>,
        d: Vec<f64>,
        f: Vec<f64>,
        k: Vec<f64>,
        w: Vec<f64>,
        t_in: Vec<Complex64>,
    ) -> Self {
        Self { rho, phi, b, d, f, k, w, t_in, ..Self::default() }
    }

    pub fn with_spacecraft_position(mut self, rx: Vec<f64>, ry: Vec<f64>, rz: Vec<f64>) -> Self {
        self.rx = rx;
        self.ry = ry;
        self.rz = rz;
        self
    }

    pub fn with_raw_tau_threshold(mut self, threshold: Vec<f64>) -> Self {
        self.raw_tau_threshold = threshold;
        self
    }

    pub fn len(&self) -> usize {
        self.rho.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rho.is_empty()
    }

    /// Radius spacing taken from the first two samples (NaN with fewer).
    pub fn dx(&self) -> f64 {
        match self.rho.as_slice() {
            [a, b, ..] => b - a,
            _ => f64::NAN,
        }
    }

    pub fn has_spacecraft_position(&self) -> bool {
        !self.rx.is_empty() && !self.ry.is_empty() && !self.rz.is_empty()
    }

    /// Kernel geometry at sample `i`.
    pub fn geometry(&self, i: usize) -> Geometry {
        Geometry {
            k: self.k[i],
            r0: self.rho[i],
            phi0: self.phi[i],
            b: self.b[i],
            d: self.d[i],
        }
    }

    /// Spacecraft position at sample `i`, if known.
    pub fn spacecraft(&self, i: usize) -> Option<Spacecraft> {
        Some(Spacecraft {
            rx: *self.rx.get(i)?,
            ry: *self.ry.get(i)?,
            rz: *self.rz.get(i)?,
        })
    }

    /// Checks that every array the run reads is present and equally long.
    pub(crate) fn check_arrays(&self, needs_position: bool) -> Result<(), ReconstructionError> {
        if self.rho.len() < 2 {
            return Err(ReconstructionError::MissingData("rho"));
        }
        let expected = self.rho.len();
        let columns = [
            ("phi", self.phi.len()),
            ("b", self.b.len()),
            ("d", self.d.len()),
            ("f", self.f.len()),
            ("k", self.k.len()),
            ("w", self.w.len()),
            ("t_in", self.t_in.len()),
        ];
        let position = [
            ("rx", self.rx.len()),
            ("ry", self.ry.len()),
            ("rz", self.rz.len()),
        ];
        let extra: &[(&'static str, usize)] = if needs_position { &position } else { &[] };
        for &(name, actual) in columns.iter().chain(extra) {
            if actual == 0 {
                return Err(ReconstructionError::MissingData(name));
            }
            if actual != expected {
                return Err(ReconstructionError::LengthMismatch { name, expected, actual });
            }
        }
        Ok(())
    }
}

/// Inclusive output range `start ..= start + n_used`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleRange {
    pub start: usize,
    pub n_used: usize,
}

impl SampleRange {
    pub fn new(start: usize, n_used: usize) -> Self {
        Self { start, n_used }
    }

    /// Last output index, saturating at `usize::MAX` so an overflowing
    /// range always fails the bounds check against a profile.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.n_used)
    }

    /// Last output index, or `None` when `start + n_used` overflows.
    pub fn checked_end(&self) -> Option<usize> {
        self.start.checked_add(self.n_used)
    }

    /// Number of output samples, `n_used + 1`.
    pub fn len(&self) -> usize {
        self.n_used.saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Samples whose radius lies in `[low, high]`, assuming increasing `rho`.
    pub fn from_radius_bounds(rho: &[f64], low: f64, high: f64) -> Option<Self> {
        let start = rho.iter().position(|&r| r >= low)?;
        let end = rho.iter().rposition(|&r| r <= high)?;
        if end < start {
            return None;
        }
        Some(Self { start, n_used: end - start })
    }

    /// Samples inside a named ring feature.
    pub fn from_region(rho: &[f64], region: Region) -> Option<Self> {
        let (low, high) = region.bounds();
        Self::from_radius_bounds(rho, low, high)
    }
}

/// Named stretches of the Saturn ring system, bounds in km.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Region {
    All,
    CRingRipples,
    Encke,
    JanusEpimetheus,
    Maxwell,
    Titan,
    Huygens,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::All,
        Region::CRingRipples,
        Region::Encke,
        Region::JanusEpimetheus,
        Region::Maxwell,
        Region::Titan,
        Region::Huygens,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::CRingRipples => "cringripples",
            Self::Encke => "encke",
            Self::JanusEpimetheus => "janusepimetheus",
            Self::Maxwell => "maxwell",
            Self::Titan => "titan",
            Self::Huygens => "huygens",
        }
    }

    /// Inclusive radius bounds.
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::All => (1.0, 400_000.0),
            Self::CRingRipples => (77_690.0, 77_760.0),
            Self::Encke => (132_900.0, 134_200.0),
            Self::JanusEpimetheus => (96_200.0, 96_800.0),
            Self::Maxwell => (87_410.0, 87_610.0),
            Self::Titan => (77_870.0, 77_930.0),
            Self::Huygens => (117_650.0, 117_950.0),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = ReconstructionError;

    /// Case-insensitive; spaces and quotes are ignored, and the gap or
    /// ringlet suffix may be spelled out.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '"' | '\''))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let key = key
            .strip_suffix("ringlet")
            .or_else(|| key.strip_suffix("gap"))
            .unwrap_or(&key);
        Region::ALL
            .into_iter()
            .find(|region| region.name() == key)
            .ok_or_else(|| ReconstructionError::UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
