//! Derived products of a finished run.

use alloc::vec::Vec;
use num_complex::Complex64;

use super::profile::{Profile, SampleRange};
use crate::common::ReconstructionError;
use crate::math;

/// Raw output of [`Reconstructor::run`](super::Reconstructor::run).
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    pub range: SampleRange,
    /// Radius spacing of the profile the run read.
    pub dx: f64,
    /// Processing resolution copied from the configuration.
    pub resolution: Option<f64>,
    /// Corrected transmittance, one sample per index of `range`.
    pub t_out: Vec<Complex64>,
    /// `t_out` transformed back in the opposite direction, if requested.
    pub t_fwd: Option<Vec<Complex64>>,
}

/// Power, phase and optical depth of a re-diffracted profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCheck {
    pub t_fwd: Vec<Complex64>,
    pub power: Vec<f64>,
    pub phase: Vec<f64>,
    pub tau: Vec<f64>,
}

/// A profile cut down to the processed range together with its
/// reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Finished {
    /// Input profile, every array truncated to the range.
    pub profile: Profile,
    pub t_out: Vec<Complex64>,
    /// `|T|²`.
    pub power: Vec<f64>,
    /// `arg T` in radians.
    pub phase: Vec<f64>,
    /// Normal optical depth `-sin|B|·ln(power)`.
    pub tau: Vec<f64>,
    /// Optical-depth threshold at the processing resolution.
    pub tau_threshold: Option<Vec<f64>>,
    pub forward: Option<ForwardCheck>,
}

impl Reconstruction {
    /// Derives power, phase and optical depth and truncates `profile` to
    /// the processed range.
    pub fn finish(self, mut profile: Profile) -> Result<Finished, ReconstructionError> {
        let range = self.range;
        let expected = profile.len();
        if !range.checked_end().is_some_and(|end| end < expected) {
            return Err(ReconstructionError::WindowOutOfRange {
                center: range.end(),
                half_width: 0,
                len: expected,
            });
        }
        if profile.b.len() != expected {
            return Err(ReconstructionError::LengthMismatch {
                name: "b",
                expected,
                actual: profile.b.len(),
            });
        }

        let tau_threshold = match self.resolution {
            Some(res) if !profile.raw_tau_threshold.is_empty() => {
                let raw = &profile.raw_tau_threshold;
                if raw.len() != expected {
                    return Err(ReconstructionError::LengthMismatch {
                        name: "raw_tau_threshold",
                        expected,
                        actual: raw.len(),
                    });
                }
                let shift = math::ln(self.dx / res);
                let b = &profile.b[range.start..=range.end()];
                let raw = &raw[range.start..=range.end()];
                Some(derive(raw.iter().zip(b), range.len(), |(&t, &b)| {
                    t - shift * math::sin(math::abs(b))
                })?)
            }
            _ => None,
        };

        truncate_profile(&mut profile, range);

        let (power, phase, tau) = products(&self.t_out, &profile.b)?;
        let forward = match self.t_fwd {
            Some(t_fwd) => {
                let (power, phase, tau) = products(&t_fwd, &profile.b)?;
                Some(ForwardCheck { t_fwd, power, phase, tau })
            }
            None => None,
        };

        tracing::debug!(samples = power.len(), "finished reconstruction");
        Ok(Finished {
            profile,
            t_out: self.t_out,
            power,
            phase,
            tau,
            tau_threshold,
            forward,
        })
    }
}

/// Optical depth of a transmitted power at opening angle `b`.
#[inline]
pub fn optical_depth(power: f64, b: f64) -> f64 {
    -math::sin(math::abs(b)) * math::ln(power)
}

type Products = (Vec<f64>, Vec<f64>, Vec<f64>);

fn products(t: &[Complex64], b: &[f64]) -> Result<Products, ReconstructionError> {
    let power = derive(t.iter(), t.len(), |z| z.norm_sqr())?;
    let phase = derive(t.iter(), t.len(), |z| math::atan2(z.im, z.re))?;
    let tau = derive(power.iter().zip(b), t.len(), |(&p, &b)| optical_depth(p, b))?;
    Ok((power, phase, tau))
}

fn derive<I, F>(items: I, len: usize, f: F) -> Result<Vec<f64>, ReconstructionError>
where
    I: Iterator,
    F: FnMut(I::Item) -> f64,
{
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| ReconstructionError::Allocation(len))?;
    out.extend(items.map(f));
    Ok(out)
}

fn keep<T>(values: &mut Vec<T>, range: SampleRange) {
    if values.len() > range.end() {
        values.truncate(range.end() + 1);
        values.drain(..range.start);
    }
}

fn truncate_profile(profile: &mut Profile, range: SampleRange) {
    let Profile { rho, phi, b, d, f, k, w, t_in, rx, ry, rz, raw_tau_threshold } = profile;
    for column in [rho, phi, b, d, f, k, w, rx, ry, rz, raw_tau_threshold] {
        keep(column, range);
    }
    keep(t_in, range);
}

#[cfg(test)]
#[path = "finish_tests.rs"]
mod tests;
