use alloc::vec::Vec;
use num_complex::Complex64;

use super::config::{Config, Regime};
use super::finish::Reconstruction;
use super::profile::{Profile, SampleRange};
use crate::common::ReconstructionError;
use crate::kernel::Spacecraft;
use crate::transform::fft::{fresnel_fft, midpoint, zeroed};
use crate::transform::interp::{fresnel_quartic, fresnel_quartic_d};
use crate::transform::legendre::{fresnel_legendre_even, fresnel_legendre_odd};
use crate::transform::newton::{
    fresnel_elliptical, fresnel_newton, fresnel_newton_d, fresnel_newton_dd,
    fresnel_newton_perturbed,
};
use crate::transform::quadratic::fresnel_quadratic;
use crate::transform::{Direction, Frame};
use crate::window::{WindowState, drifted, half_samples};

/// Kernel applied at every output sample.
///
/// Resolved once per run from the [`Regime`]; the FFT path has no
/// per-sample kernel and never reaches the sliding loop.
#[derive(Debug, Clone, Copy)]
enum SampleKernel {
    Quadratic,
    LegendreEven(usize),
    LegendreOdd(usize),
    Newton,
    NewtonD,
    NewtonDd,
    Quartic,
    QuarticD,
    Perturbed,
    Elliptical,
}

impl SampleKernel {
    fn for_regime(regime: Regime) -> Option<Self> {
        Some(match regime {
            Regime::Fresnel => Self::Quadratic,
            Regime::Legendre(order) if order % 2 == 0 => Self::LegendreEven(order as usize),
            Regime::Legendre(order) => Self::LegendreOdd(order as usize),
            Regime::Newton => Self::Newton,
            Regime::NewtonD => Self::NewtonD,
            Regime::NewtonDdDphi => Self::NewtonDd,
            Regime::QuarticInterp => Self::Quartic,
            Regime::QuarticDInterp => Self::QuarticD,
            Regime::NewtonPerturbed => Self::Perturbed,
            Regime::Elliptical => Self::Elliptical,
            Regime::Fft => return None,
        })
    }
}

/// Walks a radius range and writes one corrected sample per index.
///
/// Holds nothing but its [`Config`]; all per-run state lives on the stack
/// of [`Reconstructor::run`], so one reconstructor can serve any number of
/// concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct Reconstructor {
    config: Config,
}

impl Reconstructor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checks every precondition of a run without doing numerical work.
    pub fn validate(&self, profile: &Profile, range: SampleRange) -> Result<(), ReconstructionError> {
        let result = self.check(profile, range);
        if let Err(err) = &result {
            tracing::warn!(status = err.status(), "rejected reconstruction: {}", err);
        }
        result
    }

    fn check(&self, profile: &Profile, range: SampleRange) -> Result<(), ReconstructionError> {
        let regime = self.config.regime;
        regime.check()?;
        profile.check_arrays(regime.needs_spacecraft())?;

        let dx = profile.dx();
        if !(dx.is_finite() && dx > 0.0) {
            return Err(ReconstructionError::InvalidSpacing(dx));
        }

        if let Some(step) = profile.rho.windows(2).map(|r| r[1] - r[0]).find(|d| !(*d > 0.0)) {
            return Err(ReconstructionError::InvalidSpacing(step));
        }

        let len = profile.len();
        let end = match range.checked_end() {
            Some(end) if end < len => end,
            _ => {
                return Err(ReconstructionError::WindowOutOfRange {
                    center: range.end(),
                    half_width: 0,
                    len,
                })
            }
        };

        if regime == Regime::Fft {
            let half = half_samples(profile.w[midpoint(range)], dx);
            fits(range.start, half, len)?;
            return fits(end, half, len);
        }

        // Replays the resize schedule of the sliding loop.
        let mut built = profile.w[range.start];
        for center in range.start..=end {
            if drifted(built, profile.w[center], dx) {
                built = profile.w[center];
            }
            fits(center, half_samples(built, dx), len)?;
        }
        Ok(())
    }

    /// Reconstructs `profile.t_in` over `range`.
    pub fn run(&self, profile: &Profile, range: SampleRange) -> Result<Reconstruction, ReconstructionError> {
        self.validate(profile, range)?;
        let config = &self.config;
        tracing::info!(
            regime = %config.regime,
            window = %config.window,
            direction = %config.direction,
            start = range.start,
            n_used = range.n_used,
            "starting reconstruction"
        );

        let t_out = self.transform(profile, &profile.t_in, range, config.direction)?;

        let t_fwd = if config.forward_check {
            // Samples outside the range count as zero.
            let mut scratch = zeroed(profile.len())?;
            scratch[range.start..=range.end()].copy_from_slice(&t_out);
            Some(self.transform(profile, &scratch, range, config.direction.reversed())?)
        } else {
            None
        };

        tracing::info!(samples = t_out.len(), "reconstruction finished");
        Ok(Reconstruction {
            range,
            dx: profile.dx(),
            resolution: config.resolution,
            t_out,
            t_fwd,
        })
    }

    fn transform(
        &self,
        profile: &Profile,
        input: &[Complex64],
        range: SampleRange,
        direction: Direction,
    ) -> Result<Vec<Complex64>, ReconstructionError> {
        if self.config.normalize {
            self.walk::<true>(profile, input, range, direction)
        } else {
            self.walk::<false>(profile, input, range, direction)
        }
    }

    fn walk<const NORM: bool>(
        &self,
        profile: &Profile,
        input: &[Complex64],
        range: SampleRange,
        direction: Direction,
    ) -> Result<Vec<Complex64>, ReconstructionError> {
        let config = &self.config;
        let Some(kernel) = SampleKernel::for_regime(config.regime) else {
            return fresnel_fft::<NORM>(
                profile,
                input,
                range,
                config.window,
                direction,
                config.tolerance,
            );
        };

        let mut out = Vec::new();
        out.try_reserve_exact(range.len())
            .map_err(|_| ReconstructionError::Allocation(range.len()))?;

        let mut window = WindowState::new(config.window, profile.w[range.start], profile.dx())?;
        for center in range.start..=range.end() {
            window.track(profile.w[center])?;
            let frame = Frame { profile, input, window: &window, center, direction };
            out.push(self.sample::<NORM>(kernel, &frame)?);
        }
        Ok(out)
    }

    fn sample<const NORM: bool>(
        &self,
        kernel: SampleKernel,
        frame: &Frame<'_>,
    ) -> Result<Complex64, ReconstructionError> {
        let config = &self.config;
        let tol = config.tolerance;
        Ok(match kernel {
            SampleKernel::Quadratic => fresnel_quadratic::<NORM>(frame),
            SampleKernel::LegendreEven(order) => fresnel_legendre_even::<NORM>(frame, order),
            SampleKernel::LegendreOdd(order) => fresnel_legendre_odd::<NORM>(frame, order),
            SampleKernel::Newton => fresnel_newton::<NORM>(frame, tol),
            SampleKernel::NewtonD => fresnel_newton_d::<NORM>(frame, &spacecraft(frame)?, tol),
            SampleKernel::NewtonDd => fresnel_newton_dd::<NORM>(frame, &spacecraft(frame)?, tol),
            SampleKernel::Quartic => fresnel_quartic::<NORM>(frame, tol),
            SampleKernel::QuarticD => fresnel_quartic_d::<NORM>(frame, &spacecraft(frame)?, tol),
            SampleKernel::Perturbed => fresnel_newton_perturbed::<NORM>(frame, tol, &config.perturb),
            SampleKernel::Elliptical => {
                fresnel_elliptical::<NORM>(frame, &spacecraft(frame)?, &config.ellipse, tol)
            }
        })
    }
}

fn spacecraft(frame: &Frame<'_>) -> Result<Spacecraft, ReconstructionError> {
    frame.spacecraft().ok_or(ReconstructionError::MissingData("rx"))
}

fn fits(center: usize, half_width: usize, len: usize) -> Result<(), ReconstructionError> {
    if center < half_width || center + half_width >= len {
        return Err(ReconstructionError::WindowOutOfRange { center, half_width, len });
    }
    Ok(())
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
