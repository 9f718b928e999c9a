use super::*;
use alloc::vec;
use core::f64::consts::FRAC_PI_2;

use crate::window::WindowKind;

fn flat_profile(n: usize, w: f64) -> Profile {
    let rho: Vec<f64> = (0..n).map(|i| 100.0 + i as f64 * 0.1).collect();
    Profile::new(
        rho,
        vec![0.0; n],
        vec![FRAC_PI_2; n],
        vec![2.0e5; n],
        vec![0.1; n],
        vec![1.0e5; n],
        vec![w; n],
        vec![Complex64::new(1.0, 0.0); n],
    )
}

#[test]
fn test_kernel_selection() {
    assert!(SampleKernel::for_regime(Regime::Fft).is_none());
    assert!(matches!(
        SampleKernel::for_regime(Regime::Legendre(4)),
        Some(SampleKernel::LegendreEven(4))
    ));
    assert!(matches!(
        SampleKernel::for_regime(Regime::Legendre(7)),
        Some(SampleKernel::LegendreOdd(7))
    ));
    assert!(matches!(
        SampleKernel::for_regime(Regime::Fresnel),
        Some(SampleKernel::Quadratic)
    ));
}

#[test]
fn test_regime_is_checked_before_arrays() {
    let rec = Reconstructor::new(Config::default().with_regime(Regime::Legendre(30)));
    let err = rec.validate(&Profile::default(), SampleRange::new(0, 0)).unwrap_err();
    assert_eq!(err, ReconstructionError::InvalidOrder(30));
}

#[test]
fn test_missing_position_for_distance_regimes() {
    let profile = flat_profile(100, 1.0);
    let rec = Reconstructor::new(Config::default().with_regime(Regime::NewtonD));
    let err = rec.validate(&profile, SampleRange::new(40, 10)).unwrap_err();
    assert_eq!(err.status(), 1);
}

#[test]
fn test_spacing_must_be_positive() {
    let mut profile = flat_profile(100, 1.0);
    profile.rho.reverse();
    let err = Reconstructor::default()
        .validate(&profile, SampleRange::new(40, 10))
        .unwrap_err();
    assert!(matches!(err, ReconstructionError::InvalidSpacing(dx) if dx < 0.0));
}

#[test]
fn test_radius_must_keep_increasing() {
    let mut profile = flat_profile(100, 1.0);
    profile.rho[50] = 0.0;
    let err = Reconstructor::default()
        .validate(&profile, SampleRange::new(20, 10))
        .unwrap_err();
    assert!(matches!(err, ReconstructionError::InvalidSpacing(step) if step < 0.0));
    assert_eq!(err.status(), 2);

    // A repeated radius is a zero step.
    let mut profile = flat_profile(100, 1.0);
    profile.rho[70] = profile.rho[69];
    let result = Reconstructor::default().run(&profile, SampleRange::new(20, 10));
    assert_eq!(result.unwrap_err(), ReconstructionError::InvalidSpacing(0.0));
}

#[test]
fn test_overflowing_range_is_rejected() {
    let profile = flat_profile(100, 1.0);
    for regime in [Regime::Fresnel, Regime::Fft] {
        let rec = Reconstructor::new(Config::default().with_regime(regime));
        let err = rec.validate(&profile, SampleRange::new(10, usize::MAX)).unwrap_err();
        assert_eq!(err, ReconstructionError::WindowOutOfRange { center: usize::MAX, half_width: 0, len: 100 });
        assert_eq!(err.status(), 2);
    }
    assert_eq!(SampleRange::new(10, usize::MAX).checked_end(), None);
    assert_eq!(SampleRange::new(usize::MAX, 0).len(), 1);
}

#[test]
fn test_window_must_fit_both_ends() {
    let profile = flat_profile(100, 1.0);
    let rec = Reconstructor::default();
    assert_eq!(rec.validate(&profile, SampleRange::new(5, 89)), Ok(()));
    assert_eq!(
        rec.validate(&profile, SampleRange::new(4, 10)),
        Err(ReconstructionError::WindowOutOfRange { center: 4, half_width: 5, len: 100 })
    );
    assert_eq!(
        rec.validate(&profile, SampleRange::new(50, 45)),
        Err(ReconstructionError::WindowOutOfRange { center: 95, half_width: 5, len: 100 })
    );
    assert_eq!(rec.validate(&profile, SampleRange::new(90, 10)).unwrap_err().status(), 2);
}

#[test]
fn test_validation_follows_window_growth() {
    // The window doubles halfway through; the grown window no longer fits
    // near the end even though the starting one would.
    let mut profile = flat_profile(100, 1.0);
    for w in profile.w[50..].iter_mut() {
        *w = 4.0;
    }
    let rec = Reconstructor::default();
    assert_eq!(rec.validate(&profile, SampleRange::new(20, 59)), Ok(()));
    assert_eq!(
        rec.validate(&profile, SampleRange::new(20, 70)),
        Err(ReconstructionError::WindowOutOfRange { center: 80, half_width: 20, len: 100 })
    );
}

#[test]
fn test_fft_checks_midpoint_window() {
    let mut profile = flat_profile(100, 1.0);
    profile.w[50] = 3.0;
    let rec = Reconstructor::new(Config::default().with_regime(Regime::Fft));
    assert_eq!(
        rec.validate(&profile, SampleRange::new(10, 80)),
        Err(ReconstructionError::WindowOutOfRange { center: 10, half_width: 15, len: 100 })
    );
    assert_eq!(rec.validate(&profile, SampleRange::new(16, 68)), Ok(()));
}

#[test]
fn test_run_returns_one_sample_per_index() {
    let profile = flat_profile(100, 1.0);
    let config = Config::default()
        .with_window(WindowKind::Coss)
        .with_forward_check(true)
        .with_resolution(0.5);
    let out = Reconstructor::new(config).run(&profile, SampleRange::new(10, 30)).unwrap();
    assert_eq!(out.t_out.len(), 31);
    assert_eq!(out.t_fwd.as_ref().map(Vec::len), Some(31));
    assert_eq!(out.range, SampleRange::new(10, 30));
    assert_eq!(out.resolution, Some(0.5));
    for t in &out.t_out {
        assert!((t - Complex64::new(1.0, 0.0)).norm() < 1e-10, "{}", t);
    }
}
