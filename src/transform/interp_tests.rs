use super::*;
use alloc::vec;
use alloc::vec::Vec;

use crate::reconstruction::Profile;
use crate::transform::newton::fresnel_newton;
use crate::transform::{Direction, Frame};
use crate::window::{WindowKind, WindowState};

fn oblique_profile(n: usize, w: f64) -> Profile {
    let rho: Vec<f64> = (0..n).map(|i| 80_000.0 + i as f64 * 0.1).collect();
    let t_in = (0..n)
        .map(|i| Complex64::from_polar(0.8 + 0.002 * i as f64, 0.03 * i as f64))
        .collect();
    Profile::new(
        rho,
        vec![0.3; n],
        vec![0.5; n],
        vec![2.0e5; n],
        vec![4.75; n],
        vec![1.2e5; n],
        vec![w; n],
        t_in,
    )
}

fn tight() -> NewtonTolerance {
    NewtonTolerance { eps: 1e-10, max_iterations: 20 }
}

#[test]
fn test_fit_recovers_quartic() {
    let c = [0.4, -1.3, 0.25, 0.07];
    let p = |x: f64| (((c[3] * x + c[2]) * x + c[1]) * x + c[0]) * x;
    let (a, b) = (2.0, 0.9);
    let fit = quartic_fit(a, b, [p(-a), p(-b), p(b), p(a)]);
    for (got, want) in fit.iter().zip(c) {
        assert!((got - want).abs() < 1e-12, "{} vs {}", got, want);
    }
}

#[test]
fn test_fit_of_even_data_has_no_odd_terms() {
    let fit = quartic_fit(1.5, 0.5, [3.0, 0.2, 0.2, 3.0]);
    assert_eq!(fit[0], 0.0);
    assert_eq!(fit[2], 0.0);
}

#[test]
fn test_quartic_tracks_newton() {
    let profile = oblique_profile(200, 2.0);
    let window = WindowState::new(WindowKind::Kb25, 2.0, profile.dx()).unwrap();
    assert!(window.half() >= 9);
    let frame = Frame {
        profile: &profile,
        input: &profile.t_in,
        window: &window,
        center: 100,
        direction: Direction::Inverse,
    };
    let exact = fresnel_newton::<true>(&frame, tight());
    let fitted = fresnel_quartic::<true>(&frame, tight());
    assert!((exact - fitted).norm() < 1e-6, "{} vs {}", exact, fitted);
}

#[test]
fn test_narrow_window_falls_back_to_newton() {
    let profile = oblique_profile(50, 0.3);
    let window = WindowState::new(WindowKind::Rect, 0.3, profile.dx()).unwrap();
    assert_eq!(window.half(), 1);
    let frame = Frame {
        profile: &profile,
        input: &profile.t_in,
        window: &window,
        center: 25,
        direction: Direction::Forward,
    };
    let tol = NewtonTolerance::default();
    assert_eq!(fresnel_quartic::<false>(&frame, tol), fresnel_newton::<false>(&frame, tol));
}
