//! Property tests for the special functions, windows and free-space runs.

use num_complex::Complex64;
use proptest::prelude::*;
use ringoccs_diffrec::special::{fresnel_sin_cos, lambert_w0};
use ringoccs_diffrec::window::half_samples;
use ringoccs_diffrec::{Config, Profile, Reconstructor, SampleRange, WindowKind};

fn any_window() -> impl Strategy<Value = WindowKind> {
    prop::sample::select(WindowKind::ALL.to_vec())
}

proptest! {
    /// Every taper is even, lies in [0, 1] and vanishes outside the window.
    #[test]
    fn window_is_even_and_bounded(kind in any_window(), x in -10.0f64..10.0, width in 0.1f64..20.0) {
        let w = kind.weight(x, width);
        prop_assert_eq!(w, kind.weight(-x, width));
        prop_assert!((0.0..=1.0 + 1e-12).contains(&w), "{} at {}: {}", kind, x, w);
        if x.abs() > 0.5 * width {
            prop_assert_eq!(w, 0.0);
        }
    }

    /// S and C are odd and bounded.
    #[test]
    fn fresnel_integrals_are_odd(x in -60.0f64..60.0) {
        let (s, c) = fresnel_sin_cos(x);
        let (sn, cn) = fresnel_sin_cos(-x);
        prop_assert_eq!(s, -sn);
        prop_assert_eq!(c, -cn);
        prop_assert!(s.abs() < 1.0 && c.abs() < 1.0);
    }

    /// W(x)·e^{W(x)} = x on the principal branch.
    #[test]
    fn lambert_inverts_w_exp_w(x in -0.36f64..1.0e6) {
        let w = lambert_w0(x);
        prop_assert!(w >= -1.0);
        let back = w * w.exp();
        prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0), "W({}) = {}", x, w);
    }

    /// A clear profile stays clear for any spacing, scale and window.
    #[test]
    fn free_space_is_unity(
        kind in any_window(),
        dx in 0.01f64..0.5,
        f in 0.05f64..5.0,
        samples in 0.0f64..40.0,
    ) {
        let width = (samples + 1.0) * dx;
        let h = half_samples(width, dx);
        let n = 2 * h + 11;
        let rho: Vec<f64> = (0..n).map(|i| i as f64 * dx).collect();
        let profile = Profile::new(
            rho,
            vec![0.0; n],
            vec![1.2; n],
            vec![1.0e5; n],
            vec![f; n],
            vec![1.0e5; n],
            vec![width; n],
            vec![Complex64::new(1.0, 0.0); n],
        );
        let config = Config::default().with_window(kind);
        let out = Reconstructor::new(config).run(&profile, SampleRange::new(h, 10)).unwrap();
        for t in out.t_out {
            prop_assert!((t - Complex64::new(1.0, 0.0)).norm() < 1e-9, "{}", t);
        }
    }
}
