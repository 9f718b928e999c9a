use super::*;
use alloc::string::ToString;

#[test]
fn test_evenness_and_compact_support() {
    let width = 2.4;
    for kind in WindowKind::ALL {
        for x in [0.0, 0.05, 0.3, 0.71, 1.0, 1.19, 1.2, 1.7] {
            assert_eq!(kind.weight(x, width), kind.weight(-x, width), "{} at {}", kind, x);
        }
        assert_eq!(kind.weight(1.3, width), 0.0, "{} outside the window", kind);
    }
    assert_eq!(WindowKind::Rect.weight(1.2, width), 0.0);
    assert_eq!(WindowKind::Coss.weight(1.2, width), 0.0);
    assert_eq!(WindowKind::Kbmd25.weight(1.2, width), 0.0);
    assert_eq!(WindowKind::Rect.weight(1.19, width), 1.0);
}

#[test]
fn test_peak_is_one() {
    for kind in WindowKind::ALL {
        assert!((kind.weight(0.0, 5.0) - 1.0).abs() < 1e-14, "{}", kind);
    }
}

#[test]
fn test_normalized_equivalent_width_matches_sampled_taper() {
    // normeq = N Σw² / (Σw)² over a dense grid spanning the window.
    let n = 20001;
    for kind in WindowKind::ALL {
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for i in 0..n {
            let x = -0.5 + i as f64 / (n - 1) as f64;
            let w = kind.weight(x, 1.0 + 1e-12);
            sum += w;
            sum_sq += w * w;
        }
        let normeq = n as f64 * sum_sq / (sum * sum);
        assert!(
            (normeq - kind.normalized_equivalent_width()).abs() < 2e-3,
            "{}: {} vs {}",
            kind,
            normeq,
            kind.normalized_equivalent_width()
        );
    }
}

#[test]
fn test_parse_names() {
    for kind in WindowKind::ALL {
        assert_eq!(kind.name().parse::<WindowKind>().unwrap(), kind);
        assert_eq!(kind.to_string().to_uppercase().parse::<WindowKind>().unwrap(), kind);
    }
    assert_eq!(" \"kb35\" ".parse::<WindowKind>().unwrap(), WindowKind::Kb35);
    let err = "hann".parse::<WindowKind>().unwrap_err();
    assert_eq!(err.status(), 5);
}

#[test]
fn test_state_layout() {
    let state = WindowState::new(WindowKind::Coss, 1.0, 0.1).unwrap();
    assert_eq!(state.half(), 5);
    assert_eq!(state.len(), 11);
    assert_eq!(state.offsets().len(), state.weights().len());
    assert!((state.offsets()[0] + 0.5).abs() < 1e-15);
    assert_eq!(state.offsets()[5], 0.0);
    assert_eq!(state.weights()[5], 1.0);
    assert_eq!(state.weights()[0], 0.0);
}

#[test]
fn test_resize_only_after_drift() {
    let mut state = WindowState::new(WindowKind::Kb25, 1.0, 0.1).unwrap();
    assert!(!state.track(1.15).unwrap());
    assert_eq!(state.half(), 5);
    assert!(state.track(1.25).unwrap());
    assert_eq!(state.width(), 1.25);
    assert_eq!(state.half(), 6);
    assert_eq!(state.len(), 13);
    assert!(state.track(0.7).unwrap());
    assert_eq!(state.half(), 3);
    assert_eq!(state.len(), 7);
}

#[test]
fn test_degenerate_width() {
    let state = WindowState::new(WindowKind::Rect, 0.05, 0.1).unwrap();
    assert_eq!(state.half(), 0);
    assert_eq!(state.len(), 1);
}

#[test]
fn test_window_width_from_resolution() {
    let w = window_width(0.5, 0.25, WindowKind::Rect);
    assert!((w - 2.0).abs() < 1e-15);
    let w = window_width(0.5, 0.25, WindowKind::Coss);
    assert!((w - 3.0).abs() < 1e-15);
}

#[test]
fn test_allan_width() {
    let limit = AllanLimit { sky_frequency: 8.4e9, sigma: 3.0e-11, rho_dot: 10.0 };
    let plain = window_width(1.0, 0.5, WindowKind::Kb25);
    let corrected = window_width_allan(1.0, 0.5, WindowKind::Kb25, limit).unwrap();
    // The clock noise widens the window: 4 km becomes about 4.85 km.
    assert!(corrected > plain);
    assert!((corrected / WindowKind::Kb25.normalized_equivalent_width() - 4.85).abs() < 0.01);

    let noisy = AllanLimit { sigma: 1e-6, ..limit };
    assert!(window_width_allan(1.0, 0.5, WindowKind::Kb25, noisy).is_none());
}

#[test]
fn test_normalization_factor() {
    let weights = [0.5, 1.0, 0.5];
    let norm = window_normalization(&weights, 0.1, 0.2);
    assert!((norm - core::f64::consts::SQRT_2).abs() < 1e-15);
}
