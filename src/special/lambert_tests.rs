use super::*;

#[test]
fn test_known_values() {
    let cases = [
        (0.0, 0.0),
        (1.0, 0.5671432904097838),
        (E, 1.0),
        (-0.2, -0.2591711018190737),
        (10.0, 1.7455280027406994),
    ];
    for (x, w) in cases {
        let got = lambert_w0(x);
        assert!((got - w).abs() < 1e-12, "W0({}) = {} expected {}", x, got, w);
    }
}

#[test]
fn test_defining_identity() {
    for x in [-0.36, -0.3, -0.1, 0.05, 0.7, 2.9, 3.1, 50.0, 1e6] {
        let w = lambert_w0(x);
        let back = w * w.exp();
        assert!((back - x).abs() < 1e-10 * (1.0 + x.abs()), "x = {}, w e^w = {}", x, back);
    }
}

#[test]
fn test_branch_point_and_domain() {
    assert_eq!(lambert_w0(-1.0 / E), -1.0);
    assert!(lambert_w0(-0.5).is_nan());
    assert!(lambert_w0(f64::NAN).is_nan());
}
