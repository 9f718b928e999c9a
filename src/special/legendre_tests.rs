use super::*;

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "{} vs {} (tol {})", a, b, tol);
}

#[test]
fn test_low_orders_closed_form() {
    let x = 0.37;
    let mut p = [0.0; 5];
    legendre_into(x, &mut p);
    assert_close(p[0], 1.0, 1e-15);
    assert_close(p[1], x, 1e-15);
    assert_close(p[2], 0.5 * (3.0 * x * x - 1.0), 1e-15);
    assert_close(p[3], 0.5 * (5.0 * x * x * x - 3.0 * x), 1e-15);
    assert_close(p[4], (35.0 * x.powi(4) - 30.0 * x * x + 3.0) / 8.0, 1e-15);
}

#[test]
fn test_endpoint_values() {
    let mut p = [0.0; 12];
    legendre_into(1.0, &mut p);
    for v in p {
        assert_close(v, 1.0, 1e-13);
    }
    legendre_into(-1.0, &mut p);
    for (n, v) in p.iter().enumerate() {
        let expected = if n % 2 == 0 { 1.0 } else { -1.0 };
        assert_close(*v, expected, 1e-13);
    }
}

#[test]
fn test_empty_and_single() {
    let mut none: [f64; 0] = [];
    legendre_into(0.5, &mut none);
    let mut one = [7.0];
    legendre_into(0.5, &mut one);
    assert_eq!(one[0], 1.0);
}

#[test]
fn test_quadratic_coefficient() {
    // Second-order coefficient reduces to (1 - A² - β) / (2 (1 - β)).
    let (a, beta) = (0.3_f64, 0.2_f64);
    let mut p = [0.0; 3];
    let mut alt = [0.0; 2];
    let mut coeffs = [0.0; 1];
    legendre_into(a, &mut p);
    alt_legendre_into(a, &p, &mut alt);
    fresnel_legendre_into(&p, &alt, beta, &mut coeffs);
    let expected = (1.0 - a * a - beta) / (2.0 * (1.0 - beta));
    assert_close(coeffs[0], expected, 1e-15);
}

#[test]
fn test_cubic_coefficient() {
    let (a, beta) = (-0.45_f64, 0.1_f64);
    let mut p = [0.0; 4];
    let mut alt = [0.0; 3];
    let mut coeffs = [0.0; 2];
    legendre_into(a, &mut p);
    alt_legendre_into(a, &p, &mut alt);
    fresnel_legendre_into(&p, &alt, beta, &mut coeffs);

    let l = 0.5 * beta / (1.0 - beta);
    let expected = (p[1] - a * p[2]) / 3.0 - l * 2.0 * p[1] * p[2];
    assert_close(coeffs[1], expected, 1e-15);
}
