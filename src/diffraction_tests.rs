use super::*;

const F: f64 = 0.5;

fn assert_close(a: Complex64, b: Complex64, tol: f64) {
    assert!((a - b).norm() < tol, "{} vs {}", a, b);
}

#[test]
fn test_straightedge_at_edge_passes_quarter_power() {
    let left = left_straightedge(10.0, 10.0, F);
    let right = right_straightedge(10.0, 10.0, F);
    assert_close(left, Complex64::new(0.5, 0.0), 1e-12);
    assert_close(right, Complex64::new(0.5, 0.0), 1e-12);
    assert!((left.norm_sqr() - 0.25).abs() < 1e-12);
}

#[test]
fn test_straightedge_far_field() {
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::default();
    // 1000 Fresnel scales from the edge the ripple is below 1e-3.
    assert_close(left_straightedge(510.0, 10.0, F), one, 1e-3);
    assert_close(left_straightedge(-490.0, 10.0, F), zero, 1e-3);
    assert_close(right_straightedge(-490.0, 10.0, F), one, 1e-3);
    assert_close(right_straightedge(510.0, 10.0, F), zero, 1e-3);
}

#[test]
fn test_edges_are_complementary() {
    for x in [8.0, 9.7, 10.0, 10.4, 13.0] {
        let sum = left_straightedge(x, 10.0, F) + right_straightedge(x, 10.0, F);
        assert_close(sum, Complex64::new(1.0, 0.0), 1e-12);
    }
}

#[test]
fn test_gap_and_ringlet() {
    let inside = gap(115.0, 112.0, 118.0, F);
    assert!((inside.norm() - 1.0).abs() < 0.1, "{}", inside);
    let outside = gap(200.0, 112.0, 118.0, F);
    assert!(outside.norm() < 1e-2);

    for x in [111.0, 112.0, 115.0, 117.5, 119.0] {
        let sum = gap(x, 112.0, 118.0, F) + ringlet(x, 112.0, 118.0, F);
        assert_close(sum, Complex64::new(1.0, 0.0), 1e-12);
    }
}

#[test]
fn test_wide_gap_is_two_edges() {
    // Far from the outer edge a gap looks like a single left edge.
    let x = 101.0;
    assert_close(gap(x, 100.0, 1000.0, F), left_straightedge(x, 100.0, F), 1e-3);
}
