use super::*;
use alloc::vec;
use num_complex::Complex64;

const EPSILON: f64 = 1e-12;

fn assert_cplx_eq(a: Complex64, b: Complex64) {
    assert!((a - b).l1_norm() < EPSILON, "Complex mismatch: {} vs {}", a, b);
}

#[test]
fn test_precompute_bitrev_8() {
    let n = 8;
    let mut bitrev = vec![0; n];
    precompute_bitrev(&mut bitrev, n);

    // 001 -> 100, 011 -> 110, ...
    assert_eq!(bitrev, vec![0, 4, 2, 6, 1, 5, 3, 7]);
}

#[test]
fn test_precompute_twiddles_8() {
    let n = 8;
    let mut twiddles = vec![Complex64::default(); n / 2];
    precompute_twiddles(&mut twiddles, n);

    let h = core::f64::consts::FRAC_1_SQRT_2;
    assert_cplx_eq(twiddles[0], Complex64::new(1.0, 0.0));
    assert_cplx_eq(twiddles[1], Complex64::new(h, -h));
    assert_cplx_eq(twiddles[2], Complex64::new(0.0, -1.0));
    assert_cplx_eq(twiddles[3], Complex64::new(-h, -h));
}

#[test]
fn test_core_dc_signal() {
    let n = 4;
    let mut buffer = vec![Complex64::new(1.0, 0.0); n];
    let mut twiddles = vec![Complex64::default(); n / 2];
    let mut bitrev = vec![0; n];
    precompute_bitrev(&mut bitrev, n);
    precompute_twiddles(&mut twiddles, n);

    radix_2_dit_fft_core::<false>(&mut buffer, &twiddles, &bitrev);
    assert_cplx_eq(buffer[0], Complex64::new(4.0, 0.0));
    for sample in &buffer[1..] {
        assert_cplx_eq(*sample, Complex64::new(0.0, 0.0));
    }

    radix_2_dit_fft_core::<true>(&mut buffer, &twiddles, &bitrev);
    for sample in buffer {
        assert_cplx_eq(sample, Complex64::new(1.0, 0.0));
    }
}

#[test]
fn test_core_single_sample_untouched() {
    let mut buffer = vec![Complex64::new(3.0, -2.0)];
    let mut bitrev = vec![0; 1];
    precompute_bitrev(&mut bitrev, 1);
    radix_2_dit_fft_core::<false>(&mut buffer, &[], &bitrev);
    assert_cplx_eq(buffer[0], Complex64::new(3.0, -2.0));
}
