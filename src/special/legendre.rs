//! Legendre polynomials and the expansion coefficients of the Fresnel kernel.

/// Writes `P_0(x) ..= P_{out.len()-1}(x)` into `out`.
///
/// Uses `n P_n = (2n-1) x P_{n-1} - (n-1) P_{n-2}`, which is stable on `[-1, 1]`.
pub fn legendre_into(x: f64, out: &mut [f64]) {
    if out.is_empty() {
        return;
    }
    out[0] = 1.0;
    if out.len() == 1 {
        return;
    }
    out[1] = x;
    for n in 2..out.len() {
        let nf = n as f64;
        out[n] = ((2.0 * nf - 1.0) * x * out[n - 1] - (nf - 1.0) * out[n - 2]) / nf;
    }
}

/// Companion sequence `(P_m - x P_{m+1}) / (m + 2)` for `m < poly.len() - 1`.
pub fn alt_legendre_into(x: f64, poly: &[f64], out: &mut [f64]) {
    for (m, slot) in out.iter_mut().enumerate().take(poly.len().saturating_sub(1)) {
        *slot = (poly[m] - x * poly[m + 1]) / (m as f64 + 2.0);
    }
}

/// Coefficients of `ψ / (kD) = Σ_m out[m] (Δr/D)^(m+2)`.
///
/// `poly` holds `P_0..=P_N` at `cos B cos φ`, `alt` the companion sequence,
/// and `beta = (cos B sin φ)²`. Each coefficient subtracts the Cauchy
/// product of the shifted polynomial sequence with itself.
pub fn fresnel_legendre_into(poly: &[f64], alt: &[f64], beta: f64, out: &mut [f64]) {
    let order = poly.len().saturating_sub(1);
    let scale = 0.5 * beta / (1.0 - beta);
    for (m, slot) in out.iter_mut().enumerate() {
        if m + 2 > order {
            break;
        }
        let mut cauchy = 0.0;
        for i in 0..=m {
            cauchy += poly[i + 1] * poly[m - i + 1];
        }
        *slot = alt[m] - scale * cauchy;
    }
}

#[cfg(test)]
#[path = "legendre_tests.rs"]
mod tests;
