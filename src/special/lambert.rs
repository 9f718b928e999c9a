//! Principal branch of the Lambert W function.

use core::f64::consts::E;

use crate::math;

/// `W₀(x)`, the solution of `w·eʷ = x` with `w ≥ -1`.
///
/// Returns NaN below the branch point `-1/e`.
pub fn lambert_w0(x: f64) -> f64 {
    let branch = -1.0 / E;
    if x.is_nan() || x < branch {
        return f64::NAN;
    }
    if x == branch {
        return -1.0;
    }
    if x == f64::INFINITY {
        return x;
    }

    let mut w = if x < -0.25 {
        // Series about the branch point.
        let p = math::sqrt(2.0 * (E * x + 1.0));
        -1.0 + p - p * p / 3.0 + 11.0 / 72.0 * p * p * p
    } else if x < 3.0 {
        math::ln(1.0 + x)
    } else {
        let l = math::ln(x);
        l - math::ln(l)
    };

    // Halley iteration.
    for _ in 0..64 {
        let ew = math::exp(w);
        let f = w * ew - x;
        let wp1 = w + 1.0;
        if wp1 == 0.0 {
            break;
        }
        let dw = f / (ew * wp1 - (w + 2.0) * f / (2.0 * wp1));
        w -= dw;
        if math::abs(dw) <= 4.0 * f64::EPSILON * (1.0 + math::abs(w)) {
            break;
        }
    }
    w
}

#[cfg(test)]
#[path = "lambert_tests.rs"]
mod tests;
