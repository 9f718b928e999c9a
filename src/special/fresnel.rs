//! Fresnel integrals `S(x) = ∫₀ˣ sin t² dt` and `C(x) = ∫₀ˣ cos t² dt`.
//!
//! Small arguments use the Taylor series in `x⁴`, truncated more or less
//! aggressively depending on `x²`. Past `x² = 20` the asymptotic expansion
//! in `1/(2x²)` takes over. Both branches stay within about `2e-9`.

use core::f64::consts::PI;

use super::horner;
use crate::math;

/// Taylor coefficients of `S(x) / x³` in powers of `x⁴`.
const SIN_TAYLOR: [f64; 34] = [
    3.333333333333333e-01,
    -2.380952380952381e-02,
    7.575757575757576e-04,
    -1.322751322751323e-05,
    1.450385222315047e-07,
    -1.089222103714857e-09,
    5.947794013637635e-12,
    -2.466827010264457e-14,
    8.032735012415773e-17,
    -2.107855191442136e-19,
    4.551846758928200e-22,
    -8.230149299214221e-25,
    1.264107898898916e-27,
    -1.669761793417372e-30,
    1.916942862109783e-33,
    -1.930357208815108e-36,
    1.718856062801784e-39,
    -1.363041261779140e-42,
    9.687280238870761e-46,
    -6.205657919637397e-49,
    3.601579309810126e-52,
    -1.902541227289880e-55,
    9.186429502398686e-59,
    -4.070135277853257e-62,
    1.660580513451090e-65,
    -6.259184116948712e-69,
    2.186210422953886e-72,
    -7.095717391818054e-76,
    2.145648443096338e-79,
    -6.059397446971375e-83,
    1.601733298213145e-86,
    -3.971543792514178e-90,
    9.255469422513591e-94,
    -2.031034213359600e-97,
];

/// Taylor coefficients of `C(x) / x` in powers of `x⁴`.
const COS_TAYLOR: [f64; 34] = [
    1.000000000000000e+00,
    -1.000000000000000e-01,
    4.629629629629629e-03,
    -1.068376068376068e-04,
    1.458916900093371e-06,
    -1.312253296380281e-08,
    8.350702795147240e-11,
    -3.955429516458526e-13,
    1.448326464359814e-15,
    -4.221407288807088e-18,
    1.002516493490772e-20,
    -1.977064753877905e-23,
    3.289260349175752e-26,
    -4.678483515518486e-29,
    5.754191643982172e-32,
    -6.180307588222796e-35,
    5.846755007468836e-38,
    -4.908923964523423e-41,
    3.682493515461146e-44,
    -2.483069097454912e-47,
    1.513107949541217e-50,
    -8.373419683872282e-54,
    4.226789754193553e-57,
    -1.954102582324171e-60,
    8.304614505929110e-64,
    -3.255395462013028e-67,
    1.180761838911570e-70,
    -3.974252722665066e-74,
    1.244665977389071e-77,
    -3.636156365400515e-81,
    9.932070195448948e-85,
    -2.542105750712475e-88,
    6.109327297108777e-92,
    -1.381255974423878e-95,
];

/// Asymptotic series for the cosine-weighted remainder, powers of `a²`.
const ASYM_P: [f64; 9] = [
    1.0,
    -3.0,
    105.0,
    -10395.0,
    2027025.0,
    -654729075.0,
    316234143225.0,
    -213458046676875.0,
    191898783962510625.0,
];

/// Asymptotic series for the sine-weighted remainder, powers of `a²`.
const ASYM_Q: [f64; 9] = [
    1.0,
    -15.0,
    945.0,
    -135135.0,
    34459425.0,
    -13749310575.0,
    7905853580625.0,
    -6190283353629375.0,
    6332659870762850625.0,
];

const ASYMPTOTIC_START: f64 = 20.0;

/// Number of Taylor terms needed below a given `x²`.
fn taylor_terms(x2: f64) -> usize {
    if x2 < 1.0 {
        8
    } else if x2 < 4.0 {
        12
    } else if x2 < 9.0 {
        18
    } else {
        34
    }
}

/// Returns `(S(x), C(x))`.
pub fn fresnel_sin_cos(x: f64) -> (f64, f64) {
    let x2 = x * x;

    if x2 < ASYMPTOTIC_START {
        let n = taylor_terms(x2);
        let x4 = x2 * x2;
        let s = x * x2 * horner(&SIN_TAYLOR[..n], x4);
        let c = x * horner(&COS_TAYLOR[..n], x4);
        return (s, c);
    }

    // NaN and infinities fall through here and propagate.
    let a = 0.5 / x2;
    let a2 = a * a;
    let p = horner(&ASYM_P, a2);
    let q = a * horner(&ASYM_Q, a2);
    let (sin_x2, cos_x2) = math::sin_cos(x2);
    let half = 0.5 * math::sqrt(0.5 * PI);
    let r = 2.0 * math::abs(x);

    let s = half - (q * sin_x2 + p * cos_x2) / r;
    let c = half - (q * cos_x2 - p * sin_x2) / r;
    (math::copysign(s, x), math::copysign(c, x))
}

/// Fresnel sine integral `∫₀ˣ sin t² dt`.
pub fn fresnel_sin(x: f64) -> f64 {
    fresnel_sin_cos(x).0
}

/// Fresnel cosine integral `∫₀ˣ cos t² dt`.
pub fn fresnel_cos(x: f64) -> f64 {
    fresnel_sin_cos(x).1
}

/// Normalized pair `(Ŝ(u), Ĉ(u))` with `Ĉ(u) = ∫₀ᵘ cos(πt²/2) dt`.
pub fn normalized_fresnel_sin_cos(u: f64) -> (f64, f64) {
    let scale = math::sqrt(0.5 * PI);
    let (s, c) = fresnel_sin_cos(scale * u);
    (s / scale, c / scale)
}

#[cfg(test)]
#[path = "fresnel_tests.rs"]
mod tests;
