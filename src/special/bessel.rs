//! Modified Bessel function `I₀` and the Kaiser-Bessel tapers built on it.
//!
//! The tapers are evaluated in `y = 1 - (2x/W)²` from tables of
//! `(α²/4)^k / (k!)²` already divided by `I₀(α)` (or `I₀(α) - 1` for the
//! modified family), so one Horner pass gives the weight directly.

use super::horner;

/// Shape parameter of a Kaiser-Bessel taper, in units of π.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KaiserAlpha {
    /// α = 2.0π
    Two,
    /// α = 2.5π
    TwoAndHalf,
    /// α = 3.5π
    ThreeAndHalf,
}

impl KaiserAlpha {
    pub fn value(self) -> f64 {
        core::f64::consts::PI
            * match self {
                Self::Two => 2.0,
                Self::TwoAndHalf => 2.5,
                Self::ThreeAndHalf => 3.5,
            }
    }
}

/// `I₀(x)` by direct summation of its power series.
///
/// Fine for the moderate arguments the window tapers need; the terms
/// are summed until they no longer change the result.
pub fn bessel_i0(x: f64) -> f64 {
    let q = 0.25 * x * x;
    let mut sum = 1.0;
    let mut term = 1.0;
    let mut k = 1.0;
    while term > f64::EPSILON * sum {
        term *= q / (k * k);
        sum += term;
        k += 1.0;
        if k > 500.0 {
            break;
        }
    }
    sum
}

/// Squared radial coordinate `1 - (2x/W)²`, negative outside the window.
#[inline]
fn radial(x: f64, width: f64) -> f64 {
    let t = 2.0 * x / width;
    1.0 - t * t
}

/// Kaiser-Bessel weight `I₀(α√y) / I₀(α)`, zero for `|x| > W/2`.
pub fn kaiser_bessel(x: f64, width: f64, alpha: KaiserAlpha) -> f64 {
    let y = radial(x, width);
    if y < 0.0 {
        return 0.0;
    }
    let table: &[f64] = match alpha {
        KaiserAlpha::Two => &KB20,
        KaiserAlpha::TwoAndHalf => &KB25,
        KaiserAlpha::ThreeAndHalf => &KB35,
    };
    horner(table, y)
}

/// Modified Kaiser-Bessel weight `(I₀(α√y) - 1) / (I₀(α) - 1)`.
///
/// Unlike the plain taper this one reaches exactly zero at `|x| = W/2`.
pub fn modified_kaiser_bessel(x: f64, width: f64, alpha: KaiserAlpha) -> f64 {
    let y = radial(x, width);
    if y < 0.0 {
        return 0.0;
    }
    let table: &[f64] = match alpha {
        KaiserAlpha::Two => &KBMD20,
        KaiserAlpha::TwoAndHalf => &KBMD25,
        KaiserAlpha::ThreeAndHalf => &KBMD35,
    };
    y * horner(table, y)
}

const KB20: [f64; 22] = [
    1.147993453795865e-02,
    1.133024124400544e-01,
    2.795624971181007e-01,
    3.065745835484819e-01,
    1.891106161907647e-01,
    7.465787879396366e-02,
    2.046788136446943e-02,
    4.122650857055967e-03,
    6.357645787961623e-04,
    7.746598623386822e-05,
    7.645586386685135e-06,
    6.236273805862520e-07,
    4.274274680606876e-08,
    2.496177526578842e-09,
    1.256953301133821e-10,
    5.513614147926292e-12,
    2.125671502354761e-13,
    7.259355299277086e-15,
    2.211326080580756e-16,
    6.045682442422025e-18,
    1.491712351032927e-19,
    3.338460495445336e-21,
];

const KBMD20: [f64; 21] = [
    1.146182221269288e-01,
    2.828091273872434e-01,
    3.101349120365977e-01,
    1.913068057979916e-01,
    7.552489969848819e-02,
    2.070558006822310e-02,
    4.170528248335567e-03,
    6.431478742912532e-04,
    7.836561840316319e-05,
    7.734376522859485e-06,
    6.308697237164975e-07,
    4.323912917851647e-08,
    2.525166270056553e-09,
    1.271550619001661e-10,
    5.577645149114085e-12,
    2.150357465289495e-13,
    7.343660035756595e-15,
    2.237006771882942e-16,
    6.115892487823431e-18,
    1.509035985360287e-19,
    3.377230884923833e-21,
];

const KB25: [f64; 24] = [
    2.680816864024415e-03,
    4.134156549951553e-02,
    1.593847253132588e-01,
    2.731014212531523e-01,
    2.632229481585812e-01,
    1.623691479758530e-01,
    6.955378721630245e-02,
    2.188993509000164e-02,
    5.274536125582045e-03,
    1.004197240716616e-03,
    1.548598360396641e-04,
    1.973663893761680e-05,
    2.113637353747986e-06,
    1.928694945345598e-07,
    1.517494907600583e-08,
    1.040074612408709e-09,
    6.265335065973084e-11,
    3.343229808684442e-12,
    1.591259434492916e-13,
    6.797568004651249e-15,
    2.620676058414460e-16,
    9.164199248850930e-18,
    2.919906419128323e-19,
    8.512027777941272e-21,
];

const KBMD25: [f64; 23] = [
    4.145269257683473e-02,
    1.598131551145829e-01,
    2.738355241442472e-01,
    2.639304974871751e-01,
    1.628055999738205e-01,
    6.974074939338594e-02,
    2.194877573814515e-02,
    5.288714199797869e-03,
    1.006896545957346e-03,
    1.552761028347234e-04,
    1.978969147626020e-05,
    2.119318859486743e-06,
    1.933879321644050e-07,
    1.521573968755885e-08,
    1.042870356848339e-09,
    6.282176430490719e-11,
    3.352216487175122e-12,
    1.595536776390234e-13,
    6.815840023528818e-15,
    2.627720495833633e-16,
    9.188832826853862e-18,
    2.927755194627817e-19,
    8.534908304055685e-21,
];

const KB35: [f64; 28] = [
    1.377827841951089e-04,
    4.164576068189577e-03,
    3.146926869175763e-02,
    1.056866139318229e-01,
    1.996530016792571e-01,
    2.413857776478763e-01,
    2.026679245455886e-01,
    1.250157650034242e-01,
    5.904194441375398e-02,
    2.203187583897231e-02,
    6.659280649052623e-03,
    1.663480792612071e-03,
    3.491653516678359e-04,
    6.244825099294028e-05,
    9.630305200629005e-06,
    1.293699396390591e-06,
    1.527457913962055e-07,
    1.597523490821399e-08,
    1.490315044206928e-09,
    1.247805013930756e-10,
    9.428933609412895e-12,
    6.462489211738950e-13,
    4.035806284016517e-14,
    2.305953168325853e-15,
    1.210051466364936e-16,
    5.851937346210200e-18,
    2.616548652704986e-19,
    1.084868574092658e-20,
];

const KBMD35: [f64; 27] = [
    4.165149954146850e-03,
    3.147360521271250e-02,
    1.057011777343838e-01,
    1.996805142164553e-01,
    2.414190410355079e-01,
    2.026958525444970e-01,
    1.250329923972329e-01,
    5.905008049825197e-02,
    2.203491187047932e-02,
    6.660198309719027e-03,
    1.663710023211162e-03,
    3.492134672716350e-04,
    6.245685647251715e-05,
    9.631632273740025e-06,
    1.293877670458434e-06,
    1.527668400367585e-07,
    1.597743632387499e-08,
    1.490520412259228e-09,
    1.247976963671422e-10,
    9.430232933162035e-12,
    6.463379754196793e-13,
    4.036362425269491e-14,
    2.306270932756076e-15,
    1.210218213599889e-16,
    5.852743753539743e-18,
    2.616909217742993e-19,
    1.085018070903369e-20,
];

#[cfg(test)]
#[path = "bessel_tests.rs"]
mod tests;
