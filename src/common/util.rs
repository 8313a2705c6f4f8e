//! Auxiliary functions.

use crate::defs::Flavor;
use crate::defs::Sign;
use crate::defs::INF_NEG;
use crate::defs::INF_POS;
use crate::defs::SIGN_MASK;

/// Returns true if `x` is not a number.
#[inline]
#[allow(clippy::eq_op)]
pub fn is_nan(x: f64) -> bool {
    x != x
}

/// Returns true if `x` is positive or negative infinity.
#[inline]
pub fn is_inf(x: f64) -> bool {
    x == INF_POS || x == INF_NEG
}

/// Classifies `x` as a finite number, `NaN`, or signed infinity.
pub fn classify(x: f64) -> Flavor {
    if is_nan(x) {
        Flavor::NaN
    } else if is_inf(x) {
        Flavor::Inf(sign_of(x))
    } else {
        Flavor::Value
    }
}

// sign bit of x as Sign; zero and NaN carry a sign too.
#[inline]
pub(crate) fn sign_of(x: f64) -> Sign {
    if x.to_bits() & SIGN_MASK != 0 {
        Sign::Neg
    } else {
        Sign::Pos
    }
}
