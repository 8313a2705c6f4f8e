//! Exponentiation.

use crate::common::util::is_inf;
use crate::common::util::is_nan;
use crate::defs::INF_NEG;
use crate::defs::INF_POS;
use crate::defs::NAN;
use crate::ops::abs::fabs;
use crate::ops::exp::exp;
use crate::ops::ln::log;
use crate::ops::round::trunc;

// integer exponents are applied in chunks of this size.
const POWI_CHUNK: f64 = u64::MAX as f64;

// 2^53: starting from this value every f64 is an even integer.
const POWI_EVEN_THRES: f64 = 9_007_199_254_740_992.0;


/// Computes `x` to the power of the integer `n` using exponentiation by squaring.
pub fn powi(mut x: f64, mut n: u64) -> f64 {

    let mut ret = 1.0;

    while n > 0 {
        if n & 1 != 0 {
            ret *= x;
        }
        x *= x;
        n >>= 1;
    }

    ret
}

// x to the power of a non-negative integer n which can exceed u64::MAX.
fn powi_large(mut x: f64, mut n: f64) -> f64 {

    if n >= POWI_EVEN_THRES {
        // n is even, while the chunk size is odd.
        x = fabs(x);
    }

    if x == 1.0 && n >= POWI_CHUNK {
        return 1.0;
    }

    let mut ret = 1.0;

    while n > POWI_CHUNK {
        ret *= powi(x, u64::MAX);
        n -= POWI_CHUNK;

        // the result is saturated, more chunks do not change it.
        if ret == 0.0 || is_inf(ret) || is_nan(ret) {
            return ret;
        }
    }

    ret * powi(x, n as u64)
}

/// Computes `x` to the power of `y`.
///
/// Special cases are checked in the following order:
///
///  - `y` is zero: returns 1.
///  - `y` is 1: returns `x`.
///  - `x` is zero: returns positive infinity if `y` is negative, zero otherwise.
///  - `x` is 1: returns 1.
///  - `y` is -1: returns `1 / x`.
///  - `x` or `y` is `NaN`: returns `NaN`.
///  - `y` is negative infinity: returns zero.
///  - `x` is infinite, or `y` is positive infinity: returns positive infinity.
///
/// In the general case `x^|y| = e^(fract(|y|) * ln(x)) * x^int(|y|)`, inverted for negative `y`.
/// The exponential factor is skipped when `y` is an integer, so negative `x` with integer `y`
/// gives the signed power, e.g. `pow(-2, 3) = -8`. Negative `x` with non-integer `y` gives `NaN`.
/// Integers starting from 2^53 are even, and negative `x` raised to them gives a non-negative result.
pub fn pow(x: f64, y: f64) -> f64 {

    if y == 0.0 {
        return 1.0;
    }

    if y == 1.0 {
        return x;
    }

    if x == 0.0 {
        return if y < 0.0 { INF_POS } else { 0.0 };
    }

    if x == 1.0 {
        return 1.0;
    }

    if y == -1.0 {
        return 1.0 / x;
    }

    if is_nan(x) || is_nan(y) {
        return NAN;
    }

    if y == INF_NEG {
        return 0.0;
    }

    if is_inf(x) || y == INF_POS {
        return INF_POS;
    }

    // x^|y| = e^(fract(|y|) * ln(x)) * x^int(|y|)
    let abs_y = fabs(y);
    let int = trunc(abs_y);
    let fract = abs_y - int;

    let mut ret = powi_large(x, int);
    if fract != 0.0 {
        ret *= exp(fract * log(x));
    }

    if y < 0.0 {
        1.0 / ret
    } else {
        ret
    }
}
