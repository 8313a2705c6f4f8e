//! Square root.

use crate::defs::EPSILON;
use crate::defs::INF_POS;
use crate::defs::NAN;
use crate::defs::SERIES_ITER_LIMIT;
use crate::ops::abs::fabs;


/// Computes the square root of `x` using Newton's method.
///
/// Returns zero for zero, positive infinity for positive infinity, and `NaN` for negative numbers and `NaN`.
pub fn sqrt(x: f64) -> f64 {

    if x == 0.0 {
        return 0.0;
    }

    if x == INF_POS {
        return INF_POS;
    }

    if !(x > 0.0) {
        return NAN;
    }

    // the smallest subnormal halves to zero.
    let mut ret = x / 2.0;
    if ret == 0.0 {
        ret = x;
    }

    // r = (r + x/r) / 2 until two successive approximations agree.
    for _ in 0..SERIES_ITER_LIMIT {
        let prev = ret;
        ret = (ret + x / ret) / 2.0;
        if fabs(ret - prev) <= EPSILON * ret {
            break;
        }
    }

    ret
}
