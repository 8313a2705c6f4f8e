//! Tangent.

use crate::common::util::is_inf;
use crate::common::util::is_nan;
use crate::defs::EPSILON;
use crate::defs::INF_POS;
use crate::defs::NAN;
use crate::ops::abs::fabs;
use crate::ops::cos::cos;
use crate::ops::sin::sin;


/// Computes the tangent of `x`. The argument is an angle in radians.
///
/// Returns `NaN` if `x` is `NaN` or infinite.
/// Near the poles, where the magnitude of the cosine is smaller than `EPSILON`, infinity with the sign of the sine is returned.
pub fn tan(x: f64) -> f64 {

    if is_nan(x) || is_inf(x) {
        return NAN;
    }

    let c = cos(x);
    let s = sin(x);

    if fabs(c) < EPSILON {
        s * INF_POS
    } else {
        s / c
    }
}
