//! Floating point remainder.

use crate::common::util::is_inf;
use crate::common::util::is_nan;
use crate::defs::NAN;
use crate::ops::round::trunc;


/// Returns the remainder of division of `x` by `y`, i.e. `x - trunc(x / y) * y`.
/// The result has the sign of `x`.
///
/// Returns `NaN` if `y` is zero, if any argument is `NaN`, or if `x` is infinite.
/// If `y` is infinite and `x` is finite, `x` is returned.
pub fn fmod(x: f64, y: f64) -> f64 {

    if is_nan(x) || is_nan(y) || is_inf(x) || y == 0.0 {
        return NAN;
    }

    if is_inf(y) {
        return x;
    }

    x - trunc(x / y) * y
}
