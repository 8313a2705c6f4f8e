//! Arccosine.

use crate::common::consts::FRAC_PI_2;
use crate::common::util::is_nan;
use crate::defs::NAN;
use crate::ops::asin::asin;


/// Computes the arccosine of `x`. The result is in [0, pi].
///
/// Returns `NaN` if `x` is `NaN`, or if `x` is greater than 1 or smaller than -1.
pub fn acos(x: f64) -> f64 {

    if is_nan(x) || !(-1.0..=1.0).contains(&x) {
        return NAN;
    }

    // arccos(x) = pi/2 - arcsin(x)
    FRAC_PI_2 - asin(x)
}
