//! Cosine.

use crate::common::util::is_inf;
use crate::common::util::is_nan;
use crate::defs::NAN;
use crate::ops::series::series_run;
use crate::ops::trig::reduce_trig_arg;
use crate::ops::trig::TrigTermGen;


/// Computes the cosine of `x`. The argument is an angle in radians.
///
/// Returns `NaN` if `x` is `NaN` or infinite.
pub fn cos(x: f64) -> f64 {

    if is_nan(x) || is_inf(x) {
        return NAN;
    }

    let arg = reduce_trig_arg(x);

    // cos(x + pi) = -cos(x), cos(pi - x) = -cos(x)
    let negative = arg.half_turn != arg.reflected;

    // cos: 1 - x^2/2! + x^4/4! - x^6/6! + ...
    let x = arg.x;
    let second = -x * x / 2.0;
    let ret = series_run(1.0 + second, second, &mut TrigTermGen::new(x, 4));

    if negative {
        -ret
    } else {
        ret
    }
}
