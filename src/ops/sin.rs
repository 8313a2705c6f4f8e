//! Sine.

use crate::common::util::is_inf;
use crate::common::util::is_nan;
use crate::defs::NAN;
use crate::ops::series::series_run;
use crate::ops::trig::reduce_trig_arg;
use crate::ops::trig::TrigTermGen;


/// Computes the sine of `x`. The argument is an angle in radians.
///
/// Returns `NaN` if `x` is `NaN` or infinite.
pub fn sin(x: f64) -> f64 {

    if is_nan(x) || is_inf(x) {
        return NAN;
    }

    let arg = reduce_trig_arg(x);

    // sin(-x) = -sin(x), sin(x + pi) = -sin(x)
    let negative = (x < 0.0) != arg.half_turn;

    // sin: x - x^3/3! + x^5/5! - x^7/7! + ...
    let ret = series_run(arg.x, arg.x, &mut TrigTermGen::new(arg.x, 3));

    if negative {
        -ret
    } else {
        ret
    }
}
