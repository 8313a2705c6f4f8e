//! Exponent.

use crate::common::util::is_nan;
use crate::defs::INF_NEG;
use crate::defs::INF_POS;
use crate::defs::NAN;
use crate::ops::abs::fabs;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;


// Term generator of x^n / n!
struct ExpTermGen {
    x: f64,
    n: f64,
}

impl ExpTermGen {

    fn new(x: f64) -> Self {
        ExpTermGen {
            x,
            n: 0.0,
        }
    }
}

impl TermGen for ExpTermGen {

    fn next(&mut self, term: f64) -> f64 {
        self.n += 1.0;
        term * self.x / self.n
    }
}

/// Computes `e` to the power of `x`.
///
/// Returns `NaN` for `NaN`, positive infinity for positive infinity, and zero for negative infinity.
/// Results which are too large give positive infinity, and results which are too small give zero.
pub fn exp(x: f64) -> f64 {

    if is_nan(x) {
        return NAN;
    }

    if x == INF_POS {
        return INF_POS;
    }

    if x == INF_NEG {
        return 0.0;
    }

    // e^|x| = 1 + |x| + |x|^2/2! + ...
    let ret = series_run(1.0, 1.0, &mut ExpTermGen::new(fabs(x)));

    if x < 0.0 {
        1.0 / ret
    } else {
        ret
    }
}
