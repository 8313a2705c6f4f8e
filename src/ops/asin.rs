//! Arcsine.

use crate::common::consts::FRAC_PI_2;
use crate::common::util::is_nan;
use crate::defs::EPSILON;
use crate::defs::NAN;
use crate::ops::abs::fabs;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;
use crate::ops::sqrt::sqrt;


// Term generator of arcsine series: (2n)! / (4^n * (n!)^2 * (2n + 1)) * x^(2n + 1)
struct AsinTermGen {
    xx: f64,
    i: f64,
}

impl AsinTermGen {

    fn new(x: f64) -> Self {
        AsinTermGen {
            xx: x * x,
            i: 2.0,
        }
    }
}

impl TermGen for AsinTermGen {

    fn next(&mut self, term: f64) -> f64 {
        let i = self.i;
        self.i += 2.0;
        term * i * (i - 1.0) * (i - 1.0) * self.xx / (i * i * (i + 1.0))
    }
}

/// Computes the arcsine of `x`. The result is in [-pi/2, pi/2].
///
/// Returns `NaN` if `x` is `NaN`, or if `x` is greater than 1 or smaller than -1.
pub fn asin(x: f64) -> f64 {

    if is_nan(x) || !(-1.0..=1.0).contains(&x) {
        return NAN;
    }

    let ax = fabs(x);

    let ret = if 1.0 - ax < EPSILON {
        FRAC_PI_2
    } else if ax < 0.5 {
        asin_series(ax)
    } else {
        // arcsin(x) = pi/2 - arcsin(sqrt(1 - x^2))
        FRAC_PI_2 - asin_series(sqrt(1.0 - x * x))
    };

    if x < 0.0 {
        -ret
    } else {
        ret
    }
}

// arcsine for |x| <= sqrt(0.75): below 0.5 directly, and sqrt(1 - x^2) from the reflection of |x| >= 0.5.
fn asin_series(x: f64) -> f64 {
    // arcsin: x + 1/2 * x^3/3 + 1*3/(2*4) * x^5/5 + ...
    series_run(x, x, &mut AsinTermGen::new(x))
}
