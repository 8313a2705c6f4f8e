//! Natural logarithm.

use crate::common::consts::E;
use crate::common::consts::SQRT_E;
use crate::common::util::is_inf;
use crate::common::util::is_nan;
use crate::defs::INF_NEG;
use crate::defs::LOG_HALF_STEP_THRES;
use crate::defs::LOG_UNDERFLOW_THRES;
use crate::defs::NAN;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;


// Term generator of (-1)^(n+1) * u^n / n
struct LnTermGen {
    u: f64,
    numer: f64,
    denom: f64,
}

impl LnTermGen {

    fn new(u: f64) -> Self {
        LnTermGen {
            u,
            numer: u,
            denom: 1.0,
        }
    }
}

impl TermGen for LnTermGen {

    fn next(&mut self, _term: f64) -> f64 {
        self.numer *= -self.u;
        self.denom += 1.0;
        self.numer / self.denom
    }
}

/// Computes the natural logarithm of `x`.
///
/// Returns `NaN` for negative numbers and `NaN`, positive infinity for positive infinity,
/// and negative infinity for numbers smaller than `LOG_UNDERFLOW_THRES`, including zero.
pub fn log(x: f64) -> f64 {

    if is_nan(x) || x < 0.0 {
        return NAN;
    }

    if is_inf(x) {
        return x;
    }

    if x < LOG_UNDERFLOW_THRES {
        return INF_NEG;
    }

    // ln(x) = k + ln(x / e^k), where x / e^k is close to 1
    let (k, x) = ln_arg_reduce(x);

    // ln(1 + u) = u - u^2/2 + u^3/3 - ...
    let u = x - 1.0;
    let ret = series_run(u, u, &mut LnTermGen::new(u));

    k + ret
}

// returns (k, y) such that x = y * e^k and y is in [0.5, sqrt(e))
fn ln_arg_reduce(mut x: f64) -> (f64, f64) {

    let mut k = 0.0;

    while x >= E {
        x /= E;
        k += 1.0;
    }

    if x > LOG_HALF_STEP_THRES {
        x /= SQRT_E;
        k += 0.5;
    }

    while x < 0.5 {
        x *= E;
        k -= 1.0;
    }

    (k, x)
}
