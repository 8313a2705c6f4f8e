//! Arctangent.

use crate::common::consts::FRAC_PI_2;
use crate::common::consts::FRAC_PI_4;
use crate::common::util::is_nan;
use crate::defs::INF_NEG;
use crate::defs::INF_POS;
use crate::defs::NAN;
use crate::ops::abs::fabs;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;


// Term generator of arctangent series: (-1)^n * x^(2n + 1) / (2n + 1)
struct AtanTermGen {
    xx: f64,
    i: f64,
}

impl AtanTermGen {

    fn new(x: f64) -> Self {
        AtanTermGen {
            xx: x * x,
            i: 3.0,
        }
    }
}

impl TermGen for AtanTermGen {

    fn next(&mut self, term: f64) -> f64 {
        let i = self.i;
        self.i += 2.0;
        -term * self.xx * (i - 2.0) / i
    }
}

/// Computes the arctangent of `x`. The result is in [-pi/2, pi/2].
///
/// Returns `NaN` for `NaN`, and pi/2 with the sign of `x` for infinity.
pub fn atan(x: f64) -> f64 {

    if is_nan(x) {
        return NAN;
    }

    if x == INF_POS {
        return FRAC_PI_2;
    }

    if x == INF_NEG {
        return -FRAC_PI_2;
    }

    if fabs(x) == 1.0 {
        return x * FRAC_PI_4;
    }

    if fabs(x) > 1.0 {
        // arctan(x) = pi/2 * sign(x) - arctan(1/x)
        let r = 1.0 / x;
        let half_pi = if r < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
        half_pi - atan_series(r)
    } else {
        atan_series(x)
    }
}

// arctangent for |x| < 1.
fn atan_series(x: f64) -> f64 {
    // arctan: x - x^3/3 + x^5/5 - x^7/7 + ...
    series_run(x, x, &mut AtanTermGen::new(x))
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_arctan() {
        assert_eq!(atan(0.0), 0.0);
        assert_eq!(atan(1.0), FRAC_PI_4);
        assert_eq!(atan(-1.0), -FRAC_PI_4);
        assert!((atan(0.5) - 0.4636476090008061).abs() < 1e-15);
        assert!((atan(-3.0) + 1.2490457723982544).abs() < 1e-15);
        assert!((atan(1e10) - (FRAC_PI_2 - 1e-10)).abs() < 1e-15);
        assert_eq!(atan(1e300), FRAC_PI_2);
        assert_eq!(atan(-1e-300), -1e-300);

        assert!(atan(NAN).is_nan());
        assert_eq!(atan(INF_POS), FRAC_PI_2);
        assert_eq!(atan(INF_NEG), -FRAC_PI_2);
    }

    #[test]
    fn test_arctan_random() {
        for _ in 0..10000 {
            let x = (rand::random::<f64>() - 0.5) * 100.0;
            if (fabs(x) - 1.0).abs() < 0.005 {
                // the series converges slowly around 1.
                continue;
            }
            assert!((atan(x) - x.atan()).abs() < 1e-14, "atan({})", x);
        }
    }

    #[test]
    fn test_arctan_near_one() {
        // about 1.1e5 terms, still within the limit
        let x = 1.0 - 1e-4;
        assert!((atan(x) - x.atan()).abs() < 1e-13);

        let x = 1.0 + 1e-4;
        assert!((atan(x) - x.atan()).abs() < 1e-13);

        // the term limit cuts the series before the terms drop below EPSILON
        let x = 1.0 - 1e-8;
        let d = fabs(atan(x) - x.atan());
        assert!(d > 1e-8 && d < 1e-6, "atan({}) is off by {}", x, d);
        assert_eq!(atan(-x), -atan(x));
    }

    #[ignore]
    #[test]
    #[cfg(feature = "std")]
    fn arctan_perf() {
        let mut n = vec![];
        for _ in 0..10000 {
            n.push((rand::random::<f64>() - 0.5) * 10.0);
        }

        for _ in 0..5 {
            let start_time = std::time::Instant::now();
            for ni in n.iter() {
                let _f = atan(*ni);
            }
            let time = start_time.elapsed();
            println!("{}", time.as_millis());
        }
    }
}
