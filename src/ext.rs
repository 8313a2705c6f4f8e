//! Checked variants of the functions.
//!
//! Each function computes the same value as its counterpart in the crate root,
//! but reports `NaN` and infinite results as errors instead of returning them.

use crate::common::util::classify;
use crate::defs::Error;
use crate::defs::Flavor;
use crate::ops;


/// Converts a computed value into `Result`.
/// `NaN` gives `Error::InvalidArgument`, infinity gives `Error::ExponentOverflow` with the sign of the infinity.
pub fn value_to_result(v: f64) -> Result<f64, Error> {
    match classify(v) {
        Flavor::Value => Ok(v),
        Flavor::NaN => Err(Error::InvalidArgument),
        Flavor::Inf(s) => Err(Error::ExponentOverflow(s)),
    }
}

macro_rules! gen_checked {
    ($comment:literal, $fname:ident, $($arg:ident),*) => {
        #[doc=$comment]
        pub fn $fname($($arg: f64),*) -> Result<f64, Error> {
            value_to_result(ops::$fname($($arg),*))
        }
    };
}

gen_checked!("Returns the absolute value of `x`.", fabs, x);
gen_checked!("Returns the integer part of `x`.", trunc, x);
gen_checked!("Returns the largest integer less than or equal to `x`.", floor, x);
gen_checked!("Returns the smallest integer greater than or equal to `x`.", ceil, x);
gen_checked!("Computes `e` to the power of `x`.", exp, x);
gen_checked!("Computes the natural logarithm of `x`.", log, x);
gen_checked!("Computes `x` to the power of `y`.", pow, x, y);
gen_checked!("Computes the sine of `x`.", sin, x);
gen_checked!("Computes the cosine of `x`.", cos, x);
gen_checked!("Computes the tangent of `x`.", tan, x);
gen_checked!("Computes the arcsine of `x`.", asin, x);
gen_checked!("Computes the arccosine of `x`.", acos, x);
gen_checked!("Computes the arctangent of `x`.", atan, x);
gen_checked!("Returns the remainder of division of `x` by `y`.", fmod, x, y);
gen_checked!("Computes the square root of `x`.", sqrt, x);

/// Computes `x` to the power of the integer `n`.
pub fn powi(x: f64, n: u64) -> Result<f64, Error> {
    value_to_result(ops::powi(x, n))
}
