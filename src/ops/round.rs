//! Truncation, floor, and ceiling.

use crate::common::bits::Decomposed;


/// Returns the integer part of `x` by discarding its fractional bits.
/// Numbers with magnitude less than 1 give `0.0` regardless of their sign.
/// `NaN` and infinity are returned unchanged.
pub fn trunc(x: f64) -> f64 {
    Decomposed::from_f64(x).trunc()
}

/// Returns the largest integer less than or equal to `x`.
pub fn floor(x: f64) -> f64 {
    let t = trunc(x);
    if x < 0.0 && t != x {
        t - 1.0
    } else {
        t
    }
}

/// Returns the smallest integer greater than or equal to `x`.
pub fn ceil(x: f64) -> f64 {
    let t = trunc(x);
    if x > 0.0 && t != x {
        t + 1.0
    } else {
        t
    }
}
