//! Absolute value.

use crate::defs::SIGN_MASK;


/// Returns the absolute value of an integer.
/// The absolute value of `i32::MIN` is not representable, and `i32::MIN` is returned unchanged.
pub fn abs(x: i32) -> i32 {
    if x < 0 {
        x.wrapping_neg()
    } else {
        x
    }
}

/// Returns the absolute value of `x`.
/// The sign bit is cleared, so `-0.0` gives `0.0`, and the sign of `NaN` is dropped.
#[inline]
pub fn fabs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !SIGN_MASK)
}
