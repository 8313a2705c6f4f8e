//! Bit layout of a binary64 number.

use crate::defs::EXPONENT_BIAS;
use crate::defs::EXP_MASK;
use crate::defs::MANTISSA_BIT_SIZE;
use crate::defs::MANT_MASK;
use crate::defs::SIGN_MASK;

/// Sign, biased exponent, and mantissa fields of an `f64`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Decomposed {
    sign: u64,
    exponent: u64,
    mantissa: u64,
}

impl Decomposed {

    pub fn from_f64(x: f64) -> Self {
        let bits = x.to_bits();
        Decomposed {
            sign: bits & SIGN_MASK,
            exponent: bits & EXP_MASK,
            mantissa: bits & MANT_MASK,
        }
    }

    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.sign | self.exponent | self.mantissa)
    }

    /// Returns the exponent with the bias removed.
    pub fn unbiased_exponent(&self) -> i32 {
        (self.exponent >> MANTISSA_BIT_SIZE) as i32 - EXPONENT_BIAS
    }

    /// Clears the `n` least significant bits of the mantissa.
    pub fn clear_low_bits(&mut self, n: u32) {
        if n >= MANTISSA_BIT_SIZE {
            self.mantissa = 0;
        } else {
            self.mantissa &= u64::MAX << n;
        }
    }

    /// Discards the fractional part of the number.
    /// Magnitudes below 1 give the unsigned zero; `NaN` and infinity are left intact.
    pub fn trunc(mut self) -> f64 {
        let e = self.unbiased_exponent();
        if e < 0 {
            return 0.0;
        }

        let fract_bits = MANTISSA_BIT_SIZE as i32 - e;
        if fract_bits > 0 {
            self.clear_low_bits(fract_bits as u32);
        }

        self.to_f64()
    }
}
