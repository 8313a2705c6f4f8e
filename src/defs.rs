//! Definitions.

/// Convergence threshold: a series term or a Newton step with magnitude below this value is negligible.
pub const EPSILON: f64 = 1e-15;

/// Upper bound on the number of iterations of any series or Newton loop.
pub const SERIES_ITER_LIMIT: usize = 500_000;

/// Size of the mantissa field of binary64 in bits.
pub const MANTISSA_BIT_SIZE: u32 = 52;

/// Size of the exponent field of binary64 in bits.
pub const EXPONENT_BIT_SIZE: u32 = 11;

/// Bias of the binary64 exponent field.
pub const EXPONENT_BIAS: i32 = 1023;

/// Arguments of the logarithm smaller than this value are treated as zero.
pub const LOG_UNDERFLOW_THRES: f64 = 1e-30;

/// Reduced logarithm arguments above this value are divided by `sqrt(e)` once more.
pub const LOG_HALF_STEP_THRES: f64 = 1.5;

// field masks of the binary64 layout.
pub(crate) const SIGN_MASK: u64 = 1 << (MANTISSA_BIT_SIZE + EXPONENT_BIT_SIZE);
pub(crate) const EXP_MASK: u64 = ((1 << EXPONENT_BIT_SIZE) - 1) << MANTISSA_BIT_SIZE;
pub(crate) const MANT_MASK: u64 = (1 << MANTISSA_BIT_SIZE) - 1;

/// Not a number.
pub const NAN: f64 = f64::NAN;

/// Positive infinity.
pub const INF_POS: f64 = f64::INFINITY;

/// Negative infinity.
pub const INF_NEG: f64 = f64::NEG_INFINITY;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if the sign is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if the sign is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1.0 for the positive sign, and -1.0 for the negative sign.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
        }
    }
}

/// Classification of a floating point value.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Flavor {
    /// A finite number, including zero.
    Value,

    /// Not a number.
    NaN,

    /// Signed infinity.
    Inf(Sign),
}

/// Possible errors.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Error {
    /// The result is infinite: it overflowed, or the argument is a pole of the function.
    ExponentOverflow(Sign),

    /// Invalid argument: the argument is outside of the function domain, or it is `NaN`.
    InvalidArgument,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ExponentOverflow(Sign::Pos) => write!(f, "result overflows to positive infinity"),
            Error::ExponentOverflow(Sign::Neg) => write!(f, "result overflows to negative infinity"),
            Error::InvalidArgument => write!(f, "argument is outside of the function domain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
