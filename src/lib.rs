//! Elementary math functions implemented purely in Rust, without relying on a platform math library.
//!
//! All functions take and return `f64`. Transcendental functions are computed with Taylor series
//! after range reduction; the square root uses Newton's method; truncation, floor, and ceiling
//! work directly on the bits of the binary64 representation.
//!
//! Characteristics:
//!
//! | Name                               | Value    |
//! |:-----------------------------------|---------:|
//! | Convergence threshold              |   1e-15  |
//! | Maximum number of series terms     |  500000  |
//!
//! Results are accurate to the convergence threshold, they are not guaranteed to be correctly rounded.
//!
//! Domain errors and overflow are reported with `NaN` and infinity. Module [ext] contains
//! the same functions returning [Error] instead.
//!
//! ``` rust
//! use series_libm::{sin, cos, pow, floor};
//!
//! let x = 0.7;
//! assert!((sin(x) * sin(x) + cos(x) * cos(x) - 1.0).abs() < 1e-14);
//! assert!((pow(2.0, 10.0) - 1024.0).abs() < 1e-15);
//! assert_eq!(floor(-1.5), -2.0);
//! assert!(series_libm::asin(2.0).is_nan());
//! ```
//!
//! The library does not depend on the standard library, and can be used without it by disabling the default `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#![deny(missing_docs)]
#![deny(clippy::suspicious)]

#![allow(clippy::neg_cmp_op_on_partial_ord)]

mod common;
mod defs;
pub mod ext;
mod ops;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::Flavor;
pub use crate::defs::Sign;

pub use crate::common::util::classify;
pub use crate::common::util::is_inf;
pub use crate::common::util::is_nan;

pub use crate::ops::abs;
pub use crate::ops::acos;
pub use crate::ops::asin;
pub use crate::ops::atan;
pub use crate::ops::ceil;
pub use crate::ops::cos;
pub use crate::ops::exp;
pub use crate::ops::fabs;
pub use crate::ops::floor;
pub use crate::ops::fmod;
pub use crate::ops::log;
pub use crate::ops::pow;
pub use crate::ops::powi;
pub use crate::ops::sin;
pub use crate::ops::sqrt;
pub use crate::ops::tan;
pub use crate::ops::trunc;

pub use crate::common::consts::E;
pub use crate::common::consts::FRAC_PI_2;
pub use crate::common::consts::FRAC_PI_4;
pub use crate::common::consts::PI;
pub use crate::common::consts::SQRT_E;
pub use crate::common::consts::TWO_PI;

pub use crate::defs::EPSILON;
pub use crate::defs::EXPONENT_BIAS;
pub use crate::defs::EXPONENT_BIT_SIZE;
pub use crate::defs::INF_NEG;
pub use crate::defs::INF_POS;
pub use crate::defs::LOG_HALF_STEP_THRES;
pub use crate::defs::LOG_UNDERFLOW_THRES;
pub use crate::defs::MANTISSA_BIT_SIZE;
pub use crate::defs::NAN;
pub use crate::defs::SERIES_ITER_LIMIT;
