//! Elementary functions.

pub(crate) mod abs;
mod acos;
mod asin;
mod atan;
mod cos;
mod exp;
pub(crate) mod fmod;
mod ln;
mod pow;
pub(crate) mod round;
mod series;
mod sin;
mod sqrt;
mod tan;
mod trig;

pub use abs::abs;
pub use abs::fabs;
pub use acos::acos;
pub use asin::asin;
pub use atan::atan;
pub use cos::cos;
pub use exp::exp;
pub use fmod::fmod;
pub use ln::log;
pub use pow::pow;
pub use pow::powi;
pub use round::ceil;
pub use round::floor;
pub use round::trunc;
pub use sin::sin;
pub use sqrt::sqrt;
pub use tan::tan;

#[cfg(test)]
mod tests;
