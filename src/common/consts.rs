//! Mathematical constants.

/// The number pi.
pub const PI: f64 = 3.141_592_653_589_793;

/// 2 * pi, the period of sine and cosine.
pub const TWO_PI: f64 = 2.0 * PI;

/// pi / 2
pub const FRAC_PI_2: f64 = PI / 2.0;

/// pi / 4
pub const FRAC_PI_4: f64 = PI / 4.0;

/// The Euler number.
pub const E: f64 = 2.718_281_828_459_045;

/// Square root of the Euler number.
pub const SQRT_E: f64 = 1.648_721_270_700_128;
