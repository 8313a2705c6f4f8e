//! Argument reduction and series terms shared by sine and cosine.

use crate::common::consts::FRAC_PI_2;
use crate::common::consts::PI;
use crate::common::consts::TWO_PI;
use crate::ops::abs::fabs;
use crate::ops::fmod::fmod;
use crate::ops::series::TermGen;


/// Result of reduction of a trigonometric argument to [0, pi/2].
pub(super) struct TrigArg {

    /// Reduced argument.
    pub x: f64,

    /// The argument was moved by pi: sine and cosine change sign.
    pub half_turn: bool,

    /// The argument was reflected around pi/2: cosine changes sign.
    pub reflected: bool,
}

/// Reduces `|x|` to [0, pi/2] using the period 2*pi, sin(x - pi) = -sin(x), and sin(pi - x) = sin(x).
pub(super) fn reduce_trig_arg(x: f64) -> TrigArg {

    let mut x = fmod(fabs(x), TWO_PI);
    let mut half_turn = false;
    let mut reflected = false;

    if x > PI {
        x -= PI;
        half_turn = true;
    }

    if x > FRAC_PI_2 {
        x = PI - x;
        reflected = true;
    }

    TrigArg {
        x,
        half_turn,
        reflected,
    }
}

/// Generator of terms of sine and cosine series: each term is the previous one multiplied by -x^2 / (i * (i - 1)).
pub(super) struct TrigTermGen {
    xx: f64,
    i: f64,
}

impl TrigTermGen {

    /// `i` is the power of x in the first generated term.
    pub fn new(x: f64, i: usize) -> Self {
        TrigTermGen {
            xx: x * x,
            i: i as f64,
        }
    }
}

impl TermGen for TrigTermGen {

    fn next(&mut self, term: f64) -> f64 {
        let ret = -term * self.xx / (self.i * (self.i - 1.0));
        self.i += 2.0;
        ret
    }
}
