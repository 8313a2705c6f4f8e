//! Power series computation appliance.

use crate::common::util::is_inf;
use crate::common::util::is_nan;
use crate::defs::EPSILON;
use crate::defs::SERIES_ITER_LIMIT;
use crate::ops::abs::fabs;


/// Generator of series terms.
pub trait TermGen {

    /// Returns the term which follows `term` in the series.
    fn next(&mut self, term: f64) -> f64;
}

impl<F: FnMut(f64) -> f64> TermGen for F {

    #[inline]
    fn next(&mut self, term: f64) -> f64 {
        self(term)
    }
}

/// Continues summation of a series.
/// `acc` is the partial sum computed so far, and `term` is the last term added to it.
/// Terms produced by `term_gen` are added to `acc` until a term with magnitude not greater than `EPSILON` is added,
/// or the partial sum stops being a finite number, or `SERIES_ITER_LIMIT` terms are added.
pub fn series_run<T: TermGen>(mut acc: f64, mut term: f64, term_gen: &mut T) -> f64 {

    let mut niter = 0;

    while niter < SERIES_ITER_LIMIT && fabs(term) > EPSILON {

        term = term_gen.next(term);
        acc += term;

        // overflow: further terms can't bring the sum back.
        if is_inf(acc) || is_nan(acc) {
            break;
        }

        niter += 1;
    }

    acc
}
