//! Constants and low-level helpers shared by the operations.

pub(crate) mod bits;
pub mod consts;
pub(crate) mod util;
