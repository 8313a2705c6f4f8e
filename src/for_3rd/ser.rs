//! Serialization of `Sign` and `Flavor`.
//! `Sign` is serialized as an integer, and `Flavor` as a string.

use serde::{Serialize, Serializer};
use crate::defs::{Flavor, Sign};


impl Serialize for Sign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(*self as i8)
    }
}

impl Serialize for Flavor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(flavor_name(self))
    }
}

pub(super) fn flavor_name(f: &Flavor) -> &'static str {
    match f {
        Flavor::Value => "value",
        Flavor::NaN => "nan",
        Flavor::Inf(Sign::Pos) => "+inf",
        Flavor::Inf(Sign::Neg) => "-inf",
    }
}
