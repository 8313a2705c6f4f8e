//! Deserialization of `Sign` and `Flavor`.

use core::fmt::Formatter;

use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};
use crate::defs::{Flavor, Sign};
use super::ser::flavor_name;


pub struct SignVisitor {}

impl<'de> Deserialize<'de> for Sign {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_i8(SignVisitor {})
    }
}

impl<'de> Visitor<'de> for SignVisitor {

    type Value = Sign;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `1` or `-1`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            1 => Ok(Sign::Pos),
            -1 => Ok(Sign::Neg),
            _ => Err(Error::custom(format_args!("invalid sign {v}"))),
        }
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            1 => Ok(Sign::Pos),
            _ => Err(Error::custom(format_args!("invalid sign {v}"))),
        }
    }
}

pub struct FlavorVisitor {}

impl<'de> Deserialize<'de> for Flavor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(FlavorVisitor {})
    }
}

impl<'de> Visitor<'de> for FlavorVisitor {

    type Value = Flavor;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect one of `value`, `nan`, `+inf`, `-inf`")
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        [Flavor::Value, Flavor::NaN, Flavor::Inf(Sign::Pos), Flavor::Inf(Sign::Neg)]
            .into_iter()
            .find(|f| flavor_name(f) == v)
            .ok_or_else(|| Error::custom(format_args!("invalid flavor {v}")))
    }
}

#[cfg(test)]
mod tests {

    use serde_json::from_str;
    use crate::{Flavor, Sign};

    #[test]
    fn from_json() {
        assert_eq!(from_str::<Sign>("-1").unwrap(), Sign::Neg);
        assert_eq!(from_str::<Sign>("1").unwrap(), Sign::Pos);
        assert!(from_str::<Sign>("0").is_err());

        assert_eq!(from_str::<Flavor>("\"value\"").unwrap(), Flavor::Value);
        assert_eq!(from_str::<Flavor>("\"nan\"").unwrap(), Flavor::NaN);
        assert_eq!(from_str::<Flavor>("\"+inf\"").unwrap(), Flavor::Inf(Sign::Pos));
        assert_eq!(from_str::<Flavor>("\"-inf\"").unwrap(), Flavor::Inf(Sign::Neg));
        assert!(from_str::<Flavor>("\"inf\"").is_err());
    }
}
