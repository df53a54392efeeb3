//! Line quantities.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A line quantity. Always at least 1.
///
/// Every conversion normalizes instead of failing: input is floored, then
/// clamped to `1..=u32::MAX`. Text that is not a number becomes 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest quantity a line can hold.
    pub const ONE: Quantity = Quantity(1);

    /// The numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Normalize free-form input such as a form field or CLI argument.
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<f64>()
            .map(Self::from)
            .unwrap_or(Self::ONE)
    }

    /// Add two quantities, saturating at `u32::MAX`.
    pub fn saturating_add(self, other: Quantity) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<u32> for Quantity {
    fn from(q: u32) -> Self {
        Self(q.max(1))
    }
}

impl From<i32> for Quantity {
    fn from(q: i32) -> Self {
        Self(q.max(1) as u32)
    }
}

impl From<i64> for Quantity {
    fn from(q: i64) -> Self {
        Self(q.clamp(1, i64::from(u32::MAX)) as u32)
    }
}

impl From<f64> for Quantity {
    fn from(q: f64) -> Self {
        // Float-to-int `as` saturates and maps NaN to 0.
        Self((q.floor() as u32).max(1))
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts integers, floats and numeric strings, normalizing as [`From`] does.
impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(q) => q.into(),
            Raw::Float(q) => q.into(),
            Raw::Text(q) => Self::parse(&q),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_clamps_to_one() {
        assert_eq!(Quantity::from(0).get(), 1);
        assert_eq!(Quantity::from(-5).get(), 1);
        assert_eq!(Quantity::from(0u32).get(), 1);
        assert_eq!(Quantity::from(i64::MIN).get(), 1);
    }

    #[test]
    fn test_quantity_floors_fractions() {
        assert_eq!(Quantity::from(2.9).get(), 2);
        assert_eq!(Quantity::from(0.5).get(), 1);
        assert_eq!(Quantity::from(-3.2).get(), 1);
        assert_eq!(Quantity::from(f64::NAN).get(), 1);
        assert_eq!(Quantity::from(f64::INFINITY).get(), u32::MAX);
    }

    #[test]
    fn test_quantity_saturates_large_input() {
        assert_eq!(Quantity::from(i64::MAX).get(), u32::MAX);
        let big = Quantity::from(u32::MAX);
        assert_eq!(big.saturating_add(Quantity::ONE).get(), u32::MAX);
    }

    #[test]
    fn test_quantity_parse() {
        assert_eq!(Quantity::parse("3").get(), 3);
        assert_eq!(Quantity::parse(" 4.7 ").get(), 4);
        assert_eq!(Quantity::parse("abc").get(), 1);
        assert_eq!(Quantity::parse("").get(), 1);
        assert_eq!(Quantity::parse("-2").get(), 1);
    }

    #[test]
    fn test_quantity_lenient_deserialize() {
        let values: Vec<Quantity> = serde_json::from_str(r#"[2, 0, -1, 1.5, "6", "x"]"#).unwrap();
        let values: Vec<u32> = values.into_iter().map(Quantity::get).collect();
        assert_eq!(values, vec![2, 1, 1, 1, 6, 1]);
    }

    #[test]
    fn test_quantity_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Quantity::from(7)).unwrap(), "7");
    }
}
