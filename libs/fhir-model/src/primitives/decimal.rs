//! The decimal primitive.
//!
//! Serialization must not normalize: `1.20` stays `1.20` and `1.2e1` stays
//! `1.2e1`. The original JSON literal is kept next to a parsed
//! `rust_decimal` value used for numeric comparison. Structural equality is
//! over the literal, so round-tripping is byte-exact.

use aurum_codec::{Scalar, ScalarError};
use serde_json::{Number, Value};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Decimal {
    value: rust_decimal::Decimal,
    literal: Number,
}

impl Decimal {
    /// The comparable numeric value (significant figures retained by
    /// `rust_decimal` up to its 96-bit mantissa).
    pub fn value(&self) -> rust_decimal::Decimal {
        self.value
    }

    /// The literal as it appeared on the wire or was constructed.
    pub fn literal(&self) -> String {
        self.literal.to_string()
    }

    /// Numeric comparison; `1.20` and `1.2` compare equal here even though
    /// they are structurally distinct.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    fn parse_literal(literal: &str) -> Result<rust_decimal::Decimal, ScalarError> {
        let parsed = if literal.contains(['e', 'E']) {
            rust_decimal::Decimal::from_scientific(literal)
        } else {
            rust_decimal::Decimal::from_str(literal)
        };
        parsed.map_err(|_| {
            ScalarError::range(format!(
                "`{literal}` does not fit the supported decimal range"
            ))
        })
    }
}

impl FromStr for Decimal {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal: Number = serde_json::from_str(s)
            .map_err(|_| ScalarError::lexical(format!("`{s}` is not a decimal literal")))?;
        let value = Self::parse_literal(s)?;
        Ok(Self { value, literal })
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        // A rust_decimal rendering is always a valid JSON number literal.
        let literal = serde_json::from_str(&value.to_string())
            .expect("decimal rendering is a JSON number");
        Self { value, literal }
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        rust_decimal::Decimal::from(value).into()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

impl Scalar for Decimal {
    const NAME: &'static str = "decimal";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        let Value::Number(n) = value else {
            return Err(ScalarError::Shape("number"));
        };
        let literal = n.to_string();
        let value = Self::parse_literal(&literal)?;
        Ok(Self {
            value,
            literal: n.clone(),
        })
    }

    fn to_json(&self) -> Value {
        Value::Number(self.literal.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_zeros_survive() {
        // Literal must come in through the parser: the json! macro would
        // collapse 1.20 to an f64 before the codec ever saw it.
        let wire: Value = serde_json::from_str("1.20").unwrap();
        let d = Decimal::from_json(&wire).unwrap();
        assert_eq!(serde_json::to_string(&d.to_json()).unwrap(), "1.20");
        assert_eq!(d.literal(), "1.20");
    }

    #[test]
    fn exponent_notation_survives() {
        let d: Decimal = "1.2e1".parse().unwrap();
        assert_eq!(d.literal(), "1.2e1");
        assert_eq!(d.value(), rust_decimal::Decimal::from(12));
    }

    #[test]
    fn structural_vs_numeric_equality() {
        let long: Decimal = "1.20".parse().unwrap();
        let short: Decimal = "1.2".parse().unwrap();
        assert_ne!(long, short);
        assert_eq!(long.cmp_value(&short), Ordering::Equal);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(matches!(
            "1e300".parse::<Decimal>(),
            Err(ScalarError::Range(_))
        ));
    }

    #[test]
    fn non_numeric_is_rejected() {
        assert!("12,5".parse::<Decimal>().is_err());
    }
}
