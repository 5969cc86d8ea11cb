//! String-shaped and integer-shaped primitives with lexical constraints.

use aurum_codec::{Scalar, ScalarError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-\.]{1,64}$").expect("valid id regex"));
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s]+( [^\s]+)*$").expect("valid code regex"));
static OID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^urn:oid:[0-2](\.(0|[1-9][0-9]*))+$").expect("valid oid regex"));
static INTEGER64_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(0|[1-9][0-9]*)$").expect("valid integer64 regex"));

fn check_code(s: &str) -> Result<(), ScalarError> {
    if CODE_RE.is_match(s) {
        Ok(())
    } else {
        Err(ScalarError::lexical(format!(
            "`{s}` is not a code: tokens separated by single spaces required"
        )))
    }
}

fn check_id(s: &str) -> Result<(), ScalarError> {
    if ID_RE.is_match(s) {
        Ok(())
    } else {
        Err(ScalarError::lexical(format!(
            "`{s}` is not an id: 1-64 letters, digits, `-` or `.`"
        )))
    }
}

fn check_uri(s: &str) -> Result<(), ScalarError> {
    if !s.is_empty() && !s.contains(char::is_whitespace) {
        Ok(())
    } else {
        Err(ScalarError::lexical(format!(
            "`{s}` is not a URI: must be non-empty and contain no whitespace"
        )))
    }
}

fn check_oid(s: &str) -> Result<(), ScalarError> {
    if OID_RE.is_match(s) {
        Ok(())
    } else {
        Err(ScalarError::lexical(format!("`{s}` is not an OID URN")))
    }
}

fn check_uuid(s: &str) -> Result<(), ScalarError> {
    let bad = || ScalarError::lexical(format!("`{s}` is not a lowercase UUID URN"));
    let payload = s.strip_prefix("urn:uuid:").ok_or_else(bad)?;
    if payload.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(bad());
    }
    uuid::Uuid::parse_str(payload).map_err(|_| bad())?;
    Ok(())
}

fn check_markdown(s: &str) -> Result<(), ScalarError> {
    if s.is_empty() {
        Err(ScalarError::lexical("markdown must not be empty"))
    } else {
        Ok(())
    }
}

fn check_base64(s: &str) -> Result<(), ScalarError> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD
        .decode(s)
        .map_err(|e| ScalarError::lexical(format!("invalid base64 content: {e}")))?;
    Ok(())
}

/// Declare a string-valued primitive with its lexical check.
macro_rules! string_primitive {
    ($(#[$doc:meta])* $name:ident, $wire:literal, $check:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ScalarError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $check(s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Scalar for $name {
            const NAME: &'static str = $wire;

            fn from_json(value: &Value) -> Result<Self, ScalarError> {
                let Value::String(s) = value else {
                    return Err(ScalarError::Shape("string"));
                };
                s.parse()
            }

            fn to_json(&self) -> Value {
                Value::String(self.0.clone())
            }
        }
    };
}

string_primitive!(
    /// A token from some code system; single internal spaces allowed.
    Code, "code", check_code
);
string_primitive!(
    /// A logical identifier: 1-64 letters, digits, `-`, `.`.
    Id, "id", check_id
);
string_primitive!(
    /// A uniform resource identifier.
    Uri, "uri", check_uri
);
string_primitive!(
    /// A URI that is expected to resolve.
    Url, "url", check_uri
);
string_primitive!(
    /// A URI referring to a canonical definition, optionally versioned
    /// with `|`.
    Canonical, "canonical", check_uri
);
string_primitive!(Oid, "oid", check_oid);
string_primitive!(Uuid, "uuid", check_uuid);
string_primitive!(
    /// Markdown-formatted free text.
    Markdown, "markdown", check_markdown
);
string_primitive!(
    /// Base64-encoded bytes, kept in their encoded form so the wire
    /// representation is preserved exactly.
    Base64Binary, "base64Binary", check_base64
);

impl Base64Binary {
    /// Decode to raw bytes.
    pub fn decode(&self) -> Vec<u8> {
        use base64::Engine;
        // Content was validated on construction.
        base64::engine::general_purpose::STANDARD
            .decode(&self.0)
            .expect("validated base64 content")
    }
}

/// A 64-bit integer; JSON representation is a string, since the value may
/// exceed the interoperable range of JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Integer64(pub i64);

impl Scalar for Integer64 {
    const NAME: &'static str = "integer64";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        let Value::String(s) = value else {
            return Err(ScalarError::Shape("string"));
        };
        if !INTEGER64_RE.is_match(s) {
            return Err(ScalarError::lexical(format!(
                "`{s}` is not a 64-bit integer literal"
            )));
        }
        s.parse::<i64>()
            .map(Integer64)
            .map_err(|_| ScalarError::range(format!("`{s}` does not fit a 64-bit integer")))
    }

    fn to_json(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

impl fmt::Display for Integer64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An integer in 0..=2_147_483_647.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnsignedInt(pub u32);

impl Scalar for UnsignedInt {
    const NAME: &'static str = "unsignedInt";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        ranged_u32(value, 0, "unsignedInt").map(UnsignedInt)
    }

    fn to_json(&self) -> Value {
        Value::Number(self.0.into())
    }
}

/// An integer in 1..=2_147_483_647.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositiveInt(pub u32);

impl Scalar for PositiveInt {
    const NAME: &'static str = "positiveInt";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        ranged_u32(value, 1, "positiveInt").map(PositiveInt)
    }

    fn to_json(&self) -> Value {
        Value::Number(self.0.into())
    }
}

fn ranged_u32(value: &Value, min: u64, type_name: &str) -> Result<u32, ScalarError> {
    let Value::Number(n) = value else {
        return Err(ScalarError::Shape("number"));
    };
    let Some(wide) = n.as_u64() else {
        return Err(ScalarError::lexical(format!(
            "`{n}` is not a non-negative integer literal"
        )));
    };
    if wide < min || wide > i32::MAX as u64 {
        return Err(ScalarError::range(format!(
            "`{wide}` is outside the {type_name} range"
        )));
    }
    Ok(wide as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_forbids_surrounding_whitespace() {
        assert!("final".parse::<Code>().is_ok());
        assert!("two words".parse::<Code>().is_ok());
        assert!(" leading".parse::<Code>().is_err());
        assert!("double  space".parse::<Code>().is_err());
    }

    #[test]
    fn id_limits_charset_and_length() {
        assert!("p-1.alpha".parse::<Id>().is_ok());
        assert!("has space".parse::<Id>().is_err());
        assert!("x".repeat(65).parse::<Id>().is_err());
    }

    #[test]
    fn uuid_requires_lowercase_urn() {
        assert!("urn:uuid:0d9f31b8-4f55-4672-9f2b-2f0eb8c6a883"
            .parse::<Uuid>()
            .is_ok());
        assert!("urn:uuid:0D9F31B8-4F55-4672-9F2B-2F0EB8C6A883"
            .parse::<Uuid>()
            .is_err());
        assert!("0d9f31b8-4f55-4672-9f2b-2f0eb8c6a883".parse::<Uuid>().is_err());
    }

    #[test]
    fn oid_urn_form() {
        assert!("urn:oid:2.16.840.1.113883".parse::<Oid>().is_ok());
        assert!("2.16.840.1".parse::<Oid>().is_err());
        assert!("urn:oid:2.016".parse::<Oid>().is_err());
    }

    #[test]
    fn integer64_is_a_string_on_the_wire() {
        let v = Integer64::from_json(&Value::String("9007199254740993".into())).unwrap();
        assert_eq!(v.0, 9_007_199_254_740_993);
        assert_eq!(v.to_json(), Value::String("9007199254740993".into()));
        assert!(Integer64::from_json(&serde_json::json!(12)).is_err());
    }

    #[test]
    fn positive_int_rejects_zero() {
        assert!(PositiveInt::from_json(&serde_json::json!(0)).is_err());
        assert!(UnsignedInt::from_json(&serde_json::json!(0)).is_ok());
        assert!(UnsignedInt::from_json(&serde_json::json!(2_147_483_648_u64)).is_err());
    }

    #[test]
    fn base64_round_trips_encoded_form() {
        let b: Base64Binary = "aGVsbG8=".parse().unwrap();
        assert_eq!(b.decode(), b"hello");
        assert!("not base64!".parse::<Base64Binary>().is_err());
    }
}
