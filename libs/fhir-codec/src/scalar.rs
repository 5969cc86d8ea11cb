//! The primitive bridge: how scalar values cross the JSON boundary.

use serde_json::Value;

/// Failure converting between a JSON scalar and a primitive value. The
/// decoder attaches the path and maps each case onto the error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// The value does not match the type's lexical form.
    Lexical(String),
    /// A numeric value is outside the permitted range.
    Range(String),
    /// The JSON token kind is wrong outright (e.g. object where a string
    /// was required).
    Shape(&'static str),
}

impl ScalarError {
    pub fn lexical(detail: impl Into<String>) -> Self {
        Self::Lexical(detail.into())
    }

    pub fn range(detail: impl Into<String>) -> Self {
        Self::Range(detail.into())
    }
}

/// A primitive value kind: parse from its JSON scalar form and render the
/// canonical form back. `parse` then `render` is the identity on every
/// legal value.
pub trait Scalar: Sized {
    /// The published FHIR name of the type (`boolean`, `dateTime`, ...).
    /// Drives choice-field suffixes and error messages.
    const NAME: &'static str;

    fn from_json(value: &Value) -> Result<Self, ScalarError>;

    fn to_json(&self) -> Value;
}

impl Scalar for bool {
    const NAME: &'static str = "boolean";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        value.as_bool().ok_or(ScalarError::Shape("boolean"))
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Scalar for i32 {
    const NAME: &'static str = "integer";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        let Value::Number(n) = value else {
            return Err(ScalarError::Shape("number"));
        };
        let Some(wide) = n.as_i64() else {
            return Err(ScalarError::lexical(format!(
                "`{n}` is not an integer literal"
            )));
        };
        i32::try_from(wide)
            .map_err(|_| ScalarError::range(format!("`{wide}` does not fit a 32-bit integer")))
    }

    fn to_json(&self) -> Value {
        Value::Number((*self).into())
    }
}

impl Scalar for String {
    const NAME: &'static str = "string";

    fn from_json(value: &Value) -> Result<Self, ScalarError> {
        let Value::String(s) = value else {
            return Err(ScalarError::Shape("string"));
        };
        if s.is_empty() {
            return Err(ScalarError::lexical("strings must not be empty"));
        }
        Ok(s.clone())
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boolean_accepts_only_json_booleans() {
        assert_eq!(bool::from_json(&json!(true)), Ok(true));
        assert!(bool::from_json(&json!("true")).is_err());
    }

    #[test]
    fn integer_rejects_fractions_and_overflow() {
        assert_eq!(i32::from_json(&json!(42)), Ok(42));
        assert!(matches!(
            i32::from_json(&json!(1.5)),
            Err(ScalarError::Lexical(_))
        ));
        assert!(matches!(
            i32::from_json(&json!(4_000_000_000_i64)),
            Err(ScalarError::Range(_))
        ));
    }

    #[test]
    fn string_rejects_empty() {
        assert!(matches!(
            String::from_json(&json!("")),
            Err(ScalarError::Lexical(_))
        ));
    }
}
