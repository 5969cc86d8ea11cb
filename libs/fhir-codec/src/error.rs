//! Error taxonomy for the wire-format bridge.
//!
//! Every decode error carries a JSON-Pointer path into the input document.
//! Decode is all-or-nothing: either a fully constructed value is returned or
//! one of these errors, never a partial value.

use thiserror::Error;

/// Result type alias for decode operations.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// What went wrong while decoding, independent of where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    /// A primitive value does not match its lexical form.
    #[error("value does not match the {type_name} lexical form: {detail}")]
    Lexical {
        type_name: &'static str,
        detail: String,
    },

    /// A numeric value is outside the permitted range for its type.
    #[error("value out of range for {type_name}: {detail}")]
    Range {
        type_name: &'static str,
        detail: String,
    },

    /// Min/max cardinality violated, singleton found as array, or the
    /// reverse.
    #[error("cardinality violation: {0}")]
    Cardinality(String),

    /// A field with min cardinality >= 1 is absent.
    #[error("required field `{0}` is missing")]
    RequiredFieldMissing(&'static str),

    /// `resourceType` is absent, not in the catalog, or does not match the
    /// requested variant.
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    /// More than one variant-suffixed field present for a choice slot.
    #[error("multiple variants populated for `{base}[x]`: `{first}` and `{second}`")]
    MultiplePolymorphicVariants {
        base: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// Strict-mode rejection of a modifier extension outside the recognized
    /// set.
    #[error("unrecognized modifier extension `{0}`")]
    UnrecognizedModifierExtension(String),

    /// Strict-mode rejection of an undeclared field.
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// A contained resource itself carries contained resources.
    #[error("contained resources must not contain further resources")]
    ContainedNesting,

    /// `_name` companion does not line up with `name` in length or shape.
    #[error("companion element mismatch: {0}")]
    CompanionMisalignment(String),

    /// The input is not valid JSON.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The JSON shape does not match the declared element kind (for
    /// example a scalar where an object is required).
    #[error("expected {expected}")]
    UnexpectedShape { expected: &'static str },

    /// Element nesting exceeds the configured `max_depth`.
    #[error("nesting depth exceeds the configured limit of {0}")]
    DepthLimitExceeded(usize),

    /// An extension populates both a value and sub-extensions, or neither.
    #[error("extension invariant violated: {0}")]
    ExtensionInvariant(String),
}

/// A decode failure located within the input document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("at `{path}`: {kind}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    /// JSON-Pointer into the input (`/contained/0/id` style; `/` is root).
    pub path: String,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Wrap a JSON parse failure as a root-level error.
    pub fn malformed(err: serde_json::Error) -> Self {
        Self::new(DecodeErrorKind::Malformed(err.to_string()), "/")
    }
}

/// Encode failures are limited to programmatically constructed values that
/// violate the model invariants; well-formed decoded values always encode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// hasValue XOR hasSubExtensions violated on an `Extension`.
    #[error("extension `{url}` has both a value and sub-extensions")]
    ExtensionValueAndChildren { url: String },

    /// Serializing the finished tree to bytes failed.
    #[error("JSON serialization failed: {0}")]
    Json(String),
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
