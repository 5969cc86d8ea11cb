//! Wire-format bridge between the typed FHIR model and its JSON form.
//!
//! This crate holds the machinery that is uniform across every element
//! kind; the model crate supplies the catalog (which fields exist, their
//! types and cardinalities) by calling into it:
//!
//! - the error taxonomy, every error located by a JSON Pointer
//! - decode options (unknown-field policy, modifier recognition, bounds)
//! - the claims-tracking [`ObjectDecoder`] with primitive companion
//!   (`_name`) merging and choice-slot exclusivity
//! - the ordered [`ObjectEncoder`] producing deterministic output
//! - the [`Scalar`] bridge trait for primitive value kinds
//!
//! Decode is all-or-nothing per resource; encode is deterministic so that
//! structurally equal values serialize byte-identically.

#![forbid(unsafe_code)]

mod decode;
mod encode;
mod error;
mod options;
mod path;
mod scalar;

pub use decode::{
    ChoiceSlot, DecodeContext, DecodeNote, Decoded, FhirDecode, ObjectDecoder, RawPrimitive,
};
pub use encode::{FhirEncode, ObjectEncoder};
pub use error::{DecodeError, DecodeErrorKind, DecodeResult, EncodeError};
pub use options::{DecodeOptions, ModifierPolicy, UnknownFieldPolicy};
pub use scalar::{Scalar, ScalarError};
