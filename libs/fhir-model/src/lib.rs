//! Strongly-typed FHIR R5 resources and datatypes with a lossless JSON
//! codec.
//!
//! The crate is organized in dependency order:
//!
//! - [`primitives`]: scalar types with lexical constraints and explicit
//!   precision tracking
//! - [`element`]: the primitive slot carrier, extensions and the
//!   open-content value union
//! - [`datatypes`]: the reusable complex datatypes
//! - [`resources`]: the resource catalog, discriminator registry and
//!   decode dispatch
//!
//! # Decoding and encoding
//!
//! ```no_run
//! use aurum_model::{decode, encode};
//!
//! let bytes = br#"{"resourceType":"Patient","active":true}"#;
//! let resource = decode(bytes)?;
//! let round_tripped = encode(&resource)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Decode is all-or-nothing: a fully constructed value or an error carrying
//! a JSON Pointer into the input. Encode emits fields in catalog order, so
//! structurally equal values serialize byte-identically.

#![forbid(unsafe_code)]

pub mod datatypes;
pub mod element;
pub mod primitives;
pub mod resources;

pub use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeError, DecodeErrorKind, DecodeNote, DecodeOptions,
    DecodeResult, Decoded, EncodeError, FhirDecode, FhirEncode, ModifierPolicy, ObjectDecoder,
    ObjectEncoder, Scalar, ScalarError, UnknownFieldPolicy,
};
pub use datatypes::parse_reference;
pub use element::{Extension, ExtensionValue, JsonMap, Primitive};
pub use resources::{resolve_fragment, Resource, ResourceType};

use serde_json::Value;

/// Decode a resource from JSON bytes with default options.
pub fn decode(bytes: &[u8]) -> DecodeResult<Resource> {
    let options = DecodeOptions::default();
    decode_with(bytes, &options).map(|decoded| decoded.value)
}

/// Decode a resource from JSON bytes, returning lenient-mode notes
/// alongside the value.
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> DecodeResult<Decoded<Resource>> {
    let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::malformed)?;
    decode_value(&value, options)
}

/// Decode a resource from an already-parsed JSON tree.
pub fn decode_value(value: &Value, options: &DecodeOptions) -> DecodeResult<Decoded<Resource>> {
    let mut ctx = DecodeContext::new(options);
    let resource = Resource::decode(value, &mut ctx)?;
    tracing::debug!(
        resource_type = resource.resource_type().as_str(),
        "decoded resource"
    );
    Ok(Decoded {
        value: resource,
        notes: ctx.into_notes(),
    })
}

/// Decode a resource of any catalog variant, returning the discriminator
/// tag along with the value.
pub fn decode_any(bytes: &[u8]) -> DecodeResult<(ResourceType, Resource)> {
    let resource = decode(bytes)?;
    Ok((resource.resource_type(), resource))
}

/// Encode a resource to compact JSON bytes.
pub fn encode(resource: &Resource) -> Result<Vec<u8>, EncodeError> {
    let value = encode_value(resource)?;
    Ok(serde_json::to_vec(&value)?)
}

/// Encode a resource to a JSON tree.
pub fn encode_value(resource: &Resource) -> Result<Value, EncodeError> {
    resource.encode()
}
