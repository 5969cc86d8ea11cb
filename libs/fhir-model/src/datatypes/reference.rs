//! Weak, non-owning relations between resources.
//!
//! References are opaque locators. Nothing here dereferences anything; the
//! only helpers are the pure locator parser and (in the resources module)
//! fragment lookup against a container's `contained` list.

use crate::datatypes::Identifier;
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::Uri;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A reference from one resource to another, by locator string, business
/// identifier or display text. At least one of the three should be present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reference {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Relative, absolute or fragment (`#id`) locator.
    pub reference: Option<Primitive<String>>,
    pub r#type: Option<Primitive<Uri>>,
    pub identifier: Option<Box<Identifier>>,
    pub display: Option<Primitive<String>>,
    pub unknown: JsonMap,
}

impl Reference {
    pub fn to(locator: impl Into<String>) -> Self {
        Self {
            reference: Some(Primitive::new(locator.into())),
            ..Default::default()
        }
    }

    /// Parse this reference's locator string, if it has one.
    pub fn parts(&self) -> Option<ReferenceParts<'_>> {
        self.reference
            .as_ref()
            .and_then(|r| r.value.as_deref())
            .map(parse_reference)
    }
}

impl FhirDecode for Reference {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            reference: obj.prim("reference")?,
            r#type: obj.prim("type")?,
            identifier: obj.complex("identifier")?,
            display: obj.prim("display")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Reference {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("reference", self.reference.as_ref())?;
        obj.prim("type", self.r#type.as_ref())?;
        obj.complex("identifier", self.identifier.as_ref())?;
        obj.prim("display", self.display.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// The decomposed form of a reference locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceParts<'a> {
    /// An absolute URL, kept whole.
    Absolute(&'a str),
    /// `[type/]id[/_history/vid]`.
    Relative {
        type_hint: Option<&'a str>,
        id: &'a str,
        version_id: Option<&'a str>,
    },
    /// `#id`, resolvable only within the containing resource.
    Fragment(&'a str),
}

/// Decompose a reference locator. Pure: no lookup, no I/O.
pub fn parse_reference(raw: &str) -> ReferenceParts<'_> {
    if let Some(fragment) = raw.strip_prefix('#') {
        return ReferenceParts::Fragment(fragment);
    }
    if raw.contains("://") || raw.starts_with("urn:") {
        return ReferenceParts::Absolute(raw);
    }
    let (head, version_id) = match raw.split_once("/_history/") {
        Some((head, vid)) => (head, Some(vid)),
        None => (raw, None),
    };
    match head.rsplit_once('/') {
        Some((type_hint, id)) if !type_hint.contains('/') => ReferenceParts::Relative {
            type_hint: Some(type_hint),
            id,
            version_id,
        },
        Some(_) => ReferenceParts::Absolute(raw),
        None => ReferenceParts::Relative {
            type_hint: None,
            id: head,
            version_id,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_references() {
        assert_eq!(parse_reference("#med1"), ReferenceParts::Fragment("med1"));
    }

    #[test]
    fn relative_with_type_and_version() {
        assert_eq!(
            parse_reference("Patient/p1/_history/3"),
            ReferenceParts::Relative {
                type_hint: Some("Patient"),
                id: "p1",
                version_id: Some("3"),
            }
        );
    }

    #[test]
    fn bare_id_is_relative() {
        assert_eq!(
            parse_reference("p1"),
            ReferenceParts::Relative {
                type_hint: None,
                id: "p1",
                version_id: None,
            }
        );
    }

    #[test]
    fn absolute_urls_kept_whole() {
        assert_eq!(
            parse_reference("https://example.org/fhir/Patient/p1"),
            ReferenceParts::Absolute("https://example.org/fhir/Patient/p1")
        );
        assert_eq!(
            parse_reference("urn:uuid:0d9f31b8-4f55-4672-9f2b-2f0eb8c6a883"),
            ReferenceParts::Absolute("urn:uuid:0d9f31b8-4f55-4672-9f2b-2f0eb8c6a883")
        );
    }
}
