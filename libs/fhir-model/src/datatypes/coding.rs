//! Coded concepts: Coding, CodeableConcept, CodeableReference.

use crate::datatypes::Reference;
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Uri};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A symbol from a defined code system.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coding {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub system: Option<Primitive<Uri>>,
    pub version: Option<Primitive<String>>,
    pub code: Option<Primitive<Code>>,
    pub display: Option<Primitive<String>>,
    pub user_selected: Option<Primitive<bool>>,
    pub unknown: JsonMap,
}

impl Coding {
    pub fn new(system: &str, code: Code) -> Result<Self, aurum_codec::ScalarError> {
        Ok(Self {
            system: Some(system.parse::<Uri>()?.into()),
            code: Some(code.into()),
            ..Default::default()
        })
    }
}

impl FhirDecode for Coding {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            system: obj.prim("system")?,
            version: obj.prim("version")?,
            code: obj.prim("code")?,
            display: obj.prim("display")?,
            user_selected: obj.prim("userSelected")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Coding {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("system", self.system.as_ref())?;
        obj.prim("version", self.version.as_ref())?;
        obj.prim("code", self.code.as_ref())?;
        obj.prim("display", self.display.as_ref())?;
        obj.prim("userSelected", self.user_selected.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A concept, coded zero or more ways with an optional free-text rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeableConcept {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub coding: Vec<Coding>,
    pub text: Option<Primitive<String>>,
    pub unknown: JsonMap,
}

impl CodeableConcept {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(Primitive::new(text.into())),
            ..Default::default()
        }
    }
}

impl FhirDecode for CodeableConcept {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            coding: obj.complex_vec("coding")?,
            text: obj.prim("text")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for CodeableConcept {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex_vec("coding", &self.coding)?;
        obj.prim("text", self.text.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A concept that may be a coded concept, a reference to a resource, or
/// both at once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeableReference {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub concept: Option<CodeableConcept>,
    pub reference: Option<Reference>,
    pub unknown: JsonMap,
}

impl FhirDecode for CodeableReference {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            concept: obj.complex("concept")?,
            reference: obj.complex("reference")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for CodeableReference {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("concept", self.concept.as_ref())?;
        obj.complex("reference", self.reference.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
