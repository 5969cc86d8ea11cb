//! Executable expressions.

use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Uri};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// An expression in some formal language, usable in a given context.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub description: Option<Primitive<String>>,
    pub name: Option<Primitive<Code>>,
    /// text/fhirpath, text/cql, application/x-fhir-query, ...
    pub language: Option<Primitive<Code>>,
    pub expression: Option<Primitive<String>>,
    pub reference: Option<Primitive<Uri>>,
    pub unknown: JsonMap,
}

impl FhirDecode for Expression {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            description: obj.prim("description")?,
            name: obj.prim("name")?,
            language: obj.prim("language")?,
            expression: obj.prim("expression")?,
            reference: obj.prim("reference")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Expression {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("description", self.description.as_ref())?;
        obj.prim("name", self.name.as_ref())?;
        obj.prim("language", self.language.as_ref())?;
        obj.prim("expression", self.expression.as_ref())?;
        obj.prim("reference", self.reference.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
