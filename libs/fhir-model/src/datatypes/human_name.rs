//! Names of people.

use crate::datatypes::Period;
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::Code;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A human name, with the parts kept separate and repeatable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HumanName {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// usual | official | temp | nickname | anonymous | old | maiden
    pub r#use: Option<Primitive<Code>>,
    pub text: Option<Primitive<String>>,
    pub family: Option<Primitive<String>>,
    pub given: Vec<Primitive<String>>,
    pub prefix: Vec<Primitive<String>>,
    pub suffix: Vec<Primitive<String>>,
    pub period: Option<Period>,
    pub unknown: JsonMap,
}

impl FhirDecode for HumanName {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            r#use: obj.prim("use")?,
            text: obj.prim("text")?,
            family: obj.prim("family")?,
            given: obj.prim_vec("given")?,
            prefix: obj.prim_vec("prefix")?,
            suffix: obj.prim_vec("suffix")?,
            period: obj.complex("period")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for HumanName {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("use", self.r#use.as_ref())?;
        obj.prim("text", self.text.as_ref())?;
        obj.prim("family", self.family.as_ref())?;
        obj.prim_vec("given", &self.given)?;
        obj.prim_vec("prefix", &self.prefix)?;
        obj.prim_vec("suffix", &self.suffix)?;
        obj.complex("period", self.period.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
