//! Business identifiers.

use crate::datatypes::{CodeableConcept, Period, Reference};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Uri};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// An identifier intended for computation, scoped by a system URI.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Identifier {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub r#use: Option<Primitive<Code>>,
    pub r#type: Option<CodeableConcept>,
    pub system: Option<Primitive<Uri>>,
    pub value: Option<Primitive<String>>,
    pub period: Option<Period>,
    pub assigner: Option<Box<Reference>>,
    pub unknown: JsonMap,
}

impl Identifier {
    pub fn new(system: &str, value: impl Into<String>) -> Result<Self, aurum_codec::ScalarError> {
        Ok(Self {
            system: Some(system.parse::<Uri>()?.into()),
            value: Some(Primitive::new(value.into())),
            ..Default::default()
        })
    }
}

impl FhirDecode for Identifier {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            r#use: obj.prim("use")?,
            r#type: obj.complex("type")?,
            system: obj.prim("system")?,
            value: obj.prim("value")?,
            period: obj.complex("period")?,
            assigner: obj.complex("assigner")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Identifier {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("use", self.r#use.as_ref())?;
        obj.complex("type", self.r#type.as_ref())?;
        obj.prim("system", self.system.as_ref())?;
        obj.prim("value", self.value.as_ref())?;
        obj.complex("period", self.period.as_ref())?;
        obj.complex("assigner", self.assigner.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
