//! Digital and graphical signatures.

use crate::datatypes::{Coding, Reference};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Base64Binary, Code, Instant};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A signature along with supporting context.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub r#type: Vec<Coding>,
    pub when: Option<Primitive<Instant>>,
    pub who: Option<Reference>,
    pub on_behalf_of: Option<Reference>,
    pub target_format: Option<Primitive<Code>>,
    pub sig_format: Option<Primitive<Code>>,
    pub data: Option<Primitive<Base64Binary>>,
    pub unknown: JsonMap,
}

impl FhirDecode for Signature {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            r#type: obj.complex_vec("type")?,
            when: obj.prim("when")?,
            who: obj.complex("who")?,
            on_behalf_of: obj.complex("onBehalfOf")?,
            target_format: obj.prim("targetFormat")?,
            sig_format: obj.prim("sigFormat")?,
            data: obj.prim("data")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Signature {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex_vec("type", &self.r#type)?;
        obj.prim("when", self.when.as_ref())?;
        obj.complex("who", self.who.as_ref())?;
        obj.complex("onBehalfOf", self.on_behalf_of.as_ref())?;
        obj.prim("targetFormat", self.target_format.as_ref())?;
        obj.prim("sigFormat", self.sig_format.as_ref())?;
        obj.prim("data", self.data.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
