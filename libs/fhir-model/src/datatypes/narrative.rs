//! Human-readable narrative.

use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::Code;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// An XHTML fragment summarizing the resource for a human reader.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Narrative {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// generated | extensions | additional | empty
    pub status: Primitive<Code>,
    pub div: Primitive<String>,
    pub unknown: JsonMap,
}

impl FhirDecode for Narrative {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            status: obj.prim_req("status")?,
            div: obj.prim_req("div")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Narrative {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim_req("status", &self.status)?;
        obj.prim_req("div", &self.div)?;
        Ok(obj.finish(&self.unknown))
    }
}
