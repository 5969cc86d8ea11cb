//! Time periods.

use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::DateTime;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A start/end bounded interval; either bound may be open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Period {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub start: Option<Primitive<DateTime>>,
    pub end: Option<Primitive<DateTime>>,
    pub unknown: JsonMap,
}

impl FhirDecode for Period {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            start: obj.prim("start")?,
            end: obj.prim("end")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Period {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("start", self.start.as_ref())?;
        obj.prim("end", self.end.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
