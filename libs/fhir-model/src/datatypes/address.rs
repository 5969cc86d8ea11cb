//! Postal addresses.

use crate::datatypes::Period;
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::Code;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// An address expressed using postal conventions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// home | work | temp | old | billing
    pub r#use: Option<Primitive<Code>>,
    /// postal | physical | both
    pub r#type: Option<Primitive<Code>>,
    pub text: Option<Primitive<String>>,
    pub line: Vec<Primitive<String>>,
    pub city: Option<Primitive<String>>,
    pub district: Option<Primitive<String>>,
    pub state: Option<Primitive<String>>,
    pub postal_code: Option<Primitive<String>>,
    pub country: Option<Primitive<String>>,
    pub period: Option<Period>,
    pub unknown: JsonMap,
}

impl FhirDecode for Address {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            r#use: obj.prim("use")?,
            r#type: obj.prim("type")?,
            text: obj.prim("text")?,
            line: obj.prim_vec("line")?,
            city: obj.prim("city")?,
            district: obj.prim("district")?,
            state: obj.prim("state")?,
            postal_code: obj.prim("postalCode")?,
            country: obj.prim("country")?,
            period: obj.complex("period")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Address {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("use", self.r#use.as_ref())?;
        obj.prim("type", self.r#type.as_ref())?;
        obj.prim("text", self.text.as_ref())?;
        obj.prim_vec("line", &self.line)?;
        obj.prim("city", self.city.as_ref())?;
        obj.prim("district", self.district.as_ref())?;
        obj.prim("state", self.state.as_ref())?;
        obj.prim("postalCode", self.postal_code.as_ref())?;
        obj.prim("country", self.country.as_ref())?;
        obj.complex("period", self.period.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
