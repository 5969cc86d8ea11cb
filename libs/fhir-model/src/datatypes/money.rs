//! Monetary amounts.

use crate::datatypes::CodeableConcept;
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Decimal};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// An amount of economic utility in some recognized currency.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Money {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub value: Option<Primitive<Decimal>>,
    /// ISO 4217 currency code.
    pub currency: Option<Primitive<Code>>,
    pub unknown: JsonMap,
}

impl FhirDecode for Money {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            value: obj.prim("value")?,
            currency: obj.prim("currency")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Money {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("value", self.value.as_ref())?;
        obj.prim("currency", self.currency.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// One component of a composed price: base, surcharge, discount, tax or
/// informational.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonetaryComponent {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub r#type: Primitive<Code>,
    pub code: Option<CodeableConcept>,
    pub factor: Option<Primitive<Decimal>>,
    pub amount: Option<Money>,
    pub unknown: JsonMap,
}

impl FhirDecode for MonetaryComponent {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            r#type: obj.prim_req("type")?,
            code: obj.complex("code")?,
            factor: obj.prim("factor")?,
            amount: obj.complex("amount")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for MonetaryComponent {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim_req("type", &self.r#type)?;
        obj.complex("code", self.code.as_ref())?;
        obj.prim("factor", self.factor.as_ref())?;
        obj.complex("amount", self.amount.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
