//! Measured amounts: Quantity and its specializations, Range, Ratio.

use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Decimal, Uri};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A measured or measurable amount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quantity {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub value: Option<Primitive<Decimal>>,
    /// `<` | `<=` | `>=` | `>` | `ad`, when the value is not exact.
    pub comparator: Option<Primitive<Code>>,
    pub unit: Option<Primitive<String>>,
    pub system: Option<Primitive<Uri>>,
    pub code: Option<Primitive<Code>>,
    pub unknown: JsonMap,
}

/// The specializations share Quantity's shape; their distinct names only
/// matter for choice-field suffixes.
pub type Age = Quantity;
pub type Count = Quantity;
pub type Distance = Quantity;
pub type Duration = Quantity;
pub type SimpleQuantity = Quantity;

impl Quantity {
    pub fn amount(value: impl Into<Decimal>, unit: impl Into<String>) -> Self {
        Self {
            value: Some(Primitive::new(value.into())),
            unit: Some(Primitive::new(unit.into())),
            ..Default::default()
        }
    }
}

impl FhirDecode for Quantity {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            value: obj.prim("value")?,
            comparator: obj.prim("comparator")?,
            unit: obj.prim("unit")?,
            system: obj.prim("system")?,
            code: obj.prim("code")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Quantity {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("value", self.value.as_ref())?;
        obj.prim("comparator", self.comparator.as_ref())?;
        obj.prim("unit", self.unit.as_ref())?;
        obj.prim("system", self.system.as_ref())?;
        obj.prim("code", self.code.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A low/high bounded set of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Range {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
    pub unknown: JsonMap,
}

impl FhirDecode for Range {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            low: obj.complex("low")?,
            high: obj.complex("high")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Range {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("low", self.low.as_ref())?;
        obj.complex("high", self.high.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A relationship between two quantities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ratio {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
    pub unknown: JsonMap,
}

impl FhirDecode for Ratio {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            numerator: obj.complex("numerator")?,
            denominator: obj.complex("denominator")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Ratio {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("numerator", self.numerator.as_ref())?;
        obj.complex("denominator", self.denominator.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
