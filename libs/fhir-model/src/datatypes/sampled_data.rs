//! Sampled measurement series.

use crate::datatypes::Quantity;
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Code, Decimal, PositiveInt};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A series of measurements taken by a device.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampledData {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub origin: Option<Quantity>,
    pub interval: Option<Primitive<Decimal>>,
    pub interval_unit: Option<Primitive<Code>>,
    pub factor: Option<Primitive<Decimal>>,
    pub lower_limit: Option<Primitive<Decimal>>,
    pub upper_limit: Option<Primitive<Decimal>>,
    pub dimensions: Option<Primitive<PositiveInt>>,
    pub code_map: Option<Primitive<Canonical>>,
    pub offsets: Option<Primitive<String>>,
    /// Decimal values with spaces, or `E` | `U` | `L`.
    pub data: Option<Primitive<String>>,
    pub unknown: JsonMap,
}

impl FhirDecode for SampledData {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            origin: obj.complex("origin")?,
            interval: obj.prim("interval")?,
            interval_unit: obj.prim("intervalUnit")?,
            factor: obj.prim("factor")?,
            lower_limit: obj.prim("lowerLimit")?,
            upper_limit: obj.prim("upperLimit")?,
            dimensions: obj.prim("dimensions")?,
            code_map: obj.prim("codeMap")?,
            offsets: obj.prim("offsets")?,
            data: obj.prim("data")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for SampledData {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("origin", self.origin.as_ref())?;
        obj.prim("interval", self.interval.as_ref())?;
        obj.prim("intervalUnit", self.interval_unit.as_ref())?;
        obj.prim("factor", self.factor.as_ref())?;
        obj.prim("lowerLimit", self.lower_limit.as_ref())?;
        obj.prim("upperLimit", self.upper_limit.as_ref())?;
        obj.prim("dimensions", self.dimensions.as_ref())?;
        obj.prim("codeMap", self.code_map.as_ref())?;
        obj.prim("offsets", self.offsets.as_ref())?;
        obj.prim("data", self.data.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
