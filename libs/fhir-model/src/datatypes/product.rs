//! Regulated-product metadata: shelf life and marketing status.

use crate::datatypes::{CodeableConcept, Duration, Period};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::DateTime;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// period[x] of a shelf life statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ShelfLifePeriod {
    Duration(Duration),
    String(Primitive<String>),
}

const PERIOD_SLOT: ChoiceSlot = ChoiceSlot {
    base: "period",
    variants: &["periodDuration", "periodString"],
};

/// How long an item keeps, under what storage regime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductShelfLife {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub r#type: Option<CodeableConcept>,
    pub period: Option<ShelfLifePeriod>,
    pub special_precautions_for_storage: Vec<CodeableConcept>,
    pub unknown: JsonMap,
}

impl FhirDecode for ProductShelfLife {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            r#type: obj.complex("type")?,
            period: match obj.choice(&PERIOD_SLOT)? {
                Some("periodDuration") => {
                    Some(ShelfLifePeriod::Duration(obj.complex_req("periodDuration")?))
                }
                Some("periodString") => {
                    Some(ShelfLifePeriod::String(obj.prim_req("periodString")?))
                }
                _ => None,
            },
            special_precautions_for_storage: obj.complex_vec("specialPrecautionsForStorage")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ProductShelfLife {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("type", self.r#type.as_ref())?;
        match &self.period {
            Some(ShelfLifePeriod::Duration(v)) => obj.complex("periodDuration", Some(v))?,
            Some(ShelfLifePeriod::String(v)) => obj.prim_req("periodString", v)?,
            None => {}
        }
        obj.complex_vec(
            "specialPrecautionsForStorage",
            &self.special_precautions_for_storage,
        )?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Where and under what status a product is marketed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketingStatus {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub country: Option<CodeableConcept>,
    pub jurisdiction: Option<CodeableConcept>,
    pub status: Option<CodeableConcept>,
    pub date_range: Option<Period>,
    pub restore_date: Option<Primitive<DateTime>>,
    pub unknown: JsonMap,
}

impl FhirDecode for MarketingStatus {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            country: obj.complex("country")?,
            jurisdiction: obj.complex("jurisdiction")?,
            status: Some(obj.complex_req("status")?),
            date_range: obj.complex("dateRange")?,
            restore_date: obj.prim("restoreDate")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for MarketingStatus {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("country", self.country.as_ref())?;
        obj.complex("jurisdiction", self.jurisdiction.as_ref())?;
        obj.complex("status", self.status.as_ref())?;
        obj.complex("dateRange", self.date_range.as_ref())?;
        obj.prim("restoreDate", self.restore_date.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
