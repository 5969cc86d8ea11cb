//! Availability of services and practitioners.

use crate::datatypes::Period;
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Time};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// Recurring availability with exceptions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Availability {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub available_time: Vec<AvailabilityAvailableTime>,
    pub not_available_time: Vec<AvailabilityNotAvailableTime>,
    pub unknown: JsonMap,
}

impl FhirDecode for Availability {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            available_time: obj.complex_vec("availableTime")?,
            not_available_time: obj.complex_vec("notAvailableTime")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Availability {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex_vec("availableTime", &self.available_time)?;
        obj.complex_vec("notAvailableTime", &self.not_available_time)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A recurring open window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailabilityAvailableTime {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// mon | tue | wed | thu | fri | sat | sun
    pub days_of_week: Vec<Primitive<Code>>,
    pub all_day: Option<Primitive<bool>>,
    pub available_start_time: Option<Primitive<Time>>,
    pub available_end_time: Option<Primitive<Time>>,
    pub unknown: JsonMap,
}

impl FhirDecode for AvailabilityAvailableTime {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            days_of_week: obj.prim_vec("daysOfWeek")?,
            all_day: obj.prim("allDay")?,
            available_start_time: obj.prim("availableStartTime")?,
            available_end_time: obj.prim("availableEndTime")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for AvailabilityAvailableTime {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim_vec("daysOfWeek", &self.days_of_week)?;
        obj.prim("allDay", self.all_day.as_ref())?;
        obj.prim("availableStartTime", self.available_start_time.as_ref())?;
        obj.prim("availableEndTime", self.available_end_time.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A described closure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailabilityNotAvailableTime {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub description: Option<Primitive<String>>,
    pub during: Option<Period>,
    pub unknown: JsonMap,
}

impl FhirDecode for AvailabilityNotAvailableTime {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            description: obj.prim("description")?,
            during: obj.complex("during")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for AvailabilityNotAvailableTime {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("description", self.description.as_ref())?;
        obj.complex("during", self.during.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
