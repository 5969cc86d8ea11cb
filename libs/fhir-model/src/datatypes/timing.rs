//! Event schedules.

use crate::datatypes::{CodeableConcept, Duration, Period, Range};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Decimal, PositiveInt, Time, UnsignedInt};
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// When an event should occur: explicit timestamps, a repeat rule, a named
/// schedule code, or any mix of the three.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timing {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub event: Vec<Primitive<DateTime>>,
    pub repeat: Option<TimingRepeat>,
    pub code: Option<CodeableConcept>,
    pub unknown: JsonMap,
}

impl FhirDecode for Timing {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            event: obj.prim_vec("event")?,
            repeat: obj.complex("repeat")?,
            code: obj.complex("code")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Timing {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_vec("event", &self.event)?;
        obj.complex("repeat", self.repeat.as_ref())?;
        obj.complex("code", self.code.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Outer bound of a repeat rule.
#[derive(Debug, Clone, PartialEq)]
pub enum TimingRepeatBounds {
    Duration(Duration),
    Range(Range),
    Period(Period),
}

const BOUNDS_SLOT: ChoiceSlot = ChoiceSlot {
    base: "bounds",
    variants: &["boundsDuration", "boundsRange", "boundsPeriod"],
};

impl TimingRepeatBounds {
    fn decode_opt(obj: &mut ObjectDecoder) -> DecodeResult<Option<Self>> {
        Ok(match obj.choice(&BOUNDS_SLOT)? {
            Some("boundsDuration") => Some(Self::Duration(obj.complex_req("boundsDuration")?)),
            Some("boundsRange") => Some(Self::Range(obj.complex_req("boundsRange")?)),
            Some("boundsPeriod") => Some(Self::Period(obj.complex_req("boundsPeriod")?)),
            _ => None,
        })
    }

    fn encode_into(&self, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::Duration(v) => obj.complex("boundsDuration", Some(v)),
            Self::Range(v) => obj.complex("boundsRange", Some(v)),
            Self::Period(v) => obj.complex("boundsPeriod", Some(v)),
        }
    }
}

/// The recurrence rule of a [`Timing`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimingRepeat {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub bounds: Option<TimingRepeatBounds>,
    pub count: Option<Primitive<PositiveInt>>,
    pub count_max: Option<Primitive<PositiveInt>>,
    pub duration: Option<Primitive<Decimal>>,
    pub duration_max: Option<Primitive<Decimal>>,
    /// s | min | h | d | wk | mo | a
    pub duration_unit: Option<Primitive<Code>>,
    pub frequency: Option<Primitive<PositiveInt>>,
    pub frequency_max: Option<Primitive<PositiveInt>>,
    pub period: Option<Primitive<Decimal>>,
    pub period_max: Option<Primitive<Decimal>>,
    pub period_unit: Option<Primitive<Code>>,
    pub day_of_week: Vec<Primitive<Code>>,
    pub time_of_day: Vec<Primitive<Time>>,
    pub when: Vec<Primitive<Code>>,
    pub offset: Option<Primitive<UnsignedInt>>,
    pub unknown: JsonMap,
}

impl FhirDecode for TimingRepeat {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            bounds: TimingRepeatBounds::decode_opt(&mut obj)?,
            count: obj.prim("count")?,
            count_max: obj.prim("countMax")?,
            duration: obj.prim("duration")?,
            duration_max: obj.prim("durationMax")?,
            duration_unit: obj.prim("durationUnit")?,
            frequency: obj.prim("frequency")?,
            frequency_max: obj.prim("frequencyMax")?,
            period: obj.prim("period")?,
            period_max: obj.prim("periodMax")?,
            period_unit: obj.prim("periodUnit")?,
            day_of_week: obj.prim_vec("dayOfWeek")?,
            time_of_day: obj.prim_vec("timeOfDay")?,
            when: obj.prim_vec("when")?,
            offset: obj.prim("offset")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for TimingRepeat {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        if let Some(bounds) = &self.bounds {
            bounds.encode_into(&mut obj)?;
        }
        obj.prim("count", self.count.as_ref())?;
        obj.prim("countMax", self.count_max.as_ref())?;
        obj.prim("duration", self.duration.as_ref())?;
        obj.prim("durationMax", self.duration_max.as_ref())?;
        obj.prim("durationUnit", self.duration_unit.as_ref())?;
        obj.prim("frequency", self.frequency.as_ref())?;
        obj.prim("frequencyMax", self.frequency_max.as_ref())?;
        obj.prim("period", self.period.as_ref())?;
        obj.prim("periodMax", self.period_max.as_ref())?;
        obj.prim("periodUnit", self.period_unit.as_ref())?;
        obj.prim_vec("dayOfWeek", &self.day_of_week)?;
        obj.prim_vec("timeOfDay", &self.time_of_day)?;
        obj.prim_vec("when", &self.when)?;
        obj.prim("offset", self.offset.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
