//! Machine-processable data requirements.

use crate::datatypes::{CodeableConcept, Coding, Duration, Period, Reference};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Code, DateTime, PositiveInt};
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// subject[x] of a data requirement.
#[derive(Debug, Clone, PartialEq)]
pub enum DataRequirementSubject {
    CodeableConcept(CodeableConcept),
    Reference(Reference),
}

const SUBJECT_SLOT: ChoiceSlot = ChoiceSlot {
    base: "subject",
    variants: &["subjectCodeableConcept", "subjectReference"],
};

/// A described set of data the consumer needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataRequirement {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub r#type: Primitive<Code>,
    pub profile: Vec<Primitive<Canonical>>,
    pub subject: Option<DataRequirementSubject>,
    pub must_support: Vec<Primitive<String>>,
    pub code_filter: Vec<DataRequirementCodeFilter>,
    pub date_filter: Vec<DataRequirementDateFilter>,
    pub value_filter: Vec<DataRequirementValueFilter>,
    pub limit: Option<Primitive<PositiveInt>>,
    pub sort: Vec<DataRequirementSort>,
    pub unknown: JsonMap,
}

impl FhirDecode for DataRequirement {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            r#type: obj.prim_req("type")?,
            profile: obj.prim_vec("profile")?,
            subject: match obj.choice(&SUBJECT_SLOT)? {
                Some("subjectCodeableConcept") => Some(DataRequirementSubject::CodeableConcept(
                    obj.complex_req("subjectCodeableConcept")?,
                )),
                Some("subjectReference") => Some(DataRequirementSubject::Reference(
                    obj.complex_req("subjectReference")?,
                )),
                _ => None,
            },
            must_support: obj.prim_vec("mustSupport")?,
            code_filter: obj.complex_vec("codeFilter")?,
            date_filter: obj.complex_vec("dateFilter")?,
            value_filter: obj.complex_vec("valueFilter")?,
            limit: obj.prim("limit")?,
            sort: obj.complex_vec("sort")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DataRequirement {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim_req("type", &self.r#type)?;
        obj.prim_vec("profile", &self.profile)?;
        match &self.subject {
            Some(DataRequirementSubject::CodeableConcept(v)) => {
                obj.complex("subjectCodeableConcept", Some(v))?
            }
            Some(DataRequirementSubject::Reference(v)) => {
                obj.complex("subjectReference", Some(v))?
            }
            None => {}
        }
        obj.prim_vec("mustSupport", &self.must_support)?;
        obj.complex_vec("codeFilter", &self.code_filter)?;
        obj.complex_vec("dateFilter", &self.date_filter)?;
        obj.complex_vec("valueFilter", &self.value_filter)?;
        obj.prim("limit", self.limit.as_ref())?;
        obj.complex_vec("sort", &self.sort)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Code-valued filter on one element of the requested data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataRequirementCodeFilter {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub path: Option<Primitive<String>>,
    pub search_param: Option<Primitive<String>>,
    pub value_set: Option<Primitive<Canonical>>,
    pub code: Vec<Coding>,
    pub unknown: JsonMap,
}

impl FhirDecode for DataRequirementCodeFilter {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            path: obj.prim("path")?,
            search_param: obj.prim("searchParam")?,
            value_set: obj.prim("valueSet")?,
            code: obj.complex_vec("code")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DataRequirementCodeFilter {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("path", self.path.as_ref())?;
        obj.prim("searchParam", self.search_param.as_ref())?;
        obj.prim("valueSet", self.value_set.as_ref())?;
        obj.complex_vec("code", &self.code)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// value[x] of a date filter.
#[derive(Debug, Clone, PartialEq)]
pub enum DateFilterValue {
    DateTime(Primitive<DateTime>),
    Period(Period),
    Duration(Duration),
}

const DATE_FILTER_VALUE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "value",
    variants: &["valueDateTime", "valuePeriod", "valueDuration"],
};

impl DateFilterValue {
    fn decode_opt(obj: &mut ObjectDecoder) -> DecodeResult<Option<Self>> {
        Ok(match obj.choice(&DATE_FILTER_VALUE_SLOT)? {
            Some("valueDateTime") => Some(Self::DateTime(obj.prim_req("valueDateTime")?)),
            Some("valuePeriod") => Some(Self::Period(obj.complex_req("valuePeriod")?)),
            Some("valueDuration") => Some(Self::Duration(obj.complex_req("valueDuration")?)),
            _ => None,
        })
    }

    fn encode_into(&self, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::DateTime(v) => obj.prim_req("valueDateTime", v),
            Self::Period(v) => obj.complex("valuePeriod", Some(v)),
            Self::Duration(v) => obj.complex("valueDuration", Some(v)),
        }
    }
}

/// Date-valued filter on one element of the requested data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataRequirementDateFilter {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub path: Option<Primitive<String>>,
    pub search_param: Option<Primitive<String>>,
    pub value: Option<DateFilterValue>,
    pub unknown: JsonMap,
}

impl FhirDecode for DataRequirementDateFilter {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            path: obj.prim("path")?,
            search_param: obj.prim("searchParam")?,
            value: DateFilterValue::decode_opt(&mut obj)?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DataRequirementDateFilter {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("path", self.path.as_ref())?;
        obj.prim("searchParam", self.search_param.as_ref())?;
        if let Some(value) = &self.value {
            value.encode_into(&mut obj)?;
        }
        Ok(obj.finish(&self.unknown))
    }
}

/// Comparator-driven filter on any comparable element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataRequirementValueFilter {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub path: Option<Primitive<String>>,
    pub search_param: Option<Primitive<String>>,
    /// eq | gt | lt | ge | le | sa | eb
    pub comparator: Option<Primitive<Code>>,
    pub value: Option<DateFilterValue>,
    pub unknown: JsonMap,
}

impl FhirDecode for DataRequirementValueFilter {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            path: obj.prim("path")?,
            search_param: obj.prim("searchParam")?,
            comparator: obj.prim("comparator")?,
            value: DateFilterValue::decode_opt(&mut obj)?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DataRequirementValueFilter {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("path", self.path.as_ref())?;
        obj.prim("searchParam", self.search_param.as_ref())?;
        obj.prim("comparator", self.comparator.as_ref())?;
        if let Some(value) = &self.value {
            value.encode_into(&mut obj)?;
        }
        Ok(obj.finish(&self.unknown))
    }
}

/// Requested sort order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataRequirementSort {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub path: Primitive<String>,
    /// ascending | descending
    pub direction: Primitive<Code>,
    pub unknown: JsonMap,
}

impl FhirDecode for DataRequirementSort {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            path: obj.prim_req("path")?,
            direction: obj.prim_req("direction")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DataRequirementSort {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim_req("path", &self.path)?;
        obj.prim_req("direction", &self.direction)?;
        Ok(obj.finish(&self.unknown))
    }
}
