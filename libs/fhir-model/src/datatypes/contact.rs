//! Contact channels and contact parties.

use crate::datatypes::{Address, CodeableConcept, HumanName, Period, Reference};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, PositiveInt};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A way to reach a party: phone, email and kin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactPoint {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// phone | fax | email | pager | url | sms | other
    pub system: Option<Primitive<Code>>,
    pub value: Option<Primitive<String>>,
    /// home | work | temp | old | mobile
    pub r#use: Option<Primitive<Code>>,
    pub rank: Option<Primitive<PositiveInt>>,
    pub period: Option<Period>,
    pub unknown: JsonMap,
}

impl FhirDecode for ContactPoint {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            system: obj.prim("system")?,
            value: obj.prim("value")?,
            r#use: obj.prim("use")?,
            rank: obj.prim("rank")?,
            period: obj.complex("period")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ContactPoint {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("system", self.system.as_ref())?;
        obj.prim("value", self.value.as_ref())?;
        obj.prim("use", self.r#use.as_ref())?;
        obj.prim("rank", self.rank.as_ref())?;
        obj.complex("period", self.period.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A named party that can be contacted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactDetail {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub name: Option<Primitive<String>>,
    pub telecom: Vec<ContactPoint>,
    pub unknown: JsonMap,
}

impl FhirDecode for ContactDetail {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            name: obj.prim("name")?,
            telecom: obj.complex_vec("telecom")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ContactDetail {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("name", self.name.as_ref())?;
        obj.complex_vec("telecom", &self.telecom)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Contact information usable over a period, with an organizational scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtendedContactDetail {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub purpose: Option<CodeableConcept>,
    pub name: Vec<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub address: Option<Address>,
    pub organization: Option<Reference>,
    pub period: Option<Period>,
    pub unknown: JsonMap,
}

impl FhirDecode for ExtendedContactDetail {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            purpose: obj.complex("purpose")?,
            name: obj.complex_vec("name")?,
            telecom: obj.complex_vec("telecom")?,
            address: obj.complex("address")?,
            organization: obj.complex("organization")?,
            period: obj.complex("period")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ExtendedContactDetail {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("purpose", self.purpose.as_ref())?;
        obj.complex_vec("name", &self.name)?;
        obj.complex_vec("telecom", &self.telecom)?;
        obj.complex("address", self.address.as_ref())?;
        obj.complex("organization", self.organization.as_ref())?;
        obj.complex("period", self.period.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
