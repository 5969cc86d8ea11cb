//! The RelatedPerson resource.

use crate::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, HumanName, Identifier, Meta, Narrative,
    Period, Reference,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Date, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A person with a personal or professional relationship to a patient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelatedPerson {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub active: Option<Primitive<bool>>,
    pub patient: Reference,
    pub relationship: Vec<CodeableConcept>,
    pub name: Vec<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub gender: Option<Primitive<Code>>,
    pub birth_date: Option<Primitive<Date>>,
    pub address: Vec<Address>,
    pub photo: Vec<Attachment>,
    pub period: Option<Period>,
    pub communication: Vec<RelatedPersonCommunication>,
    pub unknown: JsonMap,
}

impl RelatedPerson {
    pub const TYPE: &'static str = "RelatedPerson";
}

impl FhirDecode for RelatedPerson {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        obj.expect_resource_type(Self::TYPE)?;
        let mut out = Self {
            id: obj.prim("id")?,
            meta: obj.complex("meta")?,
            implicit_rules: obj.prim("implicitRules")?,
            language: obj.prim("language")?,
            text: obj.complex("text")?,
            contained: obj.contained()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            identifier: obj.complex_vec("identifier")?,
            active: obj.prim("active")?,
            patient: obj.complex_req("patient")?,
            relationship: obj.complex_vec("relationship")?,
            name: obj.complex_vec("name")?,
            telecom: obj.complex_vec("telecom")?,
            gender: obj.prim("gender")?,
            birth_date: obj.prim("birthDate")?,
            address: obj.complex_vec("address")?,
            photo: obj.complex_vec("photo")?,
            period: obj.complex("period")?,
            communication: obj.complex_vec("communication")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for RelatedPerson {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.resource_type(Self::TYPE);
        obj.prim("id", self.id.as_ref())?;
        obj.complex("meta", self.meta.as_ref())?;
        obj.prim("implicitRules", self.implicit_rules.as_ref())?;
        obj.prim("language", self.language.as_ref())?;
        obj.complex("text", self.text.as_ref())?;
        obj.complex_vec("contained", &self.contained)?;
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex_vec("identifier", &self.identifier)?;
        obj.prim("active", self.active.as_ref())?;
        obj.complex("patient", Some(&self.patient))?;
        obj.complex_vec("relationship", &self.relationship)?;
        obj.complex_vec("name", &self.name)?;
        obj.complex_vec("telecom", &self.telecom)?;
        obj.prim("gender", self.gender.as_ref())?;
        obj.prim("birthDate", self.birth_date.as_ref())?;
        obj.complex_vec("address", &self.address)?;
        obj.complex_vec("photo", &self.photo)?;
        obj.complex("period", self.period.as_ref())?;
        obj.complex_vec("communication", &self.communication)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A language usable for communication with the related person.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelatedPersonCommunication {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub language: CodeableConcept,
    pub preferred: Option<Primitive<bool>>,
    pub unknown: JsonMap,
}

impl FhirDecode for RelatedPersonCommunication {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            language: obj.complex_req("language")?,
            preferred: obj.prim("preferred")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for RelatedPersonCommunication {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("language", Some(&self.language))?;
        obj.prim("preferred", self.preferred.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
