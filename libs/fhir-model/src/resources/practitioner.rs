//! Practitioner and PractitionerRole resources.

use crate::datatypes::{
    Address, Attachment, Availability, CodeableConcept, ContactPoint, ExtendedContactDetail,
    HumanName, Identifier, Meta, Narrative, Period, Reference,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Date, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// deceased[x]
#[derive(Debug, Clone, PartialEq)]
pub enum PractitionerDeceased {
    Boolean(Primitive<bool>),
    DateTime(Primitive<DateTime>),
}

const DECEASED_SLOT: ChoiceSlot = ChoiceSlot {
    base: "deceased",
    variants: &["deceasedBoolean", "deceasedDateTime"],
};

/// A person with a formal responsibility in the provisioning of healthcare.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Practitioner {
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
    pub name: Vec<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub gender: Option<Primitive<Code>>,
    pub birth_date: Option<Primitive<Date>>,
    pub deceased: Option<PractitionerDeceased>,
    pub address: Vec<Address>,
    pub photo: Vec<Attachment>,
    pub qualification: Vec<PractitionerQualification>,
    pub communication: Vec<PractitionerCommunication>,
    pub unknown: JsonMap,
}

impl Practitioner {
    pub const TYPE: &'static str = "Practitioner";
}

impl FhirDecode for Practitioner {
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
            name: obj.complex_vec("name")?,
            telecom: obj.complex_vec("telecom")?,
            gender: obj.prim("gender")?,
            birth_date: obj.prim("birthDate")?,
            deceased: match obj.choice(&DECEASED_SLOT)? {
                Some("deceasedBoolean") => Some(PractitionerDeceased::Boolean(
                    obj.prim_req("deceasedBoolean")?,
                )),
                Some("deceasedDateTime") => Some(PractitionerDeceased::DateTime(
                    obj.prim_req("deceasedDateTime")?,
                )),
                _ => None,
            },
            address: obj.complex_vec("address")?,
            photo: obj.complex_vec("photo")?,
            qualification: obj.complex_vec("qualification")?,
            communication: obj.complex_vec("communication")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Practitioner {
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
        obj.complex_vec("name", &self.name)?;
        obj.complex_vec("telecom", &self.telecom)?;
        obj.prim("gender", self.gender.as_ref())?;
        obj.prim("birthDate", self.birth_date.as_ref())?;
        match &self.deceased {
            Some(PractitionerDeceased::Boolean(v)) => obj.prim_req("deceasedBoolean", v)?,
            Some(PractitionerDeceased::DateTime(v)) => obj.prim_req("deceasedDateTime", v)?,
            None => {}
        }
        obj.complex_vec("address", &self.address)?;
        obj.complex_vec("photo", &self.photo)?;
        obj.complex_vec("qualification", &self.qualification)?;
        obj.complex_vec("communication", &self.communication)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A certification or training credential.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PractitionerQualification {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub code: CodeableConcept,
    pub period: Option<Period>,
    pub issuer: Option<Reference>,
    pub unknown: JsonMap,
}

impl FhirDecode for PractitionerQualification {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            identifier: obj.complex_vec("identifier")?,
            code: obj.complex_req("code")?,
            period: obj.complex("period")?,
            issuer: obj.complex("issuer")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for PractitionerQualification {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex_vec("identifier", &self.identifier)?;
        obj.complex("code", Some(&self.code))?;
        obj.complex("period", self.period.as_ref())?;
        obj.complex("issuer", self.issuer.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A language the practitioner can use in patient communication.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PractitionerCommunication {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub language: CodeableConcept,
    pub preferred: Option<Primitive<bool>>,
    pub unknown: JsonMap,
}

impl FhirDecode for PractitionerCommunication {
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

impl FhirEncode for PractitionerCommunication {
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

/// A set of services a practitioner provides for an organization, where
/// and when.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PractitionerRole {
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
    pub period: Option<Period>,
    pub practitioner: Option<Reference>,
    pub organization: Option<Reference>,
    pub code: Vec<CodeableConcept>,
    pub specialty: Vec<CodeableConcept>,
    pub location: Vec<Reference>,
    pub healthcare_service: Vec<Reference>,
    pub contact: Vec<ExtendedContactDetail>,
    pub characteristic: Vec<CodeableConcept>,
    pub communication: Vec<CodeableConcept>,
    pub availability: Vec<Availability>,
    pub endpoint: Vec<Reference>,
    pub unknown: JsonMap,
}

impl PractitionerRole {
    pub const TYPE: &'static str = "PractitionerRole";
}

impl FhirDecode for PractitionerRole {
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
            period: obj.complex("period")?,
            practitioner: obj.complex("practitioner")?,
            organization: obj.complex("organization")?,
            code: obj.complex_vec("code")?,
            specialty: obj.complex_vec("specialty")?,
            location: obj.complex_vec("location")?,
            healthcare_service: obj.complex_vec("healthcareService")?,
            contact: obj.complex_vec("contact")?,
            characteristic: obj.complex_vec("characteristic")?,
            communication: obj.complex_vec("communication")?,
            availability: obj.complex_vec("availability")?,
            endpoint: obj.complex_vec("endpoint")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for PractitionerRole {
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
        obj.complex("period", self.period.as_ref())?;
        obj.complex("practitioner", self.practitioner.as_ref())?;
        obj.complex("organization", self.organization.as_ref())?;
        obj.complex_vec("code", &self.code)?;
        obj.complex_vec("specialty", &self.specialty)?;
        obj.complex_vec("location", &self.location)?;
        obj.complex_vec("healthcareService", &self.healthcare_service)?;
        obj.complex_vec("contact", &self.contact)?;
        obj.complex_vec("characteristic", &self.characteristic)?;
        obj.complex_vec("communication", &self.communication)?;
        obj.complex_vec("availability", &self.availability)?;
        obj.complex_vec("endpoint", &self.endpoint)?;
        Ok(obj.finish(&self.unknown))
    }
}
