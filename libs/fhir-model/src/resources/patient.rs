//! The Patient resource.

use crate::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, HumanName, Identifier, Meta, Narrative,
    Period, Reference,
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
pub enum PatientDeceased {
    Boolean(Primitive<bool>),
    DateTime(Primitive<DateTime>),
}

const DECEASED_SLOT: ChoiceSlot = ChoiceSlot {
    base: "deceased",
    variants: &["deceasedBoolean", "deceasedDateTime"],
};

/// multipleBirth[x]
#[derive(Debug, Clone, PartialEq)]
pub enum PatientMultipleBirth {
    Boolean(Primitive<bool>),
    Integer(Primitive<i32>),
}

const MULTIPLE_BIRTH_SLOT: ChoiceSlot = ChoiceSlot {
    base: "multipleBirth",
    variants: &["multipleBirthBoolean", "multipleBirthInteger"],
};

/// Demographics and administrative information about a person receiving
/// care.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Patient {
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
    /// male | female | other | unknown
    pub gender: Option<Primitive<Code>>,
    pub birth_date: Option<Primitive<Date>>,
    pub deceased: Option<PatientDeceased>,
    pub address: Vec<Address>,
    pub marital_status: Option<CodeableConcept>,
    pub multiple_birth: Option<PatientMultipleBirth>,
    pub photo: Vec<Attachment>,
    pub contact: Vec<PatientContact>,
    pub communication: Vec<PatientCommunication>,
    pub general_practitioner: Vec<Reference>,
    pub managing_organization: Option<Reference>,
    pub link: Vec<PatientLink>,
    pub unknown: JsonMap,
}

impl Patient {
    pub const TYPE: &'static str = "Patient";
}

impl FhirDecode for Patient {
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
                Some("deceasedBoolean") => {
                    Some(PatientDeceased::Boolean(obj.prim_req("deceasedBoolean")?))
                }
                Some("deceasedDateTime") => {
                    Some(PatientDeceased::DateTime(obj.prim_req("deceasedDateTime")?))
                }
                _ => None,
            },
            address: obj.complex_vec("address")?,
            marital_status: obj.complex("maritalStatus")?,
            multiple_birth: match obj.choice(&MULTIPLE_BIRTH_SLOT)? {
                Some("multipleBirthBoolean") => Some(PatientMultipleBirth::Boolean(
                    obj.prim_req("multipleBirthBoolean")?,
                )),
                Some("multipleBirthInteger") => Some(PatientMultipleBirth::Integer(
                    obj.prim_req("multipleBirthInteger")?,
                )),
                _ => None,
            },
            photo: obj.complex_vec("photo")?,
            contact: obj.complex_vec("contact")?,
            communication: obj.complex_vec("communication")?,
            general_practitioner: obj.complex_vec("generalPractitioner")?,
            managing_organization: obj.complex("managingOrganization")?,
            link: obj.complex_vec("link")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Patient {
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
            Some(PatientDeceased::Boolean(v)) => obj.prim_req("deceasedBoolean", v)?,
            Some(PatientDeceased::DateTime(v)) => obj.prim_req("deceasedDateTime", v)?,
            None => {}
        }
        obj.complex_vec("address", &self.address)?;
        obj.complex("maritalStatus", self.marital_status.as_ref())?;
        match &self.multiple_birth {
            Some(PatientMultipleBirth::Boolean(v)) => obj.prim_req("multipleBirthBoolean", v)?,
            Some(PatientMultipleBirth::Integer(v)) => obj.prim_req("multipleBirthInteger", v)?,
            None => {}
        }
        obj.complex_vec("photo", &self.photo)?;
        obj.complex_vec("contact", &self.contact)?;
        obj.complex_vec("communication", &self.communication)?;
        obj.complex_vec("generalPractitioner", &self.general_practitioner)?;
        obj.complex("managingOrganization", self.managing_organization.as_ref())?;
        obj.complex_vec("link", &self.link)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A contact party for the patient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatientContact {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub relationship: Vec<CodeableConcept>,
    pub name: Option<HumanName>,
    pub telecom: Vec<ContactPoint>,
    pub address: Option<Address>,
    pub gender: Option<Primitive<Code>>,
    pub organization: Option<Reference>,
    pub period: Option<Period>,
    pub unknown: JsonMap,
}

impl FhirDecode for PatientContact {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            relationship: obj.complex_vec("relationship")?,
            name: obj.complex("name")?,
            telecom: obj.complex_vec("telecom")?,
            address: obj.complex("address")?,
            gender: obj.prim("gender")?,
            organization: obj.complex("organization")?,
            period: obj.complex("period")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for PatientContact {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex_vec("relationship", &self.relationship)?;
        obj.complex("name", self.name.as_ref())?;
        obj.complex_vec("telecom", &self.telecom)?;
        obj.complex("address", self.address.as_ref())?;
        obj.prim("gender", self.gender.as_ref())?;
        obj.complex("organization", self.organization.as_ref())?;
        obj.complex("period", self.period.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A language the patient can use in communication about their health.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatientCommunication {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub language: CodeableConcept,
    pub preferred: Option<Primitive<bool>>,
    pub unknown: JsonMap,
}

impl FhirDecode for PatientCommunication {
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

impl FhirEncode for PatientCommunication {
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

/// A link to another Patient or RelatedPerson concerning the same person.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatientLink {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub other: Reference,
    /// replaced-by | replaces | refer | seealso
    pub r#type: Primitive<Code>,
    pub unknown: JsonMap,
}

impl FhirDecode for PatientLink {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            other: obj.complex_req("other")?,
            r#type: obj.prim_req("type")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for PatientLink {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("other", Some(&self.other))?;
        obj.prim_req("type", &self.r#type)?;
        Ok(obj.finish(&self.unknown))
    }
}
