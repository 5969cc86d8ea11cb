//! The AllergyIntolerance resource.

use crate::datatypes::{
    Age, Annotation, CodeableConcept, CodeableReference, Identifier, Meta, Narrative, Period,
    Range, Reference,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// onset[x]
#[derive(Debug, Clone, PartialEq)]
pub enum AllergyIntoleranceOnset {
    DateTime(Primitive<DateTime>),
    Age(Age),
    Period(Period),
    Range(Range),
    String(Primitive<String>),
}

const ONSET_SLOT: ChoiceSlot = ChoiceSlot {
    base: "onset",
    variants: &[
        "onsetDateTime",
        "onsetAge",
        "onsetPeriod",
        "onsetRange",
        "onsetString",
    ],
};

impl AllergyIntoleranceOnset {
    fn decode_opt(obj: &mut ObjectDecoder) -> DecodeResult<Option<Self>> {
        Ok(match obj.choice(&ONSET_SLOT)? {
            Some("onsetDateTime") => Some(Self::DateTime(obj.prim_req("onsetDateTime")?)),
            Some("onsetAge") => Some(Self::Age(obj.complex_req("onsetAge")?)),
            Some("onsetPeriod") => Some(Self::Period(obj.complex_req("onsetPeriod")?)),
            Some("onsetRange") => Some(Self::Range(obj.complex_req("onsetRange")?)),
            Some("onsetString") => Some(Self::String(obj.prim_req("onsetString")?)),
            _ => None,
        })
    }

    fn encode_into(&self, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::DateTime(v) => obj.prim_req("onsetDateTime", v),
            Self::Age(v) => obj.complex("onsetAge", Some(v)),
            Self::Period(v) => obj.complex("onsetPeriod", Some(v)),
            Self::Range(v) => obj.complex("onsetRange", Some(v)),
            Self::String(v) => obj.prim_req("onsetString", v),
        }
    }
}

/// Risk of harmful or undesirable reaction on exposure to a substance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AllergyIntolerance {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub clinical_status: Option<CodeableConcept>,
    pub verification_status: Option<CodeableConcept>,
    pub r#type: Option<CodeableConcept>,
    /// food | medication | environment | biologic
    pub category: Vec<Primitive<Code>>,
    /// low | high | unable-to-assess
    pub criticality: Option<Primitive<Code>>,
    pub code: Option<CodeableConcept>,
    pub patient: Reference,
    pub encounter: Option<Reference>,
    pub onset: Option<AllergyIntoleranceOnset>,
    pub recorded_date: Option<Primitive<DateTime>>,
    pub participant: Vec<AllergyIntoleranceParticipant>,
    pub last_occurrence: Option<Primitive<DateTime>>,
    pub note: Vec<Annotation>,
    pub reaction: Vec<AllergyIntoleranceReaction>,
    pub unknown: JsonMap,
}

impl AllergyIntolerance {
    pub const TYPE: &'static str = "AllergyIntolerance";
}

impl FhirDecode for AllergyIntolerance {
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
            clinical_status: obj.complex("clinicalStatus")?,
            verification_status: obj.complex("verificationStatus")?,
            r#type: obj.complex("type")?,
            category: obj.prim_vec("category")?,
            criticality: obj.prim("criticality")?,
            code: obj.complex("code")?,
            patient: obj.complex_req("patient")?,
            encounter: obj.complex("encounter")?,
            onset: AllergyIntoleranceOnset::decode_opt(&mut obj)?,
            recorded_date: obj.prim("recordedDate")?,
            participant: obj.complex_vec("participant")?,
            last_occurrence: obj.prim("lastOccurrence")?,
            note: obj.complex_vec("note")?,
            reaction: obj.complex_vec("reaction")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for AllergyIntolerance {
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
        obj.complex("clinicalStatus", self.clinical_status.as_ref())?;
        obj.complex("verificationStatus", self.verification_status.as_ref())?;
        obj.complex("type", self.r#type.as_ref())?;
        obj.prim_vec("category", &self.category)?;
        obj.prim("criticality", self.criticality.as_ref())?;
        obj.complex("code", self.code.as_ref())?;
        obj.complex("patient", Some(&self.patient))?;
        obj.complex("encounter", self.encounter.as_ref())?;
        if let Some(onset) = &self.onset {
            onset.encode_into(&mut obj)?;
        }
        obj.prim("recordedDate", self.recorded_date.as_ref())?;
        obj.complex_vec("participant", &self.participant)?;
        obj.prim("lastOccurrence", self.last_occurrence.as_ref())?;
        obj.complex_vec("note", &self.note)?;
        obj.complex_vec("reaction", &self.reaction)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Who recorded, asserted or contributed to the allergy statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AllergyIntoleranceParticipant {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    pub unknown: JsonMap,
}

impl FhirDecode for AllergyIntoleranceParticipant {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            function: obj.complex("function")?,
            actor: obj.complex_req("actor")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for AllergyIntoleranceParticipant {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("function", self.function.as_ref())?;
        obj.complex("actor", Some(&self.actor))?;
        Ok(obj.finish(&self.unknown))
    }
}

/// An adverse reaction event linked to exposure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AllergyIntoleranceReaction {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub substance: Option<CodeableConcept>,
    pub manifestation: Vec<CodeableReference>,
    pub description: Option<Primitive<String>>,
    pub onset: Option<Primitive<DateTime>>,
    /// mild | moderate | severe
    pub severity: Option<Primitive<Code>>,
    pub exposure_route: Option<CodeableConcept>,
    pub note: Vec<Annotation>,
    pub unknown: JsonMap,
}

impl FhirDecode for AllergyIntoleranceReaction {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            substance: obj.complex("substance")?,
            manifestation: obj.complex_vec1("manifestation")?,
            description: obj.prim("description")?,
            onset: obj.prim("onset")?,
            severity: obj.prim("severity")?,
            exposure_route: obj.complex("exposureRoute")?,
            note: obj.complex_vec("note")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for AllergyIntoleranceReaction {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("substance", self.substance.as_ref())?;
        obj.complex_vec("manifestation", &self.manifestation)?;
        obj.prim("description", self.description.as_ref())?;
        obj.prim("onset", self.onset.as_ref())?;
        obj.prim("severity", self.severity.as_ref())?;
        obj.complex("exposureRoute", self.exposure_route.as_ref())?;
        obj.complex_vec("note", &self.note)?;
        Ok(obj.finish(&self.unknown))
    }
}
