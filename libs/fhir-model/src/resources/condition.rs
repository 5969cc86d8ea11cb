//! The Condition resource.

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

/// onset[x] / abatement[x] share a variant set.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionOnset {
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

const ABATEMENT_SLOT: ChoiceSlot = ChoiceSlot {
    base: "abatement",
    variants: &[
        "abatementDateTime",
        "abatementAge",
        "abatementPeriod",
        "abatementRange",
        "abatementString",
    ],
};

impl ConditionOnset {
    fn decode_opt(obj: &mut ObjectDecoder, slot: &ChoiceSlot) -> DecodeResult<Option<Self>> {
        let Some(name) = obj.choice(slot)? else {
            return Ok(None);
        };
        let suffix = &name[slot.base.len()..];
        Ok(Some(match suffix {
            "DateTime" => Self::DateTime(obj.prim_req(name)?),
            "Age" => Self::Age(obj.complex_req(name)?),
            "Period" => Self::Period(obj.complex_req(name)?),
            "Range" => Self::Range(obj.complex_req(name)?),
            "String" => Self::String(obj.prim_req(name)?),
            other => unreachable!("`{other}` is not an onset variant"),
        }))
    }

    fn encode_into(&self, base: &str, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::DateTime(v) => obj.prim_req(&format!("{base}DateTime"), v),
            Self::Age(v) => obj.complex(&format!("{base}Age"), Some(v)),
            Self::Period(v) => obj.complex(&format!("{base}Period"), Some(v)),
            Self::Range(v) => obj.complex(&format!("{base}Range"), Some(v)),
            Self::String(v) => obj.prim_req(&format!("{base}String"), v),
        }
    }
}

/// A clinical condition, problem or diagnosis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Condition {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub clinical_status: CodeableConcept,
    pub verification_status: Option<CodeableConcept>,
    pub category: Vec<CodeableConcept>,
    pub severity: Option<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub body_site: Vec<CodeableConcept>,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    pub onset: Option<ConditionOnset>,
    pub abatement: Option<ConditionOnset>,
    pub recorded_date: Option<Primitive<DateTime>>,
    pub participant: Vec<ConditionParticipant>,
    pub stage: Vec<ConditionStage>,
    pub evidence: Vec<CodeableReference>,
    pub note: Vec<Annotation>,
    pub unknown: JsonMap,
}

impl Condition {
    pub const TYPE: &'static str = "Condition";
}

impl FhirDecode for Condition {
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
            clinical_status: obj.complex_req("clinicalStatus")?,
            verification_status: obj.complex("verificationStatus")?,
            category: obj.complex_vec("category")?,
            severity: obj.complex("severity")?,
            code: obj.complex("code")?,
            body_site: obj.complex_vec("bodySite")?,
            subject: obj.complex_req("subject")?,
            encounter: obj.complex("encounter")?,
            onset: ConditionOnset::decode_opt(&mut obj, &ONSET_SLOT)?,
            abatement: ConditionOnset::decode_opt(&mut obj, &ABATEMENT_SLOT)?,
            recorded_date: obj.prim("recordedDate")?,
            participant: obj.complex_vec("participant")?,
            stage: obj.complex_vec("stage")?,
            evidence: obj.complex_vec("evidence")?,
            note: obj.complex_vec("note")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Condition {
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
        obj.complex("clinicalStatus", Some(&self.clinical_status))?;
        obj.complex("verificationStatus", self.verification_status.as_ref())?;
        obj.complex_vec("category", &self.category)?;
        obj.complex("severity", self.severity.as_ref())?;
        obj.complex("code", self.code.as_ref())?;
        obj.complex_vec("bodySite", &self.body_site)?;
        obj.complex("subject", Some(&self.subject))?;
        obj.complex("encounter", self.encounter.as_ref())?;
        if let Some(onset) = &self.onset {
            onset.encode_into("onset", &mut obj)?;
        }
        if let Some(abatement) = &self.abatement {
            abatement.encode_into("abatement", &mut obj)?;
        }
        obj.prim("recordedDate", self.recorded_date.as_ref())?;
        obj.complex_vec("participant", &self.participant)?;
        obj.complex_vec("stage", &self.stage)?;
        obj.complex_vec("evidence", &self.evidence)?;
        obj.complex_vec("note", &self.note)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Who or what took part in establishing the condition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionParticipant {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    pub unknown: JsonMap,
}

impl FhirDecode for ConditionParticipant {
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

impl FhirEncode for ConditionParticipant {
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

/// Clinical stage or grade, with formal assessments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionStage {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub summary: Option<CodeableConcept>,
    pub assessment: Vec<Reference>,
    pub r#type: Option<CodeableConcept>,
    pub unknown: JsonMap,
}

impl FhirDecode for ConditionStage {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            summary: obj.complex("summary")?,
            assessment: obj.complex_vec("assessment")?,
            r#type: obj.complex("type")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ConditionStage {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("summary", self.summary.as_ref())?;
        obj.complex_vec("assessment", &self.assessment)?;
        obj.complex("type", self.r#type.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
