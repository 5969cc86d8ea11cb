//! The Procedure resource.

use crate::datatypes::{
    Age, Annotation, CodeableConcept, CodeableReference, Identifier, Meta, Narrative, Period,
    Range, Reference, Timing,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Code, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// occurrence[x]
#[derive(Debug, Clone, PartialEq)]
pub enum ProcedureOccurrence {
    DateTime(Primitive<DateTime>),
    Period(Period),
    String(Primitive<String>),
    Age(Age),
    Range(Range),
    Timing(Timing),
}

const OCCURRENCE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "occurrence",
    variants: &[
        "occurrenceDateTime",
        "occurrencePeriod",
        "occurrenceString",
        "occurrenceAge",
        "occurrenceRange",
        "occurrenceTiming",
    ],
};

/// reported[x]
#[derive(Debug, Clone, PartialEq)]
pub enum ProcedureReported {
    Boolean(Primitive<bool>),
    Reference(Reference),
}

const REPORTED_SLOT: ChoiceSlot = ChoiceSlot {
    base: "reported",
    variants: &["reportedBoolean", "reportedReference"],
};

/// An action performed on or for a patient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Procedure {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub instantiates_canonical: Vec<Primitive<Canonical>>,
    pub instantiates_uri: Vec<Primitive<Uri>>,
    pub based_on: Vec<Reference>,
    pub part_of: Vec<Reference>,
    pub status: Primitive<Code>,
    pub status_reason: Option<CodeableConcept>,
    pub category: Vec<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub subject: Reference,
    pub focus: Option<Reference>,
    pub encounter: Option<Reference>,
    pub occurrence: Option<ProcedureOccurrence>,
    pub recorded: Option<Primitive<DateTime>>,
    pub recorder: Option<Reference>,
    pub reported: Option<ProcedureReported>,
    pub performer: Vec<ProcedurePerformer>,
    pub location: Option<Reference>,
    pub reason: Vec<CodeableReference>,
    pub body_site: Vec<CodeableConcept>,
    pub outcome: Option<CodeableConcept>,
    pub report: Vec<Reference>,
    pub complication: Vec<CodeableReference>,
    pub follow_up: Vec<CodeableConcept>,
    pub note: Vec<Annotation>,
    pub focal_device: Vec<ProcedureFocalDevice>,
    pub used: Vec<CodeableReference>,
    pub supporting_info: Vec<Reference>,
    pub unknown: JsonMap,
}

impl Procedure {
    pub const TYPE: &'static str = "Procedure";
}

impl FhirDecode for Procedure {
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
            instantiates_canonical: obj.prim_vec("instantiatesCanonical")?,
            instantiates_uri: obj.prim_vec("instantiatesUri")?,
            based_on: obj.complex_vec("basedOn")?,
            part_of: obj.complex_vec("partOf")?,
            status: obj.prim_req("status")?,
            status_reason: obj.complex("statusReason")?,
            category: obj.complex_vec("category")?,
            code: obj.complex("code")?,
            subject: obj.complex_req("subject")?,
            focus: obj.complex("focus")?,
            encounter: obj.complex("encounter")?,
            occurrence: match obj.choice(&OCCURRENCE_SLOT)? {
                Some("occurrenceDateTime") => Some(ProcedureOccurrence::DateTime(
                    obj.prim_req("occurrenceDateTime")?,
                )),
                Some("occurrencePeriod") => Some(ProcedureOccurrence::Period(
                    obj.complex_req("occurrencePeriod")?,
                )),
                Some("occurrenceString") => Some(ProcedureOccurrence::String(
                    obj.prim_req("occurrenceString")?,
                )),
                Some("occurrenceAge") => {
                    Some(ProcedureOccurrence::Age(obj.complex_req("occurrenceAge")?))
                }
                Some("occurrenceRange") => Some(ProcedureOccurrence::Range(
                    obj.complex_req("occurrenceRange")?,
                )),
                Some("occurrenceTiming") => Some(ProcedureOccurrence::Timing(
                    obj.complex_req("occurrenceTiming")?,
                )),
                _ => None,
            },
            recorded: obj.prim("recorded")?,
            recorder: obj.complex("recorder")?,
            reported: match obj.choice(&REPORTED_SLOT)? {
                Some("reportedBoolean") => Some(ProcedureReported::Boolean(
                    obj.prim_req("reportedBoolean")?,
                )),
                Some("reportedReference") => Some(ProcedureReported::Reference(
                    obj.complex_req("reportedReference")?,
                )),
                _ => None,
            },
            performer: obj.complex_vec("performer")?,
            location: obj.complex("location")?,
            reason: obj.complex_vec("reason")?,
            body_site: obj.complex_vec("bodySite")?,
            outcome: obj.complex("outcome")?,
            report: obj.complex_vec("report")?,
            complication: obj.complex_vec("complication")?,
            follow_up: obj.complex_vec("followUp")?,
            note: obj.complex_vec("note")?,
            focal_device: obj.complex_vec("focalDevice")?,
            used: obj.complex_vec("used")?,
            supporting_info: obj.complex_vec("supportingInfo")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Procedure {
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
        obj.prim_vec("instantiatesCanonical", &self.instantiates_canonical)?;
        obj.prim_vec("instantiatesUri", &self.instantiates_uri)?;
        obj.complex_vec("basedOn", &self.based_on)?;
        obj.complex_vec("partOf", &self.part_of)?;
        obj.prim_req("status", &self.status)?;
        obj.complex("statusReason", self.status_reason.as_ref())?;
        obj.complex_vec("category", &self.category)?;
        obj.complex("code", self.code.as_ref())?;
        obj.complex("subject", Some(&self.subject))?;
        obj.complex("focus", self.focus.as_ref())?;
        obj.complex("encounter", self.encounter.as_ref())?;
        match &self.occurrence {
            Some(ProcedureOccurrence::DateTime(v)) => obj.prim_req("occurrenceDateTime", v)?,
            Some(ProcedureOccurrence::Period(v)) => obj.complex("occurrencePeriod", Some(v))?,
            Some(ProcedureOccurrence::String(v)) => obj.prim_req("occurrenceString", v)?,
            Some(ProcedureOccurrence::Age(v)) => obj.complex("occurrenceAge", Some(v))?,
            Some(ProcedureOccurrence::Range(v)) => obj.complex("occurrenceRange", Some(v))?,
            Some(ProcedureOccurrence::Timing(v)) => obj.complex("occurrenceTiming", Some(v))?,
            None => {}
        }
        obj.prim("recorded", self.recorded.as_ref())?;
        obj.complex("recorder", self.recorder.as_ref())?;
        match &self.reported {
            Some(ProcedureReported::Boolean(v)) => obj.prim_req("reportedBoolean", v)?,
            Some(ProcedureReported::Reference(v)) => obj.complex("reportedReference", Some(v))?,
            None => {}
        }
        obj.complex_vec("performer", &self.performer)?;
        obj.complex("location", self.location.as_ref())?;
        obj.complex_vec("reason", &self.reason)?;
        obj.complex_vec("bodySite", &self.body_site)?;
        obj.complex("outcome", self.outcome.as_ref())?;
        obj.complex_vec("report", &self.report)?;
        obj.complex_vec("complication", &self.complication)?;
        obj.complex_vec("followUp", &self.follow_up)?;
        obj.complex_vec("note", &self.note)?;
        obj.complex_vec("focalDevice", &self.focal_device)?;
        obj.complex_vec("used", &self.used)?;
        obj.complex_vec("supportingInfo", &self.supporting_info)?;
        Ok(obj.finish(&self.unknown))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcedurePerformer {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    pub on_behalf_of: Option<Reference>,
    pub period: Option<Period>,
    pub unknown: JsonMap,
}

impl FhirDecode for ProcedurePerformer {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            function: obj.complex("function")?,
            actor: obj.complex_req("actor")?,
            on_behalf_of: obj.complex("onBehalfOf")?,
            period: obj.complex("period")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ProcedurePerformer {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("function", self.function.as_ref())?;
        obj.complex("actor", Some(&self.actor))?;
        obj.complex("onBehalfOf", self.on_behalf_of.as_ref())?;
        obj.complex("period", self.period.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcedureFocalDevice {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub action: Option<CodeableConcept>,
    pub manipulated: Reference,
    pub unknown: JsonMap,
}

impl FhirDecode for ProcedureFocalDevice {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            action: obj.complex("action")?,
            manipulated: obj.complex_req("manipulated")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ProcedureFocalDevice {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("action", self.action.as_ref())?;
        obj.complex("manipulated", Some(&self.manipulated))?;
        Ok(obj.finish(&self.unknown))
    }
}
