//! The Encounter resource (R5 shape: repeating class, virtual services,
//! admission backbone).

use crate::datatypes::{
    CodeableConcept, CodeableReference, Duration, Identifier, Meta, Narrative, Period, Reference,
    VirtualServiceDetail,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// An interaction between a patient and healthcare providers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Encounter {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// planned | in-progress | on-hold | discharged | completed | cancelled |
    /// discontinued | entered-in-error | unknown
    pub status: Primitive<Code>,
    pub class: Vec<CodeableConcept>,
    pub priority: Option<CodeableConcept>,
    pub r#type: Vec<CodeableConcept>,
    pub service_type: Vec<CodeableReference>,
    pub subject: Option<Reference>,
    pub subject_status: Option<CodeableConcept>,
    pub episode_of_care: Vec<Reference>,
    pub based_on: Vec<Reference>,
    pub care_team: Vec<Reference>,
    pub part_of: Option<Reference>,
    pub service_provider: Option<Reference>,
    pub participant: Vec<EncounterParticipant>,
    pub appointment: Vec<Reference>,
    pub virtual_service: Vec<VirtualServiceDetail>,
    pub actual_period: Option<Period>,
    pub planned_start_date: Option<Primitive<DateTime>>,
    pub planned_end_date: Option<Primitive<DateTime>>,
    pub length: Option<Duration>,
    pub reason: Vec<EncounterReason>,
    pub diagnosis: Vec<EncounterDiagnosis>,
    pub account: Vec<Reference>,
    pub diet_preference: Vec<CodeableConcept>,
    pub special_arrangement: Vec<CodeableConcept>,
    pub special_courtesy: Vec<CodeableConcept>,
    pub admission: Option<EncounterAdmission>,
    pub location: Vec<EncounterLocation>,
    pub unknown: JsonMap,
}

impl Encounter {
    pub const TYPE: &'static str = "Encounter";
}

impl FhirDecode for Encounter {
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
            status: obj.prim_req("status")?,
            class: obj.complex_vec("class")?,
            priority: obj.complex("priority")?,
            r#type: obj.complex_vec("type")?,
            service_type: obj.complex_vec("serviceType")?,
            subject: obj.complex("subject")?,
            subject_status: obj.complex("subjectStatus")?,
            episode_of_care: obj.complex_vec("episodeOfCare")?,
            based_on: obj.complex_vec("basedOn")?,
            care_team: obj.complex_vec("careTeam")?,
            part_of: obj.complex("partOf")?,
            service_provider: obj.complex("serviceProvider")?,
            participant: obj.complex_vec("participant")?,
            appointment: obj.complex_vec("appointment")?,
            virtual_service: obj.complex_vec("virtualService")?,
            actual_period: obj.complex("actualPeriod")?,
            planned_start_date: obj.prim("plannedStartDate")?,
            planned_end_date: obj.prim("plannedEndDate")?,
            length: obj.complex("length")?,
            reason: obj.complex_vec("reason")?,
            diagnosis: obj.complex_vec("diagnosis")?,
            account: obj.complex_vec("account")?,
            diet_preference: obj.complex_vec("dietPreference")?,
            special_arrangement: obj.complex_vec("specialArrangement")?,
            special_courtesy: obj.complex_vec("specialCourtesy")?,
            admission: obj.complex("admission")?,
            location: obj.complex_vec("location")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Encounter {
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
        obj.prim_req("status", &self.status)?;
        obj.complex_vec("class", &self.class)?;
        obj.complex("priority", self.priority.as_ref())?;
        obj.complex_vec("type", &self.r#type)?;
        obj.complex_vec("serviceType", &self.service_type)?;
        obj.complex("subject", self.subject.as_ref())?;
        obj.complex("subjectStatus", self.subject_status.as_ref())?;
        obj.complex_vec("episodeOfCare", &self.episode_of_care)?;
        obj.complex_vec("basedOn", &self.based_on)?;
        obj.complex_vec("careTeam", &self.care_team)?;
        obj.complex("partOf", self.part_of.as_ref())?;
        obj.complex("serviceProvider", self.service_provider.as_ref())?;
        obj.complex_vec("participant", &self.participant)?;
        obj.complex_vec("appointment", &self.appointment)?;
        obj.complex_vec("virtualService", &self.virtual_service)?;
        obj.complex("actualPeriod", self.actual_period.as_ref())?;
        obj.prim("plannedStartDate", self.planned_start_date.as_ref())?;
        obj.prim("plannedEndDate", self.planned_end_date.as_ref())?;
        obj.complex("length", self.length.as_ref())?;
        obj.complex_vec("reason", &self.reason)?;
        obj.complex_vec("diagnosis", &self.diagnosis)?;
        obj.complex_vec("account", &self.account)?;
        obj.complex_vec("dietPreference", &self.diet_preference)?;
        obj.complex_vec("specialArrangement", &self.special_arrangement)?;
        obj.complex_vec("specialCourtesy", &self.special_courtesy)?;
        obj.complex("admission", self.admission.as_ref())?;
        obj.complex_vec("location", &self.location)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A participant in the encounter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncounterParticipant {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub r#type: Vec<CodeableConcept>,
    pub period: Option<Period>,
    pub actor: Option<Reference>,
    pub unknown: JsonMap,
}

impl FhirDecode for EncounterParticipant {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            r#type: obj.complex_vec("type")?,
            period: obj.complex("period")?,
            actor: obj.complex("actor")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for EncounterParticipant {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex_vec("type", &self.r#type)?;
        obj.complex("period", self.period.as_ref())?;
        obj.complex("actor", self.actor.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Why the encounter takes place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncounterReason {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub r#use: Vec<CodeableConcept>,
    pub value: Vec<CodeableReference>,
    pub unknown: JsonMap,
}

impl FhirDecode for EncounterReason {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            r#use: obj.complex_vec("use")?,
            value: obj.complex_vec("value")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for EncounterReason {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex_vec("use", &self.r#use)?;
        obj.complex_vec("value", &self.value)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A diagnosis relevant to the encounter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncounterDiagnosis {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub condition: Vec<CodeableReference>,
    pub r#use: Vec<CodeableConcept>,
    pub unknown: JsonMap,
}

impl FhirDecode for EncounterDiagnosis {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            condition: obj.complex_vec("condition")?,
            r#use: obj.complex_vec("use")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for EncounterDiagnosis {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex_vec("condition", &self.condition)?;
        obj.complex_vec("use", &self.r#use)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Admission and discharge details.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncounterAdmission {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub pre_admission_identifier: Option<Identifier>,
    pub origin: Option<Reference>,
    pub admit_source: Option<CodeableConcept>,
    pub re_admission: Option<CodeableConcept>,
    pub destination: Option<Reference>,
    pub discharge_disposition: Option<CodeableConcept>,
    pub unknown: JsonMap,
}

impl FhirDecode for EncounterAdmission {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            pre_admission_identifier: obj.complex("preAdmissionIdentifier")?,
            origin: obj.complex("origin")?,
            admit_source: obj.complex("admitSource")?,
            re_admission: obj.complex("reAdmission")?,
            destination: obj.complex("destination")?,
            discharge_disposition: obj.complex("dischargeDisposition")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for EncounterAdmission {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex(
            "preAdmissionIdentifier",
            self.pre_admission_identifier.as_ref(),
        )?;
        obj.complex("origin", self.origin.as_ref())?;
        obj.complex("admitSource", self.admit_source.as_ref())?;
        obj.complex("reAdmission", self.re_admission.as_ref())?;
        obj.complex("destination", self.destination.as_ref())?;
        obj.complex("dischargeDisposition", self.discharge_disposition.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A location the patient has been at during the encounter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncounterLocation {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub location: Reference,
    /// planned | active | reserved | completed
    pub status: Option<Primitive<Code>>,
    pub form: Option<CodeableConcept>,
    pub period: Option<Period>,
    pub unknown: JsonMap,
}

impl FhirDecode for EncounterLocation {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            location: obj.complex_req("location")?,
            status: obj.prim("status")?,
            form: obj.complex("form")?,
            period: obj.complex("period")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for EncounterLocation {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("location", Some(&self.location))?;
        obj.prim("status", self.status.as_ref())?;
        obj.complex("form", self.form.as_ref())?;
        obj.complex("period", self.period.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
