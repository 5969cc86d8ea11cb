//! The MedicationRequest resource.

use crate::datatypes::{
    Annotation, CodeableConcept, CodeableReference, Dosage, Duration, Identifier, Meta,
    Narrative, Period, Reference, SimpleQuantity,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Markdown, UnsignedInt, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// An order or request for supply and administration of a medication.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MedicationRequest {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub based_on: Vec<Reference>,
    pub prior_prescription: Option<Reference>,
    pub group_identifier: Option<Identifier>,
    /// active | on-hold | ended | stopped | completed | cancelled | draft |
    /// entered-in-error | unknown
    pub status: Primitive<Code>,
    pub status_reason: Option<CodeableConcept>,
    pub status_changed: Option<Primitive<DateTime>>,
    /// proposal | plan | order | original-order | reflex-order |
    /// filler-order | instance-order | option
    pub intent: Primitive<Code>,
    pub category: Vec<CodeableConcept>,
    pub priority: Option<Primitive<Code>>,
    pub do_not_perform: Option<Primitive<bool>>,
    pub medication: CodeableReference,
    pub subject: Reference,
    pub information_source: Vec<Reference>,
    pub encounter: Option<Reference>,
    pub supporting_information: Vec<Reference>,
    pub authored_on: Option<Primitive<DateTime>>,
    pub requester: Option<Reference>,
    pub reported: Option<Primitive<bool>>,
    pub performer_type: Option<CodeableConcept>,
    pub performer: Vec<Reference>,
    pub device: Vec<CodeableReference>,
    pub recorder: Option<Reference>,
    pub reason: Vec<CodeableReference>,
    pub course_of_therapy_type: Option<CodeableConcept>,
    pub insurance: Vec<Reference>,
    pub note: Vec<Annotation>,
    pub rendered_dosage_instruction: Option<Primitive<Markdown>>,
    pub effective_dose_period: Option<Period>,
    pub dosage_instruction: Vec<Dosage>,
    pub dispense_request: Option<MedicationRequestDispenseRequest>,
    pub substitution: Option<MedicationRequestSubstitution>,
    pub event_history: Vec<Reference>,
    pub unknown: JsonMap,
}

impl MedicationRequest {
    pub const TYPE: &'static str = "MedicationRequest";
}

impl FhirDecode for MedicationRequest {
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
            based_on: obj.complex_vec("basedOn")?,
            prior_prescription: obj.complex("priorPrescription")?,
            group_identifier: obj.complex("groupIdentifier")?,
            status: obj.prim_req("status")?,
            status_reason: obj.complex("statusReason")?,
            status_changed: obj.prim("statusChanged")?,
            intent: obj.prim_req("intent")?,
            category: obj.complex_vec("category")?,
            priority: obj.prim("priority")?,
            do_not_perform: obj.prim("doNotPerform")?,
            medication: obj.complex_req("medication")?,
            subject: obj.complex_req("subject")?,
            information_source: obj.complex_vec("informationSource")?,
            encounter: obj.complex("encounter")?,
            supporting_information: obj.complex_vec("supportingInformation")?,
            authored_on: obj.prim("authoredOn")?,
            requester: obj.complex("requester")?,
            reported: obj.prim("reported")?,
            performer_type: obj.complex("performerType")?,
            performer: obj.complex_vec("performer")?,
            device: obj.complex_vec("device")?,
            recorder: obj.complex("recorder")?,
            reason: obj.complex_vec("reason")?,
            course_of_therapy_type: obj.complex("courseOfTherapyType")?,
            insurance: obj.complex_vec("insurance")?,
            note: obj.complex_vec("note")?,
            rendered_dosage_instruction: obj.prim("renderedDosageInstruction")?,
            effective_dose_period: obj.complex("effectiveDosePeriod")?,
            dosage_instruction: obj.complex_vec("dosageInstruction")?,
            dispense_request: obj.complex("dispenseRequest")?,
            substitution: obj.complex("substitution")?,
            event_history: obj.complex_vec("eventHistory")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for MedicationRequest {
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
        obj.complex_vec("basedOn", &self.based_on)?;
        obj.complex("priorPrescription", self.prior_prescription.as_ref())?;
        obj.complex("groupIdentifier", self.group_identifier.as_ref())?;
        obj.prim_req("status", &self.status)?;
        obj.complex("statusReason", self.status_reason.as_ref())?;
        obj.prim("statusChanged", self.status_changed.as_ref())?;
        obj.prim_req("intent", &self.intent)?;
        obj.complex_vec("category", &self.category)?;
        obj.prim("priority", self.priority.as_ref())?;
        obj.prim("doNotPerform", self.do_not_perform.as_ref())?;
        obj.complex("medication", Some(&self.medication))?;
        obj.complex("subject", Some(&self.subject))?;
        obj.complex_vec("informationSource", &self.information_source)?;
        obj.complex("encounter", self.encounter.as_ref())?;
        obj.complex_vec("supportingInformation", &self.supporting_information)?;
        obj.prim("authoredOn", self.authored_on.as_ref())?;
        obj.complex("requester", self.requester.as_ref())?;
        obj.prim("reported", self.reported.as_ref())?;
        obj.complex("performerType", self.performer_type.as_ref())?;
        obj.complex_vec("performer", &self.performer)?;
        obj.complex_vec("device", &self.device)?;
        obj.complex("recorder", self.recorder.as_ref())?;
        obj.complex_vec("reason", &self.reason)?;
        obj.complex("courseOfTherapyType", self.course_of_therapy_type.as_ref())?;
        obj.complex_vec("insurance", &self.insurance)?;
        obj.complex_vec("note", &self.note)?;
        obj.prim(
            "renderedDosageInstruction",
            self.rendered_dosage_instruction.as_ref(),
        )?;
        obj.complex("effectiveDosePeriod", self.effective_dose_period.as_ref())?;
        obj.complex_vec("dosageInstruction", &self.dosage_instruction)?;
        obj.complex("dispenseRequest", self.dispense_request.as_ref())?;
        obj.complex("substitution", self.substitution.as_ref())?;
        obj.complex_vec("eventHistory", &self.event_history)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// First-fill and refill expectations for the dispenser.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MedicationRequestDispenseRequest {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub initial_fill: Option<MedicationRequestInitialFill>,
    pub dispense_interval: Option<Duration>,
    pub validity_period: Option<Period>,
    pub number_of_repeats_allowed: Option<Primitive<UnsignedInt>>,
    pub quantity: Option<SimpleQuantity>,
    pub expected_supply_duration: Option<Duration>,
    pub dispenser: Option<Reference>,
    pub dispenser_instruction: Vec<Annotation>,
    pub dose_administration_aid: Option<CodeableConcept>,
    pub unknown: JsonMap,
}

impl FhirDecode for MedicationRequestDispenseRequest {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            initial_fill: obj.complex("initialFill")?,
            dispense_interval: obj.complex("dispenseInterval")?,
            validity_period: obj.complex("validityPeriod")?,
            number_of_repeats_allowed: obj.prim("numberOfRepeatsAllowed")?,
            quantity: obj.complex("quantity")?,
            expected_supply_duration: obj.complex("expectedSupplyDuration")?,
            dispenser: obj.complex("dispenser")?,
            dispenser_instruction: obj.complex_vec("dispenserInstruction")?,
            dose_administration_aid: obj.complex("doseAdministrationAid")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for MedicationRequestDispenseRequest {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("initialFill", self.initial_fill.as_ref())?;
        obj.complex("dispenseInterval", self.dispense_interval.as_ref())?;
        obj.complex("validityPeriod", self.validity_period.as_ref())?;
        obj.prim(
            "numberOfRepeatsAllowed",
            self.number_of_repeats_allowed.as_ref(),
        )?;
        obj.complex("quantity", self.quantity.as_ref())?;
        obj.complex(
            "expectedSupplyDuration",
            self.expected_supply_duration.as_ref(),
        )?;
        obj.complex("dispenser", self.dispenser.as_ref())?;
        obj.complex_vec("dispenserInstruction", &self.dispenser_instruction)?;
        obj.complex(
            "doseAdministrationAid",
            self.dose_administration_aid.as_ref(),
        )?;
        Ok(obj.finish(&self.unknown))
    }
}

/// The first fill, when it differs from the rest.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MedicationRequestInitialFill {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub quantity: Option<SimpleQuantity>,
    pub duration: Option<Duration>,
    pub unknown: JsonMap,
}

impl FhirDecode for MedicationRequestInitialFill {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            quantity: obj.complex("quantity")?,
            duration: obj.complex("duration")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for MedicationRequestInitialFill {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("quantity", self.quantity.as_ref())?;
        obj.complex("duration", self.duration.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// allowed[x]: whether substitution is permitted.
#[derive(Debug, Clone, PartialEq)]
pub enum MedicationRequestAllowed {
    Boolean(Primitive<bool>),
    CodeableConcept(CodeableConcept),
}

const ALLOWED_SLOT: ChoiceSlot = ChoiceSlot {
    base: "allowed",
    variants: &["allowedBoolean", "allowedCodeableConcept"],
};

/// Substitution terms for the dispense.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationRequestSubstitution {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub allowed: MedicationRequestAllowed,
    pub reason: Option<CodeableConcept>,
    pub unknown: JsonMap,
}

impl MedicationRequestSubstitution {
    pub fn allowed(allowed: MedicationRequestAllowed) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            modifier_extension: Vec::new(),
            allowed,
            reason: None,
            unknown: JsonMap::new(),
        }
    }
}

impl FhirDecode for MedicationRequestSubstitution {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let extension = obj.extensions()?;
        let modifier_extension = obj.modifier_extensions()?;
        let allowed = match obj.choice_req(&ALLOWED_SLOT)? {
            "allowedBoolean" => {
                MedicationRequestAllowed::Boolean(obj.prim_req("allowedBoolean")?)
            }
            "allowedCodeableConcept" => MedicationRequestAllowed::CodeableConcept(
                obj.complex_req("allowedCodeableConcept")?,
            ),
            other => unreachable!("`{other}` is not in the allowed slot"),
        };
        let reason = obj.complex("reason")?;
        let unknown = obj.finish()?;
        Ok(Self {
            id,
            extension,
            modifier_extension,
            allowed,
            reason,
            unknown,
        })
    }
}

impl FhirEncode for MedicationRequestSubstitution {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        match &self.allowed {
            MedicationRequestAllowed::Boolean(v) => obj.prim_req("allowedBoolean", v)?,
            MedicationRequestAllowed::CodeableConcept(v) => {
                obj.complex("allowedCodeableConcept", Some(v))?
            }
        }
        obj.complex("reason", self.reason.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
