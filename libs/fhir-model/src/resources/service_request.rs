//! The ServiceRequest resource.

use crate::datatypes::{
    Annotation, CodeableConcept, CodeableReference, Identifier, Meta, Narrative, Period,
    Quantity, Range, Ratio, Reference, Timing,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Code, DateTime, Id, Markdown, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// quantity[x]
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceRequestQuantity {
    Quantity(Quantity),
    Ratio(Ratio),
    Range(Range),
}

const QUANTITY_SLOT: ChoiceSlot = ChoiceSlot {
    base: "quantity",
    variants: &["quantityQuantity", "quantityRatio", "quantityRange"],
};

/// occurrence[x]
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceRequestOccurrence {
    DateTime(Primitive<DateTime>),
    Period(Period),
    Timing(Timing),
}

const OCCURRENCE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "occurrence",
    variants: &["occurrenceDateTime", "occurrencePeriod", "occurrenceTiming"],
};

/// asNeeded[x]
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceRequestAsNeeded {
    Boolean(Primitive<bool>),
    CodeableConcept(CodeableConcept),
}

const AS_NEEDED_SLOT: ChoiceSlot = ChoiceSlot {
    base: "asNeeded",
    variants: &["asNeededBoolean", "asNeededCodeableConcept"],
};

/// instruction[x] of a patient instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceRequestInstruction {
    Markdown(Primitive<Markdown>),
    Reference(Reference),
}

const INSTRUCTION_SLOT: ChoiceSlot = ChoiceSlot {
    base: "instruction",
    variants: &["instructionMarkdown", "instructionReference"],
};

/// A request for a procedure, diagnostic or other service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceRequest {
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
    pub replaces: Vec<Reference>,
    pub requisition: Option<Identifier>,
    /// draft | active | on-hold | revoked | completed | entered-in-error |
    /// unknown
    pub status: Primitive<Code>,
    pub intent: Primitive<Code>,
    pub category: Vec<CodeableConcept>,
    pub priority: Option<Primitive<Code>>,
    pub do_not_perform: Option<Primitive<bool>>,
    pub code: Option<CodeableReference>,
    pub quantity: Option<ServiceRequestQuantity>,
    pub subject: Reference,
    pub focus: Vec<Reference>,
    pub encounter: Option<Reference>,
    pub occurrence: Option<ServiceRequestOccurrence>,
    pub as_needed: Option<ServiceRequestAsNeeded>,
    pub authored_on: Option<Primitive<DateTime>>,
    pub requester: Option<Reference>,
    pub performer_type: Option<CodeableConcept>,
    pub performer: Vec<Reference>,
    pub location: Vec<CodeableReference>,
    pub reason: Vec<CodeableReference>,
    pub insurance: Vec<Reference>,
    pub supporting_info: Vec<CodeableReference>,
    pub specimen: Vec<Reference>,
    pub body_site: Vec<CodeableConcept>,
    pub body_structure: Option<Reference>,
    pub note: Vec<Annotation>,
    pub patient_instruction: Vec<ServiceRequestPatientInstruction>,
    pub relevant_history: Vec<Reference>,
    pub unknown: JsonMap,
}

impl ServiceRequest {
    pub const TYPE: &'static str = "ServiceRequest";
}

impl FhirDecode for ServiceRequest {
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
            replaces: obj.complex_vec("replaces")?,
            requisition: obj.complex("requisition")?,
            status: obj.prim_req("status")?,
            intent: obj.prim_req("intent")?,
            category: obj.complex_vec("category")?,
            priority: obj.prim("priority")?,
            do_not_perform: obj.prim("doNotPerform")?,
            code: obj.complex("code")?,
            quantity: match obj.choice(&QUANTITY_SLOT)? {
                Some("quantityQuantity") => Some(ServiceRequestQuantity::Quantity(
                    obj.complex_req("quantityQuantity")?,
                )),
                Some("quantityRatio") => Some(ServiceRequestQuantity::Ratio(
                    obj.complex_req("quantityRatio")?,
                )),
                Some("quantityRange") => Some(ServiceRequestQuantity::Range(
                    obj.complex_req("quantityRange")?,
                )),
                _ => None,
            },
            subject: obj.complex_req("subject")?,
            focus: obj.complex_vec("focus")?,
            encounter: obj.complex("encounter")?,
            occurrence: match obj.choice(&OCCURRENCE_SLOT)? {
                Some("occurrenceDateTime") => Some(ServiceRequestOccurrence::DateTime(
                    obj.prim_req("occurrenceDateTime")?,
                )),
                Some("occurrencePeriod") => Some(ServiceRequestOccurrence::Period(
                    obj.complex_req("occurrencePeriod")?,
                )),
                Some("occurrenceTiming") => Some(ServiceRequestOccurrence::Timing(
                    obj.complex_req("occurrenceTiming")?,
                )),
                _ => None,
            },
            as_needed: match obj.choice(&AS_NEEDED_SLOT)? {
                Some("asNeededBoolean") => Some(ServiceRequestAsNeeded::Boolean(
                    obj.prim_req("asNeededBoolean")?,
                )),
                Some("asNeededCodeableConcept") => Some(ServiceRequestAsNeeded::CodeableConcept(
                    obj.complex_req("asNeededCodeableConcept")?,
                )),
                _ => None,
            },
            authored_on: obj.prim("authoredOn")?,
            requester: obj.complex("requester")?,
            performer_type: obj.complex("performerType")?,
            performer: obj.complex_vec("performer")?,
            location: obj.complex_vec("location")?,
            reason: obj.complex_vec("reason")?,
            insurance: obj.complex_vec("insurance")?,
            supporting_info: obj.complex_vec("supportingInfo")?,
            specimen: obj.complex_vec("specimen")?,
            body_site: obj.complex_vec("bodySite")?,
            body_structure: obj.complex("bodyStructure")?,
            note: obj.complex_vec("note")?,
            patient_instruction: obj.complex_vec("patientInstruction")?,
            relevant_history: obj.complex_vec("relevantHistory")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ServiceRequest {
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
        obj.complex_vec("replaces", &self.replaces)?;
        obj.complex("requisition", self.requisition.as_ref())?;
        obj.prim_req("status", &self.status)?;
        obj.prim_req("intent", &self.intent)?;
        obj.complex_vec("category", &self.category)?;
        obj.prim("priority", self.priority.as_ref())?;
        obj.prim("doNotPerform", self.do_not_perform.as_ref())?;
        obj.complex("code", self.code.as_ref())?;
        match &self.quantity {
            Some(ServiceRequestQuantity::Quantity(v)) => {
                obj.complex("quantityQuantity", Some(v))?
            }
            Some(ServiceRequestQuantity::Ratio(v)) => obj.complex("quantityRatio", Some(v))?,
            Some(ServiceRequestQuantity::Range(v)) => obj.complex("quantityRange", Some(v))?,
            None => {}
        }
        obj.complex("subject", Some(&self.subject))?;
        obj.complex_vec("focus", &self.focus)?;
        obj.complex("encounter", self.encounter.as_ref())?;
        match &self.occurrence {
            Some(ServiceRequestOccurrence::DateTime(v)) => {
                obj.prim_req("occurrenceDateTime", v)?
            }
            Some(ServiceRequestOccurrence::Period(v)) => {
                obj.complex("occurrencePeriod", Some(v))?
            }
            Some(ServiceRequestOccurrence::Timing(v)) => {
                obj.complex("occurrenceTiming", Some(v))?
            }
            None => {}
        }
        match &self.as_needed {
            Some(ServiceRequestAsNeeded::Boolean(v)) => obj.prim_req("asNeededBoolean", v)?,
            Some(ServiceRequestAsNeeded::CodeableConcept(v)) => {
                obj.complex("asNeededCodeableConcept", Some(v))?
            }
            None => {}
        }
        obj.prim("authoredOn", self.authored_on.as_ref())?;
        obj.complex("requester", self.requester.as_ref())?;
        obj.complex("performerType", self.performer_type.as_ref())?;
        obj.complex_vec("performer", &self.performer)?;
        obj.complex_vec("location", &self.location)?;
        obj.complex_vec("reason", &self.reason)?;
        obj.complex_vec("insurance", &self.insurance)?;
        obj.complex_vec("supportingInfo", &self.supporting_info)?;
        obj.complex_vec("specimen", &self.specimen)?;
        obj.complex_vec("bodySite", &self.body_site)?;
        obj.complex("bodyStructure", self.body_structure.as_ref())?;
        obj.complex_vec("note", &self.note)?;
        obj.complex_vec("patientInstruction", &self.patient_instruction)?;
        obj.complex_vec("relevantHistory", &self.relevant_history)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Instructions in terms understood by the patient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceRequestPatientInstruction {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub instruction: Option<ServiceRequestInstruction>,
    pub unknown: JsonMap,
}

impl FhirDecode for ServiceRequestPatientInstruction {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            instruction: match obj.choice(&INSTRUCTION_SLOT)? {
                Some("instructionMarkdown") => Some(ServiceRequestInstruction::Markdown(
                    obj.prim_req("instructionMarkdown")?,
                )),
                Some("instructionReference") => Some(ServiceRequestInstruction::Reference(
                    obj.complex_req("instructionReference")?,
                )),
                _ => None,
            },
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ServiceRequestPatientInstruction {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        match &self.instruction {
            Some(ServiceRequestInstruction::Markdown(v)) => {
                obj.prim_req("instructionMarkdown", v)?
            }
            Some(ServiceRequestInstruction::Reference(v)) => {
                obj.complex("instructionReference", Some(v))?
            }
            None => {}
        }
        Ok(obj.finish(&self.unknown))
    }
}
