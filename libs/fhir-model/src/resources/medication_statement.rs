//! The MedicationStatement resource.

use crate::datatypes::{
    Annotation, CodeableConcept, CodeableReference, Dosage, Identifier, Meta, Narrative, Period,
    Reference, Timing,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Markdown, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// effective[x]
#[derive(Debug, Clone, PartialEq)]
pub enum MedicationStatementEffective {
    DateTime(Primitive<DateTime>),
    Period(Period),
    Timing(Timing),
}

const EFFECTIVE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "effective",
    variants: &["effectiveDateTime", "effectivePeriod", "effectiveTiming"],
};

/// A record of medication being taken by a patient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MedicationStatement {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub part_of: Vec<Reference>,
    /// recorded | entered-in-error | draft
    pub status: Primitive<Code>,
    pub category: Vec<CodeableConcept>,
    pub medication: CodeableReference,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    pub effective: Option<MedicationStatementEffective>,
    pub date_asserted: Option<Primitive<DateTime>>,
    pub information_source: Vec<Reference>,
    pub derived_from: Vec<Reference>,
    pub reason: Vec<CodeableReference>,
    pub note: Vec<Annotation>,
    pub related_clinical_information: Vec<Reference>,
    pub rendered_dosage_instruction: Option<Primitive<Markdown>>,
    pub dosage: Vec<Dosage>,
    pub adherence: Option<MedicationStatementAdherence>,
    pub unknown: JsonMap,
}

impl MedicationStatement {
    pub const TYPE: &'static str = "MedicationStatement";
}

impl FhirDecode for MedicationStatement {
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
            part_of: obj.complex_vec("partOf")?,
            status: obj.prim_req("status")?,
            category: obj.complex_vec("category")?,
            medication: obj.complex_req("medication")?,
            subject: obj.complex_req("subject")?,
            encounter: obj.complex("encounter")?,
            effective: match obj.choice(&EFFECTIVE_SLOT)? {
                Some("effectiveDateTime") => Some(MedicationStatementEffective::DateTime(
                    obj.prim_req("effectiveDateTime")?,
                )),
                Some("effectivePeriod") => Some(MedicationStatementEffective::Period(
                    obj.complex_req("effectivePeriod")?,
                )),
                Some("effectiveTiming") => Some(MedicationStatementEffective::Timing(
                    obj.complex_req("effectiveTiming")?,
                )),
                _ => None,
            },
            date_asserted: obj.prim("dateAsserted")?,
            information_source: obj.complex_vec("informationSource")?,
            derived_from: obj.complex_vec("derivedFrom")?,
            reason: obj.complex_vec("reason")?,
            note: obj.complex_vec("note")?,
            related_clinical_information: obj.complex_vec("relatedClinicalInformation")?,
            rendered_dosage_instruction: obj.prim("renderedDosageInstruction")?,
            dosage: obj.complex_vec("dosage")?,
            adherence: obj.complex("adherence")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for MedicationStatement {
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
        obj.complex_vec("partOf", &self.part_of)?;
        obj.prim_req("status", &self.status)?;
        obj.complex_vec("category", &self.category)?;
        obj.complex("medication", Some(&self.medication))?;
        obj.complex("subject", Some(&self.subject))?;
        obj.complex("encounter", self.encounter.as_ref())?;
        match &self.effective {
            Some(MedicationStatementEffective::DateTime(v)) => {
                obj.prim_req("effectiveDateTime", v)?
            }
            Some(MedicationStatementEffective::Period(v)) => {
                obj.complex("effectivePeriod", Some(v))?
            }
            Some(MedicationStatementEffective::Timing(v)) => {
                obj.complex("effectiveTiming", Some(v))?
            }
            None => {}
        }
        obj.prim("dateAsserted", self.date_asserted.as_ref())?;
        obj.complex_vec("informationSource", &self.information_source)?;
        obj.complex_vec("derivedFrom", &self.derived_from)?;
        obj.complex_vec("reason", &self.reason)?;
        obj.complex_vec("note", &self.note)?;
        obj.complex_vec(
            "relatedClinicalInformation",
            &self.related_clinical_information,
        )?;
        obj.prim(
            "renderedDosageInstruction",
            self.rendered_dosage_instruction.as_ref(),
        )?;
        obj.complex_vec("dosage", &self.dosage)?;
        obj.complex("adherence", self.adherence.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Whether the medication is being taken as recorded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MedicationStatementAdherence {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub code: CodeableConcept,
    pub reason: Option<CodeableConcept>,
    pub unknown: JsonMap,
}

impl FhirDecode for MedicationStatementAdherence {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            code: obj.complex_req("code")?,
            reason: obj.complex("reason")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for MedicationStatementAdherence {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("code", Some(&self.code))?;
        obj.complex("reason", self.reason.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
