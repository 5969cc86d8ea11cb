//! The DiagnosticReport resource.

use crate::datatypes::{
    Annotation, Attachment, CodeableConcept, Identifier, Meta, Narrative, Period, Reference,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Instant, Markdown, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// effective[x]
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticReportEffective {
    DateTime(Primitive<DateTime>),
    Period(Period),
}

const EFFECTIVE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "effective",
    variants: &["effectiveDateTime", "effectivePeriod"],
};

/// The findings and interpretation of diagnostic tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiagnosticReport {
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
    /// registered | partial | preliminary | modified | final | amended |
    /// corrected | appended | cancelled | entered-in-error | unknown
    pub status: Primitive<Code>,
    pub category: Vec<CodeableConcept>,
    pub code: CodeableConcept,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    pub effective: Option<DiagnosticReportEffective>,
    pub issued: Option<Primitive<Instant>>,
    pub performer: Vec<Reference>,
    pub results_interpreter: Vec<Reference>,
    pub specimen: Vec<Reference>,
    pub result: Vec<Reference>,
    pub note: Vec<Annotation>,
    pub study: Vec<Reference>,
    pub supporting_info: Vec<DiagnosticReportSupportingInfo>,
    pub media: Vec<DiagnosticReportMedia>,
    pub composition: Option<Reference>,
    pub conclusion: Option<Primitive<Markdown>>,
    pub conclusion_code: Vec<CodeableConcept>,
    pub presented_form: Vec<Attachment>,
    pub unknown: JsonMap,
}

impl DiagnosticReport {
    pub const TYPE: &'static str = "DiagnosticReport";
}

impl FhirDecode for DiagnosticReport {
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
            status: obj.prim_req("status")?,
            category: obj.complex_vec("category")?,
            code: obj.complex_req("code")?,
            subject: obj.complex("subject")?,
            encounter: obj.complex("encounter")?,
            effective: match obj.choice(&EFFECTIVE_SLOT)? {
                Some("effectiveDateTime") => Some(DiagnosticReportEffective::DateTime(
                    obj.prim_req("effectiveDateTime")?,
                )),
                Some("effectivePeriod") => Some(DiagnosticReportEffective::Period(
                    obj.complex_req("effectivePeriod")?,
                )),
                _ => None,
            },
            issued: obj.prim("issued")?,
            performer: obj.complex_vec("performer")?,
            results_interpreter: obj.complex_vec("resultsInterpreter")?,
            specimen: obj.complex_vec("specimen")?,
            result: obj.complex_vec("result")?,
            note: obj.complex_vec("note")?,
            study: obj.complex_vec("study")?,
            supporting_info: obj.complex_vec("supportingInfo")?,
            media: obj.complex_vec("media")?,
            composition: obj.complex("composition")?,
            conclusion: obj.prim("conclusion")?,
            conclusion_code: obj.complex_vec("conclusionCode")?,
            presented_form: obj.complex_vec("presentedForm")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DiagnosticReport {
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
        obj.prim_req("status", &self.status)?;
        obj.complex_vec("category", &self.category)?;
        obj.complex("code", Some(&self.code))?;
        obj.complex("subject", self.subject.as_ref())?;
        obj.complex("encounter", self.encounter.as_ref())?;
        match &self.effective {
            Some(DiagnosticReportEffective::DateTime(v)) => {
                obj.prim_req("effectiveDateTime", v)?
            }
            Some(DiagnosticReportEffective::Period(v)) => {
                obj.complex("effectivePeriod", Some(v))?
            }
            None => {}
        }
        obj.prim("issued", self.issued.as_ref())?;
        obj.complex_vec("performer", &self.performer)?;
        obj.complex_vec("resultsInterpreter", &self.results_interpreter)?;
        obj.complex_vec("specimen", &self.specimen)?;
        obj.complex_vec("result", &self.result)?;
        obj.complex_vec("note", &self.note)?;
        obj.complex_vec("study", &self.study)?;
        obj.complex_vec("supportingInfo", &self.supporting_info)?;
        obj.complex_vec("media", &self.media)?;
        obj.complex("composition", self.composition.as_ref())?;
        obj.prim("conclusion", self.conclusion.as_ref())?;
        obj.complex_vec("conclusionCode", &self.conclusion_code)?;
        obj.complex_vec("presentedForm", &self.presented_form)?;
        Ok(obj.finish(&self.unknown))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiagnosticReportSupportingInfo {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub r#type: CodeableConcept,
    pub reference: Reference,
    pub unknown: JsonMap,
}

impl FhirDecode for DiagnosticReportSupportingInfo {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            r#type: obj.complex_req("type")?,
            reference: obj.complex_req("reference")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DiagnosticReportSupportingInfo {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("type", Some(&self.r#type))?;
        obj.complex("reference", Some(&self.reference))?;
        Ok(obj.finish(&self.unknown))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiagnosticReportMedia {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub comment: Option<Primitive<String>>,
    pub link: Reference,
    pub unknown: JsonMap,
}

impl FhirDecode for DiagnosticReportMedia {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            comment: obj.prim("comment")?,
            link: obj.complex_req("link")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DiagnosticReportMedia {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim("comment", self.comment.as_ref())?;
        obj.complex("link", Some(&self.link))?;
        Ok(obj.finish(&self.unknown))
    }
}
