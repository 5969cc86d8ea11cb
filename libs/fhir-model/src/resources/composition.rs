//! The Composition resource, with its recursive section backbone.

use crate::datatypes::{
    Annotation, CodeableConcept, CodeableReference, Identifier, Meta, Narrative, Period,
    Reference, RelatedArtifact, UsageContext,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A set of healthcare-related information assembled into a single
/// coherent clinical statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composition {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub url: Option<Primitive<Uri>>,
    pub identifier: Vec<Identifier>,
    pub version: Option<Primitive<String>>,
    /// registered | partial | preliminary | final | amended | corrected |
    /// appended | cancelled | entered-in-error | deprecated | unknown
    pub status: Primitive<Code>,
    pub r#type: CodeableConcept,
    pub category: Vec<CodeableConcept>,
    pub subject: Vec<Reference>,
    pub encounter: Option<Reference>,
    pub date: Primitive<DateTime>,
    pub use_context: Vec<UsageContext>,
    pub author: Vec<Reference>,
    pub name: Option<Primitive<String>>,
    pub title: Primitive<String>,
    pub note: Vec<Annotation>,
    pub attester: Vec<CompositionAttester>,
    pub custodian: Option<Reference>,
    pub relates_to: Vec<RelatedArtifact>,
    pub event: Vec<CompositionEvent>,
    pub section: Vec<CompositionSection>,
    pub unknown: JsonMap,
}

impl Composition {
    pub const TYPE: &'static str = "Composition";
}

impl FhirDecode for Composition {
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
            url: obj.prim("url")?,
            identifier: obj.complex_vec("identifier")?,
            version: obj.prim("version")?,
            status: obj.prim_req("status")?,
            r#type: obj.complex_req("type")?,
            category: obj.complex_vec("category")?,
            subject: obj.complex_vec("subject")?,
            encounter: obj.complex("encounter")?,
            date: obj.prim_req("date")?,
            use_context: obj.complex_vec("useContext")?,
            author: obj.complex_vec1("author")?,
            name: obj.prim("name")?,
            title: obj.prim_req("title")?,
            note: obj.complex_vec("note")?,
            attester: obj.complex_vec("attester")?,
            custodian: obj.complex("custodian")?,
            relates_to: obj.complex_vec("relatesTo")?,
            event: obj.complex_vec("event")?,
            section: obj.complex_vec("section")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Composition {
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
        obj.prim("url", self.url.as_ref())?;
        obj.complex_vec("identifier", &self.identifier)?;
        obj.prim("version", self.version.as_ref())?;
        obj.prim_req("status", &self.status)?;
        obj.complex("type", Some(&self.r#type))?;
        obj.complex_vec("category", &self.category)?;
        obj.complex_vec("subject", &self.subject)?;
        obj.complex("encounter", self.encounter.as_ref())?;
        obj.prim_req("date", &self.date)?;
        obj.complex_vec("useContext", &self.use_context)?;
        obj.complex_vec("author", &self.author)?;
        obj.prim("name", self.name.as_ref())?;
        obj.prim_req("title", &self.title)?;
        obj.complex_vec("note", &self.note)?;
        obj.complex_vec("attester", &self.attester)?;
        obj.complex("custodian", self.custodian.as_ref())?;
        obj.complex_vec("relatesTo", &self.relates_to)?;
        obj.complex_vec("event", &self.event)?;
        obj.complex_vec("section", &self.section)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Attestation of a composition's accuracy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositionAttester {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub mode: CodeableConcept,
    pub time: Option<Primitive<DateTime>>,
    pub party: Option<Reference>,
    pub unknown: JsonMap,
}

impl FhirDecode for CompositionAttester {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            mode: obj.complex_req("mode")?,
            time: obj.prim("time")?,
            party: obj.complex("party")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for CompositionAttester {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("mode", Some(&self.mode))?;
        obj.prim("time", self.time.as_ref())?;
        obj.complex("party", self.party.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A clinical service being documented.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositionEvent {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub period: Option<Period>,
    pub detail: Vec<CodeableReference>,
    pub unknown: JsonMap,
}

impl FhirDecode for CompositionEvent {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            period: obj.complex("period")?,
            detail: obj.complex_vec("detail")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for CompositionEvent {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("period", self.period.as_ref())?;
        obj.complex_vec("detail", &self.detail)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A section of the document; sections nest, bounded at decode time by
/// `DecodeOptions::max_depth`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositionSection {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub title: Option<Primitive<String>>,
    pub code: Option<CodeableConcept>,
    pub author: Vec<Reference>,
    pub focus: Option<Reference>,
    pub text: Option<Narrative>,
    pub ordered_by: Option<CodeableConcept>,
    pub entry: Vec<Reference>,
    pub empty_reason: Option<CodeableConcept>,
    pub section: Vec<CompositionSection>,
    pub unknown: JsonMap,
}

impl FhirDecode for CompositionSection {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            title: obj.prim("title")?,
            code: obj.complex("code")?,
            author: obj.complex_vec("author")?,
            focus: obj.complex("focus")?,
            text: obj.complex("text")?,
            ordered_by: obj.complex("orderedBy")?,
            entry: obj.complex_vec("entry")?,
            empty_reason: obj.complex("emptyReason")?,
            section: obj.complex_vec("section")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for CompositionSection {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim("title", self.title.as_ref())?;
        obj.complex("code", self.code.as_ref())?;
        obj.complex_vec("author", &self.author)?;
        obj.complex("focus", self.focus.as_ref())?;
        obj.complex("text", self.text.as_ref())?;
        obj.complex("orderedBy", self.ordered_by.as_ref())?;
        obj.complex_vec("entry", &self.entry)?;
        obj.complex("emptyReason", self.empty_reason.as_ref())?;
        obj.complex_vec("section", &self.section)?;
        Ok(obj.finish(&self.unknown))
    }
}
