//! The List resource.

use crate::datatypes::{Annotation, CodeableConcept, Identifier, Meta, Narrative, Reference};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A curated collection of resources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// current | retired | entered-in-error
    pub status: Primitive<Code>,
    /// working | snapshot | changes
    pub mode: Primitive<Code>,
    pub title: Option<Primitive<String>>,
    pub code: Option<CodeableConcept>,
    pub subject: Vec<Reference>,
    pub encounter: Option<Reference>,
    pub date: Option<Primitive<DateTime>>,
    pub source: Option<Reference>,
    pub ordered_by: Option<CodeableConcept>,
    pub note: Vec<Annotation>,
    pub entry: Vec<ListEntry>,
    pub empty_reason: Option<CodeableConcept>,
    pub unknown: JsonMap,
}

impl List {
    pub const TYPE: &'static str = "List";
}

impl FhirDecode for List {
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
            mode: obj.prim_req("mode")?,
            title: obj.prim("title")?,
            code: obj.complex("code")?,
            subject: obj.complex_vec("subject")?,
            encounter: obj.complex("encounter")?,
            date: obj.prim("date")?,
            source: obj.complex("source")?,
            ordered_by: obj.complex("orderedBy")?,
            note: obj.complex_vec("note")?,
            entry: obj.complex_vec("entry")?,
            empty_reason: obj.complex("emptyReason")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for List {
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
        obj.prim_req("mode", &self.mode)?;
        obj.prim("title", self.title.as_ref())?;
        obj.complex("code", self.code.as_ref())?;
        obj.complex_vec("subject", &self.subject)?;
        obj.complex("encounter", self.encounter.as_ref())?;
        obj.prim("date", self.date.as_ref())?;
        obj.complex("source", self.source.as_ref())?;
        obj.complex("orderedBy", self.ordered_by.as_ref())?;
        obj.complex_vec("note", &self.note)?;
        obj.complex_vec("entry", &self.entry)?;
        obj.complex("emptyReason", self.empty_reason.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// One item in the list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListEntry {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub flag: Option<CodeableConcept>,
    pub deleted: Option<Primitive<bool>>,
    pub date: Option<Primitive<DateTime>>,
    pub item: Reference,
    pub unknown: JsonMap,
}

impl FhirDecode for ListEntry {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            flag: obj.complex("flag")?,
            deleted: obj.prim("deleted")?,
            date: obj.prim("date")?,
            item: obj.complex_req("item")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ListEntry {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("flag", self.flag.as_ref())?;
        obj.prim("deleted", self.deleted.as_ref())?;
        obj.prim("date", self.date.as_ref())?;
        obj.complex("item", Some(&self.item))?;
        Ok(obj.finish(&self.unknown))
    }
}
