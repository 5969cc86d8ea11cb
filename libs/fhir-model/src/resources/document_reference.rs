//! The DocumentReference resource.

use crate::datatypes::{
    Attachment, CodeableConcept, CodeableReference, Coding, Identifier, Meta, Narrative, Period,
    Reference,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Code, DateTime, Id, Instant, Markdown, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// value[x] of a content profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentProfileValue {
    Coding(Coding),
    Uri(Primitive<Uri>),
    Canonical(Primitive<Canonical>),
}

const PROFILE_VALUE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "value",
    variants: &["valueCoding", "valueUri", "valueCanonical"],
};

/// A reference to a document of any kind, for any purpose.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentReference {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub version: Option<Primitive<String>>,
    pub based_on: Vec<Reference>,
    /// current | superseded | entered-in-error
    pub status: Primitive<Code>,
    /// registered | partial | preliminary | final | amended | corrected |
    /// appended | cancelled | entered-in-error | deprecated | unknown
    pub doc_status: Option<Primitive<Code>>,
    pub modality: Vec<CodeableConcept>,
    pub r#type: Option<CodeableConcept>,
    pub category: Vec<CodeableConcept>,
    pub subject: Option<Reference>,
    pub context: Vec<Reference>,
    pub event: Vec<CodeableReference>,
    pub body_site: Vec<CodeableReference>,
    pub facility_type: Option<CodeableConcept>,
    pub practice_setting: Option<CodeableConcept>,
    pub period: Option<Period>,
    pub date: Option<Primitive<Instant>>,
    pub author: Vec<Reference>,
    pub attester: Vec<DocumentReferenceAttester>,
    pub custodian: Option<Reference>,
    pub relates_to: Vec<DocumentReferenceRelatesTo>,
    pub description: Option<Primitive<Markdown>>,
    pub security_label: Vec<CodeableConcept>,
    pub content: Vec<DocumentReferenceContent>,
    pub unknown: JsonMap,
}

impl DocumentReference {
    pub const TYPE: &'static str = "DocumentReference";
}

impl FhirDecode for DocumentReference {
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
            version: obj.prim("version")?,
            based_on: obj.complex_vec("basedOn")?,
            status: obj.prim_req("status")?,
            doc_status: obj.prim("docStatus")?,
            modality: obj.complex_vec("modality")?,
            r#type: obj.complex("type")?,
            category: obj.complex_vec("category")?,
            subject: obj.complex("subject")?,
            context: obj.complex_vec("context")?,
            event: obj.complex_vec("event")?,
            body_site: obj.complex_vec("bodySite")?,
            facility_type: obj.complex("facilityType")?,
            practice_setting: obj.complex("practiceSetting")?,
            period: obj.complex("period")?,
            date: obj.prim("date")?,
            author: obj.complex_vec("author")?,
            attester: obj.complex_vec("attester")?,
            custodian: obj.complex("custodian")?,
            relates_to: obj.complex_vec("relatesTo")?,
            description: obj.prim("description")?,
            security_label: obj.complex_vec("securityLabel")?,
            content: obj.complex_vec1("content")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DocumentReference {
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
        obj.prim("version", self.version.as_ref())?;
        obj.complex_vec("basedOn", &self.based_on)?;
        obj.prim_req("status", &self.status)?;
        obj.prim("docStatus", self.doc_status.as_ref())?;
        obj.complex_vec("modality", &self.modality)?;
        obj.complex("type", self.r#type.as_ref())?;
        obj.complex_vec("category", &self.category)?;
        obj.complex("subject", self.subject.as_ref())?;
        obj.complex_vec("context", &self.context)?;
        obj.complex_vec("event", &self.event)?;
        obj.complex_vec("bodySite", &self.body_site)?;
        obj.complex("facilityType", self.facility_type.as_ref())?;
        obj.complex("practiceSetting", self.practice_setting.as_ref())?;
        obj.complex("period", self.period.as_ref())?;
        obj.prim("date", self.date.as_ref())?;
        obj.complex_vec("author", &self.author)?;
        obj.complex_vec("attester", &self.attester)?;
        obj.complex("custodian", self.custodian.as_ref())?;
        obj.complex_vec("relatesTo", &self.relates_to)?;
        obj.prim("description", self.description.as_ref())?;
        obj.complex_vec("securityLabel", &self.security_label)?;
        obj.complex_vec("content", &self.content)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Attestation of the document's accuracy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentReferenceAttester {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub mode: CodeableConcept,
    pub time: Option<Primitive<DateTime>>,
    pub party: Option<Reference>,
    pub unknown: JsonMap,
}

impl FhirDecode for DocumentReferenceAttester {
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

impl FhirEncode for DocumentReferenceAttester {
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

/// A relationship to another document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentReferenceRelatesTo {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub code: CodeableConcept,
    pub target: Reference,
    pub unknown: JsonMap,
}

impl FhirDecode for DocumentReferenceRelatesTo {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            code: obj.complex_req("code")?,
            target: obj.complex_req("target")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DocumentReferenceRelatesTo {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("code", Some(&self.code))?;
        obj.complex("target", Some(&self.target))?;
        Ok(obj.finish(&self.unknown))
    }
}

/// The document or a fragment of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentReferenceContent {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub attachment: Attachment,
    pub profile: Vec<DocumentReferenceContentProfile>,
    pub unknown: JsonMap,
}

impl FhirDecode for DocumentReferenceContent {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            attachment: obj.complex_req("attachment")?,
            profile: obj.complex_vec("profile")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DocumentReferenceContent {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("attachment", Some(&self.attachment))?;
        obj.complex_vec("profile", &self.profile)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A format or profile the content conforms to.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReferenceContentProfile {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub value: ContentProfileValue,
    pub unknown: JsonMap,
}

impl FhirDecode for DocumentReferenceContentProfile {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let extension = obj.extensions()?;
        let modifier_extension = obj.modifier_extensions()?;
        let value = match obj.choice_req(&PROFILE_VALUE_SLOT)? {
            "valueCoding" => ContentProfileValue::Coding(obj.complex_req("valueCoding")?),
            "valueUri" => ContentProfileValue::Uri(obj.prim_req("valueUri")?),
            "valueCanonical" => ContentProfileValue::Canonical(obj.prim_req("valueCanonical")?),
            other => unreachable!("`{other}` is not in the content profile value slot"),
        };
        let unknown = obj.finish()?;
        Ok(Self {
            id,
            extension,
            modifier_extension,
            value,
            unknown,
        })
    }
}

impl FhirEncode for DocumentReferenceContentProfile {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        match &self.value {
            ContentProfileValue::Coding(v) => obj.complex("valueCoding", Some(v))?,
            ContentProfileValue::Uri(v) => obj.prim_req("valueUri", v)?,
            ContentProfileValue::Canonical(v) => obj.prim_req("valueCanonical", v)?,
        }
        Ok(obj.finish(&self.unknown))
    }
}
