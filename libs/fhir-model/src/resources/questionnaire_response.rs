//! The QuestionnaireResponse resource, with its mutually recursive
//! item/answer backbones.

use crate::datatypes::{Attachment, Coding, Identifier, Meta, Narrative, Quantity, Reference};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Code, Date, DateTime, Decimal, Id, Time, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// value[x] of an answer.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionnaireResponseAnswerValue {
    Boolean(Primitive<bool>),
    Decimal(Primitive<Decimal>),
    Integer(Primitive<i32>),
    Date(Primitive<Date>),
    DateTime(Primitive<DateTime>),
    Time(Primitive<Time>),
    String(Primitive<String>),
    Uri(Primitive<Uri>),
    Attachment(Attachment),
    Coding(Coding),
    Quantity(Quantity),
    Reference(Reference),
}

const ANSWER_VALUE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "value",
    variants: &[
        "valueBoolean",
        "valueDecimal",
        "valueInteger",
        "valueDate",
        "valueDateTime",
        "valueTime",
        "valueString",
        "valueUri",
        "valueAttachment",
        "valueCoding",
        "valueQuantity",
        "valueReference",
    ],
};

/// A structured set of answers to a questionnaire.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionnaireResponse {
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
    pub part_of: Vec<Reference>,
    pub questionnaire: Primitive<Canonical>,
    /// in-progress | completed | amended | entered-in-error | stopped
    pub status: Primitive<Code>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    pub authored: Option<Primitive<DateTime>>,
    pub author: Option<Reference>,
    pub source: Option<Reference>,
    pub item: Vec<QuestionnaireResponseItem>,
    pub unknown: JsonMap,
}

impl QuestionnaireResponse {
    pub const TYPE: &'static str = "QuestionnaireResponse";
}

impl FhirDecode for QuestionnaireResponse {
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
            part_of: obj.complex_vec("partOf")?,
            questionnaire: obj.prim_req("questionnaire")?,
            status: obj.prim_req("status")?,
            subject: obj.complex("subject")?,
            encounter: obj.complex("encounter")?,
            authored: obj.prim("authored")?,
            author: obj.complex("author")?,
            source: obj.complex("source")?,
            item: obj.complex_vec("item")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for QuestionnaireResponse {
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
        obj.complex_vec("partOf", &self.part_of)?;
        obj.prim_req("questionnaire", &self.questionnaire)?;
        obj.prim_req("status", &self.status)?;
        obj.complex("subject", self.subject.as_ref())?;
        obj.complex("encounter", self.encounter.as_ref())?;
        obj.prim("authored", self.authored.as_ref())?;
        obj.complex("author", self.author.as_ref())?;
        obj.complex("source", self.source.as_ref())?;
        obj.complex_vec("item", &self.item)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Answers grouped by question; items and answers nest into each other,
/// bounded at decode time by `DecodeOptions::max_depth`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionnaireResponseItem {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub link_id: Primitive<String>,
    pub definition: Option<Primitive<Uri>>,
    pub text: Option<Primitive<String>>,
    pub answer: Vec<QuestionnaireResponseItemAnswer>,
    pub item: Vec<QuestionnaireResponseItem>,
    pub unknown: JsonMap,
}

impl FhirDecode for QuestionnaireResponseItem {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            link_id: obj.prim_req("linkId")?,
            definition: obj.prim("definition")?,
            text: obj.prim("text")?,
            answer: obj.complex_vec("answer")?,
            item: obj.complex_vec("item")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for QuestionnaireResponseItem {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("linkId", &self.link_id)?;
        obj.prim("definition", self.definition.as_ref())?;
        obj.prim("text", self.text.as_ref())?;
        obj.complex_vec("answer", &self.answer)?;
        obj.complex_vec("item", &self.item)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// One answer to a question, possibly with nested group items.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireResponseItemAnswer {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub value: QuestionnaireResponseAnswerValue,
    pub item: Vec<QuestionnaireResponseItem>,
    pub unknown: JsonMap,
}

impl FhirDecode for QuestionnaireResponseItemAnswer {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let extension = obj.extensions()?;
        let modifier_extension = obj.modifier_extensions()?;
        let value = match obj.choice_req(&ANSWER_VALUE_SLOT)? {
            "valueBoolean" => {
                QuestionnaireResponseAnswerValue::Boolean(obj.prim_req("valueBoolean")?)
            }
            "valueDecimal" => {
                QuestionnaireResponseAnswerValue::Decimal(obj.prim_req("valueDecimal")?)
            }
            "valueInteger" => {
                QuestionnaireResponseAnswerValue::Integer(obj.prim_req("valueInteger")?)
            }
            "valueDate" => QuestionnaireResponseAnswerValue::Date(obj.prim_req("valueDate")?),
            "valueDateTime" => {
                QuestionnaireResponseAnswerValue::DateTime(obj.prim_req("valueDateTime")?)
            }
            "valueTime" => QuestionnaireResponseAnswerValue::Time(obj.prim_req("valueTime")?),
            "valueString" => {
                QuestionnaireResponseAnswerValue::String(obj.prim_req("valueString")?)
            }
            "valueUri" => QuestionnaireResponseAnswerValue::Uri(obj.prim_req("valueUri")?),
            "valueAttachment" => {
                QuestionnaireResponseAnswerValue::Attachment(obj.complex_req("valueAttachment")?)
            }
            "valueCoding" => {
                QuestionnaireResponseAnswerValue::Coding(obj.complex_req("valueCoding")?)
            }
            "valueQuantity" => {
                QuestionnaireResponseAnswerValue::Quantity(obj.complex_req("valueQuantity")?)
            }
            "valueReference" => {
                QuestionnaireResponseAnswerValue::Reference(obj.complex_req("valueReference")?)
            }
            other => unreachable!("`{other}` is not in the answer value slot"),
        };
        let item = obj.complex_vec("item")?;
        let unknown = obj.finish()?;
        Ok(Self {
            id,
            extension,
            modifier_extension,
            value,
            item,
            unknown,
        })
    }
}

impl FhirEncode for QuestionnaireResponseItemAnswer {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        match &self.value {
            QuestionnaireResponseAnswerValue::Boolean(v) => obj.prim_req("valueBoolean", v)?,
            QuestionnaireResponseAnswerValue::Decimal(v) => obj.prim_req("valueDecimal", v)?,
            QuestionnaireResponseAnswerValue::Integer(v) => obj.prim_req("valueInteger", v)?,
            QuestionnaireResponseAnswerValue::Date(v) => obj.prim_req("valueDate", v)?,
            QuestionnaireResponseAnswerValue::DateTime(v) => obj.prim_req("valueDateTime", v)?,
            QuestionnaireResponseAnswerValue::Time(v) => obj.prim_req("valueTime", v)?,
            QuestionnaireResponseAnswerValue::String(v) => obj.prim_req("valueString", v)?,
            QuestionnaireResponseAnswerValue::Uri(v) => obj.prim_req("valueUri", v)?,
            QuestionnaireResponseAnswerValue::Attachment(v) => {
                obj.complex("valueAttachment", Some(v))?
            }
            QuestionnaireResponseAnswerValue::Coding(v) => obj.complex("valueCoding", Some(v))?,
            QuestionnaireResponseAnswerValue::Quantity(v) => {
                obj.complex("valueQuantity", Some(v))?
            }
            QuestionnaireResponseAnswerValue::Reference(v) => {
                obj.complex("valueReference", Some(v))?
            }
        }
        obj.complex_vec("item", &self.item)?;
        Ok(obj.finish(&self.unknown))
    }
}
