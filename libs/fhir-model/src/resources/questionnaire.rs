//! The Questionnaire resource, with its recursive item backbone.

use crate::datatypes::{
    Attachment, CodeableConcept, Coding, ContactDetail, Identifier, Meta, Narrative, Period,
    Quantity, Reference, UsageContext,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Code, Date, DateTime, Decimal, Id, Markdown, Time, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// versionAlgorithm[x]
#[derive(Debug, Clone, PartialEq)]
pub enum VersionAlgorithm {
    String(Primitive<String>),
    Coding(Coding),
}

const VERSION_ALGORITHM_SLOT: ChoiceSlot = ChoiceSlot {
    base: "versionAlgorithm",
    variants: &["versionAlgorithmString", "versionAlgorithmCoding"],
};

/// A structured set of questions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Questionnaire {
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
    pub version_algorithm: Option<VersionAlgorithm>,
    pub name: Option<Primitive<String>>,
    pub title: Option<Primitive<String>>,
    pub derived_from: Vec<Primitive<Canonical>>,
    /// draft | active | retired | unknown
    pub status: Primitive<Code>,
    pub experimental: Option<Primitive<bool>>,
    pub subject_type: Vec<Primitive<Code>>,
    pub date: Option<Primitive<DateTime>>,
    pub publisher: Option<Primitive<String>>,
    pub contact: Vec<ContactDetail>,
    pub description: Option<Primitive<Markdown>>,
    pub use_context: Vec<UsageContext>,
    pub jurisdiction: Vec<CodeableConcept>,
    pub purpose: Option<Primitive<Markdown>>,
    pub copyright: Option<Primitive<Markdown>>,
    pub copyright_label: Option<Primitive<String>>,
    pub approval_date: Option<Primitive<Date>>,
    pub last_review_date: Option<Primitive<Date>>,
    pub effective_period: Option<Period>,
    pub code: Vec<Coding>,
    pub item: Vec<QuestionnaireItem>,
    pub unknown: JsonMap,
}

impl Questionnaire {
    pub const TYPE: &'static str = "Questionnaire";
}

impl FhirDecode for Questionnaire {
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
            version_algorithm: match obj.choice(&VERSION_ALGORITHM_SLOT)? {
                Some("versionAlgorithmString") => Some(VersionAlgorithm::String(
                    obj.prim_req("versionAlgorithmString")?,
                )),
                Some("versionAlgorithmCoding") => Some(VersionAlgorithm::Coding(
                    obj.complex_req("versionAlgorithmCoding")?,
                )),
                _ => None,
            },
            name: obj.prim("name")?,
            title: obj.prim("title")?,
            derived_from: obj.prim_vec("derivedFrom")?,
            status: obj.prim_req("status")?,
            experimental: obj.prim("experimental")?,
            subject_type: obj.prim_vec("subjectType")?,
            date: obj.prim("date")?,
            publisher: obj.prim("publisher")?,
            contact: obj.complex_vec("contact")?,
            description: obj.prim("description")?,
            use_context: obj.complex_vec("useContext")?,
            jurisdiction: obj.complex_vec("jurisdiction")?,
            purpose: obj.prim("purpose")?,
            copyright: obj.prim("copyright")?,
            copyright_label: obj.prim("copyrightLabel")?,
            approval_date: obj.prim("approvalDate")?,
            last_review_date: obj.prim("lastReviewDate")?,
            effective_period: obj.complex("effectivePeriod")?,
            code: obj.complex_vec("code")?,
            item: obj.complex_vec("item")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Questionnaire {
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
        match &self.version_algorithm {
            Some(VersionAlgorithm::String(v)) => obj.prim_req("versionAlgorithmString", v)?,
            Some(VersionAlgorithm::Coding(v)) => obj.complex("versionAlgorithmCoding", Some(v))?,
            None => {}
        }
        obj.prim("name", self.name.as_ref())?;
        obj.prim("title", self.title.as_ref())?;
        obj.prim_vec("derivedFrom", &self.derived_from)?;
        obj.prim_req("status", &self.status)?;
        obj.prim("experimental", self.experimental.as_ref())?;
        obj.prim_vec("subjectType", &self.subject_type)?;
        obj.prim("date", self.date.as_ref())?;
        obj.prim("publisher", self.publisher.as_ref())?;
        obj.complex_vec("contact", &self.contact)?;
        obj.prim("description", self.description.as_ref())?;
        obj.complex_vec("useContext", &self.use_context)?;
        obj.complex_vec("jurisdiction", &self.jurisdiction)?;
        obj.prim("purpose", self.purpose.as_ref())?;
        obj.prim("copyright", self.copyright.as_ref())?;
        obj.prim("copyrightLabel", self.copyright_label.as_ref())?;
        obj.prim("approvalDate", self.approval_date.as_ref())?;
        obj.prim("lastReviewDate", self.last_review_date.as_ref())?;
        obj.complex("effectivePeriod", self.effective_period.as_ref())?;
        obj.complex_vec("code", &self.code)?;
        obj.complex_vec("item", &self.item)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// answer[x] of an enable-when condition.
#[derive(Debug, Clone, PartialEq)]
pub enum EnableWhenAnswer {
    Boolean(Primitive<bool>),
    Decimal(Primitive<Decimal>),
    Integer(Primitive<i32>),
    Date(Primitive<Date>),
    DateTime(Primitive<DateTime>),
    Time(Primitive<Time>),
    String(Primitive<String>),
    Coding(Coding),
    Quantity(Quantity),
    Reference(Reference),
}

const ENABLE_WHEN_ANSWER_SLOT: ChoiceSlot = ChoiceSlot {
    base: "answer",
    variants: &[
        "answerBoolean",
        "answerDecimal",
        "answerInteger",
        "answerDate",
        "answerDateTime",
        "answerTime",
        "answerString",
        "answerCoding",
        "answerQuantity",
        "answerReference",
    ],
};

/// value[x] of an answer option.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOptionValue {
    Integer(Primitive<i32>),
    Date(Primitive<Date>),
    Time(Primitive<Time>),
    String(Primitive<String>),
    Coding(Coding),
    Reference(Reference),
}

const ANSWER_OPTION_VALUE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "value",
    variants: &[
        "valueInteger",
        "valueDate",
        "valueTime",
        "valueString",
        "valueCoding",
        "valueReference",
    ],
};

/// value[x] of an initial answer.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionnaireInitialValue {
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

const INITIAL_VALUE_SLOT: ChoiceSlot = ChoiceSlot {
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

impl QuestionnaireInitialValue {
    pub(crate) fn decode_req(obj: &mut ObjectDecoder) -> DecodeResult<Self> {
        Ok(match obj.choice_req(&INITIAL_VALUE_SLOT)? {
            "valueBoolean" => Self::Boolean(obj.prim_req("valueBoolean")?),
            "valueDecimal" => Self::Decimal(obj.prim_req("valueDecimal")?),
            "valueInteger" => Self::Integer(obj.prim_req("valueInteger")?),
            "valueDate" => Self::Date(obj.prim_req("valueDate")?),
            "valueDateTime" => Self::DateTime(obj.prim_req("valueDateTime")?),
            "valueTime" => Self::Time(obj.prim_req("valueTime")?),
            "valueString" => Self::String(obj.prim_req("valueString")?),
            "valueUri" => Self::Uri(obj.prim_req("valueUri")?),
            "valueAttachment" => Self::Attachment(obj.complex_req("valueAttachment")?),
            "valueCoding" => Self::Coding(obj.complex_req("valueCoding")?),
            "valueQuantity" => Self::Quantity(obj.complex_req("valueQuantity")?),
            "valueReference" => Self::Reference(obj.complex_req("valueReference")?),
            other => unreachable!("`{other}` is not in the initial value slot"),
        })
    }

    pub(crate) fn encode_into(&self, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::Boolean(v) => obj.prim_req("valueBoolean", v),
            Self::Decimal(v) => obj.prim_req("valueDecimal", v),
            Self::Integer(v) => obj.prim_req("valueInteger", v),
            Self::Date(v) => obj.prim_req("valueDate", v),
            Self::DateTime(v) => obj.prim_req("valueDateTime", v),
            Self::Time(v) => obj.prim_req("valueTime", v),
            Self::String(v) => obj.prim_req("valueString", v),
            Self::Uri(v) => obj.prim_req("valueUri", v),
            Self::Attachment(v) => obj.complex("valueAttachment", Some(v)),
            Self::Coding(v) => obj.complex("valueCoding", Some(v)),
            Self::Quantity(v) => obj.complex("valueQuantity", Some(v)),
            Self::Reference(v) => obj.complex("valueReference", Some(v)),
        }
    }
}

/// One question or group; items nest, bounded at decode time by
/// `DecodeOptions::max_depth`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionnaireItem {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub link_id: Primitive<String>,
    pub definition: Option<Primitive<Uri>>,
    pub code: Vec<Coding>,
    pub prefix: Option<Primitive<String>>,
    pub text: Option<Primitive<String>>,
    /// group | display | boolean | decimal | integer | date | dateTime |
    /// time | string | text | url | coding | attachment | reference |
    /// quantity | question
    pub r#type: Primitive<Code>,
    pub enable_when: Vec<QuestionnaireItemEnableWhen>,
    /// all | any
    pub enable_behavior: Option<Primitive<Code>>,
    /// hidden | protected
    pub disabled_display: Option<Primitive<Code>>,
    pub required: Option<Primitive<bool>>,
    pub repeats: Option<Primitive<bool>>,
    pub read_only: Option<Primitive<bool>>,
    pub max_length: Option<Primitive<i32>>,
    /// optionsOnly | optionsOrType | optionsOrString
    pub answer_constraint: Option<Primitive<Code>>,
    pub answer_value_set: Option<Primitive<Canonical>>,
    pub answer_option: Vec<QuestionnaireItemAnswerOption>,
    pub initial: Vec<QuestionnaireItemInitial>,
    pub item: Vec<QuestionnaireItem>,
    pub unknown: JsonMap,
}

impl FhirDecode for QuestionnaireItem {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            link_id: obj.prim_req("linkId")?,
            definition: obj.prim("definition")?,
            code: obj.complex_vec("code")?,
            prefix: obj.prim("prefix")?,
            text: obj.prim("text")?,
            r#type: obj.prim_req("type")?,
            enable_when: obj.complex_vec("enableWhen")?,
            enable_behavior: obj.prim("enableBehavior")?,
            disabled_display: obj.prim("disabledDisplay")?,
            required: obj.prim("required")?,
            repeats: obj.prim("repeats")?,
            read_only: obj.prim("readOnly")?,
            max_length: obj.prim("maxLength")?,
            answer_constraint: obj.prim("answerConstraint")?,
            answer_value_set: obj.prim("answerValueSet")?,
            answer_option: obj.complex_vec("answerOption")?,
            initial: obj.complex_vec("initial")?,
            item: obj.complex_vec("item")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for QuestionnaireItem {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("linkId", &self.link_id)?;
        obj.prim("definition", self.definition.as_ref())?;
        obj.complex_vec("code", &self.code)?;
        obj.prim("prefix", self.prefix.as_ref())?;
        obj.prim("text", self.text.as_ref())?;
        obj.prim_req("type", &self.r#type)?;
        obj.complex_vec("enableWhen", &self.enable_when)?;
        obj.prim("enableBehavior", self.enable_behavior.as_ref())?;
        obj.prim("disabledDisplay", self.disabled_display.as_ref())?;
        obj.prim("required", self.required.as_ref())?;
        obj.prim("repeats", self.repeats.as_ref())?;
        obj.prim("readOnly", self.read_only.as_ref())?;
        obj.prim("maxLength", self.max_length.as_ref())?;
        obj.prim("answerConstraint", self.answer_constraint.as_ref())?;
        obj.prim("answerValueSet", self.answer_value_set.as_ref())?;
        obj.complex_vec("answerOption", &self.answer_option)?;
        obj.complex_vec("initial", &self.initial)?;
        obj.complex_vec("item", &self.item)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Display condition based on another question's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireItemEnableWhen {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub question: Primitive<String>,
    /// exists | = | != | > | < | >= | <=
    pub operator: Primitive<Code>,
    pub answer: EnableWhenAnswer,
    pub unknown: JsonMap,
}

impl FhirDecode for QuestionnaireItemEnableWhen {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let extension = obj.extensions()?;
        let modifier_extension = obj.modifier_extensions()?;
        let question = obj.prim_req("question")?;
        let operator = obj.prim_req("operator")?;
        let answer = match obj.choice_req(&ENABLE_WHEN_ANSWER_SLOT)? {
            "answerBoolean" => EnableWhenAnswer::Boolean(obj.prim_req("answerBoolean")?),
            "answerDecimal" => EnableWhenAnswer::Decimal(obj.prim_req("answerDecimal")?),
            "answerInteger" => EnableWhenAnswer::Integer(obj.prim_req("answerInteger")?),
            "answerDate" => EnableWhenAnswer::Date(obj.prim_req("answerDate")?),
            "answerDateTime" => EnableWhenAnswer::DateTime(obj.prim_req("answerDateTime")?),
            "answerTime" => EnableWhenAnswer::Time(obj.prim_req("answerTime")?),
            "answerString" => EnableWhenAnswer::String(obj.prim_req("answerString")?),
            "answerCoding" => EnableWhenAnswer::Coding(obj.complex_req("answerCoding")?),
            "answerQuantity" => EnableWhenAnswer::Quantity(obj.complex_req("answerQuantity")?),
            "answerReference" => {
                EnableWhenAnswer::Reference(obj.complex_req("answerReference")?)
            }
            other => unreachable!("`{other}` is not in the enable-when answer slot"),
        };
        let unknown = obj.finish()?;
        Ok(Self {
            id,
            extension,
            modifier_extension,
            question,
            operator,
            answer,
            unknown,
        })
    }
}

impl FhirEncode for QuestionnaireItemEnableWhen {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("question", &self.question)?;
        obj.prim_req("operator", &self.operator)?;
        match &self.answer {
            EnableWhenAnswer::Boolean(v) => obj.prim_req("answerBoolean", v)?,
            EnableWhenAnswer::Decimal(v) => obj.prim_req("answerDecimal", v)?,
            EnableWhenAnswer::Integer(v) => obj.prim_req("answerInteger", v)?,
            EnableWhenAnswer::Date(v) => obj.prim_req("answerDate", v)?,
            EnableWhenAnswer::DateTime(v) => obj.prim_req("answerDateTime", v)?,
            EnableWhenAnswer::Time(v) => obj.prim_req("answerTime", v)?,
            EnableWhenAnswer::String(v) => obj.prim_req("answerString", v)?,
            EnableWhenAnswer::Coding(v) => obj.complex("answerCoding", Some(v))?,
            EnableWhenAnswer::Quantity(v) => obj.complex("answerQuantity", Some(v))?,
            EnableWhenAnswer::Reference(v) => obj.complex("answerReference", Some(v))?,
        }
        Ok(obj.finish(&self.unknown))
    }
}

/// A permitted answer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireItemAnswerOption {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub value: AnswerOptionValue,
    pub initial_selected: Option<Primitive<bool>>,
    pub unknown: JsonMap,
}

impl FhirDecode for QuestionnaireItemAnswerOption {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let extension = obj.extensions()?;
        let modifier_extension = obj.modifier_extensions()?;
        let value = match obj.choice_req(&ANSWER_OPTION_VALUE_SLOT)? {
            "valueInteger" => AnswerOptionValue::Integer(obj.prim_req("valueInteger")?),
            "valueDate" => AnswerOptionValue::Date(obj.prim_req("valueDate")?),
            "valueTime" => AnswerOptionValue::Time(obj.prim_req("valueTime")?),
            "valueString" => AnswerOptionValue::String(obj.prim_req("valueString")?),
            "valueCoding" => AnswerOptionValue::Coding(obj.complex_req("valueCoding")?),
            "valueReference" => AnswerOptionValue::Reference(obj.complex_req("valueReference")?),
            other => unreachable!("`{other}` is not in the answer option value slot"),
        };
        let initial_selected = obj.prim("initialSelected")?;
        let unknown = obj.finish()?;
        Ok(Self {
            id,
            extension,
            modifier_extension,
            value,
            initial_selected,
            unknown,
        })
    }
}

impl FhirEncode for QuestionnaireItemAnswerOption {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        match &self.value {
            AnswerOptionValue::Integer(v) => obj.prim_req("valueInteger", v)?,
            AnswerOptionValue::Date(v) => obj.prim_req("valueDate", v)?,
            AnswerOptionValue::Time(v) => obj.prim_req("valueTime", v)?,
            AnswerOptionValue::String(v) => obj.prim_req("valueString", v)?,
            AnswerOptionValue::Coding(v) => obj.complex("valueCoding", Some(v))?,
            AnswerOptionValue::Reference(v) => obj.complex("valueReference", Some(v))?,
        }
        obj.prim("initialSelected", self.initial_selected.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// An initial value for the question when the form is first rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireItemInitial {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub value: QuestionnaireInitialValue,
    pub unknown: JsonMap,
}

impl FhirDecode for QuestionnaireItemInitial {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let extension = obj.extensions()?;
        let modifier_extension = obj.modifier_extensions()?;
        let value = QuestionnaireInitialValue::decode_req(&mut obj)?;
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

impl FhirEncode for QuestionnaireItemInitial {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        self.value.encode_into(&mut obj)?;
        Ok(obj.finish(&self.unknown))
    }
}
