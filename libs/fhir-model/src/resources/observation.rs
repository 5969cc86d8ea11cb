//! The Observation resource.

use crate::datatypes::{
    Annotation, Attachment, CodeableConcept, Identifier, Meta, Narrative, Period, Quantity,
    Range, Ratio, Reference, SampledData, SimpleQuantity, Timing,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Code, DateTime, Id, Instant, Markdown, Time, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// value[x]: the actual result, shared by the resource root and its
/// components.
#[derive(Debug, Clone, PartialEq)]
pub enum ObservationValue {
    Quantity(Quantity),
    CodeableConcept(CodeableConcept),
    String(Primitive<String>),
    Boolean(Primitive<bool>),
    Integer(Primitive<i32>),
    Range(Range),
    Ratio(Ratio),
    SampledData(SampledData),
    Time(Primitive<Time>),
    DateTime(Primitive<DateTime>),
    Period(Period),
    Attachment(Attachment),
}

const VALUE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "value",
    variants: &[
        "valueQuantity",
        "valueCodeableConcept",
        "valueString",
        "valueBoolean",
        "valueInteger",
        "valueRange",
        "valueRatio",
        "valueSampledData",
        "valueTime",
        "valueDateTime",
        "valuePeriod",
        "valueAttachment",
    ],
};

impl ObservationValue {
    /// The populated variant, as the published FHIR type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Quantity(_) => "Quantity",
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Range(_) => "Range",
            Self::Ratio(_) => "Ratio",
            Self::SampledData(_) => "SampledData",
            Self::Time(_) => "time",
            Self::DateTime(_) => "dateTime",
            Self::Period(_) => "Period",
            Self::Attachment(_) => "Attachment",
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Self::Quantity(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&Primitive<String>> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    fn decode_opt(obj: &mut ObjectDecoder) -> DecodeResult<Option<Self>> {
        let Some(name) = obj.choice(&VALUE_SLOT)? else {
            return Ok(None);
        };
        Ok(Some(match name {
            "valueQuantity" => Self::Quantity(obj.complex_req(name)?),
            "valueCodeableConcept" => Self::CodeableConcept(obj.complex_req(name)?),
            "valueString" => Self::String(obj.prim_req(name)?),
            "valueBoolean" => Self::Boolean(obj.prim_req(name)?),
            "valueInteger" => Self::Integer(obj.prim_req(name)?),
            "valueRange" => Self::Range(obj.complex_req(name)?),
            "valueRatio" => Self::Ratio(obj.complex_req(name)?),
            "valueSampledData" => Self::SampledData(obj.complex_req(name)?),
            "valueTime" => Self::Time(obj.prim_req(name)?),
            "valueDateTime" => Self::DateTime(obj.prim_req(name)?),
            "valuePeriod" => Self::Period(obj.complex_req(name)?),
            "valueAttachment" => Self::Attachment(obj.complex_req(name)?),
            other => unreachable!("`{other}` is not in the observation value slot"),
        }))
    }

    fn encode_into(&self, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::Quantity(v) => obj.complex("valueQuantity", Some(v)),
            Self::CodeableConcept(v) => obj.complex("valueCodeableConcept", Some(v)),
            Self::String(v) => obj.prim_req("valueString", v),
            Self::Boolean(v) => obj.prim_req("valueBoolean", v),
            Self::Integer(v) => obj.prim_req("valueInteger", v),
            Self::Range(v) => obj.complex("valueRange", Some(v)),
            Self::Ratio(v) => obj.complex("valueRatio", Some(v)),
            Self::SampledData(v) => obj.complex("valueSampledData", Some(v)),
            Self::Time(v) => obj.prim_req("valueTime", v),
            Self::DateTime(v) => obj.prim_req("valueDateTime", v),
            Self::Period(v) => obj.complex("valuePeriod", Some(v)),
            Self::Attachment(v) => obj.complex("valueAttachment", Some(v)),
        }
    }
}

/// effective[x]: the clinically relevant time of the observation.
#[derive(Debug, Clone, PartialEq)]
pub enum ObservationEffective {
    DateTime(Primitive<DateTime>),
    Period(Period),
    Timing(Timing),
    Instant(Primitive<Instant>),
}

const EFFECTIVE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "effective",
    variants: &[
        "effectiveDateTime",
        "effectivePeriod",
        "effectiveTiming",
        "effectiveInstant",
    ],
};

impl ObservationEffective {
    fn decode_opt(obj: &mut ObjectDecoder) -> DecodeResult<Option<Self>> {
        Ok(match obj.choice(&EFFECTIVE_SLOT)? {
            Some("effectiveDateTime") => {
                Some(Self::DateTime(obj.prim_req("effectiveDateTime")?))
            }
            Some("effectivePeriod") => Some(Self::Period(obj.complex_req("effectivePeriod")?)),
            Some("effectiveTiming") => Some(Self::Timing(obj.complex_req("effectiveTiming")?)),
            Some("effectiveInstant") => Some(Self::Instant(obj.prim_req("effectiveInstant")?)),
            _ => None,
        })
    }

    fn encode_into(&self, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::DateTime(v) => obj.prim_req("effectiveDateTime", v),
            Self::Period(v) => obj.complex("effectivePeriod", Some(v)),
            Self::Timing(v) => obj.complex("effectiveTiming", Some(v)),
            Self::Instant(v) => obj.prim_req("effectiveInstant", v),
        }
    }
}

/// instantiates[x]
#[derive(Debug, Clone, PartialEq)]
pub enum ObservationInstantiates {
    Canonical(Primitive<Canonical>),
    Reference(Reference),
}

const INSTANTIATES_SLOT: ChoiceSlot = ChoiceSlot {
    base: "instantiates",
    variants: &["instantiatesCanonical", "instantiatesReference"],
};

/// Measurements and simple assertions about a subject.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Observation {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub instantiates: Option<ObservationInstantiates>,
    pub based_on: Vec<Reference>,
    pub triggered_by: Vec<ObservationTriggeredBy>,
    pub part_of: Vec<Reference>,
    /// registered | preliminary | final | amended | corrected | cancelled |
    /// entered-in-error | unknown
    pub status: Primitive<Code>,
    pub category: Vec<CodeableConcept>,
    pub code: CodeableConcept,
    pub subject: Option<Reference>,
    pub focus: Vec<Reference>,
    pub encounter: Option<Reference>,
    pub effective: Option<ObservationEffective>,
    pub issued: Option<Primitive<Instant>>,
    pub performer: Vec<Reference>,
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Vec<CodeableConcept>,
    pub note: Vec<Annotation>,
    pub body_site: Option<CodeableConcept>,
    pub body_structure: Option<Reference>,
    pub method: Option<CodeableConcept>,
    pub specimen: Option<Reference>,
    pub device: Option<Reference>,
    pub reference_range: Vec<ObservationReferenceRange>,
    pub has_member: Vec<Reference>,
    pub derived_from: Vec<Reference>,
    pub component: Vec<ObservationComponent>,
    pub unknown: JsonMap,
}

impl Observation {
    pub const TYPE: &'static str = "Observation";
}

impl FhirDecode for Observation {
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
            instantiates: match obj.choice(&INSTANTIATES_SLOT)? {
                Some("instantiatesCanonical") => Some(ObservationInstantiates::Canonical(
                    obj.prim_req("instantiatesCanonical")?,
                )),
                Some("instantiatesReference") => Some(ObservationInstantiates::Reference(
                    obj.complex_req("instantiatesReference")?,
                )),
                _ => None,
            },
            based_on: obj.complex_vec("basedOn")?,
            triggered_by: obj.complex_vec("triggeredBy")?,
            part_of: obj.complex_vec("partOf")?,
            status: obj.prim_req("status")?,
            category: obj.complex_vec("category")?,
            code: obj.complex_req("code")?,
            subject: obj.complex("subject")?,
            focus: obj.complex_vec("focus")?,
            encounter: obj.complex("encounter")?,
            effective: ObservationEffective::decode_opt(&mut obj)?,
            issued: obj.prim("issued")?,
            performer: obj.complex_vec("performer")?,
            value: ObservationValue::decode_opt(&mut obj)?,
            data_absent_reason: obj.complex("dataAbsentReason")?,
            interpretation: obj.complex_vec("interpretation")?,
            note: obj.complex_vec("note")?,
            body_site: obj.complex("bodySite")?,
            body_structure: obj.complex("bodyStructure")?,
            method: obj.complex("method")?,
            specimen: obj.complex("specimen")?,
            device: obj.complex("device")?,
            reference_range: obj.complex_vec("referenceRange")?,
            has_member: obj.complex_vec("hasMember")?,
            derived_from: obj.complex_vec("derivedFrom")?,
            component: obj.complex_vec("component")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Observation {
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
        match &self.instantiates {
            Some(ObservationInstantiates::Canonical(v)) => {
                obj.prim_req("instantiatesCanonical", v)?
            }
            Some(ObservationInstantiates::Reference(v)) => {
                obj.complex("instantiatesReference", Some(v))?
            }
            None => {}
        }
        obj.complex_vec("basedOn", &self.based_on)?;
        obj.complex_vec("triggeredBy", &self.triggered_by)?;
        obj.complex_vec("partOf", &self.part_of)?;
        obj.prim_req("status", &self.status)?;
        obj.complex_vec("category", &self.category)?;
        obj.complex("code", Some(&self.code))?;
        obj.complex("subject", self.subject.as_ref())?;
        obj.complex_vec("focus", &self.focus)?;
        obj.complex("encounter", self.encounter.as_ref())?;
        if let Some(effective) = &self.effective {
            effective.encode_into(&mut obj)?;
        }
        obj.prim("issued", self.issued.as_ref())?;
        obj.complex_vec("performer", &self.performer)?;
        if let Some(value) = &self.value {
            value.encode_into(&mut obj)?;
        }
        obj.complex("dataAbsentReason", self.data_absent_reason.as_ref())?;
        obj.complex_vec("interpretation", &self.interpretation)?;
        obj.complex_vec("note", &self.note)?;
        obj.complex("bodySite", self.body_site.as_ref())?;
        obj.complex("bodyStructure", self.body_structure.as_ref())?;
        obj.complex("method", self.method.as_ref())?;
        obj.complex("specimen", self.specimen.as_ref())?;
        obj.complex("device", self.device.as_ref())?;
        obj.complex_vec("referenceRange", &self.reference_range)?;
        obj.complex_vec("hasMember", &self.has_member)?;
        obj.complex_vec("derivedFrom", &self.derived_from)?;
        obj.complex_vec("component", &self.component)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// What triggered this observation to be made.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationTriggeredBy {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub observation: Reference,
    /// reflex | repeat | re-run
    pub r#type: Primitive<Code>,
    pub reason: Option<Primitive<String>>,
    pub unknown: JsonMap,
}

impl FhirDecode for ObservationTriggeredBy {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            observation: obj.complex_req("observation")?,
            r#type: obj.prim_req("type")?,
            reason: obj.prim("reason")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ObservationTriggeredBy {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("observation", Some(&self.observation))?;
        obj.prim_req("type", &self.r#type)?;
        obj.prim("reason", self.reason.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Guidance on how to interpret the value by comparison to a normal or
/// recommended range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationReferenceRange {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub low: Option<SimpleQuantity>,
    pub high: Option<SimpleQuantity>,
    pub normal_value: Option<CodeableConcept>,
    pub r#type: Option<CodeableConcept>,
    pub applies_to: Vec<CodeableConcept>,
    pub age: Option<Range>,
    pub text: Option<Primitive<Markdown>>,
    pub unknown: JsonMap,
}

impl FhirDecode for ObservationReferenceRange {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            low: obj.complex("low")?,
            high: obj.complex("high")?,
            normal_value: obj.complex("normalValue")?,
            r#type: obj.complex("type")?,
            applies_to: obj.complex_vec("appliesTo")?,
            age: obj.complex("age")?,
            text: obj.prim("text")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ObservationReferenceRange {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("low", self.low.as_ref())?;
        obj.complex("high", self.high.as_ref())?;
        obj.complex("normalValue", self.normal_value.as_ref())?;
        obj.complex("type", self.r#type.as_ref())?;
        obj.complex_vec("appliesTo", &self.applies_to)?;
        obj.complex("age", self.age.as_ref())?;
        obj.prim("text", self.text.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Component results, for observations with multiple tuples (for example a
/// blood pressure panel).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationComponent {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub code: CodeableConcept,
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Vec<CodeableConcept>,
    pub reference_range: Vec<ObservationReferenceRange>,
    pub unknown: JsonMap,
}

impl FhirDecode for ObservationComponent {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            code: obj.complex_req("code")?,
            value: ObservationValue::decode_opt(&mut obj)?,
            data_absent_reason: obj.complex("dataAbsentReason")?,
            interpretation: obj.complex_vec("interpretation")?,
            reference_range: obj.complex_vec("referenceRange")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ObservationComponent {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("code", Some(&self.code))?;
        if let Some(value) = &self.value {
            value.encode_into(&mut obj)?;
        }
        obj.complex("dataAbsentReason", self.data_absent_reason.as_ref())?;
        obj.complex_vec("interpretation", &self.interpretation)?;
        obj.complex_vec("referenceRange", &self.reference_range)?;
        Ok(obj.finish(&self.unknown))
    }
}
