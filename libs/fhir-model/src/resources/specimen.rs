//! The Specimen resource.

use crate::datatypes::{
    Annotation, CodeableConcept, CodeableReference, Duration, Identifier, Meta, Narrative,
    Period, Reference, SimpleQuantity,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// collected[x]
#[derive(Debug, Clone, PartialEq)]
pub enum SpecimenCollected {
    DateTime(Primitive<DateTime>),
    Period(Period),
}

const COLLECTED_SLOT: ChoiceSlot = ChoiceSlot {
    base: "collected",
    variants: &["collectedDateTime", "collectedPeriod"],
};

/// fastingStatus[x]
#[derive(Debug, Clone, PartialEq)]
pub enum SpecimenFastingStatus {
    CodeableConcept(CodeableConcept),
    Duration(Duration),
}

const FASTING_SLOT: ChoiceSlot = ChoiceSlot {
    base: "fastingStatus",
    variants: &["fastingStatusCodeableConcept", "fastingStatusDuration"],
};

/// time[x] of a processing step.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecimenProcessingTime {
    DateTime(Primitive<DateTime>),
    Period(Period),
}

const PROCESSING_TIME_SLOT: ChoiceSlot = ChoiceSlot {
    base: "time",
    variants: &["timeDateTime", "timePeriod"],
};

/// A sample for analysis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Specimen {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub accession_identifier: Option<Identifier>,
    /// available | unavailable | unsatisfactory | entered-in-error
    pub status: Option<Primitive<Code>>,
    pub r#type: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub received_time: Option<Primitive<DateTime>>,
    pub parent: Vec<Reference>,
    pub request: Vec<Reference>,
    /// grouped | pooled
    pub combined: Option<Primitive<Code>>,
    pub role: Vec<CodeableConcept>,
    pub feature: Vec<SpecimenFeature>,
    pub collection: Option<SpecimenCollection>,
    pub processing: Vec<SpecimenProcessing>,
    pub container: Vec<SpecimenContainer>,
    pub condition: Vec<CodeableConcept>,
    pub note: Vec<Annotation>,
    pub unknown: JsonMap,
}

impl Specimen {
    pub const TYPE: &'static str = "Specimen";
}

impl FhirDecode for Specimen {
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
            accession_identifier: obj.complex("accessionIdentifier")?,
            status: obj.prim("status")?,
            r#type: obj.complex("type")?,
            subject: obj.complex("subject")?,
            received_time: obj.prim("receivedTime")?,
            parent: obj.complex_vec("parent")?,
            request: obj.complex_vec("request")?,
            combined: obj.prim("combined")?,
            role: obj.complex_vec("role")?,
            feature: obj.complex_vec("feature")?,
            collection: obj.complex("collection")?,
            processing: obj.complex_vec("processing")?,
            container: obj.complex_vec("container")?,
            condition: obj.complex_vec("condition")?,
            note: obj.complex_vec("note")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Specimen {
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
        obj.complex("accessionIdentifier", self.accession_identifier.as_ref())?;
        obj.prim("status", self.status.as_ref())?;
        obj.complex("type", self.r#type.as_ref())?;
        obj.complex("subject", self.subject.as_ref())?;
        obj.prim("receivedTime", self.received_time.as_ref())?;
        obj.complex_vec("parent", &self.parent)?;
        obj.complex_vec("request", &self.request)?;
        obj.prim("combined", self.combined.as_ref())?;
        obj.complex_vec("role", &self.role)?;
        obj.complex_vec("feature", &self.feature)?;
        obj.complex("collection", self.collection.as_ref())?;
        obj.complex_vec("processing", &self.processing)?;
        obj.complex_vec("container", &self.container)?;
        obj.complex_vec("condition", &self.condition)?;
        obj.complex_vec("note", &self.note)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A physical feature distinguishing part of the specimen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecimenFeature {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub r#type: CodeableConcept,
    pub description: Primitive<String>,
    pub unknown: JsonMap,
}

impl FhirDecode for SpecimenFeature {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            r#type: obj.complex_req("type")?,
            description: obj.prim_req("description")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for SpecimenFeature {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("type", Some(&self.r#type))?;
        obj.prim_req("description", &self.description)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Collection details: who, when, from where, how much.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecimenCollection {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub collector: Option<Reference>,
    pub collected: Option<SpecimenCollected>,
    pub duration: Option<Duration>,
    pub quantity: Option<SimpleQuantity>,
    pub method: Option<CodeableConcept>,
    pub device: Option<CodeableReference>,
    pub procedure: Option<Reference>,
    pub body_site: Option<CodeableReference>,
    pub fasting_status: Option<SpecimenFastingStatus>,
    pub unknown: JsonMap,
}

impl FhirDecode for SpecimenCollection {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            collector: obj.complex("collector")?,
            collected: match obj.choice(&COLLECTED_SLOT)? {
                Some("collectedDateTime") => Some(SpecimenCollected::DateTime(
                    obj.prim_req("collectedDateTime")?,
                )),
                Some("collectedPeriod") => Some(SpecimenCollected::Period(
                    obj.complex_req("collectedPeriod")?,
                )),
                _ => None,
            },
            duration: obj.complex("duration")?,
            quantity: obj.complex("quantity")?,
            method: obj.complex("method")?,
            device: obj.complex("device")?,
            procedure: obj.complex("procedure")?,
            body_site: obj.complex("bodySite")?,
            fasting_status: match obj.choice(&FASTING_SLOT)? {
                Some("fastingStatusCodeableConcept") => {
                    Some(SpecimenFastingStatus::CodeableConcept(
                        obj.complex_req("fastingStatusCodeableConcept")?,
                    ))
                }
                Some("fastingStatusDuration") => Some(SpecimenFastingStatus::Duration(
                    obj.complex_req("fastingStatusDuration")?,
                )),
                _ => None,
            },
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for SpecimenCollection {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("collector", self.collector.as_ref())?;
        match &self.collected {
            Some(SpecimenCollected::DateTime(v)) => obj.prim_req("collectedDateTime", v)?,
            Some(SpecimenCollected::Period(v)) => obj.complex("collectedPeriod", Some(v))?,
            None => {}
        }
        obj.complex("duration", self.duration.as_ref())?;
        obj.complex("quantity", self.quantity.as_ref())?;
        obj.complex("method", self.method.as_ref())?;
        obj.complex("device", self.device.as_ref())?;
        obj.complex("procedure", self.procedure.as_ref())?;
        obj.complex("bodySite", self.body_site.as_ref())?;
        match &self.fasting_status {
            Some(SpecimenFastingStatus::CodeableConcept(v)) => {
                obj.complex("fastingStatusCodeableConcept", Some(v))?
            }
            Some(SpecimenFastingStatus::Duration(v)) => {
                obj.complex("fastingStatusDuration", Some(v))?
            }
            None => {}
        }
        Ok(obj.finish(&self.unknown))
    }
}

/// A preparation step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecimenProcessing {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub description: Option<Primitive<String>>,
    pub method: Option<CodeableConcept>,
    pub additive: Vec<Reference>,
    pub time: Option<SpecimenProcessingTime>,
    pub unknown: JsonMap,
}

impl FhirDecode for SpecimenProcessing {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            description: obj.prim("description")?,
            method: obj.complex("method")?,
            additive: obj.complex_vec("additive")?,
            time: match obj.choice(&PROCESSING_TIME_SLOT)? {
                Some("timeDateTime") => Some(SpecimenProcessingTime::DateTime(
                    obj.prim_req("timeDateTime")?,
                )),
                Some("timePeriod") => {
                    Some(SpecimenProcessingTime::Period(obj.complex_req("timePeriod")?))
                }
                _ => None,
            },
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for SpecimenProcessing {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim("description", self.description.as_ref())?;
        obj.complex("method", self.method.as_ref())?;
        obj.complex_vec("additive", &self.additive)?;
        match &self.time {
            Some(SpecimenProcessingTime::DateTime(v)) => obj.prim_req("timeDateTime", v)?,
            Some(SpecimenProcessingTime::Period(v)) => obj.complex("timePeriod", Some(v))?,
            None => {}
        }
        Ok(obj.finish(&self.unknown))
    }
}

/// The container holding the specimen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecimenContainer {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub device: Reference,
    pub location: Option<Reference>,
    pub specimen_quantity: Option<SimpleQuantity>,
    pub unknown: JsonMap,
}

impl FhirDecode for SpecimenContainer {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            device: obj.complex_req("device")?,
            location: obj.complex("location")?,
            specimen_quantity: obj.complex("specimenQuantity")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for SpecimenContainer {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("device", Some(&self.device))?;
        obj.complex("location", self.location.as_ref())?;
        obj.complex("specimenQuantity", self.specimen_quantity.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
