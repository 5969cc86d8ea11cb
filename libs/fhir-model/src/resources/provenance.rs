//! The Provenance resource.

use crate::datatypes::{
    CodeableConcept, CodeableReference, Meta, Narrative, Period, Reference, Signature,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Instant, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// occurred[x]
#[derive(Debug, Clone, PartialEq)]
pub enum ProvenanceOccurred {
    Period(Period),
    DateTime(Primitive<DateTime>),
}

const OCCURRED_SLOT: ChoiceSlot = ChoiceSlot {
    base: "occurred",
    variants: &["occurredPeriod", "occurredDateTime"],
};

/// Who, what and when for a set of resources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Provenance {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub target: Vec<Reference>,
    pub occurred: Option<ProvenanceOccurred>,
    pub recorded: Option<Primitive<Instant>>,
    pub policy: Vec<Primitive<Uri>>,
    pub location: Option<Reference>,
    pub authorization: Vec<CodeableReference>,
    pub activity: Option<CodeableConcept>,
    pub based_on: Vec<Reference>,
    pub patient: Option<Reference>,
    pub encounter: Option<Reference>,
    pub agent: Vec<ProvenanceAgent>,
    pub entity: Vec<ProvenanceEntity>,
    pub signature: Vec<Signature>,
    pub unknown: JsonMap,
}

impl Provenance {
    pub const TYPE: &'static str = "Provenance";
}

impl FhirDecode for Provenance {
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
            target: obj.complex_vec1("target")?,
            occurred: match obj.choice(&OCCURRED_SLOT)? {
                Some("occurredPeriod") => Some(ProvenanceOccurred::Period(
                    obj.complex_req("occurredPeriod")?,
                )),
                Some("occurredDateTime") => Some(ProvenanceOccurred::DateTime(
                    obj.prim_req("occurredDateTime")?,
                )),
                _ => None,
            },
            recorded: obj.prim("recorded")?,
            policy: obj.prim_vec("policy")?,
            location: obj.complex("location")?,
            authorization: obj.complex_vec("authorization")?,
            activity: obj.complex("activity")?,
            based_on: obj.complex_vec("basedOn")?,
            patient: obj.complex("patient")?,
            encounter: obj.complex("encounter")?,
            agent: obj.complex_vec1("agent")?,
            entity: obj.complex_vec("entity")?,
            signature: obj.complex_vec("signature")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Provenance {
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
        obj.complex_vec("target", &self.target)?;
        match &self.occurred {
            Some(ProvenanceOccurred::Period(v)) => obj.complex("occurredPeriod", Some(v))?,
            Some(ProvenanceOccurred::DateTime(v)) => obj.prim_req("occurredDateTime", v)?,
            None => {}
        }
        obj.prim("recorded", self.recorded.as_ref())?;
        obj.prim_vec("policy", &self.policy)?;
        obj.complex("location", self.location.as_ref())?;
        obj.complex_vec("authorization", &self.authorization)?;
        obj.complex("activity", self.activity.as_ref())?;
        obj.complex_vec("basedOn", &self.based_on)?;
        obj.complex("patient", self.patient.as_ref())?;
        obj.complex("encounter", self.encounter.as_ref())?;
        obj.complex_vec("agent", &self.agent)?;
        obj.complex_vec("entity", &self.entity)?;
        obj.complex_vec("signature", &self.signature)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// An actor taking a role in the activity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProvenanceAgent {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub r#type: Option<CodeableConcept>,
    pub role: Vec<CodeableConcept>,
    pub who: Reference,
    pub on_behalf_of: Option<Reference>,
    pub unknown: JsonMap,
}

impl FhirDecode for ProvenanceAgent {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            r#type: obj.complex("type")?,
            role: obj.complex_vec("role")?,
            who: obj.complex_req("who")?,
            on_behalf_of: obj.complex("onBehalfOf")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ProvenanceAgent {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("type", self.r#type.as_ref())?;
        obj.complex_vec("role", &self.role)?;
        obj.complex("who", Some(&self.who))?;
        obj.complex("onBehalfOf", self.on_behalf_of.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// An entity used or generated by the activity. Nested agents share the
/// agent backbone shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProvenanceEntity {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// revision | quotation | source | instantiates | removal
    pub role: Primitive<Code>,
    pub what: Reference,
    pub agent: Vec<ProvenanceAgent>,
    pub unknown: JsonMap,
}

impl FhirDecode for ProvenanceEntity {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            role: obj.prim_req("role")?,
            what: obj.complex_req("what")?,
            agent: obj.complex_vec("agent")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ProvenanceEntity {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("role", &self.role)?;
        obj.complex("what", Some(&self.what))?;
        obj.complex_vec("agent", &self.agent)?;
        Ok(obj.finish(&self.unknown))
    }
}
