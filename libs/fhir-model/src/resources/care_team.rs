//! The CareTeam resource.

use crate::datatypes::{
    Annotation, CodeableConcept, CodeableReference, ContactPoint, Identifier, Meta, Narrative,
    Period, Reference, Timing,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// coverage[x] of a participant.
#[derive(Debug, Clone, PartialEq)]
pub enum CareTeamCoverage {
    Period(Period),
    Timing(Timing),
}

const COVERAGE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "coverage",
    variants: &["coveragePeriod", "coverageTiming"],
};

/// The people and organizations who plan to participate in the
/// coordination and delivery of care.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CareTeam {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// proposed | active | suspended | inactive | entered-in-error
    pub status: Option<Primitive<Code>>,
    pub category: Vec<CodeableConcept>,
    pub name: Option<Primitive<String>>,
    pub subject: Option<Reference>,
    pub period: Option<Period>,
    pub participant: Vec<CareTeamParticipant>,
    pub reason: Vec<CodeableReference>,
    pub managing_organization: Vec<Reference>,
    pub telecom: Vec<ContactPoint>,
    pub note: Vec<Annotation>,
    pub unknown: JsonMap,
}

impl CareTeam {
    pub const TYPE: &'static str = "CareTeam";
}

impl FhirDecode for CareTeam {
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
            status: obj.prim("status")?,
            category: obj.complex_vec("category")?,
            name: obj.prim("name")?,
            subject: obj.complex("subject")?,
            period: obj.complex("period")?,
            participant: obj.complex_vec("participant")?,
            reason: obj.complex_vec("reason")?,
            managing_organization: obj.complex_vec("managingOrganization")?,
            telecom: obj.complex_vec("telecom")?,
            note: obj.complex_vec("note")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for CareTeam {
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
        obj.prim("status", self.status.as_ref())?;
        obj.complex_vec("category", &self.category)?;
        obj.prim("name", self.name.as_ref())?;
        obj.complex("subject", self.subject.as_ref())?;
        obj.complex("period", self.period.as_ref())?;
        obj.complex_vec("participant", &self.participant)?;
        obj.complex_vec("reason", &self.reason)?;
        obj.complex_vec("managingOrganization", &self.managing_organization)?;
        obj.complex_vec("telecom", &self.telecom)?;
        obj.complex_vec("note", &self.note)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A member of the team and the role they play.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CareTeamParticipant {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub role: Option<CodeableConcept>,
    pub member: Option<Reference>,
    pub on_behalf_of: Option<Reference>,
    pub coverage: Option<CareTeamCoverage>,
    pub unknown: JsonMap,
}

impl FhirDecode for CareTeamParticipant {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            role: obj.complex("role")?,
            member: obj.complex("member")?,
            on_behalf_of: obj.complex("onBehalfOf")?,
            coverage: match obj.choice(&COVERAGE_SLOT)? {
                Some("coveragePeriod") => {
                    Some(CareTeamCoverage::Period(obj.complex_req("coveragePeriod")?))
                }
                Some("coverageTiming") => {
                    Some(CareTeamCoverage::Timing(obj.complex_req("coverageTiming")?))
                }
                _ => None,
            },
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for CareTeamParticipant {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("role", self.role.as_ref())?;
        obj.complex("member", self.member.as_ref())?;
        obj.complex("onBehalfOf", self.on_behalf_of.as_ref())?;
        match &self.coverage {
            Some(CareTeamCoverage::Period(v)) => obj.complex("coveragePeriod", Some(v))?,
            Some(CareTeamCoverage::Timing(v)) => obj.complex("coverageTiming", Some(v))?,
            None => {}
        }
        Ok(obj.finish(&self.unknown))
    }
}
