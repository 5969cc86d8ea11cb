//! The resource catalog: every concrete resource variant, the
//! discriminator registry, and decode dispatch.

mod allergy_intolerance;
mod bundle;
mod care_team;
mod composition;
mod condition;
mod device;
mod diagnostic_report;
mod document_reference;
mod encounter;
mod group;
mod immunization;
mod list;
mod location;
mod medication;
mod medication_request;
mod medication_statement;
mod observation;
mod operation_outcome;
mod organization;
mod patient;
mod practitioner;
mod procedure;
mod provenance;
mod questionnaire;
mod questionnaire_response;
mod related_person;
mod service_request;
mod specimen;

pub use allergy_intolerance::*;
pub use bundle::*;
pub use care_team::*;
pub use composition::*;
pub use condition::*;
pub use device::*;
pub use diagnostic_report::*;
pub use document_reference::*;
pub use encounter::*;
pub use group::*;
pub use immunization::*;
pub use list::*;
pub use location::*;
pub use medication::*;
pub use medication_request::*;
pub use medication_statement::*;
pub use observation::*;
pub use operation_outcome::*;
pub use organization::*;
pub use patient::*;
pub use practitioner::*;
pub use procedure::*;
pub use provenance::*;
pub use questionnaire::*;
pub use questionnaire_response::*;
pub use related_person::*;
pub use service_request::*;
pub use specimen::*;

use crate::element::Primitive;
use crate::primitives::Id;
use aurum_codec::{
    DecodeContext, DecodeErrorKind, DecodeResult, EncodeError, FhirDecode, FhirEncode,
};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The fixed discriminator of each concrete resource variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    AllergyIntolerance,
    Bundle,
    CareTeam,
    Composition,
    Condition,
    Device,
    DiagnosticReport,
    DocumentReference,
    Encounter,
    Group,
    Immunization,
    List,
    Location,
    Medication,
    MedicationRequest,
    MedicationStatement,
    Observation,
    OperationOutcome,
    Organization,
    Patient,
    Practitioner,
    PractitionerRole,
    Procedure,
    Provenance,
    Questionnaire,
    QuestionnaireResponse,
    RelatedPerson,
    ServiceRequest,
    Specimen,
}

/// Wire discriminator to variant. Doubles as the "known resource type"
/// membership test.
static RESOURCE_TYPES: phf::Map<&'static str, ResourceType> = phf::phf_map! {
    "AllergyIntolerance" => ResourceType::AllergyIntolerance,
    "Bundle" => ResourceType::Bundle,
    "CareTeam" => ResourceType::CareTeam,
    "Composition" => ResourceType::Composition,
    "Condition" => ResourceType::Condition,
    "Device" => ResourceType::Device,
    "DiagnosticReport" => ResourceType::DiagnosticReport,
    "DocumentReference" => ResourceType::DocumentReference,
    "Encounter" => ResourceType::Encounter,
    "Group" => ResourceType::Group,
    "Immunization" => ResourceType::Immunization,
    "List" => ResourceType::List,
    "Location" => ResourceType::Location,
    "Medication" => ResourceType::Medication,
    "MedicationRequest" => ResourceType::MedicationRequest,
    "MedicationStatement" => ResourceType::MedicationStatement,
    "Observation" => ResourceType::Observation,
    "OperationOutcome" => ResourceType::OperationOutcome,
    "Organization" => ResourceType::Organization,
    "Patient" => ResourceType::Patient,
    "Practitioner" => ResourceType::Practitioner,
    "PractitionerRole" => ResourceType::PractitionerRole,
    "Procedure" => ResourceType::Procedure,
    "Provenance" => ResourceType::Provenance,
    "Questionnaire" => ResourceType::Questionnaire,
    "QuestionnaireResponse" => ResourceType::QuestionnaireResponse,
    "RelatedPerson" => ResourceType::RelatedPerson,
    "ServiceRequest" => ResourceType::ServiceRequest,
    "Specimen" => ResourceType::Specimen,
};

impl ResourceType {
    pub fn from_wire(name: &str) -> Option<Self> {
        RESOURCE_TYPES.get(name).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllergyIntolerance => AllergyIntolerance::TYPE,
            Self::Bundle => Bundle::TYPE,
            Self::CareTeam => CareTeam::TYPE,
            Self::Composition => Composition::TYPE,
            Self::Condition => Condition::TYPE,
            Self::Device => Device::TYPE,
            Self::DiagnosticReport => DiagnosticReport::TYPE,
            Self::DocumentReference => DocumentReference::TYPE,
            Self::Encounter => Encounter::TYPE,
            Self::Group => Group::TYPE,
            Self::Immunization => Immunization::TYPE,
            Self::List => List::TYPE,
            Self::Location => Location::TYPE,
            Self::Medication => Medication::TYPE,
            Self::MedicationRequest => MedicationRequest::TYPE,
            Self::MedicationStatement => MedicationStatement::TYPE,
            Self::Observation => Observation::TYPE,
            Self::OperationOutcome => OperationOutcome::TYPE,
            Self::Organization => Organization::TYPE,
            Self::Patient => Patient::TYPE,
            Self::Practitioner => Practitioner::TYPE,
            Self::PractitionerRole => PractitionerRole::TYPE,
            Self::Procedure => Procedure::TYPE,
            Self::Provenance => Provenance::TYPE,
            Self::Questionnaire => Questionnaire::TYPE,
            Self::QuestionnaireResponse => QuestionnaireResponse::TYPE,
            Self::RelatedPerson => RelatedPerson::TYPE,
            Self::ServiceRequest => ServiceRequest::TYPE,
            Self::Specimen => Specimen::TYPE,
        }
    }
}

impl FromStr for ResourceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or(())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded resource of any catalog variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    AllergyIntolerance(AllergyIntolerance),
    Bundle(Bundle),
    CareTeam(CareTeam),
    Composition(Composition),
    Condition(Condition),
    Device(Device),
    DiagnosticReport(DiagnosticReport),
    DocumentReference(DocumentReference),
    Encounter(Encounter),
    Group(Group),
    Immunization(Immunization),
    List(List),
    Location(Location),
    Medication(Medication),
    MedicationRequest(MedicationRequest),
    MedicationStatement(MedicationStatement),
    Observation(Observation),
    OperationOutcome(OperationOutcome),
    Organization(Organization),
    Patient(Patient),
    Practitioner(Practitioner),
    PractitionerRole(PractitionerRole),
    Procedure(Procedure),
    Provenance(Provenance),
    Questionnaire(Questionnaire),
    QuestionnaireResponse(QuestionnaireResponse),
    RelatedPerson(RelatedPerson),
    ServiceRequest(ServiceRequest),
    Specimen(Specimen),
}

macro_rules! for_each_variant {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Resource::AllergyIntolerance($inner) => $body,
            Resource::Bundle($inner) => $body,
            Resource::CareTeam($inner) => $body,
            Resource::Composition($inner) => $body,
            Resource::Condition($inner) => $body,
            Resource::Device($inner) => $body,
            Resource::DiagnosticReport($inner) => $body,
            Resource::DocumentReference($inner) => $body,
            Resource::Encounter($inner) => $body,
            Resource::Group($inner) => $body,
            Resource::Immunization($inner) => $body,
            Resource::List($inner) => $body,
            Resource::Location($inner) => $body,
            Resource::Medication($inner) => $body,
            Resource::MedicationRequest($inner) => $body,
            Resource::MedicationStatement($inner) => $body,
            Resource::Observation($inner) => $body,
            Resource::OperationOutcome($inner) => $body,
            Resource::Organization($inner) => $body,
            Resource::Patient($inner) => $body,
            Resource::Practitioner($inner) => $body,
            Resource::PractitionerRole($inner) => $body,
            Resource::Procedure($inner) => $body,
            Resource::Provenance($inner) => $body,
            Resource::Questionnaire($inner) => $body,
            Resource::QuestionnaireResponse($inner) => $body,
            Resource::RelatedPerson($inner) => $body,
            Resource::ServiceRequest($inner) => $body,
            Resource::Specimen($inner) => $body,
        }
    };
}

impl Resource {
    /// The discriminator of the populated variant.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Self::AllergyIntolerance(_) => ResourceType::AllergyIntolerance,
            Self::Bundle(_) => ResourceType::Bundle,
            Self::CareTeam(_) => ResourceType::CareTeam,
            Self::Composition(_) => ResourceType::Composition,
            Self::Condition(_) => ResourceType::Condition,
            Self::Device(_) => ResourceType::Device,
            Self::DiagnosticReport(_) => ResourceType::DiagnosticReport,
            Self::DocumentReference(_) => ResourceType::DocumentReference,
            Self::Encounter(_) => ResourceType::Encounter,
            Self::Group(_) => ResourceType::Group,
            Self::Immunization(_) => ResourceType::Immunization,
            Self::List(_) => ResourceType::List,
            Self::Location(_) => ResourceType::Location,
            Self::Medication(_) => ResourceType::Medication,
            Self::MedicationRequest(_) => ResourceType::MedicationRequest,
            Self::MedicationStatement(_) => ResourceType::MedicationStatement,
            Self::Observation(_) => ResourceType::Observation,
            Self::OperationOutcome(_) => ResourceType::OperationOutcome,
            Self::Organization(_) => ResourceType::Organization,
            Self::Patient(_) => ResourceType::Patient,
            Self::Practitioner(_) => ResourceType::Practitioner,
            Self::PractitionerRole(_) => ResourceType::PractitionerRole,
            Self::Procedure(_) => ResourceType::Procedure,
            Self::Provenance(_) => ResourceType::Provenance,
            Self::Questionnaire(_) => ResourceType::Questionnaire,
            Self::QuestionnaireResponse(_) => ResourceType::QuestionnaireResponse,
            Self::RelatedPerson(_) => ResourceType::RelatedPerson,
            Self::ServiceRequest(_) => ResourceType::ServiceRequest,
            Self::Specimen(_) => ResourceType::Specimen,
        }
    }

    /// The logical id slot, shared by every variant.
    pub fn id(&self) -> Option<&Primitive<Id>> {
        for_each_variant!(self, inner => inner.id.as_ref())
    }

    /// The contained sequence. Bundle carries none; its entries are not
    /// contained resources.
    pub fn contained(&self) -> &[Resource] {
        match self {
            Self::Bundle(_) => &[],
            other => for_each_variant!(other, inner => contained_of(inner)),
        }
    }

    pub fn as_patient(&self) -> Option<&Patient> {
        match self {
            Self::Patient(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_observation(&self) -> Option<&Observation> {
        match self {
            Self::Observation(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_allergy_intolerance(&self) -> Option<&AllergyIntolerance> {
        match self {
            Self::AllergyIntolerance(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_encounter(&self) -> Option<&Encounter> {
        match self {
            Self::Encounter(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_medication_request(&self) -> Option<&MedicationRequest> {
        match self {
            Self::MedicationRequest(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bundle(&self) -> Option<&Bundle> {
        match self {
            Self::Bundle(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_operation_outcome(&self) -> Option<&OperationOutcome> {
        match self {
            Self::OperationOutcome(v) => Some(v),
            _ => None,
        }
    }
}

// `contained` lives on every variant struct except Bundle; this helper
// exists so the for_each_variant expansion stays uniform. The Bundle arm
// is short-circuited by the caller.
trait HasContained {
    fn contained_slice(&self) -> &[Resource];
}

fn contained_of<T: HasContained>(value: &T) -> &[Resource] {
    value.contained_slice()
}

macro_rules! has_contained {
    ($($ty:ty),* $(,)?) => {
        $(impl HasContained for $ty {
            fn contained_slice(&self) -> &[Resource] {
                &self.contained
            }
        })*
    };
}

has_contained!(
    AllergyIntolerance,
    CareTeam,
    Composition,
    Condition,
    Device,
    DiagnosticReport,
    DocumentReference,
    Encounter,
    Group,
    Immunization,
    List,
    Location,
    Medication,
    MedicationRequest,
    MedicationStatement,
    Observation,
    OperationOutcome,
    Organization,
    Patient,
    Practitioner,
    PractitionerRole,
    Procedure,
    Provenance,
    Questionnaire,
    QuestionnaireResponse,
    RelatedPerson,
    ServiceRequest,
    Specimen,
);

impl HasContained for Bundle {
    fn contained_slice(&self) -> &[Resource] {
        &[]
    }
}

impl FhirDecode for Resource {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let Some(map) = value.as_object() else {
            return Err(ctx.error(DecodeErrorKind::UnexpectedShape { expected: "object" }));
        };
        let type_name = match map.get("resourceType") {
            Some(Value::String(s)) => s.as_str(),
            Some(_) => {
                return Err(ctx.error(DecodeErrorKind::UnknownResourceType(
                    "resourceType must be a string".to_string(),
                )))
            }
            None => {
                return Err(ctx.error(DecodeErrorKind::UnknownResourceType(
                    "resourceType is missing".to_string(),
                )))
            }
        };
        let Some(resource_type) = ResourceType::from_wire(type_name) else {
            return Err(ctx.error(DecodeErrorKind::UnknownResourceType(
                type_name.to_string(),
            )));
        };
        tracing::trace!(resource_type = type_name, path = %ctx.pointer(), "decoding resource");
        let decoded = match resource_type {
            ResourceType::AllergyIntolerance => {
                Self::AllergyIntolerance(AllergyIntolerance::decode(value, ctx)?)
            }
            ResourceType::Bundle => Self::Bundle(Bundle::decode(value, ctx)?),
            ResourceType::CareTeam => Self::CareTeam(CareTeam::decode(value, ctx)?),
            ResourceType::Composition => Self::Composition(Composition::decode(value, ctx)?),
            ResourceType::Condition => Self::Condition(Condition::decode(value, ctx)?),
            ResourceType::Device => Self::Device(Device::decode(value, ctx)?),
            ResourceType::DiagnosticReport => {
                Self::DiagnosticReport(DiagnosticReport::decode(value, ctx)?)
            }
            ResourceType::DocumentReference => {
                Self::DocumentReference(DocumentReference::decode(value, ctx)?)
            }
            ResourceType::Encounter => Self::Encounter(Encounter::decode(value, ctx)?),
            ResourceType::Group => Self::Group(Group::decode(value, ctx)?),
            ResourceType::Immunization => Self::Immunization(Immunization::decode(value, ctx)?),
            ResourceType::List => Self::List(List::decode(value, ctx)?),
            ResourceType::Location => Self::Location(Location::decode(value, ctx)?),
            ResourceType::Medication => Self::Medication(Medication::decode(value, ctx)?),
            ResourceType::MedicationRequest => {
                Self::MedicationRequest(MedicationRequest::decode(value, ctx)?)
            }
            ResourceType::MedicationStatement => {
                Self::MedicationStatement(MedicationStatement::decode(value, ctx)?)
            }
            ResourceType::Observation => Self::Observation(Observation::decode(value, ctx)?),
            ResourceType::OperationOutcome => {
                Self::OperationOutcome(OperationOutcome::decode(value, ctx)?)
            }
            ResourceType::Organization => Self::Organization(Organization::decode(value, ctx)?),
            ResourceType::Patient => Self::Patient(Patient::decode(value, ctx)?),
            ResourceType::Practitioner => Self::Practitioner(Practitioner::decode(value, ctx)?),
            ResourceType::PractitionerRole => {
                Self::PractitionerRole(PractitionerRole::decode(value, ctx)?)
            }
            ResourceType::Procedure => Self::Procedure(Procedure::decode(value, ctx)?),
            ResourceType::Provenance => Self::Provenance(Provenance::decode(value, ctx)?),
            ResourceType::Questionnaire => {
                Self::Questionnaire(Questionnaire::decode(value, ctx)?)
            }
            ResourceType::QuestionnaireResponse => {
                Self::QuestionnaireResponse(QuestionnaireResponse::decode(value, ctx)?)
            }
            ResourceType::RelatedPerson => {
                Self::RelatedPerson(RelatedPerson::decode(value, ctx)?)
            }
            ResourceType::ServiceRequest => {
                Self::ServiceRequest(ServiceRequest::decode(value, ctx)?)
            }
            ResourceType::Specimen => Self::Specimen(Specimen::decode(value, ctx)?),
        };
        if ctx.in_contained() {
            let has_id = decoded
                .id()
                .and_then(|id| id.value.as_ref())
                .is_some();
            if !has_id {
                ctx.push_field("id");
                let err = ctx.error(DecodeErrorKind::RequiredFieldMissing("id"));
                ctx.pop();
                return Err(err);
            }
        }
        Ok(decoded)
    }
}

impl FhirEncode for Resource {
    fn encode(&self) -> Result<Value, EncodeError> {
        for_each_variant!(self, inner => inner.encode())
    }
}

/// Resolve a `#id` fragment against the container's `contained` sequence.
/// No recursion: contained resources are flat by invariant.
pub fn resolve_fragment<'a>(container: &'a Resource, fragment: &str) -> Option<&'a Resource> {
    let target = fragment.strip_prefix('#')?;
    container.contained().iter().find(|candidate| {
        candidate
            .id()
            .and_then(|id| id.value.as_ref())
            .is_some_and(|id| id.as_str() == target)
    })
}
