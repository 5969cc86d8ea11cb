//! The Immunization resource.

use crate::datatypes::{
    Annotation, CodeableConcept, CodeableReference, Identifier, Meta, Narrative, Reference,
    SimpleQuantity,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Date, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// occurrence[x]
#[derive(Debug, Clone, PartialEq)]
pub enum ImmunizationOccurrence {
    DateTime(Primitive<DateTime>),
    String(Primitive<String>),
}

const OCCURRENCE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "occurrence",
    variants: &["occurrenceDateTime", "occurrenceString"],
};

/// The event of administering a vaccine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Immunization {
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
    /// completed | entered-in-error | not-done
    pub status: Primitive<Code>,
    pub status_reason: Option<CodeableConcept>,
    pub vaccine_code: CodeableConcept,
    pub administered_product: Option<CodeableReference>,
    pub manufacturer: Option<CodeableReference>,
    pub lot_number: Option<Primitive<String>>,
    pub expiration_date: Option<Primitive<Date>>,
    pub patient: Reference,
    pub encounter: Option<Reference>,
    pub supporting_information: Vec<Reference>,
    pub occurrence: Option<ImmunizationOccurrence>,
    pub primary_source: Option<Primitive<bool>>,
    pub information_source: Option<CodeableReference>,
    pub location: Option<Reference>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub dose_quantity: Option<SimpleQuantity>,
    pub performer: Vec<ImmunizationPerformer>,
    pub note: Vec<Annotation>,
    pub reason: Vec<CodeableReference>,
    pub is_subpotent: Option<Primitive<bool>>,
    pub subpotent_reason: Vec<CodeableConcept>,
    pub funding_source: Option<CodeableConcept>,
    pub reaction: Vec<ImmunizationReaction>,
    pub protocol_applied: Vec<ImmunizationProtocolApplied>,
    pub unknown: JsonMap,
}

impl Immunization {
    pub const TYPE: &'static str = "Immunization";
}

impl FhirDecode for Immunization {
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
            status: obj.prim_req("status")?,
            status_reason: obj.complex("statusReason")?,
            vaccine_code: obj.complex_req("vaccineCode")?,
            administered_product: obj.complex("administeredProduct")?,
            manufacturer: obj.complex("manufacturer")?,
            lot_number: obj.prim("lotNumber")?,
            expiration_date: obj.prim("expirationDate")?,
            patient: obj.complex_req("patient")?,
            encounter: obj.complex("encounter")?,
            supporting_information: obj.complex_vec("supportingInformation")?,
            occurrence: match obj.choice(&OCCURRENCE_SLOT)? {
                Some("occurrenceDateTime") => Some(ImmunizationOccurrence::DateTime(
                    obj.prim_req("occurrenceDateTime")?,
                )),
                Some("occurrenceString") => Some(ImmunizationOccurrence::String(
                    obj.prim_req("occurrenceString")?,
                )),
                _ => None,
            },
            primary_source: obj.prim("primarySource")?,
            information_source: obj.complex("informationSource")?,
            location: obj.complex("location")?,
            site: obj.complex("site")?,
            route: obj.complex("route")?,
            dose_quantity: obj.complex("doseQuantity")?,
            performer: obj.complex_vec("performer")?,
            note: obj.complex_vec("note")?,
            reason: obj.complex_vec("reason")?,
            is_subpotent: obj.prim("isSubpotent")?,
            subpotent_reason: obj.complex_vec("subpotentReason")?,
            funding_source: obj.complex("fundingSource")?,
            reaction: obj.complex_vec("reaction")?,
            protocol_applied: obj.complex_vec("protocolApplied")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Immunization {
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
        obj.prim_req("status", &self.status)?;
        obj.complex("statusReason", self.status_reason.as_ref())?;
        obj.complex("vaccineCode", Some(&self.vaccine_code))?;
        obj.complex("administeredProduct", self.administered_product.as_ref())?;
        obj.complex("manufacturer", self.manufacturer.as_ref())?;
        obj.prim("lotNumber", self.lot_number.as_ref())?;
        obj.prim("expirationDate", self.expiration_date.as_ref())?;
        obj.complex("patient", Some(&self.patient))?;
        obj.complex("encounter", self.encounter.as_ref())?;
        obj.complex_vec("supportingInformation", &self.supporting_information)?;
        match &self.occurrence {
            Some(ImmunizationOccurrence::DateTime(v)) => obj.prim_req("occurrenceDateTime", v)?,
            Some(ImmunizationOccurrence::String(v)) => obj.prim_req("occurrenceString", v)?,
            None => {}
        }
        obj.prim("primarySource", self.primary_source.as_ref())?;
        obj.complex("informationSource", self.information_source.as_ref())?;
        obj.complex("location", self.location.as_ref())?;
        obj.complex("site", self.site.as_ref())?;
        obj.complex("route", self.route.as_ref())?;
        obj.complex("doseQuantity", self.dose_quantity.as_ref())?;
        obj.complex_vec("performer", &self.performer)?;
        obj.complex_vec("note", &self.note)?;
        obj.complex_vec("reason", &self.reason)?;
        obj.prim("isSubpotent", self.is_subpotent.as_ref())?;
        obj.complex_vec("subpotentReason", &self.subpotent_reason)?;
        obj.complex("fundingSource", self.funding_source.as_ref())?;
        obj.complex_vec("reaction", &self.reaction)?;
        obj.complex_vec("protocolApplied", &self.protocol_applied)?;
        Ok(obj.finish(&self.unknown))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImmunizationPerformer {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    pub unknown: JsonMap,
}

impl FhirDecode for ImmunizationPerformer {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            function: obj.complex("function")?,
            actor: obj.complex_req("actor")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ImmunizationPerformer {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("function", self.function.as_ref())?;
        obj.complex("actor", Some(&self.actor))?;
        Ok(obj.finish(&self.unknown))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImmunizationReaction {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub date: Option<Primitive<DateTime>>,
    pub manifestation: Option<CodeableReference>,
    pub reported: Option<Primitive<bool>>,
    pub unknown: JsonMap,
}

impl FhirDecode for ImmunizationReaction {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            date: obj.prim("date")?,
            manifestation: obj.complex("manifestation")?,
            reported: obj.prim("reported")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ImmunizationReaction {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim("date", self.date.as_ref())?;
        obj.complex("manifestation", self.manifestation.as_ref())?;
        obj.prim("reported", self.reported.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImmunizationProtocolApplied {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub series: Option<Primitive<String>>,
    pub authority: Option<Reference>,
    pub target_disease: Vec<CodeableConcept>,
    pub dose_number: Primitive<String>,
    pub series_doses: Option<Primitive<String>>,
    pub unknown: JsonMap,
}

impl FhirDecode for ImmunizationProtocolApplied {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            series: obj.prim("series")?,
            authority: obj.complex("authority")?,
            target_disease: obj.complex_vec("targetDisease")?,
            dose_number: obj.prim_req("doseNumber")?,
            series_doses: obj.prim("seriesDoses")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for ImmunizationProtocolApplied {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim("series", self.series.as_ref())?;
        obj.complex("authority", self.authority.as_ref())?;
        obj.complex_vec("targetDisease", &self.target_disease)?;
        obj.prim_req("doseNumber", &self.dose_number)?;
        obj.prim("seriesDoses", self.series_doses.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
