//! The Medication resource.

use crate::datatypes::{
    CodeableConcept, CodeableReference, Identifier, Meta, Narrative, Quantity, Ratio, Reference,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// strength[x] of an ingredient.
#[derive(Debug, Clone, PartialEq)]
pub enum MedicationIngredientStrength {
    Ratio(Ratio),
    CodeableConcept(CodeableConcept),
    Quantity(Quantity),
}

const STRENGTH_SLOT: ChoiceSlot = ChoiceSlot {
    base: "strength",
    variants: &["strengthRatio", "strengthCodeableConcept", "strengthQuantity"],
};

/// A definition of a medication for the purposes of prescribing,
/// dispensing and administering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Medication {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub code: Option<CodeableConcept>,
    /// active | inactive | entered-in-error
    pub status: Option<Primitive<Code>>,
    pub marketing_authorization_holder: Option<Reference>,
    pub dose_form: Option<CodeableConcept>,
    pub total_volume: Option<Quantity>,
    pub ingredient: Vec<MedicationIngredient>,
    pub batch: Option<MedicationBatch>,
    pub definition: Option<Reference>,
    pub unknown: JsonMap,
}

impl Medication {
    pub const TYPE: &'static str = "Medication";
}

impl FhirDecode for Medication {
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
            code: obj.complex("code")?,
            status: obj.prim("status")?,
            marketing_authorization_holder: obj.complex("marketingAuthorizationHolder")?,
            dose_form: obj.complex("doseForm")?,
            total_volume: obj.complex("totalVolume")?,
            ingredient: obj.complex_vec("ingredient")?,
            batch: obj.complex("batch")?,
            definition: obj.complex("definition")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Medication {
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
        obj.complex("code", self.code.as_ref())?;
        obj.prim("status", self.status.as_ref())?;
        obj.complex(
            "marketingAuthorizationHolder",
            self.marketing_authorization_holder.as_ref(),
        )?;
        obj.complex("doseForm", self.dose_form.as_ref())?;
        obj.complex("totalVolume", self.total_volume.as_ref())?;
        obj.complex_vec("ingredient", &self.ingredient)?;
        obj.complex("batch", self.batch.as_ref())?;
        obj.complex("definition", self.definition.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// An active or inactive ingredient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MedicationIngredient {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub item: CodeableReference,
    pub is_active: Option<Primitive<bool>>,
    pub strength: Option<MedicationIngredientStrength>,
    pub unknown: JsonMap,
}

impl FhirDecode for MedicationIngredient {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            item: obj.complex_req("item")?,
            is_active: obj.prim("isActive")?,
            strength: match obj.choice(&STRENGTH_SLOT)? {
                Some("strengthRatio") => Some(MedicationIngredientStrength::Ratio(
                    obj.complex_req("strengthRatio")?,
                )),
                Some("strengthCodeableConcept") => {
                    Some(MedicationIngredientStrength::CodeableConcept(
                        obj.complex_req("strengthCodeableConcept")?,
                    ))
                }
                Some("strengthQuantity") => Some(MedicationIngredientStrength::Quantity(
                    obj.complex_req("strengthQuantity")?,
                )),
                _ => None,
            },
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for MedicationIngredient {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("item", Some(&self.item))?;
        obj.prim("isActive", self.is_active.as_ref())?;
        match &self.strength {
            Some(MedicationIngredientStrength::Ratio(v)) => {
                obj.complex("strengthRatio", Some(v))?
            }
            Some(MedicationIngredientStrength::CodeableConcept(v)) => {
                obj.complex("strengthCodeableConcept", Some(v))?
            }
            Some(MedicationIngredientStrength::Quantity(v)) => {
                obj.complex("strengthQuantity", Some(v))?
            }
            None => {}
        }
        Ok(obj.finish(&self.unknown))
    }
}

/// Details about a packaged batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MedicationBatch {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub lot_number: Option<Primitive<String>>,
    pub expiration_date: Option<Primitive<DateTime>>,
    pub unknown: JsonMap,
}

impl FhirDecode for MedicationBatch {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            lot_number: obj.prim("lotNumber")?,
            expiration_date: obj.prim("expirationDate")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for MedicationBatch {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim("lotNumber", self.lot_number.as_ref())?;
        obj.prim("expirationDate", self.expiration_date.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
