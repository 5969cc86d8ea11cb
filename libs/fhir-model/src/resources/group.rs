//! The Group resource.

use crate::datatypes::{
    CodeableConcept, Identifier, Meta, Narrative, Period, Quantity, Range, Reference,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Id, Markdown, UnsignedInt, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// value[x] of a characteristic.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupCharacteristicValue {
    CodeableConcept(CodeableConcept),
    Boolean(Primitive<bool>),
    Quantity(Quantity),
    Range(Range),
    Reference(Reference),
}

const CHARACTERISTIC_VALUE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "value",
    variants: &[
        "valueCodeableConcept",
        "valueBoolean",
        "valueQuantity",
        "valueRange",
        "valueReference",
    ],
};

/// A defined collection of entities that is not expected to act
/// collectively.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub active: Option<Primitive<bool>>,
    /// person | animal | practitioner | device | careteam | healthcareservice |
    /// location | organization | relatedperson | specimen
    pub r#type: Primitive<Code>,
    /// definitional | enumerated
    pub membership: Primitive<Code>,
    pub code: Option<CodeableConcept>,
    pub name: Option<Primitive<String>>,
    pub description: Option<Primitive<Markdown>>,
    pub quantity: Option<Primitive<UnsignedInt>>,
    pub managing_entity: Option<Reference>,
    pub characteristic: Vec<GroupCharacteristic>,
    pub member: Vec<GroupMember>,
    pub unknown: JsonMap,
}

impl Group {
    pub const TYPE: &'static str = "Group";
}

impl FhirDecode for Group {
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
            active: obj.prim("active")?,
            r#type: obj.prim_req("type")?,
            membership: obj.prim_req("membership")?,
            code: obj.complex("code")?,
            name: obj.prim("name")?,
            description: obj.prim("description")?,
            quantity: obj.prim("quantity")?,
            managing_entity: obj.complex("managingEntity")?,
            characteristic: obj.complex_vec("characteristic")?,
            member: obj.complex_vec("member")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Group {
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
        obj.prim("active", self.active.as_ref())?;
        obj.prim_req("type", &self.r#type)?;
        obj.prim_req("membership", &self.membership)?;
        obj.complex("code", self.code.as_ref())?;
        obj.prim("name", self.name.as_ref())?;
        obj.prim("description", self.description.as_ref())?;
        obj.prim("quantity", self.quantity.as_ref())?;
        obj.complex("managingEntity", self.managing_entity.as_ref())?;
        obj.complex_vec("characteristic", &self.characteristic)?;
        obj.complex_vec("member", &self.member)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A trait shared by all group members.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCharacteristic {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub code: CodeableConcept,
    pub value: GroupCharacteristicValue,
    pub exclude: Primitive<bool>,
    pub period: Option<Period>,
    pub unknown: JsonMap,
}

impl FhirDecode for GroupCharacteristic {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let extension = obj.extensions()?;
        let modifier_extension = obj.modifier_extensions()?;
        let code = obj.complex_req("code")?;
        let value = match obj.choice_req(&CHARACTERISTIC_VALUE_SLOT)? {
            "valueCodeableConcept" => GroupCharacteristicValue::CodeableConcept(
                obj.complex_req("valueCodeableConcept")?,
            ),
            "valueBoolean" => GroupCharacteristicValue::Boolean(obj.prim_req("valueBoolean")?),
            "valueQuantity" => {
                GroupCharacteristicValue::Quantity(obj.complex_req("valueQuantity")?)
            }
            "valueRange" => GroupCharacteristicValue::Range(obj.complex_req("valueRange")?),
            "valueReference" => {
                GroupCharacteristicValue::Reference(obj.complex_req("valueReference")?)
            }
            other => unreachable!("`{other}` is not in the characteristic value slot"),
        };
        let exclude = obj.prim_req("exclude")?;
        let period = obj.complex("period")?;
        let unknown = obj.finish()?;
        Ok(Self {
            id,
            extension,
            modifier_extension,
            code,
            value,
            exclude,
            period,
            unknown,
        })
    }
}

impl FhirEncode for GroupCharacteristic {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("code", Some(&self.code))?;
        match &self.value {
            GroupCharacteristicValue::CodeableConcept(v) => {
                obj.complex("valueCodeableConcept", Some(v))?
            }
            GroupCharacteristicValue::Boolean(v) => obj.prim_req("valueBoolean", v)?,
            GroupCharacteristicValue::Quantity(v) => obj.complex("valueQuantity", Some(v))?,
            GroupCharacteristicValue::Range(v) => obj.complex("valueRange", Some(v))?,
            GroupCharacteristicValue::Reference(v) => obj.complex("valueReference", Some(v))?,
        }
        obj.prim_req("exclude", &self.exclude)?;
        obj.complex("period", self.period.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// An entity in the group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupMember {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub entity: Reference,
    pub period: Option<Period>,
    pub inactive: Option<Primitive<bool>>,
    pub unknown: JsonMap,
}

impl FhirDecode for GroupMember {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            entity: obj.complex_req("entity")?,
            period: obj.complex("period")?,
            inactive: obj.prim("inactive")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for GroupMember {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("entity", Some(&self.entity))?;
        obj.complex("period", self.period.as_ref())?;
        obj.prim("inactive", self.inactive.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
