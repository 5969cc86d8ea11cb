//! Contexts of use for canonical artifacts.

use crate::datatypes::{CodeableConcept, Coding, Quantity, Range, Reference};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap};
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// value[x] of a usage context.
#[derive(Debug, Clone, PartialEq)]
pub enum UsageContextValue {
    CodeableConcept(CodeableConcept),
    Quantity(Quantity),
    Range(Range),
    Reference(Reference),
}

const VALUE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "value",
    variants: &[
        "valueCodeableConcept",
        "valueQuantity",
        "valueRange",
        "valueReference",
    ],
};

impl UsageContextValue {
    fn decode_req(obj: &mut ObjectDecoder) -> DecodeResult<Self> {
        Ok(match obj.choice_req(&VALUE_SLOT)? {
            "valueCodeableConcept" => {
                Self::CodeableConcept(obj.complex_req("valueCodeableConcept")?)
            }
            "valueQuantity" => Self::Quantity(obj.complex_req("valueQuantity")?),
            "valueRange" => Self::Range(obj.complex_req("valueRange")?),
            "valueReference" => Self::Reference(obj.complex_req("valueReference")?),
            other => unreachable!("`{other}` is not in the usage context value slot"),
        })
    }

    fn encode_into(&self, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::CodeableConcept(v) => obj.complex("valueCodeableConcept", Some(v)),
            Self::Quantity(v) => obj.complex("valueQuantity", Some(v)),
            Self::Range(v) => obj.complex("valueRange", Some(v)),
            Self::Reference(v) => obj.complex("valueReference", Some(v)),
        }
    }
}

/// A dimension along which an artifact's applicability varies, with the
/// applicable value.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageContext {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub code: Coding,
    pub value: UsageContextValue,
    pub unknown: JsonMap,
}

impl FhirDecode for UsageContext {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let extension = obj.extensions()?;
        let code = obj.complex_req("code")?;
        let value = UsageContextValue::decode_req(&mut obj)?;
        let unknown = obj.finish()?;
        Ok(Self {
            id,
            extension,
            code,
            value,
            unknown,
        })
    }
}

impl FhirEncode for UsageContext {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("code", Some(&self.code))?;
        self.value.encode_into(&mut obj)?;
        Ok(obj.finish(&self.unknown))
    }
}
