//! Medication dosage instructions.

use crate::datatypes::{CodeableConcept, Range, Ratio, SimpleQuantity, Timing};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// How a medication should be, or was, taken.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dosage {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub sequence: Option<Primitive<i32>>,
    pub text: Option<Primitive<String>>,
    pub additional_instruction: Vec<CodeableConcept>,
    pub patient_instruction: Option<Primitive<String>>,
    pub timing: Option<Timing>,
    pub as_needed: Option<Primitive<bool>>,
    pub as_needed_for: Vec<CodeableConcept>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub dose_and_rate: Vec<DosageDoseAndRate>,
    pub max_dose_per_period: Vec<Ratio>,
    pub max_dose_per_administration: Option<SimpleQuantity>,
    pub max_dose_per_lifetime: Option<SimpleQuantity>,
    pub unknown: JsonMap,
}

impl FhirDecode for Dosage {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            sequence: obj.prim("sequence")?,
            text: obj.prim("text")?,
            additional_instruction: obj.complex_vec("additionalInstruction")?,
            patient_instruction: obj.prim("patientInstruction")?,
            timing: obj.complex("timing")?,
            as_needed: obj.prim("asNeeded")?,
            as_needed_for: obj.complex_vec("asNeededFor")?,
            site: obj.complex("site")?,
            route: obj.complex("route")?,
            method: obj.complex("method")?,
            dose_and_rate: obj.complex_vec("doseAndRate")?,
            max_dose_per_period: obj.complex_vec("maxDosePerPeriod")?,
            max_dose_per_administration: obj.complex("maxDosePerAdministration")?,
            max_dose_per_lifetime: obj.complex("maxDosePerLifetime")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Dosage {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim("sequence", self.sequence.as_ref())?;
        obj.prim("text", self.text.as_ref())?;
        obj.complex_vec("additionalInstruction", &self.additional_instruction)?;
        obj.prim("patientInstruction", self.patient_instruction.as_ref())?;
        obj.complex("timing", self.timing.as_ref())?;
        obj.prim("asNeeded", self.as_needed.as_ref())?;
        obj.complex_vec("asNeededFor", &self.as_needed_for)?;
        obj.complex("site", self.site.as_ref())?;
        obj.complex("route", self.route.as_ref())?;
        obj.complex("method", self.method.as_ref())?;
        obj.complex_vec("doseAndRate", &self.dose_and_rate)?;
        obj.complex_vec("maxDosePerPeriod", &self.max_dose_per_period)?;
        obj.complex(
            "maxDosePerAdministration",
            self.max_dose_per_administration.as_ref(),
        )?;
        obj.complex("maxDosePerLifetime", self.max_dose_per_lifetime.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// dose[x] of a dose-and-rate entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DosageDose {
    Range(Range),
    Quantity(SimpleQuantity),
}

const DOSE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "dose",
    variants: &["doseRange", "doseQuantity"],
};

/// rate[x] of a dose-and-rate entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DosageRate {
    Ratio(Ratio),
    Range(Range),
    Quantity(SimpleQuantity),
}

const RATE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "rate",
    variants: &["rateRatio", "rateRange", "rateQuantity"],
};

/// One amount/rate alternative within a dosage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DosageDoseAndRate {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub r#type: Option<CodeableConcept>,
    pub dose: Option<DosageDose>,
    pub rate: Option<DosageRate>,
    pub unknown: JsonMap,
}

impl FhirDecode for DosageDoseAndRate {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            r#type: obj.complex("type")?,
            dose: match obj.choice(&DOSE_SLOT)? {
                Some("doseRange") => Some(DosageDose::Range(obj.complex_req("doseRange")?)),
                Some("doseQuantity") => {
                    Some(DosageDose::Quantity(obj.complex_req("doseQuantity")?))
                }
                _ => None,
            },
            rate: match obj.choice(&RATE_SLOT)? {
                Some("rateRatio") => Some(DosageRate::Ratio(obj.complex_req("rateRatio")?)),
                Some("rateRange") => Some(DosageRate::Range(obj.complex_req("rateRange")?)),
                Some("rateQuantity") => {
                    Some(DosageRate::Quantity(obj.complex_req("rateQuantity")?))
                }
                _ => None,
            },
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DosageDoseAndRate {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("type", self.r#type.as_ref())?;
        match &self.dose {
            Some(DosageDose::Range(v)) => obj.complex("doseRange", Some(v))?,
            Some(DosageDose::Quantity(v)) => obj.complex("doseQuantity", Some(v))?,
            None => {}
        }
        match &self.rate {
            Some(DosageRate::Ratio(v)) => obj.complex("rateRatio", Some(v))?,
            Some(DosageRate::Range(v)) => obj.complex("rateRange", Some(v))?,
            Some(DosageRate::Quantity(v)) => obj.complex("rateQuantity", Some(v))?,
            None => {}
        }
        Ok(obj.finish(&self.unknown))
    }
}
