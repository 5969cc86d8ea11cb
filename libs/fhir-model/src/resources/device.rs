//! The Device resource.

use crate::datatypes::{
    Annotation, Attachment, CodeableConcept, CodeableReference, ContactPoint, Identifier, Meta,
    Narrative, Quantity, Range, Reference,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Base64Binary, Code, DateTime, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// value[x] of a device property.
#[derive(Debug, Clone, PartialEq)]
pub enum DevicePropertyValue {
    Quantity(Quantity),
    CodeableConcept(CodeableConcept),
    String(Primitive<String>),
    Boolean(Primitive<bool>),
    Integer(Primitive<i32>),
    Range(Range),
    Attachment(Attachment),
}

const PROPERTY_VALUE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "value",
    variants: &[
        "valueQuantity",
        "valueCodeableConcept",
        "valueString",
        "valueBoolean",
        "valueInteger",
        "valueRange",
        "valueAttachment",
    ],
};

/// A manufactured item used in the provision of healthcare.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Device {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub display_name: Option<Primitive<String>>,
    pub definition: Option<CodeableReference>,
    pub udi_carrier: Vec<DeviceUdiCarrier>,
    /// active | inactive | entered-in-error
    pub status: Option<Primitive<Code>>,
    pub availability_status: Option<CodeableConcept>,
    pub biological_source_event: Option<Identifier>,
    pub manufacturer: Option<Primitive<String>>,
    pub manufacture_date: Option<Primitive<DateTime>>,
    pub expiration_date: Option<Primitive<DateTime>>,
    pub lot_number: Option<Primitive<String>>,
    pub serial_number: Option<Primitive<String>>,
    pub name: Vec<DeviceName>,
    pub model_number: Option<Primitive<String>>,
    pub part_number: Option<Primitive<String>>,
    pub category: Vec<CodeableConcept>,
    pub r#type: Vec<CodeableConcept>,
    pub version: Vec<DeviceVersion>,
    pub property: Vec<DeviceProperty>,
    pub owner: Option<Reference>,
    pub contact: Vec<ContactPoint>,
    pub location: Option<Reference>,
    pub url: Option<Primitive<Uri>>,
    pub endpoint: Vec<Reference>,
    pub gateway: Vec<CodeableReference>,
    pub note: Vec<Annotation>,
    pub safety: Vec<CodeableConcept>,
    pub parent: Option<Reference>,
    pub unknown: JsonMap,
}

impl Device {
    pub const TYPE: &'static str = "Device";
}

impl FhirDecode for Device {
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
            display_name: obj.prim("displayName")?,
            definition: obj.complex("definition")?,
            udi_carrier: obj.complex_vec("udiCarrier")?,
            status: obj.prim("status")?,
            availability_status: obj.complex("availabilityStatus")?,
            biological_source_event: obj.complex("biologicalSourceEvent")?,
            manufacturer: obj.prim("manufacturer")?,
            manufacture_date: obj.prim("manufactureDate")?,
            expiration_date: obj.prim("expirationDate")?,
            lot_number: obj.prim("lotNumber")?,
            serial_number: obj.prim("serialNumber")?,
            name: obj.complex_vec("name")?,
            model_number: obj.prim("modelNumber")?,
            part_number: obj.prim("partNumber")?,
            category: obj.complex_vec("category")?,
            r#type: obj.complex_vec("type")?,
            version: obj.complex_vec("version")?,
            property: obj.complex_vec("property")?,
            owner: obj.complex("owner")?,
            contact: obj.complex_vec("contact")?,
            location: obj.complex("location")?,
            url: obj.prim("url")?,
            endpoint: obj.complex_vec("endpoint")?,
            gateway: obj.complex_vec("gateway")?,
            note: obj.complex_vec("note")?,
            safety: obj.complex_vec("safety")?,
            parent: obj.complex("parent")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Device {
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
        obj.prim("displayName", self.display_name.as_ref())?;
        obj.complex("definition", self.definition.as_ref())?;
        obj.complex_vec("udiCarrier", &self.udi_carrier)?;
        obj.prim("status", self.status.as_ref())?;
        obj.complex("availabilityStatus", self.availability_status.as_ref())?;
        obj.complex(
            "biologicalSourceEvent",
            self.biological_source_event.as_ref(),
        )?;
        obj.prim("manufacturer", self.manufacturer.as_ref())?;
        obj.prim("manufactureDate", self.manufacture_date.as_ref())?;
        obj.prim("expirationDate", self.expiration_date.as_ref())?;
        obj.prim("lotNumber", self.lot_number.as_ref())?;
        obj.prim("serialNumber", self.serial_number.as_ref())?;
        obj.complex_vec("name", &self.name)?;
        obj.prim("modelNumber", self.model_number.as_ref())?;
        obj.prim("partNumber", self.part_number.as_ref())?;
        obj.complex_vec("category", &self.category)?;
        obj.complex_vec("type", &self.r#type)?;
        obj.complex_vec("version", &self.version)?;
        obj.complex_vec("property", &self.property)?;
        obj.complex("owner", self.owner.as_ref())?;
        obj.complex_vec("contact", &self.contact)?;
        obj.complex("location", self.location.as_ref())?;
        obj.prim("url", self.url.as_ref())?;
        obj.complex_vec("endpoint", &self.endpoint)?;
        obj.complex_vec("gateway", &self.gateway)?;
        obj.complex_vec("note", &self.note)?;
        obj.complex_vec("safety", &self.safety)?;
        obj.complex("parent", self.parent.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Unique device identifier barcode content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceUdiCarrier {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub device_identifier: Primitive<String>,
    pub issuer: Primitive<Uri>,
    pub jurisdiction: Option<Primitive<Uri>>,
    pub carrier_aidc: Option<Primitive<Base64Binary>>,
    pub carrier_hrf: Option<Primitive<String>>,
    /// barcode | rfid | manual | card | self-reported | electronic-transmission | unknown
    pub entry_type: Option<Primitive<Code>>,
    pub unknown: JsonMap,
}

impl FhirDecode for DeviceUdiCarrier {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            device_identifier: obj.prim_req("deviceIdentifier")?,
            issuer: obj.prim_req("issuer")?,
            jurisdiction: obj.prim("jurisdiction")?,
            carrier_aidc: obj.prim("carrierAIDC")?,
            carrier_hrf: obj.prim("carrierHRF")?,
            entry_type: obj.prim("entryType")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DeviceUdiCarrier {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("deviceIdentifier", &self.device_identifier)?;
        obj.prim_req("issuer", &self.issuer)?;
        obj.prim("jurisdiction", self.jurisdiction.as_ref())?;
        obj.prim("carrierAIDC", self.carrier_aidc.as_ref())?;
        obj.prim("carrierHRF", self.carrier_hrf.as_ref())?;
        obj.prim("entryType", self.entry_type.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A name by which the device is known.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceName {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub value: Primitive<String>,
    /// registered-name | user-friendly-name | patient-reported-name
    pub r#type: Primitive<Code>,
    pub display: Option<Primitive<bool>>,
    pub unknown: JsonMap,
}

impl FhirDecode for DeviceName {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            value: obj.prim_req("value")?,
            r#type: obj.prim_req("type")?,
            display: obj.prim("display")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DeviceName {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("value", &self.value)?;
        obj.prim_req("type", &self.r#type)?;
        obj.prim("display", self.display.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A version of device firmware, hardware or protocol.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceVersion {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub r#type: Option<CodeableConcept>,
    pub component: Option<Identifier>,
    pub install_date: Option<Primitive<DateTime>>,
    pub value: Primitive<String>,
    pub unknown: JsonMap,
}

impl FhirDecode for DeviceVersion {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            r#type: obj.complex("type")?,
            component: obj.complex("component")?,
            install_date: obj.prim("installDate")?,
            value: obj.prim_req("value")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for DeviceVersion {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("type", self.r#type.as_ref())?;
        obj.complex("component", self.component.as_ref())?;
        obj.prim("installDate", self.install_date.as_ref())?;
        obj.prim_req("value", &self.value)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A static characteristic of the device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProperty {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub r#type: CodeableConcept,
    pub value: DevicePropertyValue,
    pub unknown: JsonMap,
}

impl FhirDecode for DeviceProperty {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let extension = obj.extensions()?;
        let modifier_extension = obj.modifier_extensions()?;
        let r#type = obj.complex_req("type")?;
        let value = match obj.choice_req(&PROPERTY_VALUE_SLOT)? {
            "valueQuantity" => DevicePropertyValue::Quantity(obj.complex_req("valueQuantity")?),
            "valueCodeableConcept" => {
                DevicePropertyValue::CodeableConcept(obj.complex_req("valueCodeableConcept")?)
            }
            "valueString" => DevicePropertyValue::String(obj.prim_req("valueString")?),
            "valueBoolean" => DevicePropertyValue::Boolean(obj.prim_req("valueBoolean")?),
            "valueInteger" => DevicePropertyValue::Integer(obj.prim_req("valueInteger")?),
            "valueRange" => DevicePropertyValue::Range(obj.complex_req("valueRange")?),
            "valueAttachment" => {
                DevicePropertyValue::Attachment(obj.complex_req("valueAttachment")?)
            }
            other => unreachable!("`{other}` is not in the device property value slot"),
        };
        let unknown = obj.finish()?;
        Ok(Self {
            id,
            extension,
            modifier_extension,
            r#type,
            value,
            unknown,
        })
    }
}

impl FhirEncode for DeviceProperty {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex("type", Some(&self.r#type))?;
        match &self.value {
            DevicePropertyValue::Quantity(v) => obj.complex("valueQuantity", Some(v))?,
            DevicePropertyValue::CodeableConcept(v) => {
                obj.complex("valueCodeableConcept", Some(v))?
            }
            DevicePropertyValue::String(v) => obj.prim_req("valueString", v)?,
            DevicePropertyValue::Boolean(v) => obj.prim_req("valueBoolean", v)?,
            DevicePropertyValue::Integer(v) => obj.prim_req("valueInteger", v)?,
            DevicePropertyValue::Range(v) => obj.complex("valueRange", Some(v))?,
            DevicePropertyValue::Attachment(v) => obj.complex("valueAttachment", Some(v))?,
        }
        Ok(obj.finish(&self.unknown))
    }
}
