//! The Location resource.

use crate::datatypes::{
    Address, Availability, CodeableConcept, Coding, ExtendedContactDetail, Identifier, Meta,
    Narrative, Reference, VirtualServiceDetail,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Decimal, Id, Markdown, Uri};
use crate::resources::Resource;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A physical place where services are provided or resources are found.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    /// active | suspended | inactive
    pub status: Option<Primitive<Code>>,
    pub operational_status: Option<Coding>,
    pub name: Option<Primitive<String>>,
    pub alias: Vec<Primitive<String>>,
    pub description: Option<Primitive<Markdown>>,
    /// instance | kind
    pub mode: Option<Primitive<Code>>,
    pub r#type: Vec<CodeableConcept>,
    pub contact: Vec<ExtendedContactDetail>,
    pub address: Option<Address>,
    pub form: Option<CodeableConcept>,
    pub position: Option<LocationPosition>,
    pub managing_organization: Option<Reference>,
    pub part_of: Option<Reference>,
    pub characteristic: Vec<CodeableConcept>,
    pub hours_of_operation: Option<Availability>,
    pub virtual_service: Vec<VirtualServiceDetail>,
    pub endpoint: Vec<Reference>,
    pub unknown: JsonMap,
}

impl Location {
    pub const TYPE: &'static str = "Location";
}

impl FhirDecode for Location {
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
            operational_status: obj.complex("operationalStatus")?,
            name: obj.prim("name")?,
            alias: obj.prim_vec("alias")?,
            description: obj.prim("description")?,
            mode: obj.prim("mode")?,
            r#type: obj.complex_vec("type")?,
            contact: obj.complex_vec("contact")?,
            address: obj.complex("address")?,
            form: obj.complex("form")?,
            position: obj.complex("position")?,
            managing_organization: obj.complex("managingOrganization")?,
            part_of: obj.complex("partOf")?,
            characteristic: obj.complex_vec("characteristic")?,
            hours_of_operation: obj.complex("hoursOfOperation")?,
            virtual_service: obj.complex_vec("virtualService")?,
            endpoint: obj.complex_vec("endpoint")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Location {
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
        obj.complex("operationalStatus", self.operational_status.as_ref())?;
        obj.prim("name", self.name.as_ref())?;
        obj.prim_vec("alias", &self.alias)?;
        obj.prim("description", self.description.as_ref())?;
        obj.prim("mode", self.mode.as_ref())?;
        obj.complex_vec("type", &self.r#type)?;
        obj.complex_vec("contact", &self.contact)?;
        obj.complex("address", self.address.as_ref())?;
        obj.complex("form", self.form.as_ref())?;
        obj.complex("position", self.position.as_ref())?;
        obj.complex("managingOrganization", self.managing_organization.as_ref())?;
        obj.complex("partOf", self.part_of.as_ref())?;
        obj.complex_vec("characteristic", &self.characteristic)?;
        obj.complex("hoursOfOperation", self.hours_of_operation.as_ref())?;
        obj.complex_vec("virtualService", &self.virtual_service)?;
        obj.complex_vec("endpoint", &self.endpoint)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Geographic coordinates, WGS84.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationPosition {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub longitude: Primitive<Decimal>,
    pub latitude: Primitive<Decimal>,
    pub altitude: Option<Primitive<Decimal>>,
    pub unknown: JsonMap,
}

impl FhirDecode for LocationPosition {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            longitude: obj.prim_req("longitude")?,
            latitude: obj.prim_req("latitude")?,
            altitude: obj.prim("altitude")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for LocationPosition {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("longitude", &self.longitude)?;
        obj.prim_req("latitude", &self.latitude)?;
        obj.prim("altitude", self.altitude.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
