//! The Organization resource.

use crate::datatypes::{
    CodeableConcept, ExtendedContactDetail, Identifier, Meta, Narrative, Period, Reference,
};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Id, Markdown, Uri};
use crate::resources::Resource;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A grouping of people or organizations with a common purpose.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Organization {
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
    pub r#type: Vec<CodeableConcept>,
    pub name: Option<Primitive<String>>,
    pub alias: Vec<Primitive<String>>,
    pub description: Option<Primitive<Markdown>>,
    pub contact: Vec<ExtendedContactDetail>,
    pub part_of: Option<Reference>,
    pub endpoint: Vec<Reference>,
    pub qualification: Vec<OrganizationQualification>,
    pub unknown: JsonMap,
}

impl Organization {
    pub const TYPE: &'static str = "Organization";
}

impl FhirDecode for Organization {
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
            r#type: obj.complex_vec("type")?,
            name: obj.prim("name")?,
            alias: obj.prim_vec("alias")?,
            description: obj.prim("description")?,
            contact: obj.complex_vec("contact")?,
            part_of: obj.complex("partOf")?,
            endpoint: obj.complex_vec("endpoint")?,
            qualification: obj.complex_vec("qualification")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Organization {
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
        obj.complex_vec("type", &self.r#type)?;
        obj.prim("name", self.name.as_ref())?;
        obj.prim_vec("alias", &self.alias)?;
        obj.prim("description", self.description.as_ref())?;
        obj.complex_vec("contact", &self.contact)?;
        obj.complex("partOf", self.part_of.as_ref())?;
        obj.complex_vec("endpoint", &self.endpoint)?;
        obj.complex_vec("qualification", &self.qualification)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A qualification or accreditation the organization holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrganizationQualification {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub identifier: Vec<Identifier>,
    pub code: CodeableConcept,
    pub period: Option<Period>,
    pub issuer: Option<Reference>,
    pub unknown: JsonMap,
}

impl FhirDecode for OrganizationQualification {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            identifier: obj.complex_vec("identifier")?,
            code: obj.complex_req("code")?,
            period: obj.complex("period")?,
            issuer: obj.complex("issuer")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for OrganizationQualification {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex_vec("identifier", &self.identifier)?;
        obj.complex("code", Some(&self.code))?;
        obj.complex("period", self.period.as_ref())?;
        obj.complex("issuer", self.issuer.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
