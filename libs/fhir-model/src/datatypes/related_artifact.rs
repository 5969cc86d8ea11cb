//! Related artifacts: citations, predecessors, supporting documentation.

use crate::datatypes::{Attachment, CodeableConcept, Reference};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Code, Date, Markdown};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A related artifact such as a citation or a composed-of target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelatedArtifact {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// documentation | justification | citation | predecessor | successor |
    /// derived-from | depends-on | composed-of | ...
    pub r#type: Primitive<Code>,
    pub classifier: Vec<CodeableConcept>,
    pub label: Option<Primitive<String>>,
    pub display: Option<Primitive<String>>,
    pub citation: Option<Primitive<Markdown>>,
    pub document: Option<Attachment>,
    pub resource: Option<Primitive<Canonical>>,
    pub resource_reference: Option<Reference>,
    pub publication_status: Option<Primitive<Code>>,
    pub publication_date: Option<Primitive<Date>>,
    pub unknown: JsonMap,
}

impl FhirDecode for RelatedArtifact {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            r#type: obj.prim_req("type")?,
            classifier: obj.complex_vec("classifier")?,
            label: obj.prim("label")?,
            display: obj.prim("display")?,
            citation: obj.prim("citation")?,
            document: obj.complex("document")?,
            resource: obj.prim("resource")?,
            resource_reference: obj.complex("resourceReference")?,
            publication_status: obj.prim("publicationStatus")?,
            publication_date: obj.prim("publicationDate")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for RelatedArtifact {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim_req("type", &self.r#type)?;
        obj.complex_vec("classifier", &self.classifier)?;
        obj.prim("label", self.label.as_ref())?;
        obj.prim("display", self.display.as_ref())?;
        obj.prim("citation", self.citation.as_ref())?;
        obj.complex("document", self.document.as_ref())?;
        obj.prim("resource", self.resource.as_ref())?;
        obj.complex("resourceReference", self.resource_reference.as_ref())?;
        obj.prim("publicationStatus", self.publication_status.as_ref())?;
        obj.prim("publicationDate", self.publication_date.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
