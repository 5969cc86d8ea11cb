//! The OperationOutcome resource.

use crate::datatypes::{CodeableConcept, Meta, Narrative};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Code, Id, Uri};
use crate::resources::Resource;
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A collection of error, warning or information messages from a system
/// action.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationOutcome {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub text: Option<Narrative>,
    pub contained: Vec<Resource>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub issue: Vec<OperationOutcomeIssue>,
    pub unknown: JsonMap,
}

impl OperationOutcome {
    pub const TYPE: &'static str = "OperationOutcome";
}

impl FhirDecode for OperationOutcome {
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
            issue: obj.complex_vec1("issue")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for OperationOutcome {
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
        obj.complex_vec("issue", &self.issue)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A single issue.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationOutcomeIssue {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// fatal | error | warning | information | success
    pub severity: Primitive<Code>,
    /// invalid | structure | required | value | ... from the issue-type set
    pub code: Primitive<Code>,
    pub details: Option<CodeableConcept>,
    pub diagnostics: Option<Primitive<String>>,
    pub expression: Vec<Primitive<String>>,
    pub unknown: JsonMap,
}

impl FhirDecode for OperationOutcomeIssue {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            severity: obj.prim_req("severity")?,
            code: obj.prim_req("code")?,
            details: obj.complex("details")?,
            diagnostics: obj.prim("diagnostics")?,
            expression: obj.prim_vec("expression")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for OperationOutcomeIssue {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("severity", &self.severity)?;
        obj.prim_req("code", &self.code)?;
        obj.complex("details", self.details.as_ref())?;
        obj.prim("diagnostics", self.diagnostics.as_ref())?;
        obj.prim_vec("expression", &self.expression)?;
        Ok(obj.finish(&self.unknown))
    }
}
