//! The Bundle resource.
//!
//! Entry resources are full resources in their own right (unlike
//! `contained`, they keep their own lifecycle), so entries decode through
//! the regular resource dispatch.

use crate::datatypes::{Identifier, Meta, Signature};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::resources::{OperationOutcome, Resource};
use crate::primitives::{Code, Decimal, Id, Instant, UnsignedInt, Uri};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// A container for a collection of resources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bundle {
    pub id: Option<Primitive<Id>>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Primitive<Uri>>,
    pub language: Option<Primitive<Code>>,
    pub identifier: Option<Identifier>,
    /// document | message | transaction | transaction-response | batch |
    /// batch-response | history | searchset | collection |
    /// subscription-notification
    pub r#type: Primitive<Code>,
    pub timestamp: Option<Primitive<Instant>>,
    pub total: Option<Primitive<UnsignedInt>>,
    pub link: Vec<BundleLink>,
    pub entry: Vec<BundleEntry>,
    pub signature: Option<Signature>,
    pub issues: Option<Box<OperationOutcome>>,
    pub unknown: JsonMap,
}

impl Bundle {
    pub const TYPE: &'static str = "Bundle";
}

impl FhirDecode for Bundle {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        obj.expect_resource_type(Self::TYPE)?;
        let mut out = Self {
            id: obj.prim("id")?,
            meta: obj.complex("meta")?,
            implicit_rules: obj.prim("implicitRules")?,
            language: obj.prim("language")?,
            identifier: obj.complex("identifier")?,
            r#type: obj.prim_req("type")?,
            timestamp: obj.prim("timestamp")?,
            total: obj.prim("total")?,
            link: obj.complex_vec("link")?,
            entry: obj.complex_vec("entry")?,
            signature: obj.complex("signature")?,
            issues: obj.complex("issues")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Bundle {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.resource_type(Self::TYPE);
        obj.prim("id", self.id.as_ref())?;
        obj.complex("meta", self.meta.as_ref())?;
        obj.prim("implicitRules", self.implicit_rules.as_ref())?;
        obj.prim("language", self.language.as_ref())?;
        obj.complex("identifier", self.identifier.as_ref())?;
        obj.prim_req("type", &self.r#type)?;
        obj.prim("timestamp", self.timestamp.as_ref())?;
        obj.prim("total", self.total.as_ref())?;
        obj.complex_vec("link", &self.link)?;
        obj.complex_vec("entry", &self.entry)?;
        obj.complex("signature", self.signature.as_ref())?;
        obj.complex("issues", self.issues.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// A navigation link related to the bundle or an entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BundleLink {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// self | first | previous | next | last | ...
    pub relation: Primitive<Code>,
    pub url: Primitive<Uri>,
    pub unknown: JsonMap,
}

impl FhirDecode for BundleLink {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            relation: obj.prim_req("relation")?,
            url: obj.prim_req("url")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for BundleLink {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("relation", &self.relation)?;
        obj.prim_req("url", &self.url)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// One resource (or request/response pair) in the bundle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BundleEntry {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub link: Vec<BundleLink>,
    pub full_url: Option<Primitive<Uri>>,
    pub resource: Option<Box<Resource>>,
    pub search: Option<BundleEntrySearch>,
    pub request: Option<BundleEntryRequest>,
    pub response: Option<BundleEntryResponse>,
    pub unknown: JsonMap,
}

impl FhirDecode for BundleEntry {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            link: obj.complex_vec("link")?,
            full_url: obj.prim("fullUrl")?,
            resource: obj.complex("resource")?,
            search: obj.complex("search")?,
            request: obj.complex("request")?,
            response: obj.complex("response")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for BundleEntry {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.complex_vec("link", &self.link)?;
        obj.prim("fullUrl", self.full_url.as_ref())?;
        obj.complex("resource", self.resource.as_ref())?;
        obj.complex("search", self.search.as_ref())?;
        obj.complex("request", self.request.as_ref())?;
        obj.complex("response", self.response.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Search-mode metadata for searchset bundles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BundleEntrySearch {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// match | include
    pub mode: Option<Primitive<Code>>,
    pub score: Option<Primitive<Decimal>>,
    pub unknown: JsonMap,
}

impl FhirDecode for BundleEntrySearch {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            mode: obj.prim("mode")?,
            score: obj.prim("score")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for BundleEntrySearch {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim("mode", self.mode.as_ref())?;
        obj.prim("score", self.score.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Transaction/batch request details for the entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BundleEntryRequest {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    /// GET | HEAD | POST | PUT | DELETE | PATCH
    pub method: Primitive<Code>,
    pub url: Primitive<Uri>,
    pub if_none_match: Option<Primitive<String>>,
    pub if_modified_since: Option<Primitive<Instant>>,
    pub if_match: Option<Primitive<String>>,
    pub if_none_exist: Option<Primitive<String>>,
    pub unknown: JsonMap,
}

impl FhirDecode for BundleEntryRequest {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            method: obj.prim_req("method")?,
            url: obj.prim_req("url")?,
            if_none_match: obj.prim("ifNoneMatch")?,
            if_modified_since: obj.prim("ifModifiedSince")?,
            if_match: obj.prim("ifMatch")?,
            if_none_exist: obj.prim("ifNoneExist")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for BundleEntryRequest {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("method", &self.method)?;
        obj.prim_req("url", &self.url)?;
        obj.prim("ifNoneMatch", self.if_none_match.as_ref())?;
        obj.prim("ifModifiedSince", self.if_modified_since.as_ref())?;
        obj.prim("ifMatch", self.if_match.as_ref())?;
        obj.prim("ifNoneExist", self.if_none_exist.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}

/// Transaction/batch response details for the entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BundleEntryResponse {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
    pub status: Primitive<String>,
    pub location: Option<Primitive<Uri>>,
    pub etag: Option<Primitive<String>>,
    pub last_modified: Option<Primitive<Instant>>,
    pub outcome: Option<Box<Resource>>,
    pub unknown: JsonMap,
}

impl FhirDecode for BundleEntryResponse {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            modifier_extension: obj.modifier_extensions()?,
            status: obj.prim_req("status")?,
            location: obj.prim("location")?,
            etag: obj.prim("etag")?,
            last_modified: obj.prim("lastModified")?,
            outcome: obj.complex("outcome")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for BundleEntryResponse {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.ext("modifierExtension", &self.modifier_extension)?;
        obj.prim_req("status", &self.status)?;
        obj.prim("location", self.location.as_ref())?;
        obj.prim("etag", self.etag.as_ref())?;
        obj.prim("lastModified", self.last_modified.as_ref())?;
        obj.complex("outcome", self.outcome.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
