//! Resource metadata.

use crate::datatypes::Coding;
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Canonical, Id, Instant, Uri};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// Metadata maintained by the infrastructure: version, provenance pointers,
/// profiles, security labels and tags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meta {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub version_id: Option<Primitive<Id>>,
    /// Monotonically non-decreasing along a version chain.
    pub last_updated: Option<Primitive<Instant>>,
    pub source: Option<Primitive<Uri>>,
    pub profile: Vec<Primitive<Canonical>>,
    pub security: Vec<Coding>,
    pub tag: Vec<Coding>,
    pub unknown: JsonMap,
}

impl FhirDecode for Meta {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            version_id: obj.prim("versionId")?,
            last_updated: obj.prim("lastUpdated")?,
            source: obj.prim("source")?,
            profile: obj.prim_vec("profile")?,
            security: obj.complex_vec("security")?,
            tag: obj.complex_vec("tag")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Meta {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("versionId", self.version_id.as_ref())?;
        obj.prim("lastUpdated", self.last_updated.as_ref())?;
        obj.prim("source", self.source.as_ref())?;
        obj.prim_vec("profile", &self.profile)?;
        obj.complex_vec("security", &self.security)?;
        obj.complex_vec("tag", &self.tag)?;
        Ok(obj.finish(&self.unknown))
    }
}
