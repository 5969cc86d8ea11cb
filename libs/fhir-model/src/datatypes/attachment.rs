//! Attached or referenced content.

use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{Base64Binary, Code, DateTime, Decimal, Integer64, PositiveInt, Url};
use aurum_codec::{
    DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// Content defined elsewhere or carried inline as base64.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attachment {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub content_type: Option<Primitive<Code>>,
    pub language: Option<Primitive<Code>>,
    pub data: Option<Primitive<Base64Binary>>,
    pub url: Option<Primitive<Url>>,
    pub size: Option<Primitive<Integer64>>,
    pub hash: Option<Primitive<Base64Binary>>,
    pub title: Option<Primitive<String>>,
    pub creation: Option<Primitive<DateTime>>,
    pub height: Option<Primitive<PositiveInt>>,
    pub width: Option<Primitive<PositiveInt>>,
    pub frames: Option<Primitive<PositiveInt>>,
    pub duration: Option<Primitive<Decimal>>,
    pub pages: Option<Primitive<PositiveInt>>,
    pub unknown: JsonMap,
}

impl FhirDecode for Attachment {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            content_type: obj.prim("contentType")?,
            language: obj.prim("language")?,
            data: obj.prim("data")?,
            url: obj.prim("url")?,
            size: obj.prim("size")?,
            hash: obj.prim("hash")?,
            title: obj.prim("title")?,
            creation: obj.prim("creation")?,
            height: obj.prim("height")?,
            width: obj.prim("width")?,
            frames: obj.prim("frames")?,
            duration: obj.prim("duration")?,
            pages: obj.prim("pages")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Attachment {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.prim("contentType", self.content_type.as_ref())?;
        obj.prim("language", self.language.as_ref())?;
        obj.prim("data", self.data.as_ref())?;
        obj.prim("url", self.url.as_ref())?;
        obj.prim("size", self.size.as_ref())?;
        obj.prim("hash", self.hash.as_ref())?;
        obj.prim("title", self.title.as_ref())?;
        obj.prim("creation", self.creation.as_ref())?;
        obj.prim("height", self.height.as_ref())?;
        obj.prim("width", self.width.as_ref())?;
        obj.prim("frames", self.frames.as_ref())?;
        obj.prim("duration", self.duration.as_ref())?;
        obj.prim("pages", self.pages.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
