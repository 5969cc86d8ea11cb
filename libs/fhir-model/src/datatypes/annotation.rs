//! Text annotations with attribution.

use crate::datatypes::Reference;
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{DateTime, Markdown};
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// Who authored the annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationAuthor {
    Reference(Reference),
    String(Primitive<String>),
}

const AUTHOR_SLOT: ChoiceSlot = ChoiceSlot {
    base: "author",
    variants: &["authorReference", "authorString"],
};

impl AnnotationAuthor {
    fn decode_opt(obj: &mut ObjectDecoder) -> DecodeResult<Option<Self>> {
        Ok(match obj.choice(&AUTHOR_SLOT)? {
            Some("authorReference") => Some(Self::Reference(obj.complex_req("authorReference")?)),
            Some("authorString") => Some(Self::String(obj.prim_req("authorString")?)),
            _ => None,
        })
    }

    fn encode_into(&self, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::Reference(v) => obj.complex("authorReference", Some(v)),
            Self::String(v) => obj.prim_req("authorString", v),
        }
    }
}

/// A timestamped, attributed remark that cannot be removed, only added to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Annotation {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub author: Option<AnnotationAuthor>,
    pub time: Option<Primitive<DateTime>>,
    pub text: Primitive<Markdown>,
    pub unknown: JsonMap,
}

impl FhirDecode for Annotation {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            author: AnnotationAuthor::decode_opt(&mut obj)?,
            time: obj.prim("time")?,
            text: obj.prim_req("text")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for Annotation {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        if let Some(author) = &self.author {
            author.encode_into(&mut obj)?;
        }
        obj.prim("time", self.time.as_ref())?;
        obj.prim_req("text", &self.text)?;
        Ok(obj.finish(&self.unknown))
    }
}
