//! Virtual service connection details.

use crate::datatypes::{Coding, ContactPoint, ExtendedContactDetail};
use crate::element::{ElementDecode, ElementEncode, Extension, JsonMap, Primitive};
use crate::primitives::{PositiveInt, Url};
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeResult, EncodeError, FhirDecode, FhirEncode, ObjectDecoder,
    ObjectEncoder,
};
use serde_json::Value;

/// address[x] of a virtual service.
#[derive(Debug, Clone, PartialEq)]
pub enum VirtualServiceAddress {
    Url(Primitive<Url>),
    String(Primitive<String>),
    ContactPoint(ContactPoint),
    ExtendedContactDetail(ExtendedContactDetail),
}

const ADDRESS_SLOT: ChoiceSlot = ChoiceSlot {
    base: "address",
    variants: &[
        "addressUrl",
        "addressString",
        "addressContactPoint",
        "addressExtendedContactDetail",
    ],
};

/// How to join a virtual encounter or appointment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VirtualServiceDetail {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub channel_type: Option<Coding>,
    pub address: Option<VirtualServiceAddress>,
    pub additional_info: Vec<Primitive<Url>>,
    pub max_participants: Option<Primitive<PositiveInt>>,
    pub session_key: Option<Primitive<String>>,
    pub unknown: JsonMap,
}

impl FhirDecode for VirtualServiceDetail {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let mut out = Self {
            id: obj.element_id()?,
            extension: obj.extensions()?,
            channel_type: obj.complex("channelType")?,
            address: match obj.choice(&ADDRESS_SLOT)? {
                Some("addressUrl") => {
                    Some(VirtualServiceAddress::Url(obj.prim_req("addressUrl")?))
                }
                Some("addressString") => {
                    Some(VirtualServiceAddress::String(obj.prim_req("addressString")?))
                }
                Some("addressContactPoint") => Some(VirtualServiceAddress::ContactPoint(
                    obj.complex_req("addressContactPoint")?,
                )),
                Some("addressExtendedContactDetail") => {
                    Some(VirtualServiceAddress::ExtendedContactDetail(
                        obj.complex_req("addressExtendedContactDetail")?,
                    ))
                }
                _ => None,
            },
            additional_info: obj.prim_vec("additionalInfo")?,
            max_participants: obj.prim("maxParticipants")?,
            session_key: obj.prim("sessionKey")?,
            unknown: JsonMap::new(),
        };
        out.unknown = obj.finish()?;
        Ok(out)
    }
}

impl FhirEncode for VirtualServiceDetail {
    fn encode(&self) -> Result<Value, EncodeError> {
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.ext("extension", &self.extension)?;
        obj.complex("channelType", self.channel_type.as_ref())?;
        match &self.address {
            Some(VirtualServiceAddress::Url(v)) => obj.prim_req("addressUrl", v)?,
            Some(VirtualServiceAddress::String(v)) => obj.prim_req("addressString", v)?,
            Some(VirtualServiceAddress::ContactPoint(v)) => {
                obj.complex("addressContactPoint", Some(v))?
            }
            Some(VirtualServiceAddress::ExtendedContactDetail(v)) => {
                obj.complex("addressExtendedContactDetail", Some(v))?
            }
            None => {}
        }
        obj.prim_vec("additionalInfo", &self.additional_info)?;
        obj.prim("maxParticipants", self.max_participants.as_ref())?;
        obj.prim("sessionKey", self.session_key.as_ref())?;
        Ok(obj.finish(&self.unknown))
    }
}
