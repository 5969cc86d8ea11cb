//! Element-level building blocks: the primitive slot carrier, extensions,
//! and the decode/encode glue every datatype and resource goes through.

use crate::datatypes::{
    Address, Age, Annotation, Attachment, Availability, CodeableConcept, CodeableReference,
    Coding, ContactDetail, ContactPoint, Count, DataRequirement, Distance, Dosage, Duration,
    Expression, ExtendedContactDetail, HumanName, Identifier, MarketingStatus, Meta,
    MonetaryComponent, Money, Narrative, Period, ProductShelfLife, Quantity, Range, Ratio,
    Reference, RelatedArtifact, SampledData, Signature, Timing, UsageContext,
    VirtualServiceDetail,
};
use crate::primitives::{
    Base64Binary, Canonical, Code, Date, DateTime, Decimal, Id, Instant, Integer64, Markdown,
    Oid, PositiveInt, Time, UnsignedInt, Uri, Url, Uuid,
};
use aurum_codec::{
    ChoiceSlot, DecodeContext, DecodeErrorKind, DecodeNote, DecodeResult, EncodeError,
    FhirDecode, FhirEncode, ModifierPolicy, ObjectDecoder, ObjectEncoder, Scalar,
};
use serde_json::Value;

/// Preserved unknown content, keyed by wire field name.
pub type JsonMap = serde_json::Map<String, Value>;

/// A primitive slot: optionally a value, optionally a companion element
/// (`_name` on the wire) carrying id and extensions. At least one half is
/// present on any decoded slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive<T> {
    pub value: Option<T>,
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Unknown companion content preserved for round-tripping.
    pub unknown: JsonMap,
}

impl<T> Default for Primitive<T> {
    fn default() -> Self {
        Self {
            value: None,
            id: None,
            extension: Vec::new(),
            unknown: JsonMap::new(),
        }
    }
}

impl<T> Primitive<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }

    /// True when the slot has id, extension or preserved companion content.
    pub fn has_companion(&self) -> bool {
        self.id.is_some() || !self.extension.is_empty() || !self.unknown.is_empty()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> From<T> for Primitive<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

fn decode_companion<T>(
    prim: &mut Primitive<T>,
    companion: &Value,
    ctx: &mut DecodeContext,
) -> DecodeResult<()> {
    let mut obj = ObjectDecoder::new(companion, ctx)?;
    prim.id = obj.element_id()?;
    prim.extension = obj.extensions()?;
    prim.unknown = obj.finish()?;
    Ok(())
}

fn encode_companion<T>(prim: &Primitive<T>) -> Result<Option<Value>, EncodeError> {
    if !prim.has_companion() {
        return Ok(None);
    }
    let mut obj = ObjectEncoder::new();
    obj.element_id(prim.id.as_deref());
    obj.ext("extension", &prim.extension)?;
    Ok(Some(obj.finish(&prim.unknown)))
}

/// Model-aware decode accessors layered over the codec's object decoder.
pub trait ElementDecode {
    fn prim<T: Scalar>(&mut self, name: &'static str) -> DecodeResult<Option<Primitive<T>>>;
    fn prim_req<T: Scalar>(&mut self, name: &'static str) -> DecodeResult<Primitive<T>>;
    fn prim_vec<T: Scalar>(&mut self, name: &'static str) -> DecodeResult<Vec<Primitive<T>>>;
    fn prim_vec1<T: Scalar>(&mut self, name: &'static str) -> DecodeResult<Vec<Primitive<T>>>;
    fn extensions(&mut self) -> DecodeResult<Vec<Extension>>;
    fn modifier_extensions(&mut self) -> DecodeResult<Vec<Extension>>;
}

impl ElementDecode for ObjectDecoder<'_, '_> {
    fn prim<T: Scalar>(&mut self, name: &'static str) -> DecodeResult<Option<Primitive<T>>> {
        let Some(raw) = self.primitive_raw::<T>(name)? else {
            return Ok(None);
        };
        let mut prim = Primitive {
            value: raw.value,
            ..Default::default()
        };
        if let Some(companion) = raw.companion {
            let ctx = self.ctx();
            ctx.push_field_owned(&format!("_{name}"));
            decode_companion(&mut prim, companion, ctx)?;
            ctx.pop();
        }
        Ok(Some(prim))
    }

    fn prim_req<T: Scalar>(&mut self, name: &'static str) -> DecodeResult<Primitive<T>> {
        match self.prim(name)? {
            Some(prim) => Ok(prim),
            None => Err(self.err_at(name, DecodeErrorKind::RequiredFieldMissing(name))),
        }
    }

    fn prim_vec<T: Scalar>(&mut self, name: &'static str) -> DecodeResult<Vec<Primitive<T>>> {
        let raws = self.primitive_vec_raw::<T>(name)?;
        let mut out = Vec::with_capacity(raws.len());
        for (i, raw) in raws.into_iter().enumerate() {
            let mut prim = Primitive {
                value: raw.value,
                ..Default::default()
            };
            if let Some(companion) = raw.companion {
                let ctx = self.ctx();
                ctx.push_field_owned(&format!("_{name}"));
                ctx.push_index(i);
                decode_companion(&mut prim, companion, ctx)?;
                ctx.pop();
                ctx.pop();
            }
            out.push(prim);
        }
        Ok(out)
    }

    fn prim_vec1<T: Scalar>(&mut self, name: &'static str) -> DecodeResult<Vec<Primitive<T>>> {
        let out = self.prim_vec(name)?;
        if out.is_empty() {
            return Err(self.err_at(name, DecodeErrorKind::RequiredFieldMissing(name)));
        }
        Ok(out)
    }

    fn extensions(&mut self) -> DecodeResult<Vec<Extension>> {
        self.complex_vec("extension")
    }

    fn modifier_extensions(&mut self) -> DecodeResult<Vec<Extension>> {
        let list: Vec<Extension> = self.complex_vec("modifierExtension")?;
        for (i, ext) in list.iter().enumerate() {
            let recognized = self
                .ctx()
                .options()
                .recognized_modifier_extensions
                .contains(&ext.url);
            if recognized {
                continue;
            }
            let policy = self.ctx().options().unknown_modifiers;
            let ctx = self.ctx();
            ctx.push_field("modifierExtension");
            ctx.push_index(i);
            let outcome = match policy {
                ModifierPolicy::Reject => Some(ctx.error(
                    DecodeErrorKind::UnrecognizedModifierExtension(ext.url.clone()),
                )),
                ModifierPolicy::Note => {
                    let note = DecodeNote {
                        path: ctx.pointer(),
                        url: ext.url.clone(),
                    };
                    ctx.add_note(note);
                    None
                }
            };
            ctx.pop();
            ctx.pop();
            if let Some(err) = outcome {
                return Err(err);
            }
        }
        Ok(list)
    }
}

/// Model-aware encode helpers layered over the codec's object encoder.
pub trait ElementEncode {
    fn prim<T: Scalar>(
        &mut self,
        name: &str,
        value: Option<&Primitive<T>>,
    ) -> Result<(), EncodeError>;
    fn prim_req<T: Scalar>(&mut self, name: &str, value: &Primitive<T>)
        -> Result<(), EncodeError>;
    fn prim_vec<T: Scalar>(&mut self, name: &str, values: &[Primitive<T>])
        -> Result<(), EncodeError>;
    fn ext(&mut self, name: &str, values: &[Extension]) -> Result<(), EncodeError>;
}

impl ElementEncode for ObjectEncoder {
    fn prim<T: Scalar>(
        &mut self,
        name: &str,
        value: Option<&Primitive<T>>,
    ) -> Result<(), EncodeError> {
        if let Some(prim) = value {
            self.prim_req(name, prim)?;
        }
        Ok(())
    }

    fn prim_req<T: Scalar>(
        &mut self,
        name: &str,
        value: &Primitive<T>,
    ) -> Result<(), EncodeError> {
        let scalar = value.value.as_ref().map(Scalar::to_json);
        let companion = encode_companion(value)?;
        self.scalar_parts(name, scalar, companion);
        Ok(())
    }

    fn prim_vec<T: Scalar>(
        &mut self,
        name: &str,
        values: &[Primitive<T>],
    ) -> Result<(), EncodeError> {
        let mut entries = Vec::with_capacity(values.len());
        for prim in values {
            entries.push((
                prim.value.as_ref().map(Scalar::to_json),
                encode_companion(prim)?,
            ));
        }
        self.scalar_vec_parts(name, entries);
        Ok(())
    }

    fn ext(&mut self, name: &str, values: &[Extension]) -> Result<(), EncodeError> {
        self.complex_vec(name, values)
    }
}

/// Open-content field attached to any element, addressed by an absolute
/// URI. Carries exactly one of a typed value or nested sub-extensions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extension {
    pub id: Option<String>,
    pub url: String,
    pub value: Option<ExtensionValue>,
    pub extension: Vec<Extension>,
    pub unknown: JsonMap,
}

impl Extension {
    pub fn with_value(url: impl Into<String>, value: ExtensionValue) -> Self {
        Self {
            url: url.into(),
            value: Some(value),
            ..Default::default()
        }
    }

    pub fn with_extensions(url: impl Into<String>, extension: Vec<Extension>) -> Self {
        Self {
            url: url.into(),
            extension,
            ..Default::default()
        }
    }
}

impl FhirDecode for Extension {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        let mut obj = ObjectDecoder::new(value, ctx)?;
        let id = obj.element_id()?;
        let url = match obj.peek("url") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(obj.err_at("url", DecodeErrorKind::UnexpectedShape { expected: "string" }))
            }
            None => return Err(obj.err_at("url", DecodeErrorKind::RequiredFieldMissing("url"))),
        };
        obj.claim("url");
        let ext_value = ExtensionValue::decode_opt(&mut obj)?;
        let extension = obj.extensions()?;
        if ext_value.is_some() && !extension.is_empty() {
            return Err(obj
                .ctx()
                .error(DecodeErrorKind::ExtensionInvariant(format!(
                    "extension `{url}` carries both a value and sub-extensions"
                ))));
        }
        if ext_value.is_none() && extension.is_empty() {
            return Err(obj
                .ctx()
                .error(DecodeErrorKind::ExtensionInvariant(format!(
                    "extension `{url}` must carry a value or sub-extensions"
                ))));
        }
        let unknown = obj.finish()?;
        Ok(Self {
            id,
            url,
            value: ext_value,
            extension,
            unknown,
        })
    }
}

impl FhirEncode for Extension {
    fn encode(&self) -> Result<Value, EncodeError> {
        if self.value.is_some() && !self.extension.is_empty() {
            return Err(EncodeError::ExtensionValueAndChildren {
                url: self.url.clone(),
            });
        }
        let mut obj = ObjectEncoder::new();
        obj.element_id(self.id.as_deref());
        obj.raw("url", Value::String(self.url.clone()));
        if let Some(value) = &self.value {
            value.encode_into(&mut obj)?;
        }
        obj.ext("extension", &self.extension)?;
        Ok(obj.finish(&self.unknown))
    }
}

/// The typed value of an extension: a tagged union over the permitted
/// primitive and complex datatypes, using the regular choice machinery.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionValue {
    Base64Binary(Primitive<Base64Binary>),
    Boolean(Primitive<bool>),
    Canonical(Primitive<Canonical>),
    Code(Primitive<Code>),
    Date(Primitive<Date>),
    DateTime(Primitive<DateTime>),
    Decimal(Primitive<Decimal>),
    Id(Primitive<Id>),
    Instant(Primitive<Instant>),
    Integer(Primitive<i32>),
    Integer64(Primitive<Integer64>),
    Markdown(Primitive<Markdown>),
    Oid(Primitive<Oid>),
    PositiveInt(Primitive<PositiveInt>),
    String(Primitive<String>),
    Time(Primitive<Time>),
    UnsignedInt(Primitive<UnsignedInt>),
    Uri(Primitive<Uri>),
    Url(Primitive<Url>),
    Uuid(Primitive<Uuid>),
    Address(Address),
    Age(Age),
    Annotation(Annotation),
    Attachment(Attachment),
    CodeableConcept(CodeableConcept),
    CodeableReference(CodeableReference),
    Coding(Coding),
    ContactPoint(ContactPoint),
    Count(Count),
    Distance(Distance),
    Duration(Duration),
    HumanName(HumanName),
    Identifier(Identifier),
    Money(Money),
    Period(Period),
    Quantity(Quantity),
    Range(Range),
    Ratio(Ratio),
    Reference(Reference),
    SampledData(SampledData),
    Signature(Signature),
    Timing(Timing),
    ContactDetail(ContactDetail),
    DataRequirement(DataRequirement),
    Expression(Expression),
    RelatedArtifact(RelatedArtifact),
    UsageContext(UsageContext),
    Availability(Availability),
    ExtendedContactDetail(ExtendedContactDetail),
    Dosage(Dosage),
    Meta(Meta),
    MonetaryComponent(MonetaryComponent),
    ProductShelfLife(ProductShelfLife),
    MarketingStatus(MarketingStatus),
    VirtualServiceDetail(VirtualServiceDetail),
    Narrative(Narrative),
}

const EXTENSION_VALUE_SLOT: ChoiceSlot = ChoiceSlot {
    base: "value",
    variants: &[
        "valueBase64Binary",
        "valueBoolean",
        "valueCanonical",
        "valueCode",
        "valueDate",
        "valueDateTime",
        "valueDecimal",
        "valueId",
        "valueInstant",
        "valueInteger",
        "valueInteger64",
        "valueMarkdown",
        "valueOid",
        "valuePositiveInt",
        "valueString",
        "valueTime",
        "valueUnsignedInt",
        "valueUri",
        "valueUrl",
        "valueUuid",
        "valueAddress",
        "valueAge",
        "valueAnnotation",
        "valueAttachment",
        "valueCodeableConcept",
        "valueCodeableReference",
        "valueCoding",
        "valueContactPoint",
        "valueCount",
        "valueDistance",
        "valueDuration",
        "valueHumanName",
        "valueIdentifier",
        "valueMoney",
        "valuePeriod",
        "valueQuantity",
        "valueRange",
        "valueRatio",
        "valueReference",
        "valueSampledData",
        "valueSignature",
        "valueTiming",
        "valueContactDetail",
        "valueDataRequirement",
        "valueExpression",
        "valueRelatedArtifact",
        "valueUsageContext",
        "valueAvailability",
        "valueExtendedContactDetail",
        "valueDosage",
        "valueMeta",
        "valueMonetaryComponent",
        "valueProductShelfLife",
        "valueMarketingStatus",
        "valueVirtualServiceDetail",
        "valueNarrative",
    ],
};

impl ExtensionValue {
    /// Which variant is populated, as the published FHIR type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Base64Binary(_) => "base64Binary",
            Self::Boolean(_) => "boolean",
            Self::Canonical(_) => "canonical",
            Self::Code(_) => "code",
            Self::Date(_) => "date",
            Self::DateTime(_) => "dateTime",
            Self::Decimal(_) => "decimal",
            Self::Id(_) => "id",
            Self::Instant(_) => "instant",
            Self::Integer(_) => "integer",
            Self::Integer64(_) => "integer64",
            Self::Markdown(_) => "markdown",
            Self::Oid(_) => "oid",
            Self::PositiveInt(_) => "positiveInt",
            Self::String(_) => "string",
            Self::Time(_) => "time",
            Self::UnsignedInt(_) => "unsignedInt",
            Self::Uri(_) => "uri",
            Self::Url(_) => "url",
            Self::Uuid(_) => "uuid",
            Self::Address(_) => "Address",
            Self::Age(_) => "Age",
            Self::Annotation(_) => "Annotation",
            Self::Attachment(_) => "Attachment",
            Self::CodeableConcept(_) => "CodeableConcept",
            Self::CodeableReference(_) => "CodeableReference",
            Self::Coding(_) => "Coding",
            Self::ContactPoint(_) => "ContactPoint",
            Self::Count(_) => "Count",
            Self::Distance(_) => "Distance",
            Self::Duration(_) => "Duration",
            Self::HumanName(_) => "HumanName",
            Self::Identifier(_) => "Identifier",
            Self::Money(_) => "Money",
            Self::Period(_) => "Period",
            Self::Quantity(_) => "Quantity",
            Self::Range(_) => "Range",
            Self::Ratio(_) => "Ratio",
            Self::Reference(_) => "Reference",
            Self::SampledData(_) => "SampledData",
            Self::Signature(_) => "Signature",
            Self::Timing(_) => "Timing",
            Self::ContactDetail(_) => "ContactDetail",
            Self::DataRequirement(_) => "DataRequirement",
            Self::Expression(_) => "Expression",
            Self::RelatedArtifact(_) => "RelatedArtifact",
            Self::UsageContext(_) => "UsageContext",
            Self::Availability(_) => "Availability",
            Self::ExtendedContactDetail(_) => "ExtendedContactDetail",
            Self::Dosage(_) => "Dosage",
            Self::Meta(_) => "Meta",
            Self::MonetaryComponent(_) => "MonetaryComponent",
            Self::ProductShelfLife(_) => "ProductShelfLife",
            Self::MarketingStatus(_) => "MarketingStatus",
            Self::VirtualServiceDetail(_) => "VirtualServiceDetail",
            Self::Narrative(_) => "Narrative",
        }
    }

    pub fn as_string(&self) -> Option<&Primitive<String>> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<&Primitive<bool>> {
        match self {
            Self::Boolean(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_coding(&self) -> Option<&Coding> {
        match self {
            Self::Coding(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Self::Quantity(v) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn decode_opt(obj: &mut ObjectDecoder) -> DecodeResult<Option<Self>> {
        let Some(name) = obj.choice(&EXTENSION_VALUE_SLOT)? else {
            return Ok(None);
        };
        let decoded = match name {
            "valueBase64Binary" => Self::Base64Binary(obj.prim_req(name)?),
            "valueBoolean" => Self::Boolean(obj.prim_req(name)?),
            "valueCanonical" => Self::Canonical(obj.prim_req(name)?),
            "valueCode" => Self::Code(obj.prim_req(name)?),
            "valueDate" => Self::Date(obj.prim_req(name)?),
            "valueDateTime" => Self::DateTime(obj.prim_req(name)?),
            "valueDecimal" => Self::Decimal(obj.prim_req(name)?),
            "valueId" => Self::Id(obj.prim_req(name)?),
            "valueInstant" => Self::Instant(obj.prim_req(name)?),
            "valueInteger" => Self::Integer(obj.prim_req(name)?),
            "valueInteger64" => Self::Integer64(obj.prim_req(name)?),
            "valueMarkdown" => Self::Markdown(obj.prim_req(name)?),
            "valueOid" => Self::Oid(obj.prim_req(name)?),
            "valuePositiveInt" => Self::PositiveInt(obj.prim_req(name)?),
            "valueString" => Self::String(obj.prim_req(name)?),
            "valueTime" => Self::Time(obj.prim_req(name)?),
            "valueUnsignedInt" => Self::UnsignedInt(obj.prim_req(name)?),
            "valueUri" => Self::Uri(obj.prim_req(name)?),
            "valueUrl" => Self::Url(obj.prim_req(name)?),
            "valueUuid" => Self::Uuid(obj.prim_req(name)?),
            "valueAddress" => Self::Address(obj.complex_req(name)?),
            "valueAge" => Self::Age(obj.complex_req(name)?),
            "valueAnnotation" => Self::Annotation(obj.complex_req(name)?),
            "valueAttachment" => Self::Attachment(obj.complex_req(name)?),
            "valueCodeableConcept" => Self::CodeableConcept(obj.complex_req(name)?),
            "valueCodeableReference" => Self::CodeableReference(obj.complex_req(name)?),
            "valueCoding" => Self::Coding(obj.complex_req(name)?),
            "valueContactPoint" => Self::ContactPoint(obj.complex_req(name)?),
            "valueCount" => Self::Count(obj.complex_req(name)?),
            "valueDistance" => Self::Distance(obj.complex_req(name)?),
            "valueDuration" => Self::Duration(obj.complex_req(name)?),
            "valueHumanName" => Self::HumanName(obj.complex_req(name)?),
            "valueIdentifier" => Self::Identifier(obj.complex_req(name)?),
            "valueMoney" => Self::Money(obj.complex_req(name)?),
            "valuePeriod" => Self::Period(obj.complex_req(name)?),
            "valueQuantity" => Self::Quantity(obj.complex_req(name)?),
            "valueRange" => Self::Range(obj.complex_req(name)?),
            "valueRatio" => Self::Ratio(obj.complex_req(name)?),
            "valueReference" => Self::Reference(obj.complex_req(name)?),
            "valueSampledData" => Self::SampledData(obj.complex_req(name)?),
            "valueSignature" => Self::Signature(obj.complex_req(name)?),
            "valueTiming" => Self::Timing(obj.complex_req(name)?),
            "valueContactDetail" => Self::ContactDetail(obj.complex_req(name)?),
            "valueDataRequirement" => Self::DataRequirement(obj.complex_req(name)?),
            "valueExpression" => Self::Expression(obj.complex_req(name)?),
            "valueRelatedArtifact" => Self::RelatedArtifact(obj.complex_req(name)?),
            "valueUsageContext" => Self::UsageContext(obj.complex_req(name)?),
            "valueAvailability" => Self::Availability(obj.complex_req(name)?),
            "valueExtendedContactDetail" => Self::ExtendedContactDetail(obj.complex_req(name)?),
            "valueDosage" => Self::Dosage(obj.complex_req(name)?),
            "valueMeta" => Self::Meta(obj.complex_req(name)?),
            "valueMonetaryComponent" => Self::MonetaryComponent(obj.complex_req(name)?),
            "valueProductShelfLife" => Self::ProductShelfLife(obj.complex_req(name)?),
            "valueMarketingStatus" => Self::MarketingStatus(obj.complex_req(name)?),
            "valueVirtualServiceDetail" => Self::VirtualServiceDetail(obj.complex_req(name)?),
            "valueNarrative" => Self::Narrative(obj.complex_req(name)?),
            other => unreachable!("`{other}` is not in the extension value slot"),
        };
        Ok(Some(decoded))
    }

    pub(crate) fn encode_into(&self, obj: &mut ObjectEncoder) -> Result<(), EncodeError> {
        match self {
            Self::Base64Binary(v) => obj.prim_req("valueBase64Binary", v),
            Self::Boolean(v) => obj.prim_req("valueBoolean", v),
            Self::Canonical(v) => obj.prim_req("valueCanonical", v),
            Self::Code(v) => obj.prim_req("valueCode", v),
            Self::Date(v) => obj.prim_req("valueDate", v),
            Self::DateTime(v) => obj.prim_req("valueDateTime", v),
            Self::Decimal(v) => obj.prim_req("valueDecimal", v),
            Self::Id(v) => obj.prim_req("valueId", v),
            Self::Instant(v) => obj.prim_req("valueInstant", v),
            Self::Integer(v) => obj.prim_req("valueInteger", v),
            Self::Integer64(v) => obj.prim_req("valueInteger64", v),
            Self::Markdown(v) => obj.prim_req("valueMarkdown", v),
            Self::Oid(v) => obj.prim_req("valueOid", v),
            Self::PositiveInt(v) => obj.prim_req("valuePositiveInt", v),
            Self::String(v) => obj.prim_req("valueString", v),
            Self::Time(v) => obj.prim_req("valueTime", v),
            Self::UnsignedInt(v) => obj.prim_req("valueUnsignedInt", v),
            Self::Uri(v) => obj.prim_req("valueUri", v),
            Self::Url(v) => obj.prim_req("valueUrl", v),
            Self::Uuid(v) => obj.prim_req("valueUuid", v),
            Self::Address(v) => obj.complex("valueAddress", Some(v)),
            Self::Age(v) => obj.complex("valueAge", Some(v)),
            Self::Annotation(v) => obj.complex("valueAnnotation", Some(v)),
            Self::Attachment(v) => obj.complex("valueAttachment", Some(v)),
            Self::CodeableConcept(v) => obj.complex("valueCodeableConcept", Some(v)),
            Self::CodeableReference(v) => obj.complex("valueCodeableReference", Some(v)),
            Self::Coding(v) => obj.complex("valueCoding", Some(v)),
            Self::ContactPoint(v) => obj.complex("valueContactPoint", Some(v)),
            Self::Count(v) => obj.complex("valueCount", Some(v)),
            Self::Distance(v) => obj.complex("valueDistance", Some(v)),
            Self::Duration(v) => obj.complex("valueDuration", Some(v)),
            Self::HumanName(v) => obj.complex("valueHumanName", Some(v)),
            Self::Identifier(v) => obj.complex("valueIdentifier", Some(v)),
            Self::Money(v) => obj.complex("valueMoney", Some(v)),
            Self::Period(v) => obj.complex("valuePeriod", Some(v)),
            Self::Quantity(v) => obj.complex("valueQuantity", Some(v)),
            Self::Range(v) => obj.complex("valueRange", Some(v)),
            Self::Ratio(v) => obj.complex("valueRatio", Some(v)),
            Self::Reference(v) => obj.complex("valueReference", Some(v)),
            Self::SampledData(v) => obj.complex("valueSampledData", Some(v)),
            Self::Signature(v) => obj.complex("valueSignature", Some(v)),
            Self::Timing(v) => obj.complex("valueTiming", Some(v)),
            Self::ContactDetail(v) => obj.complex("valueContactDetail", Some(v)),
            Self::DataRequirement(v) => obj.complex("valueDataRequirement", Some(v)),
            Self::Expression(v) => obj.complex("valueExpression", Some(v)),
            Self::RelatedArtifact(v) => obj.complex("valueRelatedArtifact", Some(v)),
            Self::UsageContext(v) => obj.complex("valueUsageContext", Some(v)),
            Self::Availability(v) => obj.complex("valueAvailability", Some(v)),
            Self::ExtendedContactDetail(v) => obj.complex("valueExtendedContactDetail", Some(v)),
            Self::Dosage(v) => obj.complex("valueDosage", Some(v)),
            Self::Meta(v) => obj.complex("valueMeta", Some(v)),
            Self::MonetaryComponent(v) => obj.complex("valueMonetaryComponent", Some(v)),
            Self::ProductShelfLife(v) => obj.complex("valueProductShelfLife", Some(v)),
            Self::MarketingStatus(v) => obj.complex("valueMarketingStatus", Some(v)),
            Self::VirtualServiceDetail(v) => obj.complex("valueVirtualServiceDetail", Some(v)),
            Self::Narrative(v) => obj.complex("valueNarrative", Some(v)),
        }
    }
}

impl From<&str> for ExtensionValue {
    fn from(value: &str) -> Self {
        Self::String(Primitive::new(value.to_string()))
    }
}

impl From<bool> for ExtensionValue {
    fn from(value: bool) -> Self {
        Self::Boolean(Primitive::new(value))
    }
}
