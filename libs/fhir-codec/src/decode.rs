//! Decode machinery: context, claims-tracking object decoder, choice slots.
//!
//! The decoder walks a parsed JSON tree against the typed catalog. Every
//! declared field an element reads is "claimed"; whatever remains unclaimed
//! when the element finishes is subject to the unknown-field policy. The
//! primitive accessors merge the scalar form at `name` with the companion
//! element at `_name`, including the null-aligned array form.

use crate::error::{DecodeError, DecodeErrorKind, DecodeResult};
use crate::options::{DecodeOptions, UnknownFieldPolicy};
use crate::path::PathTracker;
use crate::scalar::{Scalar, ScalarError};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// A value decoded in lenient mode, with whatever the decoder had to note
/// along the way (currently: modifier extensions it did not recognize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    pub value: T,
    pub notes: Vec<DecodeNote>,
}

/// A non-fatal observation recorded during a lenient decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeNote {
    /// JSON Pointer to the element the note concerns.
    pub path: String,
    /// URL of the unrecognized modifier extension: the enclosing element is
    /// only partially understood.
    pub url: String,
}

/// Anything that can be decoded from a JSON subtree.
pub trait FhirDecode: Sized {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self>;
}

impl<T: FhirDecode> FhirDecode for Box<T> {
    fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
        T::decode(value, ctx).map(Box::new)
    }
}

/// Shared state for one decode run.
pub struct DecodeContext<'o> {
    options: &'o DecodeOptions,
    path: PathTracker,
    depth: usize,
    in_contained: bool,
    notes: Vec<DecodeNote>,
}

impl<'o> DecodeContext<'o> {
    pub fn new(options: &'o DecodeOptions) -> Self {
        Self {
            options,
            path: PathTracker::new(),
            depth: 0,
            in_contained: false,
            notes: Vec::new(),
        }
    }

    pub fn options(&self) -> &DecodeOptions {
        self.options
    }

    /// JSON Pointer to the element currently being decoded.
    pub fn pointer(&self) -> String {
        self.path.pointer()
    }

    /// True while decoding the entries of a `contained` sequence.
    pub fn in_contained(&self) -> bool {
        self.in_contained
    }

    pub fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(kind, self.pointer())
    }

    pub fn push_field(&mut self, name: &'static str) {
        self.path.push_field(name);
    }

    pub fn push_field_owned(&mut self, name: &str) {
        self.path.push_field_owned(name);
    }

    pub fn push_index(&mut self, index: usize) {
        self.path.push_index(index);
    }

    pub fn pop(&mut self) {
        self.path.pop();
    }

    pub fn add_note(&mut self, note: DecodeNote) {
        self.notes.push(note);
    }

    pub fn into_notes(self) -> Vec<DecodeNote> {
        self.notes
    }

    fn descend(&mut self) -> DecodeResult<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.error(DecodeErrorKind::DepthLimitExceeded(self.options.max_depth)));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// The scalar and companion halves of one primitive slot, before the
/// companion element itself has been decoded.
#[derive(Debug)]
pub struct RawPrimitive<'a, T> {
    pub value: Option<T>,
    pub companion: Option<&'a Value>,
}

/// A polymorphic slot: its base name and the closed set of variant-suffixed
/// wire names, in catalog order.
pub struct ChoiceSlot {
    pub base: &'static str,
    pub variants: &'static [&'static str],
}

/// Claims-tracking view over a single JSON object.
pub struct ObjectDecoder<'a, 'o> {
    map: &'a Map<String, Value>,
    ctx: &'a mut DecodeContext<'o>,
    claimed: Vec<Cow<'static, str>>,
}

impl<'a, 'o> ObjectDecoder<'a, 'o> {
    pub fn new(value: &'a Value, ctx: &'a mut DecodeContext<'o>) -> DecodeResult<Self> {
        let Some(map) = value.as_object() else {
            return Err(ctx.error(DecodeErrorKind::UnexpectedShape { expected: "object" }));
        };
        ctx.descend()?;
        Ok(Self {
            map,
            ctx,
            claimed: Vec::new(),
        })
    }

    pub fn ctx(&mut self) -> &mut DecodeContext<'o> {
        self.ctx
    }

    /// Peek at a field without claiming it.
    pub fn peek(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name)
    }

    pub fn claim(&mut self, name: &'static str) {
        self.claimed.push(Cow::Borrowed(name));
    }

    fn claim_with_companion(&mut self, name: &'static str) {
        self.claimed.push(Cow::Borrowed(name));
        self.claimed.push(Cow::Owned(format!("_{name}")));
    }

    fn is_claimed(&self, key: &str) -> bool {
        self.claimed.iter().any(|c| c == key)
    }

    /// Build an error located at a child field of this object.
    pub fn err_at(&mut self, name: &str, kind: DecodeErrorKind) -> DecodeError {
        self.ctx.push_field_owned(name);
        let err = self.ctx.error(kind);
        self.ctx.pop();
        err
    }

    fn err_at_index(&mut self, name: &str, index: usize, kind: DecodeErrorKind) -> DecodeError {
        self.ctx.push_field_owned(name);
        self.ctx.push_index(index);
        let err = self.ctx.error(kind);
        self.ctx.pop();
        self.ctx.pop();
        err
    }

    fn scalar_error(
        &mut self,
        name: &str,
        index: Option<usize>,
        type_name: &'static str,
        err: ScalarError,
    ) -> DecodeError {
        let kind = match err {
            ScalarError::Lexical(detail) => DecodeErrorKind::Lexical { type_name, detail },
            ScalarError::Range(detail) => DecodeErrorKind::Range { type_name, detail },
            ScalarError::Shape(expected) => DecodeErrorKind::UnexpectedShape { expected },
        };
        match index {
            Some(i) => self.err_at_index(name, i, kind),
            None => self.err_at(name, kind),
        }
    }

    /// Claim the discriminator and check it names the expected variant.
    pub fn expect_resource_type(&mut self, expected: &'static str) -> DecodeResult<()> {
        self.claim("resourceType");
        match self.map.get("resourceType") {
            Some(Value::String(s)) if s == expected => Ok(()),
            Some(Value::String(s)) => Err(self.ctx.error(DecodeErrorKind::UnknownResourceType(
                format!("expected `{expected}`, found `{s}`"),
            ))),
            Some(_) => Err(self.err_at(
                "resourceType",
                DecodeErrorKind::UnexpectedShape { expected: "string" },
            )),
            None => Err(self.ctx.error(DecodeErrorKind::UnknownResourceType(
                "resourceType is missing".to_string(),
            ))),
        }
    }

    /// `Element.id`: a plain JSON string, no companion of its own.
    pub fn element_id(&mut self) -> DecodeResult<Option<String>> {
        self.claim("id");
        match self.map.get("id") {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(self.err_at("id", DecodeErrorKind::UnexpectedShape { expected: "string" })),
        }
    }

    /// A singleton primitive slot: scalar at `name`, companion at `_name`.
    pub fn primitive_raw<T: Scalar>(
        &mut self,
        name: &'static str,
    ) -> DecodeResult<Option<RawPrimitive<'a, T>>> {
        self.claim_with_companion(name);
        let underscore = format!("_{name}");
        let scalar = self.map.get(name);
        let companion = self.map.get(underscore.as_str());
        if scalar.is_none() && companion.is_none() {
            return Ok(None);
        }

        let value = match scalar {
            None | Some(Value::Null) => None,
            Some(Value::Array(_)) => {
                return Err(self.err_at(
                    name,
                    DecodeErrorKind::Cardinality(format!(
                        "singleton field `{name}` encoded as an array"
                    )),
                ))
            }
            Some(other) => Some(
                T::from_json(other).map_err(|e| self.scalar_error(name, None, T::NAME, e))?,
            ),
        };
        let companion = match companion {
            None | Some(Value::Null) => None,
            Some(v @ Value::Object(_)) => Some(v),
            Some(_) => {
                return Err(self.err_at(
                    &underscore,
                    DecodeErrorKind::CompanionMisalignment(format!(
                        "companion of singleton field `{name}` must be an object"
                    )),
                ))
            }
        };
        if value.is_none() && companion.is_none() {
            return Ok(None);
        }
        Ok(Some(RawPrimitive { value, companion }))
    }

    /// A repeating primitive slot: `name` and `_name` are positionally
    /// aligned arrays with null placeholders.
    pub fn primitive_vec_raw<T: Scalar>(
        &mut self,
        name: &'static str,
    ) -> DecodeResult<Vec<RawPrimitive<'a, T>>> {
        self.claim_with_companion(name);
        let underscore = format!("_{name}");
        let scalars = self.map.get(name);
        let companions = self.map.get(underscore.as_str());
        if scalars.is_none() && companions.is_none() {
            return Ok(Vec::new());
        }

        let scalars = match scalars {
            None => None,
            Some(Value::Array(items)) => Some(items),
            Some(_) => {
                return Err(self.err_at(
                    name,
                    DecodeErrorKind::Cardinality(format!(
                        "repeating field `{name}` encoded as a singleton"
                    )),
                ))
            }
        };
        let companions = match companions {
            None => None,
            Some(Value::Array(items)) => Some(items),
            Some(_) => {
                return Err(self.err_at(
                    &underscore,
                    DecodeErrorKind::CompanionMisalignment(format!(
                        "companion of repeating field `{name}` must be an array"
                    )),
                ))
            }
        };
        if let (Some(s), Some(c)) = (scalars, companions) {
            if s.len() != c.len() {
                return Err(self.err_at(
                    &underscore,
                    DecodeErrorKind::CompanionMisalignment(format!(
                        "`_{name}` has {} entries, `{name}` has {}",
                        c.len(),
                        s.len()
                    )),
                ));
            }
        }

        let len = scalars
            .map(|s| s.len())
            .or_else(|| companions.map(|c| c.len()))
            .unwrap_or(0);
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let value = match scalars.and_then(|s| s.get(i)) {
                None | Some(Value::Null) => None,
                Some(other) => Some(
                    T::from_json(other)
                        .map_err(|e| self.scalar_error(name, Some(i), T::NAME, e))?,
                ),
            };
            let companion = match companions.and_then(|c| c.get(i)) {
                None | Some(Value::Null) => None,
                Some(v @ Value::Object(_)) => Some(v),
                Some(_) => {
                    return Err(self.err_at_index(
                        &underscore,
                        i,
                        DecodeErrorKind::CompanionMisalignment(format!(
                            "companion entries of `{name}` must be objects or null"
                        )),
                    ))
                }
            };
            out.push(RawPrimitive { value, companion });
        }
        Ok(out)
    }

    /// An optional singleton complex/backbone slot.
    pub fn complex<T: FhirDecode>(&mut self, name: &'static str) -> DecodeResult<Option<T>> {
        self.claim(name);
        self.check_complex_companion(name, false)?;
        let Some(value) = self.map.get(name) else {
            return Ok(None);
        };
        if value.is_array() {
            return Err(self.err_at(
                name,
                DecodeErrorKind::Cardinality(format!(
                    "singleton field `{name}` encoded as an array"
                )),
            ));
        }
        self.ctx.push_field(name);
        let decoded = T::decode(value, self.ctx)?;
        self.ctx.pop();
        Ok(Some(decoded))
    }

    /// A required singleton complex/backbone slot.
    pub fn complex_req<T: FhirDecode>(&mut self, name: &'static str) -> DecodeResult<T> {
        match self.complex(name)? {
            Some(v) => Ok(v),
            None => Err(self.err_at(name, DecodeErrorKind::RequiredFieldMissing(name))),
        }
    }

    /// A repeating complex/backbone slot; absent decodes as empty.
    pub fn complex_vec<T: FhirDecode>(&mut self, name: &'static str) -> DecodeResult<Vec<T>> {
        self.claim(name);
        self.check_complex_companion(name, true)?;
        let Some(value) = self.map.get(name) else {
            return Ok(Vec::new());
        };
        let Value::Array(items) = value else {
            return Err(self.err_at(
                name,
                DecodeErrorKind::Cardinality(format!(
                    "repeating field `{name}` encoded as a singleton"
                )),
            ));
        };
        let mut out = Vec::with_capacity(items.len());
        self.ctx.push_field(name);
        for (i, item) in items.iter().enumerate() {
            self.ctx.push_index(i);
            out.push(T::decode(item, self.ctx)?);
            self.ctx.pop();
        }
        self.ctx.pop();
        Ok(out)
    }

    /// A repeating slot with min cardinality 1.
    pub fn complex_vec1<T: FhirDecode>(&mut self, name: &'static str) -> DecodeResult<Vec<T>> {
        let out = self.complex_vec(name)?;
        if out.is_empty() {
            return Err(self.err_at(name, DecodeErrorKind::RequiredFieldMissing(name)));
        }
        Ok(out)
    }

    /// Scan a polymorphic slot. Returns the single populated variant wire
    /// name, or None when the slot is absent. Presence counts the `_name`
    /// companion form as well.
    pub fn choice(&mut self, slot: &ChoiceSlot) -> DecodeResult<Option<&'static str>> {
        let mut found: Option<&'static str> = None;
        for &variant in slot.variants {
            let present = self.map.contains_key(variant)
                || self.map.contains_key(format!("_{variant}").as_str());
            if present {
                if let Some(first) = found {
                    return Err(self.ctx.error(DecodeErrorKind::MultiplePolymorphicVariants {
                        base: slot.base,
                        first,
                        second: variant,
                    }));
                }
                found = Some(variant);
            }
        }
        Ok(found)
    }

    /// Like [`choice`](Self::choice) but the slot has min cardinality 1.
    pub fn choice_req(&mut self, slot: &ChoiceSlot) -> DecodeResult<&'static str> {
        match self.choice(slot)? {
            Some(name) => Ok(name),
            None => Err(self
                .ctx
                .error(DecodeErrorKind::RequiredFieldMissing(slot.base))),
        }
    }

    /// The `contained` sequence: flat, bounded, each entry a full resource.
    pub fn contained<T: FhirDecode>(&mut self) -> DecodeResult<Vec<T>> {
        self.claim("contained");
        let Some(value) = self.map.get("contained") else {
            return Ok(Vec::new());
        };
        let Value::Array(items) = value else {
            return Err(self.err_at(
                "contained",
                DecodeErrorKind::Cardinality(
                    "repeating field `contained` encoded as a singleton".to_string(),
                ),
            ));
        };
        if self.ctx.in_contained && !items.is_empty() {
            return Err(self.err_at("contained", DecodeErrorKind::ContainedNesting));
        }
        let max = self.ctx.options.max_contained;
        if items.len() > max {
            return Err(self.err_at(
                "contained",
                DecodeErrorKind::Cardinality(format!(
                    "{} contained resources exceed the limit of {max}",
                    items.len()
                )),
            ));
        }
        let mut out = Vec::with_capacity(items.len());
        let outer = self.ctx.in_contained;
        self.ctx.in_contained = true;
        self.ctx.push_field("contained");
        for (i, item) in items.iter().enumerate() {
            self.ctx.push_index(i);
            out.push(T::decode(item, self.ctx)?);
            self.ctx.pop();
        }
        self.ctx.pop();
        self.ctx.in_contained = outer;
        Ok(out)
    }

    /// Apply the unknown-field policy to everything left unclaimed.
    pub fn finish(mut self) -> DecodeResult<Map<String, Value>> {
        let mut unknown = Map::new();
        let map = self.map;
        for (key, value) in map {
            if self.is_claimed(key) {
                continue;
            }
            match self.ctx.options.unknown_fields {
                UnknownFieldPolicy::Reject => {
                    return Err(self.err_at(key, DecodeErrorKind::UnknownField(key.clone())));
                }
                UnknownFieldPolicy::Preserve => {
                    tracing::trace!(field = %key, path = %self.ctx.pointer(), "preserving unknown field");
                    unknown.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(unknown)
    }

    fn check_complex_companion(
        &mut self,
        name: &'static str,
        expect_array: bool,
    ) -> DecodeResult<()> {
        let underscore = format!("_{name}");
        let Some(companion) = self.map.get(underscore.as_str()) else {
            return Ok(());
        };
        if expect_array {
            let value_len = match self.map.get(name) {
                Some(Value::Array(items)) => items.len(),
                Some(_) => 1,
                None => 0,
            };
            match companion {
                Value::Array(entries) if entries.len() != value_len => {
                    return Err(self.err_at(
                        &underscore,
                        DecodeErrorKind::CompanionMisalignment(format!(
                            "`{underscore}` has {} entries, `{name}` has {value_len}",
                            entries.len()
                        )),
                    ))
                }
                Value::Array(_) => {}
                _ => {
                    return Err(self.err_at(
                        &underscore,
                        DecodeErrorKind::CompanionMisalignment(format!(
                            "companion of repeating field `{name}` must be an array"
                        )),
                    ))
                }
            }
        } else if companion.is_array() {
            return Err(self.err_at(
                &underscore,
                DecodeErrorKind::CompanionMisalignment(format!(
                    "companion of singleton field `{name}` must be an object"
                )),
            ));
        }
        // Aligned but undeclared for this element kind: the unknown-field
        // policy decides its fate.
        Ok(())
    }
}

impl Drop for ObjectDecoder<'_, '_> {
    fn drop(&mut self) {
        self.ctx.ascend();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Probe {
        note: Option<RawValue>,
    }

    #[derive(Debug, PartialEq)]
    struct RawValue(String);

    impl FhirDecode for Probe {
        fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
            let mut obj = ObjectDecoder::new(value, ctx)?;
            let note = obj
                .primitive_raw::<String>("note")?
                .and_then(|raw| raw.value.map(RawValue));
            obj.finish()?;
            Ok(Self { note })
        }
    }

    fn decode_probe(value: Value, options: &DecodeOptions) -> DecodeResult<Probe> {
        let mut ctx = DecodeContext::new(options);
        Probe::decode(&value, &mut ctx)
    }

    #[test]
    fn unknown_fields_preserved_by_default() {
        let options = DecodeOptions::default();
        let probe = decode_probe(json!({"note": "hi", "custom": 1}), &options);
        assert!(probe.is_ok());
    }

    #[test]
    fn unknown_fields_rejected_in_strict_mode() {
        let options = DecodeOptions::default().with_unknown_fields(UnknownFieldPolicy::Reject);
        let err = decode_probe(json!({"note": "hi", "custom": 1}), &options).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::UnknownField("custom".into()));
        assert_eq!(err.path, "/custom");
    }

    #[test]
    fn singleton_as_array_is_a_cardinality_error() {
        let options = DecodeOptions::default();
        let err = decode_probe(json!({"note": ["hi"]}), &options).unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::Cardinality(_)));
    }

    #[test]
    fn choice_rejects_two_variants() {
        let options = DecodeOptions::default();
        let mut ctx = DecodeContext::new(&options);
        let doc = json!({"valueString": "a", "valueBoolean": true});
        let mut obj = ObjectDecoder::new(&doc, &mut ctx).unwrap();
        let slot = ChoiceSlot {
            base: "value",
            variants: &["valueString", "valueBoolean"],
        };
        let err = obj.choice(&slot).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::MultiplePolymorphicVariants {
                base: "value",
                first: "valueString",
                second: "valueBoolean",
            }
        );
    }

    #[test]
    fn choice_counts_companion_only_presence() {
        let options = DecodeOptions::default();
        let mut ctx = DecodeContext::new(&options);
        let doc = json!({"_valueString": {"id": "v"}});
        let mut obj = ObjectDecoder::new(&doc, &mut ctx).unwrap();
        let slot = ChoiceSlot {
            base: "value",
            variants: &["valueString", "valueBoolean"],
        };
        assert_eq!(obj.choice(&slot).unwrap(), Some("valueString"));
    }

    #[test]
    fn companion_array_length_mismatch() {
        let options = DecodeOptions::default();
        let mut ctx = DecodeContext::new(&options);
        let doc = json!({"given": ["a", "b"], "_given": [null]});
        let mut obj = ObjectDecoder::new(&doc, &mut ctx).unwrap();
        let err = obj.primitive_vec_raw::<String>("given").unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::CompanionMisalignment(_)
        ));
        assert_eq!(err.path, "/_given");
    }

    #[test]
    fn depth_limit_enforced() {
        let options = DecodeOptions::default().with_max_depth(2);
        let mut ctx = DecodeContext::new(&options);
        let doc = json!({"a": {"b": {"c": {}}}});

        #[derive(Debug)]
        struct Deep;
        impl FhirDecode for Deep {
            fn decode(value: &Value, ctx: &mut DecodeContext) -> DecodeResult<Self> {
                let mut obj = ObjectDecoder::new(value, ctx)?;
                for key in ["a", "b", "c"] {
                    if obj.peek(key).is_some() {
                        obj.complex::<Deep>(key)?;
                    }
                }
                obj.finish()?;
                Ok(Deep)
            }
        }

        let err = Deep::decode(&doc, &mut ctx).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::DepthLimitExceeded(2));
    }
}
