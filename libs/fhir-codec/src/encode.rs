//! Encode machinery: ordered object builder with companion-element support.
//!
//! Fields are emitted in catalog order; `serde_json`'s preserve_order map
//! keeps that order on the wire, so structurally equal values serialize to
//! byte-identical JSON. Absent slots are omitted entirely; JSON null only
//! ever appears as an alignment placeholder inside `name`/`_name` array
//! pairs.

use crate::error::EncodeError;
use serde_json::{Map, Value};

/// Anything that can render itself as a JSON subtree.
pub trait FhirEncode {
    fn encode(&self) -> Result<Value, EncodeError>;
}

impl<T: FhirEncode> FhirEncode for Box<T> {
    fn encode(&self) -> Result<Value, EncodeError> {
        (**self).encode()
    }
}

/// Ordered builder for one JSON object.
#[derive(Default)]
pub struct ObjectEncoder {
    map: Map<String, Value>,
}

impl ObjectEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The discriminator; resources emit it first.
    pub fn resource_type(&mut self, name: &'static str) {
        self.map
            .insert("resourceType".to_string(), Value::String(name.to_string()));
    }

    /// `Element.id` as a plain string.
    pub fn element_id(&mut self, id: Option<&str>) {
        if let Some(id) = id {
            self.map.insert("id".to_string(), Value::String(id.to_string()));
        }
    }

    /// Insert an already-rendered subtree.
    pub fn raw(&mut self, name: &str, value: Value) {
        self.map.insert(name.to_string(), value);
    }

    /// A singleton primitive slot: scalar half and/or companion half.
    pub fn scalar_parts(&mut self, name: &str, value: Option<Value>, companion: Option<Value>) {
        if let Some(value) = value {
            self.map.insert(name.to_string(), value);
        }
        if let Some(companion) = companion {
            self.map.insert(format!("_{name}"), companion);
        }
    }

    /// A repeating primitive slot. Each entry contributes its scalar half
    /// and companion half; a half is emitted only if some entry populates
    /// it, null-padded so the arrays stay positionally aligned.
    pub fn scalar_vec_parts(&mut self, name: &str, entries: Vec<(Option<Value>, Option<Value>)>) {
        if entries.is_empty() {
            return;
        }
        let any_value = entries.iter().any(|(v, _)| v.is_some());
        let any_companion = entries.iter().any(|(_, c)| c.is_some());
        if any_value {
            let values: Vec<Value> = entries
                .iter()
                .map(|(v, _)| v.clone().unwrap_or(Value::Null))
                .collect();
            self.map.insert(name.to_string(), Value::Array(values));
        }
        if any_companion {
            let companions: Vec<Value> = entries
                .into_iter()
                .map(|(_, c)| c.unwrap_or(Value::Null))
                .collect();
            self.map.insert(format!("_{name}"), Value::Array(companions));
        }
    }

    /// An optional singleton complex/backbone slot.
    pub fn complex<T: FhirEncode>(
        &mut self,
        name: &str,
        value: Option<&T>,
    ) -> Result<(), EncodeError> {
        if let Some(value) = value {
            let rendered = value.encode()?;
            self.map.insert(name.to_string(), rendered);
        }
        Ok(())
    }

    /// A repeating complex/backbone slot; empty sequences are omitted.
    pub fn complex_vec<T: FhirEncode>(&mut self, name: &str, values: &[T]) -> Result<(), EncodeError> {
        if values.is_empty() {
            return Ok(());
        }
        let mut rendered = Vec::with_capacity(values.len());
        for value in values {
            rendered.push(value.encode()?);
        }
        self.map.insert(name.to_string(), Value::Array(rendered));
        Ok(())
    }

    /// Close the object, re-emitting preserved unknown fields last in their
    /// decoded order.
    pub fn finish(mut self, unknown: &Map<String, Value>) -> Value {
        for (key, value) in unknown {
            self.map.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Value::Object(self.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_slots_are_omitted() {
        let mut obj = ObjectEncoder::new();
        obj.element_id(None);
        obj.scalar_parts("active", None, None);
        assert_eq!(obj.finish(&Map::new()), json!({}));
    }

    #[test]
    fn companion_only_primitive_emits_only_underscore_form() {
        let mut obj = ObjectEncoder::new();
        obj.scalar_parts("birthDate", None, Some(json!({"id": "bd"})));
        assert_eq!(obj.finish(&Map::new()), json!({"_birthDate": {"id": "bd"}}));
    }

    #[test]
    fn repeating_primitives_null_align() {
        let mut obj = ObjectEncoder::new();
        obj.scalar_vec_parts(
            "given",
            vec![
                (Some(json!("Adam")), None),
                (None, Some(json!({"id": "g1"}))),
            ],
        );
        assert_eq!(
            obj.finish(&Map::new()),
            json!({"given": ["Adam", null], "_given": [null, {"id": "g1"}]})
        );
    }

    #[test]
    fn unknown_fields_append_after_declared() {
        let mut obj = ObjectEncoder::new();
        obj.raw("status", json!("final"));
        let mut unknown = Map::new();
        unknown.insert("custom".to_string(), json!(7));
        let rendered = obj.finish(&unknown);
        let keys: Vec<&String> = rendered.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["status", "custom"]);
    }
}
