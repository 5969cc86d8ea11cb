//! Open-content behavior: extension ordering, the value XOR sub-extension
//! invariant, and modifier extension policy.

use aurum_model::{
    decode, decode_with, encode_value, DecodeErrorKind, DecodeOptions, ModifierPolicy,
};
use serde_json::json;

fn decode_json(value: serde_json::Value) -> aurum_model::Resource {
    decode(value.to_string().as_bytes()).expect("document should decode")
}

#[test]
fn extensions_preserve_declaration_order() {
    let doc = json!({
        "resourceType": "Patient",
        "extension": [
            {"url": "http://example.org/b", "valueInteger": 2},
            {"url": "http://example.org/a", "valueInteger": 1},
            {"url": "http://example.org/c", "valueInteger": 3}
        ]
    });
    let resource = decode_json(doc);
    let patient = resource.as_patient().unwrap();
    let urls: Vec<&str> = patient.extension.iter().map(|e| e.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "http://example.org/b",
            "http://example.org/a",
            "http://example.org/c"
        ]
    );

    let encoded = encode_value(&resource).unwrap();
    assert_eq!(encoded["extension"][0]["url"], json!("http://example.org/b"));
    assert_eq!(encoded["extension"][2]["url"], json!("http://example.org/c"));
}

#[test]
fn nested_extensions_carry_no_value() {
    let doc = json!({
        "resourceType": "Patient",
        "extension": [
            {
                "url": "http://example.org/complex",
                "extension": [
                    {"url": "part-a", "valueString": "x"},
                    {"url": "part-b", "valueDecimal": 1.5}
                ]
            }
        ]
    });
    let resource = decode_json(doc);
    let patient = resource.as_patient().unwrap();
    let outer = &patient.extension[0];
    assert!(outer.value.is_none());
    assert_eq!(outer.extension.len(), 2);
}

#[test]
fn extension_with_value_and_children_is_rejected() {
    let doc = json!({
        "resourceType": "Patient",
        "extension": [
            {
                "url": "http://example.org/x",
                "valueString": "v",
                "extension": [{"url": "part", "valueString": "w"}]
            }
        ]
    });
    let err = decode(doc.to_string().as_bytes()).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::ExtensionInvariant(_)));
    assert_eq!(err.path, "/extension/0");
}

#[test]
fn extension_without_value_or_children_is_rejected() {
    let doc = json!({
        "resourceType": "Patient",
        "extension": [{"url": "http://example.org/empty"}]
    });
    let err = decode(doc.to_string().as_bytes()).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::ExtensionInvariant(_)));
}

#[test]
fn unrecognized_modifier_extension_rejected_by_default() {
    let doc = json!({
        "resourceType": "Patient",
        "modifierExtension": [
            {"url": "http://example.org/negated", "valueBoolean": true}
        ]
    });
    let err = decode(doc.to_string().as_bytes()).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::UnrecognizedModifierExtension(
            "http://example.org/negated".to_string()
        )
    );
    assert_eq!(err.path, "/modifierExtension/0");
}

#[test]
fn unrecognized_modifier_in_nested_element_rejected() {
    let doc = json!({
        "resourceType": "Patient",
        "contact": [
            {
                "modifierExtension": [
                    {"url": "http://example.org/negated", "valueBoolean": true}
                ],
                "name": {"family": "X"}
            }
        ]
    });
    let err = decode(doc.to_string().as_bytes()).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::UnrecognizedModifierExtension(_)
    ));
    assert_eq!(err.path, "/contact/0/modifierExtension/0");
}

#[test]
fn recognized_modifier_extension_is_accepted() {
    let doc = json!({
        "resourceType": "Patient",
        "modifierExtension": [
            {"url": "http://example.org/negated", "valueBoolean": true}
        ]
    });
    let options =
        DecodeOptions::default().recognize_modifier_extension("http://example.org/negated");
    let decoded = decode_with(doc.to_string().as_bytes(), &options).unwrap();
    assert!(decoded.notes.is_empty());
}

#[test]
fn lenient_mode_notes_partially_understood_elements() {
    let doc = json!({
        "resourceType": "Patient",
        "modifierExtension": [
            {"url": "http://example.org/negated", "valueBoolean": true}
        ]
    });
    let options = DecodeOptions::default().with_unknown_modifiers(ModifierPolicy::Note);
    let decoded = decode_with(doc.to_string().as_bytes(), &options).unwrap();
    assert_eq!(decoded.notes.len(), 1);
    assert_eq!(decoded.notes[0].path, "/modifierExtension/0");
    assert_eq!(decoded.notes[0].url, "http://example.org/negated");
}

#[test]
fn companion_only_primitive_decodes_and_re_encodes() {
    let doc = json!({
        "resourceType": "Patient",
        "_birthDate": {
            "id": "bd1",
            "extension": [{"url": "http://example.org/estimated", "valueBoolean": true}]
        }
    });
    let resource = decode_json(doc);
    let patient = resource.as_patient().unwrap();
    let birth_date = patient.birth_date.as_ref().expect("slot present");
    assert!(birth_date.value.is_none());
    assert_eq!(birth_date.id.as_deref(), Some("bd1"));

    let encoded = encode_value(&resource).unwrap();
    assert!(encoded.get("birthDate").is_none());
    assert_eq!(encoded["_birthDate"]["id"], json!("bd1"));
}

#[test]
fn extension_value_choice_is_exclusive() {
    let doc = json!({
        "resourceType": "Patient",
        "extension": [
            {"url": "http://example.org/x", "valueString": "a", "valueBoolean": true}
        ]
    });
    let err = decode(doc.to_string().as_bytes()).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::MultiplePolymorphicVariants { base: "value", .. }
    ));
    assert_eq!(err.path, "/extension/0");
}
