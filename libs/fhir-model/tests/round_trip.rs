//! Round-trip behavior: decode → encode → decode stability, deterministic
//! output, lossless primitives.

use aurum_model::datatypes::{CodeableConcept, CodeableReference, Reference};
use aurum_model::resources::{
    MedicationRequest, MedicationRequestAllowed, MedicationRequestSubstitution, Resource,
};
use aurum_model::{decode, encode, encode_value, Primitive};
use serde_json::json;

fn decode_json(value: serde_json::Value) -> Resource {
    decode(value.to_string().as_bytes()).expect("document should decode")
}

#[test]
fn patient_with_primitive_companion_round_trips() {
    // Companion element on a scalar: both `active` and `_active` survive.
    let doc = json!({
        "resourceType": "Patient",
        "id": "p1",
        "active": true,
        "_active": {
            "extension": [
                {"url": "http://example.org/x", "valueString": "annotated"}
            ]
        }
    });
    let resource = decode_json(doc.clone());
    let patient = resource.as_patient().expect("a Patient");
    let active = patient.active.as_ref().expect("active populated");
    assert_eq!(active.value, Some(true));
    assert_eq!(active.extension.len(), 1);
    assert_eq!(active.extension[0].url, "http://example.org/x");

    let encoded = encode_value(&resource).unwrap();
    assert_eq!(encoded["active"], json!(true));
    assert_eq!(
        encoded["_active"]["extension"][0]["valueString"],
        json!("annotated")
    );

    let again = decode(encoded.to_string().as_bytes()).unwrap();
    assert_eq!(again, resource);
}

#[test]
fn observation_value_quantity_round_trips() {
    let doc = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "HR"},
        "valueQuantity": {"value": 72, "unit": "bpm"}
    });
    let resource = decode_json(doc);
    let observation = resource.as_observation().unwrap();
    let value = observation.value.as_ref().expect("value populated");
    assert_eq!(value.type_name(), "Quantity");
    let quantity = value.as_quantity().unwrap();
    assert_eq!(
        quantity.value.as_ref().unwrap().value.as_ref().unwrap().literal(),
        "72"
    );
    assert_eq!(
        quantity.unit.as_ref().unwrap().value.as_deref(),
        Some("bpm")
    );

    let encoded = encode_value(&resource).unwrap();
    assert!(encoded.get("valueQuantity").is_some());
    assert!(encoded.get("value").is_none());

    let again = decode(encoded.to_string().as_bytes()).unwrap();
    assert_eq!(again, resource);
}

#[test]
fn wire_round_trip_is_idempotent() {
    let doc = json!({
        "resourceType": "Patient",
        "id": "p2",
        "name": [
            {"family": "Everyman", "given": ["Adam", "B"], "_given": [null, {"id": "g2"}]}
        ],
        "birthDate": "1974-12",
        "custom-field": {"nested": [1, 2, 3]}
    });
    let first = decode_json(doc);
    let bytes = encode(&first).unwrap();
    let second = decode(&bytes).unwrap();
    assert_eq!(first, second);
    // A second encode of the same value is byte-identical.
    assert_eq!(bytes, encode(&second).unwrap());
}

#[test]
fn unknown_fields_survive_round_trip() {
    let doc = json!({
        "resourceType": "Patient",
        "id": "p3",
        "vendorField": {"a": [true, null]}
    });
    let resource = decode_json(doc);
    let encoded = encode_value(&resource).unwrap();
    assert_eq!(encoded["vendorField"], json!({"a": [true, null]}));
}

#[test]
fn structurally_equal_values_encode_identically() {
    let doc = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"coding": [{"system": "http://loinc.org", "code": "8867-4"}]},
        "effectiveDateTime": "2023-01-10T08:30:00Z"
    });
    let a = decode_json(doc.clone());
    let b = decode_json(doc);
    assert_eq!(a, b);
    assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());
}

#[test]
fn decimal_and_temporal_precision_are_lossless() {
    let raw = br#"{"resourceType":"Observation","status":"final","code":{"text":"wt"},"valueQuantity":{"value":1.20},"effectiveDateTime":"2019-03"}"#;
    let resource = decode(raw).unwrap();
    let bytes = encode(&resource).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("1.20"), "trailing zero lost in {text}");
    assert!(text.contains("\"2019-03\""), "date precision lost in {text}");
}

#[test]
fn exponent_notation_survives_round_trip() {
    let raw = br#"{"resourceType":"Observation","status":"final","code":{"text":"x"},"valueQuantity":{"value":1.2e1}}"#;
    let resource = decode(raw).unwrap();
    let text = String::from_utf8(encode(&resource).unwrap()).unwrap();
    assert!(text.contains("1.2e1"), "exponent form lost in {text}");
}

#[test]
fn substitution_allowed_boolean_uses_variant_suffix() {
    // Programmatic construction: the choice slot must surface as the
    // suffixed wire field, never the bare base name.
    let request = MedicationRequest {
        status: Primitive::new("active".parse().unwrap()),
        intent: Primitive::new("order".parse().unwrap()),
        medication: CodeableReference {
            concept: Some(CodeableConcept::from_text("amoxicillin")),
            ..Default::default()
        },
        subject: Reference::to("Patient/p1"),
        substitution: Some(MedicationRequestSubstitution::allowed(
            MedicationRequestAllowed::Boolean(Primitive::new(true)),
        )),
        ..Default::default()
    };
    let encoded = aurum_model::FhirEncode::encode(&request).unwrap();
    let substitution = &encoded["substitution"];
    assert_eq!(substitution["allowedBoolean"], json!(true));
    assert!(substitution.get("allowed").is_none());
}

#[test]
fn bundle_entries_round_trip() {
    let doc = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [
            {
                "fullUrl": "urn:uuid:0d9f31b8-4f55-4672-9f2b-2f0eb8c6a883",
                "resource": {
                    "resourceType": "Patient",
                    "id": "inner",
                    "contained": [
                        {"resourceType": "Medication", "id": "m1"}
                    ]
                }
            }
        ]
    });
    let resource = decode_json(doc);
    let bundle = resource.as_bundle().unwrap();
    assert_eq!(bundle.entry.len(), 1);
    let inner = bundle.entry[0].resource.as_ref().unwrap();
    assert_eq!(inner.as_patient().unwrap().contained.len(), 1);

    let bytes = encode(&resource).unwrap();
    assert_eq!(decode(&bytes).unwrap(), resource);
}
