//! Structural rejection behavior: every error carries its kind and a JSON
//! Pointer into the offending input.

use aurum_model::{decode, decode_with, DecodeErrorKind, DecodeOptions, UnknownFieldPolicy};
use serde_json::json;

fn decode_err(value: serde_json::Value) -> aurum_model::DecodeError {
    decode(value.to_string().as_bytes()).expect_err("document should be rejected")
}

#[test]
fn malformed_json_is_rejected() {
    let err = decode(b"{not json").unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::Malformed(_)));
    assert_eq!(err.path, "/");
}

#[test]
fn missing_resource_type() {
    let err = decode_err(json!({"id": "p1"}));
    assert!(matches!(err.kind, DecodeErrorKind::UnknownResourceType(_)));
}

#[test]
fn unknown_resource_type() {
    let err = decode_err(json!({"resourceType": "Widget"}));
    assert_eq!(
        err.kind,
        DecodeErrorKind::UnknownResourceType("Widget".to_string())
    );
}

#[test]
fn two_choice_variants_are_rejected() {
    let err = decode_err(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "HR"},
        "valueQuantity": {"value": 72, "unit": "bpm"},
        "valueString": "x"
    }));
    assert_eq!(
        err.kind,
        DecodeErrorKind::MultiplePolymorphicVariants {
            base: "value",
            first: "valueQuantity",
            second: "valueString",
        }
    );
    assert_eq!(err.path, "/");
}

#[test]
fn companion_only_variant_counts_for_exclusivity() {
    let err = decode_err(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "HR"},
        "valueBoolean": true,
        "_valueString": {"id": "v"}
    }));
    assert!(matches!(
        err.kind,
        DecodeErrorKind::MultiplePolymorphicVariants { .. }
    ));
}

#[test]
fn required_field_missing_has_field_path() {
    let err = decode_err(json!({
        "resourceType": "AllergyIntolerance",
        "code": {"text": "peanut"}
    }));
    assert_eq!(err.kind, DecodeErrorKind::RequiredFieldMissing("patient"));
    assert_eq!(err.path, "/patient");
}

#[test]
fn patient_has_no_required_fields() {
    assert!(decode(br#"{"resourceType":"Patient"}"#).is_ok());
}

#[test]
fn nested_contained_is_rejected() {
    let err = decode_err(json!({
        "resourceType": "Patient",
        "contained": [
            {
                "resourceType": "Organization",
                "id": "org1",
                "contained": [
                    {"resourceType": "Organization", "id": "org2"}
                ]
            }
        ]
    }));
    assert_eq!(err.kind, DecodeErrorKind::ContainedNesting);
    assert_eq!(err.path, "/contained/0/contained");
}

#[test]
fn contained_resources_need_an_id() {
    let err = decode_err(json!({
        "resourceType": "Patient",
        "contained": [
            {"resourceType": "Organization", "name": "Anonymous"}
        ]
    }));
    assert_eq!(err.kind, DecodeErrorKind::RequiredFieldMissing("id"));
    assert_eq!(err.path, "/contained/0/id");
}

#[test]
fn companion_array_length_mismatch() {
    // `class` is complex-typed; its `_class` sibling must still line up.
    let err = decode_err(json!({
        "resourceType": "Encounter",
        "status": "in-progress",
        "class": [{"coding": [{"code": "AMB"}]}],
        "_class": [null, {"extension": [{"url": "u", "valueCode": "c"}]}]
    }));
    assert!(matches!(
        err.kind,
        DecodeErrorKind::CompanionMisalignment(_)
    ));
    assert_eq!(err.path, "/_class");
}

#[test]
fn primitive_companion_array_length_mismatch() {
    let err = decode_err(json!({
        "resourceType": "Patient",
        "name": [{"given": ["Adam", "B"], "_given": [null]}]
    }));
    assert!(matches!(
        err.kind,
        DecodeErrorKind::CompanionMisalignment(_)
    ));
    assert_eq!(err.path, "/name/0/_given");
}

#[test]
fn singleton_as_array_is_a_cardinality_error() {
    let err = decode_err(json!({
        "resourceType": "Patient",
        "active": [true]
    }));
    assert!(matches!(err.kind, DecodeErrorKind::Cardinality(_)));
    assert_eq!(err.path, "/active");
}

#[test]
fn array_as_singleton_is_a_cardinality_error() {
    let err = decode_err(json!({
        "resourceType": "Patient",
        "name": {"family": "Everyman"}
    }));
    assert!(matches!(err.kind, DecodeErrorKind::Cardinality(_)));
    assert_eq!(err.path, "/name");
}

#[test]
fn lexical_errors_carry_the_primitive_path() {
    let err = decode_err(json!({
        "resourceType": "Patient",
        "birthDate": "74-12-25"
    }));
    assert!(matches!(
        err.kind,
        DecodeErrorKind::Lexical { type_name: "date", .. }
    ));
    assert_eq!(err.path, "/birthDate");
}

#[test]
fn integer_range_errors_are_distinguished() {
    let err = decode_err(json!({
        "resourceType": "Patient",
        "multipleBirthInteger": 3000000000_u64
    }));
    assert!(matches!(
        err.kind,
        DecodeErrorKind::Range { type_name: "integer", .. }
    ));
}

#[test]
fn unknown_fields_rejected_in_strict_mode() {
    let options =
        DecodeOptions::default().with_unknown_fields(UnknownFieldPolicy::Reject);
    let doc = json!({
        "resourceType": "Patient",
        "vendorField": true
    });
    let err = decode_with(doc.to_string().as_bytes(), &options).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::UnknownField("vendorField".to_string())
    );
    assert_eq!(err.path, "/vendorField");
}

#[test]
fn typed_resource_mismatch_is_reported() {
    use aurum_model::resources::Patient;
    use aurum_model::{DecodeContext, FhirDecode};

    let doc = json!({"resourceType": "Observation", "status": "final", "code": {"text": "x"}});
    let options = DecodeOptions::default();
    let mut ctx = DecodeContext::new(&options);
    let err = Patient::decode(&doc, &mut ctx).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::UnknownResourceType(_)));
}

#[test]
fn recursion_is_bounded_by_max_depth() {
    // Composition sections nest; a hostile document cannot recurse past
    // the configured bound.
    let mut section = json!({"title": "leaf"});
    for _ in 0..40 {
        section = json!({"title": "node", "section": [section]});
    }
    let doc = json!({
        "resourceType": "Composition",
        "status": "final",
        "type": {"text": "note"},
        "date": "2024-01-01",
        "author": [{"display": "Dr"}],
        "title": "deep",
        "section": [section]
    });
    let options = DecodeOptions::default().with_max_depth(16);
    let err = decode_with(doc.to_string().as_bytes(), &options).unwrap_err();
    assert_eq!(err.kind, DecodeErrorKind::DepthLimitExceeded(16));
}

#[test]
fn contained_count_is_bounded() {
    let contained: Vec<_> = (0..5)
        .map(|i| json!({"resourceType": "Medication", "id": format!("m{i}")}))
        .collect();
    let doc = json!({
        "resourceType": "Patient",
        "contained": contained
    });
    let options = DecodeOptions::default().with_max_contained(3);
    let err = decode_with(doc.to_string().as_bytes(), &options).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::Cardinality(_)));
    assert_eq!(err.path, "/contained");
}
