//! Reference parsing and contained-fragment resolution. References stay
//! opaque locators; nothing here dereferences across resources.

use aurum_model::datatypes::{parse_reference, ReferenceParts};
use aurum_model::{decode, resolve_fragment};
use serde_json::json;

#[test]
fn locator_grammar() {
    assert_eq!(
        parse_reference("Patient/p1"),
        ReferenceParts::Relative {
            type_hint: Some("Patient"),
            id: "p1",
            version_id: None,
        }
    );
    assert_eq!(
        parse_reference("Observation/o2/_history/5"),
        ReferenceParts::Relative {
            type_hint: Some("Observation"),
            id: "o2",
            version_id: Some("5"),
        }
    );
    assert_eq!(parse_reference("#contained-id"), ReferenceParts::Fragment("contained-id"));
    assert_eq!(
        parse_reference("http://example.org/fhir/Patient/p1"),
        ReferenceParts::Absolute("http://example.org/fhir/Patient/p1")
    );
}

#[test]
fn fragment_resolution_searches_contained() {
    let doc = json!({
        "resourceType": "MedicationRequest",
        "status": "active",
        "intent": "order",
        "medication": {"reference": {"reference": "#med1"}},
        "subject": {"reference": "Patient/p1"},
        "contained": [
            {"resourceType": "Medication", "id": "med0"},
            {"resourceType": "Medication", "id": "med1",
             "code": {"text": "amoxicillin"}}
        ]
    });
    let resource = decode(doc.to_string().as_bytes()).unwrap();

    let resolved = resolve_fragment(&resource, "#med1").expect("fragment should resolve");
    assert_eq!(
        resolved
            .id()
            .and_then(|id| id.value.as_ref())
            .map(|id| id.as_str()),
        Some("med1")
    );

    assert!(resolve_fragment(&resource, "#missing").is_none());
    // Bare ids are not fragments.
    assert!(resolve_fragment(&resource, "med1").is_none());
}

#[test]
fn reference_parts_accessor_on_decoded_values() {
    let doc = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "HR"},
        "subject": {"reference": "Patient/p1", "display": "Adam Everyman"}
    });
    let resource = decode(doc.to_string().as_bytes()).unwrap();
    let observation = resource.as_observation().unwrap();
    let subject = observation.subject.as_ref().unwrap();
    assert_eq!(
        subject.parts(),
        Some(ReferenceParts::Relative {
            type_hint: Some("Patient"),
            id: "p1",
            version_id: None,
        })
    );
}
