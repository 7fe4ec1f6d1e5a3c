//! Determinism of the load → extract → format pipeline.
//!
//! The document model's maps are hash-ordered, so nothing about the
//! pipeline may depend on iteration order: extracting the same bytes twice
//! must produce identical collections, including every byte of detail text.

use crate::extract;
use crate::model::{ComponentKind, HttpMethod};
use crate::test_harness::{load_fixture, petstore_31_json};

#[test]
fn repeated_extraction_is_byte_identical() {
    let first = extract::extract(&load_fixture(petstore_31_json()));
    let second = extract::extract(&load_fixture(petstore_31_json()));
    assert_eq!(first, second);
}

#[test]
fn endpoint_order_is_path_then_method_name() {
    let catalog = extract::extract(&load_fixture(petstore_31_json()));
    let keys: Vec<(&str, &str)> = catalog
        .endpoints
        .iter()
        .map(|e| (e.path.as_str(), e.method.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("/owners", "GET"),
            ("/pets", "GET"),
            ("/pets", "POST"),
            ("/pets/{petId}", "DELETE"),
            ("/pets/{petId}", "GET"),
        ]
    );
}

#[test]
fn component_order_is_kind_name_then_component_name() {
    let catalog = extract::extract(&load_fixture(petstore_31_json()));
    let keys: Vec<(ComponentKind, &str)> = catalog
        .components
        .iter()
        .map(|c| (c.kind, c.name.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (ComponentKind::Header, "X-Rate-Limit"),
            (ComponentKind::Parameter, "limitParam"),
            (ComponentKind::RequestBody, "PetBody"),
            (ComponentKind::Response, "NotFound"),
            (ComponentKind::Schema, "Error"),
            (ComponentKind::Schema, "Pet"),
            (ComponentKind::SecurityScheme, "bearerAuth"),
        ]
    );
}

#[test]
fn webhook_order_is_name_then_method_name() {
    let catalog = extract::extract(&load_fixture(petstore_31_json()));
    let keys: Vec<(&str, HttpMethod)> = catalog
        .webhooks
        .iter()
        .map(|w| (w.name.as_str(), w.method))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("newPet", HttpMethod::Post),
            ("pet.deleted", HttpMethod::Post),
        ]
    );
}

#[test]
fn response_codes_appear_sorted_in_detail_text() {
    let catalog = extract::extract(&load_fixture(petstore_31_json()));
    let get_pet = catalog
        .endpoints
        .iter()
        .find(|e| e.path == "/pets/{petId}" && e.method == HttpMethod::Get)
        .expect("fixture has GET /pets/{petId}");

    let lines: Vec<&str> = get_pet.detail.lines().collect();
    let responses_at = lines
        .iter()
        .position(|l| *l == "Responses:")
        .expect("detail has a responses section");
    assert_eq!(lines[responses_at + 1], "  - 200: a pet");
    assert_eq!(lines[responses_at + 2], "  - 404: not found");
    assert_eq!(lines[responses_at + 3], "  - default: unexpected error");
}

#[test]
fn media_types_appear_sorted_in_detail_text() {
    let catalog = extract::extract(&load_fixture(petstore_31_json()));
    let create_pet = catalog
        .endpoints
        .iter()
        .find(|e| e.path == "/pets" && e.method == HttpMethod::Post)
        .expect("fixture has POST /pets");

    let body_at = create_pet
        .detail
        .lines()
        .position(|l| l == "Request Body:")
        .expect("detail has a request body section");
    let lines: Vec<&str> = create_pet.detail.lines().collect();
    assert_eq!(lines[body_at + 1], "  - application/json");
    assert_eq!(lines[body_at + 2], "  - application/xml");
}

#[test]
fn schema_properties_appear_sorted_in_detail_text() {
    let catalog = extract::extract(&load_fixture(petstore_31_json()));
    let pet = catalog
        .components
        .iter()
        .find(|c| c.kind == ComponentKind::Schema && c.name == "Pet")
        .expect("fixture has the Pet schema");

    let expected = "Type: object\n\
                    Required: id, name\n\
                    Properties:\n  - id: integer\n  - name: string\n  - tag: string, null";
    assert_eq!(pet.detail, expected);
    assert_eq!(pet.description, "A pet");
}
