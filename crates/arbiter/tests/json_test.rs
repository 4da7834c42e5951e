//! JSON export of validation failures.
#![cfg(feature = "serde")]

use arbiter::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn leaf_error_serializes_with_params() {
    let error = length(2, 4).validate("abcdef").unwrap_err().with_field("code");

    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({
            "code": "length",
            "message": "length is not between 2 and 4",
            "field": "code",
            "params": { "min": "2", "max": "4", "actual": "6" },
            "kind": "invalid",
            "nested": [],
        })
    );
}

#[test]
fn compound_error_serializes_nested_children() {
    let error = any_of![min(10), even()].validate(&3).unwrap_err();
    let value = error.to_json_value();

    assert_eq!(value["code"], "condition");
    assert_eq!(value["nested"][0]["code"], "min");
    assert_eq!(value["nested"][1]["code"], "even");
    assert_eq!(value["field"], serde_json::Value::Null);
}

#[test]
fn unsupported_kind_is_exported() {
    let error = multiple_of(0).validate(&1).unwrap_err();
    assert_eq!(error.to_json_value()["kind"], "unsupported");
}

#[test]
fn error_collection_serializes_as_array() {
    let errors = validate_with_errors(&-3, &[&min(0), &even()]);
    let value = serde_json::to_value(&errors).unwrap();

    let codes: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["min", "even"]);
}
