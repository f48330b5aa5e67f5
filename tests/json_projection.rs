use errs::prelude::*;
use serde_json::{json, Value};

#[test]
fn to_json_has_the_default_fields() {
    let factory = Factory::default();
    let json = factory.create("Testing 12345").to_json();
    let obj = json.as_object().expect("object");
    for prop in ["message", "stack", "arguments", "type"] {
        assert!(obj.contains_key(prop), "missing {prop}");
    }
    assert_eq!(obj["message"], json!("Testing 12345"));
    assert_eq!(obj["arguments"], Value::Null);
    assert_eq!(obj["type"], json!("Error"));
    assert!(obj["stack"].as_str().is_some_and(|s| s.starts_with("Error: Testing 12345")));
}

#[test]
fn to_json_carries_own_properties() {
    let factory = Factory::default();
    let err = factory.create(props!({ "name": "HttpError", "status": 404, "arguments": [1, 2] }));
    let json = err.to_json();
    assert_eq!(json["status"], json!(404));
    assert_eq!(json["arguments"], json!([1, 2]));
    assert_eq!(json["type"], json!("HttpError"));
}

#[test]
fn merged_faults_project_their_frames() {
    let factory = Factory::default();
    let err = factory.merge("wat", props!({ "message": "m" }));
    assert!(err.to_json()["stacktrace"].is_array());
}

#[test]
fn serialize_goes_through_the_projection() {
    let factory = Factory::default();
    let err = factory.create(props!({ "message": "boom", "code": 7 }));
    let via_serde = serde_json::to_value(&err).expect("serialize");
    assert_eq!(via_serde, err.to_json());
    let text = serde_json::to_string(&err).expect("serialize");
    assert!(text.contains("\"code\":7"));
}
