//! The projection slot is process-wide; this file holds the only test that swaps it.

use errs::json;
use errs::prelude::*;
use serde_json::Value;
use std::sync::Arc;

#[test]
fn projection_slot_is_writable_and_restorable() {
    let factory = Factory::default();
    let err = factory.create("Testing 12345");

    let orig = json::set_projection(Arc::new(|_: &Fault| Value::String("foo".into())));
    assert_eq!(err.to_json(), Value::String("foo".into()));
    assert_eq!(serde_json::to_string(&err).expect("serialize"), "\"foo\"");

    let swapped = json::set_projection(orig);
    assert_eq!(swapped(&err), Value::String("foo".into()));
    assert_eq!(err.to_json(), json::default_projection(&err));

    json::set_projection(Arc::new(|f: &Fault| Value::String(f.message().to_uppercase())));
    assert_eq!(err.to_json(), Value::String("TESTING 12345".into()));
    json::reset_projection();
    assert_eq!(err.to_json()["message"], Value::String("Testing 12345".into()));
}
