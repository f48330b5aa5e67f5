//! No stack built by `create` or `merge` names a frame inside the library.

use errs::prelude::*;
use errs::stack::origin_of;

#[errs::error_type]
struct NamedError;

fn assert_transparent(f: &Fault) {
    let stack = f.stack().expect("stack is a string");
    let mut lines = stack.lines();
    assert_eq!(lines.next(), Some(f.header().as_str()));
    for line in lines {
        let desc = line.trim_start().strip_prefix("at ").expect("frame line");
        let symbol = desc.split(" (").next().unwrap_or(desc);
        assert_ne!(origin_of(symbol), Some("errs"), "library frame leaked: {line}");
        assert!(!line.contains("errs::"), "library frame leaked: {line}");
        assert!(!line.contains("backtrace::"), "capture frame leaked: {line}");
    }
}

#[test]
fn string_input() {
    assert_transparent(&Factory::default().create("boom"));
}

#[test]
fn bag_input() {
    assert_transparent(&Factory::default().create(props!({ "name": "OverflowError", "code": 1 })));
}

#[test]
fn registered_type_input() {
    let factory = Factory::default();
    factory.registry().register("named", NamedError);
    let err = factory.create_typed("named", props!({ "message": "boom", "code": 7 }));
    assert!(err.is::<NamedError>());
    assert_eq!(err.message(), "boom");
    assert_eq!(err.get("code"), Some(&serde_json::json!(7)));
    assert_transparent(&err);
}

#[test]
fn merge_inputs() {
    let factory = Factory::default();
    assert_transparent(&factory.merge(Raised::Nothing, props!({ "message": "m" })));
    assert_transparent(&factory.merge(props!({ "stack": true }), props!({ "message": "Override!" })));
    assert_transparent(&factory.merge(factory.create("x"), Properties::new()));
}

#[test]
fn caller_frames_survive() {
    #[inline(never)]
    fn raise_here(factory: &Factory) -> Fault {
        factory.create("from a helper")
    }
    let err = raise_here(&Factory::default());
    let stack = err.stack().expect("stack");
    let lines: Vec<&str> = stack.lines().collect();
    assert_eq!(lines[0], "Error: from a helper");
    assert!(
        lines[1].contains("transparency::caller_frames_survive::raise_here"),
        "innermost frame should be the caller: {stack}"
    );
    assert!(
        lines[2].contains("transparency::caller_frames_survive ("),
        "caller's caller should follow: {stack}"
    );
    assert!(lines.len() <= 1 + errs::config::DEFAULT_STACK_TRACE_LIMIT);

    let merged = Factory::default().merge(err, Properties::new());
    let frames = merged.stacktrace().expect("stacktrace");
    assert!(frames[0].starts_with("transparency::caller_frames_survive::raise_here"));
    assert!(frames[1].starts_with("transparency::caller_frames_survive ("));
}

#[test]
fn wrapper_origins_can_be_hidden() {
    let factory = Factory::new(errs::FactoryConfig {
        hidden_origins: vec!["transparency".into()],
        ..Default::default()
    });
    let err = factory.create("hidden caller");
    for line in err.stack().expect("stack").lines().skip(1) {
        assert!(!line.contains("transparency::"), "hidden origin leaked: {line}");
    }
}
