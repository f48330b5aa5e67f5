//! Compile tests for #[error_type]

#[test]
fn ui_error_type_happy_min_ok() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/happy_min.rs");
}
