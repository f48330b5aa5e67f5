use errs::prelude::*;

#[errs::error_type]
struct Minimal;

#[errs::error_type(name = "Custom", init = tag)]
#[derive(Default)]
struct WithFields {
    _n: u8,
}

fn tag(f: &mut Fault) {
    f.set("tagged", true);
}

fn main() {
    let factory = Factory::with_registry(Registry::discover(), Default::default());
    assert!(factory.create_typed("minimal", Properties::new()).is::<Minimal>());
    let err = factory.create_typed("custom", Properties::new());
    assert!(err.is::<WithFields>());
}
