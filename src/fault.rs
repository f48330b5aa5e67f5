//! The error instance produced by the factory.

use crate::constructor::{self, BaseError, Constructor, ErrorConstructor, KindId};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::{error::Error as StdError, fmt};

/// Caller-supplied mapping of descriptive fields.
pub type Properties = serde_json::Map<String, Value>;

pub const MESSAGE: &str = "message";
pub const NAME: &str = "name";
pub const STACK: &str = "stack";
pub const STACKTRACE: &str = "stacktrace";

/// Structural "is this an error" capability: something exposing both a
/// `message` and a stack-like field.
pub trait ErrorLike {
    fn message_value(&self) -> Option<&Value>;
    fn stack_value(&self) -> Option<&Value>;

    fn is_error(&self) -> bool {
        self.message_value().is_some() && self.stack_value().is_some()
    }
}

impl ErrorLike for Properties {
    fn message_value(&self) -> Option<&Value> {
        self.get(MESSAGE)
    }
    fn stack_value(&self) -> Option<&Value> {
        self.get(STACK)
    }
}

/// An error instance: a constructor plus its own properties.
///
/// `message` is always present and always a string. `stack` is set by the
/// factory to a transparent trace but, like any other property, callers may
/// overwrite it with an arbitrary value.
#[derive(Clone)]
pub struct Fault {
    kind: Constructor,
    props: Properties,
}

impl Fault {
    pub(crate) fn with_kind(kind: Constructor, message: impl Into<String>) -> Self {
        let mut props = Properties::new();
        props.insert(MESSAGE.to_owned(), Value::String(message.into()));
        Self { kind, props }
    }

    /// Turn a bag that already looks like an error into a base fault, keeping
    /// every key as-is.
    pub(crate) fn adopt(bag: Properties) -> Self {
        let mut fault = Self {
            kind: constructor::base(),
            props: Properties::new(),
        };
        fault.assign(bag);
        fault
    }

    pub fn message(&self) -> &str {
        self.props
            .get(MESSAGE)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.props
            .insert(MESSAGE.to_owned(), Value::String(message.into()));
    }

    /// Display name: the `name` property when set, otherwise the constructor's name.
    pub fn name(&self) -> &str {
        self.props
            .get(NAME)
            .and_then(Value::as_str)
            .unwrap_or_else(|| self.kind.type_name())
    }

    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    pub fn constructor(&self) -> &Constructor {
        &self.kind
    }

    /// The stack text, when the `stack` property is a string.
    pub fn stack(&self) -> Option<&str> {
        self.props.get(STACK).and_then(Value::as_str)
    }

    /// Frame descriptions added by `merge`, innermost first.
    pub fn stacktrace(&self) -> Option<Vec<&str>> {
        self.props
            .get(STACKTRACE)?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }

    /// First line of the stack: `Name: message`.
    pub fn header(&self) -> String {
        let (name, message) = (self.name(), self.message());
        if message.is_empty() {
            name.to_owned()
        } else {
            format!("{name}: {message}")
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Assign one own property. `message` is coerced to a string.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if key == MESSAGE {
            self.set_message(message_text(value));
        } else {
            self.props.insert(key, value);
        }
    }

    /// Assign every entry of `bag`, overwriting same-named properties and
    /// leaving the rest alone.
    pub fn assign(&mut self, bag: Properties) {
        for (k, v) in bag {
            self.set(k, v);
        }
    }

    pub fn properties(&self) -> &Properties {
        &self.props
    }

    /// `instanceof`: every fault is a `BaseError`; otherwise the constructor must match.
    pub fn is<C: ErrorConstructor>(&self) -> bool {
        let want = KindId::of::<C>();
        want == KindId::of::<BaseError>() || self.kind.kind_id() == want
    }

    pub fn is_instance_of(&self, ctor: &Constructor) -> bool {
        ctor.kind_id() == KindId::of::<BaseError>() || self.kind.kind_id() == ctor.kind_id()
    }

    /// JSON projection through the current slot (see [`crate::json`]).
    pub fn to_json(&self) -> Value {
        crate::json::project(self)
    }
}

/// Text of a `message` value: strings verbatim, anything else as JSON.
pub(crate) fn message_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl ErrorLike for Fault {
    fn message_value(&self) -> Option<&Value> {
        self.props.get(MESSAGE)
    }
    fn stack_value(&self) -> Option<&Value> {
        self.props.get(STACK)
    }
    fn is_error(&self) -> bool {
        true
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("type", &self.kind.type_name())
            .field("props", &self.props)
            .finish()
    }
}

impl StdError for Fault {}

impl Serialize for Fault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_is_coerced_to_text() {
        let mut f = Fault::with_kind(constructor::base(), "x");
        f.set("message", 42);
        assert_eq!(f.message(), "42");
        assert_eq!(f.get("message"), Some(&json!("42")));
    }

    #[test]
    fn header_falls_back_to_type_name() {
        let mut f = Fault::with_kind(constructor::base(), "");
        assert_eq!(f.header(), "Error");
        f.set("name", "OverflowError");
        f.set_message("too big");
        assert_eq!(f.header(), "OverflowError: too big");
    }

    #[test]
    fn adopted_bag_keeps_non_string_stack() {
        let bag = json!({"message": "m", "stack": true, "code": 3});
        let Value::Object(bag) = bag else { unreachable!() };
        assert!(bag.is_error());
        let f = Fault::adopt(bag);
        assert_eq!(f.stack(), None);
        assert_eq!(f.get("stack"), Some(&json!(true)));
        assert_eq!(f.get("code"), Some(&json!(3)));
        assert!(f.is::<BaseError>());
    }

    #[test]
    fn stacktrace_requires_string_array() {
        let mut f = Fault::with_kind(constructor::base(), "m");
        assert!(f.stacktrace().is_none());
        f.set("stacktrace", json!(["a", "b"]));
        assert_eq!(f.stacktrace(), Some(vec!["a", "b"]));
        f.set("stacktrace", json!(["a", 1]));
        assert!(f.stacktrace().is_none());
    }
}
