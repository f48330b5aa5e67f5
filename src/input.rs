//! Explicit input shapes for `create` and `merge`.

use crate::error::{json_type, ErrsError, Result};
use crate::fault::{Fault, Properties};
use serde_json::Value;

/// What `Factory::create` builds from.
#[derive(Debug)]
pub enum Input {
    /// Already an error: passed through untouched.
    Existing(Fault),
    /// Plain message.
    Message(String),
    /// Property bag; `message` and `name` are interpreted, everything else copied.
    Bag(Properties),
    /// Registry lookup by name, then the bag applied as for `Bag`.
    Typed {
        type_name: String,
        properties: Properties,
    },
    /// A Rust error from elsewhere, rebuilt as a base fault.
    Foreign(anyhow::Error),
}

impl Input {
    pub fn typed(type_name: impl Into<String>, properties: Properties) -> Self {
        Input::Typed {
            type_name: type_name.into(),
            properties,
        }
    }
}

impl From<Fault> for Input {
    fn from(f: Fault) -> Self {
        Input::Existing(f)
    }
}
impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Message(s.to_owned())
    }
}
impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Message(s)
    }
}
impl From<Properties> for Input {
    fn from(p: Properties) -> Self {
        Input::Bag(p)
    }
}
impl From<anyhow::Error> for Input {
    fn from(e: anyhow::Error) -> Self {
        Input::Foreign(e)
    }
}

impl TryFrom<Value> for Input {
    type Error = ErrsError;
    fn try_from(v: Value) -> Result<Self> {
        match v {
            Value::String(s) => Ok(Input::Message(s)),
            Value::Object(m) => Ok(Input::Bag(m)),
            other => Err(ErrsError::UnsupportedInput(json_type(&other))),
        }
    }
}

/// Whatever was "thrown": the first argument of `Factory::merge`.
#[derive(Debug)]
pub enum Raised {
    /// `undefined` / `null`.
    Nothing,
    Flag(bool),
    Text(String),
    /// Numbers, arrays.
    Other(Value),
    Bag(Properties),
    Fault(Fault),
    Foreign(anyhow::Error),
}

impl From<Fault> for Raised {
    fn from(f: Fault) -> Self {
        Raised::Fault(f)
    }
}
impl From<Option<Fault>> for Raised {
    fn from(f: Option<Fault>) -> Self {
        f.map_or(Raised::Nothing, Raised::Fault)
    }
}
impl From<bool> for Raised {
    fn from(b: bool) -> Self {
        Raised::Flag(b)
    }
}
impl From<&str> for Raised {
    fn from(s: &str) -> Self {
        Raised::Text(s.to_owned())
    }
}
impl From<String> for Raised {
    fn from(s: String) -> Self {
        Raised::Text(s)
    }
}
impl From<Properties> for Raised {
    fn from(p: Properties) -> Self {
        Raised::Bag(p)
    }
}
impl From<anyhow::Error> for Raised {
    fn from(e: anyhow::Error) -> Self {
        Raised::Foreign(e)
    }
}
impl From<Value> for Raised {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Raised::Nothing,
            Value::Bool(b) => Raised::Flag(b),
            Value::String(s) => Raised::Text(s),
            Value::Object(m) => Raised::Bag(m),
            other => Raised::Other(other),
        }
    }
}

/// Untyped JSON to a property bag.
pub fn properties(v: Value) -> Result<Properties> {
    match v {
        Value::Object(m) => Ok(m),
        other => Err(ErrsError::NotAnObject(json_type(&other))),
    }
}

/// Build a [`Properties`] bag with `serde_json::json!` object syntax.
///
/// ```
/// let p = errs::props!({ "status": 404, "message": "not here" });
/// assert_eq!(p["status"], 404);
/// ```
#[macro_export]
macro_rules! props {
    ({}) => {
        $crate::Properties::new()
    };
    ({ $($tt:tt)+ }) => {
        match $crate::__private::serde_json::json!({ $($tt)+ }) {
            $crate::__private::serde_json::Value::Object(m) => m,
            _ => unreachable!(),
        }
    };
}
