//! 库自身错误：工厂本身从不失败，仅在把无类型 JSON 转为输入时可能出错。
use std::{error::Error as StdError, fmt};

#[derive(Debug)]
pub enum ErrsError {
    UnsupportedInput(&'static str), // JSON 值的类型无法作为 create() 输入
    NotAnObject(&'static str),      // 需要属性对象，得到其他 JSON 类型
}

impl fmt::Display for ErrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrsError::UnsupportedInput(t) => write!(f, "unsupported create() input: {t}"),
            ErrsError::NotAnObject(t) => write!(f, "expected a property object, got {t}"),
        }
    }
}
impl StdError for ErrsError {}

pub type Result<T = ()> = std::result::Result<T, ErrsError>;

pub(crate) fn json_type(v: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
