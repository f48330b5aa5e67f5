// Compile-time diagnostics of the codegen layer.

pub(super) const ERR_TARGET: &str = "#[error_type] only supports structs";
pub(super) const ERR_GENERICS: &str = "#[error_type] does not support generic structs";
pub(super) const ERR_UNKNOWN_ARG: &str = "#[error_type] accepts only `name = \"...\"` and `init = path`";
pub(super) const ERR_EMPTY_NAME: &str = "#[error_type(name = ...)] must not be empty";
