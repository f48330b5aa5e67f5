use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Message of faults built without one.
    pub default_message: String,
    /// Frames kept per captured stack, after hidden frames are removed.
    pub stack_trace_limit: usize,
    /// Crates whose frames are elided besides this one (e.g. caller-side wrappers).
    pub hidden_origins: Vec<String>,
}

pub const DEFAULT_MESSAGE: &str = "Unspecified error";
pub const DEFAULT_STACK_TRACE_LIMIT: usize = 10;

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_MESSAGE.to_owned(),
            stack_trace_limit: DEFAULT_STACK_TRACE_LIMIT,
            hidden_origins: Vec::new(),
        }
    }
}
// 配置仅在构造 Factory 时读取一次。
