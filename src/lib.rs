//! Error-object factory: builds `Fault`s from messages, property bags,
//! registered type names or foreign errors, merges properties onto whatever
//! was raised, keeps this crate's frames out of captured stacks and projects
//! faults to JSON through a replaceable slot.

pub mod config;
pub mod constructor;
pub mod error;
pub mod factory;
pub mod fault;
pub mod input;
pub mod json;
pub mod registry;
pub mod stack;

// 允许在本 crate 内通过 `errs::...` 自引用（供 proc-macro 展开使用）
extern crate self as errs;

pub use config::FactoryConfig;
pub use constructor::{BaseError, Constructor, ErrorConstructor, KindId};
pub use factory::Factory;
pub use fault::{ErrorLike, Fault, Properties};
pub use input::{Input, Raised};
pub use registry::Registry;

pub mod prelude {
    pub use crate::constructor::{BaseError, ErrorConstructor};
    pub use crate::error::{ErrsError, Result};
    pub use crate::factory::Factory;
    pub use crate::fault::{ErrorLike, Fault, Properties};
    pub use crate::input::{Input, Raised};
    pub use crate::registry::Registry;
    pub use crate::props;
}

pub use errs_macros::*;

#[doc(hidden)]
pub mod __private {
    pub use inventory;
    pub use serde_json;
}
