//! JSON projection of faults: a replaceable slot with a default strategy.
//!
//! `Fault::to_json` (and `Fault`'s `Serialize` impl) always goes through the
//! slot. Swapping it affects every subsequent call process-wide; keep the
//! previous projection returned by [`set_projection`] to restore it.

use crate::fault::{Fault, MESSAGE, STACK};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type Projection = Arc<dyn Fn(&Fault) -> Value + Send + Sync>;

// None => default_projection
static SLOT: RwLock<Option<Projection>> = parking_lot::const_rwlock(None);

/// Every own property, then `message`, `stack`, `arguments` and `type`.
/// `arguments` is `null` when the fault has none.
pub fn default_projection(fault: &Fault) -> Value {
    let mut out = Map::new();
    for (k, v) in fault.properties() {
        out.insert(k.clone(), v.clone());
    }
    out.insert(MESSAGE.to_owned(), Value::String(fault.message().to_owned()));
    out.insert(
        STACK.to_owned(),
        fault.get(STACK).cloned().unwrap_or(Value::Null),
    );
    out.insert(
        "arguments".to_owned(),
        fault.get("arguments").cloned().unwrap_or(Value::Null),
    );
    out.insert("type".to_owned(), Value::String(fault.name().to_owned()));
    Value::Object(out)
}

fn default_slot() -> Projection {
    Arc::new(default_projection)
}

/// The projection currently in the slot.
pub fn projection() -> Projection {
    SLOT.read()
        .clone()
        .unwrap_or_else(default_slot)
}

/// Put `p` in the slot and hand back what was there.
pub fn set_projection(p: Projection) -> Projection {
    let prev = SLOT.write().replace(p);
    tracing::trace!(restored_default = false, "json projection replaced");
    prev.unwrap_or_else(default_slot)
}

pub fn reset_projection() {
    SLOT.write().take();
    tracing::trace!(restored_default = true, "json projection reset");
}

pub(crate) fn project(fault: &Fault) -> Value {
    // 先取出再调用：投影函数内部可能再次访问插槽
    let p = projection();
    p(fault)
}
