use crate::fault::Fault;
use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

/// Identity of an error type; what `instanceof` compares.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct KindId(TypeId);
impl KindId {
    pub fn of<T: 'static>() -> Self {
        KindId(TypeId::of::<T>())
    }
}
impl fmt::Debug for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KindId(..)")
    }
}

/// An error type the factory can instantiate by name.
///
/// `type_name` is the declared name (used when registering without an
/// explicit key and as the default display name). `init` plays the role of a
/// constructor body: it runs on the freshly built fault before caller
/// properties are applied.
pub trait ErrorConstructor: Send + Sync + Any {
    fn type_name(&self) -> &str;

    fn init(&self, _fault: &mut Fault) {}

    fn kind_id(&self) -> KindId {
        KindId(TypeId::of::<Self>())
    }
}

impl fmt::Debug for dyn ErrorConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorConstructor({})", self.type_name())
    }
}

pub type Constructor = Arc<dyn ErrorConstructor>;

/// The base error capability. Every fault is an instance of it.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaseError;

impl ErrorConstructor for BaseError {
    fn type_name(&self) -> &str {
        "Error"
    }
}

pub(crate) fn base() -> Constructor {
    Arc::new(BaseError)
}

/// Collected by `#[errs::error_type]`; read by `Registry::discover`.
pub struct __RegisteredType {
    pub create: fn() -> Constructor,
}
inventory::collect!(__RegisteredType);

pub(crate) fn discovered() -> impl Iterator<Item = Constructor> {
    inventory::iter::<__RegisteredType>
        .into_iter()
        .map(|reg| (reg.create)())
}
