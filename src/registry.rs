use crate::constructor::{self, Constructor, ErrorConstructor};
use parking_lot::RwLock;
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::Arc,
};

/// Name -> constructor table consulted by the factory.
///
/// Keys are stored lowercased; the latest registration for a key wins and
/// nothing is ever removed. Clones share the same table.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<RwLock<HashMap<String, Constructor>>>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.registered().into_keys().collect();
        f.debug_struct("Registry").field("types", &names).finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with every type declared through `#[errs::error_type]`.
    pub fn discover() -> Self {
        let registry = Self::new();
        let mut n = 0usize;
        for ctor in constructor::discovered() {
            registry.register_dyn_inferred(ctor);
            n += 1;
        }
        tracing::debug!(types = n, "discovered error types");
        registry
    }

    /// Register `ctor` under `name` (case-insensitive).
    pub fn register<C: ErrorConstructor>(&self, name: &str, ctor: C) {
        self.register_dyn(name, Arc::new(ctor));
    }

    /// Register `ctor` under its own declared name.
    pub fn register_type<C: ErrorConstructor>(&self, ctor: C) {
        self.register_dyn_inferred(Arc::new(ctor));
    }

    pub fn register_dyn(&self, name: &str, ctor: Constructor) {
        let key = name.to_lowercase();
        let prev = self.inner.write().insert(key.clone(), ctor);
        if let Some(prev) = prev {
            tracing::debug!(name = %key, previous = %prev.type_name(), "error type re-registered; overriding");
        }
    }

    fn register_dyn_inferred(&self, ctor: Constructor) {
        let name = ctor.type_name().to_owned();
        self.register_dyn(&name, ctor);
    }

    pub fn lookup(&self, name: &str) -> Option<Constructor> {
        self.inner.read().get(&name.to_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains_key(&name.to_lowercase())
    }

    /// Snapshot of every registration, keyed by lowercase name.
    pub fn registered(&self) -> BTreeMap<String, Constructor> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
