use crate::{
    config::FactoryConfig,
    constructor::{self, Constructor},
    fault::{self, ErrorLike, Fault, Properties, MESSAGE, STACK, STACKTRACE},
    input::{Input, Raised},
    registry::Registry,
    stack::StackFilter,
};
use serde_json::Value;

/// Builds and enriches faults.
///
/// Every fault the factory constructs gets a stack captured at the call site,
/// with the factory's own frames (and any configured hidden origins) removed.
#[derive(Clone, Debug)]
pub struct Factory {
    registry: Registry,
    cfg: FactoryConfig,
    filter: StackFilter,
}

impl Default for Factory {
    fn default() -> Self {
        Self::new(FactoryConfig::default())
    }
}

impl Factory {
    /// A factory with its own, empty registry.
    pub fn new(cfg: FactoryConfig) -> Self {
        Self::with_registry(Registry::new(), cfg)
    }

    /// A factory sharing `registry` with whoever else holds a clone of it.
    pub fn with_registry(registry: Registry, cfg: FactoryConfig) -> Self {
        let filter = StackFilter::from_config(&cfg);
        Self {
            registry,
            cfg,
            filter,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.cfg
    }

    pub fn stack_filter(&self) -> &StackFilter {
        &self.filter
    }

    pub fn create(&self, input: impl Into<Input>) -> Fault {
        match input.into() {
            Input::Existing(f) => self.wrap(f),
            Input::Message(m) => self.from_message(m),
            Input::Bag(b) => self.from_bag(b),
            Input::Typed {
                type_name,
                properties,
            } => self.from_type(&type_name, properties),
            Input::Foreign(e) => self.from_foreign(e),
        }
    }

    /// Two-argument form: `type_name` is always a registry key here, never a message.
    pub fn create_typed(&self, type_name: &str, properties: Properties) -> Fault {
        self.from_type(type_name, properties)
    }

    /// Pass-through: an existing fault comes back as it went in.
    pub fn wrap(&self, fault: Fault) -> Fault {
        fault
    }

    pub fn from_message(&self, message: impl Into<String>) -> Fault {
        let mut f = Fault::with_kind(constructor::base(), message);
        self.stamp(&mut f);
        f
    }

    /// A bag carrying both `message` and `stack` already is an error and is
    /// adopted untouched; any other bag builds a new base fault.
    pub fn from_bag(&self, bag: Properties) -> Fault {
        if bag.is_error() {
            return Fault::adopt(bag);
        }
        self.build(constructor::base(), bag)
    }

    /// Unknown names fall back to the base error type.
    pub fn from_type(&self, type_name: &str, properties: Properties) -> Fault {
        let kind = self.registry.lookup(type_name).unwrap_or_else(|| {
            tracing::debug!(type_name = %type_name, "unregistered error type; using base error");
            constructor::base()
        });
        self.build(kind, properties)
    }

    /// Message from the error's display text, its source chain under `causes`.
    pub fn from_foreign(&self, err: anyhow::Error) -> Fault {
        let mut f = foreign_fault(err);
        self.stamp(&mut f);
        f
    }

    fn build(&self, kind: Constructor, bag: Properties) -> Fault {
        let message = match bag.get(MESSAGE) {
            Some(v) => fault::message_text(v.clone()),
            None => self.cfg.default_message.clone(),
        };
        let ctor = kind.clone();
        let mut f = Fault::with_kind(kind, message);
        ctor.init(&mut f);
        f.assign(bag);
        self.stamp(&mut f);
        f
    }

    // 新构造的实例统一在此捕获栈（header 取决于最终 name/message）
    fn stamp(&self, f: &mut Fault) {
        let stack = self.filter.capture(&f.header());
        f.set(STACK, stack);
    }

    /// Normalize `maybe` into a fault, layer `properties` onto it and derive
    /// `stacktrace`.
    ///
    /// Faults and error-like bags keep their identity and own properties;
    /// anything else becomes a fresh base fault. The result always carries an
    /// array `stacktrace`.
    pub fn merge(&self, maybe: impl Into<Raised>, properties: Properties) -> Fault {
        let mut f = match maybe.into() {
            Raised::Fault(f) => f,
            Raised::Bag(b) if b.is_error() => Fault::adopt(b),
            Raised::Foreign(e) => foreign_fault(e),
            // 新实例的栈在 normalize_stack 中捕获，header 反映合并后的 message
            Raised::Nothing
            | Raised::Flag(_)
            | Raised::Text(_)
            | Raised::Other(_)
            | Raised::Bag(_) => {
                Fault::with_kind(constructor::base(), self.cfg.default_message.clone())
            }
        };
        f.assign(properties);
        self.normalize_stack(&mut f);
        f
    }

    fn normalize_stack(&self, f: &mut Fault) {
        let text = match f.get(STACK) {
            Some(Value::String(s)) => self.filter.scrub(s),
            _ => self.filter.capture(&f.header()),
        };
        let frames: Vec<Value> = self
            .filter
            .frames(&text)
            .into_iter()
            .map(Value::String)
            .collect();
        f.set(STACK, text);
        f.set(STACKTRACE, frames);
    }
}

fn foreign_fault(err: anyhow::Error) -> Fault {
    let mut f = Fault::with_kind(constructor::base(), err.to_string());
    let causes: Vec<Value> = err
        .chain()
        .skip(1)
        .map(|c| Value::String(c.to_string()))
        .collect();
    if !causes.is_empty() {
        f.set("causes", causes);
    }
    f
}
