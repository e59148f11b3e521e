use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::class::instance::Instance;
use crate::class::member::{is_reserved, Member, Method, MethodFn};
use crate::emit;
use crate::error::CallError;
use crate::record::Invocation;

/// An explicit method table: the Rust-side stand-in for a class body.
///
/// Built once through [`ClassBuilder`] and then immutable; instances share
/// it behind an `Arc`.
pub struct Class {
    name: String,
    bases: Vec<Arc<Class>>,
    members: BTreeMap<String, Member>,
}

impl Class {
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            bases: Vec::new(),
            members: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Resolve a method: this class body first, then bases in declaration
    /// order. A same-named field shadows base methods, as attribute lookup
    /// would.
    pub(crate) fn resolve(&self, method: &str) -> Option<&Method> {
        match self.members.get(method) {
            Some(Member::Method(m)) => Some(m),
            Some(Member::Field(_)) => None,
            None => self.bases.iter().find_map(|base| base.resolve(method)),
        }
    }

    /// Resolve a plain field through the same lookup order as methods.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self.members.get(name) {
            Some(Member::Field(value)) => Some(value),
            Some(Member::Method(_)) => None,
            None => self.bases.iter().find_map(|base| base.field(name)),
        }
    }

    /// Create an instance, running `__init__` when one is defined.
    ///
    /// `__init__` is reserved-named and therefore never wrapped, so
    /// construction emits no log line.
    pub fn instantiate(self: &Arc<Self>, args: &[Value]) -> Result<Instance, CallError> {
        let instance = Instance::new(Arc::clone(self));
        if let Some(init) = self.resolve("__init__") {
            (init.func)(&instance, args)?;
        }
        Ok(instance)
    }
}

/// Assembles a [`Class`] member by member. `autolog` is the explicit opt-in
/// replacing the original's definition-time hook: call it (any number of
/// times, it is idempotent) before `build`.
pub struct ClassBuilder {
    name: String,
    bases: Vec<Arc<Class>>,
    members: BTreeMap<String, Member>,
}

impl ClassBuilder {
    pub fn method<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.members
            .insert(name.into(), Member::Method(Method::plain(Arc::new(func))));
        self
    }

    /// Register a method that auto-logging must leave alone.
    pub fn skip_method<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        let mut method = Method::plain(Arc::new(func));
        method.skip = true;
        self.members.insert(name.into(), Member::Method(method));
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name.into(), Member::Field(value.into()));
        self
    }

    pub fn base(mut self, base: Arc<Class>) -> Self {
        self.bases.push(base);
        self
    }

    /// Replace every qualifying method with its logging wrapper.
    ///
    /// Qualifying: a method of this class body (bases are never touched)
    /// whose name is not `__`-bracketed and which is neither skip-marked nor
    /// already wrapped. Fields pass through unchanged.
    pub fn autolog(mut self) -> Self {
        for (name, member) in self.members.iter_mut() {
            if let Member::Method(method) = member {
                if method.logged || method.skip || is_reserved(name) {
                    continue;
                }
                method.func = logged_method(name.clone(), Arc::clone(&method.func));
                method.logged = true;
            }
        }
        self
    }

    pub fn build(self) -> Arc<Class> {
        Arc::new(Class {
            name: self.name,
            bases: self.bases,
            members: self.members,
        })
    }
}

/// The per-method wrapper: render args, delegate, and only on success emit
/// one `name(args) -> result` record. An `Err` passes through with nothing
/// written.
fn logged_method(name: String, inner: MethodFn) -> MethodFn {
    Arc::new(move |instance, args| {
        let rendered = render_args(args);
        let value = inner(instance, args)?;
        emit::emit(&Invocation::new(&name, rendered, value.to_string()));
        Ok(value)
    })
}

fn render_args(args: &[Value]) -> String {
    args.iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
