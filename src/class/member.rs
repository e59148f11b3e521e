use std::sync::Arc;

use serde_json::Value;

use crate::class::instance::Instance;
use crate::error::CallError;

/// A method body: receives the instance plus explicit arguments.
pub type MethodFn = Arc<dyn Fn(&Instance, &[Value]) -> Result<Value, CallError> + Send + Sync>;

/// A callable class member together with its wrapping flags.
#[derive(Clone)]
pub struct Method {
    pub(crate) func: MethodFn,
    /// Already carries the logging wrapper; re-running autolog skips it.
    pub(crate) logged: bool,
    /// Registered as exempt from auto-logging.
    pub(crate) skip: bool,
}

impl Method {
    pub(crate) fn plain(func: MethodFn) -> Self {
        Method {
            func,
            logged: false,
            skip: false,
        }
    }

    pub fn is_logged(&self) -> bool {
        self.logged
    }
}

/// One named attribute of a class body: a callable method or a plain value.
/// Plain values (including nested type references, modeled as values) pass
/// through the autolog transformation unchanged.
#[derive(Clone)]
pub enum Member {
    Method(Method),
    Field(Value),
}

/// Reserved members (constructors, operator-style hooks) are never wrapped.
pub(crate) fn is_reserved(name: &str) -> bool {
    name.len() >= 4 && name.starts_with("__") && name.ends_with("__")
}
