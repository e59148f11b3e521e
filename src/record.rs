use serde::Serialize;
use std::fmt;

/// One call's worth of log data: who was called, with what, and what came
/// back. Built only after the delegate has returned, written exactly once,
/// never retained.
#[derive(Debug, Clone, Serialize)]
pub struct Invocation {
    pub callable: String,
    pub args: String,
    pub result: String,
}

impl Invocation {
    pub fn new(
        callable: impl Into<String>,
        args: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            callable: callable.into(),
            args: args.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) -> {}", self.callable, self.args, self.result)
    }
}
