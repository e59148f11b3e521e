use thiserror::Error;

/// Errors surfaced by class method dispatch.
///
/// A failing delegate propagates through the logging wrapper unchanged; the
/// wrapper never swallows, translates, or logs it.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("no method `{method}` on class `{class}`")]
    NoSuchMethod { class: String, method: String },

    #[error("bad arguments for `{method}`: {reason}")]
    BadArguments { method: String, reason: String },

    /// Failure raised by the wrapped method body itself.
    #[error("{0}")]
    User(String),
}

impl CallError {
    pub fn bad_arguments(method: impl Into<String>, reason: impl Into<String>) -> Self {
        CallError::BadArguments {
            method: method.into(),
            reason: reason.into(),
        }
    }

    pub fn user(message: impl Into<String>) -> Self {
        CallError::User(message.into())
    }
}
