use std::fmt::Debug;

use crate::emit;
use crate::record::Invocation;

/// Argument tuple that can be rendered for the log line.
///
/// Implemented for `()` through 6-tuples of `Debug` values; each value is
/// rendered with `{:?}` and the renderings are joined by `", "`.
pub trait Arguments {
    fn render(&self) -> String;
}

impl Arguments for () {
    fn render(&self) -> String {
        String::new()
    }
}

macro_rules! impl_arguments {
    ($($ty:ident : $idx:tt),+) => {
        impl<$($ty: Debug),+> Arguments for ($($ty,)+) {
            fn render(&self) -> String {
                [$(format!("{:?}", self.$idx)),+].join(", ")
            }
        }
    };
}

impl_arguments!(A: 0);
impl_arguments!(A: 0, B: 1);
impl_arguments!(A: 0, B: 1, C: 2);
impl_arguments!(A: 0, B: 1, C: 2, D: 3);
impl_arguments!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_arguments!(A: 0, B: 1, C: 2, D: 3, E: 4, G: 5);

/// Transparent call-logging wrapper around a single callable.
///
/// Every successful call emits one line of the form `name(args) -> result`
/// and returns the delegate's result unchanged. The wrapper holds no state
/// between calls.
///
/// ```
/// use autolog::Logged;
///
/// let add = Logged::new("add", |(a, b): (i64, i64)| a + b);
/// assert_eq!(add.call((2, 2)), 4);
/// ```
pub struct Logged<F> {
    name: String,
    func: F,
}

impl<F> Logged<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    /// Wrap a callable that has no useful name of its own.
    pub fn anonymous(func: F) -> Self {
        Self::new("<closure>", func)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the delegate, then log `name(args) -> result`.
    ///
    /// The record is built after the delegate returns, so a panicking
    /// delegate unwinds without leaving a log line behind.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
        A: Arguments,
        R: Debug,
    {
        let rendered = args.render();
        let result = (self.func)(args);
        emit::emit(&Invocation::new(&self.name, rendered, format!("{:?}", result)));
        result
    }

    /// Like [`call`](Self::call) for fallible delegates: `Ok` logs the
    /// success value (not the `Ok` shell), `Err` passes through untouched
    /// with no log line at all.
    pub fn try_call<A, R, E>(&self, args: A) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
        A: Arguments,
        R: Debug,
    {
        let rendered = args.render();
        match (self.func)(args) {
            Ok(value) => {
                emit::emit(&Invocation::new(&self.name, rendered, format!("{:?}", value)));
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }
}
