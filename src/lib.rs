//! Automatic logging of calls.
//!
//! Wrap a single function with [`Logged`], or build a [`Class`] whose
//! qualifying methods are all wrapped in one pass via
//! [`ClassBuilder::autolog`]. Every successful call emits one `tracing`
//! event of the form `name(args) -> result` under the `autolog` target;
//! failures propagate untouched and emit nothing.
//!
//! ```
//! use autolog::Logged;
//!
//! let add = Logged::new("add", |(a, b): (i64, i64)| a + b);
//! assert_eq!(add.call((2, 2)), 4); // logs: add(2, 2) -> 4
//! ```

pub mod class;
pub mod emit;
pub mod error;
pub mod logged;
pub mod record;

// Re-export specific items if needed for convenient access
pub use class::{Class, ClassBuilder, Instance, Member, Method, MethodFn};
pub use error::CallError;
pub use logged::{Arguments, Logged};
pub use record::Invocation;
