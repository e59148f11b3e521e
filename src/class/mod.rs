//! Class auto-logging.
//!
//! A `Class` is an explicit method table: name, ordered base classes, and a
//! member map (methods and plain fields). `ClassBuilder::autolog` replaces
//! every qualifying method with its logging wrapper in one pass, before the
//! table is sealed. Wrapping never recurses into bases and never touches
//! reserved (`__`-bracketed) or skip-marked members.

pub mod instance;
pub mod member;
pub mod table;

pub use instance::Instance;
pub use member::{Member, Method, MethodFn};
pub use table::{Class, ClassBuilder};
