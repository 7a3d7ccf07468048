//! Validator combinators
//!
//! Adapters that compose [`Validate`](crate::foundation::Validate)
//! implementations into bigger rules before handing them to a chain:
//!
//! - [`And`] / [`and`] / [`and_all`] - logical conjunction, short-circuiting
//! - [`Or`] / [`or`] - logical disjunction
//! - [`Not`] / [`not`] - logical negation
//!
//! The fluent spellings live on
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, AndAll, and, and_all};
pub use not::{Not, not};
pub use or::{Or, or};
