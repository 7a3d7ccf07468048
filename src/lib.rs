//! # checkthat
//!
//! Fluent, fail-fast value validation with chainable constraints.
//!
//! ## Quick Start
//!
//! ```
//! use checkthat::prelude::*;
//!
//! fn admit(username: &Option<&str>) -> Result<(), ValidationError> {
//!     check_that(username)
//!         .named("username")
//!         .check(&not_null())?
//!         .and(&not_empty())?;
//!     Ok(())
//! }
//!
//! assert!(admit(&Some("alice")).is_ok());
//! assert!(admit(&None).is_err());
//! ```
//!
//! A chain starts at [`check_that`], runs each validator the moment it is
//! attached, and aborts on the first failure. Failures come in two kinds
//! ([`ErrorKind`](foundation::ErrorKind)): `InvalidArgument` when a subject's
//! shape cannot be assessed at all, `ValidationFailed` when it broke the
//! rule.
//!
//! ## Built-in validators
//!
//! - **Nullable**: [`NotNull`](validators::NotNull)
//! - **Emptiness**: [`NotEmpty`](validators::NotEmpty) over text,
//!   collections, and arrays of nullable elements
//! - **Comparison**: [`Equals`](validators::Equals),
//!   [`GreaterThan`](validators::GreaterThan) (via
//!   [`Check::against`](chain::Check::against))
//! - **Compound**: [`NotNullAndEqual`](validators::NotNullAndEqual)
//!
//! Validators compose with `.and()` / `.or()` / `.not()` before entering a
//! chain, and the `json` feature (default) adds `serde_json::Value`
//! subjects for dynamic validation.

// ValidationError is the fundamental error type for all validators; boxing
// it would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod chain;
pub mod combinators;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
pub mod prelude;
pub mod validators;

pub use chain::check_that;
