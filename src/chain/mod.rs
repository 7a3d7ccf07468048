//! The validation chain
//!
//! A chain is one fail-fast validation session over one subject:
//!
//! 1. [`check_that`] wraps a borrowed subject in a [`Check`] builder.
//! 2. [`Check::named`] optionally attaches a display name for failure
//!    messages; [`Check::against`] optionally upgrades the session with a
//!    comparison value.
//! 3. The first `check` runs a validator immediately and, on success,
//!    returns a [`Constraint`] handle.
//! 4. [`Constraint::and`] runs further validators against the same subject.
//!
//! Every step returns `Result`, so `?` is the chain operator: the first
//! failure unwinds out of the chain and no later validator runs.
//!
//! # Examples
//!
//! ```
//! use checkthat::prelude::*;
//!
//! fn guard(username: &Option<&str>) -> Result<(), ValidationError> {
//!     check_that(username)
//!         .named("username")
//!         .check(&not_null())?
//!         .and(&not_empty())?;
//!     Ok(())
//! }
//!
//! assert!(guard(&Some("alice")).is_ok());
//!
//! let err = guard(&None).unwrap_err();
//! assert_eq!(err.code, "not_null");
//! assert!(format!("{err}").contains("[username]"));
//! ```
//!
//! Two-value sessions compare the subject with a second value and can hand
//! back the validator's own result:
//!
//! ```
//! use checkthat::prelude::*;
//!
//! let confirmed = check_that(&21)
//!     .against(&18)
//!     .check_with_result(&greater_than())
//!     .unwrap();
//! assert!(confirmed);
//! ```

mod check;
mod constraint;

pub use check::{Check, CheckAgainst, check_that};
pub use constraint::{Constraint, ConstraintAgainst};

use std::borrow::Cow;

use crate::foundation::ValidationError;

// Attaches the session's display name to an escaping failure.
pub(crate) fn attach_name(
    error: ValidationError,
    name: Option<&Cow<'static, str>>,
) -> ValidationError {
    match name {
        Some(name) => error.with_name(name.clone()),
        None => error,
    }
}
