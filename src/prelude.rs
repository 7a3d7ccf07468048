//! Prelude module for convenient imports.
//!
//! Provides a single `use checkthat::prelude::*;` import that brings in
//! the chain entry point, all built-in validators, the combinators, and
//! the core traits and error types.
//!
//! # Examples
//!
//! ```
//! use checkthat::prelude::*;
//!
//! fn guard(value: &Option<&str>) -> Result<(), ValidationError> {
//!     check_that(value)
//!         .named("value")
//!         .check(&not_null())?
//!         .and(&not_empty())?;
//!     Ok(())
//! }
//! # assert!(guard(&Some("x")).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, subject capabilities
// ============================================================================

pub use crate::foundation::{
    Emptiness, ErrorKind, Nullable, SubjectShape, Validate, ValidateAgainst, ValidateExt,
    ValidationError, ValidationResult,
};

// ============================================================================
// CHAIN: Entry point, builders, constraints
// ============================================================================

pub use crate::chain::{Check, CheckAgainst, Constraint, ConstraintAgainst, check_that};

// ============================================================================
// VALIDATORS: The built-in catalog
// ============================================================================

pub use crate::validators::{
    Equals, GreaterThan, NotEmpty, NotNull, NotNullAndEqual, Required, greater_than, is_equal,
    not_empty, not_null, not_null_and_equal, required,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, AndAll, Not, Or, and, and_all, not, or};

// ============================================================================
// JSON-GATED: Dynamic validators
// ============================================================================

#[cfg(feature = "json")]
pub use crate::json::{
    JsonEquals, JsonNotEmpty, JsonNotNull, json_is_equal, json_not_empty, json_not_null,
};
