//! JSON convenience validators for turbofish-free dynamic validation.
//!
//! This module provides type aliases and factory functions that specialize
//! the generic validators for `serde_json::Value`, eliminating the need
//! for turbofish syntax like `not_empty::<serde_json::Value>()`.
//!
//! The dynamic layer is also where the "unsupported shape" errors live:
//! a typed chain rejects a misapplied validator at compile time, while a
//! `Value` subject of the wrong shape fails at runtime with
//! [`ErrorKind::InvalidArgument`](crate::foundation::ErrorKind).
//!
//! # Examples
//!
//! ```
//! use checkthat::json::json_not_empty;
//! use checkthat::foundation::Validate;
//! use serde_json::json;
//!
//! let v = json_not_empty();
//! assert!(v.validate(&json!("hello")).is_ok());
//! assert!(v.validate(&json!("")).is_err());
//! assert!(v.validate(&json!(42)).unwrap_err().is_invalid_argument());
//! ```

use crate::validators::{Equals, NotEmpty, NotNull, is_equal, not_empty, not_null};

/// Type alias for the JSON not-null validator.
pub type JsonNotNull = NotNull<serde_json::Value>;

/// Type alias for the JSON not-empty validator.
pub type JsonNotEmpty = NotEmpty<serde_json::Value>;

/// Type alias for the JSON equality validator.
pub type JsonEquals = Equals<serde_json::Value>;

/// Creates a validator that checks a JSON value is not `null`.
///
/// # Examples
///
/// ```
/// use checkthat::json::json_not_null;
/// use checkthat::foundation::Validate;
/// use serde_json::json;
///
/// let v = json_not_null();
/// assert!(v.validate(&json!("x")).is_ok());
/// assert!(v.validate(&json!(null)).is_err());
/// ```
#[must_use]
pub const fn json_not_null() -> JsonNotNull {
    not_null()
}

/// Creates a validator that checks a JSON string, array, or object is
/// non-empty.
///
/// Arrays use the all-null rule: `[null, null]` is empty, `[null, 1]` is
/// not.
///
/// # Examples
///
/// ```
/// use checkthat::json::json_not_empty;
/// use checkthat::foundation::Validate;
/// use serde_json::json;
///
/// let v = json_not_empty();
/// assert!(v.validate(&json!([null, 1])).is_ok());
/// assert!(v.validate(&json!([null, null])).is_err());
/// assert!(v.validate(&json!([])).is_err());
/// ```
#[must_use]
pub const fn json_not_empty() -> JsonNotEmpty {
    not_empty()
}

/// Creates a validator that checks two JSON values are equal.
///
/// # Examples
///
/// ```
/// use checkthat::json::json_is_equal;
/// use checkthat::foundation::ValidateAgainst;
/// use serde_json::json;
///
/// let v = json_is_equal();
/// assert!(v.validate_against(&json!("a"), &json!("a")).is_ok());
/// assert!(v.validate_against(&json!("a"), &json!("b")).is_err());
/// ```
#[must_use]
pub const fn json_is_equal() -> JsonEquals {
    is_equal()
}
