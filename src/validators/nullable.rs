//! Nullable validators
//!
//! This module provides validators for subjects with an absence notion:
//! `Option<T>`, and `serde_json::Value` when the `json` feature is enabled.
//!
//! # Examples
//!
//! ```
//! use checkthat::prelude::*;
//!
//! let validator = not_null();
//! assert!(validator.validate(&Some("hello")).is_ok());
//! assert!(validator.validate(&None::<&str>).is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Nullable, Validate, ValidateAgainst, ValidationError};

/// Validates that a subject is present.
///
/// Fails with [`ErrorKind::ValidationFailed`](crate::foundation::ErrorKind)
/// when the subject is absent.
///
/// Implements both validator capabilities, so it can start a single-value
/// chain or join a two-value chain (where it ignores the comparison value,
/// reporting `true` on success like the comparison validators).
///
/// # Examples
///
/// ```
/// use checkthat::validators::NotNull;
/// use checkthat::foundation::Validate;
///
/// let validator = NotNull::<Option<i32>>::new();
/// assert!(validator.validate(&Some(42)).is_ok());
/// assert!(validator.validate(&None).is_err());
/// ```
pub struct NotNull<T: ?Sized> {
    _marker: PhantomData<T>,
}

impl<T: ?Sized> NotNull<T> {
    /// Creates a `NotNull` validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

// Manual impls: the phantom parameter must not infect the bounds.
impl<T: ?Sized> fmt::Debug for NotNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotNull")
    }
}

impl<T: ?Sized> Clone for NotNull<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NotNull<T> {}

impl<T: ?Sized> Default for NotNull<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Nullable + ?Sized> Validate for NotNull<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_null() {
            Err(ValidationError::null_value())
        } else {
            Ok(())
        }
    }
}

impl<T: Nullable + ?Sized, A: ?Sized> ValidateAgainst<A> for NotNull<T> {
    type Subject = T;
    type Output = bool;

    fn validate_against(&self, subject: &T, _against: &A) -> Result<bool, ValidationError> {
        self.validate(subject)?;
        Ok(true)
    }
}

/// Creates a [`NotNull`] validator.
///
/// # Examples
///
/// ```
/// use checkthat::validators::not_null;
/// use checkthat::foundation::Validate;
///
/// assert!(not_null().validate(&Some("hello")).is_ok());
/// assert!(not_null().validate(&None::<&str>).is_err());
/// ```
#[must_use]
pub const fn not_null<T: ?Sized>() -> NotNull<T> {
    NotNull::new()
}

/// Alias for [`NotNull`], for callers coming from form-validation contexts.
pub type Required<T> = NotNull<T>;

/// Creates a [`Required`] validator. Alias for [`not_null`].
#[must_use]
pub const fn required<T: ?Sized>() -> Required<T> {
    NotNull::new()
}
