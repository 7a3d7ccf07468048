//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the result
//! of a validator - it succeeds when the inner validator fails and vice
//! versa.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// - If the inner validator succeeds, `Not` fails
/// - If the inner validator fails, `Not` succeeds
///
/// # Examples
///
/// ```
/// use checkthat::prelude::*;
///
/// let must_be_empty = not_empty::<str>().not();
/// assert!(must_be_empty.validate("").is_ok());
/// assert!(must_be_empty.validate("hello").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub const fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::failed(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V>
where
    V: Validate,
{
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::not_empty;

    #[test]
    fn not_inverts_failure() {
        let rule = Not::new(not_empty::<str>());
        assert!(rule.validate("").is_ok());
    }

    #[test]
    fn not_inverts_success() {
        let rule = Not::new(not_empty::<str>());
        let err = rule.validate("hello").unwrap_err();
        assert_eq!(err.code, "not_failed");
    }
}
