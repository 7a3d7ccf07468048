//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with logical OR semantics - at least one validator must pass for the
//! combined validator to succeed.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// Short-circuits on the first success. When both fail, the right
/// validator's error is returned (fail-fast, no aggregation).
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(_) => self.right.validate(input),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::not_empty;

    #[test]
    fn or_left_passes() {
        let rule = not_empty::<str>().or(not_empty());
        assert!(rule.validate("hello").is_ok());
    }

    #[test]
    fn or_both_fail_returns_right_error() {
        let rule = not_empty::<str>().or(not_empty());
        let err = rule.validate("").unwrap_err();
        assert_eq!(err.code, "not_empty");
    }

    #[test]
    fn or_right_rescues() {
        let rule = not_empty::<str>().not().or(not_empty());
        // Non-empty input: left (inverted) fails, right passes.
        assert!(rule.validate("hello").is_ok());
    }
}
