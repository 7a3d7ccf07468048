//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics - both validators must pass for the combined
//! validator to succeed.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors are returned from the first failing validator.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
///
/// # Examples
///
/// ```
/// use checkthat::prelude::*;
///
/// let rule = not_null().and(not_empty());
///
/// assert!(rule.validate(&Some("hello")).is_ok());
/// assert!(rule.validate(&None::<&str>).is_err()); // first fails
/// assert!(rule.validate(&Some("")).is_err()); // second fails
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Creates an [`AndAll`] combinator from a vector of validators.
///
/// This is useful when you have a dynamic number of validators of one type.
///
/// # Examples
///
/// ```
/// use checkthat::combinators::and_all;
/// use checkthat::foundation::Validate;
/// use checkthat::validators::not_empty;
///
/// let combined = and_all(vec![not_empty(), not_empty()]);
/// assert!(combined.validate("hello").is_ok());
/// assert!(combined.validate("").is_err());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Combines multiple validators with logical AND.
///
/// All validators in the collection must pass for this validator to succeed.
/// Validation stops at the first failure (short-circuits).
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}
