//! Core traits for the validation system
//!
//! This module defines the two validator capabilities: [`Validate`] for
//! rules that assess a single subject, and [`ValidateAgainst`] for rules
//! that compare the subject with a second value and may produce a result.

use crate::foundation::ValidationError;

// ============================================================================
// SINGLE-VALUE VALIDATOR TRAIT
// ============================================================================

/// A stateless rule over a single subject.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API.
///
/// Implementations hold no per-call state: validating the same input twice
/// yields the same result, and a validator value can be shared freely
/// across independent chains.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```
/// use checkthat::foundation::{Validate, ValidationError};
///
/// struct Lowercase;
///
/// impl Validate for Lowercase {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().all(char::is_lowercase) {
///             Ok(())
///         } else {
///             Err(ValidationError::failed("lowercase", "Expected lowercase text"))
///         }
///     }
/// }
///
/// assert!(Lowercase.validate("hello").is_ok());
/// assert!(Lowercase.validate("Hello").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// TWO-VALUE VALIDATOR TRAIT
// ============================================================================

/// A stateless rule comparing a subject with a second value.
///
/// `A` is a type parameter rather than an associated type so that
/// subject-only rules (such as [`NotNull`](crate::validators::NotNull)) can
/// join a two-value chain with `A` left free, ignoring the comparison value
/// the way the comparison validators ignore nothing.
///
/// `Output` is the value a successful validation produces; the built-in
/// comparison validators produce `bool`, and
/// [`check_with_result`](crate::chain::CheckAgainst::check_with_result)
/// hands it back to the caller.
///
/// # Examples
///
/// ```
/// use checkthat::foundation::ValidateAgainst;
/// use checkthat::validators::is_equal;
///
/// let equals = is_equal::<i32>();
/// assert!(equals.validate_against(&3, &3).unwrap());
/// assert!(equals.validate_against(&3, &4).is_err());
/// ```
pub trait ValidateAgainst<A: ?Sized> {
    /// The type of subject being validated.
    type Subject: ?Sized;

    /// The value produced by a successful validation.
    type Output;

    /// Validates the subject against the comparison value.
    fn validate_against(
        &self,
        subject: &Self::Subject,
        against: &A,
    ) -> Result<Self::Output, ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// [`Validate`], providing a fluent API for composing validators before
/// handing them to a chain.
///
/// # Examples
///
/// ```
/// use checkthat::prelude::*;
///
/// let rule = not_null().and(not_empty());
/// assert!(rule.validate(&Some("hello")).is_ok());
/// assert!(rule.validate(&Some("")).is_err());
/// assert!(rule.validate(&None::<&str>).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass for the combined validator to succeed.
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass for the combined validator to
    /// succeed. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    ///
    /// The combined validator succeeds if the original validator fails,
    /// and vice versa.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::{And, Not, Or};

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn validate_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
    }

    #[test]
    fn validate_is_object_safe() {
        let validator: &dyn Validate<Input = str> = &AlwaysValid;
        assert!(validator.validate("test").is_ok());
    }
}
