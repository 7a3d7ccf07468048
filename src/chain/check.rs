//! Chain builders
//!
//! [`Check`] and [`CheckAgainst`] hold the subject (and, for the two-value
//! flavor, the comparison value) until the first validator runs. They are
//! consumed by every validating call, so a failed check leaves no usable
//! partial state behind.

use std::borrow::Cow;

use crate::chain::attach_name;
use crate::chain::constraint::{Constraint, ConstraintAgainst};
use crate::foundation::{Validate, ValidateAgainst, ValidationError};

/// Starts a validation session over a borrowed subject.
///
/// # Examples
///
/// ```
/// use checkthat::prelude::*;
///
/// let tags = vec!["a", "b"];
/// assert!(check_that(&tags).check(&not_empty()).is_ok());
/// ```
#[must_use]
pub const fn check_that<T: ?Sized>(value: &T) -> Check<'_, T> {
    Check { value, name: None }
}

// ============================================================================
// SINGLE-VALUE BUILDER
// ============================================================================

/// A single-value validation session: one subject, an optional display
/// name, and no validators run yet.
///
/// Created by [`check_that`]. Consumed by the first validating call, which
/// is also why a name can only be attached before validation starts.
pub struct Check<'v, T: ?Sized> {
    value: &'v T,
    name: Option<Cow<'static, str>>,
}

impl<'v, T: ?Sized> Check<'v, T> {
    /// Attaches a display name to the subject for failure messages.
    ///
    /// Calling it again overwrites the previous name.
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Upgrades the session with a comparison value, enabling the
    /// two-value validators.
    #[must_use]
    pub fn against<'a, A: ?Sized>(self, against: &'a A) -> CheckAgainst<'v, 'a, T, A> {
        CheckAgainst {
            subject: self.value,
            against,
            name: self.name,
        }
    }

    /// Runs a validator against the subject now.
    ///
    /// On success returns a [`Constraint`] for chaining further
    /// validators; on failure returns the validator's error with the
    /// display name attached.
    pub fn check<V>(self, validator: &V) -> Result<Constraint<'v, T>, ValidationError>
    where
        V: Validate<Input = T>,
    {
        match validator.validate(self.value) {
            Ok(()) => Ok(Constraint::new(self.value, self.name)),
            Err(error) => Err(attach_name(error, self.name.as_ref())),
        }
    }

    /// Runs each validator in order against the subject, stopping at the
    /// first failure.
    pub fn check_all(self, validators: &[&dyn Validate<Input = T>]) -> Result<(), ValidationError> {
        for validator in validators {
            validator
                .validate(self.value)
                .map_err(|error| attach_name(error, self.name.as_ref()))?;
        }
        Ok(())
    }
}

// ============================================================================
// TWO-VALUE BUILDER
// ============================================================================

/// A two-value validation session: a subject, a comparison value, and an
/// optional display name.
///
/// Created by [`Check::against`].
pub struct CheckAgainst<'v, 'a, T: ?Sized, A: ?Sized> {
    subject: &'v T,
    against: &'a A,
    name: Option<Cow<'static, str>>,
}

impl<'v, 'a, T: ?Sized, A: ?Sized> CheckAgainst<'v, 'a, T, A> {
    /// Attaches a display name to the subject for failure messages.
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Runs a validator against the subject and comparison value now.
    ///
    /// On success returns a [`ConstraintAgainst`] for chaining; the
    /// validator's own output is discarded here - use
    /// [`check_with_result`](Self::check_with_result) to keep it.
    pub fn check<V>(self, validator: &V) -> Result<ConstraintAgainst<'v, 'a, T, A>, ValidationError>
    where
        V: ValidateAgainst<A, Subject = T>,
    {
        match validator.validate_against(self.subject, self.against) {
            Ok(_) => Ok(ConstraintAgainst::new(self.subject, self.against, self.name)),
            Err(error) => Err(attach_name(error, self.name.as_ref())),
        }
    }

    /// Runs a validator and returns its output instead of a constraint,
    /// for validators whose result is meaningful to the caller.
    pub fn check_with_result<V>(self, validator: &V) -> Result<V::Output, ValidationError>
    where
        V: ValidateAgainst<A, Subject = T>,
    {
        validator
            .validate_against(self.subject, self.against)
            .map_err(|error| attach_name(error, self.name.as_ref()))
    }

    /// Runs each validator in order, stopping at the first failure.
    pub fn check_all(
        self,
        validators: &[&dyn ValidateAgainst<A, Subject = T, Output = bool>],
    ) -> Result<(), ValidationError> {
        for validator in validators {
            validator
                .validate_against(self.subject, self.against)
                .map(drop)
                .map_err(|error| attach_name(error, self.name.as_ref()))?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
