//! Chaining handles
//!
//! A constraint is the thin handle a successful check returns: it keeps the
//! subject borrow and display name captured by the originating builder, and
//! exists only to attach more validators to the same session.

use std::borrow::Cow;

use crate::chain::attach_name;
use crate::foundation::{Validate, ValidateAgainst, ValidationError};

// ============================================================================
// SINGLE-VALUE CONSTRAINT
// ============================================================================

/// The chaining handle of a single-value session.
///
/// Returned by [`Check::check`](crate::chain::Check::check); each
/// successful [`and`](Self::and) returns the handle again for further
/// chaining.
#[derive(Debug)]
pub struct Constraint<'v, T: ?Sized> {
    value: &'v T,
    name: Option<Cow<'static, str>>,
}

impl<'v, T: ?Sized> Constraint<'v, T> {
    pub(crate) const fn new(value: &'v T, name: Option<Cow<'static, str>>) -> Self {
        Self { value, name }
    }

    /// Runs one more validator against the same subject.
    pub fn and<V>(self, validator: &V) -> Result<Self, ValidationError>
    where
        V: Validate<Input = T>,
    {
        match validator.validate(self.value) {
            Ok(()) => Ok(self),
            Err(error) => Err(attach_name(error, self.name.as_ref())),
        }
    }

    /// Returns the subject this session validates.
    #[must_use]
    pub const fn subject(&self) -> &'v T {
        self.value
    }

    /// Returns the subject's display name, if one was attached.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ============================================================================
// TWO-VALUE CONSTRAINT
// ============================================================================

/// The chaining handle of a two-value session.
///
/// Returned by [`CheckAgainst::check`](crate::chain::CheckAgainst::check).
#[derive(Debug)]
pub struct ConstraintAgainst<'v, 'a, T: ?Sized, A: ?Sized> {
    subject: &'v T,
    against: &'a A,
    name: Option<Cow<'static, str>>,
}

impl<'v, 'a, T: ?Sized, A: ?Sized> ConstraintAgainst<'v, 'a, T, A> {
    pub(crate) const fn new(
        subject: &'v T,
        against: &'a A,
        name: Option<Cow<'static, str>>,
    ) -> Self {
        Self {
            subject,
            against,
            name,
        }
    }

    /// Runs one more validator against the same subject and comparison
    /// value.
    pub fn and<V>(self, validator: &V) -> Result<Self, ValidationError>
    where
        V: ValidateAgainst<A, Subject = T>,
    {
        match validator.validate_against(self.subject, self.against) {
            Ok(_) => Ok(self),
            Err(error) => Err(attach_name(error, self.name.as_ref())),
        }
    }

    /// Runs one more validator and ends the chain with its output.
    pub fn and_with_result<V>(self, validator: &V) -> Result<V::Output, ValidationError>
    where
        V: ValidateAgainst<A, Subject = T>,
    {
        validator
            .validate_against(self.subject, self.against)
            .map_err(|error| attach_name(error, self.name.as_ref()))
    }

    /// Returns the subject this session validates.
    #[must_use]
    pub const fn subject(&self) -> &'v T {
        self.subject
    }

    /// Returns the comparison value of this session.
    #[must_use]
    pub const fn against(&self) -> &'a A {
        self.against
    }

    /// Returns the subject's display name, if one was attached.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ============================================================================
// TESTS
// ============================================================================
