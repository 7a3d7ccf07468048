//! Compound validators
//!
//! Validators built from the atomic ones, short-circuiting between steps.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{ValidateAgainst, ValidationError};
use crate::validators::comparison::is_equal;

/// Validates that the subject is present and equals the comparison value.
///
/// Composes the not-null rule with the equality rule, in that order: an
/// absent subject fails as "not null" without the equality step running;
/// a present subject is then compared with [`Equals`](crate::validators::Equals),
/// so both steps report exactly what the atomic validators would.
///
/// # Examples
///
/// ```
/// use checkthat::validators::not_null_and_equal;
/// use checkthat::foundation::ValidateAgainst;
///
/// let validator = not_null_and_equal();
/// assert!(validator.validate_against(&Some("a"), &"a").unwrap());
/// assert!(validator.validate_against(&Some("a"), &"b").is_err());
/// assert!(validator.validate_against(&None, &"a").is_err());
/// ```
pub struct NotNullAndEqual<T> {
    _marker: PhantomData<T>,
}

impl<T> NotNullAndEqual<T> {
    /// Creates a `NotNullAndEqual` validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for NotNullAndEqual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotNullAndEqual")
    }
}

impl<T> Clone for NotNullAndEqual<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NotNullAndEqual<T> {}

impl<T> Default for NotNullAndEqual<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValidateAgainst<T> for NotNullAndEqual<T>
where
    T: PartialEq + fmt::Display,
{
    type Subject = Option<T>;
    type Output = bool;

    fn validate_against(&self, subject: &Option<T>, against: &T) -> Result<bool, ValidationError> {
        let Some(inner) = subject else {
            return Err(ValidationError::null_value());
        };
        is_equal().validate_against(inner, against)
    }
}

/// Creates a [`NotNullAndEqual`] validator.
#[must_use]
pub const fn not_null_and_equal<T>() -> NotNullAndEqual<T> {
    NotNullAndEqual::new()
}
