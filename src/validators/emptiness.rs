//! Emptiness validator
//!
//! Validates that text, collections, and arrays of nullable elements are
//! non-empty, with the shape-specific rules documented on
//! [`Emptiness`](crate::foundation::Emptiness).

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Emptiness, Validate, ValidationError};

/// Validates that a subject is non-empty.
///
/// The emptiness rule is shape-specific: zero length for text, zero size
/// for collections, and all-elements-absent for arrays of nullable
/// elements (so a zero-length array is empty, and so is `[None, None]`,
/// but `[None, Some(x)]` is not).
///
/// Subjects without an emptiness notion are rejected at compile time by
/// the `Emptiness` bound; dynamic `serde_json::Value` subjects of an
/// unsupported shape (null, boolean, number) are rejected at runtime with
/// [`ErrorKind::InvalidArgument`](crate::foundation::ErrorKind).
///
/// # Examples
///
/// ```
/// use checkthat::validators::not_empty;
/// use checkthat::foundation::Validate;
///
/// assert!(not_empty().validate("test").is_ok());
/// assert!(not_empty().validate("").is_err());
///
/// let all_absent: [Option<&str>; 2] = [None, None];
/// assert!(not_empty().validate(&all_absent).is_err());
/// assert!(not_empty().validate(&[None, Some("x")]).is_ok());
/// ```
pub struct NotEmpty<T: ?Sized> {
    _marker: PhantomData<T>,
}

impl<T: ?Sized> NotEmpty<T> {
    /// Creates a `NotEmpty` validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for NotEmpty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotEmpty")
    }
}

impl<T: ?Sized> Clone for NotEmpty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NotEmpty<T> {}

impl<T: ?Sized> Default for NotEmpty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Emptiness + ?Sized> Validate for NotEmpty<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let (shape, empty) = input.emptiness()?;
        if empty {
            Err(ValidationError::empty(shape))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`NotEmpty`] validator.
///
/// # Examples
///
/// ```
/// use checkthat::validators::not_empty;
/// use checkthat::foundation::Validate;
///
/// assert!(not_empty().validate(&vec![1, 2, 3]).is_ok());
/// assert!(not_empty().validate(&Vec::<i32>::new()).is_err());
/// ```
#[must_use]
pub const fn not_empty<T: ?Sized>() -> NotEmpty<T> {
    NotEmpty::new()
}
