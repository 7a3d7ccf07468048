//! Subject capability traits
//!
//! This module defines what a value must be able to do before a validator
//! can assess it: [`Nullable`] for types with an absence notion, and
//! [`Emptiness`] for types with an emptiness notion.
//!
//! In the typed API these bounds turn misuse into compile errors. The one
//! place "this shape cannot be assessed" survives to runtime is the dynamic
//! layer (`serde_json::Value`, behind the `json` feature), whose
//! implementations return [`ErrorKind::InvalidArgument`](crate::foundation::ErrorKind)
//! errors for unsupported shapes.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;

use crate::foundation::ValidationError;

// ============================================================================
// SUBJECT SHAPE
// ============================================================================

/// The shape of a subject that has an emptiness notion.
///
/// Used to pick the wording of the "empty X found" failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectShape {
    /// Text: empty when its length is zero.
    Text,
    /// An ordered or unordered collection: empty when its size is zero.
    Collection,
    /// An array of nullable elements: empty when every element is absent.
    Array,
}

impl SubjectShape {
    /// Returns the lowercase name of this shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Collection => "collection",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for SubjectShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// NULLABLE
// ============================================================================

/// Types with an absence notion, assessable by
/// [`NotNull`](crate::validators::NotNull).
pub trait Nullable {
    /// Returns true if the value is absent.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "json")]
impl Nullable for serde_json::Value {
    #[inline]
    fn is_null(&self) -> bool {
        matches!(self, serde_json::Value::Null)
    }
}

// ============================================================================
// EMPTINESS
// ============================================================================

/// Types with an emptiness notion, assessable by
/// [`NotEmpty`](crate::validators::NotEmpty).
///
/// The rule is shape-specific:
///
/// - **text** is empty when its length is zero,
/// - a **collection** is empty when its size is zero,
/// - an **array of nullable elements** is empty when every element is
///   absent. This subsumes the length-zero case, and means one present
///   element amid absences makes the whole array non-empty.
///
/// Sets and `Vec`s are collections; slices are only `Emptiness` when their
/// elements are nullable, because that is the array the all-absent rule is
/// defined over. Maps carry no emptiness notion here, with the single
/// exception of JSON objects in the dynamic layer.
pub trait Emptiness {
    /// Classifies the subject, returning its shape and whether it is empty,
    /// or an invalid-argument error for shapes with no emptiness notion
    /// (absent subjects, and unsupported dynamic shapes).
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError>;
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        (**self).emptiness()
    }
}

// -- text --

impl Emptiness for str {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        Ok((SubjectShape::Text, self.is_empty()))
    }
}

impl Emptiness for String {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        self.as_str().emptiness()
    }
}

impl Emptiness for Cow<'_, str> {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        self.as_ref().emptiness()
    }
}

// -- collections --

impl<T> Emptiness for Vec<T> {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        Ok((SubjectShape::Collection, self.is_empty()))
    }
}

impl<T> Emptiness for VecDeque<T> {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        Ok((SubjectShape::Collection, self.is_empty()))
    }
}

impl<T, S> Emptiness for HashSet<T, S> {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        Ok((SubjectShape::Collection, self.is_empty()))
    }
}

impl<T> Emptiness for BTreeSet<T> {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        Ok((SubjectShape::Collection, self.is_empty()))
    }
}

// -- arrays of nullable elements --

impl<T> Emptiness for [Option<T>] {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        Ok((SubjectShape::Array, self.iter().all(Option::is_none)))
    }
}

impl<T, const N: usize> Emptiness for [Option<T>; N] {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        self.as_slice().emptiness()
    }
}

// -- nullable subjects --

// An absent subject has no emptiness to assess: caller misuse, not a
// failed rule.
impl<T: Emptiness> Emptiness for Option<T> {
    #[inline]
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        match self {
            Some(value) => value.emptiness(),
            None => Err(ValidationError::unsupported("null")),
        }
    }
}

// ============================================================================
// DYNAMIC LAYER (serde_json)
// ============================================================================

/// Returns a human-readable type name for a JSON value.
#[cfg(feature = "json")]
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(feature = "json")]
impl Emptiness for serde_json::Value {
    fn emptiness(&self) -> Result<(SubjectShape, bool), ValidationError> {
        use serde_json::Value;

        match self {
            Value::String(s) => Ok((SubjectShape::Text, s.is_empty())),
            // JSON's one map shape doubles as its one keyed collection.
            Value::Object(map) => Ok((SubjectShape::Collection, map.is_empty())),
            Value::Array(items) => Ok((
                SubjectShape::Array,
                items.iter().all(|item| item.is_null()),
            )),
            other => Err(ValidationError::unsupported(json_type_name(other))),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
