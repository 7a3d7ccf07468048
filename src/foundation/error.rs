//! Error types for validation failures
//!
//! This module provides the structured error type shared by every validator,
//! with a two-kind taxonomy distinguishing caller misuse from failed rules.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::subject::SubjectShape;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The two kinds of validation failure.
///
/// Callers branch on the kind to tell "you handed this validator something
/// it cannot assess" apart from "the value was assessable and broke the rule".
///
/// # Examples
///
/// ```
/// use checkthat::foundation::{ErrorKind, ValidationError};
///
/// let err = ValidationError::null_value();
/// assert_eq!(err.kind, ErrorKind::ValidationFailed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The subject's runtime type or shape is not one this validator can
    /// assess at all. Caller misuse, never swallowed.
    InvalidArgument,
    /// The subject was assessable but did not satisfy the rule.
    ValidationFailed,
}

impl ErrorKind {
    /// Returns the snake_case name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Uses `Cow<'static, str>` for zero-allocation when error codes and messages
/// are known at compile time (the common case). Diagnostic parameters are
/// stored inline as ordered key-value pairs (typically 0-2 params).
///
/// # Examples
///
/// ## Simple error
///
/// ```
/// use checkthat::foundation::ValidationError;
///
/// let error = ValidationError::failed("not_empty", "Empty string found");
/// assert!(error.is_validation_failed());
/// ```
///
/// ## Error with a subject name and parameters
///
/// ```
/// use checkthat::foundation::ValidationError;
///
/// let error = ValidationError::failed("greater_than", "3 is not greater than 5")
///     .with_name("retries")
///     .with_param("actual", "3");
/// assert_eq!(error.param("actual"), Some("3"));
/// assert!(format!("{error}").contains("[retries]"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Which of the two failure kinds this error is.
    pub kind: ErrorKind,

    /// Error code for programmatic handling.
    ///
    /// Examples: "not_null", "not_empty", "equals"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Optional display name of the subject, attached by the chain when the
    /// caller named it.
    pub name: Option<Cow<'static, str>>,

    /// Parameters for diagnostics, as ordered key-value pairs.
    ///
    /// Example: `[("expected", "5"), ("actual", "3")]`
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new error of the given kind.
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            name: None,
            params: SmallVec::new(),
        }
    }

    /// Creates a [`ErrorKind::ValidationFailed`] error.
    pub fn failed(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::ValidationFailed, code, message)
    }

    /// Creates an [`ErrorKind::InvalidArgument`] error.
    pub fn invalid_argument(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::InvalidArgument, code, message)
    }

    /// Sets the subject's display name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a diagnostic parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this is an [`ErrorKind::InvalidArgument`] error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// Returns true if this is an [`ErrorKind::ValidationFailed`] error.
    #[must_use]
    pub const fn is_validation_failed(&self) -> bool {
        matches!(self.kind, ErrorKind::ValidationFailed)
    }

    /// Converts the error to a JSON value (for serialization).
    #[cfg(feature = "json")]
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "kind": self.kind.as_str(),
            "code": self.code,
            "message": self.message,
            "name": self.name,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "[{}] {}: {}", name, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

// One constructor per canonical failure, so the atomic validators and the
// compound validator produce identical wire text.
impl ValidationError {
    /// Creates the "null subject" failure.
    #[must_use]
    pub fn null_value() -> Self {
        Self::failed("not_null", "Null value found when expecting not null value.")
    }

    /// Creates the "empty subject" failure for the given shape.
    #[must_use]
    pub fn empty(shape: SubjectShape) -> Self {
        Self::failed(
            "not_empty",
            format!("Empty {shape} found when expecting: non-empty {shape}."),
        )
        .with_param("shape", shape.as_str())
    }

    /// Creates the "not equal" failure.
    pub fn not_equal(subject: impl fmt::Display, against: impl fmt::Display) -> Self {
        Self::failed("equals", format!("{subject} is not equal to {against}"))
    }

    /// Creates the "not strictly greater" failure.
    pub fn not_greater(subject: impl fmt::Display, against: impl fmt::Display) -> Self {
        Self::failed(
            "greater_than",
            format!("{subject} is not greater than {against}"),
        )
    }

    /// Creates the "shape cannot be assessed" misuse error.
    pub fn unsupported(actual: impl Into<Cow<'static, str>>) -> Self {
        Self::invalid_argument(
            "unsupported_type",
            "Only non-null strings, collections or arrays are supported.",
        )
        .with_param("actual", actual)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::failed("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.kind, ErrorKind::ValidationFailed);
    }

    #[test]
    fn error_with_name() {
        let error = ValidationError::null_value().with_name("email");
        assert_eq!(error.name.as_deref(), Some("email"));
        assert!(format!("{error}").starts_with("[email]"));
    }

    #[test]
    fn error_with_params() {
        let error = ValidationError::failed("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn kind_predicates() {
        assert!(ValidationError::unsupported("number").is_invalid_argument());
        assert!(ValidationError::null_value().is_validation_failed());
    }

    #[test]
    fn empty_message_names_the_shape() {
        let error = ValidationError::empty(SubjectShape::Array);
        assert_eq!(
            error.message,
            "Empty array found when expecting: non-empty array."
        );
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::null_value();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn display_without_name() {
        let error = ValidationError::not_equal(1, 2);
        assert_eq!(format!("{error}"), "equals: 1 is not equal to 2");
    }

    #[cfg(feature = "json")]
    #[test]
    fn to_json_value_carries_kind() {
        let value = ValidationError::unsupported("boolean").to_json_value();
        assert_eq!(value["kind"], "invalid_argument");
        assert_eq!(value["params"]["actual"], "boolean");
    }
}
