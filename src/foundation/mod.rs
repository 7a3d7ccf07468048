//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateAgainst`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//! - **Subject capabilities**: [`Nullable`], [`Emptiness`], [`SubjectShape`]
//!
//! # Architecture
//!
//! ## 1. Type safety
//!
//! Validators are generic over their input type, providing compile-time
//! guarantees:
//!
//! ```
//! use checkthat::foundation::Validate;
//! use checkthat::validators::not_empty;
//!
//! let validator = not_empty::<str>(); // only validates text
//! assert!(validator.validate("hello").is_ok());
//! ```
//!
//! ## 2. Fail-fast errors, two kinds
//!
//! Every failure is a returned [`ValidationError`], never a panic, and is
//! never caught internally. [`ErrorKind`] separates caller misuse
//! (`InvalidArgument`) from a violated rule (`ValidationFailed`).
//!
//! ## 3. Capability bounds at the seams
//!
//! A validator that needs an absence or emptiness notion asks for it
//! through [`Nullable`] / [`Emptiness`] bounds instead of taking an
//! any-type parameter; only the dynamic `serde_json::Value` layer defers
//! the shape check to runtime.

pub mod error;
pub mod subject;
pub mod traits;

pub use error::{ErrorKind, ValidationError};
pub use subject::{Emptiness, Nullable, SubjectShape};
pub use traits::{Validate, ValidateAgainst, ValidateExt};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
