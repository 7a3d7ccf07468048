//! Built-in validators
//!
//! The fixed catalog of stateless rules:
//!
//! - **Nullable**: [`NotNull`] (alias [`Required`])
//! - **Emptiness**: [`NotEmpty`]
//! - **Comparison**: [`Equals`], [`GreaterThan`]
//! - **Compound**: [`NotNullAndEqual`]
//!
//! Every validator is a zero-sized `Copy` value built by a factory
//! function, safe to share and reuse across independent chains.
//!
//! # Examples
//!
//! ```
//! use checkthat::prelude::*;
//!
//! check_that(&Some("alice"))
//!     .named("username")
//!     .check(&not_null())
//!     .unwrap()
//!     .and(&not_empty())
//!     .unwrap();
//! ```

pub mod comparison;
pub mod compound;
pub mod emptiness;
pub mod nullable;

pub use comparison::{Equals, GreaterThan, greater_than, is_equal};
pub use compound::{NotNullAndEqual, not_null_and_equal};
pub use emptiness::{NotEmpty, not_empty};
pub use nullable::{NotNull, Required, not_null, required};
