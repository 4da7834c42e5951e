//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the rule system:
//!
//! - **Traits**: [`Rule`], [`RuleExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`RuleError`]
//! - **Capabilities**: [`HasLength`], [`Zeroable`], [`Integer`], [`Float`]
//!
//! # Architecture
//!
//! ## 1. One contract
//!
//! Leaf checks, compound rules and message overrides all implement [`Rule`],
//! so they nest arbitrarily:
//!
//! ```
//! use arbiter::prelude::*;
//!
//! let age = all_of![min(0), max(120)].with_message("age out of range");
//! assert!(age.validate(&30).is_ok());
//! assert_eq!(age.validate(&150).unwrap_err().message, "age out of range");
//! ```
//!
//! ## 2. Capabilities instead of type switches
//!
//! A rule that needs a length is generic over [`HasLength`]; one that needs a
//! zero value is generic over [`Zeroable`]. Unsupported types do not compile.
//!
//! ## 3. Rich error information
//!
//! ```
//! use arbiter::foundation::ValidationError;
//!
//! let error = ValidationError::new("length", "length out of range")
//!     .with_field("username")
//!     .with_param("min", "5")
//!     .with_param("actual", "3");
//! assert_eq!(error.param("min"), Some("5"));
//! ```

pub mod capability;
pub mod error;
pub mod traits;

pub use capability::{Float, HasLength, Integer, Zeroable};
pub use error::{ErrorKind, RuleError, ValidationError, ValidationErrors};
pub use traits::{BoxedRule, Rule, RuleExt, as_dyn, boxed};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
