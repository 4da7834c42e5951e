//! Compound rules
//!
//! Every combinator implements [`Rule`](crate::foundation::Rule) itself, so
//! compound rules nest arbitrarily.
//!
//! - [`And`] / [`Or`]: ordered children with short-circuit evaluation
//! - [`Dependency`]: validates a value extracted from the input
//! - [`MutualExclude`]: membership under a custom comparator
//! - [`WithMessage`]: overrides the failure description

pub mod and;
pub mod dependency;
pub mod message;
pub mod mutual_exclude;
pub mod or;

pub use and::{And, and};
pub use dependency::{Borrowed, Computed, Dependency, dependency, dependency_computed};
pub use message::WithMessage;
pub use mutual_exclude::{MutualExclude, mutual_exclude, mutual_exclude_eq};
pub use or::{Or, or};

use crate::foundation::ValidationError;

/// The failure reported by [`And`] and [`Or`].
pub(crate) fn condition_failed() -> ValidationError {
    ValidationError::new("condition", "condition validation failed")
}
