//! Prelude module for convenient imports.
//!
//! Provides a single `use arbiter::prelude::*;` import that brings in the
//! rule traits, error types, every built-in rule, the combinators, field
//! bindings, the orchestration functions and the macros.
//!
//! # Examples
//!
//! ```
//! use arbiter::prelude::*;
//!
//! let username = all_of![length(3, 20), lowercase_only()];
//! let age = any_of![between(18, 65), in_list(vec![99])];
//!
//! assert!(validate!("alice", username).is_ok());
//! assert!(validate!(&99, age).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    BoxedRule, ErrorKind, Float, HasLength, Integer, Rule, RuleError, RuleExt, ValidationError,
    ValidationErrors, ValidationResult, Zeroable, as_dyn, boxed,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Compound rules
// ============================================================================

pub use crate::combinators::{
    And, Dependency, MutualExclude, Or, WithMessage, and, dependency, dependency_computed,
    mutual_exclude, mutual_exclude_eq, or,
};

// ============================================================================
// FIELDS AND ORCHESTRATION
// ============================================================================

pub use crate::field::{Field, FieldRule};
pub use crate::validation::validate_struct;

// ============================================================================
// MACROS
// ============================================================================

// `validate` and `validate_with_errors` name both a function and a macro at
// the crate root; one import brings in both.
pub use crate::{all_of, any_of, field, rule, validate, validate_with_errors};
