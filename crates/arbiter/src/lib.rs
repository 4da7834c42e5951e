//! # arbiter
//!
//! Declarative, composable validation rules for values and struct fields.
//!
//! ## Quick Start
//!
//! ```
//! use arbiter::prelude::*;
//!
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! let person = Person { name: "Ada".into(), age: 150 };
//!
//! let result = validate_struct(Some(&person), "person is required", &[
//!     &field!("name" => person.name.as_str(), required(), length(1, 50)),
//!     &field!("age" => &person.age, min(0), max(120)),
//! ]);
//!
//! let error = result.unwrap_err();
//! assert_eq!(error.message, "value is greater than maximum");
//! assert_eq!(error.field.as_deref(), Some("age"));
//! ```
//!
//! ## Building Blocks
//!
//! - [`Rule`](foundation::Rule): the one contract every check implements
//! - Leaf rules in [`validators`]: ranges, parity, lengths, patterns,
//!   network formats, time, passwords, files
//! - Compound rules in [`combinators`]: AND, OR, dependency, mutual exclusion,
//!   message overrides
//! - [`Field`]: binds a rule list to a field of a record
//! - Orchestration: [`validate`] (first failure), [`validate_with_errors`]
//!   (all failures), [`validate_struct`] (record with field bindings)
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for zero-boilerplate leaf rules, or implement
//! [`Rule`](foundation::Rule) manually for complex cases.

// ValidationError is the fundamental error type for all rules; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]
// Nested combinators over boxed trait objects produce long types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod field;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validation;
pub mod validators;

#[cfg(test)]
mod testing;

pub use field::{Field, FieldRule};
pub use validation::{validate, validate_struct, validate_with_errors};
