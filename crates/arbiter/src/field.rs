//! Field binding - rules attached to a location inside a record
//!
//! A [`Field`] borrows one field of a caller-owned record together with an
//! ordered rule list, producing a check that takes no arguments. Bindings
//! are built right before [`validate_struct`](crate::validate_struct) and
//! dropped afterwards; the borrow checker guarantees the record outlives
//! them.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Rule, ValidationError};

// ============================================================================
// FIELD RULE TRAIT
// ============================================================================

/// A zero-argument check over some part of a record.
///
/// Implemented by [`Field`] and by any `Fn() -> Result<(), ValidationError>`
/// closure, so ad-hoc cross-field checks can sit next to field bindings.
pub trait FieldRule {
    /// Runs the check.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<F> FieldRule for F
where
    F: Fn() -> Result<(), ValidationError>,
{
    fn validate(&self) -> Result<(), ValidationError> {
        self()
    }
}

// ============================================================================
// FIELD BINDING
// ============================================================================

/// Binds an ordered rule list to a borrowed field.
///
/// The slot is read when [`FieldRule::validate`] runs, not when the binding
/// is built. Rules run in order and the first failure is returned.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// struct Person { age: i32 }
///
/// let person = Person { age: 150 };
/// let age = Field::named("age", &person.age).rule(min(0)).rule(max(120));
///
/// let error = FieldRule::validate(&age).unwrap_err();
/// assert_eq!(error.code, "max");
/// assert_eq!(error.field.as_deref(), Some("age"));
/// ```
pub struct Field<'a, T: ?Sized> {
    slot: &'a T,
    rules: Vec<Box<dyn Rule<Input = T> + 'a>>,
    name: Option<Cow<'static, str>>,
}

impl<'a, T: ?Sized> Field<'a, T> {
    /// Creates an unnamed binding with no rules yet.
    pub fn new(slot: &'a T) -> Self {
        Self {
            slot,
            rules: Vec::new(),
            name: None,
        }
    }

    /// Creates a named binding; failures get the name as their `field`
    /// unless a rule already set one.
    pub fn named(name: impl Into<Cow<'static, str>>, slot: &'a T) -> Self {
        Self {
            slot,
            rules: Vec::new(),
            name: Some(name.into()),
        }
    }

    /// Creates a binding from an existing rule list.
    pub fn with_rules(slot: &'a T, rules: Vec<Box<dyn Rule<Input = T> + 'a>>) -> Self {
        Self {
            slot,
            rules,
            name: None,
        }
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<Input = T> + 'a,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the field name, if any.
    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the number of bound rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are bound.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> FieldRule for Field<'_, T> {
    fn validate(&self) -> Result<(), ValidationError> {
        let value = self.slot;
        for rule in &self.rules {
            if let Err(mut error) = rule.validate(value) {
                tracing::trace!(field = ?self.name, rule = rule.name(), "field rule failed");
                if error.field.is_none() {
                    error.field.clone_from(&self.name);
                }
                return Err(error);
            }
        }
        Ok(())
    }
}

impl<T: ?Sized> fmt::Debug for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
