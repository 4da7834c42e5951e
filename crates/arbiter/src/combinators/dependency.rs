//! DEPENDENCY combinator - validates a value through another field
//!
//! A dependency rule is attached to a whole record and checks one of its
//! fields. The two labels name the field being validated and the field it
//! depends on; they are kept for diagnostics only.
//!
//! The getter either borrows the dependency out of the record
//! ([`dependency`]) or computes it ([`dependency_computed`]), e.g. a length or
//! a derived flag.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Rule, ValidationError};

/// Extraction mode of a getter returning `&D`.
#[derive(Debug, Clone, Copy)]
pub struct Borrowed;

/// Extraction mode of a getter returning `D` by value.
#[derive(Debug, Clone, Copy)]
pub struct Computed;

/// Runs a child rule against a value extracted from the input.
///
/// The child's result is returned verbatim, including its own failure
/// description. A dependency without a child rule passes every input.
///
/// # Type Parameters
///
/// * `T` - The record type
/// * `D` - The extracted value type (can be `?Sized` when borrowed)
/// * `R` - The child rule type
/// * `F` - The getter function type
/// * `M` - [`Borrowed`] or [`Computed`]
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// struct Order { quantity: i32, items: Vec<String> }
///
/// let order = Order { quantity: 30, items: vec!["pen".into()] };
///
/// let quantity = dependency("express", "quantity", max(10), |o: &Order| &o.quantity);
/// assert_eq!(quantity.validate(&order).unwrap_err().code, "max");
///
/// let count = dependency_computed("count", "items", max(5usize), |o: &Order| o.items.len());
/// assert!(count.validate(&order).is_ok());
/// ```
pub struct Dependency<T, D, R, F, M = Borrowed>
where
    T: ?Sized,
    D: ?Sized,
{
    field: String,
    dependency: String,
    rule: Option<R>,
    getter: F,
    _phantom: PhantomData<(fn(&T) -> &D, M)>,
}

impl<T, D, R, F> Dependency<T, D, R, F, Borrowed>
where
    T: ?Sized,
    D: ?Sized,
{
    /// Creates a dependency with a child rule.
    pub fn new(field: impl Into<String>, dependency: impl Into<String>, rule: R, getter: F) -> Self
    where
        F: Fn(&T) -> &D,
    {
        Self::optional(field, dependency, Some(rule), getter)
    }

    /// Creates a dependency whose child rule may be absent.
    pub fn optional(
        field: impl Into<String>,
        dependency: impl Into<String>,
        rule: Option<R>,
        getter: F,
    ) -> Self
    where
        F: Fn(&T) -> &D,
    {
        Self::with_mode(field, dependency, rule, getter)
    }
}

impl<T, D, R, F> Dependency<T, D, R, F, Computed>
where
    T: ?Sized,
{
    /// Creates a dependency whose getter computes the value.
    pub fn computed(
        field: impl Into<String>,
        dependency: impl Into<String>,
        rule: R,
        getter: F,
    ) -> Self
    where
        F: Fn(&T) -> D,
    {
        Self::computed_optional(field, dependency, Some(rule), getter)
    }

    /// Creates a computed dependency whose child rule may be absent.
    pub fn computed_optional(
        field: impl Into<String>,
        dependency: impl Into<String>,
        rule: Option<R>,
        getter: F,
    ) -> Self
    where
        F: Fn(&T) -> D,
    {
        Self::with_mode(field, dependency, rule, getter)
    }
}

impl<T, D, R, F, M> Dependency<T, D, R, F, M>
where
    T: ?Sized,
    D: ?Sized,
{
    fn with_mode(
        field: impl Into<String>,
        dependency: impl Into<String>,
        rule: Option<R>,
        getter: F,
    ) -> Self {
        Self {
            field: field.into(),
            dependency: dependency.into(),
            rule,
            getter,
            _phantom: PhantomData,
        }
    }

    /// Returns the label of the field being validated.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the label of the field it depends on.
    pub fn dependency(&self) -> &str {
        &self.dependency
    }

    /// Returns the child rule, if any.
    pub fn rule(&self) -> Option<&R> {
        self.rule.as_ref()
    }
}

impl<T, D, R, F> Rule for Dependency<T, D, R, F, Borrowed>
where
    T: ?Sized,
    D: ?Sized,
    R: Rule<Input = D>,
    F: Fn(&T) -> &D,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        match &self.rule {
            Some(rule) => rule.validate((self.getter)(input)),
            None => Ok(()),
        }
    }
}

impl<T, D, R, F> Rule for Dependency<T, D, R, F, Computed>
where
    T: ?Sized,
    R: Rule<Input = D>,
    F: Fn(&T) -> D,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        match &self.rule {
            Some(rule) => rule.validate(&(self.getter)(input)),
            None => Ok(()),
        }
    }
}

// Debug impl - manual because F is a closure
impl<T, D, R, F, M> fmt::Debug for Dependency<T, D, R, F, M>
where
    T: ?Sized,
    D: ?Sized,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency")
            .field("field", &self.field)
            .field("dependency", &self.dependency)
            .field("rule", &self.rule)
            .field("getter", &"<function>")
            .finish()
    }
}

/// Creates a dependency rule over a borrowed field.
pub fn dependency<T, D, R, F>(
    field: impl Into<String>,
    dependency: impl Into<String>,
    rule: R,
    getter: F,
) -> Dependency<T, D, R, F, Borrowed>
where
    T: ?Sized,
    D: ?Sized,
    R: Rule<Input = D>,
    F: Fn(&T) -> &D,
{
    Dependency::new(field, dependency, rule, getter)
}

/// Creates a dependency rule over a value computed from the record.
pub fn dependency_computed<T, D, R, F>(
    field: impl Into<String>,
    dependency: impl Into<String>,
    rule: R,
    getter: F,
) -> Dependency<T, D, R, F, Computed>
where
    T: ?Sized,
    R: Rule<Input = D>,
    F: Fn(&T) -> D,
{
    Dependency::computed(field, dependency, rule, getter)
}
