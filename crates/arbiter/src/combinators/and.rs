//! AND combinator - logical conjunction of rules
//!
//! # Examples
//!
//! ```
//! use arbiter::prelude::*;
//!
//! let rule = and(vec![min(1).boxed(), max(10).boxed()]);
//! assert!(rule.validate(&5).is_ok());
//! assert!(rule.validate(&0).is_err());
//! ```

use std::fmt;

use crate::combinators::condition_failed;
use crate::foundation::{BoxedRule, Rule, ValidationError};

/// Passes iff every child passes.
///
/// Children run in order and evaluation stops at the first failure. The
/// failure is reported as a generic `"condition"` error with the failing
/// child attached as its only nested error; wrap the rule with
/// [`with_message`](crate::foundation::RuleExt::with_message) for a
/// specific description. An empty `And` passes every input.
pub struct And<T: ?Sized> {
    rules: Vec<BoxedRule<T>>,
}

impl<T: ?Sized> And<T> {
    /// Creates a new `And` over the given children.
    pub fn new(rules: Vec<BoxedRule<T>>) -> Self {
        Self { rules }
    }

    /// Appends another child.
    #[must_use = "builder methods must be chained or built"]
    pub fn and<R>(mut self, rule: R) -> Self
    where
        R: Rule<Input = T> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the children in evaluation order.
    pub fn rules(&self) -> &[BoxedRule<T>] {
        &self.rules
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no children.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Rule for And<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        for rule in &self.rules {
            if let Err(error) = rule.validate(input) {
                if error.is_unsupported() {
                    return Err(error);
                }
                return Err(condition_failed().with_nested_error(error));
            }
        }
        Ok(())
    }
}

impl<T: ?Sized> fmt::Debug for And<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("And")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}

/// Creates an `And` from a list of boxed rules.
///
/// See also the [`all_of!`](crate::all_of) macro, which boxes for you.
pub fn and<T: ?Sized>(rules: Vec<BoxedRule<T>>) -> And<T> {
    And::new(rules)
}
