//! OR combinator - logical disjunction of rules
//!
//! # Examples
//!
//! ```
//! use arbiter::prelude::*;
//!
//! let rule = or(vec![max(0).boxed(), min(100).boxed()]);
//! assert!(rule.validate(&-1).is_ok());
//! assert!(rule.validate(&150).is_ok());
//! assert!(rule.validate(&50).is_err());
//! ```

use std::fmt;

use crate::combinators::condition_failed;
use crate::foundation::{BoxedRule, Rule, ValidationError};

/// Passes iff at least one child passes.
///
/// Children run in order and evaluation stops at the first success. If every
/// child fails, the result is a generic `"condition"` error carrying all
/// child failures as nested errors. An empty `Or` fails every input.
pub struct Or<T: ?Sized> {
    rules: Vec<BoxedRule<T>>,
}

impl<T: ?Sized> Or<T> {
    /// Creates a new `Or` over the given alternatives.
    pub fn new(rules: Vec<BoxedRule<T>>) -> Self {
        Self { rules }
    }

    /// Appends another alternative.
    #[must_use = "builder methods must be chained or built"]
    pub fn or<R>(mut self, rule: R) -> Self
    where
        R: Rule<Input = T> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the alternatives in evaluation order.
    pub fn rules(&self) -> &[BoxedRule<T>] {
        &self.rules
    }

    /// Returns the number of alternatives.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Rule for Or<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let mut failures = Vec::new();
        for rule in &self.rules {
            match rule.validate(input) {
                Ok(()) => return Ok(()),
                Err(error) if error.is_unsupported() => return Err(error),
                Err(error) => failures.push(error),
            }
        }
        Err(condition_failed().with_nested(failures))
    }
}

impl<T: ?Sized> fmt::Debug for Or<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}

/// Creates an `Or` from a list of boxed rules.
///
/// See also the [`any_of!`](crate::any_of) macro, which boxes for you.
pub fn or<T: ?Sized>(rules: Vec<BoxedRule<T>>) -> Or<T> {
    Or::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleExt;
    use crate::testing::{Counting, Fail, Pass, Reject};
    use rstest::rstest;

    #[test]
    fn test_or_first_passes() {
        let rule = or(vec![Pass.boxed(), Fail("x").boxed()]);
        assert!(rule.validate(&1).is_ok());
    }

    #[test]
    fn test_or_second_passes() {
        let rule = or(vec![Fail("x").boxed(), Pass.boxed()]);
        assert!(rule.validate(&1).is_ok());
    }

    #[test]
    fn test_empty_or_fails() {
        let rule = Or::<str>::new(Vec::new());
        let error = rule.validate("anything").unwrap_err();
        assert_eq!(error.code, "condition");
        assert!(error.nested.is_empty());
    }

    #[test]
    fn test_or_collects_all_failures() {
        let rule = or(vec![Fail("a").boxed(), Fail("b").boxed()]);
        let error = rule.validate(&1).unwrap_err();

        assert_eq!(error.message, "condition validation failed");
        let codes: Vec<_> = error.nested.iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["a", "b"]);
    }

    #[rstest]
    #[case(&[false, false, false], Some(3))]
    #[case(&[false, true, false], None)]
    #[case(&[true], None)]
    #[case(&[false], Some(1))]
    fn test_or_nested_holds_only_failures(
        #[case] outcomes: &[bool],
        #[case] nested: Option<usize>,
    ) {
        let rules: Vec<BoxedRule<i32>> = outcomes
            .iter()
            .map(|&pass| if pass { Pass.boxed() } else { Fail("x").boxed() })
            .collect();

        let result = or(rules).validate(&1);
        assert_eq!(result.err().map(|e| e.nested.len()), nested);
    }

    #[test]
    fn test_or_short_circuits() {
        let (first, first_calls) = Counting::new(false);
        let (second, second_calls) = Counting::new(true);
        let (third, third_calls) = Counting::new(false);
        let rule = Or::new(vec![first.boxed(), second.boxed(), third.boxed()]);

        assert!(rule.validate(&0).is_ok());
        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 1);
        assert_eq!(third_calls.get(), 0);
    }

    #[test]
    fn test_or_propagates_unsupported() {
        let rule = or(vec![
            Reject(ValidationError::unsupported("misuse")).boxed(),
            Pass.boxed(),
        ]);
        assert!(rule.validate(&1).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_or_builder() {
        let rule = Or::new(Vec::new()).or(Fail("x")).or(Pass);
        assert_eq!(rule.len(), 2);
        assert!(rule.validate(&1).is_ok());
    }
}
