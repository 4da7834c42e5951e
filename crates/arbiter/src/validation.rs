//! Orchestration - applying rule lists to values and records
//!
//! - [`validate`] stops at the first failure.
//! - [`validate_with_errors`] runs every rule and collects all failures.
//! - [`validate_struct`] guards against a missing record, then runs field
//!   bindings in order.
//!
//! Failures are returned exactly as the rules produced them.

use std::borrow::Cow;

use crate::field::FieldRule;
use crate::foundation::{Rule, RuleExt, ValidationError, ValidationErrors};
use crate::validators::not_nil;

/// Applies `rules` to `value` in order, returning the first failure.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// let error = arbiter::validate(&-5, &[&min(0), &max(120)]).unwrap_err();
/// assert_eq!(error.message, "value is less than minimum");
/// ```
pub fn validate<T: ?Sized>(value: &T, rules: &[&dyn Rule<Input = T>]) -> Result<(), ValidationError> {
    for rule in rules {
        rule.validate(value)?;
    }
    Ok(())
}

/// Applies every rule to `value`, collecting failures in rule order.
///
/// An empty collection means every rule passed.
///
/// ```
/// use arbiter::prelude::*;
///
/// let errors = arbiter::validate_with_errors(&7, &[&even(), &min(10), &max(5)]);
/// assert_eq!(errors.len(), 3);
/// ```
pub fn validate_with_errors<T: ?Sized>(value: &T, rules: &[&dyn Rule<Input = T>]) -> ValidationErrors {
    rules
        .iter()
        .filter_map(|rule| rule.validate(value).err())
        .collect()
}

/// Validates a record through its field bindings.
///
/// A `None` record fails with `nil_message` (or the default not-nil
/// description when `nil_message` is empty) and no binding is invoked.
/// Otherwise bindings run in order and the first failure is returned.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// struct Person { age: i32 }
///
/// let person = Person { age: 30 };
/// let result = validate_struct(
///     Some(&person),
///     "person is required",
///     &[&field!(&person.age, min(0), max(120))],
/// );
/// assert!(result.is_ok());
///
/// let missing = validate_struct(None::<&Person>, "person is required", &[]);
/// assert_eq!(missing.unwrap_err().message, "person is required");
/// ```
pub fn validate_struct<T: ?Sized>(
    record: Option<&T>,
    nil_message: impl Into<Cow<'static, str>>,
    fields: &[&dyn FieldRule],
) -> Result<(), ValidationError> {
    let record_type = std::any::type_name::<T>();

    if let Err(error) = not_nil::<&T>().with_message(nil_message).validate(&record) {
        tracing::debug!(record = record_type, "record is missing");
        return Err(error);
    }

    tracing::trace!(record = record_type, fields = fields.len(), "validating record");
    for (index, field) in fields.iter().enumerate() {
        if let Err(error) = field.validate() {
            tracing::debug!(
                record = record_type,
                index,
                field = error.field.as_deref(),
                code = %error.code,
                "field validation failed"
            );
            return Err(error);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::testing::{Counting, Fail, Pass};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_short_circuits() {
        let (after, after_calls) = Counting::new(true);
        let error = validate(&1, &[&Pass, &Fail("first"), &after]).unwrap_err();

        assert_eq!(error.code, "first");
        assert_eq!(after_calls.get(), 0);
    }

    #[test]
    fn test_validate_without_rules_passes() {
        assert!(validate::<i32>(&1, &[]).is_ok());
    }

    #[test]
    fn test_validate_with_errors_is_exhaustive() {
        let errors = validate_with_errors(&1, &[&Fail("a"), &Fail("b"), &Pass, &Fail("c")]);

        let codes: Vec<_> = errors.iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["a", "b", "c"]);
    }

    #[test]
    fn test_validate_with_errors_runs_every_rule() {
        let (first, first_calls) = Counting::new(false);
        let (second, second_calls) = Counting::new(true);
        let errors = validate_with_errors(&1, &[&first, &second]);

        assert_eq!(errors.len(), 1);
        assert_eq!((first_calls.get(), second_calls.get()), (1, 1));
    }

    #[test]
    fn test_missing_record_skips_fields() {
        let (stub, calls) = Counting::new(true);
        let value = 1;
        let field = Field::new(&value).rule(stub);

        let error = validate_struct(None::<&i32>, "record missing", &[&field]).unwrap_err();
        assert_eq!(error.message, "record missing");
        assert_eq!(error.code, "not_nil");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_missing_record_default_message() {
        let error = validate_struct(None::<&str>, "", &[]).unwrap_err();
        assert_eq!(error.message, "must not be nil");
    }

    #[test]
    fn test_fields_run_in_order() {
        let value = 1;
        let (later, later_calls) = Counting::new(true);
        let first = Field::new(&value).rule(Pass);
        let second = Field::new(&value).rule(Fail("second"));
        let third = Field::new(&value).rule(later);

        let error = validate_struct(Some(&value), "nil", &[&first, &second, &third]).unwrap_err();
        assert_eq!(error.code, "second");
        assert_eq!(later_calls.get(), 0);
    }

    #[test]
    fn test_record_without_fields_passes() {
        assert!(validate_struct(Some("record"), "nil", &[]).is_ok());
    }
}
