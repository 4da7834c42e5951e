//! MUTUAL EXCLUDE combinator - membership under a custom comparator

use std::fmt;

use crate::foundation::{Rule, ValidationError};

/// Passes iff some allowed value matches the input under `compare`.
///
/// `fields` labels the fields taking part in the exclusion; only `values`
/// is scanned. The scan is linear, which suits the short enumerations this
/// rule is meant for.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// let rule = mutual_exclude_eq(
///     ["email", "phone"],
///     vec!["A".to_string(), "B".to_string()],
/// );
///
/// assert!(rule.validate(&"A".to_string()).is_ok());
/// assert!(rule.validate(&"C".to_string()).is_err());
/// ```
pub struct MutualExclude<T, F> {
    fields: Vec<String>,
    values: Vec<T>,
    compare: F,
}

impl<T, F> MutualExclude<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates a new mutual exclusion rule.
    pub fn new<I, S>(fields: I, values: Vec<T>, compare: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            values,
            compare,
        }
    }
}

impl<T, F> MutualExclude<T, F> {
    /// Returns the field labels.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the allowed values.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T, F> Rule for MutualExclude<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if self.values.iter().any(|value| (self.compare)(value, input)) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "mutual_exclude",
                "mutual exclude validation failed",
            )
            .with_param("fields", self.fields.join(",")))
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for MutualExclude<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutualExclude")
            .field("fields", &self.fields)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

/// Creates a mutual exclusion rule with a custom comparator.
pub fn mutual_exclude<T, F, I, S>(fields: I, values: Vec<T>, compare: F) -> MutualExclude<T, F>
where
    F: Fn(&T, &T) -> bool,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MutualExclude::new(fields, values, compare)
}

/// Creates a mutual exclusion rule comparing with `==`.
pub fn mutual_exclude_eq<T, I, S>(fields: I, values: Vec<T>) -> MutualExclude<T, fn(&T, &T) -> bool>
where
    T: PartialEq,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MutualExclude::<T, fn(&T, &T) -> bool>::new(fields, values, <T as PartialEq>::eq)
}
