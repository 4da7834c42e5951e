//! Length rules over anything with a [`HasLength`] capability
//!
//! Strings are measured in Unicode scalar values, collections in elements.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{HasLength, Rule, ValidationError};

/// Validates that a length lies within an inclusive range.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// assert!(length(2, 4).validate("héllo").is_err());
/// assert!(length(2, 4).validate("日本").is_ok());
/// assert!(length(1, 3).validate(&vec![1, 2]).is_ok());
/// ```
pub struct Length<T: ?Sized> {
    min: usize,
    max: usize,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Length<T> {
    /// Creates a new length rule.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            _input: PhantomData,
        }
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }
}

impl<T: ?Sized> fmt::Debug for Length<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Length")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

impl<T: ?Sized> Clone for Length<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Length<T> {}

impl<T: HasLength + ?Sized> Rule for Length<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let actual = input.length();
        if (self.min..=self.max).contains(&actual) {
            return Ok(());
        }

        Err(ValidationError::new(
            "length",
            format!("length is not between {} and {}", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", actual.to_string()))
    }
}

/// Creates a rule that checks the length is within `min..=max`.
#[must_use]
pub fn length<T: HasLength + ?Sized>(min: usize, max: usize) -> Length<T> {
    Length::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn test_str_counts_chars() {
        let rule = length(1, 5);
        assert!(rule.validate("héllo").is_ok());
        assert!(rule.validate("你好世界呀").is_ok());
        assert!(rule.validate("").is_err());
        assert!(rule.validate("toolong").is_err());
    }

    #[test]
    fn test_collections() {
        assert!(length(0, 2).validate(&vec![1, 2]).is_ok());
        assert!(length(0, 2).validate(&[1, 2, 3][..]).is_err());

        let map: HashMap<&str, i32> = HashMap::new();
        assert!(length(1, 3).validate(&map).is_err());

        let set: BTreeSet<u8> = [1, 2].into_iter().collect();
        assert!(length(2, 2).validate(&set).is_ok());
    }

    #[test]
    fn test_none_has_zero_length() {
        assert!(length(0, 3).validate(&None::<String>).is_ok());
        assert!(length(1, 3).validate(&None::<String>).is_err());
        assert!(length(1, 3).validate(&Some(String::from("ab"))).is_ok());
    }

    #[test]
    fn test_error_message() {
        let error = length::<str>(2, 4).validate("a").unwrap_err();
        assert_eq!(error.code, "length");
        assert_eq!(error.message, "length is not between 2 and 4");
        assert_eq!(error.param("actual"), Some("1"));
    }
}
