//! Decimal precision rule for floats

use std::marker::PhantomData;

use crate::foundation::{Float, Rule, ValidationError};

/// Validates that a float has at most `precision` decimal places.
///
/// Places are counted in the shortest decimal form that round-trips the
/// value, so whole numbers always pass and `1.23e-4` (`0.000123`) has 6.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// assert!(precision(2).validate(&19.99).is_ok());
/// assert!(precision(0).validate(&42.0).is_ok());
/// assert!(precision(2).validate(&1.255).is_err());
/// ```
#[derive(Debug)]
pub struct Precision<T> {
    precision: usize,
    _input: PhantomData<fn() -> T>,
}

impl<T: Float> Precision<T> {
    /// Creates a new precision rule.
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            _input: PhantomData,
        }
    }
}

impl<T> Clone for Precision<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Precision<T> {}

impl<T: Float> Rule for Precision<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let digits = input.decimal_places();
        if digits <= self.precision {
            return Ok(());
        }

        Err(
            ValidationError::new("precision", "number precision exceeds the specified limit")
                .with_param("precision", self.precision.to_string())
                .with_param("actual", digits.to_string()),
        )
    }
}

/// Creates a rule limiting the decimal places of a float.
#[must_use]
pub fn precision<T: Float>(precision: usize) -> Precision<T> {
    Precision::new(precision)
}
