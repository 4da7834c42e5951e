//! Divisibility rules

use crate::foundation::{Integer, Rule, ValidationError};

/// Remainders at or below this magnitude count as zero.
const TOLERANCE: f64 = 1e-10;

// ============================================================================
// DIVISIBLE BY
// ============================================================================

/// Validates that a float is divisible by a divisor, within `1e-10`.
///
/// A zero divisor cannot be evaluated and yields an
/// [`Unsupported`](crate::foundation::ErrorKind::Unsupported) error.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// let rule = divisible_by(0.5);
/// assert!(rule.validate(&2.5).is_ok());
/// assert!(rule.validate(&2.3).is_err());
/// assert!(divisible_by(0.0).validate(&1.0).unwrap_err().is_unsupported());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivisibleBy {
    divisor: f64,
}

impl DivisibleBy {
    /// Creates a new divisibility rule.
    #[must_use]
    pub fn new(divisor: f64) -> Self {
        Self { divisor }
    }
}

impl Rule for DivisibleBy {
    type Input = f64;

    fn validate(&self, input: &f64) -> Result<(), ValidationError> {
        if self.divisor == 0.0 {
            return Err(ValidationError::unsupported("divisor cannot be zero"));
        }

        let remainder = input % self.divisor;
        if remainder.abs() > TOLERANCE {
            return Err(ValidationError::new(
                "divisible_by",
                "value is not divisible by the specified number",
            )
            .with_param("divisor", self.divisor.to_string())
            .with_param("actual", input.to_string()));
        }
        Ok(())
    }
}

/// Creates a rule that checks a float is divisible by `divisor`.
#[must_use]
pub fn divisible_by(divisor: f64) -> DivisibleBy {
    DivisibleBy::new(divisor)
}

// ============================================================================
// MULTIPLE OF
// ============================================================================

/// Validates that an integer is an exact multiple of a base.
///
/// A zero base yields an
/// [`Unsupported`](crate::foundation::ErrorKind::Unsupported) error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultipleOf<T> {
    base: T,
}

impl<T: Integer> MultipleOf<T> {
    /// Creates a new multiple-of rule.
    #[must_use]
    pub fn new(base: T) -> Self {
        Self { base }
    }
}

impl<T: Integer> Rule for MultipleOf<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let base = self.base.as_i128();
        if base == 0 {
            return Err(ValidationError::unsupported("base cannot be zero"));
        }

        if input.as_i128() % base == 0 {
            Ok(())
        } else {
            Err(
                ValidationError::new("multiple_of", format!("is not a multiple of {}", self.base))
                    .with_param("base", self.base.to_string())
                    .with_param("actual", input.to_string()),
            )
        }
    }
}

/// Creates a rule that checks an integer is a multiple of `base`.
#[must_use]
pub fn multiple_of<T: Integer>(base: T) -> MultipleOf<T> {
    MultipleOf::new(base)
}

// ============================================================================
// TESTS
// ============================================================================
