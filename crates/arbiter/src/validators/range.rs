//! Numeric range and sign rules

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::rule! {
    /// Validates that a value is at least a minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// let rule = min(0);
    /// assert!(rule.validate(&0).is_ok());
    /// assert_eq!(rule.validate(&-5).unwrap_err().message, "value is less than minimum");
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    check(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", "value is less than minimum")
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: T);
}

crate::rule! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    check(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", "value is greater than maximum")
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: T);
}

crate::rule! {
    /// Validates that a value lies within an inclusive range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Between<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    check(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::new("between", format!("is not between {} and {}", self.min, self.max))
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn between(min: T, max: T);
}

crate::rule! {
    /// Validates that a value is strictly greater than zero.
    ///
    /// Zero is the type's `Default`, so this works for every primitive number.
    pub Positive<T: PartialOrd + Default + Display> for T;
    check(input) { *input > T::default() }
    error(input) {
        ValidationError::new("positive", "value must be positive")
            .with_param("actual", input.to_string())
    }
    fn positive();
}

crate::rule! {
    /// Validates that a value is strictly less than zero.
    pub Negative<T: PartialOrd + Default + Display> for T;
    check(input) { *input < T::default() }
    error(input) {
        ValidationError::new("negative", "value must be negative")
            .with_param("actual", input.to_string())
    }
    fn negative();
}

// ============================================================================
// TESTS
// ============================================================================
