//! Set membership rules

use std::fmt::Debug;

use crate::foundation::ValidationError;

crate::rule! {
    /// Validates that a value is one of an allowed list.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// let rule = in_list(vec!["draft", "published"]);
    /// assert!(rule.validate(&"draft").is_ok());
    /// assert_eq!(rule.validate(&"deleted").unwrap_err().message, "must be in the list");
    /// ```
    #[derive(PartialEq)]
    pub InList<T: PartialEq + Debug> { values: Vec<T> } for T;
    check(self, input) { self.values.contains(input) }
    error(self, input) {
        ValidationError::new("in", "must be in the list")
            .with_param("values", format!("{:?}", self.values))
            .with_param("actual", format!("{input:?}"))
    }
    fn in_list(values: Vec<T>);
}

crate::rule! {
    /// Validates that a value is not one of a forbidden list.
    #[derive(PartialEq)]
    pub NotIn<T: PartialEq + Debug> { values: Vec<T> } for T;
    check(self, input) { !self.values.contains(input) }
    error(self, input) {
        ValidationError::new("not_in", "must not be in the list")
            .with_param("values", format!("{:?}", self.values))
            .with_param("actual", format!("{input:?}"))
    }
    fn not_in(values: Vec<T>);
}
