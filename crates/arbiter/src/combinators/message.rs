//! MESSAGE combinator - custom failure descriptions

use std::borrow::Cow;

use crate::foundation::{Rule, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the failure description of a rule.
///
/// The original error stays attached as a nested error, so the default
/// description is still available for diagnostics. Errors of kind
/// [`Unsupported`](crate::foundation::ErrorKind::Unsupported) pass through
/// untouched.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// let rule = min(8).with_message("at least 8 please");
///
/// let error = rule.validate(&3).unwrap_err();
/// assert_eq!(error.message, "at least 8 please");
/// assert_eq!(error.code, "min");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<R> WithMessage<R> {
    /// Creates a new WithMessage combinator with a custom message.
    ///
    /// An empty message keeps the inner rule's description.
    pub fn new(inner: R, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Creates a combinator that only overrides the error code, keeping the original message.
    pub fn code_only(inner: R, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: Cow::Borrowed(""),
            code: Some(code.into()),
        }
    }

    /// Replaces the custom message.
    ///
    /// Last write wins; an empty message leaves the current one in place.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        if !message.is_empty() {
            self.message = message;
        }
        self
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the custom code, if set.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Rule for WithMessage<R>
where
    R: Rule,
{
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            if original.is_unsupported() {
                return original;
            }

            let code = self.code.clone().unwrap_or_else(|| original.code.clone());
            let message = if self.message.is_empty() {
                original.message.clone()
            } else {
                self.message.clone()
            };

            let mut error = ValidationError::new(code, message);
            error.field.clone_from(&original.field);
            error.params.clone_from(&original.params);
            error.with_nested_error(original)
        })
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

// ============================================================================
// TESTS
// ============================================================================
