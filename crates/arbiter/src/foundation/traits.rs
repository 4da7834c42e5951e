//! The rule contract
//!
//! Every leaf check, compound rule and message override implements [`Rule`],
//! so callers never need to know which kind of rule they are invoking.

use std::borrow::Cow;
use std::sync::Arc;

use crate::combinators::WithMessage;
use crate::foundation::ValidationError;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A predicate over values of type `Input`.
///
/// Implementations must be deterministic and free of observable side
/// effects: validating the same input twice yields the same result.
///
/// # Examples
///
/// ```
/// use arbiter::foundation::{Rule, ValidationError};
///
/// struct NotBlank;
///
/// impl Rule for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("not_blank", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("hello").is_ok());
/// assert!(NotBlank.validate("   ").is_err());
/// ```
pub trait Rule {
    /// The type of input being validated.
    ///
    /// Use `?Sized` inputs like `str` and `[u8]` where the rule only reads.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Diagnostic name of the rule, used in trace events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// TYPE ERASURE
// ============================================================================

/// A type-erased, shareable rule.
///
/// Compound rules store their children in this form so rules of different
/// concrete types can be mixed in one list.
pub type BoxedRule<T> = Box<dyn Rule<Input = T> + Send + Sync>;

/// Boxes a rule into a [`BoxedRule`].
pub fn boxed<R>(rule: R) -> BoxedRule<R::Input>
where
    R: Rule + Send + Sync + 'static,
{
    Box::new(rule)
}

/// Views a rule as a trait object, for the slice-taking entry points.
///
/// ```
/// use arbiter::foundation::as_dyn;
/// use arbiter::validators::{max, min};
///
/// let (lo, hi) = (min(0), max(120));
/// assert!(arbiter::validate(&30, &[as_dyn(&lo), as_dyn(&hi)]).is_ok());
/// ```
pub fn as_dyn<R: Rule>(rule: &R) -> &dyn Rule<Input = R::Input> {
    rule
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Builder methods available on every rule.
///
/// Configuration happens by value before a rule is shared; validation only
/// ever takes `&self`.
pub trait RuleExt: Rule + Sized {
    /// Overrides the failure description.
    ///
    /// An empty message leaves the default description in place.
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// let rule = min(18).with_message("must be an adult");
    /// assert_eq!(rule.validate(&12).unwrap_err().message, "must be an adult");
    /// ```
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Overrides the error code, keeping the message.
    fn with_code(self, code: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::code_only(self, code)
    }

    /// Type-erases the rule.
    fn boxed(self) -> BoxedRule<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<R: Rule> RuleExt for R {}

// ============================================================================
// TESTS
// ============================================================================
