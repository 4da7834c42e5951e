//! Presence rules: nil checks over `Option` and zero-value checks over
//! [`Zeroable`]

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Rule, ValidationError, Zeroable};

// ============================================================================
// NIL / NOT NIL
// ============================================================================

crate::rule! {
    /// Validates that an optional value is absent.
    pub Nil<T> for Option<T>;
    check(input) { input.is_none() }
    error(input) { ValidationError::new("nil", "must be nil") }
    fn nil();
}

crate::rule! {
    /// Validates that an optional value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// assert!(not_nil().validate(&Some(0)).is_ok());
    /// assert_eq!(not_nil::<i32>().validate(&None).unwrap_err().message, "must not be nil");
    /// ```
    pub NotNil<T> for Option<T>;
    check(input) { input.is_some() }
    error(input) { ValidationError::new("not_nil", "must not be nil") }
    fn not_nil();
}

// ============================================================================
// ZERO VALUE RULES
// ============================================================================

macro_rules! zero_value_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $code:literal, $message:literal, |$input:ident| $check:expr
    ) => {
        $(#[$meta])*
        pub struct $name<T: ?Sized> {
            _input: PhantomData<fn(&T)>,
        }

        impl<T: ?Sized> $name<T> {
            #[doc = concat!("Creates a new `", stringify!($name), "` rule.")]
            #[must_use]
            pub fn new() -> Self {
                Self { _input: PhantomData }
            }
        }

        impl<T: ?Sized> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T: ?Sized> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $name<T> {}

        impl<T: Zeroable + ?Sized> Rule for $name<T> {
            type Input = T;

            fn validate(&self, $input: &T) -> Result<(), ValidationError> {
                if $check {
                    Ok(())
                } else {
                    Err(ValidationError::new($code, $message))
                }
            }
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] rule.")]
        #[must_use]
        pub fn $factory<T: Zeroable + ?Sized>() -> $name<T> {
            $name::new()
        }
    };
}

zero_value_rule! {
    /// Validates that a meaningful value is present.
    ///
    /// Zero numbers, `false`, empty strings and collections, `None` and
    /// `Some(zero)` all fail.
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// assert!(required().validate("x").is_ok());
    /// assert!(required().validate(&Some(0)).is_err());
    /// ```
    Required, required, "required", "required", |input| !input.is_blank()
}

zero_value_rule! {
    /// Validates that a value is its type's zero value.
    Zero, zero, "zero", "value must be zero", |input| input.is_zero()
}

zero_value_rule! {
    /// Validates that a value is not its type's zero value.
    ///
    /// Unlike [`Required`], `Some(0)` passes: the option itself is non-zero.
    NonZero, non_zero, "non_zero", "value must be non-zero", |input| !input.is_zero()
}
