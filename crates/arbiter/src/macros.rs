//! Macros for defining and applying rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: Define a complete leaf rule (struct + `Rule` impl + factory fn)
//! - [`all_of!`]: AND-combine rules of possibly different types
//! - [`any_of!`]: OR-combine rules of possibly different types
//! - [`field!`]: Bind rules to a field of a record
//! - [`validate!`] / [`validate_with_errors!`]: Apply rules to a value
//!
//! # Examples
//!
//! ```
//! use arbiter::rule;
//! use arbiter::foundation::{Rule, ValidationError};
//!
//! rule! {
//!     pub NotBlank for str;
//!     check(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("not_blank", "must not be blank") }
//!     fn not_blank();
//! }
//!
//! assert!(not_blank().validate("hi").is_ok());
//! assert!(not_blank().validate("  ").is_err());
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Defines a leaf rule: struct definition, `Rule` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```ignore
/// rule! {
///     pub NotEmpty for str;
///     check(input) { !input.is_empty() }
///     error(input) { ValidationError::new("not_empty", "empty") }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```ignore
/// rule! {
///     pub StartsWith { prefix: String } for str;
///     check(self, input) { input.starts_with(self.prefix.as_str()) }
///     error(self, input) { ValidationError::new("starts_with", "bad prefix") }
///     fn starts_with(prefix: String);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```ignore
/// rule! {
///     pub Contains { needle: String } for str;
///     check(self, input) { input.contains(self.needle.as_str()) }
///     error(self, input) { ValidationError::new("contains", "missing") }
///     new(needle: impl Into<String>) { Self { needle: needle.into() } }
///     fn contains(needle: impl Into<String>);
/// }
/// ```
///
/// **Generic rule with fields**:
/// ```ignore
/// rule! {
///     pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
///     check(self, input) { *input >= self.min }
///     error(self, input) { ValidationError::new("min", "value is less than minimum") }
///     fn min(min: T);
/// }
/// ```
///
/// **Generic rule without fields** (a `PhantomData` marker is added):
/// ```ignore
/// rule! {
///     pub Even<T: Integer> for T;
///     check(input) { input.is_even() }
///     error(input) { ValidationError::new("even", "value must be even") }
///     fn even();
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        check($inp:ident) $check:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name for $input;
            check($inp) $check
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        check($inp:ident) $check:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            check($self_, $inp) $check
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            check($self_, $inp) $check
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 4a: Generic struct + auto new + factory fn ───────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            check($self_, $inp) $check
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 4b: Generic struct + auto new, no factory ────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $($field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Rule for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 5a: Phantom generic unit + factory fn ────────────────────
    //
    // For generic rules with no fields. A `PhantomData` marker is added;
    // it never constrains `Send`/`Sync`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident $(: $first_bound:ident $(+ $rest_bound:ident)*)?> for $input:ty;
        check($inp:ident) $check:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name<$gen $(: $first_bound $(+ $rest_bound)*)?> for $input;
            check($inp) $check
            error($einp) $err
        }

        #[must_use]
        $vis fn $factory<$gen $(: $first_bound $(+ $rest_bound)*)?>() -> $name<$gen> {
            $name { _phantom: ::std::marker::PhantomData }
        }
    };

    // ── Variant 5b: Phantom generic unit, no factory ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident $(: $first_bound:ident $(+ $rest_bound:ident)*)?> for $input:ty;
        check($inp:ident) $check:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        $vis struct $name<$gen> {
            _phantom: ::std::marker::PhantomData<fn() -> $gen>,
        }

        impl<$gen> ::std::fmt::Debug for $name<$gen> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<$gen> ::std::clone::Clone for $name<$gen> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$gen> ::std::marker::Copy for $name<$gen> {}

        impl<$gen> ::std::default::Default for $name<$gen> {
            fn default() -> Self {
                Self { _phantom: ::std::marker::PhantomData }
            }
        }

        impl<$gen $(: $first_bound $(+ $rest_bound)*)?> $crate::foundation::Rule for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// ALL_OF / ANY_OF MACROS
// ============================================================================

/// Combines rules of possibly different types with AND logic.
///
/// ```
/// use arbiter::prelude::*;
///
/// let rule = all_of![min(1), max(10), odd()];
/// assert!(rule.validate(&7).is_ok());
/// assert!(rule.validate(&8).is_err());
/// ```
#[macro_export]
macro_rules! all_of {
    () => {
        $crate::combinators::And::new(::std::vec::Vec::new())
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::combinators::And::new(::std::vec![$($crate::foundation::RuleExt::boxed($rule)),+])
    };
}

/// Combines rules of possibly different types with OR logic.
///
/// ```
/// use arbiter::prelude::*;
///
/// let rule = any_of![max(0), min(100)];
/// assert!(rule.validate(&-3).is_ok());
/// assert!(rule.validate(&50).is_err());
/// ```
#[macro_export]
macro_rules! any_of {
    () => {
        $crate::combinators::Or::new(::std::vec::Vec::new())
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::combinators::Or::new(::std::vec![$($crate::foundation::RuleExt::boxed($rule)),+])
    };
}

// ============================================================================
// FIELD MACRO
// ============================================================================

/// Binds rules to a borrowed field, optionally naming it.
///
/// ```
/// use arbiter::prelude::*;
///
/// struct Person { name: String, age: i32 }
///
/// let person = Person { name: "Ann".into(), age: -5 };
/// let result = validate_struct(Some(&person), "person is required", &[
///     &field!("name" => person.name.as_str(), length(1, 50)),
///     &field!("age" => &person.age, min(0), max(120)),
/// ]);
///
/// let error = result.unwrap_err();
/// assert_eq!(error.code, "min");
/// assert_eq!(error.field.as_deref(), Some("age"));
/// ```
#[macro_export]
macro_rules! field {
    ($name:literal => $slot:expr $(, $rule:expr)* $(,)?) => {
        $crate::field::Field::named($name, $slot)$(.rule($rule))*
    };
    ($slot:expr $(, $rule:expr)* $(,)?) => {
        $crate::field::Field::new($slot)$(.rule($rule))*
    };
}

// ============================================================================
// VALIDATE MACROS
// ============================================================================

/// Applies rules to a borrowed value, stopping at the first failure.
///
/// ```
/// use arbiter::prelude::*;
///
/// assert!(validate!(&42, min(0), max(100), even()).is_ok());
/// assert!(validate!("hello", length(1, 3)).is_err());
/// ```
#[macro_export]
macro_rules! validate {
    ($value:expr $(, $rule:expr)* $(,)?) => {
        $crate::validate($value, &[$(&$rule),*])
    };
}

/// Applies every rule to a borrowed value, collecting all failures.
///
/// ```
/// use arbiter::prelude::*;
///
/// let errors = validate_with_errors!(&7, even(), min(10));
/// assert_eq!(errors.len(), 2);
/// ```
#[macro_export]
macro_rules! validate_with_errors {
    ($value:expr $(, $rule:expr)* $(,)?) => {
        $crate::validate_with_errors($value, &[$(&$rule),*])
    };
}

// ============================================================================
// TESTS
// ============================================================================
