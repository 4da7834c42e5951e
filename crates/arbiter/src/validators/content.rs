//! String content rules
//!
//! The character-class rules (`*_only`) check every character, so an empty
//! string passes them.

use crate::foundation::ValidationError;

// ============================================================================
// SUBSTRINGS
// ============================================================================

crate::rule! {
    /// Validates that a string starts with a prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// assert!(starts_with("sk_").validate("sk_live_42").is_ok());
    /// assert!(starts_with("sk_").validate("pk_live_42").is_err());
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefix: String } for str;
    check(self, input) { input.starts_with(self.prefix.as_str()) }
    error(self, input) {
        ValidationError::new("starts_with", "string must start with the specified prefix")
            .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

crate::rule! {
    /// Validates that a string ends with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffix: String } for str;
    check(self, input) { input.ends_with(self.suffix.as_str()) }
    error(self, input) {
        ValidationError::new("ends_with", "string must end with the specified suffix")
            .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}

crate::rule! {
    /// Validates that a string contains a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { substring: String } for str;
    check(self, input) { input.contains(self.substring.as_str()) }
    error(self, input) {
        ValidationError::new("contains", "string must contain the specified substring")
            .with_param("substring", self.substring.clone())
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

crate::rule! {
    /// Validates that a string does not contain a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub NotContains { substring: String } for str;
    check(self, input) { !input.contains(self.substring.as_str()) }
    error(self, input) {
        ValidationError::new("not_contains", "string must not contain the specified substring")
            .with_param("substring", self.substring.clone())
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn not_contains(substring: impl Into<String>);
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::rule! {
    /// Validates that every character is an uppercase letter.
    pub UppercaseOnly for str;
    check(input) { input.chars().all(char::is_uppercase) }
    error(input) {
        ValidationError::new("uppercase_only", "string must contain only uppercase letters")
    }
    fn uppercase_only();
}

crate::rule! {
    /// Validates that every character is a lowercase letter.
    pub LowercaseOnly for str;
    check(input) { input.chars().all(char::is_lowercase) }
    error(input) {
        ValidationError::new("lowercase_only", "string must contain only lowercase letters")
    }
    fn lowercase_only();
}

crate::rule! {
    /// Validates that every character is a Han ideograph.
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// assert!(chinese_only().validate("你好").is_ok());
    /// assert!(chinese_only().validate("你好!").is_err());
    /// ```
    pub ChineseOnly for str;
    check(input) { input.chars().all(is_han) }
    error(input) {
        ValidationError::new("chinese_only", "string must contain only Chinese characters")
    }
    fn chinese_only();
}

crate::rule! {
    /// Validates that every character is a full-width form (`U+FF01..=U+FF5E`).
    pub FullWidthOnly for str;
    check(input) { input.chars().all(|c| ('\u{FF01}'..='\u{FF5E}').contains(&c)) }
    error(input) {
        ValidationError::new("full_width_only", "string must contain only full-width characters")
    }
    fn full_width_only();
}

crate::rule! {
    /// Validates that every character is half-width (at most `U+007E`).
    pub HalfWidthOnly for str;
    check(input) { input.chars().all(|c| c <= '\u{7E}') }
    error(input) {
        ValidationError::new("half_width_only", "string must contain only half-width characters")
    }
    fn half_width_only();
}

// ============================================================================
// SPECIAL CHARACTERS
// ============================================================================

/// Requires or forbids special characters.
///
/// A special character is anything that is not a letter, a digit or
/// whitespace. With `required = true` at least one must be present, with
/// `false` none may appear. Empty input passes either way.
///
/// ```
/// use arbiter::prelude::*;
///
/// assert!(special_chars(true).validate("p@ss").is_ok());
/// assert!(special_chars(false).validate("p@ss").is_err());
/// assert!(special_chars(false).validate("plain text 42").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialChars {
    required: bool,
}

impl SpecialChars {
    /// Creates a new special character rule.
    #[must_use]
    pub fn new(required: bool) -> Self {
        Self { required }
    }
}

impl crate::foundation::Rule for SpecialChars {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Ok(());
        }

        let found = input.chars().any(is_special);
        match (self.required, found) {
            (true, false) => Err(ValidationError::new(
                "special_chars",
                "string must contain special characters",
            )),
            (false, true) => Err(ValidationError::new(
                "no_special_chars",
                "string must not contain special characters",
            )),
            _ => Ok(()),
        }
    }
}

/// Creates a [`SpecialChars`] rule.
#[must_use]
pub fn special_chars(required: bool) -> SpecialChars {
    SpecialChars::new(required)
}

pub(crate) fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Han script blocks: unified ideographs with their extensions,
/// compatibility ideographs, radicals and ideographic marks.
fn is_han(c: char) -> bool {
    matches!(
        c,
        '\u{2E80}'..='\u{2E99}'
            | '\u{2E9B}'..='\u{2EF3}'
            | '\u{2F00}'..='\u{2FD5}'
            | '\u{3005}'
            | '\u{3007}'
            | '\u{3021}'..='\u{3029}'
            | '\u{3038}'..='\u{303B}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2FA1F}'
            | '\u{30000}'..='\u{323AF}'
    )
}
