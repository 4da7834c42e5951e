//! Password policy and injection heuristics
//!
//! All rules here pass an empty string; combine with
//! [`required`](super::required) for mandatory input. Failures carry a
//! `reason` param naming the first unmet requirement.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::RegexSet;

use crate::foundation::{Rule, ValidationError};
use crate::validators::content::is_special;

static XSS_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)<script[^>]*>.*?</script>",
        r"(?i)javascript:",
        r"(?i)vbscript:",
        r"(?i)onload=",
        r"(?i)onerror=",
        r"(?i)onclick=",
        r"(?i)onmouseover=",
        r"(?i)eval\(.*\)",
        r"(?i)expression\(.*\)",
        r"(?i)<iframe[^>]*>",
        r"(?i)<img[^>]*>",
        r"(?i)<embed[^>]*>",
        r"(?i)<object[^>]*>",
        r"(?i)<style[^>]*>.*?</style>",
    ])
    .unwrap()
});

static SQL_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)(select|insert|update|delete|drop|union|exec|execute)\s+",
        r#"(?i)(\s+and\s+|\s+or\s+)[\d'"]"#,
        r#"(?i)(\s+xor\s+|\s+nand\s+|\s+not\s+)[\d'"]"#,
        r#"(?i)(\s+like\s+|\s+between\s+|\s+in\s+)[\d'"]"#,
        r"(?i)(\s+is\s+null|\s+is\s+not\s+null)",
        r"(--|#|\*|;)$",
        r"(?i)'(\s*)(union|select|or|and)",
        r"/\*.*\*/",
        r"(?i)waitfor\s+delay\s+",
        r"(?i)benchmark\(.*\)",
        r"(?i)sleep\(.*\)",
    ])
    .unwrap()
});

// ============================================================================
// PASSWORD STRENGTH
// ============================================================================

/// Checks length bounds and required character classes.
///
/// Defaults: 8 to 32 characters with at least one uppercase letter, one
/// lowercase letter, one digit and one special character.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// assert!(password_strength().validate("Str0ng!pass").is_ok());
/// assert!(password_strength().validate("weakpass").is_err());
///
/// let relaxed = password_strength().min_length(4).require_special(false);
/// assert!(relaxed.validate("Ab1x").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordStrength {
    min_length: usize,
    max_length: usize,
    require_upper: bool,
    require_lower: bool,
    require_number: bool,
    require_special: bool,
}

impl PasswordStrength {
    /// Creates a rule with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_length: 8,
            max_length: 32,
            require_upper: true,
            require_lower: true,
            require_number: true,
            require_special: true,
        }
    }

    /// Sets the minimum length in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }

    /// Sets the maximum length in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = length;
        self
    }

    /// Requires an uppercase letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_upper(mut self, require: bool) -> Self {
        self.require_upper = require;
        self
    }

    /// Requires a lowercase letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_lower(mut self, require: bool) -> Self {
        self.require_lower = require;
        self
    }

    /// Requires a digit.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_number(mut self, require: bool) -> Self {
        self.require_number = require;
        self
    }

    /// Requires a character that is not a letter, digit or whitespace.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_special(mut self, require: bool) -> Self {
        self.require_special = require;
        self
    }

    fn unmet(&self, input: &str) -> Option<&'static str> {
        let length = input.chars().count();
        if length < self.min_length || length > self.max_length {
            return Some("length");
        }

        let (mut upper, mut lower, mut number, mut special) = (false, false, false, false);
        for c in input.chars() {
            if c.is_uppercase() {
                upper = true;
            } else if c.is_lowercase() {
                lower = true;
            } else if c.is_numeric() {
                number = true;
            } else if is_special(c) {
                special = true;
            }
        }

        [
            (self.require_upper && !upper, "uppercase"),
            (self.require_lower && !lower, "lowercase"),
            (self.require_number && !number, "number"),
            (self.require_special && !special, "special"),
        ]
        .into_iter()
        .find_map(|(missing, reason)| missing.then_some(reason))
    }
}

impl Default for PasswordStrength {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PasswordStrength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Ok(());
        }
        match self.unmet(input) {
            None => Ok(()),
            Some(reason) => Err(ValidationError::new(
                "password_strength",
                "password does not meet strength requirements",
            )
            .with_param("reason", reason)),
        }
    }
}

/// Creates a [`PasswordStrength`] rule with the default policy.
#[must_use]
pub fn password_strength() -> PasswordStrength {
    PasswordStrength::new()
}

// ============================================================================
// PASSWORD COMPLEXITY
// ============================================================================

/// Checks length, character variety, repetition and forbidden substrings.
///
/// Defaults: at least 12 characters, at least 3 of the 4 ASCII classes
/// (upper, lower, digit, other), no character occurring more than 3 times,
/// and none of `password`, `123456`, `qwerty`, `admin` (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PasswordComplex {
    min_length: usize,
    min_char_types: usize,
    max_repeated_chars: usize,
    forbidden: Vec<String>,
}

impl PasswordComplex {
    /// Creates a rule with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_length: 12,
            min_char_types: 3,
            max_repeated_chars: 3,
            forbidden: ["password", "123456", "qwerty", "admin"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Sets the minimum length in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }

    /// Sets how many character classes must be present.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_char_types(mut self, count: usize) -> Self {
        self.min_char_types = count;
        self
    }

    /// Sets how often any single character may occur.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_repeated_chars(mut self, count: usize) -> Self {
        self.max_repeated_chars = count;
        self
    }

    /// Adds a forbidden substring (matched case-insensitively).
    #[must_use = "builder methods must be chained or built"]
    pub fn forbid(mut self, pattern: impl Into<String>) -> Self {
        self.forbidden.push(pattern.into());
        self
    }

    fn unmet(&self, input: &str) -> Option<&'static str> {
        if input.chars().count() < self.min_length {
            return Some("length");
        }

        let classes = [
            input.bytes().any(|b| b.is_ascii_uppercase()),
            input.bytes().any(|b| b.is_ascii_lowercase()),
            input.bytes().any(|b| b.is_ascii_digit()),
            input.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        if classes.into_iter().filter(|present| *present).count() < self.min_char_types {
            return Some("char_types");
        }

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in input.chars() {
            *counts.entry(c).or_default() += 1;
        }
        if counts.values().any(|&count| count > self.max_repeated_chars) {
            return Some("repeated");
        }

        let lowered = input.to_lowercase();
        self.forbidden
            .iter()
            .any(|pattern| lowered.contains(&pattern.to_lowercase()))
            .then_some("forbidden")
    }
}

impl Default for PasswordComplex {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PasswordComplex {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Ok(());
        }
        match self.unmet(input) {
            None => Ok(()),
            Some(reason) => Err(ValidationError::new(
                "password_complex",
                "password does not meet complexity requirements",
            )
            .with_param("reason", reason)),
        }
    }
}

/// Creates a [`PasswordComplex`] rule with the default policy.
#[must_use]
pub fn password_complex() -> PasswordComplex {
    PasswordComplex::new()
}

// ============================================================================
// INJECTION HEURISTICS
// ============================================================================

crate::rule! {
    /// Rejects input that looks like a cross-site scripting payload.
    ///
    /// A heuristic over common script, handler and embedding patterns, not a
    /// sanitizer.
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// assert!(xss().validate("hello <b>world</b>").is_ok());
    /// assert!(xss().validate("<script>alert(1)</script>").is_err());
    /// ```
    pub Xss for str;
    check(input) { input.is_empty() || !XSS_PATTERNS.is_match(input) }
    error(input) { ValidationError::new("xss", "input contains potential XSS attack") }
    fn xss();
}

crate::rule! {
    /// Rejects input that looks like a SQL injection attempt.
    ///
    /// A heuristic over keywords, boolean tautologies, comments and timing
    /// functions. It produces false positives on ordinary prose containing
    /// words like "select" or "update"; use it on identifiers and search
    /// terms, not free text.
    pub SqlInjection for str;
    check(input) { input.is_empty() || !SQL_PATTERNS.is_match(input) }
    error(input) {
        ValidationError::new("sql_injection", "input contains potential SQL injection")
    }
    fn sql_injection();
}
