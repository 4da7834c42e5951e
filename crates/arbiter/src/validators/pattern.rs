//! Regular expression rules
//!
//! User patterns are compiled once, when the rule is built. The built-in
//! formats share statically compiled patterns, so constructing them is a
//! cheap reference-count bump.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use regex::Regex;

use crate::foundation::{Rule, RuleError, ValidationError};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// E.164: optional `+`, no leading zero, at most 15 digits.
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap());

static SOCIAL_CREDIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-HJ-NPQRTUWXY]{2}\d{6}[0-9A-HJ-NPQRTUWXY]{10}$").unwrap()
});

static TAX_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{15,20}$").unwrap());

static BANK_CARD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{13,19}$").unwrap());

static PASSPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[GEDSP][0-9]{8}$").unwrap());

static ID_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9]\d{5}(19|20)\d{2}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])\d{3}[\dXx]$").unwrap()
});

// ============================================================================
// PATTERN RULE
// ============================================================================

/// Validates that a string matches a compiled regular expression.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
///
/// let rule = regex(r"^\d{3}-\d{4}$")?;
/// assert!(rule.validate("555-1234").is_ok());
/// assert_eq!(
///     rule.validate("5551234").unwrap_err().message,
///     "does not match the regular expression"
/// );
///
/// assert!(regex("(").is_err());
/// # Ok::<(), arbiter::foundation::RuleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    code: &'static str,
    message: Cow<'static, str>,
}

impl Pattern {
    /// Compiles `pattern` into a rule.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::from_regex(regex))
    }

    /// Wraps an already compiled expression.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            regex,
            code: "regex",
            message: Cow::Borrowed("does not match the regular expression"),
        }
    }

    fn builtin(regex: &Regex, code: &'static str, message: &'static str) -> Self {
        Self {
            regex: regex.clone(),
            code,
            message: Cow::Borrowed(message),
        }
    }

    /// The source text of the expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Rule for Pattern {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.regex.is_match(input) {
            return Ok(());
        }
        Err(ValidationError::new(self.code, self.message.clone())
            .with_param("pattern", self.regex.as_str().to_string()))
    }
}

/// Compiles `pattern` into a [`Pattern`] rule.
pub fn regex(pattern: &str) -> Result<Pattern, RuleError> {
    Pattern::new(pattern)
}

// ============================================================================
// BUILT-IN FORMATS
// ============================================================================

/// Email address (`local@domain.tld`).
#[must_use]
pub fn email() -> Pattern {
    Pattern::builtin(&EMAIL, "email", "invalid email format")
}

/// International phone number in E.164 form.
#[must_use]
pub fn phone() -> Pattern {
    Pattern::builtin(&PHONE, "phone", "invalid phone number format")
}

/// 18-character unified social credit code.
#[must_use]
pub fn social_credit() -> Pattern {
    Pattern::builtin(&SOCIAL_CREDIT, "social_credit", "invalid social credit code format")
}

/// Alphanumeric tax number of 15 to 20 characters.
#[must_use]
pub fn tax_number() -> Pattern {
    Pattern::builtin(&TAX_NUMBER, "tax_number", "invalid tax number format")
}

/// Bank card number of 13 to 19 digits.
#[must_use]
pub fn bank_card() -> Pattern {
    Pattern::builtin(&BANK_CARD, "bank_card", "invalid bank card number format")
}

/// Passport number: one of `G E D S P` followed by 8 digits.
#[must_use]
pub fn passport() -> Pattern {
    Pattern::builtin(&PASSPORT, "passport", "invalid passport number format")
}

/// 18-digit resident ID card number with an embedded birth date.
#[must_use]
pub fn id_card() -> Pattern {
    Pattern::builtin(&ID_CARD, "id_card", "invalid ID card number format")
}

// ============================================================================
// PATTERN CACHE
// ============================================================================

/// Memoizes compiled expressions by source text.
///
/// Owned by whoever builds many rules from a recurring set of patterns;
/// it can be shared across threads behind an `Arc`.
///
/// ```
/// use arbiter::validators::PatternCache;
///
/// let cache = PatternCache::new();
/// let first = cache.rule(r"^[a-z]+$")?;
/// let second = cache.rule(r"^[a-z]+$")?;
/// assert_eq!(cache.len(), 1);
/// assert_eq!(first.as_str(), second.as_str());
/// # Ok::<(), arbiter::foundation::RuleError>(())
/// ```
#[derive(Debug, Default)]
pub struct PatternCache {
    compiled: RwLock<HashMap<String, Regex>>,
}

impl PatternCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a rule for `pattern`, compiling it on first use.
    ///
    /// Invalid patterns are not cached.
    pub fn rule(&self, pattern: &str) -> Result<Pattern, RuleError> {
        let cached = self
            .compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pattern)
            .cloned();
        if let Some(regex) = cached {
            return Ok(Pattern::from_regex(regex));
        }

        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let regex = self
            .compiled
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(pattern.to_string())
            .or_insert(regex)
            .clone();
        Ok(Pattern::from_regex(regex))
    }

    /// Number of cached expressions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when nothing has been compiled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached expression.
    pub fn clear(&self) {
        self.compiled
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
