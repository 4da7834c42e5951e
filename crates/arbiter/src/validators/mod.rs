//! Built-in leaf rules
//!
//! Every rule here implements [`Rule`](crate::foundation::Rule), carries a
//! default code and message, and accepts overrides through
//! [`RuleExt::with_message`](crate::foundation::RuleExt::with_message).
//!
//! # Categories
//!
//! - **Numeric**: range, sign, parity, primality, divisibility, precision
//! - **Generic**: membership, length, presence
//! - **String**: content, character classes, regular expressions
//! - **Network** (`network` feature): IP, domain, port, MAC, subnet, URL, UUID
//! - **Time** (`temporal` feature): ordering, calendar, chrono formats
//! - **Security**: password policies, XSS and SQL injection heuristics
//! - **File**: size, signatures, MIME sniffing, extensions
//!
//! # Examples
//!
//! ```
//! use arbiter::prelude::*;
//!
//! let username = all_of![length(3, 20), lowercase_only()];
//! assert!(username.validate("alice").is_ok());
//!
//! let age = all_of![min(0), max(150)];
//! assert!(age.validate(&151).is_err());
//! ```

// Numeric rules
pub mod divisibility;
pub mod precision;
pub mod properties;
pub mod range;

// Generic rules
pub mod length;
pub mod membership;
pub mod presence;

// String rules
pub mod content;
pub mod pattern;
pub mod security;

// Format-specific rules
pub mod file;
#[cfg(feature = "network")]
pub mod network;
#[cfg(feature = "temporal")]
pub mod time;

// ============================================================================
// RE-EXPORTS: Numeric
// ============================================================================

pub use divisibility::{DivisibleBy, MultipleOf, divisible_by, multiple_of};
pub use precision::{Precision, precision};
pub use properties::{Even, Odd, Prime, even, odd, prime};
pub use range::{Between, Max, Min, Negative, Positive, between, max, min, negative, positive};

// ============================================================================
// RE-EXPORTS: Generic
// ============================================================================

pub use length::{Length, length};
pub use membership::{InList, NotIn, in_list, not_in};
pub use presence::{NonZero, Nil, NotNil, Required, Zero, nil, non_zero, not_nil, required, zero};

// ============================================================================
// RE-EXPORTS: String
// ============================================================================

pub use content::{
    ChineseOnly, Contains, EndsWith, FullWidthOnly, HalfWidthOnly, LowercaseOnly, NotContains,
    SpecialChars, StartsWith, UppercaseOnly, chinese_only, contains, ends_with, full_width_only,
    half_width_only, lowercase_only, not_contains, special_chars, starts_with, uppercase_only,
};
pub use pattern::{
    Pattern, PatternCache, bank_card, email, id_card, passport, phone, regex, social_credit,
    tax_number,
};
pub use security::{
    PasswordComplex, PasswordStrength, SqlInjection, Xss, password_complex, password_strength,
    sql_injection, xss,
};

// ============================================================================
// RE-EXPORTS: Formats
// ============================================================================

pub use file::{
    FileExtension, FileMimeType, FileSize, FileType, file_extension, file_mime_type, file_size,
    file_type, sniff_mime_type,
};

#[cfg(feature = "network")]
pub use network::{
    Domain, Ip, Ipv4, Ipv6, MacAddress, Port, SubnetMask, Url, Uuid, domain, ip, ipv4, ipv6,
    mac_address, port, subnet_mask, url, uuid,
};

#[cfg(feature = "temporal")]
pub use time::{
    After, Before, Holiday, TimeBetween, TimeFormat, Weekend, Workday, after, before,
    date_format, datetime_format, holiday, time_between, time_format, weekend, workday,
};
