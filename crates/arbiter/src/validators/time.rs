//! Calendar and time rules built on `chrono`
//!
//! Ordering rules (`before`, `after`, `time_between`) work on any ordered
//! value with a display form, so they apply equally to `DateTime<Tz>`,
//! `NaiveDateTime` and `NaiveDate`. Calendar rules work on anything
//! [`Datelike`]. Format rules validate strings against chrono format
//! strings; the format string itself is checked when the rule is built.

use std::fmt::{self, Display};
use std::marker::PhantomData;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::foundation::{Rule, RuleError, ValidationError};

// ============================================================================
// ORDERING
// ============================================================================

/// Validates that a value is before a limit.
///
/// Strict by default; [`inclusive`](Before::inclusive) also accepts the
/// limit itself.
///
/// # Examples
///
/// ```
/// use arbiter::prelude::*;
/// use chrono::NaiveDate;
///
/// let deadline = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
/// assert!(before(deadline).validate(&deadline).is_err());
/// assert!(before(deadline).inclusive().validate(&deadline).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Before<T> {
    limit: T,
    inclusive: bool,
}

impl<T: PartialOrd + Display> Before<T> {
    /// Creates a strict before rule.
    #[must_use]
    pub fn new(limit: T) -> Self {
        Self {
            limit,
            inclusive: false,
        }
    }

    /// Accepts values equal to the limit.
    #[must_use = "builder methods must be chained or built"]
    pub fn inclusive(mut self) -> Self {
        self.inclusive = true;
        self
    }
}

impl<T: PartialOrd + Display> Rule for Before<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let ok = if self.inclusive {
            *input <= self.limit
        } else {
            *input < self.limit
        };
        if ok {
            return Ok(());
        }
        Err(
            ValidationError::new("before", "time must be before the specified time")
                .with_param("limit", self.limit.to_string())
                .with_param("actual", input.to_string()),
        )
    }
}

/// Creates a [`Before`] rule.
#[must_use]
pub fn before<T: PartialOrd + Display>(limit: T) -> Before<T> {
    Before::new(limit)
}

/// Validates that a value is after a limit.
///
/// Strict by default; [`inclusive`](After::inclusive) also accepts the
/// limit itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct After<T> {
    limit: T,
    inclusive: bool,
}

impl<T: PartialOrd + Display> After<T> {
    /// Creates a strict after rule.
    #[must_use]
    pub fn new(limit: T) -> Self {
        Self {
            limit,
            inclusive: false,
        }
    }

    /// Accepts values equal to the limit.
    #[must_use = "builder methods must be chained or built"]
    pub fn inclusive(mut self) -> Self {
        self.inclusive = true;
        self
    }
}

impl<T: PartialOrd + Display> Rule for After<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let ok = if self.inclusive {
            *input >= self.limit
        } else {
            *input > self.limit
        };
        if ok {
            return Ok(());
        }
        Err(
            ValidationError::new("after", "time must be after the specified time")
                .with_param("limit", self.limit.to_string())
                .with_param("actual", input.to_string()),
        )
    }
}

/// Creates an [`After`] rule.
#[must_use]
pub fn after<T: PartialOrd + Display>(limit: T) -> After<T> {
    After::new(limit)
}

crate::rule! {
    /// Validates that a value lies between two instants, both inclusive.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub TimeBetween<T: PartialOrd + Display> { start: T, end: T } for T;
    check(self, input) { *input >= self.start && *input <= self.end }
    error(self, input) {
        ValidationError::new("time_between", "time must be between the specified times")
            .with_param("start", self.start.to_string())
            .with_param("end", self.end.to_string())
            .with_param("actual", input.to_string())
    }
    fn time_between(start: T, end: T);
}

// ============================================================================
// CALENDAR
// ============================================================================

fn is_weekend<T: Datelike>(value: &T) -> bool {
    matches!(value.weekday(), Weekday::Sat | Weekday::Sun)
}

crate::rule! {
    /// Validates that a date falls on Saturday or Sunday.
    pub Weekend<T: Datelike> for T;
    check(input) { is_weekend(input) }
    error(input) { ValidationError::new("weekend", "time must be a weekend") }
    fn weekend();
}

crate::rule! {
    /// Validates that a date falls on Monday through Friday.
    pub Workday<T: Datelike> for T;
    check(input) { !is_weekend(input) }
    error(input) { ValidationError::new("workday", "time must be a workday") }
    fn workday();
}

/// Validates that a date is one of a set of holidays.
///
/// Only the calendar date is compared, so the time of day and the offset of
/// the input are irrelevant.
///
/// ```
/// use arbiter::prelude::*;
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let rule = holiday([new_year]);
/// assert!(rule.validate(&Utc.with_ymd_and_hms(2025, 1, 1, 18, 30, 0).unwrap()).is_ok());
/// assert!(rule.validate(&Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap()).is_err());
/// ```
pub struct Holiday<T> {
    dates: Vec<NaiveDate>,
    _input: PhantomData<fn(&T)>,
}

impl<T: Datelike> Holiday<T> {
    /// Creates a holiday rule over the given dates.
    #[must_use]
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
            _input: PhantomData,
        }
    }

    /// The configured holidays.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }
}

impl<T> fmt::Debug for Holiday<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holiday").field("dates", &self.dates).finish()
    }
}

impl<T> Clone for Holiday<T> {
    fn clone(&self) -> Self {
        Self {
            dates: self.dates.clone(),
            _input: PhantomData,
        }
    }
}

impl<T: Datelike> Rule for Holiday<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let same_day = |date: &NaiveDate| {
            date.year() == input.year() && date.month() == input.month() && date.day() == input.day()
        };
        if self.dates.iter().any(same_day) {
            Ok(())
        } else {
            Err(ValidationError::new("holiday", "time must be a holiday"))
        }
    }
}

/// Creates a [`Holiday`] rule.
#[must_use]
pub fn holiday<T: Datelike>(dates: impl IntoIterator<Item = NaiveDate>) -> Holiday<T> {
    Holiday::new(dates)
}

// ============================================================================
// STRING FORMATS
// ============================================================================

/// What a format rule parses its input as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Component {
    Date,
    Time,
    DateTime,
}

impl Component {
    fn parses(self, input: &str, format: &str) -> bool {
        match self {
            Component::Date => NaiveDate::parse_from_str(input, format).is_ok(),
            Component::Time => NaiveTime::parse_from_str(input, format).is_ok(),
            Component::DateTime => NaiveDateTime::parse_from_str(input, format).is_ok(),
        }
    }

    fn error(self) -> ValidationError {
        match self {
            Component::Date => ValidationError::new("date_format", "invalid date format"),
            Component::Time => ValidationError::new("time_format", "invalid time format"),
            Component::DateTime => {
                ValidationError::new("datetime_format", "invalid datetime format")
            }
        }
    }
}

/// Validates that a string parses with a chrono format string.
///
/// Built by [`date_format`], [`time_format`] and [`datetime_format`]. An
/// empty string passes.
///
/// ```
/// use arbiter::prelude::*;
///
/// let rule = date_format("%Y-%m-%d")?;
/// assert!(rule.validate("2024-02-29").is_ok());
/// assert!(rule.validate("2023-02-29").is_err());
/// assert!(date_format("%Y-%Q").is_err());
/// # Ok::<(), arbiter::foundation::RuleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeFormat {
    format: String,
    component: Component,
}

impl TimeFormat {
    fn new(format: &str, component: Component) -> Result<Self, RuleError> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(RuleError::InvalidFormat {
                format: format.to_string(),
            });
        }
        Ok(Self {
            format: format.to_string(),
            component,
        })
    }

    /// The chrono format string.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Rule for TimeFormat {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() || self.component.parses(input, &self.format) {
            return Ok(());
        }
        Err(self.component.error().with_param("format", self.format.clone()))
    }
}

/// Date strings such as `"%Y-%m-%d"`.
pub fn date_format(format: &str) -> Result<TimeFormat, RuleError> {
    TimeFormat::new(format, Component::Date)
}

/// Time-of-day strings such as `"%H:%M:%S"`.
pub fn time_format(format: &str) -> Result<TimeFormat, RuleError> {
    TimeFormat::new(format, Component::Time)
}

/// Combined date and time strings such as `"%Y-%m-%d %H:%M:%S"`.
pub fn datetime_format(format: &str) -> Result<TimeFormat, RuleError> {
    TimeFormat::new(format, Component::DateTime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rstest::rstest;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn instant(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_before() {
        let rule = before(instant(12));
        assert!(rule.validate(&instant(11)).is_ok());
        assert!(rule.validate(&instant(12)).is_err());
        assert!(rule.inclusive().validate(&instant(12)).is_ok());
        assert!(rule.inclusive().validate(&instant(13)).is_err());
    }

    #[test]
    fn test_after() {
        let rule = after(instant(12));
        assert!(rule.validate(&instant(13)).is_ok());
        assert!(rule.validate(&instant(12)).is_err());
        assert!(rule.inclusive().validate(&instant(12)).is_ok());

        let error = rule.validate(&instant(1)).unwrap_err();
        assert_eq!(error.message, "time must be after the specified time");
    }

    #[rstest]
    #[case(8, false)]
    #[case(9, true)]
    #[case(12, true)]
    #[case(17, true)]
    #[case(18, false)]
    fn test_time_between(#[case] hour: u32, #[case] ok: bool) {
        let rule = time_between(instant(9), instant(17));
        assert_eq!(rule.validate(&instant(hour)).is_ok(), ok);
    }

    #[rstest]
    #[case(day(2024, 5, 4), true)]
    #[case(day(2024, 5, 5), true)]
    #[case(day(2024, 5, 6), false)]
    #[case(day(2024, 5, 10), false)]
    fn test_weekend_and_workday(#[case] date: NaiveDate, #[case] is_weekend: bool) {
        assert_eq!(weekend().validate(&date).is_ok(), is_weekend);
        assert_eq!(workday().validate(&date).is_ok(), !is_weekend);
    }

    #[test]
    fn test_holiday() {
        let rule = holiday([day(2024, 12, 25), day(2025, 1, 1)]);
        assert!(rule.validate(&day(2024, 12, 25)).is_ok());
        assert!(rule.validate(&day(2023, 12, 25)).is_err());
        assert_eq!(rule.dates().len(), 2);

        let none: Holiday<NaiveDate> = holiday([]);
        assert_eq!(
            none.validate(&day(2024, 1, 1)).unwrap_err().message,
            "time must be a holiday"
        );
    }

    #[rstest]
    #[case("%Y-%m-%d", "2024-01-31", true)]
    #[case("%Y-%m-%d", "2024-13-01", false)]
    #[case("%Y-%m-%d", "31/01/2024", false)]
    #[case("%d/%m/%Y", "31/01/2024", true)]
    #[case("%Y-%m-%d", "", true)]
    fn test_date_format(#[case] format: &str, #[case] value: &str, #[case] ok: bool) {
        assert_eq!(date_format(format).unwrap().validate(value).is_ok(), ok);
    }

    #[test]
    fn test_time_and_datetime_formats() {
        let time = time_format("%H:%M:%S").unwrap();
        assert!(time.validate("23:59:59").is_ok());
        assert!(time.validate("24:00:00").is_err());

        let datetime = datetime_format("%Y-%m-%d %H:%M:%S").unwrap();
        assert!(datetime.validate("2024-01-31 08:30:00").is_ok());

        let error = datetime.validate("2024-01-31").unwrap_err();
        assert_eq!(error.code, "datetime_format");
        assert_eq!(error.param("format"), Some("%Y-%m-%d %H:%M:%S"));
    }

    #[test]
    fn test_invalid_format_string() {
        let error = time_format("%H:%").unwrap_err();
        assert!(matches!(error, RuleError::InvalidFormat { ref format } if format == "%H:%"));
    }
}
