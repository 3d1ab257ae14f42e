//! Date type for deposit calculations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DepoError, DepoResult};

/// A calendar date for deposit calculations.
///
/// Deposits accrue per whole calendar day, so there is no time-of-day
/// component.
///
/// # Example
///
/// ```rust
/// use depo_core::types::Date;
///
/// let start = Date::from_ymd(2024, 2, 28).unwrap();
/// assert_eq!(start.add_days(2).to_string(), "2024-03-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns `DepoError::InvalidDate` for a day that does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DepoResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| DepoError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses `YYYY-MM-DD`, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DepoError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> DepoResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| DepoError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Today's local date. Valuation never calls this; only the CLI does.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Shifts the date by `days`, which may be negative.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calendar days from `self` to `other`; negative when `other` is earlier.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = DepoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}
