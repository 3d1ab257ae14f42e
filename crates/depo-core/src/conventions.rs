//! Elapsed-time conventions.
//!
//! Deposits are measured on an average calendar rather than an exact one:
//! a year is 365.25 days and a month is 30.44 days. Leap years are therefore
//! accounted for statistically, not exactly, and every regime sees the same
//! year fraction for the same pair of dates.
//!
//! # Formula
//!
//! ```text
//! days   = max(0, end - start)
//! months = floor(days / 30.44)
//! years  = days / 365.25
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Date;

/// Average days per year.
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Average days per month.
pub const DAYS_PER_MONTH: Decimal = dec!(30.44);

/// Months per year.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Calendar days from `start` to `end`, clamped at zero.
#[must_use]
pub fn elapsed_days(start: Date, end: Date) -> i64 {
    start.days_between(&end).max(0)
}

/// Whole average months in a day count.
#[must_use]
pub fn whole_months(days: i64) -> u32 {
    if days <= 0 {
        return 0;
    }
    (Decimal::from(days) / DAYS_PER_MONTH)
        .floor()
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Average years in a day count. Negative counts clamp to zero.
#[must_use]
pub fn years_from_days(days: i64) -> Decimal {
    if days <= 0 {
        return Decimal::ZERO;
    }
    Decimal::from(days) / DAYS_PER_YEAR
}

/// Average years from `start` to `end`, clamped at zero.
#[must_use]
pub fn year_fraction(start: Date, end: Date) -> Decimal {
    years_from_days(elapsed_days(start, end))
}

/// Whole average months from `start` to `end`, clamped at zero.
#[must_use]
pub fn month_count(start: Date, end: Date) -> u32 {
    whole_months(elapsed_days(start, end))
}
