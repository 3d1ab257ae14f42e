//! Derived metrics and display helpers.
//!
//! These consume a [`DepositValuation`] or raw contract figures and never
//! call back into the regimes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use depo_core::conventions::{self, MONTHS_PER_YEAR};
use depo_core::math::{percent_to_rate, pow_decimal, round_money};

use crate::valuation::DepositValuation;

/// Elapsed years below which a deposit counts as recently started.
pub const RECENT_START_YEARS: Decimal = dec!(0.1);

/// Annual percentage yield implied by growing `principal` into
/// `final_value` over `years`, as a percentage rounded to 2 places.
///
/// # Formula
///
/// ```text
/// APY = ((final / principal)^(1 / years) - 1) × 100
/// ```
///
/// Returns zero when `years <= 0`, when the principal is not positive, or
/// when the value ratio is not positive.
#[must_use]
pub fn calculate_apy(principal: Decimal, final_value: Decimal, years: Decimal) -> Decimal {
    if years <= Decimal::ZERO || principal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let ratio = final_value.checked_div(principal).unwrap_or(Decimal::MAX);
    if ratio <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let annual_growth = pow_decimal(ratio, Decimal::ONE / years);
    round_money((annual_growth - Decimal::ONE).saturating_mul(Decimal::ONE_HUNDRED))
}

/// Future value of a recurring deposit (ordinary annuity, end-of-month
/// payments), rounded to cents.
///
/// # Formula
///
/// ```text
/// i  = rate / 100 / 12
/// FV = A × ((1 + i)^n - 1) / i        (i ≠ 0)
/// FV = A × n                          (i = 0)
/// ```
#[must_use]
pub fn recurring_deposit_future_value(
    monthly_amount: Decimal,
    annual_rate_percent: Decimal,
    months: u32,
) -> Decimal {
    let monthly_rate = percent_to_rate(annual_rate_percent) / MONTHS_PER_YEAR;
    let periods = Decimal::from(months);

    if monthly_rate.is_zero() {
        return round_money(monthly_amount.saturating_mul(periods));
    }

    let growth = pow_decimal(Decimal::ONE + monthly_rate, periods);
    let accumulated = monthly_amount.saturating_mul(growth - Decimal::ONE);
    round_money(accumulated.checked_div(monthly_rate).unwrap_or(Decimal::MAX))
}

/// Human-readable elapsed time in the coarsest sensible unit.
///
/// Whole years come from the day count (days / 365.25), so the rounded
/// `years_elapsed` field never promotes 11 months to a year. The month
/// remainder is `months_elapsed` minus the whole years.
///
/// ```rust
/// # use depo_core::types::Date;
/// # use depo_valuation::{valuate, format_duration, DepositContract};
/// # use rust_decimal_macros::dec;
/// let start = Date::from_ymd(2023, 1, 1).unwrap();
/// let contract = DepositContract::new(dec!(100), dec!(5), start);
/// let v = valuate(&contract, Date::from_ymd(2024, 4, 15).unwrap());
/// assert_eq!(format_duration(&v), "1 year, 3 months");
/// ```
#[must_use]
pub fn format_duration(valuation: &DepositValuation) -> String {
    // Not `years_elapsed.floor()`: 365 days rounds to 1.00 there.
    let years = conventions::years_from_days(valuation.days_elapsed)
        .floor()
        .to_u32()
        .unwrap_or(0);

    if years >= 1 {
        let months = valuation.months_elapsed.saturating_sub(years * 12);
        if months > 0 {
            format!("{}, {}", pluralize(years, "year"), pluralize(months, "month"))
        } else {
            pluralize(years, "year")
        }
    } else if valuation.months_elapsed >= 1 {
        pluralize(valuation.months_elapsed, "month")
    } else {
        let days = valuation.days_elapsed.max(0).to_u32().unwrap_or(u32::MAX);
        pluralize(days, "day")
    }
}

fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Lifecycle status of a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepositStatus {
    /// Maturity date reached.
    Matured,
    /// Less than a tenth of a year elapsed.
    RecentlyStarted,
    /// Accruing.
    Active,
}

impl DepositStatus {
    /// Display label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositStatus::Matured => "Matured",
            DepositStatus::RecentlyStarted => "Recently Started",
            DepositStatus::Active => "Active",
        }
    }
}

impl fmt::Display for DepositStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a valuation. Maturity takes precedence over age.
#[must_use]
pub fn classify_status(valuation: &DepositValuation) -> DepositStatus {
    if valuation.is_matured {
        DepositStatus::Matured
    } else if valuation.years_elapsed < RECENT_START_YEARS {
        DepositStatus::RecentlyStarted
    } else {
        DepositStatus::Active
    }
}
