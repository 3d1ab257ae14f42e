//! Simple interest.
//!
//! # Formula
//!
//! ```text
//! V = P × (1 + r/100 × t)
//! ```

use rust_decimal::Decimal;

use depo_core::math::percent_to_rate;

use crate::contract::DepositContract;
use crate::time::Horizon;

/// Values a simple-interest deposit at the end of `horizon`.
#[must_use]
pub fn value(contract: &DepositContract, horizon: &Horizon) -> Decimal {
    grow(contract.principal, contract.annual_rate_percent, horizon.years)
}

/// Grows `principal` linearly at `rate_percent` for `years`.
///
/// Non-positive inputs return the principal unchanged. A value beyond
/// `Decimal::MAX` saturates there.
#[must_use]
pub fn grow(principal: Decimal, rate_percent: Decimal, years: Decimal) -> Decimal {
    if principal <= Decimal::ZERO || rate_percent <= Decimal::ZERO || years <= Decimal::ZERO {
        return principal;
    }
    let growth = Decimal::ONE.saturating_add(percent_to_rate(rate_percent).saturating_mul(years));
    principal.saturating_mul(growth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_year_at_ten_percent() {
        assert_eq!(grow(dec!(1000), dec!(10), dec!(1)), dec!(1100));
    }

    #[test]
    fn test_fractional_year() {
        assert_eq!(grow(dec!(1000), dec!(6), dec!(0.5)), dec!(1030));
    }

    #[test]
    fn test_overflow_saturates() {
        let huge = grow(dec!(1_000_000_000_000_000_000_000_000_000), dec!(1000), dec!(500));
        assert_eq!(huge, Decimal::MAX);
    }

    #[test]
    fn test_no_growth_cases() {
        assert_eq!(grow(dec!(1000), dec!(0), dec!(3)), dec!(1000));
        assert_eq!(grow(dec!(1000), dec!(-2), dec!(3)), dec!(1000));
        assert_eq!(grow(dec!(1000), dec!(5), dec!(0)), dec!(1000));
        assert_eq!(grow(dec!(-50), dec!(5), dec!(3)), dec!(-50));
    }
}
