//! Periodic compound interest.
//!
//! # Formula
//!
//! ```text
//! V = P × (1 + r/100/n)^(n × t)
//! ```
//!
//! where `n` is the number of compounding periods per year (365, 12, 4 or 1).
//! The exponent is fractional in general; partial periods compound
//! geometrically rather than linearly.

use rust_decimal::Decimal;

use depo_core::math::{percent_to_rate, pow_decimal};
use depo_core::types::CompoundingFrequency;

use crate::contract::DepositContract;
use crate::time::Horizon;

/// Values a compounding deposit at the end of `horizon` at its base rate.
#[must_use]
pub fn value(contract: &DepositContract, horizon: &Horizon) -> Decimal {
    grow(
        contract.principal,
        contract.annual_rate_percent,
        horizon.years,
        contract.compounding_frequency,
    )
}

/// Compounds `principal` at `rate_percent` for `years`.
///
/// Non-positive inputs return the principal unchanged. Growth past
/// `Decimal::MAX` saturates there.
#[must_use]
pub fn grow(
    principal: Decimal,
    rate_percent: Decimal,
    years: Decimal,
    frequency: CompoundingFrequency,
) -> Decimal {
    if principal <= Decimal::ZERO || rate_percent <= Decimal::ZERO || years <= Decimal::ZERO {
        return principal;
    }
    let periods = Decimal::from(frequency.periods_per_year());
    let periodic_rate = percent_to_rate(rate_percent) / periods;
    let factor = pow_decimal(
        Decimal::ONE.saturating_add(periodic_rate),
        periods.saturating_mul(years),
    );
    principal.saturating_mul(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    #[test]
    fn test_annual_two_years() {
        let v = grow(dec!(1000), dec!(10), dec!(2), CompoundingFrequency::Annually);
        assert_eq!(v, dec!(1210));
    }

    #[test]
    fn test_quarterly_one_year() {
        // 1000 × 1.025^4
        let v = grow(dec!(1000), dec!(10), dec!(1), CompoundingFrequency::Quarterly);
        assert_eq!(v, dec!(1103.81289062500));
    }

    #[test]
    fn test_daily_approaches_continuous() {
        let v = grow(dec!(1000), dec!(10), dec!(1), CompoundingFrequency::Daily);
        let expected = 1000.0 * (1.0_f64 + 0.1 / 365.0).powf(365.0);
        assert_relative_eq!(v.to_f64().unwrap(), expected, max_relative = 1e-12);
        assert!(v < dec!(1105.18));
    }

    #[test]
    fn test_partial_period_is_geometric() {
        let v = grow(dec!(1000), dec!(10), dec!(0.5), CompoundingFrequency::Annually);
        assert_relative_eq!(v.to_f64().unwrap(), 1000.0 * 1.1_f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_product_overflow_saturates() {
        // 2^60 ≈ 1.15e18 times 1e15 overflows the product, not the power.
        let v = grow(dec!(1_000_000_000_000_000), dec!(100), dec!(60), CompoundingFrequency::Annually);
        assert_eq!(v, Decimal::MAX);
    }

    #[test]
    fn test_power_overflow_saturates() {
        // 11^60 does not fit a Decimal at all.
        let v = grow(dec!(1000), dec!(1000), dec!(60), CompoundingFrequency::Annually);
        assert_eq!(v, Decimal::MAX);
    }

    #[test]
    fn test_no_growth_cases() {
        let f = CompoundingFrequency::Monthly;
        assert_eq!(grow(dec!(1000), dec!(0), dec!(3), f), dec!(1000));
        assert_eq!(grow(dec!(1000), dec!(5), dec!(0), f), dec!(1000));
        assert_eq!(grow(dec!(0), dec!(5), dec!(3), f), dec!(0));
    }
}
