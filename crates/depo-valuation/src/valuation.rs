//! Deposit valuation.
//!
//! [`valuate`] is the single entry point of the engine. It is total: every
//! contract and evaluation date produce a valuation, with schedule problems
//! and non-positive inputs degrading to compounding or to a flat value
//! rather than to an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use depo_core::math::round_money;
use depo_core::types::Date;

use crate::contract::DepositContract;
use crate::metrics;
use crate::regimes;
use crate::time::ElapsedTime;

/// State of a deposit on one evaluation date.
///
/// Produced fresh by every [`valuate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositValuation {
    /// Principal the valuation was computed for.
    pub principal: Decimal,
    /// Value on the evaluation date, rounded to cents. Clamped at maturity.
    pub current_value: Decimal,
    /// `current_value - principal`, rounded to cents.
    pub accrued_interest: Decimal,
    /// Calendar days from start to the evaluation date.
    pub days_elapsed: i64,
    /// Whole average months from start to the evaluation date.
    pub months_elapsed: u32,
    /// Average years from start to the evaluation date, rounded to 2 places.
    pub years_elapsed: Decimal,
    /// Unrounded years growth was computed over (clamped at maturity).
    pub effective_years: Decimal,
    /// Whether maturity has been reached.
    pub is_matured: bool,
    /// Value at maturity, present while a maturity date lies ahead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_maturity_value: Option<Decimal>,
}

impl DepositValuation {
    /// Annual percentage yield realised so far.
    ///
    /// Measured over the effective horizon, so a matured deposit reports
    /// the yield it earned up to maturity.
    #[must_use]
    pub fn apy(&self) -> Decimal {
        metrics::calculate_apy(self.principal, self.current_value, self.effective_years)
    }
}

/// Values `contract` on `as_of`.
///
/// The evaluation date is always explicit; the engine never reads a clock.
///
/// # Example
///
/// ```rust
/// use depo_core::types::{CompoundingFrequency, Date};
/// use depo_valuation::{valuate, DepositContract, InterestRegime};
/// use rust_decimal_macros::dec;
///
/// let start = Date::from_ymd(2020, 1, 1).unwrap();
/// let contract = DepositContract::new(dec!(1000), dec!(10), start)
///     .with_compounding(CompoundingFrequency::Annually)
///     .with_regime(InterestRegime::Compound);
///
/// // 1461 days is exactly four average years.
/// let valuation = valuate(&contract, Date::from_ymd(2024, 1, 1).unwrap());
/// assert_eq!(valuation.current_value, dec!(1464.10));
/// assert_eq!(valuation.accrued_interest, dec!(464.10));
/// ```
#[must_use]
pub fn valuate(contract: &DepositContract, as_of: Date) -> DepositValuation {
    let time = ElapsedTime::measure(contract, as_of);

    let current_value = round_money(regimes::accrue(contract, &time.effective));
    let accrued_interest = round_money(current_value - contract.principal);

    let projected_maturity_value = time
        .maturity_horizon(contract)
        .map(|horizon| round_money(regimes::accrue(contract, &horizon)));

    log::debug!(
        "valued {} deposit of {} on {}: {} (matured: {})",
        contract.regime,
        contract.principal,
        as_of,
        current_value,
        time.is_matured
    );

    DepositValuation {
        principal: contract.principal,
        current_value,
        accrued_interest,
        days_elapsed: time.elapsed.days,
        months_elapsed: time.elapsed.months,
        years_elapsed: round_money(time.elapsed.years),
        effective_years: time.effective.years,
        is_matured: time.is_matured,
        projected_maturity_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{InterestRegime, RateStage};
    use depo_core::types::CompoundingFrequency;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_simple_four_years() {
        let contract = DepositContract::new(dec!(1000), dec!(10), date(2020, 1, 1))
            .with_regime(InterestRegime::Simple);
        let v = valuate(&contract, date(2024, 1, 1));

        assert_eq!(v.current_value, dec!(1400.00));
        assert_eq!(v.accrued_interest, dec!(400.00));
        assert_eq!(v.days_elapsed, 1461);
        assert_eq!(v.months_elapsed, 47);
        assert_eq!(v.years_elapsed, dec!(4.00));
        assert!(!v.is_matured);
        assert!(v.projected_maturity_value.is_none());
    }

    #[test]
    fn test_projection_for_open_maturity() {
        let contract = DepositContract::new(dec!(1000), dec!(10), date(2020, 1, 1))
            .with_maturity(date(2024, 1, 1))
            .with_regime(InterestRegime::Simple);
        let v = valuate(&contract, date(2022, 1, 1));

        assert!(!v.is_matured);
        assert_eq!(v.projected_maturity_value, Some(dec!(1400.00)));
        // 731 days: 1000 × (1 + 0.1 × 731/365.25)
        assert_eq!(v.current_value, dec!(1200.14));
    }

    #[test]
    fn test_matured_value_clamped() {
        let contract = DepositContract::new(dec!(1000), dec!(10), date(2020, 1, 1))
            .with_maturity(date(2024, 1, 1))
            .with_compounding(CompoundingFrequency::Annually);
        let v = valuate(&contract, date(2030, 6, 30));

        assert!(v.is_matured);
        assert_eq!(v.current_value, dec!(1464.10));
        assert!(v.projected_maturity_value.is_none());
        assert!(v.days_elapsed > 1461);
    }

    #[test]
    fn test_before_start() {
        let contract = DepositContract::new(dec!(1000), dec!(10), date(2024, 1, 1));
        let v = valuate(&contract, date(2023, 1, 1));

        assert_eq!(v.current_value, dec!(1000));
        assert_eq!(v.accrued_interest, dec!(0));
        assert_eq!(v.days_elapsed, 0);
        assert_eq!(v.years_elapsed, dec!(0));
    }

    #[test]
    fn test_accrued_interest_identity() {
        let contract = DepositContract::new(dec!(1234.56), dec!(3.7), date(2021, 3, 15))
            .with_compounding(CompoundingFrequency::Daily);
        let v = valuate(&contract, date(2023, 8, 2));
        assert_eq!(v.accrued_interest, v.current_value - v.principal);
    }

    #[test]
    fn test_progressive_projection_roundtrip() {
        let contract = DepositContract::new(dec!(5000), dec!(6), date(2024, 1, 1))
            .with_maturity(date(2025, 7, 1))
            .with_regime(InterestRegime::Progressive {
                stages: vec![RateStage::new(6, dec!(5)), RateStage::new(12, dec!(7))],
            });

        let before = valuate(&contract, date(2024, 9, 1));
        let at_maturity = valuate(&contract, date(2025, 7, 1));

        assert!(at_maturity.is_matured);
        assert_eq!(before.projected_maturity_value, Some(at_maturity.current_value));
    }

    #[test]
    fn test_apy_of_compound_deposit() {
        let contract = DepositContract::new(dec!(1000), dec!(10), date(2020, 1, 1))
            .with_compounding(CompoundingFrequency::Annually);
        let v = valuate(&contract, date(2024, 1, 1));
        assert_eq!(v.apy(), dec!(10.00));
    }
}
