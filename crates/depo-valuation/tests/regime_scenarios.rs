//! End-to-end valuation scenarios for each interest regime.
//!
//! Spans of 1461 days (four average years) are used wherever an exact
//! closed-form figure is asserted, since only multiples of 365.25 days map
//! to whole years.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use depo_core::math::round_money;
use depo_core::types::{CompoundingFrequency, Date};
use depo_valuation::prelude::*;
use depo_valuation::regimes::{compound, simple};
use depo_valuation::Horizon;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn deposit(principal: Decimal, rate: Decimal, regime: InterestRegime) -> DepositContract {
    DepositContract::new(principal, rate, date(2020, 1, 1))
        .with_compounding(CompoundingFrequency::Annually)
        .with_regime(regime)
}

/// A year-long monthly-compounded horizon of exactly one average year.
fn one_year() -> Horizon {
    Horizon {
        end: date(2021, 1, 1),
        days: 365,
        months: 12,
        years: Decimal::ONE,
    }
}

// =============================================================================
// IDENTITIES
// =============================================================================

#[test]
fn simple_interest_identity() {
    let c = deposit(dec!(1000), dec!(10), InterestRegime::Simple);
    assert_eq!(simple::value(&c, &one_year()), dec!(1100));

    let v = valuate(&c, date(2024, 1, 1));
    assert_eq!(v.current_value, dec!(1400.00));
    assert_eq!(v.accrued_interest, dec!(400.00));
}

#[test]
fn compound_annual_identity() {
    let c = deposit(dec!(1000), dec!(10), InterestRegime::Compound);
    let two_years = Horizon {
        years: dec!(2),
        ..one_year()
    };
    assert_eq!(compound::value(&c, &two_years), dec!(1210));

    let v = valuate(&c, date(2024, 1, 1));
    assert_eq!(v.current_value, dec!(1464.10));
}

#[test]
fn calendar_year_is_slightly_short_of_average_year() {
    // 2021 has 365 days, a little under 365.25.
    let c = DepositContract::new(dec!(1000), dec!(10), date(2021, 1, 1))
        .with_regime(InterestRegime::Simple);
    let v = valuate(&c, date(2022, 1, 1));
    assert_eq!(v.current_value, dec!(1099.93));
    assert_eq!(v.years_elapsed, dec!(1.00));
}

// =============================================================================
// PROGRESSIVE
// =============================================================================

#[test]
fn progressive_monthly_ladder() {
    let c = DepositContract::new(dec!(12_000), dec!(6), date(2024, 1, 1))
        .with_compounding(CompoundingFrequency::Monthly)
        .with_maturity(date(2025, 7, 1))
        .with_regime(InterestRegime::Progressive {
            stages: vec![RateStage::new(6, dec!(6)), RateStage::new(12, dec!(12))],
        });

    // 2024-01-01 to 2024-11-01 is 305 days: 10 average months,
    // 6 at 0.5% per month and 4 at 1% per month.
    let v = valuate(&c, date(2024, 11, 1));
    assert_eq!(v.months_elapsed, 10);
    let expected = dec!(12_000) * dec!(1.005).powi(6) * dec!(1.01).powi(4);
    assert_eq!(v.current_value, round_money(expected));

    // Maturity: 547 days is 17 average months (6 + 11).
    let projected = dec!(12_000) * dec!(1.005).powi(6) * dec!(1.01).powi(11);
    assert_eq!(v.projected_maturity_value, Some(round_money(projected)));
}

#[test]
fn progressive_without_stages_compounds() {
    let c = deposit(dec!(1000), dec!(10), InterestRegime::Progressive { stages: vec![] });
    assert_eq!(valuate(&c, date(2024, 1, 1)).current_value, dec!(1464.10));
}

// =============================================================================
// VARIABLE
// =============================================================================

#[test]
fn variable_rate_cut() {
    let c = deposit(
        dec!(1000),
        dec!(10),
        InterestRegime::Variable {
            changes: vec![RateChange::new(date(2024, 1, 1), dec!(5))],
        },
    );

    // Before the change: plain compounding at 10%.
    assert_eq!(valuate(&c, date(2024, 1, 1)).current_value, dec!(1464.10));

    // Four more years at 5% on the original principal: + 215.50625.
    assert_eq!(valuate(&c, date(2028, 1, 1)).current_value, dec!(1679.61));
}

#[test]
fn variable_matured_ignores_later_changes() {
    let c = deposit(
        dec!(1000),
        dec!(10),
        InterestRegime::Variable {
            changes: vec![RateChange::new(date(2026, 1, 1), dec!(50))],
        },
    )
    .with_maturity(date(2024, 1, 1));

    let v = valuate(&c, date(2030, 1, 1));
    assert!(v.is_matured);
    assert_eq!(v.current_value, dec!(1464.10));
    assert_eq!(classify_status(&v), DepositStatus::Matured);
}

// =============================================================================
// TIERED
// =============================================================================

#[test]
fn tiered_rate_from_principal() {
    let tiers = vec![
        BalanceTier::new(dec!(0), Some(dec!(4_999.99)), dec!(2)),
        BalanceTier::new(dec!(5_000), Some(dec!(24_999.99)), dec!(10)),
        BalanceTier::new(dec!(25_000), None, dec!(12)),
    ];
    let small = deposit(dec!(1000), dec!(1), InterestRegime::Tiered { tiers: tiers.clone() });
    let mid = deposit(dec!(10_000), dec!(1), InterestRegime::Tiered { tiers });

    // 1000 × 1.02^4 and 10000 × 1.1^4
    assert_eq!(valuate(&small, date(2024, 1, 1)).current_value, dec!(1082.43));
    assert_eq!(valuate(&mid, date(2024, 1, 1)).current_value, dec!(14641.00));
}

// =============================================================================
// STORED RECORDS
// =============================================================================

#[test]
fn stored_record_round_trip() {
    let json = r#"[
        {
            "name": "Savings",
            "principal": 1000,
            "annualRatePercent": 10,
            "startDate": "2020-01-01",
            "maturityDate": "2024-01-01",
            "compoundingFrequency": "annually",
            "interestType": "compound"
        },
        {
            "name": "Legacy",
            "principal": 1000,
            "annualRatePercent": 10,
            "startDate": "2020-01-01",
            "compoundingFrequency": "annually",
            "interestType": "fixed-deposit"
        }
    ]"#;
    let records: Vec<DepositRecord> = serde_json::from_str(json).unwrap();

    assert!(records[0].is_valid());
    assert!(!records[1].is_valid());

    let as_of = date(2022, 1, 1);
    let savings = valuate(&records[0].to_contract(), as_of);
    let legacy = valuate(&records[1].to_contract(), as_of);

    // An unknown type values as compound.
    assert_eq!(savings.current_value, legacy.current_value);
    assert_eq!(savings.projected_maturity_value, Some(dec!(1464.10)));
    assert_eq!(legacy.projected_maturity_value, None);
}

#[test]
fn valuation_serializes_camel_case() {
    let c = deposit(dec!(1000), dec!(10), InterestRegime::Simple).with_maturity(date(2024, 1, 1));
    let v = valuate(&c, date(2022, 1, 1));
    let json = serde_json::to_value(&v).unwrap();

    assert!(json.get("currentValue").is_some());
    assert!(json.get("projectedMaturityValue").is_some());
    assert_eq!(json["isMatured"], serde_json::Value::Bool(false));
    assert_eq!(json["monthsElapsed"], serde_json::json!(24));
}

#[test]
fn extreme_growth_saturates_instead_of_panicking() {
    // 1e15 × 2^60 overflows the product; 11^60 overflows the power itself.
    let start = date(1900, 1, 1);
    let as_of = date(1960, 1, 1);
    let cases = [
        (dec!(1_000_000_000_000_000), dec!(100)),
        (dec!(1000), dec!(1000)),
    ];

    for (principal, rate) in cases {
        let c = DepositContract::new(principal, rate, start)
            .with_compounding(CompoundingFrequency::Annually);
        let v = valuate(&c, as_of);
        assert_eq!(v.current_value, Decimal::MAX);
        assert_eq!(v.accrued_interest, Decimal::MAX - principal);
        assert!(v.apy() > Decimal::ZERO);
    }
}

// =============================================================================
// METRICS
// =============================================================================

#[test]
fn apy_of_monthly_deposit_exceeds_nominal() {
    let c = DepositContract::new(dec!(1000), dec!(12), date(2020, 1, 1))
        .with_compounding(CompoundingFrequency::Monthly);
    let v = valuate(&c, date(2024, 1, 1));
    assert_eq!(v.apy(), dec!(12.68));
}

#[test]
fn recently_started_deposit() {
    let c = deposit(dec!(1000), dec!(10), InterestRegime::Compound);
    let v = valuate(&c, date(2020, 1, 20));
    assert_eq!(classify_status(&v), DepositStatus::RecentlyStarted);
    assert_eq!(format_duration(&v), "19 days");
}
