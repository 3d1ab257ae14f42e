//! Deposit contract definition.
//!
//! A [`DepositContract`] is the immutable input to valuation. The accrual
//! rule is a closed [`InterestRegime`] enum and each variant carries only
//! the schedule it needs. An empty schedule is a valid value: the engine
//! falls back to plain compounding at the contract's base rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use depo_core::types::{CompoundingFrequency, Date};

/// One stage of a progressive deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateStage {
    /// Months this stage stays active.
    pub duration_months: u32,
    /// Annual rate during the stage, as a percentage.
    pub rate_percent: Decimal,
}

impl RateStage {
    /// Creates a new stage.
    #[must_use]
    pub fn new(duration_months: u32, rate_percent: Decimal) -> Self {
        Self {
            duration_months,
            rate_percent,
        }
    }
}

/// A rate change on a variable-rate deposit.
///
/// The new rate applies from `effective_date` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateChange {
    /// Date the rate takes effect.
    pub effective_date: Date,
    /// Annual rate from that date, as a percentage.
    pub rate_percent: Decimal,
}

impl RateChange {
    /// Creates a new rate change.
    #[must_use]
    pub fn new(effective_date: Date, rate_percent: Decimal) -> Self {
        Self {
            effective_date,
            rate_percent,
        }
    }
}

/// A principal band on a tiered deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceTier {
    /// Lowest principal in the band (inclusive).
    pub min_balance: Decimal,
    /// Highest principal in the band (inclusive). `None` is unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_balance: Option<Decimal>,
    /// Annual rate for the band, as a percentage.
    pub rate_percent: Decimal,
}

impl BalanceTier {
    /// Creates a new tier.
    #[must_use]
    pub fn new(min_balance: Decimal, max_balance: Option<Decimal>, rate_percent: Decimal) -> Self {
        Self {
            min_balance,
            max_balance,
            rate_percent,
        }
    }

    /// Returns true if `balance` falls inside this band.
    #[must_use]
    pub fn contains(&self, balance: Decimal) -> bool {
        balance >= self.min_balance && self.max_balance.map_or(true, |max| balance <= max)
    }
}

/// Interest-accrual rule of a deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "interestType", rename_all = "lowercase")]
pub enum InterestRegime {
    /// Linear growth on the principal.
    Simple,
    /// Periodic compounding at the base rate.
    #[default]
    Compound,
    /// Consecutive fixed-rate stages.
    Progressive {
        /// Stages, consumed in order of duration.
        #[serde(default)]
        stages: Vec<RateStage>,
    },
    /// Dated rate changes.
    Variable {
        /// Rate changes, walked in date order.
        #[serde(default)]
        changes: Vec<RateChange>,
    },
    /// Principal-banded rates.
    Tiered {
        /// Tiers, matched in order of minimum balance.
        #[serde(default)]
        tiers: Vec<BalanceTier>,
    },
}

impl InterestRegime {
    /// Returns the lowercase regime tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            InterestRegime::Simple => "simple",
            InterestRegime::Compound => "compound",
            InterestRegime::Progressive { .. } => "progressive",
            InterestRegime::Variable { .. } => "variable",
            InterestRegime::Tiered { .. } => "tiered",
        }
    }

    /// Returns true if the regime needs a schedule but has none.
    #[must_use]
    pub fn has_empty_schedule(&self) -> bool {
        match self {
            InterestRegime::Simple | InterestRegime::Compound => false,
            InterestRegime::Progressive { stages } => stages.is_empty(),
            InterestRegime::Variable { changes } => changes.is_empty(),
            InterestRegime::Tiered { tiers } => tiers.is_empty(),
        }
    }
}

impl fmt::Display for InterestRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A fixed-principal deposit.
///
/// # Example
///
/// ```rust
/// use depo_core::types::{CompoundingFrequency, Date};
/// use depo_valuation::{DepositContract, InterestRegime, RateStage};
/// use rust_decimal_macros::dec;
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let contract = DepositContract::new(dec!(10_000), dec!(6), start)
///     .with_maturity(start.add_days(366))
///     .with_compounding(CompoundingFrequency::Monthly)
///     .with_regime(InterestRegime::Progressive {
///         stages: vec![RateStage::new(6, dec!(5)), RateStage::new(6, dec!(7))],
///     });
///
/// assert_eq!(contract.regime.name(), "progressive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositContract {
    /// Amount deposited.
    pub principal: Decimal,
    /// Nominal annual rate, as a percentage (5.5 = 5.5%).
    pub annual_rate_percent: Decimal,
    /// Date interest starts to accrue.
    pub start_date: Date,
    /// Date accrual stops. `None` means open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<Date>,
    /// Capitalisation frequency for compounding regimes.
    #[serde(default)]
    pub compounding_frequency: CompoundingFrequency,
    /// Accrual rule.
    #[serde(flatten)]
    pub regime: InterestRegime,
}

impl DepositContract {
    /// Creates an open-ended, monthly-compounded deposit.
    #[must_use]
    pub fn new(principal: Decimal, annual_rate_percent: Decimal, start_date: Date) -> Self {
        Self {
            principal,
            annual_rate_percent,
            start_date,
            maturity_date: None,
            compounding_frequency: CompoundingFrequency::default(),
            regime: InterestRegime::default(),
        }
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn with_maturity(mut self, maturity_date: Date) -> Self {
        self.maturity_date = Some(maturity_date);
        self
    }

    /// Sets the compounding frequency.
    #[must_use]
    pub fn with_compounding(mut self, frequency: CompoundingFrequency) -> Self {
        self.compounding_frequency = frequency;
        self
    }

    /// Sets the interest regime.
    #[must_use]
    pub fn with_regime(mut self, regime: InterestRegime) -> Self {
        self.regime = regime;
        self
    }

    /// Returns true when the contract cannot grow: non-positive principal
    /// or non-positive base rate.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.principal <= Decimal::ZERO || self.annual_rate_percent <= Decimal::ZERO
    }
}
