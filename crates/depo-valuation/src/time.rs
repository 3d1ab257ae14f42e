//! Elapsed-time measurement for a valuation.
//!
//! Two horizons come out of one measurement: the *elapsed* horizon reported
//! to the caller (start to `as_of`) and the *effective* horizon used for
//! growth (start to `as_of`, clamped to maturity once it has passed).

use rust_decimal::Decimal;

use depo_core::conventions;
use depo_core::types::Date;

use crate::contract::DepositContract;

/// Span from the start date to some end date, measured in every unit a
/// regime may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    /// End of the span.
    pub end: Date,
    /// Whole days, clamped at zero.
    pub days: i64,
    /// Whole average months (days / 30.44, floored).
    pub months: u32,
    /// Average years (days / 365.25).
    pub years: Decimal,
}

impl Horizon {
    /// Measures the span from `start` to `end`.
    #[must_use]
    pub fn between(start: Date, end: Date) -> Self {
        let days = conventions::elapsed_days(start, end);
        Self {
            end,
            days,
            months: conventions::whole_months(days),
            years: conventions::years_from_days(days),
        }
    }
}

/// Time fields of one valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    /// Start to the caller's evaluation date.
    pub elapsed: Horizon,
    /// Start to the date growth is actually computed at.
    pub effective: Horizon,
    /// Whether maturity has been reached on the evaluation date.
    pub is_matured: bool,
}

impl ElapsedTime {
    /// Measures a contract at `as_of`.
    ///
    /// A deposit is matured on its maturity date itself. Growth for a
    /// matured deposit is measured to the maturity date, re-derived from
    /// that date rather than from the elapsed horizon.
    #[must_use]
    pub fn measure(contract: &DepositContract, as_of: Date) -> Self {
        let is_matured = contract
            .maturity_date
            .is_some_and(|maturity| as_of >= maturity);

        let effective_date = match contract.maturity_date {
            Some(maturity) if is_matured => maturity,
            _ => as_of,
        };

        Self {
            elapsed: Horizon::between(contract.start_date, as_of),
            effective: Horizon::between(contract.start_date, effective_date),
            is_matured,
        }
    }

    /// Full horizon from start to maturity, if the deposit has not matured yet.
    #[must_use]
    pub fn maturity_horizon(&self, contract: &DepositContract) -> Option<Horizon> {
        match contract.maturity_date {
            Some(maturity) if !self.is_matured => {
                Some(Horizon::between(contract.start_date, maturity))
            }
            _ => None,
        }
    }
}
