//! Progressive (stepped-rate) deposits.
//!
//! The effective month count is consumed against each stage in turn. Within
//! a stage, monthly-compounded deposits capitalise once per whole month;
//! every other frequency grows by simple interest over the stage's share of
//! a year. Once the month count is exhausted the remaining stages are
//! ignored, and months beyond the last stage earn nothing.
//!
//! Stages are walked in ascending `duration_months` (stable, so equal
//! durations keep their given order).

use rust_decimal::Decimal;

use depo_core::conventions::MONTHS_PER_YEAR;
use depo_core::math::{percent_to_rate, pow_decimal};

use super::compound;
use crate::contract::{DepositContract, RateStage};
use crate::time::Horizon;

/// Values a progressive deposit at the end of `horizon`.
///
/// An empty schedule falls back to compounding at the base rate.
#[must_use]
pub fn value(contract: &DepositContract, stages: &[RateStage], horizon: &Horizon) -> Decimal {
    if stages.is_empty() {
        log::debug!("progressive deposit without stages, compounding at base rate");
        return compound::value(contract, horizon);
    }

    let monthly = contract.compounding_frequency.is_monthly();
    let mut value = contract.principal;
    let mut remaining = horizon.months;

    for stage in ordered(stages) {
        if remaining == 0 {
            break;
        }
        if stage.duration_months == 0 {
            continue;
        }

        let months = remaining.min(stage.duration_months);
        remaining -= months;

        if stage.rate_percent <= Decimal::ZERO {
            continue;
        }
        let rate = percent_to_rate(stage.rate_percent);
        let months_dec = Decimal::from(months);

        let factor = if monthly {
            pow_decimal(Decimal::ONE.saturating_add(rate / MONTHS_PER_YEAR), months_dec)
        } else {
            Decimal::ONE.saturating_add(rate.saturating_mul(months_dec / MONTHS_PER_YEAR))
        };
        value = value.saturating_mul(factor);

        log::trace!(
            "stage at {}% for {} months -> {}",
            stage.rate_percent,
            months,
            value
        );
    }

    value
}

fn ordered(stages: &[RateStage]) -> Vec<RateStage> {
    let mut sorted = stages.to_vec();
    sorted.sort_by_key(|stage| stage.duration_months);
    sorted
}
