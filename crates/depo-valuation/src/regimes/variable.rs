//! Variable-rate deposits.
//!
//! The timeline from the start date to the horizon end is cut at every rate
//! change. Each sub-interval earns the interest the [`compound`] calculator
//! gives the original principal over that interval at that interval's rate,
//! and those interest amounts are summed onto the principal. Interest is not
//! carried from one sub-interval into the next.
//!
//! The base rate applies until the first change. Changes dated on or before
//! the start date set the opening rate; changes after the horizon end are
//! ignored.

use rust_decimal::Decimal;

use depo_core::conventions;
use depo_core::types::{CompoundingFrequency, Date};

use super::compound;
use crate::contract::{DepositContract, RateChange};
use crate::time::Horizon;

/// Values a variable-rate deposit at the end of `horizon`.
///
/// An empty schedule falls back to compounding at the base rate.
#[must_use]
pub fn value(contract: &DepositContract, changes: &[RateChange], horizon: &Horizon) -> Decimal {
    if changes.is_empty() {
        log::debug!("variable deposit without rate changes, compounding at base rate");
        return compound::value(contract, horizon);
    }

    let mut sorted = changes.to_vec();
    sorted.sort_by_key(|change| change.effective_date);

    let principal = contract.principal;
    let frequency = contract.compounding_frequency;
    let end = horizon.end;

    let mut value = principal;
    let mut cursor = contract.start_date;
    let mut rate = contract.annual_rate_percent;

    for change in &sorted {
        if change.effective_date > end {
            break;
        }
        if change.effective_date > cursor {
            value = value.saturating_add(interest_between(
                principal,
                rate,
                cursor,
                change.effective_date,
                frequency,
            ));
            cursor = change.effective_date;
        }
        rate = change.rate_percent;
    }

    if end > cursor {
        value = value.saturating_add(interest_between(principal, rate, cursor, end, frequency));
    }

    value
}

fn interest_between(
    principal: Decimal,
    rate_percent: Decimal,
    from: Date,
    to: Date,
    frequency: CompoundingFrequency,
) -> Decimal {
    let years = conventions::year_fraction(from, to);
    let interest = compound::grow(principal, rate_percent, years, frequency) - principal;
    log::trace!("{from} to {to} at {rate_percent}% earns {interest}");
    interest
}
