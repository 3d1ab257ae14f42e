//! Tiered (principal-banded) deposits.
//!
//! A single tier is chosen from the contract principal and the whole horizon
//! compounds at that tier's rate. Selection never looks at accrued value or
//! at the evaluation date, so a deposit keeps its tier for life.

use rust_decimal::Decimal;

use super::compound;
use crate::contract::{BalanceTier, DepositContract};
use crate::time::Horizon;

/// Values a tiered deposit at the end of `horizon`.
///
/// An empty schedule falls back to compounding at the base rate.
#[must_use]
pub fn value(contract: &DepositContract, tiers: &[BalanceTier], horizon: &Horizon) -> Decimal {
    let Some(tier) = select_tier(tiers, contract.principal) else {
        log::debug!("tiered deposit without tiers, compounding at base rate");
        return compound::value(contract, horizon);
    };

    compound::grow(
        contract.principal,
        tier.rate_percent,
        horizon.years,
        contract.compounding_frequency,
    )
}

/// Picks the tier for `principal`.
///
/// Tiers are checked in ascending `min_balance`; the first band containing
/// the principal wins. When none does, the highest tier applies. Returns
/// `None` only for an empty schedule.
#[must_use]
pub fn select_tier(tiers: &[BalanceTier], principal: Decimal) -> Option<BalanceTier> {
    let mut sorted = tiers.to_vec();
    sorted.sort_by_key(|tier| tier.min_balance);

    sorted
        .iter()
        .find(|tier| tier.contains(principal))
        .or_else(|| sorted.last())
        .copied()
}
