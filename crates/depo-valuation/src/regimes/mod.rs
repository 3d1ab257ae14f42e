//! Interest regime calculators.
//!
//! Each regime is a pure function from a contract and a [`Horizon`] to an
//! unrounded deposit value. [`accrue`] selects the calculator for the
//! contract's regime; the valuation dispatcher calls it once for the
//! effective horizon and once more for the maturity horizon, so the current
//! value and the projection always come from the same rule.
//!
//! # Regimes
//!
//! - [`simple`]: `P × (1 + r·t)`
//! - [`compound`]: `P × (1 + r/n)^(n·t)`
//! - [`progressive`]: consecutive stages consumed month by month
//! - [`variable`]: dated rate changes, interest added per sub-interval
//! - [`tiered`]: one principal-banded rate, compounded
//!
//! Schedule-driven regimes with an empty schedule fall back to
//! [`compound`] at the contract's base rate.

pub mod compound;
pub mod progressive;
pub mod simple;
pub mod tiered;
pub mod variable;

use rust_decimal::Decimal;

use crate::contract::{DepositContract, InterestRegime};
use crate::time::Horizon;

/// Values `contract` at the end of `horizon` under its own regime.
///
/// A contract with non-positive principal or base rate does not move.
#[must_use]
pub fn accrue(contract: &DepositContract, horizon: &Horizon) -> Decimal {
    if contract.is_flat() {
        return contract.principal;
    }

    log::trace!(
        "accruing {} deposit over {} days",
        contract.regime,
        horizon.days
    );

    match &contract.regime {
        InterestRegime::Simple => simple::value(contract, horizon),
        InterestRegime::Compound => compound::value(contract, horizon),
        InterestRegime::Progressive { stages } => progressive::value(contract, stages, horizon),
        InterestRegime::Variable { changes } => variable::value(contract, changes, horizon),
        InterestRegime::Tiered { tiers } => tiered::value(contract, tiers, horizon),
    }
}
