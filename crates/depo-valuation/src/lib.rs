//! # Depo Valuation
//!
//! The deposit valuation engine: the time value of a fixed-principal deposit
//! under five interest-accrual regimes, projected to an optional maturity,
//! plus the yield and display metrics derived from it.
//!
//! ## Design
//!
//! - **Pure**: no I/O, no clock, no cache. The evaluation date is an
//!   argument, so the same inputs always give the same valuation and any
//!   number of threads may value deposits concurrently.
//! - **Total**: no input makes valuation fail. Empty schedules fall back to
//!   compounding at the base rate; non-positive principal or rate produce a
//!   flat value; evaluation before the start date values at principal.
//! - **Decimal**: money and rates are `rust_decimal::Decimal`, rounded
//!   half-up to cents only on output.
//!
//! ## Example
//!
//! ```rust
//! use depo_core::types::{CompoundingFrequency, Date};
//! use depo_valuation::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::from_ymd(2020, 1, 1).unwrap();
//! let contract = DepositContract::new(dec!(1000), dec!(10), start)
//!     .with_maturity(Date::from_ymd(2024, 1, 1).unwrap())
//!     .with_regime(InterestRegime::Simple);
//!
//! let valuation = valuate(&contract, Date::from_ymd(2022, 1, 1).unwrap());
//! assert_eq!(valuation.projected_maturity_value, Some(dec!(1400.00)));
//! assert_eq!(classify_status(&valuation), DepositStatus::Active);
//! assert_eq!(format_duration(&valuation), "2 years");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod contract;
pub mod metrics;
pub mod record;
pub mod regimes;
pub mod time;
pub mod validation;
pub mod valuation;

pub use contract::{BalanceTier, DepositContract, InterestRegime, RateChange, RateStage};
pub use metrics::{
    calculate_apy, classify_status, format_duration, recurring_deposit_future_value,
    DepositStatus,
};
pub use record::DepositRecord;
pub use time::{ElapsedTime, Horizon};
pub use validation::{Validate, ValidationError};
pub use valuation::{valuate, DepositValuation};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::contract::{BalanceTier, DepositContract, InterestRegime, RateChange, RateStage};
    pub use crate::metrics::{
        calculate_apy, classify_status, format_duration, recurring_deposit_future_value,
        DepositStatus,
    };
    pub use crate::record::DepositRecord;
    pub use crate::validation::Validate;
    pub use crate::valuation::{valuate, DepositValuation};
}
