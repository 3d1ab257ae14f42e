//! # Depo Core
//!
//! Core types and conventions for the Depo deposit valuation engine.
//!
//! This crate provides the foundational building blocks used by the engine:
//!
//! - **Types**: [`Date`] and [`CompoundingFrequency`]
//! - **Conventions**: the average-calendar elapsed-time rules (365.25-day
//!   years, 30.44-day months) used by every interest regime
//! - **Decimal helpers**: fractional powers and money rounding
//!
//! ## Example
//!
//! ```rust
//! use depo_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::from_ymd(2020, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 1, 1).unwrap();
//!
//! assert_eq!(conventions::year_fraction(start, end), dec!(4));
//! assert_eq!(CompoundingFrequency::Quarterly.periods_per_year(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod conventions;
pub mod error;
pub mod math;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::conventions;
    pub use crate::error::{DepoError, DepoResult};
    pub use crate::math::{percent_to_rate, pow_decimal, round_money};
    pub use crate::types::{CompoundingFrequency, Date};
}

// Re-export commonly used types at crate root
pub use error::{DepoError, DepoResult};
pub use types::{CompoundingFrequency, Date};
