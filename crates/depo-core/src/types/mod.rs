//! Domain types for deposit valuation.
//!
//! - [`Date`]: Calendar date for deposit calculations
//! - [`CompoundingFrequency`]: How often interest is capitalised

mod date;
mod frequency;

pub use date::Date;
pub use frequency::CompoundingFrequency;
