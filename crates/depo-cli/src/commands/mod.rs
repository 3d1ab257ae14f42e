//! CLI command implementations.

pub mod apy;
pub mod project;
pub mod recurring;
pub mod value;

// Re-export submodules for convenience
pub use apy::ApyArgs;
pub use project::ProjectArgs;
pub use recurring::RecurringArgs;
pub use value::ValueArgs;

use depo_core::types::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Resolves the evaluation date, defaulting to today.
///
/// `--as-of` also reads `DEPO_AS_OF` through clap, so scripted runs can pin
/// the date without repeating the flag.
pub fn resolve_as_of(as_of: Option<&str>) -> CliResult<Date> {
    match as_of {
        Some(s) => parse_date(s),
        None => Ok(Date::today()),
    }
}
