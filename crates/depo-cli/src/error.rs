//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Argument outside the accepted values.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file extension not recognised.
    #[error("Unsupported input format: {0}. Use .json, .yaml or .yml.")]
    UnsupportedFormat(String),

    /// A deposit failed upstream validation.
    #[error("Invalid deposit '{name}': {}", .errors.join("; "))]
    Validation {
        /// Deposit label.
        name: String,
        /// One message per failed rule.
        errors: Vec<String>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
