//! Error types for the Depo engine.
//!
//! Valuation itself is total and never fails. These errors belong to the
//! edges of the system: parsing dates, building contracts from stored
//! records, and upstream validation of user input.

use thiserror::Error;

/// A specialized Result type for Depo operations.
pub type DepoResult<T> = Result<T, DepoError>;

/// The main error type for Depo operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DepoError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A deposit contract could not be built from its inputs.
    #[error("Invalid contract: {reason}")]
    InvalidContract {
        /// Description of what's invalid.
        reason: String,
    },

    /// A single field failed validation.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Several fields failed validation.
    #[error("{} validation errors: {}", .0.len(), .0.join("; "))]
    MultipleValidationErrors(Vec<String>),

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DepoError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid contract error.
    #[must_use]
    pub fn invalid_contract(reason: impl Into<String>) -> Self {
        Self::InvalidContract {
            reason: reason.into(),
        }
    }

    /// Creates a single-field validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DepoError {
    fn from(err: serde_json::Error) -> Self {
        DepoError::Serialization(err.to_string())
    }
}
