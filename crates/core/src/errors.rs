//! Core error types for CarPricer.
//!
//! The valuation calculator never fails. These errors cover getting records
//! into the calculator: decoding them and, when asked to, validating them.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to decode vehicle records: {0}")]
    Serialization(String),
}

/// Errors raised by strict input validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Purchase value must not be negative, got {0}")]
    NegativePurchaseValue(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
