//! Validation errors for bank value objects

use thiserror::Error;

/// Result type alias for value object construction
pub type Result<T> = std::result::Result<T, TypesError>;

/// Errors raised while validating bank value objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("IBAN cannot be empty")]
    EmptyIban,

    #[error("Account number cannot be empty")]
    EmptyAccountNumber,

    #[error("IBAN length must be between {min} and {max} characters (got {actual})")]
    IbanLength { min: usize, max: usize, actual: usize },

    #[error("Invalid IBAN format: {0}")]
    IbanFormat(String),

    #[error("Currency code cannot be empty")]
    EmptyCurrency,

    #[error("Currency code must be exactly 3 characters (ISO 4217): {0}")]
    CurrencyLength(String),

    #[error("Currency code must contain only letters: {0}")]
    CurrencyFormat(String),

    #[error("Invalid period: {from} is after {to}")]
    InvertedPeriod { from: String, to: String },
}
