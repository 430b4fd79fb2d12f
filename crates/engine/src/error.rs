//! The module contains the errors the engine can throw.
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Empty sale: a sale needs at least one line item")]
    EmptySale,
    #[error("Mismatched total: declared {declared}, items sum to {computed}")]
    MismatchedTotal { declared: String, computed: String },
    #[error("Export error: {0}")]
    Export(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::EmptySale, Self::EmptySale) => true,
            (
                Self::MismatchedTotal {
                    declared: a1,
                    computed: a2,
                },
                Self::MismatchedTotal {
                    declared: b1,
                    computed: b2,
                },
            ) => a1 == b1 && a2 == b2,
            (Self::Export(a), Self::Export(b)) => a == b,
            _ => false,
        }
    }
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::Export(err.to_string())
    }
}
