//! Error types for the pricing core

use thiserror::Error;

/// Domain-level errors for pricing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PricingError {
    /// Whether this error was raised by input validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PricingError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;
