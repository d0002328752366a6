//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Unknown risk category: {0}")]
    UnknownCategory(String),

    #[error("Unknown severity tier: {0}")]
    UnknownTier(String),
}

impl DomainError {
    /// Check if this error was caused by a city lookup
    pub fn is_unknown_city(&self) -> bool {
        matches!(self, DomainError::UnknownCity(_))
    }
}
