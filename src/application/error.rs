use thiserror::Error;

use crate::domain::{format_cents, MAX_CENTS};
use crate::storage::PersistenceError;

/// Malformed or out-of-range user input. Raised before any store I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid kind '{0}': expected Income or Expense")]
    InvalidKind(String),

    #[error(
        "invalid amount '{0}': expected a number no larger than {max}",
        max = format_cents(MAX_CENTS)
    )]
    InvalidAmount(String),

    #[error("invalid amount '{0}': must be greater than zero")]
    NonPositiveAmount(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::Persistence(_))
    }
}
