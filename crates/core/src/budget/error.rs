//! Budget error types.

use thiserror::Error;

use budget_shared::AppError;

/// Budget-related errors.
#[derive(Debug, Error, PartialEq)]
pub enum BudgetError {
    /// One or more required fields were absent from the input.
    #[error("Missing data")]
    MissingData,

    /// A text field held a non-string value.
    #[error("Field '{0}' must be a string")]
    InvalidField(&'static str),

    /// A text field exceeded its maximum length.
    #[error("Field '{field}' exceeds {max} characters")]
    TooLong {
        /// Offending field.
        field: &'static str,
        /// Maximum length in characters.
        max: usize,
    },

    /// Amount could not be converted to a finite number.
    #[error("Amount must be a number, got {0}")]
    InvalidAmount(String),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::InvalidAmount(_) => Self::InvalidAmount(err.to_string()),
            BudgetError::MissingData
            | BudgetError::InvalidField(_)
            | BudgetError::TooLong { .. } => Self::Validation(err.to_string()),
        }
    }
}
