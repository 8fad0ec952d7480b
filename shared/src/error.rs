//! Errors raised by pure domain logic

use thiserror::Error;

/// Validation and scoring failures
///
/// The scorer never clamps or repairs its inputs; any out-of-range value is
/// reported back to the caller with the offending field name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },
}

impl ScoringError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ScoringError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            ScoringError::InvalidInput { field, .. } => field,
        }
    }
}

pub type ScoringResult<T> = Result<T, ScoringError>;
