//! Error types for application records and the record store.

use thiserror::Error;

use super::types::RecordId;

/// Errors that can occur while building, adding or removing records.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field is missing or blank.
    #[error("Missing required field: {field}")]
    InvalidRecord {
        /// Name of the missing field
        field: &'static str,
    },

    /// A field holds text outside its allowed values.
    #[error("Invalid {field}: '{value}'")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// The rejected text
        value: String,
    },

    /// A row number outside `1..=len` was given for deletion.
    #[error("Row {position} is out of range (1-{len})")]
    OutOfRange {
        /// The requested 1-based position
        position: usize,
        /// Number of records at the time of the request
        len: usize,
    },

    /// No record with the given id is held by the store.
    #[error("Record not found: {id}")]
    UnknownRecord {
        /// The id that was not found
        id: RecordId,
    },
}

impl RecordError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RecordError::UnknownRecord { .. } | RecordError::OutOfRange { .. }
        )
    }

    /// Check if this error was caused by invalid input fields.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            RecordError::InvalidRecord { .. } | RecordError::InvalidValue { .. }
        )
    }

    /// Get the field name if this error is about a specific field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RecordError::InvalidRecord { field } | RecordError::InvalidValue { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }
}

// Conversion from RecordError to the main Error type
impl From<RecordError> for crate::Error {
    fn from(err: RecordError) -> Self {
        crate::Error::Record(err)
    }
}
