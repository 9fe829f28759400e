//! Storage error types for the tracker.
//!
//! Faults raised while reading or writing the account file and the record
//! files. These are not recovered by the stores; they surface to the caller
//! with the offending path attached.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting or loading tracker files.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    /// File I/O error.
    #[error("File I/O error on {path}")]
    FileIo {
        /// The file being read or written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// JSON deserialization failed.
    #[error("Deserialization failed for {path}")]
    DeserializationFailed {
        /// The file that could not be parsed
        path: PathBuf,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing delimited text failed.
    #[error("CSV error: {source}")]
    Csv {
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// A row of a record file could not be turned into a record.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the file
        line: u64,
        /// What was wrong with the row
        reason: String,
    },

    /// A record file does not start with the expected header row.
    #[error("Unexpected header row: expected '{expected}', found '{found}'")]
    UnexpectedHeader {
        /// The header every record file must carry
        expected: String,
        /// The header actually found
        found: String,
    },
}

impl StorageError {
    /// Check if this error is related to file I/O.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StorageError::FileIo { .. })
    }

    /// Check if this error indicates malformed persisted state.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            StorageError::DeserializationFailed { .. }
                | StorageError::Csv { .. }
                | StorageError::MalformedRecord { .. }
                | StorageError::UnexpectedHeader { .. }
        )
    }

    /// Get the path involved, if this error is about a specific file.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            StorageError::FileIo { path, .. } | StorageError::DeserializationFailed { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

impl From<csv::Error> for StorageError {
    fn from(source: csv::Error) -> Self {
        StorageError::Csv { source }
    }
}

// Conversion from StorageError to the main Error type
impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}
