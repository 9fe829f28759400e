//!
//! Tracker: a record keeper for internship applications.
//! This library provides the storage and session layer that the `tracker` binary's
//! command line and web interfaces are built on.
//!
//! ## Core Concepts
//!
//! * **Records (`record::ApplicationRecord`)**: One logged application. Location, status and mode are closed sets.
//! * **Record stores (`record::RecordStore`)**: The ordered records of one owner, kept in one CSV file per owner and rewritten in full on every change.
//! * **Accounts (`account::AccountStore`)**: Username to password hash and email, kept in one JSON file.
//! * **Sessions (`session::SessionManager`)**: The façade in front of both stores. Login yields a `session::SessionHandle` which every record operation takes.
//! * **Owner modes (`config::OwnerMode`)**: Either one global record file and no accounts, or one record file per account.

pub mod account;
pub mod config;
pub mod constants;
pub mod persistence;
pub mod record;
pub mod session;

pub use config::{OwnerMode, TrackerConfig};
pub use session::{SessionHandle, SessionManager};

/// Result type used throughout the tracker library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the tracker library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured account errors from the account module
    #[error(transparent)]
    Account(account::AccountError),

    /// Structured record errors from the record module
    #[error(transparent)]
    Record(record::RecordError),

    /// Structured session errors from the session module
    #[error(transparent)]
    Session(session::SessionError),

    /// Structured storage errors from the persistence module
    #[error(transparent)]
    Storage(persistence::StorageError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Account(_) => "account",
            Error::Record(_) => "record",
            Error::Session(_) => "session",
            Error::Storage(_) => "persistence",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_not_found(),
            Error::Record(record_err) => record_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error was caused by invalid input.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_validation_error(),
            Error::Record(record_err) => record_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_authentication_error(),
            Error::Session(session_err) => session_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error came from reading or writing a data file.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}
