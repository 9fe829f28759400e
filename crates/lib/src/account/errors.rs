//! Error types for the account system
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Username already exists: {username}")]
    DuplicateUsername { username: String },

    #[error("Invalid username '{username}': use letters, numbers, underscores and hyphens")]
    InvalidUsername { username: String },

    #[error("Password must be at least {min_length} characters")]
    WeakPassword { min_length: usize },

    #[error("User not found: {username}")]
    UnknownUsername { username: String },

    #[error("Incorrect password")]
    WrongPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password hashing failed: {reason}")]
    HashingFailed { reason: String },

    #[error("Stored password hash is not in a recognised format")]
    PasswordVerificationFailed,
}

impl AccountError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AccountError::UnknownUsername { .. })
    }

    /// Check if this error indicates a conflict with an existing account.
    pub fn is_conflict(&self) -> bool {
        matches!(self, AccountError::DuplicateUsername { .. })
    }

    /// Check if this error is a rejected login.
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            AccountError::UnknownUsername { .. }
                | AccountError::WrongPassword
                | AccountError::PasswordVerificationFailed
        )
    }

    /// Check if this error was caused by invalid signup input.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AccountError::InvalidUsername { .. }
                | AccountError::WeakPassword { .. }
                | AccountError::PasswordMismatch
        )
    }
}

// Conversion from AccountError to the main Error type
impl From<AccountError> for crate::Error {
    fn from(err: AccountError) -> Self {
        crate::Error::Account(err)
    }
}
