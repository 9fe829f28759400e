//! Error types for the session manager
use thiserror::Error;

use crate::config::OwnerMode;

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Signup or login was attempted while accounts are turned off.
    #[error("Accounts are disabled in {mode} mode")]
    AccountsDisabled { mode: OwnerMode },

    /// The global records were requested while accounts are turned on.
    #[error("Log in to access records")]
    AuthenticationRequired,
}

impl SessionError {
    /// Check if this error was caused by using the wrong entry point for
    /// the configured owner mode.
    pub fn is_mode_error(&self) -> bool {
        matches!(
            self,
            SessionError::AccountsDisabled { .. } | SessionError::AuthenticationRequired
        )
    }

    /// Check if this error asks the caller to authenticate.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, SessionError::AuthenticationRequired)
    }
}

// Conversion from SessionError to the main Error type
impl From<SessionError> for crate::Error {
    fn from(err: SessionError) -> Self {
        crate::Error::Session(err)
    }
}
