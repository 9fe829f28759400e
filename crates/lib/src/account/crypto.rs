//! Password hashing for the account system
//!
//! Two schemes are supported:
//! - `sha256`: a single unsalted SHA-256 digest, hex encoded. This is the
//!   format older account files use and is weak against offline guessing.
//! - `argon2`: Argon2id with a random salt, stored as a PHC string.
//!
//! [`verify_password`] recognises both formats regardless of the scheme
//! used for new accounts.

use std::{fmt, str::FromStr};

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use super::errors::AccountError;
use crate::Result;

/// Length of a hex encoded SHA-256 digest.
const SHA256_HEX_LENGTH: usize = 64;

/// How new password hashes are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    /// Unsalted SHA-256, hex encoded
    Sha256,
    /// Salted Argon2id in PHC string format
    #[default]
    Argon2,
}

impl PasswordScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordScheme::Sha256 => "sha256",
            PasswordScheme::Argon2 => "argon2",
        }
    }

    /// Identifies the scheme that produced a stored hash.
    pub fn detect(password_hash: &str) -> Option<Self> {
        if password_hash.starts_with("$argon2") {
            Some(PasswordScheme::Argon2)
        } else if password_hash.len() == SHA256_HEX_LENGTH
            && password_hash.bytes().all(|b| b.is_ascii_hexdigit())
        {
            Some(PasswordScheme::Sha256)
        } else {
            None
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(PasswordScheme::Sha256),
            "argon2" => Ok(PasswordScheme::Argon2),
            other => Err(format!("unknown password scheme: {other}")),
        }
    }
}

/// Hash a password with the given scheme
///
/// # Returns
/// The string to store as the account's password hash.
pub fn hash_password(password: impl AsRef<str>, scheme: PasswordScheme) -> Result<String> {
    let password = password.as_ref().as_bytes();
    match scheme {
        PasswordScheme::Sha256 => Ok(hex::encode(Sha256::digest(password))),
        PasswordScheme::Argon2 => {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(password, &salt)
                .map_err(|e| AccountError::HashingFailed {
                    reason: e.to_string(),
                })?;
            Ok(hash.to_string())
        }
    }
}

/// Verify a password against its stored hash
///
/// # Returns
/// Ok(()) if the password matches, [`AccountError::WrongPassword`] if it
/// does not.
pub fn verify_password(password: impl AsRef<str>, password_hash: impl AsRef<str>) -> Result<()> {
    let password = password.as_ref().as_bytes();
    let password_hash = password_hash.as_ref();

    match PasswordScheme::detect(password_hash) {
        Some(PasswordScheme::Sha256) => {
            let digest = hex::encode(Sha256::digest(password));
            if digest.eq_ignore_ascii_case(password_hash) {
                Ok(())
            } else {
                Err(AccountError::WrongPassword.into())
            }
        }
        Some(PasswordScheme::Argon2) => {
            let parsed = PasswordHash::new(password_hash)
                .map_err(|_| AccountError::PasswordVerificationFailed)?;
            Argon2::default()
                .verify_password(password, &parsed)
                .map_err(|_| AccountError::WrongPassword.into())
        }
        None => Err(AccountError::PasswordVerificationFailed.into()),
    }
}
