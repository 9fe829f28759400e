//! Account storage backed by a single JSON file.
//!
//! Every operation reads the file afresh; `create` is a read-modify-write of
//! the whole map. There is no locking: two processes creating the same
//! username concurrently can both succeed, and the later write wins.

use std::path::{Path, PathBuf};

use super::{
    crypto::{PasswordScheme, hash_password, verify_password},
    errors::AccountError,
    types::{AccountMap, AccountRecord},
};
use crate::{Result, constants::MIN_PASSWORD_LENGTH, persistence, persistence::StorageError};

/// File-backed username → credential store.
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
    scheme: PasswordScheme,
}

impl AccountStore {
    /// Create a store over the account file at `path`.
    ///
    /// The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>, scheme: PasswordScheme) -> Self {
        Self {
            path: path.into(),
            scheme,
        }
    }

    /// Path of the account file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scheme used to hash passwords of new accounts.
    pub fn scheme(&self) -> PasswordScheme {
        self.scheme
    }

    /// Read all accounts. A missing file is an empty map.
    pub fn load(&self) -> Result<AccountMap> {
        let Some(bytes) = persistence::read_optional(&self.path)? else {
            return Ok(AccountMap::new());
        };
        let accounts: AccountMap =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::DeserializationFailed {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), accounts = accounts.len(), "loaded accounts");
        Ok(accounts)
    }

    /// Replace the stored accounts with `accounts`.
    pub fn save(&self, accounts: &AccountMap) -> Result<()> {
        let json = serde_json::to_vec_pretty(accounts)
            .map_err(|source| StorageError::SerializationFailed { source })?;
        persistence::write_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), accounts = accounts.len(), "saved accounts");
        Ok(())
    }

    /// Create a new account.
    ///
    /// # Errors
    /// - [`AccountError::InvalidUsername`] if the username is empty or has
    ///   characters other than ASCII letters, digits, `_` and `-`
    /// - [`AccountError::DuplicateUsername`] if the username is taken
    /// - [`AccountError::WeakPassword`] if the password is shorter than
    ///   [`MIN_PASSWORD_LENGTH`] characters
    pub fn create(&self, username: &str, password: &str, email: &str) -> Result<()> {
        validate_username(username)?;

        let mut accounts = self.load()?;
        if accounts.contains_key(username) {
            return Err(AccountError::DuplicateUsername {
                username: username.to_string(),
            }
            .into());
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AccountError::WeakPassword {
                min_length: MIN_PASSWORD_LENGTH,
            }
            .into());
        }

        let record = AccountRecord {
            password_hash: hash_password(password, self.scheme)?,
            email: email.to_string(),
        };
        accounts.insert(username.to_string(), record);
        self.save(&accounts)?;

        tracing::info!(username, scheme = %self.scheme, "account created");
        Ok(())
    }

    /// Check a username/password pair.
    ///
    /// # Errors
    /// - [`AccountError::UnknownUsername`] if there is no such account
    /// - [`AccountError::WrongPassword`] if the password does not match
    pub fn verify(&self, username: &str, password: &str) -> Result<()> {
        let accounts = self.load()?;
        let record = accounts
            .get(username)
            .ok_or_else(|| AccountError::UnknownUsername {
                username: username.to_string(),
            })?;
        verify_password(password, &record.password_hash)
    }

    /// Look up one account.
    pub fn get(&self, username: &str) -> Result<Option<AccountRecord>> {
        Ok(self.load()?.remove(username))
    }

    /// Check whether an account exists.
    pub fn contains(&self, username: &str) -> Result<bool> {
        Ok(self.load()?.contains_key(username))
    }

    /// Number of accounts.
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// All usernames, sorted.
    pub fn usernames(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }
}

/// Usernames name record files, so they are restricted to a safe set.
fn validate_username(username: &str) -> Result<()> {
    let valid = !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(AccountError::InvalidUsername {
            username: username.to_string(),
        }
        .into())
    }
}
