//! Session manager
//!
//! The single entry point presentation layers use. A [`SessionManager`]
//! owns the account store and opens record stores; every record operation
//! takes the caller's [`SessionHandle`] explicitly, so there is no shared
//! "current user" state.
//!
//! A caller moves between two states:
//!
//! ```text
//! Anonymous --log_in--> Authenticated --log_out--> Anonymous
//! Anonymous --sign_up--> Anonymous
//! ```
//!
//! In [`OwnerMode::Single`] there are no accounts and
//! [`SessionManager::open_global`] hands out the one global handle instead.

mod errors;

pub use errors::SessionError;

use crate::{
    Result,
    account::{AccountError, AccountStore},
    config::{OwnerMode, TrackerConfig},
    record::{ApplicationForm, ModeSummary, Owner, RecordId, RecordStore, StoredRecord},
};

/// An authenticated caller bound to its owner's records.
///
/// The records are loaded when the handle is created and kept in memory for
/// its lifetime.
#[derive(Debug)]
pub struct SessionHandle {
    records: RecordStore,
}

impl SessionHandle {
    /// Whose records this handle accesses.
    pub fn owner(&self) -> &Owner {
        self.records.owner()
    }

    /// The logged-in username, `None` for the global owner.
    pub fn username(&self) -> Option<&str> {
        self.records.owner().username()
    }

    /// Read access to the underlying record store.
    pub fn records(&self) -> &RecordStore {
        &self.records
    }
}

/// Mediates between callers, the account store and the record stores.
#[derive(Debug, Clone)]
pub struct SessionManager {
    config: TrackerConfig,
    accounts: AccountStore,
}

impl SessionManager {
    pub fn new(config: TrackerConfig) -> Self {
        let accounts = AccountStore::new(config.accounts_path(), config.password_scheme);
        Self { config, accounts }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    /// Register a new account. Does not log in.
    ///
    /// # Errors
    /// [`AccountError::PasswordMismatch`] if the two passwords differ, else
    /// any error of [`AccountStore::create`].
    pub fn sign_up(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
        email: &str,
    ) -> Result<()> {
        self.require_accounts()?;
        if password != confirm_password {
            return Err(AccountError::PasswordMismatch.into());
        }
        self.accounts.create(username, password, email)
    }

    /// Authenticate and open the user's records.
    pub fn log_in(&self, username: &str, password: &str) -> Result<SessionHandle> {
        self.require_accounts()?;
        if let Err(e) = self.accounts.verify(username, password) {
            tracing::warn!(username, error = %e, "login failed");
            return Err(e);
        }

        let handle = self.open(Owner::User(username.to_string()))?;
        tracing::info!(username, records = handle.records.len(), "logged in");
        Ok(handle)
    }

    /// End a session. The handle is consumed.
    pub fn log_out(&self, handle: SessionHandle) {
        tracing::info!(owner = %handle.owner(), "logged out");
        drop(handle);
    }

    /// Open the global owner's records without credentials.
    ///
    /// # Errors
    /// [`SessionError::AuthenticationRequired`] in multi-user mode.
    pub fn open_global(&self) -> Result<SessionHandle> {
        match self.config.owner_mode {
            OwnerMode::Single => self.open(Owner::Global),
            OwnerMode::Multi => Err(SessionError::AuthenticationRequired.into()),
        }
    }

    /// The handle's records with their ids, in display order.
    pub fn current_records<'h>(&self, handle: &'h SessionHandle) -> &'h [StoredRecord] {
        handle.records.entries()
    }

    /// Validate a submitted form and append it to the handle's records.
    pub fn add_record(&self, handle: &mut SessionHandle, form: ApplicationForm) -> Result<RecordId> {
        let record = form.into_record()?;
        handle.records.append(record)
    }

    /// Delete by 1-based row number.
    pub fn delete_record(&self, handle: &mut SessionHandle, position: usize) -> Result<StoredRecord> {
        handle.records.delete_at(position)
    }

    /// Delete by record id.
    pub fn delete_record_by_id(&self, handle: &mut SessionHandle, id: RecordId) -> Result<StoredRecord> {
        handle.records.delete(id)
    }

    /// CSV bytes identical to the handle's record file.
    pub fn export_records(&self, handle: &SessionHandle) -> Result<Vec<u8>> {
        handle.records.export()
    }

    /// File name offered for the export download.
    pub fn export_file_name(&self, handle: &SessionHandle) -> String {
        handle.owner().file_name()
    }

    pub fn summarize_by_mode(&self, handle: &SessionHandle) -> ModeSummary {
        handle.records.summarize_by_mode()
    }

    /// Re-read the handle's record file, picking up writes from elsewhere.
    pub fn reload(&self, handle: &mut SessionHandle) -> Result<()> {
        handle.records.reload()
    }

    fn open(&self, owner: Owner) -> Result<SessionHandle> {
        let records = RecordStore::open(self.config.data_dir(), owner)?;
        Ok(SessionHandle { records })
    }

    fn require_accounts(&self) -> Result<()> {
        match self.config.owner_mode {
            OwnerMode::Multi => Ok(()),
            mode => Err(SessionError::AccountsDisabled { mode }.into()),
        }
    }
}
