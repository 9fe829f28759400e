//! Tracker configuration.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    account::PasswordScheme,
    constants::ACCOUNTS_FILE,
    record::Owner,
};

/// Whether records belong to one implicit owner or to individual accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OwnerMode {
    /// One global record file, no accounts.
    #[default]
    Single,
    /// One record file per account; callers must log in.
    Multi,
}

impl OwnerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerMode::Single => "single",
            OwnerMode::Multi => "multi",
        }
    }
}

impl fmt::Display for OwnerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(OwnerMode::Single),
            "multi" => Ok(OwnerMode::Multi),
            other => Err(format!("unknown owner mode: {other}")),
        }
    }
}

/// Where data lives and how the session manager behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Directory holding the account file and every record file
    pub data_dir: PathBuf,
    pub owner_mode: OwnerMode,
    /// Scheme for newly created password hashes
    pub password_scheme: PasswordScheme,
}

impl TrackerConfig {
    /// Single-owner configuration over `data_dir` with the default scheme.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            owner_mode: OwnerMode::default(),
            password_scheme: PasswordScheme::default(),
        }
    }

    pub fn with_owner_mode(mut self, owner_mode: OwnerMode) -> Self {
        self.owner_mode = owner_mode;
        self
    }

    pub fn with_password_scheme(mut self, password_scheme: PasswordScheme) -> Self {
        self.password_scheme = password_scheme;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the account file.
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir.join(ACCOUNTS_FILE)
    }

    /// Path of the record file belonging to `owner`.
    pub fn records_path(&self, owner: &Owner) -> PathBuf {
        self.data_dir.join(owner.file_name())
    }
}
