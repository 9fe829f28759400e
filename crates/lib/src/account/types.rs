//! Core data types for the account system

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stored credentials of one account.
///
/// Keyed by username in [`AccountMap`]; the username is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// Hash of the password, see [`crate::account::crypto`]
    pub password_hash: String,

    /// Contact address. Not validated.
    #[serde(default)]
    pub email: String,
}

/// Every account, by username.
pub type AccountMap = BTreeMap<String, AccountRecord>;
