//! Account system for the tracker
//!
//! Username/password accounts kept in one JSON file. Each account's username
//! names the record file that belongs to it.

pub mod crypto;
pub mod errors;
pub mod store;
pub mod types;

pub use crypto::PasswordScheme;
pub use errors::AccountError;
pub use store::AccountStore;
pub use types::*;
