//! Constants used throughout the tracker library.
//!
//! File names, the record file header, and the credential policy.

/// Record file for the single global owner.
pub const GLOBAL_RECORDS_FILE: &str = "applications.csv";

/// Suffix appended to a username to name that user's record file.
pub const USER_RECORDS_SUFFIX: &str = "_applications.csv";

/// Account file, relative to the data directory.
pub const ACCOUNTS_FILE: &str = "accounts.json";

/// Column names of every record file, in order.
pub const RECORD_HEADER: [&str; 7] = [
    "Company", "Role", "Location", "Date", "Status", "Mode", "Link",
];

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;
