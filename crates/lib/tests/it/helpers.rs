//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use tracker::{
    OwnerMode, SessionHandle, SessionManager, TrackerConfig,
    account::PasswordScheme,
    record::{ApplicationForm, ApplicationRecord, Location, Mode, Status},
};

// ===== MANAGER SETUP =====

/// A manager over a fresh data directory.
///
/// Uses the SHA-256 scheme to keep hashing fast; the directory lives as long
/// as the returned `TempDir`.
pub fn setup_manager(mode: OwnerMode) -> (TempDir, SessionManager) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let manager = manager_for(&dir, mode);
    (dir, manager)
}

/// A second manager over an existing data directory.
pub fn manager_for(dir: &TempDir, mode: OwnerMode) -> SessionManager {
    SessionManager::new(
        TrackerConfig::new(dir.path())
            .with_owner_mode(mode)
            .with_password_scheme(PasswordScheme::Sha256),
    )
}

/// Sign up `username` with `password` and log in.
pub fn signed_in(manager: &SessionManager, username: &str, password: &str) -> SessionHandle {
    manager
        .sign_up(username, password, password, &format!("{username}@x.com"))
        .expect("Failed to sign up");
    manager
        .log_in(username, password)
        .expect("Failed to log in")
}

// ===== RECORD FIXTURES =====

/// A valid form for `company`, otherwise the default dashboard values.
pub fn form(company: &str) -> ApplicationForm {
    ApplicationForm {
        company: company.to_string(),
        role: "Intern".to_string(),
        location: "Remote".to_string(),
        date: "2024-01-15".to_string(),
        status: "Applied".to_string(),
        mode: "Online".to_string(),
        link: String::new(),
    }
}

pub fn form_with_mode(company: &str, mode: Mode) -> ApplicationForm {
    ApplicationForm {
        mode: mode.to_string(),
        ..form(company)
    }
}

/// The record `form(company)` converts into.
pub fn record(company: &str) -> ApplicationRecord {
    ApplicationRecord {
        company: company.to_string(),
        role: "Intern".to_string(),
        location: Location::Remote,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        status: Status::Applied,
        mode: Mode::Online,
        link: String::new(),
    }
}

/// Companies of the handle's records, in display order.
pub fn companies(manager: &SessionManager, handle: &SessionHandle) -> Vec<String> {
    manager
        .current_records(handle)
        .iter()
        .map(|e| e.record.company.clone())
        .collect()
}

/// Names of the entries in a directory, sorted.
pub fn dir_entries(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("Failed to read dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
