//! Account store tests: signup rules, login checks and the file format

use tracker::{
    OwnerMode,
    account::{AccountError, AccountStore, PasswordScheme, crypto::hash_password},
};

use crate::helpers::*;

#[test]
fn test_short_password_leaves_store_unchanged() {
    let (dir, manager) = setup_manager(OwnerMode::Multi);

    let err = manager.sign_up("alice", "12345", "12345", "a@x.com").unwrap_err();
    assert!(matches!(
        err,
        tracker::Error::Account(AccountError::WeakPassword { .. })
    ));
    assert!(err.is_validation_error());

    assert_eq!(manager.accounts().len().unwrap(), 0);
    assert!(dir_entries(&dir).is_empty(), "no account file is written");
}

#[test]
fn test_duplicate_signup_keeps_first_hash() {
    let (_dir, manager) = setup_manager(OwnerMode::Multi);
    manager.sign_up("alice", "secret1", "secret1", "a@x.com").unwrap();
    let first = manager.accounts().get("alice").unwrap().unwrap();

    let err = manager
        .sign_up("alice", "another1", "another1", "other@x.com")
        .unwrap_err();
    assert!(matches!(
        err,
        tracker::Error::Account(AccountError::DuplicateUsername { .. })
    ));
    assert!(err.is_conflict());

    let stored = manager.accounts().get("alice").unwrap().unwrap();
    assert_eq!(stored, first);
    assert_eq!(stored.email, "a@x.com");
}

#[test]
fn test_login_checks_password() {
    let (_dir, manager) = setup_manager(OwnerMode::Multi);
    manager.sign_up("alice", "secret1", "secret1", "a@x.com").unwrap();

    let err = manager.log_in("alice", "wrong").unwrap_err();
    assert!(matches!(
        err,
        tracker::Error::Account(AccountError::WrongPassword)
    ));
    assert!(err.is_authentication_error());

    let handle = manager.log_in("alice", "secret1").unwrap();
    assert_eq!(handle.username(), Some("alice"));
}

#[test]
fn test_login_unknown_user() {
    let (_dir, manager) = setup_manager(OwnerMode::Multi);

    let err = manager.log_in("ghost", "secret1").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.is_authentication_error());
}

#[test]
fn test_reads_existing_sha256_file() {
    let (dir, manager) = setup_manager(OwnerMode::Multi);
    let hash = hash_password("secret1", PasswordScheme::Sha256).unwrap();
    std::fs::write(
        dir.path().join("accounts.json"),
        format!(r#"{{"dave": {{"passwordHash": "{hash}", "email": "d@x.com"}}}}"#),
    )
    .unwrap();

    assert!(manager.log_in("dave", "secret1").is_ok());
    assert!(manager.log_in("dave", "secret2").is_err());
}

#[test]
fn test_argon2_and_sha256_accounts_coexist() {
    let (dir, _) = setup_manager(OwnerMode::Multi);
    let path = dir.path().join("accounts.json");

    AccountStore::new(&path, PasswordScheme::Sha256)
        .create("old", "secret1", "")
        .unwrap();
    let store = AccountStore::new(&path, PasswordScheme::Argon2);
    store.create("new", "secret2", "").unwrap();

    let accounts = store.load().unwrap();
    assert!(accounts["new"].password_hash.starts_with("$argon2"));
    assert_eq!(accounts["old"].password_hash.len(), 64);

    store.verify("old", "secret1").unwrap();
    store.verify("new", "secret2").unwrap();
}

#[test]
fn test_account_file_is_pretty_json() {
    let (dir, manager) = setup_manager(OwnerMode::Multi);
    manager.sign_up("alice", "secret1", "secret1", "a@x.com").unwrap();

    let text = std::fs::read_to_string(dir.path().join("accounts.json")).unwrap();
    assert!(text.contains("\n  \"alice\": {"));
    assert!(text.contains("\"passwordHash\""));
    assert_eq!(dir_entries(&dir), ["accounts.json"]);
}
