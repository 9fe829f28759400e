//! On-disk format tests for record files

use tempfile::TempDir;
use tracker::record::{Owner, RecordStore};

use crate::helpers::record;

#[test]
fn test_file_layout() {
    let dir = TempDir::new().unwrap();
    let mut store = RecordStore::open(dir.path(), Owner::Global).unwrap();
    store
        .append(tracker::record::ApplicationRecord {
            link: "https://acme.example/jobs?id=1,2".to_string(),
            ..record("Acme")
        })
        .unwrap();

    let text = std::fs::read_to_string(dir.path().join("applications.csv")).unwrap();
    assert_eq!(
        text,
        "Company,Role,Location,Date,Status,Mode,Link\n\
         Acme,Intern,Remote,2024-01-15,Applied,Online,\"https://acme.example/jobs?id=1,2\"\n"
    );
}

#[test]
fn test_header_written_for_empty_sequence() {
    let dir = TempDir::new().unwrap();
    let mut store = RecordStore::open(dir.path(), Owner::Global).unwrap();
    store.append(record("Acme")).unwrap();
    store.delete_at(1).unwrap();

    let text = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(text, "Company,Role,Location,Date,Status,Mode,Link\n");
}

#[test]
fn test_reads_crlf_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("applications.csv"),
        "Company,Role,Location,Date,Status,Mode,Link\r\n\
         Acme,Intern,New York,2024-06-01,Interview,In-Person,\r\n",
    )
    .unwrap();

    let store = RecordStore::open(dir.path(), Owner::Global).unwrap();
    let record = &store.entries()[0].record;
    assert_eq!(record.location.as_str(), "New York");
    assert_eq!(record.mode.as_str(), "In-Person");
    assert_eq!(record.link, "");
}

#[test]
fn test_wrong_header_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("applications.csv"),
        "Name,Role,Location,Date,Status,Mode,Link\n",
    )
    .unwrap();

    let err = RecordStore::open(dir.path(), Owner::Global).unwrap_err();
    assert!(err.is_storage_error());
}

#[test]
fn test_malformed_row_is_not_repaired() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("applications.csv");
    let contents = "Company,Role,Location,Date,Status,Mode,Link\n\
                    Acme,Intern,Atlantis,2024-06-01,Applied,Online,\n";
    std::fs::write(&path, contents).unwrap();

    let err = RecordStore::open(dir.path(), Owner::Global).unwrap_err();
    assert!(err.is_storage_error());
    assert!(err.to_string().contains("line 2"), "{err}");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);
}
