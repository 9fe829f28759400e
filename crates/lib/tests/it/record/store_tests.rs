//! Record store tests: positional deletion, ids and persistence

use tracker::record::{Owner, RecordError, RecordStore, codec};
use tempfile::TempDir;

use crate::helpers::record;

fn store_with(dir: &TempDir, companies: &[&str]) -> RecordStore {
    let mut store = RecordStore::open(dir.path(), Owner::Global).unwrap();
    for company in companies {
        store.append(record(company)).unwrap();
    }
    store
}

fn companies(store: &RecordStore) -> Vec<&str> {
    store.records().map(|r| r.company.as_str()).collect()
}

#[test]
fn test_delete_at_shifts_later_rows() {
    let all = ["A", "B", "C", "D", "E"];
    for k in 1..=all.len() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, &all);

        let removed = store.delete_at(k).unwrap();
        assert_eq!(removed.record.company, all[k - 1]);
        assert_eq!(store.len(), all.len() - 1);

        for later in k + 1..=all.len() {
            assert_eq!(store.get(later - 1).unwrap().record.company, all[later - 1]);
        }
        for earlier in 1..k {
            assert_eq!(store.get(earlier).unwrap().record.company, all[earlier - 1]);
        }
    }
}

#[test]
fn test_delete_at_out_of_range() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with(&dir, &["A", "B"]);

    for position in [0, 3, usize::MAX] {
        let err = store.delete_at(position).unwrap_err();
        assert!(
            matches!(
                err,
                tracker::Error::Record(RecordError::OutOfRange { len: 2, .. })
            ),
            "position {position}"
        );
    }

    let mut empty = RecordStore::open(dir.path(), Owner::User("nobody".into())).unwrap();
    assert!(empty.delete_at(1).is_err());
    assert_eq!(companies(&store), ["A", "B"]);
}

#[test]
fn test_export_reparses_after_mutations() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with(&dir, &["A", "B, Inc.", "C \"quoted\""]);
    store.delete_at(1).unwrap();
    store.append(record("D\nmultiline")).unwrap();
    store.delete_at(2).unwrap();

    let exported = store.export().unwrap();
    let reparsed = codec::decode(&exported).unwrap();
    assert_eq!(reparsed, store.records().cloned().collect::<Vec<_>>());

    // The export is the persisted file, byte for byte.
    assert_eq!(std::fs::read(store.path()).unwrap(), exported);
}

#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    store_with(&dir, &["A", "B"]);

    let reopened = RecordStore::open(dir.path(), Owner::Global).unwrap();
    assert_eq!(companies(&reopened), ["A", "B"]);
}

#[test]
fn test_reload_picks_up_other_writers() {
    let dir = TempDir::new().unwrap();
    let mut first = store_with(&dir, &["A"]);
    let mut second = RecordStore::open(dir.path(), Owner::Global).unwrap();

    second.append(record("B")).unwrap();
    assert_eq!(companies(&first), ["A"]);

    first.reload().unwrap();
    assert_eq!(companies(&first), ["A", "B"]);
}

#[test]
fn test_owners_use_separate_files() {
    let dir = TempDir::new().unwrap();
    let mut alice = RecordStore::open(dir.path(), Owner::User("alice".into())).unwrap();
    let mut bob = RecordStore::open(dir.path(), Owner::User("bob".into())).unwrap();

    alice.append(record("A")).unwrap();
    bob.append(record("B")).unwrap();

    assert!(dir.path().join("alice_applications.csv").exists());
    assert!(dir.path().join("bob_applications.csv").exists());
    assert_eq!(companies(&alice), ["A"]);
    assert_eq!(companies(&bob), ["B"]);
}
