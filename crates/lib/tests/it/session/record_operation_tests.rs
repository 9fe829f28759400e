//! Record operations through a session handle

use tracker::{
    OwnerMode,
    record::{ApplicationForm, Mode, RecordError, codec},
};

use crate::helpers::*;

#[test]
fn test_add_appends_at_end() {
    let (_dir, manager) = setup_manager(OwnerMode::Single);
    let mut handle = manager.open_global().unwrap();

    for company in ["A", "B", "C"] {
        manager.add_record(&mut handle, form(company)).unwrap();
        let last = manager.current_records(&handle).last().unwrap();
        assert_eq!(last.record, record(company));
    }
}

#[test]
fn test_add_rejects_missing_fields() {
    let (_dir, manager) = setup_manager(OwnerMode::Single);
    let mut handle = manager.open_global().unwrap();

    for (form, field) in [
        (ApplicationForm { company: "  ".into(), ..form("x") }, "company"),
        (ApplicationForm { role: String::new(), ..form("x") }, "role"),
        (ApplicationForm { location: String::new(), ..form("x") }, "location"),
    ] {
        let err = manager.add_record(&mut handle, form).unwrap_err();
        assert!(
            matches!(
                &err,
                tracker::Error::Record(RecordError::InvalidRecord { field: f }) if *f == field
            ),
            "{err:?}"
        );
    }
    assert!(manager.current_records(&handle).is_empty());
}

#[test]
fn test_add_rejects_unknown_values() {
    let (_dir, manager) = setup_manager(OwnerMode::Single);
    let mut handle = manager.open_global().unwrap();

    let bad_forms = [
        ApplicationForm { location: "Atlantis".into(), ..form("x") },
        ApplicationForm { date: "06/01/2024".into(), ..form("x") },
        ApplicationForm { status: "Ghosted".into(), ..form("x") },
        ApplicationForm { mode: "Remote".into(), ..form("x") },
    ];
    for form in bad_forms {
        let err = manager.add_record(&mut handle, form).unwrap_err();
        assert!(err.is_validation_error(), "{err:?}");
    }
}

#[test]
fn test_delete_by_id_after_earlier_deletion() {
    let (_dir, manager) = setup_manager(OwnerMode::Single);
    let mut handle = manager.open_global().unwrap();
    manager.add_record(&mut handle, form("A")).unwrap();
    manager.add_record(&mut handle, form("B")).unwrap();
    let c = manager.add_record(&mut handle, form("C")).unwrap();

    manager.delete_record(&mut handle, 1).unwrap();
    // C moved from row 3 to row 2; its id still names it.
    let removed = manager.delete_record_by_id(&mut handle, c).unwrap();
    assert_eq!(removed.record.company, "C");
    assert_eq!(companies(&manager, &handle), ["B"]);

    let err = manager.delete_record_by_id(&mut handle, c).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_summary_counts_modes() {
    let (_dir, manager) = setup_manager(OwnerMode::Single);
    let mut handle = manager.open_global().unwrap();
    for mode in [Mode::Online, Mode::Online, Mode::Hybrid] {
        manager
            .add_record(&mut handle, form_with_mode("x", mode))
            .unwrap();
    }

    let summary = manager.summarize_by_mode(&handle);
    assert_eq!(
        summary.into_iter().collect::<Vec<_>>(),
        [(Mode::Online, 2), (Mode::Hybrid, 1)]
    );
}

#[test]
fn test_export_matches_file_and_reparses() {
    let (dir, manager) = setup_manager(OwnerMode::Multi);
    let mut handle = signed_in(&manager, "hana", "secret1");
    manager.add_record(&mut handle, form("A")).unwrap();
    manager.add_record(&mut handle, form("B")).unwrap();
    manager.delete_record(&mut handle, 1).unwrap();

    let exported = manager.export_records(&handle).unwrap();
    let name = manager.export_file_name(&handle);
    assert_eq!(name, "hana_applications.csv");
    assert_eq!(std::fs::read(dir.path().join(&name)).unwrap(), exported);
    assert_eq!(codec::decode(&exported).unwrap(), vec![record("B")]);
}

#[test]
fn test_reload_sees_other_session() {
    let (_dir, manager) = setup_manager(OwnerMode::Multi);
    let mut first = signed_in(&manager, "ivan", "secret1");
    let mut second = manager.log_in("ivan", "secret1").unwrap();

    manager.add_record(&mut second, form("A")).unwrap();
    assert!(manager.current_records(&first).is_empty());

    manager.reload(&mut first).unwrap();
    assert_eq!(companies(&manager, &first), ["A"]);
}
