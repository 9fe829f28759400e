//! End-to-end flows through the session manager

use chrono::NaiveDate;
use tracker::{
    OwnerMode,
    record::{ApplicationForm, Location, Mode, Status},
};

use crate::helpers::*;

#[test]
fn test_signup_login_add_delete() {
    let (_dir, manager) = setup_manager(OwnerMode::Multi);

    manager.sign_up("bob", "pass123", "pass123", "b@x.com").unwrap();
    let mut handle = manager.log_in("bob", "pass123").unwrap();

    let form = ApplicationForm {
        company: "Acme".to_string(),
        role: "Intern".to_string(),
        location: "California".to_string(),
        date: "2024-06-01".to_string(),
        status: "Applied".to_string(),
        mode: "Online".to_string(),
        link: String::new(),
    };
    manager.add_record(&mut handle, form).unwrap();

    let records = manager.current_records(&handle);
    assert_eq!(records.len(), 1);
    let record = &records[0].record;
    assert_eq!(record.company, "Acme");
    assert_eq!(record.role, "Intern");
    assert_eq!(record.location, Location::California);
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(record.status, Status::Applied);
    assert_eq!(record.mode, Mode::Online);
    assert_eq!(record.link, "");

    manager.delete_record(&mut handle, 1).unwrap();
    assert!(manager.current_records(&handle).is_empty());

    manager.log_out(handle);
}

#[test]
fn test_records_visible_after_fresh_login() {
    let (dir, manager) = setup_manager(OwnerMode::Multi);
    let mut handle = signed_in(&manager, "erin", "secret1");
    manager.add_record(&mut handle, form("Acme")).unwrap();
    manager.add_record(&mut handle, form("Globex")).unwrap();
    manager.log_out(handle);

    let manager = manager_for(&dir, OwnerMode::Multi);
    let handle = manager.log_in("erin", "secret1").unwrap();
    assert_eq!(companies(&manager, &handle), ["Acme", "Globex"]);
}

#[test]
fn test_users_do_not_see_each_other() {
    let (_dir, manager) = setup_manager(OwnerMode::Multi);
    let mut alice = signed_in(&manager, "alice", "secret1");
    let mut bob = signed_in(&manager, "bob", "secret2");

    manager.add_record(&mut alice, form("Acme")).unwrap();
    manager.add_record(&mut bob, form("Globex")).unwrap();

    assert_eq!(companies(&manager, &alice), ["Acme"]);
    assert_eq!(companies(&manager, &bob), ["Globex"]);
}

#[test]
fn test_single_owner_flow() {
    let (dir, manager) = setup_manager(OwnerMode::Single);
    let mut handle = manager.open_global().unwrap();
    manager.add_record(&mut handle, form("Acme")).unwrap();

    assert_eq!(manager.export_file_name(&handle), "applications.csv");
    assert_eq!(dir_entries(&dir), ["applications.csv"]);

    let err = manager.sign_up("alice", "secret1", "secret1", "").unwrap_err();
    assert_eq!(err.module(), "session");
}

#[test]
fn test_orphaned_record_file_is_inert_until_signup() {
    let (dir, manager) = setup_manager(OwnerMode::Multi);
    std::fs::write(
        dir.path().join("frank_applications.csv"),
        "Company,Role,Location,Date,Status,Mode,Link\n\
         Acme,Intern,Texas,2024-03-01,Offer,Hybrid,\n",
    )
    .unwrap();

    assert!(manager.log_in("frank", "secret1").is_err());

    let handle = signed_in(&manager, "frank", "secret1");
    assert_eq!(companies(&manager, &handle), ["Acme"]);
}

#[test]
fn test_writes_leave_no_temporary_files() {
    let (dir, manager) = setup_manager(OwnerMode::Multi);
    let mut handle = signed_in(&manager, "gina", "secret1");
    for company in ["A", "B", "C"] {
        manager.add_record(&mut handle, form(company)).unwrap();
    }
    manager.delete_record(&mut handle, 2).unwrap();

    assert_eq!(
        dir_entries(&dir),
        ["accounts.json", "gina_applications.csv"]
    );
}
