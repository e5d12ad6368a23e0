//! Integration tests for the file-backed record store

use rust_decimal_macros::dec;

use hrms::aggregate::{AttendanceStatus, EmployeeDraft, LeaveDraft, LeaveType};
use hrms::handlers::{
    AddEmployeeCommand, DecideLeaveCommand, MarkAttendanceCommand, RequestLeaveCommand,
};
use hrms::store::{decode, seed::seed_data, CORRUPT_SUFFIX, DEFAULT_STORAGE_KEY};
use hrms::LoadOutcome;

mod common;

fn stored_file(dir: &tempfile::TempDir, key: &str) -> std::path::PathBuf {
    dir.path().join(format!("{key}.json"))
}

#[test]
fn test_first_open_installs_seed() {
    let dir = common::data_dir();
    let (store, outcome) = common::open_store(&dir);

    assert!(matches!(outcome, LoadOutcome::Seeded));
    assert_eq!(*store.data(), seed_data(common::today()).unwrap());

    // seed is persisted immediately
    let raw = std::fs::read_to_string(stored_file(&dir, DEFAULT_STORAGE_KEY)).unwrap();
    assert_eq!(decode(&raw).unwrap(), seed_data(common::today()).unwrap());

    let (_, outcome) = common::open_store(&dir);
    assert!(matches!(outcome, LoadOutcome::Loaded));
}

#[test]
fn test_reopen_sees_committed_changes() {
    let dir = common::data_dir();
    let mut service = common::open_service(&dir);

    let employee = service
        .add_employee(AddEmployeeCommand::new(EmployeeDraft::new(
            "Ana Reyes",
            "ana.reyes@hrms.com",
            "Recruiter",
            "d4",
            dec!(42000.50),
            common::today(),
        )))
        .unwrap();
    service
        .mark_attendance(MarkAttendanceCommand::new(
            employee.clone(),
            common::today(),
            AttendanceStatus::Present,
        ))
        .unwrap();
    let leave = service
        .request_leave(RequestLeaveCommand::new(LeaveDraft::new(
            employee.clone(),
            LeaveType::Casual,
            common::today(),
            common::today(),
            "Family errand",
        )))
        .unwrap();
    service.decide_leave(DecideLeaveCommand::reject(leave)).unwrap();

    let expected = service.data().clone();
    drop(service);

    let (store, outcome) = common::open_store(&dir);
    assert!(matches!(outcome, LoadOutcome::Loaded));
    assert_eq!(*store.data(), expected);

    let reloaded = store.data().employee(&employee).unwrap();
    assert_eq!(reloaded.salary().value(), dec!(42000.50));
    let record = store.data().attendance_for(&employee, common::today()).unwrap();
    assert_eq!(
        record.check_in_time(),
        chrono::NaiveTime::from_hms_opt(9, 12, 0)
    );
}

#[test]
fn test_largest_salary_survives_reload() {
    let dir = common::data_dir();
    let mut service = common::open_service(&dir);

    let draft = |salary| {
        EmployeeDraft::new(
            "Big Earner",
            "big.earner@hrms.com",
            "Director",
            "d1",
            salary,
            common::today(),
        )
    };
    let top = service
        .add_employee(AddEmployeeCommand::new(draft(dec!(999999999999.99))))
        .unwrap();
    let err = service
        .add_employee(AddEmployeeCommand::new(draft(rust_decimal::Decimal::MAX)))
        .unwrap_err();
    assert_eq!(err.error_code(), "validation_error");

    // sums over bounded salaries do not overflow
    let _ = service.dashboard();
    let _ = service.current_payroll_sheet();
    let expected = service.data().clone();
    drop(service);

    let (store, outcome) = common::open_store(&dir);
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(*store.data(), expected);
    assert_eq!(
        store.data().employee(&top).unwrap().salary().value(),
        dec!(999999999999.99)
    );
}

#[test]
fn test_corrupt_data_recovers_to_seed() {
    let dir = common::data_dir();
    let path = stored_file(&dir, DEFAULT_STORAGE_KEY);
    std::fs::write(&path, "{ not json").unwrap();

    let (store, outcome) = common::open_store(&dir);

    match outcome {
        LoadOutcome::Recovered { backup_key, .. } => {
            let backup_key = backup_key.unwrap();
            assert_eq!(backup_key, format!("{DEFAULT_STORAGE_KEY}{CORRUPT_SUFFIX}"));
            let backup = std::fs::read_to_string(stored_file(&dir, &backup_key)).unwrap();
            assert_eq!(backup, "{ not json");
        }
        other => panic!("expected recovery, got {other:?}"),
    }
    assert_eq!(*store.data(), seed_data(common::today()).unwrap());

    // the reseeded data replaced the unreadable value
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(decode(&raw).is_ok());
}

#[test]
fn test_wrong_shape_is_treated_as_corrupt() {
    let dir = common::data_dir();
    std::fs::write(
        stored_file(&dir, DEFAULT_STORAGE_KEY),
        r#"{"employees": "nope"}"#,
    )
    .unwrap();

    let (store, outcome) = common::open_store(&dir);
    assert!(outcome.is_recovered());
    assert_eq!(store.data().employees().len(), 4);
}
