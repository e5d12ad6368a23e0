//! End-to-end HR workflows through the service

use rust_decimal_macros::dec;

use hrms::aggregate::{
    AttendanceStatus, DepartmentDraft, EmployeeDraft, LeaveDraft, LeaveStatus, LeaveType,
};
use hrms::handlers::{
    AddDepartmentCommand, AddEmployeeCommand, Command, DecideLeaveCommand, DeleteEmployeeCommand,
    MarkAttendanceCommand, RequestLeaveCommand, UpdateEmployeeCommand,
};
use hrms::domain::{EmployeeId, PayPeriod};

mod common;

fn hire(name: &str, email: &str, department: &str, salary: rust_decimal::Decimal) -> EmployeeDraft {
    EmployeeDraft::new(
        name,
        email,
        "Analyst",
        department,
        salary,
        common::today(),
    )
}

#[test]
fn test_onboarding_to_payroll() {
    let dir = common::data_dir();
    let mut service = common::open_service(&dir);

    let department = service
        .add_department(AddDepartmentCommand::new(
            DepartmentDraft::new("Finance").with_description("Books and payroll"),
        ))
        .unwrap();
    let employee = service
        .add_employee(AddEmployeeCommand::new(hire(
            "Lea Cruz",
            "lea.cruz@hrms.com",
            department.as_str(),
            dec!(12345.67),
        )))
        .unwrap();

    let dashboard = service.dashboard();
    assert_eq!(dashboard.total_employees, 5);
    assert_eq!(dashboard.total_departments, 5);
    assert_eq!(dashboard.recent_hires[0].employee_id, employee);

    let roster = service.department_roster();
    let finance = roster.iter().find(|r| r.department_id == department).unwrap();
    assert_eq!(finance.employee_count, 1);
    assert!(finance.manager_name.is_none());

    let sheet = service.payroll_sheet(PayPeriod::containing(common::today()));
    assert_eq!(sheet.records.len(), 5);
    let record = sheet
        .records
        .iter()
        .find(|r| r.employee_id == employee)
        .unwrap();
    assert_eq!(record.deductions.tax, dec!(1234.57));
    assert_eq!(record.deductions.sss, dec!(555.56));
    assert_eq!(record.deductions.philhealth, dec!(493.83));
    assert_eq!(record.net_salary, dec!(10061.71));
    assert_eq!(sheet.totals.basic_salary, dec!(282345.67));
}

#[test]
fn test_attendance_day() {
    let dir = common::data_dir();
    let mut service = common::open_service(&dir);
    let today = common::today();

    service
        .mark_attendance(MarkAttendanceCommand::new("e3", today, AttendanceStatus::Present))
        .unwrap();
    service
        .mark_attendance(MarkAttendanceCommand::new("e4", today, AttendanceStatus::Absent))
        .unwrap();
    assert_eq!(service.dashboard().present_today, 3);

    // correcting a mark replaces it
    service
        .mark_attendance(MarkAttendanceCommand::new("e3", today, AttendanceStatus::Late))
        .unwrap();
    assert_eq!(service.dashboard().present_today, 2);
    assert_eq!(service.data().attendance_on(today).count(), 4);
}

#[test]
fn test_leave_review() {
    let dir = common::data_dir();
    let mut service = common::open_service(&dir);
    let start = chrono::NaiveDate::from_ymd_opt(2024, 9, 16).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2024, 9, 20).unwrap();

    let first = service
        .request_leave(RequestLeaveCommand::new(LeaveDraft::new(
            "e2",
            LeaveType::Annual,
            start,
            end,
            "Vacation",
        )))
        .unwrap();
    let second = service
        .request_leave(RequestLeaveCommand::new(LeaveDraft::new(
            "e4",
            LeaveType::Sick,
            start,
            start,
            "Dentist",
        )))
        .unwrap();
    assert_eq!(service.data().pending_leaves().count(), 2);

    service.decide_leave(DecideLeaveCommand::approve(first.clone())).unwrap();
    service.decide_leave(DecideLeaveCommand::reject(second.clone())).unwrap();

    assert_eq!(service.data().pending_leaves().count(), 0);
    assert_eq!(
        service.data().leave_request(&first).unwrap().status(),
        LeaveStatus::Approved
    );
    assert_eq!(
        service.data().leave_request(&second).unwrap().status(),
        LeaveStatus::Rejected
    );
}

#[test]
fn test_delete_leaves_dangling_references() {
    let dir = common::data_dir();
    let mut service = common::open_service(&dir);
    let e1: EmployeeId = "e1".into();

    service.delete_employee(DeleteEmployeeCommand::new("e1")).unwrap();

    // d1 still names e1 as manager; the roster shows no manager name
    let roster = service.department_roster();
    let engineering = roster.iter().find(|r| r.department_id.as_str() == "d1").unwrap();
    assert_eq!(engineering.manager_id.as_ref(), Some(&e1));
    assert!(engineering.manager_name.is_none());

    // attendance history is kept
    assert_eq!(service.data().attendance_of(&e1).count(), 1);
    assert_eq!(service.dashboard().total_employees, 3);
    assert_eq!(
        service.current_payroll_sheet().totals.basic_salary,
        dec!(185000)
    );
}

#[test]
fn test_update_moves_department() {
    let dir = common::data_dir();
    let mut service = common::open_service(&dir);

    service
        .update_employee(UpdateEmployeeCommand::new(
            "e3",
            EmployeeDraft::new(
                "Charles Sinacay",
                "charles@hrms.com",
                "Recruitment Specialist",
                "d2",
                dec!(48000),
                chrono::NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            ),
        ))
        .unwrap();

    assert_eq!(service.data().employees_in(&"d2".into()).count(), 2);
    assert_eq!(service.data().employees_in(&"d3".into()).count(), 0);
    let employee = service.data().employee(&"e3".into()).unwrap();
    assert_eq!(employee.position(), "Recruitment Specialist");
}

#[test]
fn test_commands_from_json() {
    let dir = common::data_dir();
    let mut service = common::open_service(&dir);

    let batch = r#"[
        {"command": "add_department", "payload": {"id": "d9", "department": {"name": "Legal", "managerId": ""}}},
        {"command": "add_employee", "payload": {"id": "e9", "employee": {
            "name": "Rico Tan", "email": "rico.tan@hrms.com", "position": "Counsel",
            "departmentId": "d9", "salary": 90000, "hireDate": "2024-09-01"}}},
        {"command": "request_leave", "payload": {"leave": {
            "employeeId": "e9", "type": "Casual Leave",
            "startDate": "2024-09-05", "endDate": "2024-09-05", "reason": "Moving"}}}
    ]"#;
    let commands: Vec<Command> = serde_json::from_str(batch).unwrap();
    for command in commands {
        service.execute(command).unwrap();
    }

    let legal = service.data().department(&"d9".into()).unwrap();
    assert!(legal.manager_id().is_none());
    assert_eq!(service.data().leaves_of(&"e9".into()).count(), 1);

    // unknown employee reference is rejected
    let bad: Command = serde_json::from_str(
        r#"{"command": "mark_attendance", "payload": {"employeeId": "e404", "date": "2024-09-02", "status": "Present"}}"#,
    )
    .unwrap();
    assert_eq!(service.execute(bad).unwrap_err().error_code(), "not_found");
}
