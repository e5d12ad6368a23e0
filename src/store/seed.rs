//! Seed dataset
//!
//! Installed when the store is empty or its stored value cannot be read.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::aggregate::{
    AttendanceRecord, AttendanceStatus, Department, DepartmentDraft, Employee, EmployeeDraft,
    HrData, LeaveDraft, LeaveRequest, LeaveStatus, LeaveType,
};
use crate::domain::{DomainError, LeaveDatePolicy};

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DomainError::validation("date", format!("{y}-{m}-{d} is not a date")))
}

fn time(h: u32, m: u32) -> Result<NaiveTime, DomainError> {
    NaiveTime::from_hms_opt(h, m, 0)
        .ok_or_else(|| DomainError::validation("checkInTime", format!("{h}:{m} is not a time")))
}

fn department(id: &str, name: &str, manager: &str, description: &str) -> Result<Department, DomainError> {
    let draft = DepartmentDraft::new(name)
        .with_manager(manager)
        .with_description(description);
    Department::from_draft(id.into(), draft)
}

fn employee(
    id: &str,
    name: &str,
    email: &str,
    position: &str,
    department: &str,
    salary: i64,
    hired: Result<NaiveDate, DomainError>,
) -> Result<Employee, DomainError> {
    let draft = EmployeeDraft::new(name, email, position, department, Decimal::from(salary), hired?);
    Employee::from_draft(id.into(), draft)
}

/// The fixed seed dataset: 4 departments, 4 employees, 2 attendance records
/// dated `today` and 1 approved sick leave.
///
/// Every record goes through the same validation as a command; a record that
/// fails it is an error, never silently dropped.
pub fn seed_data(today: NaiveDate) -> Result<HrData, DomainError> {
    let departments = vec![
        department("d1", "IT Department", "e1", "Technology and Development")?,
        department("d2", "Human Resources", "e2", "Employee Relations and Recruiting")?,
        department("d3", "Sales", "e3", "Revenue and Customer Acquisition")?,
        department("d4", "Marketing", "e4", "Brand and Outreach")?,
    ];

    let employees = vec![
        employee("e1", "Troy Au", "troy.au@hrms.com", "Senior Developer", "d1", 85_000, date(2022, 1, 15))?,
        employee("e2", "Julius Simon", "julius.simon@hrms.com", "HR Manager", "d2", 75_000, date(2021, 3, 10))?,
        employee("e3", "Charles Sinacay", "charles.sinacay@hrms.com", "Sales Representative", "d3", 45_000, date(2023, 6, 1))?,
        employee("e4", "Jake Valdez", "jake.valdez@hrms.com", "Marketing Lead", "d4", 65_000, date(2022, 8, 20))?,
    ];

    let attendance = vec![
        AttendanceRecord::new(
            "a1".into(),
            "e1".into(),
            today,
            AttendanceStatus::Present,
            Some(time(8, 55)?),
        ),
        AttendanceRecord::new(
            "a2".into(),
            "e2".into(),
            today,
            AttendanceStatus::Present,
            Some(time(9, 0)?),
        ),
    ];

    let mut leave = LeaveRequest::from_draft(
        "l1".into(),
        LeaveDraft::new("e3", LeaveType::Sick, date(2023, 10, 1)?, date(2023, 10, 3)?, "Flu and fever"),
        LeaveDatePolicy::Strict,
    )?;
    leave.set_status(LeaveStatus::Approved);

    Ok(HrData::new(employees, departments, attendance, vec![leave], Vec::new()))
}
