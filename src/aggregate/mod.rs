//! Aggregate module
//!
//! The HR aggregate holds every collection of the record keeper as one value.
//! Commands are checked against the current value and produce an [`HrEvent`];
//! applying the event yields the next value.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod leave;
pub mod payroll;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    DeletePolicy, DepartmentId, EmployeeId, HrEvent, LeaveRequestId,
};

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use department::{Department, DepartmentDraft};
pub use employee::{Employee, EmployeeDraft};
pub use leave::{LeaveDecision, LeaveDraft, LeaveRequest, LeaveStatus, LeaveType};
pub use payroll::{compute_payroll, Deductions, PayrollRecord};

/// Aggregate trait
pub trait Aggregate: Sized + Default {
    /// The type of events this aggregate handles
    type Event;

    /// Aggregate type name (for logs)
    fn aggregate_type() -> &'static str;

    /// Apply an event to produce the next state
    fn apply(self, event: Self::Event) -> Self;
}

/// The HR aggregate
///
/// Membership is keyed by identity; the order of the lists carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrData {
    #[serde(default)]
    employees: Vec<Employee>,
    #[serde(default)]
    departments: Vec<Department>,
    #[serde(default)]
    attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    leave_requests: Vec<LeaveRequest>,
    #[serde(default)]
    payroll: Vec<PayrollRecord>,
}

impl HrData {
    pub fn new(
        employees: Vec<Employee>,
        departments: Vec<Department>,
        attendance: Vec<AttendanceRecord>,
        leave_requests: Vec<LeaveRequest>,
        payroll: Vec<PayrollRecord>,
    ) -> Self {
        Self {
            employees,
            departments,
            attendance,
            leave_requests,
            payroll,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.leave_requests
    }

    pub fn payroll(&self) -> &[PayrollRecord] {
        &self.payroll
    }

    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    pub fn department(&self, id: &DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|d| d.id() == id)
    }

    pub fn leave_request(&self, id: &LeaveRequestId) -> Option<&LeaveRequest> {
        self.leave_requests.iter().find(|r| r.id() == id)
    }

    pub fn attendance_for(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
    ) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|a| a.is_for(employee_id, date))
    }

    pub fn attendance_on(&self, date: NaiveDate) -> impl Iterator<Item = &AttendanceRecord> {
        self.attendance.iter().filter(move |a| a.date() == date)
    }

    pub fn pending_leaves(&self) -> impl Iterator<Item = &LeaveRequest> {
        self.leave_requests.iter().filter(|r| r.is_pending())
    }

    pub fn leaves_of<'a>(
        &'a self,
        employee_id: &'a EmployeeId,
    ) -> impl Iterator<Item = &'a LeaveRequest> + 'a {
        self.leave_requests
            .iter()
            .filter(move |r| r.employee_id() == employee_id)
    }

    pub fn attendance_of<'a>(
        &'a self,
        employee_id: &'a EmployeeId,
    ) -> impl Iterator<Item = &'a AttendanceRecord> + 'a {
        self.attendance
            .iter()
            .filter(move |a| a.employee_id() == employee_id)
    }

    /// Employees whose name, email or position contains `term`
    pub fn search_employees<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Employee> + 'a {
        self.employees.iter().filter(move |e| e.matches(term))
    }

    pub fn employees_in<'a>(
        &'a self,
        department_id: &'a DepartmentId,
    ) -> impl Iterator<Item = &'a Employee> + 'a {
        self.employees
            .iter()
            .filter(move |e| e.department_id() == department_id)
    }
}

impl Aggregate for HrData {
    type Event = HrEvent;

    fn aggregate_type() -> &'static str {
        "HrData"
    }

    fn apply(mut self, event: Self::Event) -> Self {
        match event {
            HrEvent::EmployeeAdded { employee } => {
                self.employees.push(employee);
            }

            HrEvent::EmployeeUpdated { employee } => {
                if let Some(slot) = self.employees.iter_mut().find(|e| e.id() == employee.id()) {
                    *slot = employee;
                }
            }

            HrEvent::EmployeeDeleted {
                employee_id,
                policy,
            } => {
                self.employees.retain(|e| e.id() != &employee_id);
                if policy == DeletePolicy::Cascade {
                    self.attendance.retain(|a| a.employee_id() != &employee_id);
                    self.leave_requests.retain(|r| r.employee_id() != &employee_id);
                    self.payroll.retain(|p| p.employee_id != employee_id);
                }
            }

            HrEvent::DepartmentAdded { department } => {
                self.departments.push(department);
            }

            HrEvent::AttendanceMarked { record, .. } => {
                self.attendance
                    .retain(|a| !a.is_for(record.employee_id(), record.date()));
                self.attendance.push(record);
            }

            HrEvent::LeaveRequested { request } => {
                self.leave_requests.push(request);
            }

            HrEvent::LeaveDecided { request_id, status } => {
                if let Some(request) = self
                    .leave_requests
                    .iter_mut()
                    .find(|r| r.id() == &request_id)
                {
                    request.set_status(status);
                }
            }
        }

        self
    }
}
