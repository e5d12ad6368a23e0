//! Command definitions
//!
//! Commands represent intentions to change the HR records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{AttendanceStatus, DepartmentDraft, EmployeeDraft, LeaveDecision, LeaveDraft};
use crate::domain::{DepartmentId, EmployeeId, LeaveRequestId};

// =========================================================================
// Employees
// =========================================================================

/// Command to add an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeeCommand {
    /// Caller-chosen id; generated when absent
    #[serde(default)]
    pub id: Option<EmployeeId>,
    pub employee: EmployeeDraft,
}

impl AddEmployeeCommand {
    pub fn new(employee: EmployeeDraft) -> Self {
        Self { id: None, employee }
    }

    pub fn with_id(mut self, id: impl Into<EmployeeId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Command to replace an employee's details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeCommand {
    pub employee_id: EmployeeId,
    pub employee: EmployeeDraft,
}

impl UpdateEmployeeCommand {
    pub fn new(employee_id: impl Into<EmployeeId>, employee: EmployeeDraft) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEmployeeCommand {
    pub employee_id: EmployeeId,
}

impl DeleteEmployeeCommand {
    pub fn new(employee_id: impl Into<EmployeeId>) -> Self {
        Self {
            employee_id: employee_id.into(),
        }
    }
}

// =========================================================================
// Departments
// =========================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDepartmentCommand {
    #[serde(default)]
    pub id: Option<DepartmentId>,
    pub department: DepartmentDraft,
}

impl AddDepartmentCommand {
    pub fn new(department: DepartmentDraft) -> Self {
        Self {
            id: None,
            department,
        }
    }

    pub fn with_id(mut self, id: impl Into<DepartmentId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

// =========================================================================
// Attendance
// =========================================================================

/// Command to record an employee's attendance for a day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceCommand {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl MarkAttendanceCommand {
    pub fn new(employee_id: impl Into<EmployeeId>, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            status,
        }
    }
}

// =========================================================================
// Leave
// =========================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLeaveCommand {
    pub leave: LeaveDraft,
}

impl RequestLeaveCommand {
    pub fn new(leave: LeaveDraft) -> Self {
        Self { leave }
    }
}

/// Command to approve or reject a pending leave request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideLeaveCommand {
    pub request_id: LeaveRequestId,
    pub decision: LeaveDecision,
}

impl DecideLeaveCommand {
    pub fn approve(request_id: impl Into<LeaveRequestId>) -> Self {
        Self {
            request_id: request_id.into(),
            decision: LeaveDecision::Approve,
        }
    }

    pub fn reject(request_id: impl Into<LeaveRequestId>) -> Self {
        Self {
            request_id: request_id.into(),
            decision: LeaveDecision::Reject,
        }
    }
}

/// Any command accepted by [`super::HrService::execute`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", content = "payload", rename_all = "snake_case")]
pub enum Command {
    AddEmployee(AddEmployeeCommand),
    UpdateEmployee(UpdateEmployeeCommand),
    DeleteEmployee(DeleteEmployeeCommand),
    AddDepartment(AddDepartmentCommand),
    MarkAttendance(MarkAttendanceCommand),
    RequestLeave(RequestLeaveCommand),
    DecideLeave(DecideLeaveCommand),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddEmployee(_) => "add_employee",
            Command::UpdateEmployee(_) => "update_employee",
            Command::DeleteEmployee(_) => "delete_employee",
            Command::AddDepartment(_) => "add_department",
            Command::MarkAttendance(_) => "mark_attendance",
            Command::RequestLeave(_) => "request_leave",
            Command::DecideLeave(_) => "decide_leave",
        }
    }
}

macro_rules! impl_from_command {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Command {
                fn from(command: $ty) -> Self {
                    Command::$variant(command)
                }
            }
        )*
    };
}

impl_from_command!(
    AddEmployee(AddEmployeeCommand),
    UpdateEmployee(UpdateEmployeeCommand),
    DeleteEmployee(DeleteEmployeeCommand),
    AddDepartment(AddDepartmentCommand),
    MarkAttendance(MarkAttendanceCommand),
    RequestLeave(RequestLeaveCommand),
    DecideLeave(DecideLeaveCommand),
);
