//! Domain Events
//!
//! Facts produced by accepted commands. Events are applied to the aggregate
//! in memory; only the resulting aggregate is persisted.

use serde::{Deserialize, Serialize};

use crate::aggregate::{AttendanceRecord, Department, Employee, LeaveRequest, LeaveStatus};

use super::{DeletePolicy, EmployeeId, LeaveRequestId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HrEvent {
    EmployeeAdded {
        employee: Employee,
    },

    EmployeeUpdated {
        employee: Employee,
    },

    /// Employee removed; `policy` decides what happens to their history
    EmployeeDeleted {
        employee_id: EmployeeId,
        policy: DeletePolicy,
    },

    DepartmentAdded {
        department: Department,
    },

    /// Attendance upserted for (employee, date)
    AttendanceMarked {
        record: AttendanceRecord,
        /// An earlier record for the same day was replaced
        replaced: bool,
    },

    LeaveRequested {
        request: LeaveRequest,
    },

    LeaveDecided {
        request_id: LeaveRequestId,
        status: LeaveStatus,
    },
}

impl HrEvent {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            HrEvent::EmployeeAdded { .. } => "EmployeeAdded",
            HrEvent::EmployeeUpdated { .. } => "EmployeeUpdated",
            HrEvent::EmployeeDeleted { .. } => "EmployeeDeleted",
            HrEvent::DepartmentAdded { .. } => "DepartmentAdded",
            HrEvent::AttendanceMarked { .. } => "AttendanceMarked",
            HrEvent::LeaveRequested { .. } => "LeaveRequested",
            HrEvent::LeaveDecided { .. } => "LeaveDecided",
        }
    }

    /// Identity of the record the event is about
    pub fn subject_id(&self) -> &str {
        match self {
            HrEvent::EmployeeAdded { employee } | HrEvent::EmployeeUpdated { employee } => {
                employee.id().as_str()
            }
            HrEvent::EmployeeDeleted { employee_id, .. } => employee_id.as_str(),
            HrEvent::DepartmentAdded { department } => department.id().as_str(),
            HrEvent::AttendanceMarked { record, .. } => record.id().as_str(),
            HrEvent::LeaveRequested { request } => request.id().as_str(),
            HrEvent::LeaveDecided { request_id, .. } => request_id.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_and_subject() {
        let event = HrEvent::LeaveDecided {
            request_id: "l1".into(),
            status: LeaveStatus::Approved,
        };
        assert_eq!(event.event_type(), "LeaveDecided");
        assert_eq!(event.subject_id(), "l1");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "LeaveDecided");
    }
}
