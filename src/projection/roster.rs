//! Department roster

use serde::Serialize;

use crate::aggregate::HrData;
use crate::domain::{DepartmentId, EmployeeId};

/// A department with its headcount and resolved manager
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRoster {
    pub department_id: DepartmentId,
    pub name: String,
    pub description: String,
    pub employee_count: usize,
    pub manager_id: Option<EmployeeId>,
    /// `None` when unassigned or when the manager id matches no employee
    pub manager_name: Option<String>,
}

impl DepartmentRoster {
    pub fn build(data: &HrData) -> Vec<Self> {
        data.departments()
            .iter()
            .map(|d| {
                let manager_name = d
                    .manager_id()
                    .and_then(|id| data.employee(id))
                    .map(|e| e.name().to_string());
                Self {
                    department_id: d.id().clone(),
                    name: d.name().to_string(),
                    description: d.description().to_string(),
                    employee_count: data.employees_in(d.id()).count(),
                    manager_id: d.manager_id().cloned(),
                    manager_name,
                }
            })
            .collect()
    }
}
