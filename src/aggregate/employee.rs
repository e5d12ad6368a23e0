//! Employee
//!
//! Employee records and the commands that add, update and delete them.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    DeletePolicy, DepartmentId, DomainError, EmployeeId, HrEvent, IdGenerator, Salary,
};

use super::HrData;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: EmployeeId,
    name: String,
    email: String,
    position: String,
    department_id: DepartmentId,
    salary: Salary,
    hire_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

/// Unvalidated employee payload, as submitted by a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department_id: DepartmentId,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
        department_id: impl Into<DepartmentId>,
        salary: Decimal,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            position: position.into(),
            department_id: department_id.into(),
            salary,
            hire_date,
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

fn required(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

impl Employee {
    /// Build a validated employee from a draft
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Result<Self, DomainError> {
        if id.is_blank() {
            return Err(DomainError::validation("id", "must not be empty"));
        }
        let name = required("name", &draft.name)?;
        let email = required("email", &draft.email)?;
        if !EMAIL_RE.is_match(&email) {
            return Err(DomainError::validation(
                "email",
                format!("{email:?} is not a valid address"),
            ));
        }
        let position = required("position", &draft.position)?;
        if draft.department_id.is_blank() {
            return Err(DomainError::validation("departmentId", "must not be empty"));
        }
        let salary =
            Salary::new(draft.salary).map_err(|e| DomainError::validation("salary", e.to_string()))?;
        let avatar = draft
            .avatar
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        Ok(Self {
            id,
            name,
            email,
            position,
            department_id: draft.department_id,
            salary,
            hire_date: draft.hire_date,
            avatar,
        })
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn department_id(&self) -> &DepartmentId {
        &self.department_id
    }

    pub fn salary(&self) -> Salary {
        self.salary
    }

    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Case-insensitive match against name, email or position
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.position.to_lowercase().contains(&term)
    }
}

// =========================================================================
// Commands
// =========================================================================

impl HrData {
    /// Add an employee. A supplied id must be unused; otherwise one is generated.
    pub fn add_employee(
        &self,
        id: Option<EmployeeId>,
        draft: EmployeeDraft,
        ids: &dyn IdGenerator,
    ) -> Result<HrEvent, DomainError> {
        let id = id.unwrap_or_else(|| EmployeeId::new(ids.next_id()));
        if self.employee(&id).is_some() {
            return Err(DomainError::duplicate_id("Employee", &id));
        }
        let employee = Employee::from_draft(id, draft)?;
        Ok(HrEvent::EmployeeAdded { employee })
    }

    /// Replace the employee with the given id
    pub fn update_employee(
        &self,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<HrEvent, DomainError> {
        if self.employee(&id).is_none() {
            return Err(DomainError::not_found("Employee", &id));
        }
        let employee = Employee::from_draft(id, draft)?;
        Ok(HrEvent::EmployeeUpdated { employee })
    }

    pub fn delete_employee(
        &self,
        id: &EmployeeId,
        policy: DeletePolicy,
    ) -> Result<HrEvent, DomainError> {
        if self.employee(id).is_none() {
            return Err(DomainError::not_found("Employee", id));
        }
        Ok(HrEvent::EmployeeDeleted {
            employee_id: id.clone(),
            policy,
        })
    }
}
