//! Department

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{DepartmentId, DomainError, EmployeeId, HrEvent, IdGenerator};

use super::HrData;

/// Department record
///
/// `manager_id` is a weak reference: it is never checked against the
/// employee list and may point to nobody.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    id: DepartmentId,
    name: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    manager_id: Option<EmployeeId>,
    #[serde(default)]
    description: String,
}

/// Older data stores an unassigned manager as `""`
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<EmployeeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .map(EmployeeId::new))
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDraft {
    pub name: String,
    #[serde(default)]
    pub manager_id: Option<EmployeeId>,
    #[serde(default)]
    pub description: String,
}

impl DepartmentDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_manager(mut self, manager_id: impl Into<EmployeeId>) -> Self {
        self.manager_id = Some(manager_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Department {
    pub fn from_draft(id: DepartmentId, draft: DepartmentDraft) -> Result<Self, DomainError> {
        if id.is_blank() {
            return Err(DomainError::validation("id", "must not be empty"));
        }
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name", "must not be empty"));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            manager_id: draft.manager_id.filter(|m| !m.is_blank()),
            description: draft.description.trim().to_string(),
        })
    }

    pub fn id(&self) -> &DepartmentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manager_id(&self) -> Option<&EmployeeId> {
        self.manager_id.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl HrData {
    /// Add a department. Names are not required to be unique.
    pub fn add_department(
        &self,
        id: Option<DepartmentId>,
        draft: DepartmentDraft,
        ids: &dyn IdGenerator,
    ) -> Result<HrEvent, DomainError> {
        let id = id.unwrap_or_else(|| DepartmentId::new(ids.next_id()));
        if self.department(&id).is_some() {
            return Err(DomainError::duplicate_id("Department", &id));
        }
        let department = Department::from_draft(id, draft)?;
        Ok(HrEvent::DepartmentAdded { department })
    }
}
