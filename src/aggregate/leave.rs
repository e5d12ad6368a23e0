//! Leave Workflow
//!
//! A request is created `Pending` and is decided exactly once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    DomainError, EmployeeId, HrEvent, IdGenerator, LeaveDatePolicy, LeaveRequestId,
};

use super::HrData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "Sick Leave")]
    Sick,
    #[serde(rename = "Casual Leave")]
    Casual,
    #[serde(rename = "Annual Leave")]
    Annual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Reviewer's decision on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDecision {
    Approve,
    Reject,
}

impl LeaveDecision {
    pub fn outcome(self) -> LeaveStatus {
        match self {
            Self::Approve => LeaveStatus::Approved,
            Self::Reject => LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    id: LeaveRequestId,
    employee_id: EmployeeId,
    #[serde(rename = "type")]
    leave_type: LeaveType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    reason: String,
    status: LeaveStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDraft {
    pub employee_id: EmployeeId,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl LeaveDraft {
    pub fn new(
        employee_id: impl Into<EmployeeId>,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            leave_type,
            start_date,
            end_date,
            reason: reason.into(),
        }
    }
}

impl LeaveRequest {
    /// Build a pending request from a draft
    pub fn from_draft(
        id: LeaveRequestId,
        draft: LeaveDraft,
        policy: LeaveDatePolicy,
    ) -> Result<Self, DomainError> {
        let reason = draft.reason.trim();
        if reason.is_empty() {
            return Err(DomainError::validation("reason", "must not be empty"));
        }
        if policy == LeaveDatePolicy::Strict && draft.end_date < draft.start_date {
            return Err(DomainError::validation(
                "endDate",
                format!(
                    "{} is before start date {}",
                    draft.end_date, draft.start_date
                ),
            ));
        }
        Ok(Self {
            id,
            employee_id: draft.employee_id,
            leave_type: draft.leave_type,
            start_date: draft.start_date,
            end_date: draft.end_date,
            reason: reason.to_string(),
            status: LeaveStatus::Pending,
        })
    }

    /// Status after the decision, or an error if already decided
    pub fn decide(&self, decision: LeaveDecision) -> Result<LeaveStatus, DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidTransition {
                id: self.id.to_string(),
                from: self.status,
            });
        }
        Ok(decision.outcome())
    }

    pub fn id(&self) -> &LeaveRequestId {
        &self.id
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn leave_type(&self) -> LeaveType {
        self.leave_type
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn status(&self) -> LeaveStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    pub(crate) fn set_status(&mut self, status: LeaveStatus) {
        self.status = status;
    }

    #[cfg(test)]
    pub(crate) fn with_status(mut self, status: LeaveStatus) -> Self {
        self.status = status;
        self
    }
}

impl HrData {
    pub fn request_leave(
        &self,
        draft: LeaveDraft,
        policy: LeaveDatePolicy,
        ids: &dyn IdGenerator,
    ) -> Result<HrEvent, DomainError> {
        if self.employee(&draft.employee_id).is_none() {
            return Err(DomainError::not_found("Employee", &draft.employee_id));
        }
        let id = LeaveRequestId::new(ids.next_id());
        if self.leave_request(&id).is_some() {
            return Err(DomainError::duplicate_id("LeaveRequest", &id));
        }
        let request = LeaveRequest::from_draft(id, draft, policy)?;
        Ok(HrEvent::LeaveRequested { request })
    }

    pub fn decide_leave(
        &self,
        request_id: &LeaveRequestId,
        decision: LeaveDecision,
    ) -> Result<HrEvent, DomainError> {
        let request = self
            .leave_request(request_id)
            .ok_or_else(|| DomainError::not_found("LeaveRequest", request_id))?;
        let status = request.decide(decision)?;
        Ok(HrEvent::LeaveDecided {
            request_id: request_id.clone(),
            status,
        })
    }
}
