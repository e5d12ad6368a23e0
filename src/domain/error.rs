//! Domain Error Types
//!
//! Pure domain errors that don't depend on storage or configuration.

use thiserror::Error;

use crate::aggregate::LeaveStatus;

/// Domain-specific errors
///
/// These errors represent rejected commands. The aggregate is never modified
/// when one of them is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed input to a create/update command
    #[error("Validation failed for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Command references an identity that does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Insert with an identity that is already taken
    #[error("{kind} with id {id} already exists")]
    DuplicateId { kind: &'static str, id: String },

    /// Leave decision on a request that has already been decided
    #[error("Leave request {id} is {from:?} and can no longer change status")]
    InvalidTransition { id: String, from: LeaveStatus },
}

impl DomainError {
    /// Create a validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Create a duplicate id error
    pub fn duplicate_id(kind: &'static str, id: impl ToString) -> Self {
        Self::DuplicateId {
            kind,
            id: id.to_string(),
        }
    }

    /// Check if this is a validation error (caller supplied bad input)
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::DuplicateId { .. })
    }

    /// Check if this error refers to a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("email", "malformed address");

        assert!(err.is_validation_error());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("email"));
        assert!(err.to_string().contains("malformed address"));
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Employee", "e42");

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Employee not found: e42");
    }

    #[test]
    fn test_invalid_transition_error() {
        let err = DomainError::InvalidTransition {
            id: "l1".to_string(),
            from: LeaveStatus::Approved,
        };

        assert!(!err.is_validation_error());
        assert!(err.to_string().contains("Approved"));
    }
}
