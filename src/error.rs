//! Error handling module
//!
//! Centralized error type for the command layer and the binary.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Rejected commands
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    // Persistence failures
    #[error("Storage error: {0}")]
    Storage(#[from] crate::store::StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Error kind as a stable snake_case code
    pub fn error_code(&self) -> &'static str {
        use crate::domain::DomainError;

        match self {
            AppError::Domain(DomainError::Validation { .. }) => "validation_error",
            AppError::Domain(DomainError::NotFound { .. }) => "not_found",
            AppError::Domain(DomainError::DuplicateId { .. }) => "duplicate_id",
            AppError::Domain(DomainError::InvalidTransition { .. }) => "invalid_transition",
            AppError::Storage(_) => "storage_error",
            AppError::Config(_) => "config_error",
        }
    }

    /// The domain error, if the command itself was rejected
    pub fn as_domain(&self) -> Option<&crate::domain::DomainError> {
        match self {
            AppError::Domain(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::store::StorageError;

    #[test]
    fn test_error_codes() {
        let err: AppError = DomainError::not_found("Employee", "e9").into();
        assert_eq!(err.error_code(), "not_found");
        assert!(err.as_domain().is_some());

        let err: AppError = StorageError::Unavailable("disk full".to_string()).into();
        assert_eq!(err.error_code(), "storage_error");
        assert!(err.as_domain().is_none());
        assert!(err.to_string().contains("disk full"));
    }
}
