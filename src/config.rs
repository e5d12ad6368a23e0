//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::domain::{DeletePolicy, LeaveDatePolicy, StorePolicy};
use crate::store::DEFAULT_STORAGE_KEY;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the stored data files
    pub data_dir: PathBuf,

    /// Key the aggregate is stored under
    pub storage_key: String,

    /// Delete and leave-date policies
    pub policy: StorePolicy,

    /// Environment (development, production)
    pub environment: String,

    pub log_format: LogFormat,
}

/// Read an optional variable; unset and blank both mean "use the default"
fn var(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(var)
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let data_dir = lookup("HRMS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        let storage_key =
            lookup("HRMS_STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        let delete = lookup("HRMS_DELETE_POLICY")
            .map(|v| v.parse::<DeletePolicy>())
            .transpose()
            .map_err(|_| ConfigError::InvalidValue("HRMS_DELETE_POLICY"))?
            .unwrap_or_default();

        let leave_dates = lookup("HRMS_LEAVE_DATE_POLICY")
            .map(|v| v.parse::<LeaveDatePolicy>())
            .transpose()
            .map_err(|_| ConfigError::InvalidValue("HRMS_LEAVE_DATE_POLICY"))?
            .unwrap_or_default();

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None => LogFormat::default(),
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(v) if v.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            Some(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT")),
        };

        Ok(Self {
            data_dir,
            storage_key,
            policy: StorePolicy {
                delete,
                leave_dates,
            },
            environment,
            log_format,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&'static str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.storage_key, "hrms_data_v1");
        assert_eq!(config.policy, StorePolicy::default());
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HRMS_DATA_DIR", "/var/lib/hrms"),
            ("HRMS_DELETE_POLICY", "cascade"),
            ("HRMS_LEAVE_DATE_POLICY", "strict"),
            ("ENVIRONMENT", "production"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/hrms"));
        assert_eq!(config.policy.delete, DeletePolicy::Cascade);
        assert_eq!(config.policy.leave_dates, LeaveDatePolicy::Strict);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_policy() {
        let err = load(&[("HRMS_DELETE_POLICY", "shred")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("HRMS_DELETE_POLICY")));
    }
}
