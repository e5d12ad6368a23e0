//! Store policies
//!
//! Behaviours the record keeper leaves to the operator: what happens to an
//! employee's history on delete, and whether leave date ranges are checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with attendance, leave and payroll records of a deleted employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Keep dependent records; they reference an employee that no longer exists
    #[default]
    Retain,
    /// Remove dependent records together with the employee
    Cascade,
}

/// Whether a leave request may end before it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDatePolicy {
    #[default]
    Permissive,
    /// Reject requests whose end date is before the start date
    Strict,
}

/// Policies applied by the command layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorePolicy {
    pub delete: DeletePolicy,
    pub leave_dates: LeaveDatePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown policy value: {0}")]
pub struct UnknownPolicy(pub String);

impl FromStr for DeletePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(Self::Retain),
            "cascade" => Ok(Self::Cascade),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl FromStr for LeaveDatePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retain => f.write_str("retain"),
            Self::Cascade => f.write_str("cascade"),
        }
    }
}

impl fmt::Display for LeaveDatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => f.write_str("permissive"),
            Self::Strict => f.write_str("strict"),
        }
    }
}
