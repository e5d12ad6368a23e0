//! Entity identifiers
//!
//! Identities are opaque strings on the wire (the seed data uses short ids such
//! as `e1`). Each entity kind gets its own newtype so ids cannot be mixed up.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Employee identity
    EmployeeId
);
entity_id!(
    /// Department identity
    DepartmentId
);
entity_id!(
    /// Attendance record identity
    AttendanceId
);
entity_id!(
    /// Leave request identity
    LeaveRequestId
);
entity_id!(
    /// Payroll record identity, derived from employee and month
    PayrollId
);

/// Source of fresh identities for new records
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter with a fixed prefix (`id-1`, `id-2`, ...)
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_generator_is_monotonic() {
        let ids = SequentialGenerator::new("emp-");
        assert_eq!(ids.next_id(), "emp-1");
        assert_eq!(ids.next_id(), "emp-2");
        assert_eq!(ids.next_id(), "emp-3");
    }

    #[test]
    fn test_uuid_generator_distinct() {
        let ids = UuidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = EmployeeId::new("e1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"e1\"");

        let parsed: EmployeeId = serde_json::from_str("\"e2\"").unwrap();
        assert_eq!(parsed.as_str(), "e2");
    }

    #[test]
    fn test_blank_id() {
        assert!(EmployeeId::new("  ").is_blank());
        assert!(!EmployeeId::new("e1").is_blank());
    }
}
