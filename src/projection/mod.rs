//! Projection module
//!
//! Read models derived from the aggregate on demand. Nothing here is stored.

mod dashboard;
mod payroll_sheet;
mod roster;

pub use dashboard::{DashboardSummary, RecentHire, RECENT_HIRES};
pub use payroll_sheet::{PayrollSheet, PayrollTotals};
pub use roster::DepartmentRoster;
