//! HRMS Library
//!
//! Record keeping for employees, departments, attendance, leave and payroll
//! estimates, persisted as one aggregate in key-value storage.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod projection;
pub mod store;

mod error;

pub use aggregate::HrData;
pub use config::Config;
pub use domain::{DomainError, HrEvent};
pub use error::{AppError, AppResult};
pub use handlers::HrService;
pub use store::{HrStore, LoadOutcome};
