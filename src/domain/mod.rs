//! Domain module
//!
//! Core domain types: identities, money, periods, policies, events and errors.

pub mod clock;
pub mod error;
pub mod events;
pub mod ids;
pub mod money;
pub mod period;
pub mod policy;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
pub use events::HrEvent;
pub use ids::{
    AttendanceId, DepartmentId, EmployeeId, IdGenerator, LeaveRequestId, PayrollId,
    SequentialGenerator, UuidGenerator,
};
pub use money::{round_currency, Salary, SalaryError, CURRENCY, MAX_SALARY};
pub use period::{PayPeriod, PayPeriodError};
pub use policy::{DeletePolicy, LeaveDatePolicy, StorePolicy, UnknownPolicy};
