//! HR Service
//!
//! Dispatches commands against the record store. Each command is checked by
//! the aggregate, applied to a copy, persisted, and only then becomes the
//! current state.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::aggregate::{compute_payroll, Aggregate, HrData, LeaveStatus, PayrollRecord};
use crate::domain::{
    AttendanceId, Clock, DepartmentId, DomainError, EmployeeId, HrEvent, IdGenerator,
    LeaveRequestId, PayPeriod, StorePolicy, SystemClock, UuidGenerator,
};
use crate::error::AppResult;
use crate::projection::{DashboardSummary, DepartmentRoster, PayrollSheet};
use crate::store::{HrStore, KeyValueStorage};

use super::{
    AddDepartmentCommand, AddEmployeeCommand, Command, DecideLeaveCommand, DeleteEmployeeCommand,
    MarkAttendanceCommand, RequestLeaveCommand, UpdateEmployeeCommand,
};

/// Command and query entry point over a [`HrStore`]
pub struct HrService<S> {
    store: HrStore<S>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    policy: StorePolicy,
}

impl<S: KeyValueStorage> HrService<S> {
    /// System clock, UUID identities, default policies
    pub fn new(store: HrStore<S>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidGenerator),
            policy: StorePolicy::default(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub fn with_policy(mut self, policy: StorePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn data(&self) -> &HrData {
        self.store.data()
    }

    pub fn store(&self) -> &HrStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut HrStore<S> {
        &mut self.store
    }

    pub fn policy(&self) -> StorePolicy {
        self.policy
    }

    pub fn into_store(self) -> HrStore<S> {
        self.store
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Execute any command, returning the applied event
    pub fn execute(&mut self, command: impl Into<Command>) -> AppResult<HrEvent> {
        let command = command.into();
        let name = command.name();

        let event = match self.decide(command) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!("Command {} rejected: {}", name, e);
                return Err(e.into());
            }
        };

        let next = self.store.data().clone().apply(event.clone());
        self.store.commit(next)?;

        tracing::debug!(
            command = name,
            event_type = event.event_type(),
            subject = event.subject_id(),
            "{} applied to {}",
            event.event_type(),
            HrData::aggregate_type()
        );
        Ok(event)
    }

    fn decide(&self, command: Command) -> Result<HrEvent, DomainError> {
        let data = self.store.data();
        let ids = self.ids.as_ref();

        match command {
            Command::AddEmployee(c) => data.add_employee(c.id, c.employee, ids),
            Command::UpdateEmployee(c) => data.update_employee(c.employee_id, c.employee),
            Command::DeleteEmployee(c) => data.delete_employee(&c.employee_id, self.policy.delete),
            Command::AddDepartment(c) => data.add_department(c.id, c.department, ids),
            Command::MarkAttendance(c) => {
                data.mark_attendance(&c.employee_id, c.date, c.status, self.clock.as_ref(), ids)
            }
            Command::RequestLeave(c) => data.request_leave(c.leave, self.policy.leave_dates, ids),
            Command::DecideLeave(c) => data.decide_leave(&c.request_id, c.decision),
        }
    }

    pub fn add_employee(&mut self, command: AddEmployeeCommand) -> AppResult<EmployeeId> {
        let event = self.execute(command)?;
        Ok(EmployeeId::new(event.subject_id()))
    }

    pub fn update_employee(&mut self, command: UpdateEmployeeCommand) -> AppResult<()> {
        self.execute(command).map(|_| ())
    }

    pub fn delete_employee(&mut self, command: DeleteEmployeeCommand) -> AppResult<()> {
        self.execute(command).map(|_| ())
    }

    pub fn add_department(&mut self, command: AddDepartmentCommand) -> AppResult<DepartmentId> {
        let event = self.execute(command)?;
        Ok(DepartmentId::new(event.subject_id()))
    }

    pub fn mark_attendance(&mut self, command: MarkAttendanceCommand) -> AppResult<AttendanceId> {
        let event = self.execute(command)?;
        Ok(AttendanceId::new(event.subject_id()))
    }

    pub fn request_leave(&mut self, command: RequestLeaveCommand) -> AppResult<LeaveRequestId> {
        let event = self.execute(command)?;
        Ok(LeaveRequestId::new(event.subject_id()))
    }

    pub fn decide_leave(&mut self, command: DecideLeaveCommand) -> AppResult<LeaveStatus> {
        let status = command.decision.outcome();
        self.execute(command)?;
        Ok(status)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Payroll estimate for one employee, stamped with the current time
    pub fn compute_payroll(
        &self,
        employee_id: &EmployeeId,
        month: PayPeriod,
    ) -> AppResult<PayrollRecord> {
        let employee = self
            .data()
            .employee(employee_id)
            .ok_or_else(|| DomainError::not_found("Employee", employee_id))?;
        Ok(compute_payroll(employee, month, self.clock.now()))
    }

    pub fn payroll_sheet(&self, month: PayPeriod) -> PayrollSheet {
        PayrollSheet::build(self.data(), month, self.clock.now())
    }

    /// Payroll sheet for the month containing today
    pub fn current_payroll_sheet(&self) -> PayrollSheet {
        self.payroll_sheet(PayPeriod::containing(self.today()))
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::build(self.data(), self.today())
    }

    pub fn department_roster(&self) -> Vec<DepartmentRoster> {
        DepartmentRoster::build(self.data())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
