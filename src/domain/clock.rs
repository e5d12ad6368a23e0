//! Clock
//!
//! Time source injected into the command layer so that check-in stamps,
//! payroll generation timestamps and "today" are reproducible in tests.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current wall-clock time at the device's location; used for check-in
    /// stamps only
    fn local_now(&self) -> NaiveDateTime;

    /// Calendar date in UTC. Attendance dates, the seed records and
    /// "present today" all key off this date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at one instant. Local time equals UTC.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> Self {
        let naive = date.and_hms_opt(hour, minute, 0).unwrap_or_default();
        Self(naive.and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }

    fn local_now(&self) -> NaiveDateTime {
        self.0.naive_utc()
    }
}
