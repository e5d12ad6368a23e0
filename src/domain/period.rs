//! Pay period
//!
//! A calendar month, written `YYYY-MM` on the wire.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A target month for payroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayPeriod {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayPeriodError {
    #[error("Invalid pay period {0:?}, expected YYYY-MM")]
    Format(String),

    #[error("Month out of range: {0}")]
    MonthOutOfRange(u32),
}

impl PayPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, PayPeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PayPeriodError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PayPeriod {
    type Err = PayPeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PayPeriodError::Format(s.to_string()))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(PayPeriodError::Format(s.to_string()));
        }
        let year = year
            .parse()
            .map_err(|_| PayPeriodError::Format(s.to_string()))?;
        let month = month
            .parse()
            .map_err(|_| PayPeriodError::Format(s.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for PayPeriod {
    type Error = PayPeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayPeriod> for String {
    fn from(period: PayPeriod) -> Self {
        period.to_string()
    }
}
