//! Attendance Ledger
//!
//! At most one attendance record exists per (employee, date). Marking again
//! replaces the record and keeps its identity.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::domain::{AttendanceId, Clock, DomainError, EmployeeId, HrEvent, IdGenerator};

use super::HrData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

/// Attendance record for one employee on one day
///
/// Stored records are read through [`AttendanceRecord::new`], so the
/// check-in rules hold whatever the stored text says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredAttendance")]
pub struct AttendanceRecord {
    id: AttendanceId,
    employee_id: EmployeeId,
    date: NaiveDate,
    status: AttendanceStatus,
    #[serde(
        serialize_with = "check_in_format::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    check_in_time: Option<NaiveTime>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAttendance {
    id: AttendanceId,
    employee_id: EmployeeId,
    date: NaiveDate,
    status: AttendanceStatus,
    #[serde(default, deserialize_with = "check_in_format::deserialize")]
    check_in_time: Option<NaiveTime>,
}

impl From<StoredAttendance> for AttendanceRecord {
    fn from(stored: StoredAttendance) -> Self {
        Self::new(
            stored.id,
            stored.employee_id,
            stored.date,
            stored.status,
            stored.check_in_time,
        )
    }
}

impl AttendanceRecord {
    /// Build a record; the check-in time is kept only for `Present`.
    pub fn new(
        id: AttendanceId,
        employee_id: EmployeeId,
        date: NaiveDate,
        status: AttendanceStatus,
        check_in_time: Option<NaiveTime>,
    ) -> Self {
        let check_in_time = match status {
            AttendanceStatus::Present => check_in_time.and_then(truncate_to_minute),
            AttendanceStatus::Absent | AttendanceStatus::Late => None,
        };
        Self {
            id,
            employee_id,
            date,
            status,
            check_in_time,
        }
    }

    pub fn id(&self) -> &AttendanceId {
        &self.id
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    pub fn check_in_time(&self) -> Option<NaiveTime> {
        self.check_in_time
    }

    pub fn is_for(&self, employee_id: &EmployeeId, date: NaiveDate) -> bool {
        &self.employee_id == employee_id && self.date == date
    }
}

fn truncate_to_minute(time: NaiveTime) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
}

impl HrData {
    /// Upsert the attendance record for (employee, date)
    pub fn mark_attendance(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
        status: AttendanceStatus,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> Result<HrEvent, DomainError> {
        if self.employee(employee_id).is_none() {
            return Err(DomainError::not_found("Employee", employee_id));
        }

        let existing = self.attendance_for(employee_id, date);
        let id = match existing {
            Some(record) => record.id.clone(),
            None => {
                let id = AttendanceId::new(ids.next_id());
                if self.attendance().iter().any(|a| a.id == id) {
                    return Err(DomainError::duplicate_id("AttendanceRecord", &id));
                }
                id
            }
        };
        let record = AttendanceRecord::new(
            id,
            employee_id.clone(),
            date,
            status,
            Some(clock.local_now().time()),
        );

        Ok(HrEvent::AttendanceMarked {
            record,
            replaced: existing.is_some(),
        })
    }
}

/// `HH:MM` on the wire; seconds and 12-hour forms are accepted on read.
mod check_in_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";
    const ACCEPTED: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M:%S %p"];

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        ACCEPTED
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(&raw, fmt).ok())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid check-in time {raw:?}")))
    }
}
