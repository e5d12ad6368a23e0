//! Dashboard summary

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{AttendanceStatus, HrData};
use crate::domain::EmployeeId;

/// How many recent hires the dashboard lists
pub const RECENT_HIRES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentHire {
    pub employee_id: EmployeeId,
    pub name: String,
    pub position: String,
    pub hire_date: NaiveDate,
}

/// Daily overview of the records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub total_employees: usize,
    pub total_departments: usize,
    pub present_today: usize,
    pub pending_leaves: usize,
    /// Sum of base salaries before deductions
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_monthly_payroll: Decimal,
    pub recent_hires: Vec<RecentHire>,
}

impl DashboardSummary {
    pub fn build(data: &HrData, today: NaiveDate) -> Self {
        let present_today = data
            .attendance_on(today)
            .filter(|a| a.status() == AttendanceStatus::Present)
            .count();

        let estimated_monthly_payroll = data
            .employees()
            .iter()
            .map(|e| e.salary().value())
            .sum();

        let mut hires: Vec<_> = data.employees().iter().collect();
        hires.sort_by(|a, b| b.hire_date().cmp(&a.hire_date()));
        let recent_hires = hires
            .into_iter()
            .take(RECENT_HIRES)
            .map(|e| RecentHire {
                employee_id: e.id().clone(),
                name: e.name().to_string(),
                position: e.position().to_string(),
                hire_date: e.hire_date(),
            })
            .collect();

        Self {
            date: today,
            total_employees: data.employees().len(),
            total_departments: data.departments().len(),
            present_today,
            pending_leaves: data.pending_leaves().count(),
            estimated_monthly_payroll,
            recent_hires,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_data;
    use rust_decimal_macros::dec;

    #[test]
    fn test_seed_dashboard() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let summary = DashboardSummary::build(&seed_data(today).unwrap(), today);

        assert_eq!(summary.total_employees, 4);
        assert_eq!(summary.total_departments, 4);
        assert_eq!(summary.present_today, 2);
        assert_eq!(summary.pending_leaves, 0);
        assert_eq!(summary.estimated_monthly_payroll, dec!(270000));

        let names: Vec<_> = summary.recent_hires.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Charles Sinacay", "Jake Valdez", "Troy Au"]);
    }

    #[test]
    fn test_present_only_counts_today() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let tomorrow = today.succ_opt().unwrap();
        let summary = DashboardSummary::build(&seed_data(today).unwrap(), tomorrow);
        assert_eq!(summary.present_today, 0);
    }
}
