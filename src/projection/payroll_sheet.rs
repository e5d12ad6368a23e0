//! Payroll sheet
//!
//! Payroll estimates for every employee in a month, with totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{compute_payroll, HrData, PayrollRecord};
use crate::domain::PayPeriod;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub basic_salary: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub deductions: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSheet {
    pub month: PayPeriod,
    pub records: Vec<PayrollRecord>,
    pub totals: PayrollTotals,
}

impl PayrollSheet {
    pub fn build(data: &HrData, month: PayPeriod, generated_at: DateTime<Utc>) -> Self {
        let records: Vec<_> = data
            .employees()
            .iter()
            .map(|e| compute_payroll(e, month, generated_at))
            .collect();

        let totals = records
            .iter()
            .fold(PayrollTotals::default(), |mut totals, r| {
                totals.basic_salary += r.basic_salary;
                totals.deductions += r.deductions.total();
                totals.net_salary += r.net_salary;
                totals
            });

        tracing::debug!(
            "Payroll sheet for {}: {} employees, net {}",
            month,
            records.len(),
            totals.net_salary
        );

        Self {
            month,
            records,
            totals,
        }
    }
}
