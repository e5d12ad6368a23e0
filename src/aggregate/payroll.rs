//! Payroll Calculator
//!
//! Flat-rate deductions on the monthly base salary:
//!
//! | deduction  | rate |
//! |------------|------|
//! | tax        | 10%  |
//! | SSS        | 4.5% |
//! | PhilHealth | 4%   |
//!
//! Each deduction is rounded to centavos (half away from zero) and the net
//! salary is derived from the rounded figures, so a breakdown always sums
//! exactly to the basic salary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{round_currency, EmployeeId, PayPeriod, PayrollId};

use super::Employee;

/// Income tax withholding, 10%
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// SSS contribution, 4.5%
pub const SSS_RATE: Decimal = Decimal::from_parts(45, 0, 0, false, 3);

/// PhilHealth contribution, 4%
pub const PHILHEALTH_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deductions {
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub sss: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub philhealth: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub other: Decimal,
}

impl Deductions {
    pub fn for_salary(basic: Decimal) -> Self {
        Self {
            tax: round_currency(basic * TAX_RATE),
            sss: round_currency(basic * SSS_RATE),
            philhealth: round_currency(basic * PHILHEALTH_RATE),
            other: Decimal::ZERO,
        }
    }

    pub fn total(&self) -> Decimal {
        self.tax + self.sss + self.philhealth + self.other
    }
}

/// Payroll estimate for one employee and month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: PayrollId,
    pub employee_id: EmployeeId,
    pub month: PayPeriod,
    #[serde(with = "rust_decimal::serde::float")]
    pub basic_salary: Decimal,
    pub deductions: Deductions,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,
    pub generated_date: DateTime<Utc>,
}

impl PayrollRecord {
    /// `pay_<employee>_<YYYY-MM>`
    pub fn id_for(employee_id: &EmployeeId, month: PayPeriod) -> PayrollId {
        PayrollId::new(format!("pay_{}_{}", employee_id, month))
    }
}

/// Compute the payroll estimate for an employee.
///
/// The result depends only on the arguments.
pub fn compute_payroll(
    employee: &Employee,
    month: PayPeriod,
    generated_at: DateTime<Utc>,
) -> PayrollRecord {
    let basic = employee.salary().value();
    let deductions = Deductions::for_salary(basic);

    PayrollRecord {
        id: PayrollRecord::id_for(employee.id(), month),
        employee_id: employee.id().clone(),
        month,
        basic_salary: basic,
        deductions,
        net_salary: basic - deductions.total(),
        generated_date: generated_at,
    }
}
