//! Money types
//!
//! Domain primitive for salaries. A salary is validated at construction time,
//! so a negative salary cannot exist in the aggregate, whether it came from a
//! command or from persisted data.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Currency of all amounts (Philippine peso)
pub const CURRENCY: &str = "PHP";

/// Decimal places kept for currency amounts
pub const CURRENCY_SCALE: u32 = 2;

/// Largest accepted salary (one trillion).
///
/// Salaries are stored as JSON numbers; with at most [`CURRENCY_SCALE`]
/// decimal places every value up to this bound survives the f64 round trip,
/// and sums over any realistic headcount stay far from `Decimal::MAX`.
pub const MAX_SALARY: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Round a currency amount to centavos, half away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Salary represents a monthly base salary.
///
/// # Invariants
/// - Value is never negative (zero is allowed)
/// - Value is at most [`MAX_SALARY`]
/// - At most [`CURRENCY_SCALE`] decimal places
///
/// Serialized as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Salary(Decimal);

/// Errors that can occur when creating a Salary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SalaryError {
    #[error("Salary must not be negative (got {0})")]
    Negative(Decimal),

    #[error("Salary must not exceed 1000000000000 (got {0})")]
    TooLarge(Decimal),

    #[error("Salary must have at most 2 decimal places (got {0})")]
    TooPrecise(Decimal),

    #[error("Invalid salary format: {0}")]
    ParseError(String),
}

impl Salary {
    /// Create a new Salary with validation.
    pub fn new(value: Decimal) -> Result<Self, SalaryError> {
        if value < Decimal::ZERO {
            return Err(SalaryError::Negative(value));
        }
        if value > MAX_SALARY {
            return Err(SalaryError::TooLarge(value));
        }
        let value = value.normalize();
        if value.scale() > CURRENCY_SCALE {
            return Err(SalaryError::TooPrecise(value));
        }
        Ok(Self(value))
    }

    /// Create a Salary from a whole amount.
    pub fn from_integer(value: i64) -> Result<Self, SalaryError> {
        Self::new(Decimal::from(value))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Salary {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", CURRENCY, self.0)
    }
}

impl FromStr for Salary {
    type Err = SalaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal =
            Decimal::from_str(s.trim()).map_err(|e| SalaryError::ParseError(e.to_string()))?;
        Salary::new(decimal)
    }
}

impl TryFrom<Decimal> for Salary {
    type Error = SalaryError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Salary::new(value)
    }
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Salary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;
        Salary::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_salary_positive() {
        let salary = Salary::new(dec!(85000)).unwrap();
        assert_eq!(salary.value(), dec!(85000));
    }

    #[test]
    fn test_salary_zero_allowed() {
        let salary = Salary::new(Decimal::ZERO).unwrap();
        assert!(salary.is_zero());
    }

    #[test]
    fn test_salary_negative_rejected() {
        let salary = Salary::new(dec!(-1));
        assert!(matches!(salary, Err(SalaryError::Negative(_))));
    }

    #[test]
    fn test_salary_from_str() {
        let salary: Salary = "45000.50".parse().unwrap();
        assert_eq!(salary.value(), dec!(45000.5));

        let bad: Result<Salary, _> = "forty".parse();
        assert!(matches!(bad, Err(SalaryError::ParseError(_))));
    }

    #[test]
    fn test_salary_json_is_a_number() {
        let salary = Salary::from_integer(75000).unwrap();
        let json = serde_json::to_value(salary).unwrap();
        assert!(json.is_number());
        assert_eq!(json.as_f64(), Some(75000.0));

        let parsed: Salary = serde_json::from_str("65000").unwrap();
        assert_eq!(parsed.value(), dec!(65000));
    }

    #[test]
    fn test_salary_negative_json_rejected() {
        let parsed: Result<Salary, _> = serde_json::from_str("-10");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_salary_upper_bound() {
        assert_eq!(MAX_SALARY, dec!(1000000000000));
        assert!(Salary::new(MAX_SALARY).is_ok());
        assert!(matches!(
            Salary::new(MAX_SALARY + dec!(0.01)),
            Err(SalaryError::TooLarge(_))
        ));
        assert!(matches!(Salary::new(Decimal::MAX), Err(SalaryError::TooLarge(_))));
    }

    #[test]
    fn test_salary_at_most_two_places() {
        assert!(Salary::new(dec!(45000.10)).is_ok());
        assert!(Salary::new(dec!(45000.100)).is_ok());
        assert!(matches!(
            Salary::new(dec!(45000.001)),
            Err(SalaryError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_salary_json_exact_at_bound() {
        for value in [dec!(999999999999.99), MAX_SALARY, dec!(12345.67), dec!(0.01)] {
            let salary = Salary::new(value).unwrap();
            let json = serde_json::to_string(&salary).unwrap();
            let back: Salary = serde_json::from_str(&json).unwrap();
            assert_eq!(back, salary, "{json}");
        }

        let too_big: Result<Salary, _> = serde_json::from_str("12345678901234567.89");
        assert!(too_big.is_err());
    }

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(dec!(1.005)), dec!(1.01));
        assert_eq!(round_currency(dec!(1.004)), dec!(1.00));
        assert_eq!(round_currency(dec!(2250)), dec!(2250));
    }
}
