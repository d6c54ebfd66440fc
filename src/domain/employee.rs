use crate::error::{PayrollError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary salary.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for payroll amounts. A zero salary is allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Salary(Decimal);

impl Salary {
    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PayrollError::Validation(
                "Salary must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Salary {
    type Error = PayrollError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Salary> for Decimal {
    fn from(salary: Salary) -> Self {
        salary.0
    }
}

/// An employee on the payroll.
///
/// Identity within a store is the `id` alone; two records with the same id are
/// the same logical employee. `paid` starts out false and is flipped by the
/// payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The unique identifier for the employee.
    pub id: String,
    /// The salary to transfer on each payroll run.
    pub salary: Salary,
    /// Whether the last payroll run paid this employee.
    #[serde(default)]
    pub paid: bool,
}

impl Employee {
    pub fn new(id: impl Into<String>, salary: Salary) -> Self {
        Self {
            id: id.into(),
            salary,
            paid: false,
        }
    }

    pub fn mark_paid(&mut self) {
        self.paid = true;
    }

    pub fn mark_unpaid(&mut self) {
        self.paid = false;
    }
}
