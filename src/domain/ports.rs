use super::employee::Employee;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

pub type EmployeeStoreBox = Box<dyn EmployeeStore>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;

/// Ordered, identity-keyed employee repository.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Returns a snapshot of all employees, in the order they were first
    /// inserted. Mutating the returned collection has no effect on the store.
    async fn find_all(&self) -> Result<Vec<Employee>>;

    /// Upserts one employee: appends when the id is new, otherwise replaces
    /// the stored record in place at its existing position.
    async fn save(&self, employee: Employee) -> Result<()>;
}

/// Banking collaborator that transfers one employee's salary.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Executes a single transfer. `Ok(())` means the payment went through;
    /// any error means it did not.
    async fn pay(&self, employee_id: &str, amount: Decimal) -> Result<()>;
}
