use crate::domain::employee::Employee;
use crate::domain::ports::{EmployeeStoreBox, PaymentGatewayBox};
use crate::error::Result;

/// The main entry point for the payroll batch run.
///
/// `PayrollEngine` pays every employee in the store through the payment
/// gateway. It owns both collaborators and awaits each gateway call before
/// issuing the next, so transfers happen one at a time in roster order.
pub struct PayrollEngine {
    store: EmployeeStoreBox,
    gateway: PaymentGatewayBox,
}

impl PayrollEngine {
    /// Creates a new `PayrollEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - The repository holding the employee roster.
    /// * `gateway` - The banking collaborator that executes transfers.
    pub fn new(store: EmployeeStoreBox, gateway: PaymentGatewayBox) -> Self {
        Self { store, gateway }
    }

    /// Attempts to pay every employee currently in the store.
    ///
    /// The roster is read once, up front. Each employee gets exactly one
    /// transfer attempt, in roster order; a declined transfer marks that
    /// employee unpaid and the run moves on to the next one. The engine
    /// holds no state across runs.
    ///
    /// Returns the number of employees successfully paid. Payment failures
    /// never surface as errors from this method.
    pub async fn pay_employees(&self) -> Result<usize> {
        let employees = self.store.find_all().await?;

        let mut paid = 0;
        for mut employee in employees {
            match self
                .gateway
                .pay(&employee.id, employee.salary.value())
                .await
            {
                Ok(()) => {
                    employee.mark_paid();
                    paid += 1;
                }
                Err(_) => employee.mark_unpaid(),
            }
            self.store.save(employee).await?;
        }

        Ok(paid)
    }

    /// Consumes the engine and returns the final state of the roster.
    pub async fn into_roster(self) -> Result<Vec<Employee>> {
        self.store.find_all().await
    }
}
