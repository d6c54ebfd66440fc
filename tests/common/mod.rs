use async_trait::async_trait;
use payrun::domain::employee::{Employee, Salary};
use payrun::domain::ports::{EmployeeStore, PaymentGateway};
use payrun::error::{PayrollError, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn employee(id: &str, salary: Decimal) -> Employee {
    Employee::new(id, Salary::new(salary).unwrap())
}

/// Test double for `EmployeeStore`: serves a fixed roster and records every
/// interaction so tests can verify how the engine drives the port.
#[derive(Clone)]
pub struct StubEmployeeStore {
    roster: Arc<Vec<Employee>>,
    find_all_calls: Arc<RwLock<usize>>,
    saved: Arc<RwLock<Vec<Employee>>>,
}

impl StubEmployeeStore {
    pub fn with_roster(roster: Vec<Employee>) -> Self {
        Self {
            roster: Arc::new(roster),
            find_all_calls: Arc::new(RwLock::new(0)),
            saved: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn find_all_calls(&self) -> usize {
        *self.find_all_calls.read().await
    }

    /// Records written back through `save`, in write order.
    pub async fn saved(&self) -> Vec<Employee> {
        self.saved.read().await.clone()
    }
}

#[async_trait]
impl EmployeeStore for StubEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        *self.find_all_calls.write().await += 1;
        Ok(self.roster.as_ref().clone())
    }

    async fn save(&self, employee: Employee) -> Result<()> {
        self.saved.write().await.push(employee);
        Ok(())
    }
}

/// Test double for `PaymentGateway`: approves or declines per script and
/// captures every `(employee_id, amount)` invocation in order.
#[derive(Clone)]
pub struct ScriptedGateway {
    decline_all: bool,
    decline_ids: HashSet<String>,
    calls: Arc<RwLock<Vec<(String, Decimal)>>>,
}

impl ScriptedGateway {
    pub fn approving() -> Self {
        Self::scripted(false, &[])
    }

    pub fn declining_all() -> Self {
        Self::scripted(true, &[])
    }

    pub fn declining(ids: &[&str]) -> Self {
        Self::scripted(false, ids)
    }

    fn scripted(decline_all: bool, ids: &[&str]) -> Self {
        Self {
            decline_all,
            decline_ids: ids.iter().map(|id| id.to_string()).collect(),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Invocations captured so far, in call order.
    pub async fn calls(&self) -> Vec<(String, Decimal)> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn pay(&self, employee_id: &str, amount: Decimal) -> Result<()> {
        self.calls
            .write()
            .await
            .push((employee_id.to_string(), amount));
        if self.decline_all || self.decline_ids.contains(employee_id) {
            return Err(PayrollError::Payment {
                employee_id: employee_id.to_string(),
                reason: "transfer declined".to_string(),
            });
        }
        Ok(())
    }
}
