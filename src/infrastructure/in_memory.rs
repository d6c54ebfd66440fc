use crate::domain::employee::Employee;
use crate::domain::ports::EmployeeStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for the employee roster.
///
/// Keeps employees in insertion order inside an `Arc<RwLock<Vec<Employee>>>`.
/// Ideal for testing or small rosters where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryEmployeeStore {
    employees: Arc<RwLock<Vec<Employee>>>,
}

impl InMemoryEmployeeStore {
    /// Creates a new, empty in-memory employee store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that takes ownership of an existing roster.
    ///
    /// From here on the store is the roster's only mutator. The roster must
    /// not contain two employees with the same id.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Arc::new(RwLock::new(employees)),
        }
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.clone())
    }

    async fn save(&self, employee: Employee) -> Result<()> {
        let mut employees = self.employees.write().await;
        match employees.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => *slot = employee,
            None => employees.push(employee),
        }
        Ok(())
    }
}
