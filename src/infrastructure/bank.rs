use crate::domain::ports::PaymentGateway;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A single approved transfer recorded by [`InMemoryBankGateway`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub employee_id: String,
    pub amount: Decimal,
}

/// An in-memory bank that approves every transfer.
///
/// Stands in for the real banking transport: each payment is appended to an
/// internal ledger instead of leaving the process. Useful for demos and for
/// tests that only care about what the engine asked the bank to do.
#[derive(Default, Clone)]
pub struct InMemoryBankGateway {
    ledger: Arc<RwLock<Vec<Transfer>>>,
}

impl InMemoryBankGateway {
    /// Creates a new bank gateway with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the transfers executed so far, in order.
    pub async fn transfers(&self) -> Vec<Transfer> {
        self.ledger.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryBankGateway {
    async fn pay(&self, employee_id: &str, amount: Decimal) -> Result<()> {
        let mut ledger = self.ledger.write().await;
        ledger.push(Transfer {
            employee_id: employee_id.to_string(),
            amount,
        });
        debug!(employee_id, %amount, "transfer approved");
        Ok(())
    }
}
