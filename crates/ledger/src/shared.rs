//! Shared, serialized access to a ledger.

use crate::{
    error::LedgerResult, event::LedgerEvent, ledger::Ledger, metrics::Metrics,
    operation::Operation,
};
use alloy_primitives::{Address, U256};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Cloneable handle to a ledger shared between tasks.
///
/// Writes are serialized behind the write lock and applied in the order the
/// lock is granted; reads run concurrently against the last committed state.
///
/// The event log is append-only and never truncated. Long-running embedders
/// should keep a cursor and follow new events with [`Ledger::events_since`]
/// instead of re-reading [`Ledger::events`].
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
    metrics: Metrics,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
            metrics: Metrics::new(),
        }
    }

    /// Apply a single operation.
    pub async fn submit(&self, op: Operation) -> LedgerResult<LedgerEvent> {
        let result = {
            let mut ledger = self.inner.write().await;
            op.apply(&mut ledger)
        };

        match &result {
            Ok(_) => self.metrics.record_success(op.name()),
            Err(e) => {
                warn!(operation = op.name(), error = %e, "Ledger operation rejected");
                self.metrics.record_failure(op.name(), e.kind());
            }
        }
        result
    }

    pub async fn transfer(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> LedgerResult<LedgerEvent> {
        self.submit(Operation::Transfer { from, to, amount }).await
    }

    pub async fn approve(
        &self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> LedgerResult<LedgerEvent> {
        self.submit(Operation::Approve {
            owner,
            spender,
            amount,
        })
        .await
    }

    pub async fn transfer_from(
        &self,
        caller: Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> LedgerResult<LedgerEvent> {
        self.submit(Operation::TransferFrom {
            caller,
            owner,
            to,
            amount,
        })
        .await
    }

    pub async fn increase_allowance(
        &self,
        owner: Address,
        spender: Address,
        added: U256,
    ) -> LedgerResult<LedgerEvent> {
        self.submit(Operation::IncreaseAllowance {
            owner,
            spender,
            added,
        })
        .await
    }

    pub async fn decrease_allowance(
        &self,
        owner: Address,
        spender: Address,
        subtracted: U256,
    ) -> LedgerResult<LedgerEvent> {
        self.submit(Operation::DecreaseAllowance {
            owner,
            spender,
            subtracted,
        })
        .await
    }

    pub async fn burn(&self, holder: Address, amount: U256) -> LedgerResult<LedgerEvent> {
        self.submit(Operation::Burn { holder, amount }).await
    }

    /// Run a read-only query against the committed state.
    pub async fn read<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        let ledger = self.inner.read().await;
        f(&ledger)
    }

    pub async fn balance_of(&self, account: Address) -> U256 {
        self.read(|ledger| ledger.balance_of(account)).await
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.read(|ledger| ledger.allowance(owner, spender)).await
    }

    pub async fn total_supply(&self) -> U256 {
        self.read(Ledger::total_supply).await
    }

    /// Clone of the committed state.
    pub async fn snapshot(&self) -> Ledger {
        self.read(Ledger::clone).await
    }
}
