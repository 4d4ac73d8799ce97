//! Mutating ledger operations as values.
//!
//! Lets callers queue, log and replay operations, and gives the shared
//! handle a single entry point for writes.

use crate::{error::LedgerResult, event::LedgerEvent, ledger::Ledger};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A state-changing request against the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Transfer {
        from: Address,
        to: Address,
        amount: U256,
    },
    Approve {
        owner: Address,
        spender: Address,
        amount: U256,
    },
    TransferFrom {
        caller: Address,
        owner: Address,
        to: Address,
        amount: U256,
    },
    IncreaseAllowance {
        owner: Address,
        spender: Address,
        added: U256,
    },
    DecreaseAllowance {
        owner: Address,
        spender: Address,
        subtracted: U256,
    },
    Burn {
        holder: Address,
        amount: U256,
    },
}

impl Operation {
    /// Operation name, used as a metrics label.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "transfer",
            Self::Approve { .. } => "approve",
            Self::TransferFrom { .. } => "transfer_from",
            Self::IncreaseAllowance { .. } => "increase_allowance",
            Self::DecreaseAllowance { .. } => "decrease_allowance",
            Self::Burn { .. } => "burn",
        }
    }

    /// Apply to `ledger`, committing fully or not at all.
    pub fn apply(self, ledger: &mut Ledger) -> LedgerResult<LedgerEvent> {
        match self {
            Self::Transfer { from, to, amount } => ledger.transfer(from, to, amount),
            Self::Approve {
                owner,
                spender,
                amount,
            } => ledger.approve(owner, spender, amount),
            Self::TransferFrom {
                caller,
                owner,
                to,
                amount,
            } => ledger.transfer_from(caller, owner, to, amount),
            Self::IncreaseAllowance {
                owner,
                spender,
                added,
            } => ledger.increase_allowance(owner, spender, added),
            Self::DecreaseAllowance {
                owner,
                spender,
                subtracted,
            } => ledger.decrease_allowance(owner, spender, subtracted),
            Self::Burn { holder, amount } => ledger.burn(holder, amount),
        }
    }
}
