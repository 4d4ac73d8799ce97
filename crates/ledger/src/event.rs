//! Events emitted by successful ledger operations.

use alloy_primitives::{Address, LogData, U256};
use alloy_sol_types::SolEvent;
use binding::token::IERC20;
use serde::{Deserialize, Serialize};

/// A committed state change, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LedgerEvent {
    /// Tokens moved between accounts. Mints come from the null account,
    /// burns go to it.
    Transfer {
        from: Address,
        to: Address,
        value: U256,
    },
    /// An allowance was set to `value`.
    Approval {
        owner: Address,
        spender: Address,
        value: U256,
    },
}

impl LedgerEvent {
    pub const fn transfer(from: Address, to: Address, value: U256) -> Self {
        Self::Transfer { from, to, value }
    }

    pub const fn approval(owner: Address, spender: Address, value: U256) -> Self {
        Self::Approval {
            owner,
            spender,
            value,
        }
    }

    /// Encode as the ERC20 log an EVM contract would emit.
    pub fn to_log_data(&self) -> LogData {
        match *self {
            Self::Transfer { from, to, value } => {
                IERC20::Transfer { from, to, value }.encode_log_data()
            }
            Self::Approval {
                owner,
                spender,
                value,
            } => IERC20::Approval {
                owner,
                spender,
                value,
            }
            .encode_log_data(),
        }
    }
}
