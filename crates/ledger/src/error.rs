//! Ledger errors.

use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Why an operation was rejected.
///
/// A failed operation never mutates the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance for {account}: have {balance}, need {needed}")]
    InsufficientBalance {
        account: Address,
        balance: U256,
        needed: U256,
    },

    #[error("Insufficient allowance for {spender} on {owner}: have {allowance}, need {needed}")]
    InsufficientAllowance {
        owner: Address,
        spender: Address,
        allowance: U256,
        needed: U256,
    },

    #[error("Allowance below zero: have {allowance}, subtracting {subtracted}")]
    AllowanceUnderflow { allowance: U256, subtracted: U256 },

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Invalid {role} account: {account}")]
    InvalidAccount { role: AccountRole, account: Address },

    #[error("Conservation invariant violated: total supply {total_supply}, sum of balances {sum}")]
    ConservationViolated { total_supply: U256, sum: U256 },
}

impl LedgerError {
    /// Short, stable label used for metrics and logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::InsufficientAllowance { .. } => "insufficient_allowance",
            Self::AllowanceUnderflow { .. } => "allowance_underflow",
            Self::ArithmeticOverflow => "arithmetic_overflow",
            Self::InvalidAccount { .. } => "invalid_account",
            Self::ConservationViolated { .. } => "conservation_violated",
        }
    }
}

/// Position an account holds in an operation, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Sender,
    Owner,
    Spender,
    Holder,
    Deployer,
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            Self::Sender => "sender",
            Self::Owner => "owner",
            Self::Spender => "spender",
            Self::Holder => "holder",
            Self::Deployer => "deployer",
        };
        f.write_str(role)
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
