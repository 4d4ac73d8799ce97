//! Fungible token ledger.
//!
//! This crate provides:
//! - [`Ledger`]: balances, allowances and total supply of one token, with
//!   genesis, transfer, delegated spending and burning
//! - [`LedgerEvent`]: the `Transfer` / `Approval` events each successful
//!   operation emits, encodable as ERC20 logs
//! - [`SharedLedger`]: a cloneable handle that serializes writers for
//!   concurrent callers

pub mod error;
pub mod event;
pub mod ledger;
pub mod metrics;
pub mod operation;
pub mod shared;

pub use error::{AccountRole, LedgerError, LedgerResult};
pub use event::LedgerEvent;
pub use ledger::{scale_units, Ledger};
pub use operation::Operation;
pub use shared::SharedLedger;
