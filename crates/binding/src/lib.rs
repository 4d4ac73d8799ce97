//! Contract bindings for the token ledger.
//!
//! The ledger speaks the ERC20 ABI: its events are encoded as the same logs an
//! ERC20 contract emits, and its operations map one-to-one onto the ERC20
//! functions (plus the burnable and allowance-adjustment extensions).
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod token;
