//! Configuration types for the token ledger.
//!
//! This crate provides:
//! - Network presets (hardhat, localhost, sepolia, mainnet)
//! - Token genesis parameters (metadata, initial supply, allowance policy)

pub mod network;
pub mod token;

pub use network::{NetworkConfig, NetworkConfigBuilder, NetworkType, UnknownNetwork};
pub use token::{AllowancePolicy, TokenConfig};
