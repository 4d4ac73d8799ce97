//! Network configuration for ledger deployments.
//!
//! The ledger itself is network agnostic. The network only names the target
//! a deployment is reported against and carries its chain id.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error parsing a network name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown network: {0}")]
pub struct UnknownNetwork(pub String);

/// Deployment target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// In-process development network
    #[default]
    Hardhat,
    /// Local node listening on the loopback interface
    Localhost,
    Sepolia,
    Mainnet,
}

impl NetworkType {
    /// Canonical lowercase name, as used in config files and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hardhat => "hardhat",
            Self::Localhost => "localhost",
            Self::Sepolia => "sepolia",
            Self::Mainnet => "mainnet",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkType {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hardhat" => Ok(Self::Hardhat),
            "localhost" => Ok(Self::Localhost),
            "sepolia" => Ok(Self::Sepolia),
            "mainnet" => Ok(Self::Mainnet),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

/// Complete network configuration for a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network type
    pub network_type: NetworkType,
    /// Chain ID
    pub chain_id: u64,
}

impl NetworkConfig {
    /// Local development network configuration.
    pub const fn hardhat() -> Self {
        Self {
            network_type: NetworkType::Hardhat,
            chain_id: 31337,
        }
    }

    /// Local node configuration.
    pub const fn localhost() -> Self {
        Self {
            network_type: NetworkType::Localhost,
            chain_id: 31337,
        }
    }

    /// Ethereum Sepolia testnet configuration.
    pub const fn sepolia() -> Self {
        Self {
            network_type: NetworkType::Sepolia,
            chain_id: 11155111,
        }
    }

    /// Ethereum mainnet configuration.
    pub const fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            chain_id: 1,
        }
    }

    /// Create configuration from network type.
    pub const fn from_network_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Hardhat => Self::hardhat(),
            NetworkType::Localhost => Self::localhost(),
            NetworkType::Sepolia => Self::sepolia(),
            NetworkType::Mainnet => Self::mainnet(),
        }
    }

    /// Network name for logging.
    pub const fn name(&self) -> &'static str {
        self.network_type.name()
    }
}

/// Builder for custom network configurations.
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    config: NetworkConfig,
}

impl NetworkConfigBuilder {
    /// Start from the defaults of a network type.
    pub const fn new(network_type: NetworkType) -> Self {
        Self {
            config: NetworkConfig::from_network_type(network_type),
        }
    }

    /// Override the chain id (forks, custom local nodes).
    pub const fn chain_id(mut self, chain_id: u64) -> Self {
        self.config.chain_id = chain_id;
        self
    }

    /// Build the network configuration.
    pub const fn build(self) -> NetworkConfig {
        self.config
    }
}
