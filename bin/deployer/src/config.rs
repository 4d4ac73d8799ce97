use alloy_primitives::Address;
use ::config::{NetworkConfig, NetworkConfigBuilder, NetworkType, TokenConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level deployment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target network
    #[serde(default)]
    pub network: NetworkType,

    /// Chain id override for the target network
    #[serde(default)]
    pub chain_id: Option<u64>,

    /// Deploying account, credited with the initial supply
    pub deployer: Address,

    /// Deployer account nonce at deployment time
    #[serde(default)]
    pub deployer_nonce: u64,

    /// Token genesis parameters
    #[serde(default)]
    pub token: TokenConfig,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Resolve the network preset, applying the chain id override.
    pub fn network_config(&self) -> NetworkConfig {
        let builder = NetworkConfigBuilder::new(self.network);
        match self.chain_id {
            Some(chain_id) => builder.chain_id(chain_id).build(),
            None => builder.build(),
        }
    }
}
