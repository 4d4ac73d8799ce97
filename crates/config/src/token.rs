//! Token genesis parameters.

use serde::{Deserialize, Serialize};

/// How `transferFrom` treats an allowance of `U256::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowancePolicy {
    /// Every delegated spend decrements the allowance.
    #[default]
    Finite,
    /// An allowance equal to the maximum amount is treated as unlimited and
    /// is never decremented.
    UnlimitedAtMax,
}

/// Parameters fixed at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Display name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Number of decimals of the smallest denomination
    pub decimals: u8,
    /// Supply credited to the deployer, in whole units
    pub initial_supply: u64,
    /// Delegated spend policy
    pub allowance_policy: AllowancePolicy,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: "FORE Protocol".to_string(),
            symbol: "FORE".to_string(),
            decimals: 18,
            initial_supply: 1_000_000_000,
            allowance_policy: AllowancePolicy::Finite,
        }
    }
}

impl TokenConfig {
    /// Override the initial supply (whole units).
    pub fn with_initial_supply(mut self, initial_supply: u64) -> Self {
        self.initial_supply = initial_supply;
        self
    }

    /// Override the allowance policy.
    pub fn with_allowance_policy(mut self, policy: AllowancePolicy) -> Self {
        self.allowance_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TokenConfig::default();
        assert_eq!(config.name, "FORE Protocol");
        assert_eq!(config.symbol, "FORE");
        assert_eq!(config.decimals, 18);
        assert_eq!(config.initial_supply, 1_000_000_000);
        assert_eq!(config.allowance_policy, AllowancePolicy::Finite);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TokenConfig = toml::from_str(
            r#"
            initial_supply = 500
            allowance_policy = "unlimited_at_max"
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_supply, 500);
        assert_eq!(config.allowance_policy, AllowancePolicy::UnlimitedAtMax);
        assert_eq!(config.symbol, "FORE");
    }

    #[test]
    fn test_builder_overrides() {
        let config = TokenConfig::default()
            .with_initial_supply(42)
            .with_allowance_policy(AllowancePolicy::UnlimitedAtMax);
        assert_eq!(config.initial_supply, 42);
        assert_eq!(config.allowance_policy, AllowancePolicy::UnlimitedAtMax);
    }
}
