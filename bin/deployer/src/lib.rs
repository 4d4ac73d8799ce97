pub mod config;
pub mod snapshot;

use alloy_primitives::{utils::parse_units, Address, U256};
use crate::config::Config;
use ::config::NetworkConfig;
use eyre::{bail, eyre};
use ledger::{Ledger, SharedLedger};
use tracing::info;

/// A freshly created ledger and where it lives.
#[derive(Debug, Clone)]
pub struct Deployment {
    /// Contract address assigned to the ledger
    pub address: Address,
    /// Network the ledger was deployed on
    pub network: NetworkConfig,
    /// Handle to the ledger
    pub ledger: SharedLedger,
}

/// Run genesis for the configured token and assign it a contract address.
///
/// The address follows the CREATE rule: it is derived from the deployer and
/// its nonce, so redeploying with the same pair yields the same address.
pub fn deploy(config: &Config) -> eyre::Result<Deployment> {
    let network = config.network_config();
    let ledger = Ledger::genesis(&config.token, config.deployer)?;
    let address = config.deployer.create(config.deployer_nonce);

    info!(
        "{} token deployed to {} on {}",
        config.token.name,
        address,
        network.name()
    );

    Ok(Deployment {
        address,
        network,
        ledger: SharedLedger::new(ledger),
    })
}

/// Parse a CLI amount.
///
/// Whole-token amounts (`"1.5"`) are scaled by `decimals`; with `raw` the
/// value is taken as base units. Fractions finer than `decimals` are rejected
/// rather than rounded.
pub fn parse_amount(amount: &str, decimals: u8, raw: bool) -> eyre::Result<U256> {
    let amount = amount.trim();
    if amount.starts_with('-') {
        bail!("Amount must not be negative: {}", amount);
    }

    if raw {
        return amount
            .parse::<U256>()
            .map_err(|e| eyre!("Invalid amount {}: {}", amount, e));
    }

    if let Some((_, fraction)) = amount.split_once('.') {
        if fraction.len() > usize::from(decimals) {
            bail!(
                "Amount {} has more than {} decimal places",
                amount,
                decimals
            );
        }
    }

    let parsed =
        parse_units(amount, decimals).map_err(|e| eyre!("Invalid amount {}: {}", amount, e))?;
    Ok(parsed.get_absolute())
}
