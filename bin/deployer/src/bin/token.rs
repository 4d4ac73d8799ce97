//! CLI tool to run single ledger operations against a snapshot.
//!
//! Each invocation loads the snapshot, applies at most one operation, logs the
//! emitted event and writes the snapshot back only if the operation committed.

use alloy_primitives::{utils::format_units, Address, U256};
use clap::{Parser, Subcommand};
use deployer::{parse_amount, snapshot};
use eyre::eyre;
use ledger::{Operation, SharedLedger};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "token")]
#[command(about = "Run single operations against a token ledger snapshot")]
struct Cli {
    /// Path to the ledger snapshot
    #[arg(short, long, default_value = "ledger.json")]
    state: PathBuf,

    /// Account issuing the operation
    #[arg(long, env = "LEDGER_CALLER")]
    caller: Option<Address>,

    /// Read amounts as base units instead of whole tokens
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show token metadata and total supply
    Info,

    /// Show the balance of an account
    BalanceOf { account: Address },

    /// Show the allowance an owner granted a spender
    Allowance { owner: Address, spender: Address },

    /// Transfer tokens from the caller
    Transfer { to: Address, amount: String },

    /// Set the caller's allowance for a spender
    Approve { spender: Address, amount: String },

    /// Spend the caller's allowance over another account
    TransferFrom {
        owner: Address,
        to: Address,
        amount: String,
    },

    /// Raise the caller's allowance for a spender
    IncreaseAllowance { spender: Address, amount: String },

    /// Lower the caller's allowance for a spender
    DecreaseAllowance { spender: Address, amount: String },

    /// Burn tokens held by the caller
    Burn { amount: String },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let ledger = snapshot::load(&cli.state)?;
    let decimals = ledger.decimals();
    let symbol = ledger.symbol().to_string();
    let format = |amount: U256| {
        format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
    };

    let caller = || cli.caller.ok_or_else(|| eyre!("--caller is required for this command"));
    let amount = |value: &str| parse_amount(value, decimals, cli.raw);

    let op = match &cli.command {
        Command::Info => {
            info!("Name: {}", ledger.name());
            info!("Symbol: {}", symbol);
            info!("Decimals: {}", decimals);
            info!("Total supply: {} {}", format(ledger.total_supply()), symbol);
            info!("Allowance policy: {:?}", ledger.allowance_policy());
            info!(
                "Holders: {}",
                ledger.balances().filter(|(_, balance)| !balance.is_zero()).count()
            );
            info!("Events: {}", ledger.events().len());
            return Ok(());
        }
        Command::BalanceOf { account } => {
            info!("{}: {} {}", account, format(ledger.balance_of(*account)), symbol);
            return Ok(());
        }
        Command::Allowance { owner, spender } => {
            let allowance = ledger.allowance(*owner, *spender);
            info!("{} -> {}: {} {}", owner, spender, format(allowance), symbol);
            return Ok(());
        }
        Command::Transfer { to, amount: value } => Operation::Transfer {
            from: caller()?,
            to: *to,
            amount: amount(value)?,
        },
        Command::Approve {
            spender,
            amount: value,
        } => Operation::Approve {
            owner: caller()?,
            spender: *spender,
            amount: amount(value)?,
        },
        Command::TransferFrom {
            owner,
            to,
            amount: value,
        } => Operation::TransferFrom {
            caller: caller()?,
            owner: *owner,
            to: *to,
            amount: amount(value)?,
        },
        Command::IncreaseAllowance {
            spender,
            amount: value,
        } => Operation::IncreaseAllowance {
            owner: caller()?,
            spender: *spender,
            added: amount(value)?,
        },
        Command::DecreaseAllowance {
            spender,
            amount: value,
        } => Operation::DecreaseAllowance {
            owner: caller()?,
            spender: *spender,
            subtracted: amount(value)?,
        },
        Command::Burn { amount: value } => Operation::Burn {
            holder: caller()?,
            amount: amount(value)?,
        },
    };

    info!("Running: {}", op.name());

    let shared = SharedLedger::new(ledger);
    let event = shared.submit(op).await?;
    snapshot::save(&shared.snapshot().await, &cli.state)?;

    info!(event = ?event, "Operation committed");
    Ok(())
}
