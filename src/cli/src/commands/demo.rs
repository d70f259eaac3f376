//! Demo command: creates a ledger and replays the reference deployment session.

use crate::accounts::signers;
use crate::commands::{join_observer, spawn_observer};
use crate::config::TokenConfig;
use crate::errors::CliError;
use ledger::{Address, Amount, LedgerEvent, TokenInfo};
use tracing::info;

/// Outcome of the demo session.
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Metadata and supply after the session
    pub info: TokenInfo,
    /// Balances of signers 0 and 1
    pub balances: Vec<(Address, Amount)>,
    /// Events observed during the session
    pub events: Vec<LedgerEvent>,
}

/// Runs the demo command.
///
/// Signer 0 deploys the ledger, mints 2 tokens to signer 1 and 1 token to itself,
/// then transfers 1 token to signer 1.
pub async fn run(config: &TokenConfig) -> Result<DemoReport, CliError> {
    let accounts = signers(2);
    let (deployer, acc1) = (accounts[0], accounts[1]);

    let mut ledger = config.build_ledger(deployer);
    info!("Ledger deployed by {}", deployer);
    let observer = spawn_observer(ledger.subscribe());

    ledger.mint(deployer, acc1, Amount::from(2u64))?;
    ledger.mint(deployer, deployer, Amount::from(1u64))?;
    ledger.transfer(deployer, acc1, Amount::from(1u64))?;

    let info = ledger.info();
    let balances = accounts
        .iter()
        .map(|account| (*account, ledger.balance_of(*account)))
        .collect();

    // Dropping the ledger closes the event channel and ends the observer.
    drop(ledger);
    let events = join_observer(observer).await?;

    Ok(DemoReport {
        info,
        balances,
        events,
    })
}
