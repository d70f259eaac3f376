//! Run command: applies a JSON script of ledger messages to a fresh ledger.

use crate::accounts::signer;
use crate::commands::{join_observer, spawn_observer};
use crate::config::TokenConfig;
use crate::errors::CliError;
use ledger::{Address, Amount, LedgerError, LedgerEvent, LedgerMsg, TokenInfo};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Result of applying one scripted message.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Position of the message in the script
    pub index: usize,
    /// The message as read from the script
    pub msg: LedgerMsg,
    /// What the ledger returned
    pub result: Result<(), LedgerError>,
}

/// Outcome of a script run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Metadata and supply after the run
    pub info: TokenInfo,
    /// One entry per applied message
    pub outcomes: Vec<Outcome>,
    /// Final balances, sorted by address
    pub holders: Vec<(Address, Amount)>,
    /// Events observed during the run
    pub events: Vec<LedgerEvent>,
}

impl RunReport {
    /// Number of messages the ledger rejected.
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Reads a script: a JSON array of ledger messages.
pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<LedgerMsg>, CliError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let msgs: Vec<LedgerMsg> = serde_json::from_str(&contents).map_err(|e| {
        CliError::ScriptError(format!("{}: {}", path.as_ref().display(), e))
    })?;
    debug!("Loaded {} messages from {}", msgs.len(), path.as_ref().display());
    Ok(msgs)
}

/// Runs the run command.
///
/// With `strict`, the first rejected message aborts the run with its error.
pub async fn run<P: AsRef<Path>>(
    config: &TokenConfig,
    script_path: P,
    strict: bool,
) -> Result<RunReport, CliError> {
    let msgs = load_script(script_path)?;
    apply_script(config, msgs, strict).await
}

/// Applies `msgs` in order to a ledger deployed by signer 0.
pub async fn apply_script(
    config: &TokenConfig,
    msgs: Vec<LedgerMsg>,
    strict: bool,
) -> Result<RunReport, CliError> {
    let mut ledger = config.build_ledger(signer(0));
    let observer = spawn_observer(ledger.subscribe());

    let mut outcomes = Vec::with_capacity(msgs.len());
    for (index, msg) in msgs.into_iter().enumerate() {
        let result = ledger.apply(&msg);
        if strict {
            if let Err(e) = &result {
                return Err(CliError::ScriptError(format!("message {} ({}): {}", index, msg, e)));
            }
        }
        outcomes.push(Outcome { index, msg, result });
    }

    let info = ledger.info();
    let mut holders = ledger.holders();
    holders.sort();
    info!(
        "Applied {} messages, total supply {}",
        outcomes.len(),
        info.total_supply
    );

    drop(ledger);
    let events = join_observer(observer).await?;

    Ok(RunReport {
        info,
        outcomes,
        holders,
        events,
    })
}
