//! Commands for the CLI.

pub mod demo;
pub mod run;

use crate::errors::CliError;
use colored::Colorize;
use ledger::LedgerEvent;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

/// Prints every event as it arrives and collects them until the ledger is dropped.
pub(crate) fn spawn_observer(
    mut events: UnboundedReceiver<LedgerEvent>,
) -> JoinHandle<Vec<LedgerEvent>> {
    tokio::spawn(async move {
        let mut seen = Vec::new();
        while let Some(event) = events.recv().await {
            println!("{} {}", "event".cyan(), event);
            seen.push(event);
        }
        seen
    })
}

/// Waits for an observer started by [`spawn_observer`].
pub(crate) async fn join_observer(
    handle: JoinHandle<Vec<LedgerEvent>>,
) -> Result<Vec<LedgerEvent>, CliError> {
    handle
        .await
        .map_err(|e| CliError::ObserverError(e.to_string()))
}
