//! Notifications emitted by the ledger and the fan-out to observers.

use crate::types::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// An event emitted after a successful state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LedgerEvent {
    /// Tokens moved between accounts. Mints use the zero address as `from`.
    Transfer {
        /// The source account
        from: Address,
        /// The destination account
        to: Address,
        /// The amount moved
        value: Amount,
    },

    /// An allowance was set to `value`.
    Approval {
        /// The account granting the allowance
        owner: Address,
        /// The account allowed to spend
        spender: Address,
        /// The allowance after the change
        value: Amount,
    },
}

impl fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEvent::Transfer { from, to, value } => {
                write!(f, "Transfer({}, {}, {})", from, to, value)
            }
            LedgerEvent::Approval { owner, spender, value } => {
                write!(f, "Approval({}, {}, {})", owner, spender, value)
            }
        }
    }
}

/// Delivers events to every live subscriber without blocking the sender.
#[derive(Debug, Default)]
pub(crate) struct EventBus {
    subscribers: Vec<UnboundedSender<LedgerEvent>>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self) -> UnboundedReceiver<LedgerEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Sends `event` to all subscribers, dropping those whose receiver is gone.
    pub(crate) fn emit(&mut self, event: LedgerEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }
}
