//! Balance and allowance ledger for a single fungible token.
//!
//! This crate provides the token state machine: minting by the owner, transfers,
//! approvals and delegated transfers, together with the events observers consume
//! and a lock-guarded handle for sharing one ledger between callers.

pub mod errors;
pub mod events;
pub mod ledger;
pub mod shared;
pub mod types;

// Re-export commonly used types
pub use errors::LedgerError;
pub use events::LedgerEvent;
pub use ledger::{Ledger, DEFAULT_DECIMALS};
pub use shared::SharedLedger;
pub use types::{Address, Amount, LedgerMsg, TokenInfo};
