//! Error types for the ledger crate.

use crate::types::{Address, Amount};
use thiserror::Error;

/// Errors that can occur when applying an operation to the ledger.
///
/// A rejected operation never changes ledger state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Error when the caller lacks the privilege for the operation.
    #[error("Unauthorized: {caller} is not the owner")]
    Unauthorized {
        /// The rejected caller
        caller: Address,
    },

    /// Error when the zero address is used as a source or approving owner.
    #[error("Invalid sender: the zero address cannot send or approve")]
    InvalidSender,

    /// Error when the zero address is used as a recipient.
    #[error("Invalid recipient: cannot transfer or mint to the zero address")]
    InvalidRecipient,

    /// Error when the zero address is used as a spender.
    #[error("Invalid spender: cannot approve the zero address")]
    InvalidSpender,

    /// Error when an account does not hold enough tokens.
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// The required balance
        required: Amount,
        /// The available balance
        available: Amount,
    },

    /// Error when a spender's allowance does not cover the amount.
    #[error("Insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance {
        /// The required allowance
        required: Amount,
        /// The available allowance
        available: Amount,
    },

    /// Error when an allowance would be decreased below zero.
    #[error("Allowance underflow: cannot subtract {requested} from {available}")]
    AllowanceUnderflow {
        /// The amount to subtract
        requested: Amount,
        /// The current allowance
        available: Amount,
    },

    /// Error when an amount would exceed the 256-bit range.
    #[error("Amount overflow")]
    Overflow,
}

impl LedgerError {
    /// Returns a short, stable name for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerError::Unauthorized { .. } => "Unauthorized",
            LedgerError::InvalidSender => "InvalidSender",
            LedgerError::InvalidRecipient => "InvalidRecipient",
            LedgerError::InvalidSpender => "InvalidSpender",
            LedgerError::InsufficientBalance { .. } => "InsufficientBalance",
            LedgerError::InsufficientAllowance { .. } => "InsufficientAllowance",
            LedgerError::AllowanceUnderflow { .. } => "AllowanceUnderflow",
            LedgerError::Overflow => "Overflow",
        }
    }
}
