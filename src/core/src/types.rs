//! Core types for the token ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte account identifier. [`Address::ZERO`] is reserved.
pub use alloy_primitives::Address;

/// Token amount, represented as a 256-bit unsigned integer.
pub type Amount = alloy_primitives::U256;

/// Read-only snapshot of the token metadata and supply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// The token name
    pub name: String,
    /// The token symbol
    pub symbol: String,
    /// Number of decimals used for display
    pub decimals: u8,
    /// The account allowed to mint
    pub owner: Address,
    /// The total supply of the token
    pub total_supply: Amount,
}

/// Mutating operations on the ledger, each carrying the identity of its caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LedgerMsg {
    /// Mint new tokens (only the owner may send this).
    Mint {
        /// The caller's address
        caller: Address,
        /// The recipient's address
        to: Address,
        /// The amount to mint
        amount: Amount,
    },

    /// Transfer tokens from the caller to another account.
    Transfer {
        /// The sender's address
        caller: Address,
        /// The recipient's address
        to: Address,
        /// The amount to transfer
        amount: Amount,
    },

    /// Set the caller's allowance for a spender.
    Approve {
        /// The owner's address
        caller: Address,
        /// The spender's address
        spender: Address,
        /// The new allowance
        amount: Amount,
    },

    /// Spend an allowance the `from` account granted to the caller.
    TransferFrom {
        /// The spender's address
        caller: Address,
        /// The account tokens are taken from
        from: Address,
        /// The recipient's address
        to: Address,
        /// The amount to transfer
        amount: Amount,
    },

    /// Raise the caller's allowance for a spender.
    IncreaseAllowance {
        /// The owner's address
        caller: Address,
        /// The spender's address
        spender: Address,
        /// The amount to add
        amount: Amount,
    },

    /// Lower the caller's allowance for a spender.
    DecreaseAllowance {
        /// The owner's address
        caller: Address,
        /// The spender's address
        spender: Address,
        /// The amount to subtract
        amount: Amount,
    },
}

impl LedgerMsg {
    /// Returns the identity the message is submitted under.
    pub fn caller(&self) -> Address {
        match self {
            LedgerMsg::Mint { caller, .. }
            | LedgerMsg::Transfer { caller, .. }
            | LedgerMsg::Approve { caller, .. }
            | LedgerMsg::TransferFrom { caller, .. }
            | LedgerMsg::IncreaseAllowance { caller, .. }
            | LedgerMsg::DecreaseAllowance { caller, .. } => *caller,
        }
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token {{ name: {}, symbol: {}, decimals: {}, owner: {}, total_supply: {} }}",
            self.name, self.symbol, self.decimals, self.owner, self.total_supply
        )
    }
}

impl fmt::Display for LedgerMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerMsg::Mint { caller, to, amount } => {
                write!(f, "Mint {{ caller: {}, to: {}, amount: {} }}", caller, to, amount)
            }
            LedgerMsg::Transfer { caller, to, amount } => {
                write!(f, "Transfer {{ caller: {}, to: {}, amount: {} }}", caller, to, amount)
            }
            LedgerMsg::Approve { caller, spender, amount } => {
                write!(
                    f,
                    "Approve {{ caller: {}, spender: {}, amount: {} }}",
                    caller, spender, amount
                )
            }
            LedgerMsg::TransferFrom { caller, from, to, amount } => {
                write!(
                    f,
                    "TransferFrom {{ caller: {}, from: {}, to: {}, amount: {} }}",
                    caller, from, to, amount
                )
            }
            LedgerMsg::IncreaseAllowance { caller, spender, amount } => {
                write!(
                    f,
                    "IncreaseAllowance {{ caller: {}, spender: {}, amount: {} }}",
                    caller, spender, amount
                )
            }
            LedgerMsg::DecreaseAllowance { caller, spender, amount } => {
                write!(
                    f,
                    "DecreaseAllowance {{ caller: {}, spender: {}, amount: {} }}",
                    caller, spender, amount
                )
            }
        }
    }
}
