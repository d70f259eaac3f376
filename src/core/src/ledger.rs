//! Balance and allowance ledger for a single fungible token.

use crate::errors::LedgerError;
use crate::events::{EventBus, LedgerEvent};
use crate::types::{Address, Amount, LedgerMsg, TokenInfo};
use std::collections::HashMap;
use std::fmt;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

/// Decimals used by tokens that do not configure their own.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Balances, allowances and supply of one token.
///
/// Every mutating operation takes the caller's identity explicitly, validates all
/// of its preconditions before touching state, and emits its events only once the
/// change is applied. A rejected operation leaves the ledger untouched.
pub struct Ledger {
    /// The token name
    name: String,
    /// The token symbol
    symbol: String,
    /// Number of decimals used for display
    decimals: u8,
    /// The only account allowed to mint
    owner: Address,
    /// Sum of all balances
    total_supply: Amount,
    /// Balances by account; absent means zero
    balances: HashMap<Address, Amount>,
    /// Allowances by (owner, spender) pair; absent means zero
    allowances: HashMap<(Address, Address), Amount>,
    /// Observers of emitted events
    events: EventBus,
}

impl Ledger {
    /// Creates an empty ledger owned by `owner`.
    pub fn new(
        owner: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Self {
        let ledger = Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            owner,
            total_supply: Amount::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            events: EventBus::default(),
        };
        info!("Created ledger for {} ({}) owned by {}", ledger.name, ledger.symbol, owner);
        ledger
    }

    /// Registers a new observer. Events are delivered in emission order.
    pub fn subscribe(&mut self) -> UnboundedReceiver<LedgerEvent> {
        self.events.subscribe()
    }

    /// Returns the token name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the token symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the number of display decimals.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Returns the account allowed to mint.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Returns true if `account` is the owner.
    pub fn is_owner(&self, account: Address) -> bool {
        self.owner == account
    }

    /// Returns the total supply.
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Returns the balance of `account`, zero if it never held tokens.
    pub fn balance_of(&self, account: Address) -> Amount {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// Returns how much `spender` may still take from `owner`.
    pub fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Returns every account with a balance entry, in no particular order.
    pub fn holders(&self) -> Vec<(Address, Amount)> {
        self.balances.iter().map(|(addr, bal)| (*addr, *bal)).collect()
    }

    /// Returns a snapshot of the metadata and supply.
    pub fn info(&self) -> TokenInfo {
        TokenInfo {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
            owner: self.owner,
            total_supply: self.total_supply,
        }
    }

    /// Mints `amount` new tokens to `to`.
    ///
    /// # Returns
    ///
    /// `Ok(new_supply)` if the mint was successful, `Err(LedgerError)` otherwise
    pub fn mint(
        &mut self,
        caller: Address,
        to: Address,
        amount: Amount,
    ) -> Result<Amount, LedgerError> {
        if !self.is_owner(caller) {
            return Err(LedgerError::Unauthorized { caller });
        }
        if to == Address::ZERO {
            return Err(LedgerError::InvalidRecipient);
        }

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        // Bounded by the supply, so this cannot fail once the supply check passed.
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.total_supply = new_supply;
        self.set_balance(to, new_balance);
        debug!("Minted {} to {}, total supply {}", amount, to, new_supply);

        self.events.emit(LedgerEvent::Transfer {
            from: Address::ZERO,
            to,
            value: amount,
        });
        Ok(new_supply)
    }

    /// Moves `amount` tokens from the caller to `to`.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if caller == Address::ZERO {
            return Err(LedgerError::InvalidSender);
        }
        if to == Address::ZERO {
            return Err(LedgerError::InvalidRecipient);
        }

        let (from_after, to_after) = self.prepare_move(caller, to, amount)?;
        self.set_balance(caller, from_after);
        self.set_balance(to, to_after);
        debug!("Transferred {} from {} to {}", amount, caller, to);

        self.events.emit(LedgerEvent::Transfer {
            from: caller,
            to,
            value: amount,
        });
        Ok(())
    }

    /// Sets the caller's allowance for `spender` to exactly `amount`.
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.set_allowance(caller, spender, amount)
    }

    /// Moves `amount` tokens from `from` to `to`, spending the allowance `from`
    /// granted to the caller.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if to == Address::ZERO {
            return Err(LedgerError::InvalidRecipient);
        }

        let available = self.allowance(from, caller);
        if available < amount {
            return Err(LedgerError::InsufficientAllowance {
                required: amount,
                available,
            });
        }
        if from == Address::ZERO {
            return Err(LedgerError::InvalidSender);
        }

        let (from_after, to_after) = self.prepare_move(from, to, amount)?;
        self.store_allowance(from, caller, available - amount);
        self.set_balance(from, from_after);
        self.set_balance(to, to_after);
        debug!(
            "{} transferred {} from {} to {}, allowance left {}",
            caller,
            amount,
            from,
            to,
            available - amount
        );

        self.events.emit(LedgerEvent::Transfer {
            from,
            to,
            value: amount,
        });
        Ok(())
    }

    /// Adds `added` to the caller's allowance for `spender`.
    pub fn increase_allowance(
        &mut self,
        caller: Address,
        spender: Address,
        added: Amount,
    ) -> Result<(), LedgerError> {
        let new_allowance = self
            .allowance(caller, spender)
            .checked_add(added)
            .ok_or(LedgerError::Overflow)?;
        self.set_allowance(caller, spender, new_allowance)
    }

    /// Subtracts `subtracted` from the caller's allowance for `spender`.
    pub fn decrease_allowance(
        &mut self,
        caller: Address,
        spender: Address,
        subtracted: Amount,
    ) -> Result<(), LedgerError> {
        let current = self.allowance(caller, spender);
        let new_allowance = current
            .checked_sub(subtracted)
            .ok_or(LedgerError::AllowanceUnderflow {
                requested: subtracted,
                available: current,
            })?;
        self.set_allowance(caller, spender, new_allowance)
    }

    /// Applies a message to the ledger.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the message was applied successfully, `Err(LedgerError)` otherwise
    pub fn apply(&mut self, msg: &LedgerMsg) -> Result<(), LedgerError> {
        let result = match *msg {
            LedgerMsg::Mint { caller, to, amount } => self.mint(caller, to, amount).map(|_| ()),
            LedgerMsg::Transfer { caller, to, amount } => self.transfer(caller, to, amount),
            LedgerMsg::Approve { caller, spender, amount } => self.approve(caller, spender, amount),
            LedgerMsg::TransferFrom { caller, from, to, amount } => {
                self.transfer_from(caller, from, to, amount)
            }
            LedgerMsg::IncreaseAllowance { caller, spender, amount } => {
                self.increase_allowance(caller, spender, amount)
            }
            LedgerMsg::DecreaseAllowance { caller, spender, amount } => {
                self.decrease_allowance(caller, spender, amount)
            }
        };

        if let Err(e) = &result {
            warn!("Rejected {}: {}", msg, e);
        }
        result
    }

    /// Computes the balances of `from` and `to` after moving `amount`.
    fn prepare_move(
        &self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(Amount, Amount), LedgerError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        if from == to {
            return Ok((available, available));
        }

        let to_after = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok((available - amount, to_after))
    }

    /// Validates and stores an allowance, then emits `Approval`.
    fn set_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if owner == Address::ZERO {
            return Err(LedgerError::InvalidSender);
        }
        if spender == Address::ZERO {
            return Err(LedgerError::InvalidSpender);
        }

        self.store_allowance(owner, spender, amount);
        debug!("Allowance of {} for {} set to {}", owner, spender, amount);

        self.events.emit(LedgerEvent::Approval {
            owner,
            spender,
            value: amount,
        });
        Ok(())
    }

    fn store_allowance(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    // Accounts only get an entry once they hold a nonzero balance.
    fn set_balance(&mut self, account: Address, amount: Amount) {
        if amount.is_zero() && !self.balances.contains_key(&account) {
            return;
        }
        self.balances.insert(account, amount);
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("symbol", &self.symbol)
            .field("owner", &self.owner)
            .field("total_supply", &self.total_supply)
            .field("accounts", &self.balances.len())
            .field("subscribers", &self.events.len())
            .finish()
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ledger {{ token: {}, total_supply: {}, accounts: {} }}",
            self.symbol,
            self.total_supply,
            self.balances.len()
        )
    }
}
