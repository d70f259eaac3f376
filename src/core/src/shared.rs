//! A cloneable, lock-guarded handle to one ledger.

use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use crate::ledger::Ledger;
use crate::types::{Address, Amount, LedgerMsg, TokenInfo};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::UnboundedReceiver;

/// Serializes access to a [`Ledger`] shared between callers.
///
/// Each call holds the lock for the whole operation, so no caller can observe a
/// partially applied transfer.
#[derive(Clone, Debug)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Wraps `ledger` for shared use.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Locks the ledger for a sequence of calls that must not interleave.
    pub fn lock(&self) -> MutexGuard<'_, Ledger> {
        // Operations validate before mutating, so a poisoned guard still holds a
        // consistent ledger.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with shared read access.
    pub fn read<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&self.lock())
    }

    /// See [`Ledger::subscribe`].
    pub fn subscribe(&self) -> UnboundedReceiver<LedgerEvent> {
        self.lock().subscribe()
    }

    /// See [`Ledger::apply`].
    pub fn apply(&self, msg: &LedgerMsg) -> Result<(), LedgerError> {
        self.lock().apply(msg)
    }

    /// See [`Ledger::mint`].
    pub fn mint(
        &self,
        caller: Address,
        to: Address,
        amount: Amount,
    ) -> Result<Amount, LedgerError> {
        self.lock().mint(caller, to, amount)
    }

    /// See [`Ledger::transfer`].
    pub fn transfer(
        &self,
        caller: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.lock().transfer(caller, to, amount)
    }

    /// See [`Ledger::approve`].
    pub fn approve(
        &self,
        caller: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.lock().approve(caller, spender, amount)
    }

    /// See [`Ledger::transfer_from`].
    pub fn transfer_from(
        &self,
        caller: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.lock().transfer_from(caller, from, to, amount)
    }

    /// See [`Ledger::increase_allowance`].
    pub fn increase_allowance(
        &self,
        caller: Address,
        spender: Address,
        added: Amount,
    ) -> Result<(), LedgerError> {
        self.lock().increase_allowance(caller, spender, added)
    }

    /// See [`Ledger::decrease_allowance`].
    pub fn decrease_allowance(
        &self,
        caller: Address,
        spender: Address,
        subtracted: Amount,
    ) -> Result<(), LedgerError> {
        self.lock().decrease_allowance(caller, spender, subtracted)
    }

    /// See [`Ledger::balance_of`].
    pub fn balance_of(&self, account: Address) -> Amount {
        self.lock().balance_of(account)
    }

    /// See [`Ledger::allowance`].
    pub fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.lock().allowance(owner, spender)
    }

    /// See [`Ledger::total_supply`].
    pub fn total_supply(&self) -> Amount {
        self.lock().total_supply()
    }

    /// See [`Ledger::info`].
    pub fn info(&self) -> TokenInfo {
        self.lock().info()
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        Self::new(ledger)
    }
}
