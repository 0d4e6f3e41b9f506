//! Custody Balance Journal
//!
//! Staged, all-or-nothing balance effects over a committed custody
//! ledger. A journal copies balances on first read, accumulates every
//! mutation in the staging area, and publishes nothing until `commit`.
//! Dropping a journal without committing discards all staged effects,
//! so a concurrent observer only ever sees the pre-request state or the
//! fully-settled state, never a partial delta.

use std::collections::HashMap;
use std::sync::Mutex;

use solana_program::pubkey::Pubkey;

use crate::error::VaultError;

/// Committed custody balances, keyed by custody account address.
#[derive(Debug, Default)]
pub struct CustodyLedger {
    balances: Mutex<HashMap<Pubkey, u64>>,
}

impl CustodyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed balance of a custody account (zero if never funded).
    pub fn balance_of(&self, custody: &Pubkey) -> u64 {
        self.balances
            .lock()
            .expect("custody ledger poisoned")
            .get(custody)
            .copied()
            .unwrap_or(0)
    }

    /// Sets a committed balance directly. Bootstrap path only.
    pub fn set_balance(&self, custody: Pubkey, amount: u64) {
        self.balances
            .lock()
            .expect("custody ledger poisoned")
            .insert(custody, amount);
    }

    /// Adds to a committed balance under a single lock hold. Deposit path.
    pub fn credit_balance(&self, custody: Pubkey, amount: u64) {
        let mut balances = self.balances.lock().expect("custody ledger poisoned");
        let entry = balances.entry(custody).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Opens a journal over this ledger.
    pub fn begin(&self) -> CustodyJournal<'_> {
        CustodyJournal {
            ledger: self,
            base: HashMap::new(),
            staged: HashMap::new(),
        }
    }

    fn commit_entries(&self, entries: &HashMap<Pubkey, u64>) {
        let mut balances = self.balances.lock().expect("custody ledger poisoned");
        for (key, value) in entries {
            balances.insert(*key, *value);
        }
    }
}

/// A staged view of the ledger for one atomic request.
///
/// Balances are copied on first access; `base` keeps the pre-request
/// value of every touched key so post-condition checks can compute
/// deltas for all of them, including accounts the router touched that
/// the request never declared.
pub struct CustodyJournal<'a> {
    ledger: &'a CustodyLedger,
    base: HashMap<Pubkey, u64>,
    staged: HashMap<Pubkey, u64>,
}

impl<'a> CustodyJournal<'a> {
    /// Staged balance of a custody account, loading it from the ledger
    /// on first access.
    pub fn balance(&mut self, custody: &Pubkey) -> u64 {
        let committed = self.ledger.balance_of(custody);
        self.base.entry(*custody).or_insert(committed);
        *self.staged.entry(*custody).or_insert(committed)
    }

    /// Pre-request balance of a touched custody account.
    pub fn base_balance(&self, custody: &Pubkey) -> Option<u64> {
        self.base.get(custody).copied()
    }

    /// Credits a custody account in the staging area.
    pub fn credit(&mut self, custody: &Pubkey, amount: u64) -> Result<(), VaultError> {
        let current = self.balance(custody);
        let next = current
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        self.staged.insert(*custody, next);
        Ok(())
    }

    /// Debits a custody account in the staging area.
    pub fn debit(&mut self, custody: &Pubkey, amount: u64) -> Result<(), VaultError> {
        let current = self.balance(custody);
        let next = current
            .checked_sub(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        self.staged.insert(*custody, next);
        Ok(())
    }

    /// Every custody key this journal has touched (read or written).
    pub fn touched_keys(&self) -> Vec<Pubkey> {
        self.base.keys().copied().collect()
    }

    /// Whether a touched key's staged value differs from its pre-request value.
    pub fn has_changed(&self, custody: &Pubkey) -> bool {
        match (self.base.get(custody), self.staged.get(custody)) {
            (Some(base), Some(staged)) => base != staged,
            _ => false,
        }
    }

    /// Publishes all staged effects to the ledger.
    ///
    /// Unchanged entries are skipped so a stale copy-on-read value can
    /// never clobber a key this request only observed.
    pub fn commit(self) {
        let changed: HashMap<Pubkey, u64> = self
            .staged
            .iter()
            .filter(|(key, value)| self.base.get(*key) != Some(*value))
            .map(|(key, value)| (*key, *value))
            .collect();
        self.ledger.commit_entries(&changed);
    }

    // Dropping without commit discards all staged effects.
}
