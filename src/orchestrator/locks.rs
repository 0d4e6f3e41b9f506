//! Custody Lock Table
//!
//! Per-custody serialization for concurrent swap requests. The custody
//! account is the natural serialization point: a request exclusively
//! holds its input and output custody for the duration of its atomic
//! execution. A second request against a held custody fails fast with
//! `CustodyContention` (transient, safe to retry) instead of
//! interleaving. Requests over disjoint custody pairs proceed in
//! parallel.

use std::collections::HashSet;
use std::sync::Mutex;

use solana_program::pubkey::Pubkey;

use crate::error::VaultError;

/// Keyed exclusive-access table for custody accounts.
#[derive(Debug, Default)]
pub struct CustodyLockTable {
    locked: Mutex<HashSet<Pubkey>>,
}

impl CustodyLockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires all given custody keys atomically, or none of them.
    ///
    /// Keys are deduplicated and acquired as a set, so two requests
    /// racing over overlapping pairs can never deadlock: one wins all
    /// of its keys, the other observes contention.
    pub fn try_acquire(&self, keys: &[Pubkey]) -> Result<CustodyLockGuard<'_>, VaultError> {
        let mut unique: Vec<Pubkey> = keys.to_vec();
        unique.sort();
        unique.dedup();

        let mut locked = self.locked.lock().expect("custody lock table poisoned");
        if let Some(busy) = unique.iter().find(|key| locked.contains(key)) {
            return Err(VaultError::CustodyContention { account: *busy });
        }
        for key in &unique {
            locked.insert(*key);
        }
        Ok(CustodyLockGuard {
            table: self,
            keys: unique,
        })
    }

    fn release(&self, keys: &[Pubkey]) {
        let mut locked = self.locked.lock().expect("custody lock table poisoned");
        for key in keys {
            locked.remove(key);
        }
    }
}

/// Exclusive hold on a set of custody accounts; released on drop.
#[derive(Debug)]
pub struct CustodyLockGuard<'a> {
    table: &'a CustodyLockTable,
    keys: Vec<Pubkey>,
}

impl Drop for CustodyLockGuard<'_> {
    fn drop(&mut self) {
        self.table.release(&self.keys);
    }
}
