//! Vault State
//!
//! The vault state account is the single persistent record of this
//! program: a PDA at `[b"vault"]` that is both the data account for the
//! router allowlist and the owner authority of every custody token
//! account. Custody accounts themselves are SPL associated token
//! accounts of this PDA and carry no program-defined data.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::constants::MAX_ROUTERS;
use crate::error::VaultError;

/// Persistent vault configuration and authority record.
///
/// Stored at the PDA derived from `[VAULT_SEED_PREFIX]`. The stored bump
/// lets every processor rebuild the signing seeds without a fresh
/// `find_program_address` sweep.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct VaultState {
    /// Whether the vault has been initialized
    pub is_initialized: bool,
    /// Canonical bump seed for the vault PDA
    pub vault_bump_seed: u8,
    /// Admin recorded at initialization (the program upgrade authority)
    pub admin: Pubkey,
    /// Allowlisted router program identities
    pub routers: Vec<Pubkey>,
}

impl VaultState {
    /// Creates a new vault state with the given bump, admin, and initial allowlist.
    pub fn new(vault_bump_seed: u8, admin: Pubkey, routers: Vec<Pubkey>) -> Self {
        Self {
            is_initialized: true,
            vault_bump_seed,
            admin,
            routers,
        }
    }

    /// Whether the given program identity is an allowlisted router.
    pub fn is_trusted_router(&self, router: &Pubkey) -> bool {
        self.routers.contains(router)
    }

    /// Adds a router to the allowlist.
    ///
    /// Adding an already-listed router is a no-op success so bootstrap
    /// scripts can be replayed safely.
    pub fn add_router(&mut self, router: Pubkey) -> Result<(), VaultError> {
        if self.routers.contains(&router) {
            return Ok(());
        }
        if self.routers.len() >= MAX_ROUTERS {
            return Err(VaultError::RouterAllowlistFull { max: MAX_ROUTERS });
        }
        self.routers.push(router);
        Ok(())
    }

    /// Removes a router from the allowlist.
    pub fn remove_router(&mut self, router: &Pubkey) -> Result<(), VaultError> {
        let before = self.routers.len();
        self.routers.retain(|r| r != router);
        if self.routers.len() == before {
            return Err(VaultError::RouterNotFound { router: *router });
        }
        Ok(())
    }
}
