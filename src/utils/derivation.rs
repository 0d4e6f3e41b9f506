//! Vault Address Derivation
//!
//! Deterministic derivation of the vault authority PDA from the fixed
//! seed and the program identity. These are pure functions over
//! `Pubkey` and carry no ledger dependency, so the derivation invariants
//! are unit-testable in isolation.

use solana_program::pubkey::{Pubkey, PubkeyError};

use crate::constants::VAULT_SEED_PREFIX;
use crate::error::VaultError;

/// Derives the canonical vault PDA and bump for a program identity.
///
/// Deterministic and idempotent: repeated calls with the same program id
/// always yield the same `(address, bump)`. The search starts at bump
/// 255 and walks down, so the returned bump is the canonical one. The
/// derived address is guaranteed off-curve and can therefore only ever
/// act as a passive authority, never as a transaction initiator.
pub fn derive_vault_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED_PREFIX], program_id)
}

/// Recomputes the vault address from a recorded bump and checks it
/// against a supplied address.
///
/// Used on every instruction after bootstrap: the stored bump makes the
/// check a single `create_program_address` instead of a full bump sweep.
/// A bump with no valid address, or an address mismatch, is a
/// configuration error and is never retried.
pub fn assert_vault_address(
    program_id: &Pubkey,
    supplied: &Pubkey,
    bump: u8,
) -> Result<Pubkey, VaultError> {
    let derived = Pubkey::create_program_address(&[VAULT_SEED_PREFIX, &[bump]], program_id)
        .map_err(|e: PubkeyError| VaultError::VaultDerivationFailed {
            program_id: *program_id,
            reason: format!("no valid vault address for bump {}: {}", bump, e),
        })?;
    if derived != *supplied {
        return Err(VaultError::VaultDerivationFailed {
            program_id: *program_id,
            reason: format!("expected vault {}, got {}", derived, supplied),
        });
    }
    Ok(derived)
}

/// Derives the custody token account address for a mint.
///
/// Custody accounts are the vault PDA's associated token accounts, so
/// the address is fully determined by `(vault, mint)`.
pub fn derive_custody_address(vault: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(vault, mint)
}
