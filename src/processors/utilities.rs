//! Vault Information Queries
//!
//! Read-only views over the vault state, surfaced through program logs
//! and return data so off-chain clients can simulate rather than parse
//! raw account bytes.

use borsh::BorshSerialize;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program::set_return_data,
    pubkey::Pubkey,
};

use crate::utils::validation::validate_and_deserialize_vault_state;

/// Logs the vault's configuration and returns the serialized state.
///
/// # Account Layout
/// 0. Vault state PDA
pub fn process_get_vault_info(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let vault_state_account = accounts
        .first()
        .ok_or(solana_program::program_error::ProgramError::NotEnoughAccountKeys)?;

    let vault_state = validate_and_deserialize_vault_state(vault_state_account, program_id)?;

    msg!("=== VAULT INFO ===");
    msg!("Vault address: {}", vault_state_account.key);
    msg!("Vault bump seed: {}", vault_state.vault_bump_seed);
    msg!("Admin: {}", vault_state.admin);
    msg!("Trusted routers: {}", vault_state.routers.len());
    for router in &vault_state.routers {
        msg!("  Router: {}", router);
    }

    let serialized = vault_state.try_to_vec()?;
    set_return_data(&serialized);
    Ok(())
}
