//! Router Allowlist Management
//!
//! Admin-gated maintenance of the vault's trusted router set. The
//! allowlist is the trust boundary for delegated invocations: a router
//! identity absent from it can never be handed the vault's signature.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::utils::program_authority::validate_program_upgrade_authority;
use crate::utils::serialization::serialize_to_account;
use crate::utils::validation::{validate_and_deserialize_vault_state, validate_signer};

/// Processes adding a router program to the allowlist.
///
/// # Account Layout
/// 0. Admin (signer)
/// 1. Vault state PDA (writable)
/// 2. Program data account (for upgrade authority validation)
pub fn process_add_router(
    program_id: &Pubkey,
    router: Pubkey,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("Processing AddRouter: {}", router);
    let account_info_iter = &mut accounts.iter();
    let admin_account = next_account_info(account_info_iter)?;
    let vault_state_account = next_account_info(account_info_iter)?;
    let program_data_account = next_account_info(account_info_iter)?;

    validate_signer(admin_account, "Admin")?;
    let mut vault_state = validate_and_deserialize_vault_state(vault_state_account, program_id)?;
    validate_program_upgrade_authority(program_id, program_data_account, admin_account)?;

    vault_state.add_router(router).map_err(|e| {
        msg!("{}", e);
        solana_program::program_error::ProgramError::from(e)
    })?;
    serialize_to_account(&vault_state, vault_state_account)?;

    msg!("Router {} allowlisted ({} total)", router, vault_state.routers.len());
    Ok(())
}

/// Processes removing a router program from the allowlist.
///
/// Same account layout as `process_add_router`.
pub fn process_remove_router(
    program_id: &Pubkey,
    router: Pubkey,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("Processing RemoveRouter: {}", router);
    let account_info_iter = &mut accounts.iter();
    let admin_account = next_account_info(account_info_iter)?;
    let vault_state_account = next_account_info(account_info_iter)?;
    let program_data_account = next_account_info(account_info_iter)?;

    validate_signer(admin_account, "Admin")?;
    let mut vault_state = validate_and_deserialize_vault_state(vault_state_account, program_id)?;
    validate_program_upgrade_authority(program_id, program_data_account, admin_account)?;

    vault_state.remove_router(&router).map_err(|e| {
        msg!("{}", e);
        solana_program::program_error::ProgramError::from(e)
    })?;
    serialize_to_account(&vault_state, vault_state_account)?;

    msg!("Router {} removed ({} remain)", router, vault_state.routers.len());
    Ok(())
}
