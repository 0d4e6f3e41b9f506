//! Input Validation Utilities
//!
//! Common validation logic used throughout the program: signer and
//! writability checks, amount checks, and secure loading of the vault
//! state PDA.

use borsh::BorshDeserialize;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::error::VaultError;
use crate::state::VaultState;
use crate::utils::derivation::assert_vault_address;

/// Validates that an account is a signer.
pub fn validate_signer(account: &AccountInfo, context: &str) -> ProgramResult {
    if !account.is_signer {
        msg!("{} must be a signer", context);
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

/// Validates that an account is writable.
pub fn validate_writable(account: &AccountInfo, context: &str) -> ProgramResult {
    if !account.is_writable {
        msg!("{} must be writable", context);
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

/// Validates that a token amount is non-zero.
pub fn validate_non_zero_amount(amount: u64, context: &str) -> ProgramResult {
    if amount == 0 {
        msg!("{} amount cannot be zero", context);
        return Err(VaultError::InvalidSwapAmount { amount }.into());
    }
    Ok(())
}

/// Loads and validates the vault state PDA.
///
/// Deserializes the state, requires it to be initialized, and recomputes
/// the PDA from the stored bump so a forged account at a different
/// address can never stand in for the vault. Every processor that
/// touches custody goes through this.
pub fn validate_and_deserialize_vault_state(
    vault_state_account: &AccountInfo,
    program_id: &Pubkey,
) -> Result<VaultState, ProgramError> {
    if vault_state_account.owner != program_id {
        msg!("Vault state account is not owned by this program");
        return Err(ProgramError::IncorrectProgramId);
    }

    // The account is allocated at the fixed maximum size; deserialize
    // from a shrinking slice so trailing padding is tolerated.
    let vault_state = VaultState::deserialize(&mut &vault_state_account.data.borrow()[..])
        .map_err(|_| ProgramError::from(VaultError::VaultNotInitialized))?;
    if !vault_state.is_initialized {
        msg!("Vault is not initialized");
        return Err(VaultError::VaultNotInitialized.into());
    }

    assert_vault_address(
        program_id,
        vault_state_account.key,
        vault_state.vault_bump_seed,
    )
    .map_err(|e| {
        msg!("{}", e);
        ProgramError::from(e)
    })?;

    Ok(vault_state)
}
