//! Custody Account Creation
//!
//! Custody accounts are associated token accounts of the vault PDA, one
//! per mint. Creation is open to any funder: the resulting account can
//! only ever be spent through this program because its token-level owner
//! is the vault PDA.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    program_error::ProgramError,
    pubkey::Pubkey,
};
use spl_associated_token_account::instruction as associated_token_instruction;

use crate::utils::derivation::derive_custody_address;
use crate::utils::validation::{validate_and_deserialize_vault_state, validate_signer};

/// Processes custody account creation for a mint.
///
/// # Account Layout
/// 0. Funder (signer, writable)
/// 1. Vault state PDA
/// 2. Custody token account to create (writable)
/// 3. Token mint
/// 4. System program
/// 5. SPL Token program
/// 6. Associated Token Account program
pub fn process_create_custody(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    msg!("Processing CreateCustody");
    let account_info_iter = &mut accounts.iter();
    let funder_account = next_account_info(account_info_iter)?;
    let vault_state_account = next_account_info(account_info_iter)?;
    let custody_account = next_account_info(account_info_iter)?;
    let mint_account = next_account_info(account_info_iter)?;
    let system_program_account = next_account_info(account_info_iter)?;
    let token_program_account = next_account_info(account_info_iter)?;
    let associated_token_program_account = next_account_info(account_info_iter)?;

    validate_signer(funder_account, "Funder")?;
    validate_and_deserialize_vault_state(vault_state_account, program_id)?;

    if *token_program_account.key != spl_token::id() {
        msg!("Invalid SPL Token program account");
        return Err(ProgramError::IncorrectProgramId);
    }

    let expected_custody = derive_custody_address(vault_state_account.key, mint_account.key);
    if *custody_account.key != expected_custody {
        msg!(
            "Invalid custody address: expected {}, got {}",
            expected_custody,
            custody_account.key
        );
        return Err(ProgramError::InvalidArgument);
    }

    if !custody_account.data_is_empty() {
        msg!("Custody account already exists for mint {}", mint_account.key);
        return Ok(());
    }

    invoke(
        &associated_token_instruction::create_associated_token_account(
            funder_account.key,
            vault_state_account.key,
            mint_account.key,
            token_program_account.key,
        ),
        &[
            funder_account.clone(),
            custody_account.clone(),
            vault_state_account.clone(),
            mint_account.clone(),
            system_program_account.clone(),
            token_program_account.clone(),
            associated_token_program_account.clone(),
        ],
    )?;

    msg!(
        "Custody account {} created for mint {}",
        custody_account.key,
        mint_account.key
    );
    Ok(())
}
