//! Custody Deposits and Withdrawals
//!
//! Movement of tokens across the custody boundary outside of swaps.
//! Deposits are user-signed transfers into custody; withdrawals are
//! vault-signed transfers out, gated on the program upgrade authority.
//! Both run the custody binding checks before touching a balance.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    program_pack::Pack,
    pubkey::Pubkey,
};
use spl_token::{instruction as token_instruction, state::Account as TokenAccount};

use crate::constants::VAULT_SEED_PREFIX;
use crate::utils::binding::validate_custody_account;
use crate::utils::program_authority::validate_program_upgrade_authority;
use crate::utils::validation::{
    validate_and_deserialize_vault_state, validate_non_zero_amount, validate_signer,
};

/// Processes a deposit of user tokens into a custody account.
///
/// # Account Layout
/// 0. User (signer)
/// 1. Vault state PDA
/// 2. User token account (writable)
/// 3. Custody token account (writable)
/// 4. Token mint
/// 5. SPL Token program
pub fn process_deposit(program_id: &Pubkey, amount: u64, accounts: &[AccountInfo]) -> ProgramResult {
    msg!("Processing Deposit: {} tokens", amount);
    let account_info_iter = &mut accounts.iter();
    let user_account = next_account_info(account_info_iter)?;
    let vault_state_account = next_account_info(account_info_iter)?;
    let user_token_account = next_account_info(account_info_iter)?;
    let custody_account = next_account_info(account_info_iter)?;
    let mint_account = next_account_info(account_info_iter)?;
    let token_program_account = next_account_info(account_info_iter)?;

    validate_signer(user_account, "User")?;
    validate_non_zero_amount(amount, "Deposit")?;
    validate_and_deserialize_vault_state(vault_state_account, program_id)?;

    if *token_program_account.key != spl_token::id() {
        msg!("Invalid SPL Token program account");
        return Err(ProgramError::IncorrectProgramId);
    }

    // Binding check runs before any balance-affecting operation.
    validate_custody_account(
        custody_account,
        vault_state_account.key,
        mint_account.key,
        "Custody account",
    )?;

    let user_token_data = TokenAccount::unpack_from_slice(&user_token_account.data.borrow())?;
    if user_token_data.mint != *mint_account.key {
        msg!("User token account has wrong mint");
        return Err(ProgramError::InvalidAccountData);
    }
    if user_token_data.owner != *user_account.key {
        msg!("User token account has wrong owner");
        return Err(ProgramError::InvalidAccountData);
    }

    invoke(
        &token_instruction::transfer(
            token_program_account.key,
            user_token_account.key,
            custody_account.key,
            user_account.key,
            &[],
            amount,
        )?,
        &[
            user_token_account.clone(),
            custody_account.clone(),
            user_account.clone(),
            token_program_account.clone(),
        ],
    )?;

    msg!("Deposited {} tokens into custody {}", amount, custody_account.key);
    Ok(())
}

/// Processes a vault-signed withdrawal from a custody account.
///
/// # Account Layout
/// 0. Admin (signer)
/// 1. Vault state PDA
/// 2. Program data account (for upgrade authority validation)
/// 3. Custody token account (writable)
/// 4. Recipient token account (writable)
/// 5. Token mint
/// 6. SPL Token program
pub fn process_withdraw(
    program_id: &Pubkey,
    amount: u64,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("Processing Withdraw: {} tokens", amount);
    let account_info_iter = &mut accounts.iter();
    let admin_account = next_account_info(account_info_iter)?;
    let vault_state_account = next_account_info(account_info_iter)?;
    let program_data_account = next_account_info(account_info_iter)?;
    let custody_account = next_account_info(account_info_iter)?;
    let recipient_token_account = next_account_info(account_info_iter)?;
    let mint_account = next_account_info(account_info_iter)?;
    let token_program_account = next_account_info(account_info_iter)?;

    validate_signer(admin_account, "Admin")?;
    validate_non_zero_amount(amount, "Withdrawal")?;
    let vault_state = validate_and_deserialize_vault_state(vault_state_account, program_id)?;
    validate_program_upgrade_authority(program_id, program_data_account, admin_account)?;

    if *token_program_account.key != spl_token::id() {
        msg!("Invalid SPL Token program account");
        return Err(ProgramError::IncorrectProgramId);
    }

    let custody_data = validate_custody_account(
        custody_account,
        vault_state_account.key,
        mint_account.key,
        "Custody account",
    )?;
    if custody_data.amount < amount {
        msg!(
            "Insufficient custody balance: {} available, {} requested",
            custody_data.amount,
            amount
        );
        return Err(ProgramError::InsufficientFunds);
    }

    let vault_seeds = &[VAULT_SEED_PREFIX, &[vault_state.vault_bump_seed]];
    invoke_signed(
        &token_instruction::transfer(
            token_program_account.key,
            custody_account.key,
            recipient_token_account.key,
            vault_state_account.key,
            &[],
            amount,
        )?,
        &[
            custody_account.clone(),
            recipient_token_account.clone(),
            vault_state_account.clone(),
            token_program_account.clone(),
        ],
        &[vault_seeds],
    )?;

    msg!(
        "Withdrew {} tokens from custody {} to {}",
        amount,
        custody_account.key,
        recipient_token_account.key
    );
    Ok(())
}
