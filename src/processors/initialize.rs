//! Vault Bootstrap
//!
//! One-time creation of the vault state PDA. The PDA doubles as the
//! owner authority of every custody token account, so after this step
//! the program can sign for custody transfers with the recorded bump.

use borsh::BorshDeserialize;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction,
    sysvar::{rent::Rent, Sysvar},
};

use crate::constants::{MAX_ROUTERS, VAULT_SEED_PREFIX, VAULT_STATE_LEN};
use crate::error::VaultError;
use crate::state::VaultState;
use crate::utils::derivation::derive_vault_address;
use crate::utils::program_authority::validate_program_upgrade_authority;
use crate::utils::serialization::serialize_to_account;
use crate::utils::validation::validate_signer;

/// Processes the one-time vault initialization.
///
/// Creates the vault state account at the canonical PDA, records the
/// bump and the initial router allowlist, and pins the payer (validated
/// as the program upgrade authority) as admin. Re-initialization fails
/// with `VaultAlreadyInitialized`.
///
/// # Account Layout
/// 0. Admin/payer (signer, writable)
/// 1. Vault state PDA (writable)
/// 2. Program data account (for upgrade authority validation)
/// 3. System program
/// 4. Rent sysvar
pub fn process_initialize_vault(
    program_id: &Pubkey,
    routers: Vec<Pubkey>,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("Processing InitializeVault");
    let account_info_iter = &mut accounts.iter();
    let admin_account = next_account_info(account_info_iter)?;
    let vault_state_account = next_account_info(account_info_iter)?;
    let program_data_account = next_account_info(account_info_iter)?;
    let system_program_account = next_account_info(account_info_iter)?;
    let rent_sysvar_account = next_account_info(account_info_iter)?;
    let rent = &Rent::from_account_info(rent_sysvar_account)?;

    validate_signer(admin_account, "Admin")?;
    validate_program_upgrade_authority(program_id, program_data_account, admin_account)?;

    if routers.len() > MAX_ROUTERS {
        msg!(
            "Initial allowlist has {} routers, maximum is {}",
            routers.len(),
            MAX_ROUTERS
        );
        return Err(VaultError::RouterAllowlistFull { max: MAX_ROUTERS }.into());
    }

    let (expected_vault, vault_bump_seed) = derive_vault_address(program_id);
    if *vault_state_account.key != expected_vault {
        msg!(
            "Invalid vault PDA: expected {}, got {}",
            expected_vault,
            vault_state_account.key
        );
        return Err(VaultError::VaultDerivationFailed {
            program_id: *program_id,
            reason: format!("expected vault {}", expected_vault),
        }
        .into());
    }

    if !vault_state_account.data_is_empty() {
        // Either already bootstrapped or squatted; both are fatal.
        if let Ok(existing) = VaultState::deserialize(&mut &vault_state_account.data.borrow()[..]) {
            if existing.is_initialized {
                msg!("Vault already initialized");
                return Err(VaultError::VaultAlreadyInitialized.into());
            }
        }
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    let rent_for_vault = rent.minimum_balance(VAULT_STATE_LEN);
    let vault_seeds = &[VAULT_SEED_PREFIX, &[vault_bump_seed]];
    invoke_signed(
        &system_instruction::create_account(
            admin_account.key,
            vault_state_account.key,
            rent_for_vault,
            VAULT_STATE_LEN as u64,
            program_id,
        ),
        &[
            admin_account.clone(),
            vault_state_account.clone(),
            system_program_account.clone(),
        ],
        &[vault_seeds],
    )?;
    msg!("Vault state account created at {}", vault_state_account.key);

    let vault_state = VaultState::new(vault_bump_seed, *admin_account.key, routers);
    serialize_to_account(&vault_state, vault_state_account)?;

    msg!(
        "Vault initialized: bump {}, {} allowlisted router(s)",
        vault_bump_seed,
        vault_state.routers.len()
    );
    Ok(())
}
