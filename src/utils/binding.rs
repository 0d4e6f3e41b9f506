//! Custody Account Binding
//!
//! Binds the vault authority to its custody token accounts. Every
//! balance-affecting operation runs these checks first: the supplied
//! account must be the vault's associated token account for the expected
//! mint, and its token-level owner must be the vault PDA. Anything else
//! is an attack surface - a foreign token account smuggled into a swap
//! could redirect custody funds.

use solana_program::{
    account_info::AccountInfo, msg, program_error::ProgramError, program_pack::Pack,
    pubkey::Pubkey,
};
use spl_token::state::{Account as TokenAccount, AccountState};

use crate::error::VaultError;
use crate::utils::derivation::derive_custody_address;

/// Pure binding check on already-unpacked token account data.
///
/// Split out from the `AccountInfo` path so the binding rules are
/// testable without a ledger.
pub fn check_custody_binding(
    custody_key: &Pubkey,
    token_account: &TokenAccount,
    vault: &Pubkey,
    expected_mint: &Pubkey,
) -> Result<(), VaultError> {
    let expected_address = derive_custody_address(vault, expected_mint);
    if *custody_key != expected_address {
        return Err(VaultError::CustodyBindingFailed {
            account: *custody_key,
            reason: format!("expected custody address {}", expected_address),
        });
    }
    if token_account.owner != *vault {
        return Err(VaultError::CustodyBindingFailed {
            account: *custody_key,
            reason: format!(
                "custody authority is {}, expected vault {}",
                token_account.owner, vault
            ),
        });
    }
    if token_account.mint != *expected_mint {
        return Err(VaultError::CustodyBindingFailed {
            account: *custody_key,
            reason: format!(
                "custody mint is {}, expected {}",
                token_account.mint, expected_mint
            ),
        });
    }
    Ok(())
}

/// Unpacks a custody token account and validates its binding to the vault.
///
/// Returns the unpacked token account so callers can read the balance
/// without a second unpack.
pub fn validate_custody_account(
    custody_account: &AccountInfo,
    vault: &Pubkey,
    expected_mint: &Pubkey,
    account_name: &str,
) -> Result<TokenAccount, ProgramError> {
    if custody_account.owner != &spl_token::id() {
        msg!("{}: not owned by the SPL Token program", account_name);
        return Err(ProgramError::IncorrectProgramId);
    }
    if custody_account.data_len() == 0 {
        msg!("{}: account has no data", account_name);
        return Err(ProgramError::UninitializedAccount);
    }

    let token_account = TokenAccount::unpack_from_slice(&custody_account.data.borrow())
        .map_err(|_| {
            msg!("{}: failed to unpack token account data", account_name);
            ProgramError::InvalidAccountData
        })?;

    if token_account.state == AccountState::Frozen {
        msg!("{}: custody account is frozen", account_name);
        return Err(ProgramError::InvalidAccountData);
    }

    check_custody_binding(custody_account.key, &token_account, vault, expected_mint).map_err(
        |e| {
            msg!("{}: {}", account_name, e);
            ProgramError::from(e)
        },
    )?;

    Ok(token_account)
}

/// Re-reads a custody balance after a router invocation.
///
/// The binding was already validated before delegation and account keys
/// cannot change mid-transaction, so only the data is unpacked again.
pub fn reload_custody_balance(custody_account: &AccountInfo) -> Result<u64, ProgramError> {
    let token_account = TokenAccount::unpack_from_slice(&custody_account.data.borrow())?;
    Ok(token_account.amount)
}
