//! Serialization Utilities
//!
//! Safe serialization of program state into account data. State is
//! serialized to a temporary buffer first and copied into the account
//! atomically, so a partial write can never be observed even if
//! serialization fails midway.

use borsh::BorshSerialize;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
};

/// Serializes data into an account through a temporary buffer.
pub fn serialize_to_account<T: BorshSerialize>(data: &T, account: &AccountInfo) -> ProgramResult {
    let serialized_data = data.try_to_vec()?;

    if serialized_data.len() > account.data_len() {
        msg!(
            "Serialized data size {} exceeds account size {}",
            serialized_data.len(),
            account.data_len()
        );
        return Err(ProgramError::AccountDataTooSmall);
    }

    let mut account_data = account.data.borrow_mut();
    account_data[..serialized_data.len()].copy_from_slice(&serialized_data);
    Ok(())
}
