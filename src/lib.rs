//! # CPI Swap Vault Program
//!
//! A Solana program that holds token custody under a single program-owned
//! vault PDA and delegates swap execution to allowlisted router programs
//! via CPI, while enforcing post-conditions on custody balances.
//!
//! ## Architecture
//! - One vault PDA at seed `[b"vault"]` holds the state and acts as the
//!   token-level owner of every custody account.
//! - Custody accounts are the vault's associated token accounts, one per
//!   mint, derived rather than stored.
//! - Swaps hand an opaque payload to an allowlisted router with the
//!   vault's signature extended for exactly one invocation; settlement
//!   is decided solely by the custody balance deltas.

pub mod constants;
pub mod error;
pub mod orchestrator;
pub mod processors;
pub mod state;
pub mod types;
pub mod utils;

pub mod client_sdk;

pub use constants::*;
pub use error::VaultError;
pub use state::VaultState;
pub use types::*;

use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey,
};

pub use crate::types::instructions::VaultInstruction;
use borsh::BorshDeserialize;

solana_program::declare_id!("Bfj3LC384wW84rY73Xm5UvSaJEhKfNh1cJePirpm61a2");

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

/// Deserializes the instruction and routes it to its processor.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = VaultInstruction::try_from_slice(instruction_data).map_err(|e| {
        msg!("Failed to deserialize instruction data: {}", e);
        solana_program::program_error::ProgramError::InvalidInstructionData
    })?;

    match instruction {
        VaultInstruction::InitializeVault { routers } => {
            processors::initialize::process_initialize_vault(program_id, routers, accounts)
        }
        VaultInstruction::CreateCustody => {
            processors::custody::process_create_custody(program_id, accounts)
        }
        VaultInstruction::Deposit { amount } => {
            processors::liquidity::process_deposit(program_id, amount, accounts)
        }
        VaultInstruction::Withdraw { amount } => {
            processors::liquidity::process_withdraw(program_id, amount, accounts)
        }
        VaultInstruction::Swap {
            input_mint,
            output_mint,
            input_amount,
            minimum_output_amount,
            router_payload,
        } => processors::swap::process_swap(
            program_id,
            input_mint,
            output_mint,
            input_amount,
            minimum_output_amount,
            router_payload,
            accounts,
        ),
        VaultInstruction::AddRouter { router } => {
            processors::routers::process_add_router(program_id, router, accounts)
        }
        VaultInstruction::RemoveRouter { router } => {
            processors::routers::process_remove_router(program_id, router, accounts)
        }
        VaultInstruction::GetVaultInfo => {
            processors::utilities::process_get_vault_info(program_id, accounts)
        }
    }
}
