/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # CPI Swap Vault - Client SDK
//!
//! This module provides a high-level client SDK for interacting with the CPI
//! Swap Vault program. It simplifies deriving the vault and custody addresses
//! and building instructions for every vault operation.
//!
//! ## Features
//! - Address derivation for the vault PDA and per-mint custody accounts
//! - Instruction building for all vault operations
//! - Error handling and validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cpi_swap_vault::client_sdk::VaultClient;
//! use solana_program::pubkey::Pubkey;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let program_id = Pubkey::new_unique();
//! let mint = Pubkey::new_unique();
//! let payer = Pubkey::new_unique();
//!
//! let client = VaultClient::new(program_id);
//!
//! let (vault, _bump) = client.vault_address();
//! let custody = client.custody_address(&mint);
//!
//! let init = client.initialize_vault(&payer, vec![])?;
//! let create = client.create_custody(&payer, &mint)?;
//! # Ok(())
//! # }
//! ```

use borsh::BorshSerialize;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
    sysvar::rent,
};

use crate::types::instructions::VaultInstruction;
use crate::utils::derivation::{derive_custody_address, derive_vault_address};
use crate::utils::program_authority::get_program_data_address;

/// Errors that can occur when using the vault client
#[derive(Debug)]
pub enum VaultClientError {
    /// Error during instruction serialization
    SerializationError,
}

impl From<std::io::Error> for VaultClientError {
    fn from(_error: std::io::Error) -> Self {
        Self::SerializationError
    }
}

impl std::fmt::Display for VaultClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaultClientError::SerializationError => {
                write!(f, "Failed to serialize instruction data")
            }
        }
    }
}

impl std::error::Error for VaultClientError {}

/// High-level client for the CPI Swap Vault program
///
/// Derives addresses and builds instructions; it never signs or sends
/// transactions itself.
#[derive(Debug, Clone)]
pub struct VaultClient {
    /// The deployed vault program ID
    pub program_id: Pubkey,
}

impl VaultClient {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    /// The vault state PDA and its canonical bump seed.
    pub fn vault_address(&self) -> (Pubkey, u8) {
        derive_vault_address(&self.program_id)
    }

    /// The custody account for a mint - the vault's associated token
    /// account, derived rather than stored.
    pub fn custody_address(&self, mint: &Pubkey) -> Pubkey {
        let (vault, _) = self.vault_address();
        derive_custody_address(&vault, mint)
    }

    /// Builds the one-time vault bootstrap instruction.
    pub fn initialize_vault(
        &self,
        payer: &Pubkey,
        routers: Vec<Pubkey>,
    ) -> Result<Instruction, VaultClientError> {
        let (vault, _) = self.vault_address();
        let data = VaultInstruction::InitializeVault { routers }.try_to_vec()?;
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(*payer, true),
                AccountMeta::new(vault, false),
                AccountMeta::new_readonly(get_program_data_address(&self.program_id), false),
                AccountMeta::new_readonly(system_program::id(), false),
                AccountMeta::new_readonly(rent::id(), false),
            ],
            data,
        })
    }

    /// Builds the custody creation instruction for a mint.
    pub fn create_custody(
        &self,
        funder: &Pubkey,
        mint: &Pubkey,
    ) -> Result<Instruction, VaultClientError> {
        let (vault, _) = self.vault_address();
        let data = VaultInstruction::CreateCustody.try_to_vec()?;
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(*funder, true),
                AccountMeta::new_readonly(vault, false),
                AccountMeta::new(self.custody_address(mint), false),
                AccountMeta::new_readonly(*mint, false),
                AccountMeta::new_readonly(system_program::id(), false),
                AccountMeta::new_readonly(spl_token::id(), false),
                AccountMeta::new_readonly(spl_associated_token_account::id(), false),
            ],
            data,
        })
    }

    /// Builds a deposit from a user token account into custody.
    pub fn deposit(
        &self,
        user: &Pubkey,
        user_token_account: &Pubkey,
        mint: &Pubkey,
        amount: u64,
    ) -> Result<Instruction, VaultClientError> {
        let (vault, _) = self.vault_address();
        let data = VaultInstruction::Deposit { amount }.try_to_vec()?;
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new_readonly(*user, true),
                AccountMeta::new_readonly(vault, false),
                AccountMeta::new(*user_token_account, false),
                AccountMeta::new(self.custody_address(mint), false),
                AccountMeta::new_readonly(*mint, false),
                AccountMeta::new_readonly(spl_token::id(), false),
            ],
            data,
        })
    }

    /// Builds an admin withdrawal from custody to a recipient account.
    pub fn withdraw(
        &self,
        admin: &Pubkey,
        recipient_token_account: &Pubkey,
        mint: &Pubkey,
        amount: u64,
    ) -> Result<Instruction, VaultClientError> {
        let (vault, _) = self.vault_address();
        let data = VaultInstruction::Withdraw { amount }.try_to_vec()?;
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new_readonly(*admin, true),
                AccountMeta::new_readonly(vault, false),
                AccountMeta::new_readonly(get_program_data_address(&self.program_id), false),
                AccountMeta::new(self.custody_address(mint), false),
                AccountMeta::new(*recipient_token_account, false),
                AccountMeta::new_readonly(*mint, false),
                AccountMeta::new_readonly(spl_token::id(), false),
            ],
            data,
        })
    }

    /// Builds a delegated swap instruction.
    ///
    /// `pass_through` lists the accounts the router itself needs, in the
    /// order the router expects them. Include the vault PDA wherever the
    /// router expects the custody authority; the program upgrades its
    /// meta to a signer before invoking.
    #[allow(clippy::too_many_arguments)]
    pub fn swap(
        &self,
        caller: &Pubkey,
        input_mint: &Pubkey,
        output_mint: &Pubkey,
        input_amount: u64,
        minimum_output_amount: u64,
        router: &Pubkey,
        router_payload: Vec<u8>,
        pass_through: Vec<AccountMeta>,
    ) -> Result<Instruction, VaultClientError> {
        let (vault, _) = self.vault_address();
        let data = VaultInstruction::Swap {
            input_mint: *input_mint,
            output_mint: *output_mint,
            input_amount,
            minimum_output_amount,
            router_payload,
        }
        .try_to_vec()?;

        let mut accounts = vec![
            AccountMeta::new_readonly(*caller, true),
            AccountMeta::new_readonly(vault, false),
            AccountMeta::new(self.custody_address(input_mint), false),
            AccountMeta::new(self.custody_address(output_mint), false),
            AccountMeta::new_readonly(*router, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ];
        accounts.extend(pass_through);

        Ok(Instruction {
            program_id: self.program_id,
            accounts,
            data,
        })
    }

    /// Builds an admin instruction adding a router to the allowlist.
    pub fn add_router(
        &self,
        admin: &Pubkey,
        router: Pubkey,
    ) -> Result<Instruction, VaultClientError> {
        self.router_update(admin, VaultInstruction::AddRouter { router })
    }

    /// Builds an admin instruction removing a router from the allowlist.
    pub fn remove_router(
        &self,
        admin: &Pubkey,
        router: Pubkey,
    ) -> Result<Instruction, VaultClientError> {
        self.router_update(admin, VaultInstruction::RemoveRouter { router })
    }

    fn router_update(
        &self,
        admin: &Pubkey,
        instruction: VaultInstruction,
    ) -> Result<Instruction, VaultClientError> {
        let (vault, _) = self.vault_address();
        let data = instruction.try_to_vec()?;
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new_readonly(*admin, true),
                AccountMeta::new(vault, false),
                AccountMeta::new_readonly(get_program_data_address(&self.program_id), false),
            ],
            data,
        })
    }

    /// Builds the read-only vault info query.
    pub fn get_vault_info(&self) -> Result<Instruction, VaultClientError> {
        let (vault, _) = self.vault_address();
        let data = VaultInstruction::GetVaultInfo.try_to_vec()?;
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![AccountMeta::new_readonly(vault, false)],
            data,
        })
    }
}
