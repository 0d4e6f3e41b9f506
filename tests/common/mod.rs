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

//! # Common Test Utilities
//!
//! This module provides shared utilities and helpers for integration tests
//! across all test modules. It includes:
//!
//! - Token creation and minting helpers
//! - Vault setup and custody utilities
//! - A mock router program for delegated swap tests
//! - Test environment configuration

pub mod router;
pub mod setup;
pub mod tokens;

// Re-export commonly used types and functions
#[allow(unused_imports)]
pub use router::*;
#[allow(unused_imports)]
pub use setup::*;
#[allow(unused_imports)]
pub use tokens::*;
#[allow(unused_imports)]
pub use vault_helpers::*;

// Re-export external dependencies commonly used in tests
#[allow(unused_imports)]
pub use borsh::{BorshDeserialize, BorshSerialize};
#[allow(unused_imports)]
pub use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
#[allow(unused_imports)]
pub use solana_program_test::*;
#[allow(unused_imports)]
pub use solana_sdk::{
    program_pack::Pack,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
#[allow(unused_imports)]
pub use spl_token::{instruction as token_instruction, state::Account as TokenAccount};

// Re-export program-specific imports
#[allow(unused_imports)]
pub use cpi_swap_vault::{
    client_sdk::VaultClient, process_instruction, VaultError, VaultInstruction, VaultState,
    ID as PROGRAM_ID, MAX_ROUTERS, VAULT_SEED_PREFIX,
};

/// Shared test constants
pub mod constants {
    /// Decimals used for every test mint
    pub const TOKEN_DECIMALS: u8 = 9;

    /// Default custody funding for swap tests (1 token at 9 decimals)
    pub const SWAP_INPUT_AMOUNT: u64 = 1_000_000_000;

    /// Default slippage bound for swap tests (0.5 tokens at 9 decimals)
    pub const SWAP_MINIMUM_OUTPUT: u64 = 500_000_000;
}

/// Test result type alias for convenience
pub type TestResult = Result<(), BanksClientError>;

/// Extract the custom error code from a failed transaction, if any.
#[allow(dead_code)]
pub fn custom_error_code(err: &BanksClientError) -> Option<u32> {
    use solana_sdk::transaction::TransactionError;
    if let BanksClientError::TransactionError(TransactionError::InstructionError(
        _,
        solana_sdk::instruction::InstructionError::Custom(code),
    )) = err
    {
        return Some(*code);
    }
    if let BanksClientError::SimulationError { err, .. } = err {
        if let TransactionError::InstructionError(
            _,
            solana_sdk::instruction::InstructionError::Custom(code),
        ) = err
        {
            return Some(*code);
        }
    }
    None
}
