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

//! # Token Creation and Management Utilities
//!
//! This module provides utilities for creating and managing SPL tokens
//! in integration tests, including mint creation, token account setup,
//! and token minting operations.

use crate::common::{constants, TestResult};
use solana_program_test::BanksClient;
use solana_sdk::{program_pack::Pack, signature::Keypair, signer::Signer};
use spl_token::{instruction as token_instruction, state::Account as TokenAccount, state::Mint};

/// Helper function to create a token mint
///
/// Creates a new SPL token mint with the payer as mint authority.
///
/// # Arguments
/// * `banks` - Banks client for transaction processing
/// * `payer` - Account that pays for the mint creation
/// * `mint` - Keypair for the new mint account
/// * `decimals` - Number of decimal places (defaults to 9 if None)
#[allow(dead_code)]
pub async fn create_mint(
    banks: &mut BanksClient,
    payer: &Keypair,
    mint: &Keypair,
    decimals: Option<u8>,
) -> TestResult {
    let decimals = decimals.unwrap_or(constants::TOKEN_DECIMALS);
    let rent = banks.get_rent().await?;
    let lamports = rent.minimum_balance(Mint::LEN);
    let recent_blockhash = banks.get_latest_blockhash().await?;

    let create_account_ix = solana_sdk::system_instruction::create_account(
        &payer.pubkey(),
        &mint.pubkey(),
        lamports,
        Mint::LEN as u64,
        &spl_token::id(),
    );

    let initialize_mint_ix = token_instruction::initialize_mint(
        &spl_token::id(),
        &mint.pubkey(),
        &payer.pubkey(),
        None,
        decimals,
    )
    .unwrap();

    let mut transaction = solana_sdk::transaction::Transaction::new_with_payer(
        &[create_account_ix, initialize_mint_ix],
        Some(&payer.pubkey()),
    );
    transaction.sign(&[payer, mint], recent_blockhash);
    banks.process_transaction(transaction).await
}

/// Create a token account for a specific mint and owner
///
/// # Arguments
/// * `banks` - Banks client for transaction processing
/// * `payer` - Account that pays for the token account creation
/// * `token_account` - Keypair for the new token account
/// * `mint` - Mint that this token account will hold
/// * `owner` - Owner of the token account
#[allow(dead_code)]
pub async fn create_token_account(
    banks: &mut BanksClient,
    payer: &Keypair,
    token_account: &Keypair,
    mint: &solana_program::pubkey::Pubkey,
    owner: &solana_program::pubkey::Pubkey,
) -> TestResult {
    let rent = banks.get_rent().await?;
    let lamports = rent.minimum_balance(TokenAccount::LEN);
    let recent_blockhash = banks.get_latest_blockhash().await?;

    let create_account_ix = solana_sdk::system_instruction::create_account(
        &payer.pubkey(),
        &token_account.pubkey(),
        lamports,
        TokenAccount::LEN as u64,
        &spl_token::id(),
    );

    let initialize_account_ix = token_instruction::initialize_account(
        &spl_token::id(),
        &token_account.pubkey(),
        mint,
        owner,
    )
    .unwrap();

    let mut transaction = solana_sdk::transaction::Transaction::new_with_payer(
        &[create_account_ix, initialize_account_ix],
        Some(&payer.pubkey()),
    );
    transaction.sign(&[payer, token_account], recent_blockhash);
    banks.process_transaction(transaction).await
}

/// Mint tokens to a specified token account
///
/// # Arguments
/// * `banks` - Banks client for transaction processing
/// * `payer` - Account that pays for the transaction
/// * `mint` - Mint to mint tokens from
/// * `destination` - Token account to mint tokens to
/// * `authority` - Mint authority
/// * `amount` - Amount of tokens to mint
#[allow(dead_code)]
pub async fn mint_tokens(
    banks: &mut BanksClient,
    payer: &Keypair,
    mint: &solana_program::pubkey::Pubkey,
    destination: &solana_program::pubkey::Pubkey,
    authority: &Keypair,
    amount: u64,
) -> TestResult {
    let recent_blockhash = banks.get_latest_blockhash().await?;
    let mint_to_ix = token_instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        &authority.pubkey(),
        &[],
        amount,
    )
    .unwrap();

    let mut transaction = solana_sdk::transaction::Transaction::new_with_payer(
        &[mint_to_ix],
        Some(&payer.pubkey()),
    );
    transaction.sign(&[payer, authority], recent_blockhash);
    banks.process_transaction(transaction).await
}

/// Read the current balance of a token account
#[allow(dead_code)]
pub async fn get_token_balance(
    banks: &mut BanksClient,
    token_account: &solana_program::pubkey::Pubkey,
) -> u64 {
    let account = banks
        .get_account(*token_account)
        .await
        .expect("account fetch failed")
        .expect("token account not found");
    TokenAccount::unpack(&account.data)
        .expect("failed to unpack token account")
        .amount
}
