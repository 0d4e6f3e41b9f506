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

//! # Mock Router Program
//!
//! A stand-in for an external swap router, registered as a second
//! program in the test environment. Its payload tells it how many input
//! tokens to pull from custody (spending the vault's extended signature)
//! and how many output tokens to pay back from its own stash, so tests
//! can dial in cooperative, slippage-violating, fee-evading, and custody
//! raiding router behavior.

use crate::common::tokens::{create_token_account, mint_tokens};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    instruction::AccountMeta,
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
};
use solana_program_test::BanksClient;
use solana_sdk::{signature::Keypair, signer::Signer};
use spl_token::instruction as token_instruction;

/// Fixed program ID the mock router is registered under
pub const ROUTER_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    0x52, 0x6f, 0x75, 0x74, 0x65, 0x72, 0x4d, 0x6f, 0x63, 0x6b, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01,
]);

/// Seed of the PDA that owns the router's own token stashes
pub const ROUTER_AUTHORITY_SEED: &[u8] = b"router_authority";

/// Instruction data the mock router decodes
///
/// Real routers get an opaque payload; the vault program never looks at
/// this. Only the mock router and the tests agree on the format.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct RouterPayload {
    /// Input tokens to pull from the input custody account
    pub take_amount: u64,
    /// Output tokens to pay into the output custody account
    pub pay_amount: u64,
    /// Tokens to siphon from an undeclared custody account (requires the
    /// two optional trailing accounts)
    pub raid_amount: u64,
}

/// The PDA owning the mock router's stash token accounts
pub fn router_authority() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ROUTER_AUTHORITY_SEED], &ROUTER_PROGRAM_ID)
}

/// Mock router entrypoint
///
/// # Account Layout
/// 0. Vault PDA (signer, via the vault program's signature extension)
/// 1. Input custody token account (writable)
/// 2. Output custody token account (writable)
/// 3. Router input stash (writable)
/// 4. Router output stash (writable)
/// 5. Router authority PDA
/// 6. SPL Token program
/// 7. Undeclared custody account (writable, raid mode only)
/// 8. Raid destination token account (writable, raid mode only)
pub fn mock_router_process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let payload = RouterPayload::try_from_slice(instruction_data)
        .map_err(|_| solana_program::program_error::ProgramError::InvalidInstructionData)?;

    let account_info_iter = &mut accounts.iter();
    let vault_account = next_account_info(account_info_iter)?;
    let input_custody_account = next_account_info(account_info_iter)?;
    let output_custody_account = next_account_info(account_info_iter)?;
    let stash_in_account = next_account_info(account_info_iter)?;
    let stash_out_account = next_account_info(account_info_iter)?;
    let router_authority_account = next_account_info(account_info_iter)?;
    let token_program_account = next_account_info(account_info_iter)?;

    if payload.take_amount > 0 {
        // Spends the vault's extended signature.
        invoke(
            &token_instruction::transfer(
                token_program_account.key,
                input_custody_account.key,
                stash_in_account.key,
                vault_account.key,
                &[],
                payload.take_amount,
            )?,
            &[
                input_custody_account.clone(),
                stash_in_account.clone(),
                vault_account.clone(),
                token_program_account.clone(),
            ],
        )?;
    }

    if payload.pay_amount > 0 {
        let (_, authority_bump) =
            Pubkey::find_program_address(&[ROUTER_AUTHORITY_SEED], program_id);
        invoke_signed(
            &token_instruction::transfer(
                token_program_account.key,
                stash_out_account.key,
                output_custody_account.key,
                router_authority_account.key,
                &[],
                payload.pay_amount,
            )?,
            &[
                stash_out_account.clone(),
                output_custody_account.clone(),
                router_authority_account.clone(),
                token_program_account.clone(),
            ],
            &[&[ROUTER_AUTHORITY_SEED, &[authority_bump]]],
        )?;
    }

    if payload.raid_amount > 0 {
        let raided_custody_account = next_account_info(account_info_iter)?;
        let raid_destination_account = next_account_info(account_info_iter)?;
        invoke(
            &token_instruction::transfer(
                token_program_account.key,
                raided_custody_account.key,
                raid_destination_account.key,
                vault_account.key,
                &[],
                payload.raid_amount,
            )?,
            &[
                raided_custody_account.clone(),
                raid_destination_account.clone(),
                vault_account.clone(),
                token_program_account.clone(),
            ],
        )?;
    }

    Ok(())
}

/// Router-side accounts set up for a swap test
pub struct RouterHarness {
    pub stash_in: Pubkey,
    pub stash_out: Pubkey,
    pub authority: Pubkey,
}

impl RouterHarness {
    /// Account metas the vault program should pass through to the router,
    /// in the order the mock router expects them.
    pub fn pass_through(
        &self,
        vault: &Pubkey,
        input_custody: &Pubkey,
        output_custody: &Pubkey,
    ) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(*vault, false),
            AccountMeta::new(*input_custody, false),
            AccountMeta::new(*output_custody, false),
            AccountMeta::new(self.stash_in, false),
            AccountMeta::new(self.stash_out, false),
            AccountMeta::new_readonly(self.authority, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ]
    }
}

/// Create the mock router's stash accounts and fund the output stash
///
/// # Arguments
/// * `banks` - Banks client for transaction processing
/// * `payer` - Funds account creation and acts as mint authority
/// * `input_mint` - Mint of the tokens the router receives
/// * `output_mint` - Mint of the tokens the router pays out
/// * `stash_out_funding` - Output tokens minted into the payout stash
pub async fn setup_router_harness(
    banks: &mut BanksClient,
    payer: &Keypair,
    input_mint: &Pubkey,
    output_mint: &Pubkey,
    stash_out_funding: u64,
) -> Result<RouterHarness, solana_program_test::BanksClientError> {
    let (authority, _) = router_authority();

    let stash_in = Keypair::new();
    create_token_account(banks, payer, &stash_in, input_mint, &authority).await?;

    let stash_out = Keypair::new();
    create_token_account(banks, payer, &stash_out, output_mint, &authority).await?;

    if stash_out_funding > 0 {
        mint_tokens(
            banks,
            payer,
            output_mint,
            &stash_out.pubkey(),
            payer,
            stash_out_funding,
        )
        .await?;
    }

    Ok(RouterHarness {
        stash_in: stash_in.pubkey(),
        stash_out: stash_out.pubkey(),
        authority,
    })
}

#[allow(dead_code)]
pub fn serialize_payload(payload: &RouterPayload) -> Vec<u8> {
    payload.try_to_vec().expect("payload serialization")
}
