//! Delegated Swap Orchestration
//!
//! The single swap entry point: validates the vault and custody
//! bindings, checks the router against the allowlist, snapshots custody
//! balances, extends the vault's signature to the router for exactly one
//! invocation, and settles or aborts on the post-invocation deltas.
//!
//! Atomicity comes from the runtime: any error returned from here - the
//! router's own failure included - rolls back every effect of the
//! transaction, so a concurrent observer sees either the pre-request
//! balances or the fully settled ones.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    msg,
    program::{invoke_signed, set_return_data},
    program_error::ProgramError,
    program_pack::Pack,
    pubkey::Pubkey,
};
use spl_token::state::Account as TokenAccount;

use crate::constants::VAULT_SEED_PREFIX;
use crate::error::VaultError;
use crate::types::BalanceSnapshot;
use crate::utils::binding::{reload_custody_balance, validate_custody_account};
use crate::utils::settlement::evaluate_swap_deltas;
use crate::utils::validation::{
    validate_and_deserialize_vault_state, validate_non_zero_amount, validate_signer,
    validate_writable,
};

/// Processes a delegated swap through an allowlisted router program.
///
/// # Account Layout
/// 0. Caller (signer)
/// 1. Vault state PDA
/// 2. Input custody token account (writable)
/// 3. Output custody token account (writable)
/// 4. Router program
/// 5. SPL Token program
/// 6.. Pass-through accounts handed to the router unchanged
///
/// The router payload is never decoded here; the program's authority
/// over it is purely pass-through. The vault PDA is marked as a signer
/// on the router instruction wherever it appears in the pass-through
/// set, and `invoke_signed` extends the vault's signature for exactly
/// this invocation.
#[allow(clippy::too_many_arguments)]
pub fn process_swap(
    program_id: &Pubkey,
    input_mint: Pubkey,
    output_mint: Pubkey,
    input_amount: u64,
    minimum_output_amount: u64,
    router_payload: Vec<u8>,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("Processing Swap: {} in, {} minimum out", input_amount, minimum_output_amount);

    if accounts.len() < 6 {
        return Err(ProgramError::NotEnoughAccountKeys);
    }
    let caller_account = &accounts[0];
    let vault_state_account = &accounts[1];
    let input_custody_account = &accounts[2];
    let output_custody_account = &accounts[3];
    let router_program_account = &accounts[4];
    let token_program_account = &accounts[5];
    let pass_through_accounts = &accounts[6..];

    // ── Initiated → Validated ───────────────────────────────────────────
    validate_signer(caller_account, "Caller")?;
    validate_non_zero_amount(input_amount, "Swap input")?;
    validate_writable(input_custody_account, "Input custody")?;
    validate_writable(output_custody_account, "Output custody")?;
    let vault_state = validate_and_deserialize_vault_state(vault_state_account, program_id)?;

    if *token_program_account.key != spl_token::id() {
        msg!("Invalid SPL Token program account");
        return Err(ProgramError::IncorrectProgramId);
    }

    let input_custody_data = validate_custody_account(
        input_custody_account,
        vault_state_account.key,
        &input_mint,
        "Input custody",
    )?;
    let output_custody_data = validate_custody_account(
        output_custody_account,
        vault_state_account.key,
        &output_mint,
        "Output custody",
    )?;

    if input_custody_data.amount < input_amount {
        msg!(
            "Insufficient input custody balance: {} available, {} declared",
            input_custody_data.amount,
            input_amount
        );
        return Err(ProgramError::InsufficientFunds);
    }

    // Trust boundary: only allowlisted, executable routers, and never
    // this program itself.
    let router = *router_program_account.key;
    if router == *program_id || !vault_state.is_trusted_router(&router) {
        msg!("Untrusted router program: {}", router);
        return Err(VaultError::UntrustedRouter { router }.into());
    }
    if !router_program_account.executable {
        msg!("Router account {} is not executable", router);
        return Err(VaultError::UntrustedRouter { router }.into());
    }

    msg!("Validation passed, delegating to router {}", router);

    // Capture custody balances immediately before invocation, plus every
    // other vault-owned token account the router was handed - those must
    // not move at all.
    let pre = BalanceSnapshot::new(input_custody_data.amount, output_custody_data.amount);
    let bystander_balances =
        snapshot_bystander_custody(pass_through_accounts, vault_state_account.key, [
            input_custody_account.key,
            output_custody_account.key,
        ])?;

    // ── Validated → Delegated ───────────────────────────────────────────
    let metas: Vec<AccountMeta> = pass_through_accounts
        .iter()
        .map(|acc| {
            // The vault PDA cannot pre-sign; its signature is supplied by
            // invoke_signed, so its meta must claim it.
            let is_signer = acc.is_signer || acc.key == vault_state_account.key;
            if acc.is_writable {
                AccountMeta::new(*acc.key, is_signer)
            } else {
                AccountMeta::new_readonly(*acc.key, is_signer)
            }
        })
        .collect();

    let router_instruction = Instruction {
        program_id: router,
        accounts: metas,
        data: router_payload,
    };

    let mut invoke_accounts: Vec<AccountInfo> = pass_through_accounts.to_vec();
    invoke_accounts.push(router_program_account.clone());

    let vault_seeds = &[VAULT_SEED_PREFIX, &[vault_state.vault_bump_seed]];
    invoke_signed(&router_instruction, &invoke_accounts, &[vault_seeds]).map_err(|e| {
        msg!("Router invocation failed: {:?}", e);
        e
    })?;

    // ── Delegated → Settled | Aborted ───────────────────────────────────
    let post = BalanceSnapshot::new(
        reload_custody_balance(input_custody_account)?,
        reload_custody_balance(output_custody_account)?,
    );

    let realized_output = evaluate_swap_deltas(&pre, &post, input_amount, minimum_output_amount)
        .map_err(|e| {
            msg!("{}", e);
            ProgramError::from(e)
        })?;

    verify_bystander_custody_unchanged(pass_through_accounts, &bystander_balances)?;

    msg!(
        "Swap settled: {} in, {} out (minimum {})",
        input_amount,
        realized_output,
        minimum_output_amount
    );
    set_return_data(&realized_output.to_le_bytes());
    Ok(())
}

/// Snapshots every vault-owned token account in the pass-through set
/// other than the two declared custody accounts.
fn snapshot_bystander_custody(
    pass_through_accounts: &[AccountInfo],
    vault: &Pubkey,
    declared: [&Pubkey; 2],
) -> Result<Vec<(Pubkey, u64)>, ProgramError> {
    let mut balances = Vec::new();
    for account in pass_through_accounts {
        if account.owner != &spl_token::id() || account.data_len() != TokenAccount::LEN {
            continue;
        }
        if declared.contains(&account.key) {
            continue;
        }
        let token_account = TokenAccount::unpack_from_slice(&account.data.borrow())?;
        if token_account.owner == *vault {
            balances.push((*account.key, token_account.amount));
        }
    }
    Ok(balances)
}

/// Confirms no bystander custody balance moved during the invocation.
fn verify_bystander_custody_unchanged(
    pass_through_accounts: &[AccountInfo],
    pre_balances: &[(Pubkey, u64)],
) -> ProgramResult {
    for (key, pre_balance) in pre_balances {
        let account = pass_through_accounts
            .iter()
            .find(|acc| acc.key == key)
            .ok_or(ProgramError::InvalidAccountData)?;
        let token_account = TokenAccount::unpack_from_slice(&account.data.borrow())?;
        if token_account.amount != *pre_balance {
            msg!(
                "Undeclared custody account {} changed balance: {} -> {}",
                key,
                pre_balance,
                token_account.amount
            );
            return Err(VaultError::SwapPostConditionViolated {
                reason: format!("undeclared custody account {} changed balance", key),
            }
            .into());
        }
    }
    Ok(())
}
