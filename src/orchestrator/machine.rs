//! Swap Orchestration State Machine
//!
//! Drives a swap request through
//! `Initiated → Validated → Delegated → Settled | Aborted` over the
//! custody journal and lock table. The router is an abstract capability
//! behind the `RouterInvoker` trait, so the machine never depends on a
//! concrete router implementation and tests substitute mocks freely.

use std::collections::HashSet;

use solana_program::pubkey::Pubkey;

use crate::error::VaultError;
use crate::orchestrator::journal::{CustodyJournal, CustodyLedger};
use crate::orchestrator::locks::CustodyLockTable;
use crate::types::{BalanceSnapshot, SwapOutcome, SwapPhase, SwapRequest};
use crate::utils::derivation::{derive_custody_address, derive_vault_address};
use crate::utils::settlement::evaluate_swap_deltas;

/// Failure surfaced by a router invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterFailure {
    pub reason: String,
}

/// The custody accounts a router invocation is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterAccounts {
    pub input_custody: Pubkey,
    pub output_custody: Pubkey,
}

/// Capability-scoped router invocation.
///
/// The machine hands the router the two custody accounts, the staged
/// journal, and the opaque payload. Whatever the router stages is only
/// committed if the post-conditions hold.
pub trait RouterInvoker {
    fn invoke(
        &self,
        router: &Pubkey,
        accounts: &RouterAccounts,
        journal: &mut CustodyJournal,
        payload: &[u8],
    ) -> Result<(), RouterFailure>;
}

/// Orchestrates swap requests against one vault's custody ledger.
pub struct SwapOrchestrator {
    vault: Pubkey,
    routers: HashSet<Pubkey>,
    ledger: CustodyLedger,
    locks: CustodyLockTable,
}

impl SwapOrchestrator {
    /// Creates an orchestrator for the vault derived from `program_id`.
    pub fn new(program_id: &Pubkey, routers: impl IntoIterator<Item = Pubkey>) -> Self {
        let (vault, _) = derive_vault_address(program_id);
        Self {
            vault,
            routers: routers.into_iter().collect(),
            ledger: CustodyLedger::new(),
            locks: CustodyLockTable::new(),
        }
    }

    /// The vault authority address this orchestrator serves.
    pub fn vault(&self) -> Pubkey {
        self.vault
    }

    /// Custody account address for a mint.
    pub fn custody_address(&self, mint: &Pubkey) -> Pubkey {
        derive_custody_address(&self.vault, mint)
    }

    /// Committed balance of a mint's custody account.
    pub fn custody_balance(&self, mint: &Pubkey) -> u64 {
        self.ledger.balance_of(&self.custody_address(mint))
    }

    /// Funds a custody account directly (bootstrap/deposit path).
    ///
    /// Each call adds to the committed balance, matching repeated
    /// deposits into the same custody account.
    pub fn fund_custody(&self, mint: &Pubkey, amount: u64) {
        self.ledger.credit_balance(self.custody_address(mint), amount);
    }

    /// Executes one swap request atomically.
    pub fn execute(&self, request: &SwapRequest, invoker: &impl RouterInvoker) -> SwapOutcome {
        let mut trace = Vec::new();
        self.execute_with_trace(request, invoker, &mut trace)
    }

    /// Executes one swap request, recording each phase transition.
    pub fn execute_with_trace(
        &self,
        request: &SwapRequest,
        invoker: &impl RouterInvoker,
        trace: &mut Vec<SwapPhase>,
    ) -> SwapOutcome {
        match self.run(request, invoker, trace) {
            Ok(realized_output_amount) => {
                trace.push(SwapPhase::Settled);
                SwapOutcome::Settled {
                    realized_output_amount,
                }
            }
            Err(reason) => {
                trace.push(SwapPhase::Aborted);
                SwapOutcome::Aborted { reason }
            }
        }
    }

    fn run(
        &self,
        request: &SwapRequest,
        invoker: &impl RouterInvoker,
        trace: &mut Vec<SwapPhase>,
    ) -> Result<u64, VaultError> {
        trace.push(SwapPhase::Initiated);

        if request.input_amount == 0 {
            return Err(VaultError::InvalidSwapAmount { amount: 0 });
        }

        let accounts = RouterAccounts {
            input_custody: self.custody_address(&request.input_mint),
            output_custody: self.custody_address(&request.output_mint),
        };

        // Exclusive hold on both custody accounts for the whole request.
        let _guard = self
            .locks
            .try_acquire(&[accounts.input_custody, accounts.output_custody])?;
        trace.push(SwapPhase::Validated);

        // Allowlist is part of the delegation guard, not request validation.
        if !self.routers.contains(&request.router) {
            return Err(VaultError::UntrustedRouter {
                router: request.router,
            });
        }

        let mut journal = self.ledger.begin();
        let pre = BalanceSnapshot::new(
            journal.balance(&accounts.input_custody),
            journal.balance(&accounts.output_custody),
        );

        invoker
            .invoke(&request.router, &accounts, &mut journal, &request.router_payload)
            .map_err(|f| VaultError::RouterInvocationFailed { reason: f.reason })?;
        trace.push(SwapPhase::Delegated);

        let post = BalanceSnapshot::new(
            journal.balance(&accounts.input_custody),
            journal.balance(&accounts.output_custody),
        );
        let realized = evaluate_swap_deltas(
            &pre,
            &post,
            request.input_amount,
            request.minimum_output_amount,
        )?;

        // The router may only have moved the two declared custody accounts.
        for key in journal.touched_keys() {
            if key != accounts.input_custody
                && key != accounts.output_custody
                && journal.has_changed(&key)
            {
                return Err(VaultError::SwapPostConditionViolated {
                    reason: format!("undeclared custody account {} changed balance", key),
                });
            }
        }

        journal.commit();
        Ok(realized)
    }
}
