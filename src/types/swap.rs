//! Swap Request and Result Types
//!
//! Ephemeral types describing a single swap request and its resolution.
//! A request never outlives one atomic execution: it is either settled
//! in full or aborted with no residual effect.

use solana_program::pubkey::Pubkey;

use crate::error::VaultError;

/// A single swap request, constructed per call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    /// Mint of the token being spent from custody
    pub input_mint: Pubkey,
    /// Mint of the token being received into custody
    pub output_mint: Pubkey,
    /// Exact amount of input tokens the router must consume
    pub input_amount: u64,
    /// Minimum acceptable output amount (inclusive slippage bound)
    pub minimum_output_amount: u64,
    /// Router program identity to delegate to
    pub router: Pubkey,
    /// Opaque router instruction data
    pub router_payload: Vec<u8>,
}

/// Custody balances captured around a router invocation.
///
/// Pre- and post-invocation snapshots of the two custody accounts, from
/// which the realized deltas are computed. The input balance is expected
/// to decrease and the output balance to increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSnapshot {
    /// Input custody balance
    pub input_balance: u64,
    /// Output custody balance
    pub output_balance: u64,
}

impl BalanceSnapshot {
    pub fn new(input_balance: u64, output_balance: u64) -> Self {
        Self {
            input_balance,
            output_balance,
        }
    }
}

/// Terminal resolution of a swap request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap settled; all balance effects are durable.
    Settled {
        /// Output tokens actually received into custody
        realized_output_amount: u64,
    },
    /// The swap aborted; no balance effect is observable.
    Aborted { reason: VaultError },
}

/// Orchestration phases of a swap request.
///
/// `Initiated → Validated → Delegated → Settled` on success; any phase
/// can route to `Aborted`, after which no custody balance differs from
/// its pre-request value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    Initiated,
    Validated,
    Delegated,
    Settled,
    Aborted,
}
