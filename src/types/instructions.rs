//! Vault Instructions
//!
//! This module contains all the instruction definitions for the CPI Swap
//! Vault Program. Instructions define the operations that can be
//! performed against the vault and its custody accounts.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

/// All supported instructions for the CPI Swap Vault Program.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub enum VaultInstruction {
    /// One-time vault bootstrap.
    ///
    /// Creates the vault state PDA at `[b"vault"]`, records the canonical
    /// bump seed and the initial router allowlist. The payer must be the
    /// program upgrade authority and becomes the recorded admin.
    ///
    /// # Account Layout
    /// 0. Admin/payer (signer, writable)
    /// 1. Vault state PDA (writable)
    /// 2. Program data account (for upgrade authority validation)
    /// 3. System program
    /// 4. Rent sysvar
    InitializeVault {
        /// Initial router program allowlist
        routers: Vec<Pubkey>,
    },

    /// Creates the vault's associated token account for a mint.
    ///
    /// Idempotent bootstrap step; any funder may pay for it. The
    /// resulting account is a custody account: its token-level owner is
    /// the vault PDA.
    ///
    /// # Account Layout
    /// 0. Funder (signer, writable)
    /// 1. Vault state PDA
    /// 2. Custody token account to create (writable)
    /// 3. Token mint
    /// 4. System program
    /// 5. SPL Token program
    /// 6. Associated Token Account program
    CreateCustody,

    /// Transfers tokens from a user token account into a bound custody
    /// account. The user signs the transfer.
    ///
    /// # Account Layout
    /// 0. User (signer)
    /// 1. Vault state PDA
    /// 2. User token account (writable)
    /// 3. Custody token account (writable)
    /// 4. Token mint
    /// 5. SPL Token program
    Deposit { amount: u64 },

    /// Vault-signed transfer from a custody account to a recipient
    /// token account. Admin (program upgrade authority) only.
    ///
    /// # Account Layout
    /// 0. Admin (signer)
    /// 1. Vault state PDA
    /// 2. Program data account (for upgrade authority validation)
    /// 3. Custody token account (writable)
    /// 4. Recipient token account (writable)
    /// 5. Token mint
    /// 6. SPL Token program
    Withdraw { amount: u64 },

    /// Executes a delegated swap through an allowlisted router program.
    ///
    /// The router payload is forwarded as opaque bytes; the vault PDA's
    /// signature is extended to the router only for the duration of the
    /// invocation. Post-conditions on the custody balance deltas decide
    /// settlement; any violation aborts the whole transaction.
    ///
    /// # Account Layout
    /// 0. Caller (signer)
    /// 1. Vault state PDA
    /// 2. Input custody token account (writable)
    /// 3. Output custody token account (writable)
    /// 4. Router program
    /// 5. SPL Token program
    /// 6.. Pass-through accounts handed to the router unchanged
    Swap {
        /// Mint of the token being spent from custody
        input_mint: Pubkey,
        /// Mint of the token being received into custody
        output_mint: Pubkey,
        /// Exact amount of input tokens the router must consume
        input_amount: u64,
        /// Minimum acceptable output amount (slippage bound, inclusive)
        minimum_output_amount: u64,
        /// Opaque router instruction data, passed through undecoded
        router_payload: Vec<u8>,
    },

    /// Adds a router program to the allowlist (admin only).
    ///
    /// # Account Layout
    /// 0. Admin (signer)
    /// 1. Vault state PDA (writable)
    /// 2. Program data account (for upgrade authority validation)
    AddRouter { router: Pubkey },

    /// Removes a router program from the allowlist (admin only).
    ///
    /// Same account layout as `AddRouter`.
    RemoveRouter { router: Pubkey },

    /// **VIEW INSTRUCTION**: Logs the vault configuration (bump, admin,
    /// allowlist). No state changes.
    ///
    /// # Account Layout
    /// 0. Vault state PDA
    GetVaultInfo,
}
