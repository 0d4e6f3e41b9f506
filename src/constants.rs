//! Constants for the CPI Swap Vault Program
//!
//! This module contains the configuration constants, system limits,
//! and PDA seed prefixes used throughout the program.

/// PDA seed for the vault authority/state account
pub const VAULT_SEED_PREFIX: &[u8] = b"vault";

/// Maximum number of router programs that can be allowlisted per vault
pub const MAX_ROUTERS: usize = 8;

/// Serialized size of the vault state account.
///
/// is_initialized (1) + vault_bump_seed (1) + admin (32)
/// + routers vec length prefix (4) + MAX_ROUTERS * 32
pub const VAULT_STATE_LEN: usize = 1 + 1 + 32 + 4 + MAX_ROUTERS * 32;
