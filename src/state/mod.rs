//! State Module
//!
//! Persistent account state for the CPI Swap Vault Program.

pub mod vault_state;

pub use vault_state::*;
