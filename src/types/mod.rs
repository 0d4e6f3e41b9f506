//! Types Module
//!
//! Shared type definitions for the CPI Swap Vault Program: the
//! instruction surface and the swap request/result types.

pub mod instructions;
pub mod swap;

pub use instructions::*;
pub use swap::*;
