//! Swap Orchestration Engine
//!
//! Runtime-agnostic orchestration of swap requests over an in-memory
//! custody ledger. The on-chain processors get atomicity and write
//! serialization from the Solana runtime; this module makes the same
//! discipline explicit and testable in isolation: a copy-on-read journal
//! for all-or-nothing effect visibility, a keyed lock table for
//! per-custody serialization, and a state machine that delegates to an
//! abstract router capability.

pub mod journal;
pub mod locks;
pub mod machine;

pub use journal::*;
pub use locks::*;
pub use machine::*;
