//! Utility Functions
//!
//! This module contains shared utility functions used throughout the
//! program. These utilities are organized by functionality and provide
//! common operations for derivation, binding, settlement checks,
//! validation, and serialization.

pub mod binding;
pub mod derivation;
pub mod program_authority;
pub mod serialization;
pub mod settlement;
pub mod validation;

// Re-export commonly used items for convenience
pub use binding::*;
pub use derivation::*;
pub use program_authority::*;
pub use serialization::*;
pub use settlement::*;
pub use validation::*;
