//! Processors Module
//!
//! This module contains all processor functions organized by functionality.

pub mod custody;
pub mod initialize;
pub mod liquidity;
pub mod routers;
pub mod swap;
pub mod utilities;

// Re-export vault bootstrap functions
pub use initialize::*;

// Re-export custody account functions
pub use custody::*;

// Re-export deposit/withdraw functions
pub use liquidity::*;

// Re-export router allowlist management functions
pub use routers::*;

// Re-export swap orchestration functions
pub use swap::*;

// Re-export view functions
pub use utilities::*;
