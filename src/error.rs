use solana_program::{program_error::ProgramError, pubkey::Pubkey};
use thiserror::Error;

/// Error types for the CPI Swap Vault Program.
///
/// Every failure class a caller can observe maps to one variant here.
/// The distinction matters because retry policy differs per kind: a
/// `CustodyContention` is transient and safe to retry, while a
/// `SwapPostConditionViolated` indicates a misbehaving router and must
/// not be retried without caller re-evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// Vault PDA derivation failed or the supplied address/bump does not
    /// match the canonical derivation. Configuration-level, not retried.
    #[error("Vault derivation failed for program {program_id}: {reason}")]
    VaultDerivationFailed { program_id: Pubkey, reason: String },

    /// A supplied custody account does not bind to the vault: wrong
    /// address, wrong authority, or wrong mint. Caller error.
    #[error("Custody binding failed for account {account}: {reason}")]
    CustodyBindingFailed { account: Pubkey, reason: String },

    /// The router program identity is not on the vault's allowlist.
    /// Security rejection, never retried.
    #[error("Untrusted router program: {router}")]
    UntrustedRouter { router: Pubkey },

    /// The delegated router invocation returned a failure. The whole
    /// request is rolled back; the caller may retry with a fresh request.
    #[error("Router invocation failed: {reason}")]
    RouterInvocationFailed { reason: String },

    /// Post-invocation balance deltas contradict the declared amounts or
    /// slippage bound. Higher severity: may indicate a malicious or
    /// buggy router.
    #[error("Swap post-condition violated: {reason}")]
    SwapPostConditionViolated { reason: String },

    /// A concurrent request already holds the custody account. Transient.
    #[error("Custody account {account} is locked by a concurrent request")]
    CustodyContention { account: Pubkey },

    /// Swap input amount must be greater than zero
    #[error("Invalid swap amount: {amount}")]
    InvalidSwapAmount { amount: u64 },

    /// Vault state account has already been initialized
    #[error("Vault is already initialized")]
    VaultAlreadyInitialized,

    /// Vault state account has not been initialized yet
    #[error("Vault is not initialized")]
    VaultNotInitialized,

    /// Caller is not authorized for this operation
    #[error("Unauthorized")]
    Unauthorized,

    /// Router allowlist cannot hold more entries
    #[error("Router allowlist is full ({max} entries)")]
    RouterAllowlistFull { max: usize },

    /// Router is not present in the allowlist
    #[error("Router {router} not found in allowlist")]
    RouterNotFound { router: Pubkey },

    /// Arithmetic overflow
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl VaultError {
    /// Returns a unique error code for each error variant.
    ///
    /// Error codes are used for programmatic error handling and
    /// provide a stable interface for client applications.
    pub fn error_code(&self) -> u32 {
        match self {
            VaultError::VaultDerivationFailed { .. } => 2001,
            VaultError::CustodyBindingFailed { .. } => 2002,
            VaultError::UntrustedRouter { .. } => 2003,
            VaultError::RouterInvocationFailed { .. } => 2004,
            VaultError::SwapPostConditionViolated { .. } => 2005,
            VaultError::CustodyContention { .. } => 2006,
            VaultError::InvalidSwapAmount { .. } => 2007,
            VaultError::VaultAlreadyInitialized => 2008,
            VaultError::VaultNotInitialized => 2009,
            VaultError::Unauthorized => 2010,
            VaultError::RouterAllowlistFull { .. } => 2011,
            VaultError::RouterNotFound { .. } => 2012,
            VaultError::ArithmeticOverflow => 2013,
        }
    }
}

impl From<VaultError> for ProgramError {
    /// Converts a VaultError into a ProgramError for Solana program compatibility.
    ///
    /// This preserves the failure class through Solana's error handling
    /// system via stable custom error codes.
    fn from(e: VaultError) -> Self {
        ProgramError::Custom(e.error_code())
    }
}
