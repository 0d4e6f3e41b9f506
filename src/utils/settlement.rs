//! Swap Settlement Checks
//!
//! Pure post-condition evaluation over pre/post custody balance
//! snapshots. Both the on-chain swap processor and the host-side
//! orchestration engine settle through this function, so the rules
//! cannot drift between the two paths.
//!
//! Settlement requires all of:
//! - the output custody gained at least the declared minimum output
//!   (inclusive bound: `output_delta >= minimum_output_amount`);
//! - the input custody lost exactly the declared input amount;
//! - balances moved in the expected directions (checked arithmetic,
//!   no implicit rounding).

use crate::error::VaultError;
use crate::types::BalanceSnapshot;

/// Evaluates swap post-conditions and returns the realized output amount.
pub fn evaluate_swap_deltas(
    pre: &BalanceSnapshot,
    post: &BalanceSnapshot,
    input_amount: u64,
    minimum_output_amount: u64,
) -> Result<u64, VaultError> {
    let input_delta = pre
        .input_balance
        .checked_sub(post.input_balance)
        .ok_or_else(|| VaultError::SwapPostConditionViolated {
            reason: format!(
                "input custody balance increased: {} -> {}",
                pre.input_balance, post.input_balance
            ),
        })?;

    let output_delta = post
        .output_balance
        .checked_sub(pre.output_balance)
        .ok_or_else(|| VaultError::SwapPostConditionViolated {
            reason: format!(
                "output custody balance decreased: {} -> {}",
                pre.output_balance, post.output_balance
            ),
        })?;

    if input_delta != input_amount {
        return Err(VaultError::SwapPostConditionViolated {
            reason: format!(
                "input delta {} does not match declared amount {}",
                input_delta, input_amount
            ),
        });
    }

    if output_delta < minimum_output_amount {
        return Err(VaultError::SwapPostConditionViolated {
            reason: format!(
                "output delta {} below minimum {}",
                output_delta, minimum_output_amount
            ),
        });
    }

    Ok(output_delta)
}
