//! Fee estimation from the latest block's base fee.

use crate::blockchain::types::GasFees;

/// Derive the fee pair for a transaction.
///
/// A missing base fee (pre-London block) is treated as zero. The max fee
/// leaves room for the base fee plus twice the tip.
pub fn compute_fees(base_fee_per_gas: Option<u64>, priority_fee_wei: u128) -> GasFees {
    let base_fee = base_fee_per_gas.unwrap_or(0) as u128;
    GasFees {
        max_fee_per_gas: base_fee.saturating_add(priority_fee_wei.saturating_mul(2)),
        max_priority_fee_per_gas: priority_fee_wei,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_GWEI: u128 = 1_000_000_000;

    #[test]
    fn test_fees_with_base_fee() {
        let fees = compute_fees(Some(250_000), ONE_GWEI);
        assert_eq!(fees.max_priority_fee_per_gas, ONE_GWEI);
        assert_eq!(fees.max_fee_per_gas, 250_000 + 2 * ONE_GWEI);
    }

    #[test]
    fn test_missing_base_fee_is_zero() {
        let fees = compute_fees(None, ONE_GWEI);
        assert_eq!(fees.max_fee_per_gas, 2 * ONE_GWEI);
    }
}
