//! Randomized deposit amounts.

use alloy::primitives::U256;
use rand::Rng;

use crate::config::CycleConfig;

/// Inclusive wei range deposits are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountRange {
    min_wei: u64,
    max_wei: u64,
}

impl AmountRange {
    /// Build a range, swapping the bounds if given in reverse.
    pub fn new(min_wei: u64, max_wei: u64) -> Self {
        Self {
            min_wei: min_wei.min(max_wei),
            max_wei: min_wei.max(max_wei),
        }
    }

    pub fn from_config(config: &CycleConfig) -> Self {
        Self::new(config.min_amount_wei, config.max_amount_wei)
    }

    pub fn min(&self) -> U256 {
        U256::from(self.min_wei)
    }

    pub fn max(&self) -> U256 {
        U256::from(self.max_wei)
    }

    /// Draw an amount uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> U256 {
        U256::from(rng.gen_range(self.min_wei..=self.max_wei))
    }
}
