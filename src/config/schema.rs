//! Configuration schema definitions.
//!
//! All sections derive Serde traits and default every field, so an empty (or
//! absent) config file yields a runnable configuration for Lisk mainnet.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the cycler.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CyclerConfig {
    /// RPC endpoint and wrapped-token contract.
    pub chain: ChainConfig,

    /// Fee schedule applied to every transaction.
    pub fees: FeeConfig,

    /// Block explorer used to count today's transactions.
    pub explorer: ExplorerConfig,

    /// Loop bounds, delays and amount range.
    pub cycle: CycleConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Chain connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID used for EIP-155 signing (1135 for Lisk).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Address of the wrapped-native-token contract.
    pub weth_address: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://rpc.api.lisk.com".to_string(),
            chain_id: 1135,
            rpc_timeout_secs: 10,
            weth_address: "0x4200000000000000000000000000000000000006".to_string(),
        }
    }
}

impl ChainConfig {
    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs)
    }
}

/// Fee schedule.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeeConfig {
    /// Priority fee (tip) in gwei. Max fee is base fee + 2x this value.
    pub priority_fee_gwei: u64,

    /// Gas limit for deposit and withdraw calls.
    pub gas_limit: u64,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            priority_fee_gwei: 1,
            gas_limit: 100_000,
        }
    }
}

impl FeeConfig {
    /// Priority fee in wei.
    pub fn priority_fee_wei(&self) -> u128 {
        self.priority_fee_gwei as u128 * 1_000_000_000
    }
}

/// Block explorer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Base URL of a Blockscout-compatible explorer (no trailing path).
    pub base_url: String,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://blockscout.lisk.com".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Cycle bounds and pacing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Number of transactions each wallet should reach per UTC day.
    pub daily_target: usize,

    /// Wait after the initial drain, before querying the explorer.
    pub settle_delay_ms: u64,

    /// Wait between a deposit and its matching withdrawal.
    pub post_deposit_delay_ms: u64,

    /// Wait after a withdrawal, before the next iteration.
    pub post_withdraw_delay_ms: u64,

    /// Lower bound of the deposit amount, in wei.
    pub min_amount_wei: u64,

    /// Upper bound of the deposit amount, in wei.
    pub max_amount_wei: u64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            daily_target: 40,
            settle_delay_ms: 10_000,
            post_deposit_delay_ms: 3_000,
            post_withdraw_delay_ms: 5_000,
            min_amount_wei: 1_000_000_000_000,  // 0.000001 ETH
            max_amount_wei: 2_000_000_000_000,  // 0.000002 ETH
        }
    }
}

impl CycleConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn post_deposit_delay(&self) -> Duration {
        Duration::from_millis(self.post_deposit_delay_ms)
    }

    pub fn post_withdraw_delay(&self) -> Duration {
        Duration::from_millis(self.post_withdraw_delay_ms)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
