//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Query chain state (chain id, latest base fee, pending nonce)
//! - Sign and broadcast EIP-1559 transactions
//! - Bound every call with the configured timeout

use alloy::eips::BlockNumberOrTag;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::gas::compute_fees;
use crate::blockchain::types::{
    BlockchainError, BlockchainResult, ChainId, GasFees, TransactionIntent,
};
use crate::blockchain::wallet::Wallet;
use crate::config::ChainConfig;

/// Blockchain RPC client wrapper around a single endpoint.
#[derive(Clone)]
pub struct BlockchainClient {
    provider: DynProvider,
    config: ChainConfig,
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// Fails only on a malformed URL. A chain id mismatch or an unreachable
    /// endpoint is logged and the client is still returned.
    pub async fn new(config: ChainConfig) -> BlockchainResult<Self> {
        let rpc_url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        let provider = ProviderBuilder::new().connect_http(rpc_url).erased();

        let client = Self {
            provider,
            timeout_duration: config.rpc_timeout(),
            config,
        };

        match client.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    rpc_url = %client.config.rpc_url,
                    chain_id = client.config.chain_id,
                    "Blockchain client initialized"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Blockchain client initialized but chain verification failed"
                );
            }
        }

        Ok(client)
    }

    /// Await an RPC future, mapping timeouts and transport errors.
    async fn call<F, T, E>(&self, method: &'static str, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: Into<BlockchainError>,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                let err = e.into();
                tracing::debug!(method, error = %err, "RPC error");
                Err(err)
            }
            Err(_) => {
                tracing::debug!(method, "RPC timeout");
                Err(BlockchainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.config.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.call("eth_chainId", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Base fee of the latest block, `None` when the block carries none.
    pub async fn get_latest_base_fee(&self) -> BlockchainResult<Option<u64>> {
        let block = self
            .call(
                "eth_getBlockByNumber",
                self.provider.get_block_by_number(BlockNumberOrTag::Latest),
            )
            .await?
            .ok_or_else(|| BlockchainError::Rpc("Latest block not returned".to_string()))?;
        Ok(block.header.base_fee_per_gas)
    }

    /// Fees for the next transaction, given the configured tip in wei.
    pub async fn gas_fees(&self, priority_fee_wei: u128) -> BlockchainResult<GasFees> {
        let base_fee = self.get_latest_base_fee().await?;
        Ok(compute_fees(base_fee, priority_fee_wei))
    }

    /// Pending-state nonce for an address.
    pub async fn get_pending_nonce(&self, address: Address) -> BlockchainResult<u64> {
        self.call(
            "eth_getTransactionCount",
            self.provider.get_transaction_count(address).pending(),
        )
        .await
    }

    /// Sign `intent` with `wallet` and broadcast it.
    ///
    /// Returns as soon as the node accepts the raw transaction. Inclusion is
    /// never awaited.
    pub async fn send(&self, wallet: &Wallet, intent: TransactionIntent) -> BlockchainResult<TxHash> {
        if intent.from != wallet.address() {
            return Err(BlockchainError::Signing(format!(
                "intent sender {} does not match wallet {}",
                intent.from,
                wallet.address()
            )));
        }

        let nonce = self.get_pending_nonce(intent.from).await?;

        let request = TransactionRequest::default()
            .with_from(intent.from)
            .with_to(intent.to)
            .with_value(intent.value)
            .with_input(intent.input)
            .with_nonce(nonce)
            .with_chain_id(self.config.chain_id)
            .with_gas_limit(intent.gas_limit)
            .with_max_fee_per_gas(intent.fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(intent.fees.max_priority_fee_per_gas);

        let envelope = request
            .build(&wallet.ethereum_wallet())
            .await
            .map_err(|e| BlockchainError::Signing(e.to_string()))?;

        let pending = self
            .call("eth_sendRawTransaction", self.provider.send_tx_envelope(envelope))
            .await?;
        let tx_hash = *pending.tx_hash();

        tracing::debug!(tx_hash = %tx_hash, nonce, "Transaction broadcast");
        Ok(tx_hash)
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Get the configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
