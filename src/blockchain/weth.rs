//! Wrapped-native-token (WETH9-style) contract binding.
//!
//! Deposits and withdrawals go through a fixed fee schedule: fees are
//! recomputed from the latest block before every call and the gas limit is
//! constant.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult, GasFees, TransactionIntent};
use crate::blockchain::wallet::Wallet;
use crate::config::FeeConfig;

sol! {
    #[sol(rpc)]
    contract IWETH9 {
        function balanceOf(address owner) external view returns (uint256);
        function withdraw(uint256 wad) external;
        function deposit() external payable;
    }
}

/// Operations the cycle driver needs from the wrapped token.
#[async_trait]
pub trait WrappedToken: Send + Sync {
    /// Wrapped balance held by `owner`.
    async fn balance_of(&self, owner: Address) -> BlockchainResult<U256>;

    /// Wrap `amount` of the native coin.
    async fn deposit(&self, wallet: &Wallet, amount: U256) -> BlockchainResult<TxHash>;

    /// Unwrap `amount` back to the native coin.
    async fn withdraw(&self, wallet: &Wallet, amount: U256) -> BlockchainResult<TxHash>;
}

/// Build the intent for `deposit()` carrying `amount` as value.
pub fn deposit_intent(
    contract: Address,
    from: Address,
    amount: U256,
    gas_limit: u64,
    fees: GasFees,
) -> TransactionIntent {
    TransactionIntent {
        from,
        to: contract,
        value: amount,
        gas_limit,
        input: Bytes::from(IWETH9::depositCall {}.abi_encode()),
        fees,
    }
}

/// Build the intent for `withdraw(amount)`.
pub fn withdraw_intent(
    contract: Address,
    from: Address,
    amount: U256,
    gas_limit: u64,
    fees: GasFees,
) -> TransactionIntent {
    TransactionIntent {
        from,
        to: contract,
        value: U256::ZERO,
        gas_limit,
        input: Bytes::from(IWETH9::withdrawCall { wad: amount }.abi_encode()),
        fees,
    }
}

/// On-chain WETH contract reached through [`BlockchainClient`].
#[derive(Debug, Clone)]
pub struct WethGateway {
    client: BlockchainClient,
    contract: Address,
    fees: FeeConfig,
}

impl WethGateway {
    pub fn new(client: BlockchainClient, contract: Address, fees: FeeConfig) -> Self {
        Self { client, contract, fees }
    }

    /// Parse the contract address from the chain config.
    pub fn from_config(client: BlockchainClient, fees: FeeConfig) -> BlockchainResult<Self> {
        let contract: Address = client.config().weth_address.parse().map_err(|e| {
            BlockchainError::Contract(format!("Invalid WETH address: {}", e))
        })?;
        Ok(Self::new(client, contract, fees))
    }

    pub fn contract(&self) -> Address {
        self.contract
    }

    async fn submit(&self, wallet: &Wallet, build: impl FnOnce(GasFees) -> TransactionIntent) -> BlockchainResult<TxHash> {
        let fees = self.client.gas_fees(self.fees.priority_fee_wei()).await?;
        self.client.send(wallet, build(fees)).await
    }
}

#[async_trait]
impl WrappedToken for WethGateway {
    async fn balance_of(&self, owner: Address) -> BlockchainResult<U256> {
        let weth = IWETH9::new(self.contract, self.client.provider().clone());
        let balance = tokio::time::timeout(
            self.client.config().rpc_timeout(),
            weth.balanceOf(owner).call(),
        )
        .await
        .map_err(|_| BlockchainError::Timeout(self.client.config().rpc_timeout_secs))??;
        Ok(balance)
    }

    async fn deposit(&self, wallet: &Wallet, amount: U256) -> BlockchainResult<TxHash> {
        let (contract, gas_limit) = (self.contract, self.fees.gas_limit);
        self.submit(wallet, |fees| {
            deposit_intent(contract, wallet.address(), amount, gas_limit, fees)
        })
        .await
    }

    async fn withdraw(&self, wallet: &Wallet, amount: U256) -> BlockchainResult<TxHash> {
        let (contract, gas_limit) = (self.contract, self.fees.gas_limit);
        self.submit(wallet, |fees| {
            withdraw_intent(contract, wallet.address(), amount, gas_limit, fees)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::gas::compute_fees;
    use alloy::primitives::address;

    const WETH: Address = address!("4200000000000000000000000000000000000006");
    const SENDER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

    #[test]
    fn test_deposit_intent() {
        let fees = compute_fees(Some(7), 1_000_000_000);
        let intent = deposit_intent(WETH, SENDER, U256::from(1_500_000_000_000u64), 100_000, fees);

        assert_eq!(intent.to, WETH);
        assert_eq!(intent.from, SENDER);
        assert_eq!(intent.value, U256::from(1_500_000_000_000u64));
        assert_eq!(intent.gas_limit, 100_000);
        assert_eq!(intent.fees, fees);
        // deposit() selector, no arguments
        assert_eq!(intent.input.as_ref(), &[0xd0, 0xe3, 0x0d, 0xb0]);
    }

    #[test]
    fn test_withdraw_intent() {
        let amount = U256::from(1_234_567u64);
        let intent = withdraw_intent(WETH, SENDER, amount, 100_000, compute_fees(None, 1));

        assert_eq!(intent.value, U256::ZERO);
        assert_eq!(intent.input.len(), 4 + 32);
        // withdraw(uint256) selector
        assert_eq!(&intent.input[..4], &[0x2e, 0x1a, 0x7d, 0x4d]);
        assert_eq!(U256::from_be_slice(&intent.input[4..]), amount);
    }

    #[tokio::test]
    async fn test_gateway_from_config_rejects_bad_address() {
        let mut chain = crate::config::ChainConfig::default();
        chain.rpc_url = "http://127.0.0.1:1".to_string();
        chain.rpc_timeout_secs = 1;
        chain.weth_address = "0x42".to_string();
        let client = BlockchainClient::new(chain).await.unwrap();

        let err = WethGateway::from_config(client, FeeConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid WETH address"));
    }
}
