//! Wallet loading and transaction signing.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Environment variable holding the comma-separated private keys.
pub const PRIVATE_KEYS_ENV_VAR: &str = "PRIVATE_KEYS";

/// A private key and its derived address.
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// Accepts keys with or without the `0x` prefix. The key itself never
    /// appears in errors or logs.
    pub fn from_private_key(private_key_hex: &str) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.trim();
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        Ok(Self { signer })
    }

    /// Parse a comma-separated key list. Blank entries are skipped.
    pub fn parse_list(keys: &str) -> BlockchainResult<Vec<Self>> {
        keys.split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .enumerate()
            .map(|(i, k)| {
                Self::from_private_key(k).map_err(|e| {
                    BlockchainError::Wallet(format!("key #{}: {}", i + 1, e))
                })
            })
            .collect()
    }

    /// Load every wallet listed in `PRIVATE_KEYS`.
    pub fn all_from_env() -> BlockchainResult<Vec<Self>> {
        let keys = std::env::var(PRIVATE_KEYS_ENV_VAR).map_err(|_| {
            BlockchainError::Wallet(format!(
                "Environment variable {} not set",
                PRIVATE_KEYS_ENV_VAR
            ))
        })?;

        let wallets = Self::parse_list(&keys)?;
        if wallets.is_empty() {
            return Err(BlockchainError::Wallet(format!(
                "{} contains no keys",
                PRIVATE_KEYS_ENV_VAR
            )));
        }
        Ok(wallets)
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Signing wallet for building transaction envelopes.
    pub fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .finish()
    }
}
