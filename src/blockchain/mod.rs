//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! PRIVATE_KEYS (environment)
//!     → wallet.rs (key parsing, signing)
//!     → weth.rs (contract calls encoded as TransactionIntent)
//!     → gas.rs (fees from latest base fee)
//!     → client.rs (sign, broadcast, no receipt wait)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod gas;
pub mod types;
pub mod wallet;
pub mod weth;

pub use client::BlockchainClient;
pub use types::{BlockchainError, BlockchainResult, ChainId, GasFees, TransactionIntent};
pub use wallet::Wallet;
pub use weth::{WethGateway, WrappedToken};
