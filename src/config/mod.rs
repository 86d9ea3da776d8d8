//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CyclerConfig (validated, immutable)
//!
//! PRIVATE_KEYS (environment, .env honoured)
//!     → blockchain::wallet (parse into signers)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Secrets never live in the config file

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::CyclerConfig;
pub use schema::ChainConfig;
pub use schema::CycleConfig;
pub use schema::ExplorerConfig;
pub use schema::FeeConfig;
pub use schema::ObservabilityConfig;
