//! Wrapped-token deposit/withdraw cycler library.

pub mod blockchain;
pub mod config;
pub mod cycle;
pub mod explorer;
pub mod observability;

pub use config::CyclerConfig;
pub use cycle::CycleDriver;
