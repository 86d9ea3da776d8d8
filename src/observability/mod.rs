//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! cycle driver, clients
//!     → logging.rs (structured tracing events to stdout)
//!     → metrics.rs (counters and gauges, optional Prometheus endpoint)
//! ```
//!
//! # Design Decisions
//! - Log level from config, overridden by RUST_LOG
//! - Addresses and tx hashes are logged; keys never are

pub mod logging;
pub mod metrics;
