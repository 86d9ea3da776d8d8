//! Run counters, exported for Prometheus when enabled.
//!
//! # Metrics
//! - `cycler_transactions_total` (counter): broadcasts by `kind` and `outcome`
//! - `cycler_wallets_processed_total` (counter)
//! - `cycler_planned_loops` (gauge): iterations planned for the current wallet
//!
//! Without an installed recorder every call is a no-op.

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Kind of wrapped-token transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdraw,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Deposit => "deposit",
            TxKind::Withdraw => "withdraw",
        }
    }
}

pub fn record_transaction(kind: TxKind, success: bool) {
    let outcome = if success { "ok" } else { "error" };
    counter!("cycler_transactions_total", "kind" => kind.as_str(), "outcome" => outcome).increment(1);
}

pub fn record_wallet_processed() {
    counter!("cycler_wallets_processed_total").increment(1);
}

pub fn record_planned_loops(loops: usize) {
    gauge!("cycler_planned_loops").set(loops as f64);
}
