//! Explorer response shapes and the day filter.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;

/// One page of `GET /api/v2/addresses/{address}/transactions`.
///
/// Only the fields the counter reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsPage {
    pub items: Vec<ExplorerTransaction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExplorerTransaction {
    pub hash: Option<String>,
    pub timestamp: Option<String>,
}

/// Errors from the explorer HTTP call.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("explorer returned {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("malformed explorer response: {0}")]
    Malformed(String),
}

/// Count transactions whose explorer timestamp falls on `day` (UTC).
///
/// Items without a timestamp are ignored. A timestamp that is not RFC 3339
/// makes the whole page malformed.
pub fn count_on_day(items: &[ExplorerTransaction], day: NaiveDate) -> Result<usize, ExplorerError> {
    let mut count = 0;
    for tx in items {
        let Some(ts) = tx.timestamp.as_deref() else {
            continue;
        };
        let at = DateTime::parse_from_rfc3339(ts).map_err(|e| {
            tracing::debug!(hash = ?tx.hash, timestamp = ts, error = %e, "Unparseable timestamp");
            ExplorerError::Malformed(format!("invalid timestamp '{}': {}", ts, e))
        })?;
        if at.with_timezone(&Utc).date_naive() == day {
            count += 1;
        }
    }
    Ok(count)
}
