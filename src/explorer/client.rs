//! Blockscout-compatible REST client.
//!
//! One unauthenticated GET per wallet. The public counter is fail-open: any
//! transport, status or payload problem is logged and counted as zero.

use alloy::primitives::Address;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::time::Duration;

use crate::config::ExplorerConfig;
use crate::explorer::types::{count_on_day, ExplorerError, ExplorerTransaction, TransactionsPage};

/// Source of "transactions sent today" for the cycle driver.
#[async_trait]
pub trait ActivityCounter: Send + Sync {
    async fn transactions_today(&self, address: Address) -> usize;
}

/// HTTP client for the explorer API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ExplorerClient {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ExplorerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn transactions_url(&self, address: Address) -> String {
        format!(
            "{}/api/v2/addresses/{}/transactions?filter=from",
            self.base_url, address
        )
    }

    /// Fetch the first page of outgoing transactions for `address`.
    pub async fn fetch_transactions(
        &self,
        address: Address,
    ) -> Result<Vec<ExplorerTransaction>, ExplorerError> {
        let res = self.http.get(self.transactions_url(address)).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ExplorerError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = res.text().await?;
        let page: TransactionsPage = serde_json::from_str(&body)
            .map_err(|e| ExplorerError::Malformed(e.to_string()))?;
        Ok(page.items)
    }

    /// Count transactions sent by `address` on `day` (UTC). Never fails.
    pub async fn count_on(&self, address: Address, day: NaiveDate) -> usize {
        let counted = self
            .fetch_transactions(address)
            .await
            .and_then(|items| count_on_day(&items, day));
        match counted {
            Ok(count) => {
                tracing::info!(address = %address, count, "Transactions today");
                count
            }
            Err(e @ ExplorerError::Malformed(_)) => {
                tracing::warn!(address = %address, error = %e, "Invalid explorer response, assuming no transactions");
                0
            }
            Err(e) => {
                tracing::error!(address = %address, error = %e, "Failed to fetch transactions, assuming none");
                0
            }
        }
    }
}

#[async_trait]
impl ActivityCounter for ExplorerClient {
    async fn transactions_today(&self, address: Address) -> usize {
        self.count_on(address, Utc::now().date_naive()).await
    }
}
