//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Every problem is
//! collected so a bad config file is reported in one pass.

use alloy::primitives::Address;
use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::CyclerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &CyclerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = url::Url::parse(&config.chain.rpc_url) {
        errors.push(ValidationError::new("chain.rpc_url", format!("invalid URL: {}", e)));
    }
    if config.chain.chain_id == 0 {
        errors.push(ValidationError::new("chain.chain_id", "must be non-zero"));
    }
    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("chain.rpc_timeout_secs", "must be greater than 0"));
    }
    if config.chain.weth_address.parse::<Address>().is_err() {
        errors.push(ValidationError::new(
            "chain.weth_address",
            format!("'{}' is not an address", config.chain.weth_address),
        ));
    }

    if config.fees.gas_limit == 0 {
        errors.push(ValidationError::new("fees.gas_limit", "must be greater than 0"));
    }

    if let Err(e) = url::Url::parse(&config.explorer.base_url) {
        errors.push(ValidationError::new("explorer.base_url", format!("invalid URL: {}", e)));
    }
    if config.explorer.timeout_secs == 0 {
        errors.push(ValidationError::new("explorer.timeout_secs", "must be greater than 0"));
    }

    let cycle = &config.cycle;
    if cycle.min_amount_wei == 0 {
        errors.push(ValidationError::new("cycle.min_amount_wei", "must be greater than 0"));
    }
    if cycle.min_amount_wei > cycle.max_amount_wei {
        errors.push(ValidationError::new(
            "cycle.max_amount_wei",
            format!(
                "must be >= min_amount_wei ({} > {})",
                cycle.min_amount_wei, cycle.max_amount_wei
            ),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
