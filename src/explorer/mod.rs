//! Block explorer integration.
//!
//! ```text
//! address → client.rs (GET /api/v2/addresses/{address}/transactions?filter=from)
//!         → types.rs (parse page, keep items dated today in UTC)
//!         → count (0 on any failure)
//! ```

pub mod client;
pub mod types;

pub use client::{ActivityCounter, ExplorerClient};
pub use types::{ExplorerError, ExplorerTransaction};
