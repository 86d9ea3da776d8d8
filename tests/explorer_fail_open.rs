//! Explorer client behaviour against a live mock HTTP server.

use std::sync::{Arc, Mutex};

use alloy::primitives::{address, Address};
use chrono::{Duration, Utc};
use wrap_cycler::config::ExplorerConfig;
use wrap_cycler::explorer::{ActivityCounter, ExplorerClient, ExplorerError};

mod common;

const ACCOUNT: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

fn client_for(addr: std::net::SocketAddr) -> ExplorerClient {
    ExplorerClient::new(&ExplorerConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_counts_only_today() {
    let now = Utc::now();
    let body = common::transactions_page(&[
        now.to_rfc3339(),
        now.to_rfc3339(),
        (now - Duration::days(1)).to_rfc3339(),
        (now - Duration::days(3)).to_rfc3339(),
    ]);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_by_server = seen.clone();
    let addr = common::start_programmable_backend(move |path, _| {
        seen_by_server.lock().unwrap().push(path);
        let body = body.clone();
        async move { (200, body) }
    })
    .await;

    let count = client_for(addr).transactions_today(ACCOUNT).await;
    assert_eq!(count, 2);

    let paths = seen.lock().unwrap();
    assert_eq!(paths.len(), 1, "exactly one request per wallet");
    assert!(paths[0].starts_with("/api/v2/addresses/0x"));
    assert!(paths[0].ends_with("/transactions?filter=from"));
    assert!(paths[0].to_lowercase().contains("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
}

#[tokio::test]
async fn test_server_error_counts_zero() {
    let addr = common::start_mock_backend(500, "{\"message\":\"boom\"}").await;
    let client = client_for(addr);

    assert_eq!(client.transactions_today(ACCOUNT).await, 0);
    match client.fetch_transactions(ACCOUNT).await {
        Err(ExplorerError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_json_counts_zero() {
    let addr = common::start_mock_backend(200, "<html>rate limited</html>").await;
    let client = client_for(addr);

    assert_eq!(client.transactions_today(ACCOUNT).await, 0);
    assert!(matches!(
        client.fetch_transactions(ACCOUNT).await,
        Err(ExplorerError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_missing_items_counts_zero() {
    let addr = common::start_mock_backend(200, "{\"next_page_params\":null}").await;
    assert_eq!(client_for(addr).transactions_today(ACCOUNT).await, 0);
}

#[tokio::test]
async fn test_items_without_timestamp_ignored() {
    let today = Utc::now().to_rfc3339();
    let body = format!(
        "{{\"items\":[{{\"hash\":\"0x1\"}},{{\"hash\":\"0x2\",\"timestamp\":\"{}\"}}]}}",
        today
    );
    let addr = common::start_programmable_backend(move |_, _| {
        let body = body.clone();
        async move { (200, body) }
    })
    .await;
    assert_eq!(client_for(addr).transactions_today(ACCOUNT).await, 1);
}

#[tokio::test]
async fn test_unparseable_timestamp_counts_zero() {
    let today = Utc::now().to_rfc3339();
    let body = format!(
        "{{\"items\":[{{\"hash\":\"0x1\",\"timestamp\":\"{}\"}},{{\"hash\":\"0x2\",\"timestamp\":\"not-a-date\"}}]}}",
        today
    );
    let addr = common::start_programmable_backend(move |_, _| {
        let body = body.clone();
        async move { (200, body) }
    })
    .await;
    assert_eq!(client_for(addr).transactions_today(ACCOUNT).await, 0);
}
