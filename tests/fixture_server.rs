//! Fixture server served over real sockets, read back through the HTTP
//! client.

use recordview::cache::DEFAULT_TTL;
use recordview::config::{ClientConfig, FixtureConfig};
use recordview::fixtures::{FixtureServer, RunningFixtures};
use recordview::prefetch::RecordStore;
use recordview::records::RecordId;
use recordview::source::{FetchError, RecordSource, RecordsClient};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn quick_config() -> FixtureConfig {
    FixtureConfig {
        list_latency_ms: 0,
        detail_latency_ms: 0,
        ..FixtureConfig::default()
    }
}

async fn start(config: FixtureConfig) -> (RunningFixtures, RecordsClient) {
    let running = FixtureServer::spawn(&config)
        .await
        .expect("Failed to start fixture server");
    let client = RecordsClient::with_base_url(&ClientConfig::default(), &running.base_url)
        .expect("Failed to build client");
    (running, client)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (running, _client) = start(quick_config()).await;

    let resp = reqwest::get(format!("{}/health", running.base_url))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "recordview-fixtures");

    running.stop().await;
}

#[tokio::test]
async fn test_list_serves_ten_titles() {
    let (running, client) = start(quick_config()).await;

    let records = client.list().await.unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].id, RecordId::from("1"));
    assert_eq!(records[0].title, "Four-dollar toast");
    assert_eq!(records[9].id, RecordId::from("10"));

    running.stop().await;
}

#[tokio::test]
async fn test_detail_and_missing_detail() {
    let (running, client) = start(quick_config()).await;

    let detail = client.detail(&RecordId::from("7")).await.unwrap().unwrap();
    assert_eq!(detail.title, "Tofu put a bird on it yuccie polaroid");
    let paragraphs = detail.paragraphs().count();
    assert!((1..=5).contains(&paragraphs), "got {} paragraphs", paragraphs);

    let missing = client.detail(&RecordId::from("42")).await.unwrap();
    assert!(missing.is_none());

    running.stop().await;
}

#[tokio::test]
async fn test_same_seed_serves_same_bodies() {
    let (first, first_client) = start(quick_config()).await;
    let (second, second_client) = start(quick_config()).await;

    let a = first_client.detail(&RecordId::from("2")).await.unwrap();
    let b = second_client.detail(&RecordId::from("2")).await.unwrap();
    assert_eq!(a, b);

    first.stop().await;
    second.stop().await;
}

#[tokio::test]
async fn test_injected_failures_surface_as_status_errors() {
    let config = FixtureConfig {
        fail_list: true,
        fail_ids: vec!["3".to_string()],
        ..quick_config()
    };
    let (running, client) = start(config).await;

    let err = client.list().await.unwrap_err();
    assert!(err.is_server_error());
    match err {
        FetchError::Status { status, message, .. } => {
            assert_eq!(status, 500);
            assert!(message.contains("/records"), "message: {}", message);
        }
        other => panic!("expected status error, got {:?}", other),
    }

    let err = client.detail(&RecordId::from("3")).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }));

    // Other records are unaffected.
    assert!(client.detail(&RecordId::from("4")).await.unwrap().is_some());

    running.stop().await;
}

#[tokio::test]
async fn test_unknown_path_is_404_json() {
    let (running, _client) = start(quick_config()).await;

    let resp = reqwest::get(format!("{}/nope", running.base_url))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["error"]["type"], "not_found");

    running.stop().await;
}

#[tokio::test]
async fn test_latency_is_applied() {
    let config = FixtureConfig {
        list_latency_ms: 150,
        detail_latency_ms: 250,
        ..FixtureConfig::default()
    };
    let (running, client) = start(config).await;

    let started = Instant::now();
    client.list().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(150));

    let started = Instant::now();
    client.detail(&RecordId::from("1")).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(250));

    running.stop().await;
}

#[tokio::test]
async fn test_concurrent_warms_hit_backend_once() {
    let config = FixtureConfig {
        detail_latency_ms: 200,
        ..quick_config()
    };
    let (running, client) = start(config).await;
    let store = RecordStore::new(Arc::new(client), DEFAULT_TTL);

    let id = RecordId::from("5");
    let (a, b, c) = tokio::join!(
        store.warm_detail(&id),
        store.warm_detail(&id),
        store.warm_detail(&id),
    );
    assert_eq!(a.unwrap(), b.unwrap());
    assert!(c.is_ok());
    assert_eq!(running.log.count("/records/5"), 1);

    // Fresh now: no further request.
    store.warm_detail(&id).await.unwrap();
    assert_eq!(running.log.count("/records/5"), 1);
    assert_eq!(store.stats().hits, 1);

    running.stop().await;
}

#[tokio::test]
async fn test_stop_refuses_new_connections() {
    let (running, client) = start(quick_config()).await;
    client.list().await.unwrap();
    running.stop().await;

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}
