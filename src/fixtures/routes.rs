use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::config::FixtureConfig;
use crate::fixtures::{FixtureData, FixtureError};
use crate::records::{RecordId, RecordResponse, RecordsResponse};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Paths served so far, in arrival order.
#[derive(Clone, Default)]
pub struct RequestLog {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RequestLog {
    fn push(&self, path: &str) {
        self.paths.lock().push(path.to_string());
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }

    /// How many requests hit exactly `path`.
    pub fn count(&self, path: &str) -> usize {
        self.paths.lock().iter().filter(|p| p.as_str() == path).count()
    }
}

#[derive(Clone)]
pub struct FixtureState {
    data: Arc<FixtureData>,
    list_latency: Duration,
    detail_latency: Duration,
    fail_list: bool,
    fail_ids: Arc<Vec<String>>,
    log: RequestLog,
}

impl FixtureState {
    pub fn new(config: &FixtureConfig) -> Self {
        let data = FixtureData::generate(config.seed);
        tracing::debug!(records = data.len(), seed = config.seed, "fixture data generated");
        Self {
            data: Arc::new(data),
            list_latency: config.list_latency(),
            detail_latency: config.detail_latency(),
            fail_list: config.fail_list,
            fail_ids: Arc::new(config.fail_ids.clone()),
            log: RequestLog::default(),
        }
    }

    pub fn log(&self) -> RequestLog {
        self.log.clone()
    }
}

pub fn build_router(state: FixtureState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/records", get(list_records))
        .route("/records/{id}", get(get_record))
        .fallback(not_found)
        .with_state(state)
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "recordview-fixtures".to_string(),
    })
}

async fn list_records(
    State(state): State<FixtureState>,
) -> Result<Json<RecordsResponse>, FixtureError> {
    state.log.push("/records");
    tokio::time::sleep(state.list_latency).await;

    if state.fail_list {
        return Err(FixtureError::Injected {
            path: "/records".to_string(),
        });
    }

    Ok(Json(RecordsResponse {
        records: state.data.summaries(),
    }))
}

async fn get_record(
    State(state): State<FixtureState>,
    Path(id): Path<String>,
) -> Result<Json<RecordResponse>, FixtureError> {
    let path = format!("/records/{}", id);
    state.log.push(&path);
    tokio::time::sleep(state.detail_latency).await;

    if state.fail_ids.iter().any(|failing| failing == &id) {
        return Err(FixtureError::Injected { path });
    }

    Ok(Json(RecordResponse {
        record: state.data.find(&RecordId::new(id)).cloned(),
    }))
}

async fn not_found(uri: Uri) -> FixtureError {
    FixtureError::NotFound {
        path: uri.path().to_string(),
    }
}
