//! Error responses of the fixture server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

/// Errors the fixture server answers with.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Failure configured through `fail_list` / `fail_ids`.
    #[error("Injected failure for '{path}'")]
    Injected { path: String },

    /// No route for the request.
    #[error("No route for '{path}'")]
    NotFound { path: String },
}

impl FixtureError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FixtureError::Injected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            FixtureError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            FixtureError::Injected { .. } => "injected_failure",
            FixtureError::NotFound { .. } => "not_found",
        }
    }
}

/// Errors starting or running the fixture server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Could not find available port in range {start}-{end}")]
    NoFreePort { start: u16, end: u16 },

    #[error("try_bind() must be called before run()")]
    NotBound,

    #[error("Fixture server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        (self.status_code(), Json(body)).into_response()
    }
}
