use thiserror::Error;

/// Errors raised while talking to the record backend.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout or other transport failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status.
    #[error("Backend returned {status} for '{url}': {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    /// Response body was not the expected envelope.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Client could not be constructed.
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// Failure raised by a non-HTTP source.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Whether the failure came from the backend itself (5xx) rather than the
    /// request or the network.
    pub fn is_server_error(&self) -> bool {
        matches!(self, FetchError::Status { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_includes_code() {
        let err = FetchError::Status {
            url: "http://127.0.0.1/records/3".to_string(),
            status: 500,
            message: "Injected failure".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.is_server_error());
    }

    #[test]
    fn other_error_is_not_server_error() {
        assert!(!FetchError::Other("boom".to_string()).is_server_error());
    }
}
