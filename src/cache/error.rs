use thiserror::Error;

/// Outcome of a cache warm that did not produce a value.
///
/// Cloneable because one fetch outcome is delivered to every waiter that
/// joined the pending entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The underlying fetch failed. The entry has reverted to absent, so the
    /// next warm retries.
    #[error("Fetching '{key}' failed: {message}")]
    FetchFailed { key: String, message: String },

    /// The pending entry was cancelled before its fetch completed. The fetch
    /// may still finish; its result is discarded.
    #[error("Fetching '{key}' was cancelled")]
    Cancelled { key: String },
}

impl CacheError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CacheError::Cancelled { .. })
    }

    /// Short text for error indicators.
    pub fn user_message(&self) -> &'static str {
        match self {
            CacheError::FetchFailed { .. } => "Something went wrong",
            CacheError::Cancelled { .. } => "Request cancelled",
        }
    }
}
