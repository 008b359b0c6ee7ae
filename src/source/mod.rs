//! The record backend seam.
//!
//! Everything above this module (cache, prefetch, UI) talks to a
//! [`RecordSource`]. The production implementation is [`RecordsClient`],
//! an HTTP client for the fixture server; tests plug in in-memory fakes.

mod client;
mod error;

use async_trait::async_trait;

use crate::records::{RecordDetail, RecordId, RecordSummary};

pub use client::RecordsClient;
pub use error::FetchError;

/// Backend that can list records and load a single record.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Load every record summary.
    async fn list(&self) -> Result<Vec<RecordSummary>, FetchError>;

    /// Load one record. `Ok(None)` means the backend has no such id.
    async fn detail(&self, id: &RecordId) -> Result<Option<RecordDetail>, FetchError>;
}
