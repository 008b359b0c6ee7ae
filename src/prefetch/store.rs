use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheError, CacheStatsSnapshot, QueryCache, QueryKey, Snapshot};
use crate::records::{RecordDetail, RecordId, RecordSummary};
use crate::source::RecordSource;

/// Record list and record details, cached over a [`RecordSource`].
///
/// Cheap to clone; clones share caches and source.
#[derive(Clone)]
pub struct RecordStore {
    source: Arc<dyn RecordSource>,
    list: QueryCache<Vec<RecordSummary>>,
    details: QueryCache<Option<RecordDetail>>,
}

impl RecordStore {
    pub fn new(source: Arc<dyn RecordSource>, ttl: Duration) -> Self {
        tracing::debug!(source = source.name(), ttl_secs = ttl.as_secs(), "record store created");
        Self {
            source,
            list: QueryCache::new(ttl),
            details: QueryCache::new(ttl),
        }
    }

    /// Warm the list entry (`("records")`).
    pub async fn warm_list(&self) -> Result<Arc<Vec<RecordSummary>>, CacheError> {
        let source = Arc::clone(&self.source);
        self.list
            .warm(QueryKey::records(), move || async move { source.list().await })
            .await
    }

    /// Warm the detail entry `("records", id)`. A resolved `None` means the
    /// backend has no such record.
    pub async fn warm_detail(
        &self,
        id: &RecordId,
    ) -> Result<Arc<Option<RecordDetail>>, CacheError> {
        let source = Arc::clone(&self.source);
        let target = id.clone();
        self.details
            .warm(QueryKey::record(id), move || async move {
                source.detail(&target).await
            })
            .await
    }

    pub fn list_snapshot(&self) -> Snapshot<Vec<RecordSummary>> {
        self.list.snapshot(&QueryKey::records())
    }

    pub fn detail_snapshot(&self, id: &RecordId) -> Snapshot<Option<RecordDetail>> {
        self.details.snapshot(&QueryKey::record(id))
    }

    /// Cancel pending list and detail fetches under `prefix`.
    pub fn cancel_outgoing(&self, prefix: &QueryKey) -> usize {
        let cancelled = self.list.cancel_outgoing(prefix) + self.details.cancel_outgoing(prefix);
        if cancelled > 0 {
            tracing::debug!(prefix = %prefix, cancelled, "cancelled outgoing fetches");
        }
        cancelled
    }

    /// List and detail fetches currently in flight.
    pub fn pending_count(&self) -> usize {
        self.list.pending_count() + self.details.pending_count()
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.list.stats() + self.details.stats()
    }
}
