use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters describing what the cache did.
#[derive(Debug, Default)]
pub struct CacheStats {
    fetches: AtomicU64,
    hits: AtomicU64,
    joins: AtomicU64,
    discarded: AtomicU64,
    cancelled: AtomicU64,
}

/// Point-in-time copy of [`CacheStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStatsSnapshot {
    /// Fetches actually issued to the source.
    pub fetches: u64,
    /// Warms answered from a fresh entry.
    pub hits: u64,
    /// Warms that attached to an already pending fetch.
    pub joins: u64,
    /// Completed fetches whose result was not applied.
    pub discarded: u64,
    /// Pending entries reverted by `cancel_outgoing`.
    pub cancelled: u64,
}

impl CacheStats {
    pub(crate) fn record_fetch(&self) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_join(&self) {
        self.joins.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_discarded(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_cancelled(&self, count: u64) {
        self.cancelled.fetch_add(count, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            fetches: self.fetches.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            joins: self.joins.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
        }
    }
}

impl std::ops::Add for CacheStatsSnapshot {
    type Output = CacheStatsSnapshot;

    fn add(self, other: Self) -> Self {
        CacheStatsSnapshot {
            fetches: self.fetches + other.fetches,
            hits: self.hits + other.hits,
            joins: self.joins + other.joins,
            discarded: self.discarded + other.discarded,
            cancelled: self.cancelled + other.cancelled,
        }
    }
}
