use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::cache::entry::{Entry, Outcome, PendingEntry, ResolvedEntry};
use crate::cache::{CacheError, CacheStats, CacheStatsSnapshot, QueryKey, Snapshot};
use crate::source::FetchError;

/// Freshness window of a resolved entry.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Shared, cloneable query cache.
///
/// All clones see the same entries. The entry map is guarded by a
/// `parking_lot` mutex that is never held across an await; fetches run on
/// spawned tasks and report back through [`QueryCache::complete`].
pub struct QueryCache<V> {
    inner: Arc<Mutex<CacheInner<V>>>,
    stats: Arc<CacheStats>,
    ttl: Duration,
}

struct CacheInner<V> {
    entries: HashMap<QueryKey, Entry<V>>,
    /// Last sequence number handed out. Monotonic for the cache's lifetime,
    /// therefore monotonic per key as well.
    next_seq: u64,
}

enum Begin<V> {
    Fresh(Arc<V>),
    Wait(watch::Receiver<Option<Outcome<V>>>),
}

impl<V> Clone for QueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stats: Arc::clone(&self.stats),
            ttl: self.ttl,
        }
    }
}

impl<V> QueryCache<V>
where
    V: Send + Sync + 'static,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheInner {
                entries: HashMap::new(),
                next_seq: 0,
            })),
            stats: Arc::new(CacheStats::default()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Make sure `key` holds a fresh value and return it.
    ///
    /// - fresh entry: returned without calling `fetch`
    /// - pending entry: waits for that fetch instead of issuing another
    /// - absent or expired entry: calls `fetch` once and waits for it
    ///
    /// The fetch runs on its own task, so dropping the returned future does
    /// not abort it; its result is still applied if the entry was not
    /// cancelled in the meantime.
    pub async fn warm<F, Fut>(&self, key: QueryKey, fetch: F) -> Result<Arc<V>, CacheError>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<V, FetchError>> + Send + 'static,
    {
        match self.begin(key.clone(), fetch) {
            Begin::Fresh(value) => Ok(value),
            Begin::Wait(rx) => wait_outcome(&key, rx).await,
        }
    }

    fn begin<F, Fut>(&self, key: QueryKey, fetch: F) -> Begin<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, FetchError>> + Send + 'static,
    {
        let now = Instant::now();
        let mut inner = self.inner.lock();

        match inner.entries.get(&key) {
            Some(Entry::Resolved(entry)) if entry.is_fresh(now) => {
                self.stats.record_hit();
                tracing::debug!(key = %key, "cache hit");
                return Begin::Fresh(Arc::clone(&entry.value));
            }
            Some(Entry::Pending(pending)) => {
                self.stats.record_join();
                tracing::debug!(key = %key, seq = pending.seq, "joining pending fetch");
                return Begin::Wait(pending.done.subscribe());
            }
            _ => {}
        }

        let previous = match inner.entries.remove(&key) {
            Some(Entry::Resolved(entry)) => Some(entry),
            _ => None,
        };
        inner.next_seq += 1;
        let seq = inner.next_seq;
        let (tx, rx) = watch::channel(None);
        let done = Arc::new(tx);
        inner.entries.insert(
            key.clone(),
            Entry::Pending(PendingEntry {
                seq,
                done: Arc::clone(&done),
                previous,
            }),
        );
        drop(inner);

        self.stats.record_fetch();
        tracing::debug!(key = %key, seq, "issuing fetch");

        let request = fetch();
        let cache = self.clone();
        tokio::spawn(async move {
            let result = request.await;
            cache.complete(key, seq, result, &done);
        });

        Begin::Wait(rx)
    }

    /// Apply a finished fetch if it is still the latest for its key.
    fn complete(
        &self,
        key: QueryKey,
        seq: u64,
        result: Result<V, FetchError>,
        done: &watch::Sender<Option<Outcome<V>>>,
    ) {
        let mut inner = self.inner.lock();
        let current = matches!(
            inner.entries.get(&key),
            Some(Entry::Pending(pending)) if pending.seq == seq
        );
        if !current {
            drop(inner);
            self.stats.record_discarded();
            tracing::debug!(key = %key, seq, "discarding superseded fetch result");
            return;
        }

        let outcome = match result {
            Ok(value) => {
                let value = Arc::new(value);
                inner.entries.insert(
                    key.clone(),
                    Entry::Resolved(ResolvedEntry {
                        value: Arc::clone(&value),
                        expires_at: Instant::now() + self.ttl,
                    }),
                );
                tracing::debug!(key = %key, seq, "fetch resolved");
                Ok(value)
            }
            Err(err) => {
                inner.entries.remove(&key);
                tracing::warn!(key = %key, seq, error = %err, "fetch failed");
                Err(CacheError::FetchFailed {
                    key: key.to_string(),
                    message: err.to_string(),
                })
            }
        };
        drop(inner);

        done.send_replace(Some(outcome));
    }

    /// Abandon every pending fetch whose key starts with `prefix`.
    ///
    /// Each cancelled entry reverts to what it held before the fetch (the
    /// expired value, or nothing) and its waiters get
    /// [`CacheError::Cancelled`]. The fetches themselves keep running; their
    /// results are discarded on arrival. Returns how many entries were
    /// cancelled.
    pub fn cancel_outgoing(&self, prefix: &QueryKey) -> usize {
        let mut inner = self.inner.lock();
        let keys: Vec<QueryKey> = inner
            .entries
            .iter()
            .filter(|(key, entry)| key.starts_with(prefix) && matches!(entry, Entry::Pending(_)))
            .map(|(key, _)| key.clone())
            .collect();

        let mut notify = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(Entry::Pending(pending)) = inner.entries.remove(&key) {
                tracing::debug!(key = %key, seq = pending.seq, "cancelling pending fetch");
                if let Some(previous) = pending.previous {
                    inner.entries.insert(key.clone(), Entry::Resolved(previous));
                }
                notify.push((key, pending.done));
            }
        }
        drop(inner);

        for (key, done) in &notify {
            done.send_replace(Some(Err(CacheError::Cancelled {
                key: key.to_string(),
            })));
        }

        self.stats.record_cancelled(notify.len() as u64);
        notify.len()
    }

    /// Current state of `key`, for rendering.
    pub fn snapshot(&self, key: &QueryKey) -> Snapshot<V> {
        let now = Instant::now();
        let inner = self.inner.lock();
        match inner.entries.get(key) {
            None => Snapshot::Absent,
            Some(Entry::Pending(pending)) => Snapshot::Pending {
                previous: pending
                    .previous
                    .as_ref()
                    .map(|entry| Arc::clone(&entry.value)),
            },
            Some(Entry::Resolved(entry)) if entry.is_fresh(now) => {
                Snapshot::Fresh(Arc::clone(&entry.value))
            }
            Some(Entry::Resolved(entry)) => Snapshot::Stale(Arc::clone(&entry.value)),
        }
    }

    /// Number of keys with a fetch in flight.
    pub fn pending_count(&self) -> usize {
        self.inner
            .lock()
            .entries
            .values()
            .filter(|entry| matches!(entry, Entry::Pending(_)))
            .count()
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }
}

async fn wait_outcome<V>(
    key: &QueryKey,
    mut rx: watch::Receiver<Option<Outcome<V>>>,
) -> Result<Arc<V>, CacheError> {
    let cancelled = || CacheError::Cancelled {
        key: key.to_string(),
    };
    match rx.wait_for(Option::is_some).await {
        Ok(outcome) => (*outcome).clone().unwrap_or_else(|| Err(cancelled())),
        Err(_) => Err(cancelled()),
    }
}
