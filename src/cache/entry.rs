use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::cache::CacheError;

pub(crate) type Outcome<V> = Result<Arc<V>, CacheError>;
pub(crate) type OutcomeSender<V> = Arc<watch::Sender<Option<Outcome<V>>>>;

pub(crate) enum Entry<V> {
    Pending(PendingEntry<V>),
    Resolved(ResolvedEntry<V>),
}

pub(crate) struct PendingEntry<V> {
    pub seq: u64,
    /// Completion channel shared by every waiter of this fetch.
    pub done: OutcomeSender<V>,
    /// Expired value this fetch is replacing; restored on cancel.
    pub previous: Option<ResolvedEntry<V>>,
}

pub(crate) struct ResolvedEntry<V> {
    pub value: Arc<V>,
    pub expires_at: Instant,
}

impl<V> ResolvedEntry<V> {
    pub fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// What rendering sees for a key.
#[derive(Debug)]
pub enum Snapshot<V> {
    Absent,
    /// A fetch is in flight. `previous` is the expired value it replaces.
    Pending { previous: Option<Arc<V>> },
    Fresh(Arc<V>),
    /// Resolved but past its freshness window; the next warm refetches.
    Stale(Arc<V>),
}

impl<V> Clone for Snapshot<V> {
    fn clone(&self) -> Self {
        match self {
            Snapshot::Absent => Snapshot::Absent,
            Snapshot::Pending { previous } => Snapshot::Pending {
                previous: previous.clone(),
            },
            Snapshot::Fresh(value) => Snapshot::Fresh(Arc::clone(value)),
            Snapshot::Stale(value) => Snapshot::Stale(Arc::clone(value)),
        }
    }
}

impl<V> Snapshot<V> {
    /// Best value available for display, fresh or not.
    pub fn value(&self) -> Option<&Arc<V>> {
        match self {
            Snapshot::Absent => None,
            Snapshot::Pending { previous } => previous.as_ref(),
            Snapshot::Fresh(value) | Snapshot::Stale(value) => Some(value),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Snapshot::Pending { .. })
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, Snapshot::Fresh(_))
    }
}
