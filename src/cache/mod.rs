//! Keyed query cache with single-flight fetches and a freshness window.
//!
//! A [`QueryCache`] maps a [`QueryKey`] to one of three states:
//!
//! ```text
//! Absent ──warm──→ Pending{seq} ──ok──→ Resolved{expires_at}
//!    ↑                 │  │                    │
//!    └─────err─────────┘  └──cancel──→ previous state
//!                                              │
//!    Resolved (expired) ──warm──→ Pending{seq, previous}
//! ```
//!
//! Every fetch gets a sequence number when it is registered. A completed
//! fetch is applied only while its entry is still the pending entry with that
//! number, so a cancelled or superseded fetch can finish in the background
//! without touching the cache.

mod entry;
mod error;
mod key;
mod stats;
mod store;

pub use entry::Snapshot;
pub use error::CacheError;
pub use key::QueryKey;
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use store::{QueryCache, DEFAULT_TTL};
