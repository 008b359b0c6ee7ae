//! Prefetch-on-intent.
//!
//! [`RecordStore`] puts the record list and record details behind
//! [`QueryCache`](crate::cache::QueryCache)s. [`LinkIntents`] turns pointer
//! intent (hover, press) on a sidebar link into cache warm-ups and decides
//! when a press is allowed to navigate.

mod intent;
mod navigator;
mod store;

pub use intent::{LinkIntents, PressModifiers, PressOutcome, WarmFuture};
pub use navigator::{NavigationTicket, Navigator};
pub use store::RecordStore;
