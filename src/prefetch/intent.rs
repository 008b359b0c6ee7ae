use std::future::Future;
use std::pin::Pin;

use crate::cache::{CacheError, QueryKey};
use crate::prefetch::{NavigationTicket, Navigator, RecordStore};
use crate::records::RecordId;

/// A warm-up for the runtime to drive. Resolves once the cache entry has
/// settled (resolved, failed or cancelled).
pub type WarmFuture = Pin<Box<dyn Future<Output = Result<(), CacheError>> + Send + 'static>>;

/// Modifier state at the moment of a press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
    /// Pressed with something other than the primary button.
    pub secondary_button: bool,
}

impl PressModifiers {
    /// Whether the press asks for the platform's "open in new context"
    /// behaviour, which must not be intercepted.
    pub fn opens_new_context(&self) -> bool {
        self.ctrl || self.shift || self.alt || self.meta || self.secondary_button
    }
}

/// Result of pressing a link.
pub enum PressOutcome {
    /// Not intercepted: navigate right away with default behaviour.
    Native(RecordId),
    /// Intercepted: drive `warm`, then call [`LinkIntents::settle`] with
    /// `ticket` to learn whether to navigate.
    Intercepted {
        ticket: NavigationTicket,
        warm: WarmFuture,
    },
}

/// Intent handling for sidebar links.
pub struct LinkIntents {
    store: RecordStore,
    navigator: Navigator,
    pending: Option<NavigationTicket>,
}

impl LinkIntents {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            navigator: Navigator::default(),
            pending: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Pointer entered the link for `id`. Returns a warm-up unless the entry
    /// is already fresh or in flight.
    pub fn hover(&self, id: &RecordId) -> Option<WarmFuture> {
        let snapshot = self.store.detail_snapshot(id);
        if snapshot.is_fresh() || snapshot.is_pending() {
            return None;
        }

        tracing::debug!(record = %id, "prefetching on hover");
        let store = self.store.clone();
        let id = id.clone();
        Some(Box::pin(async move { store.warm_detail(&id).await.map(|_| ()) }))
    }

    /// Link for `id` was pressed.
    ///
    /// Modified presses are left to native behaviour. Otherwise every other
    /// outgoing record fetch is cancelled before this one is warmed, so a
    /// slower, older press can neither overwrite the cache nor navigate.
    pub fn press(&mut self, id: RecordId, modifiers: PressModifiers) -> PressOutcome {
        if modifiers.opens_new_context() {
            tracing::debug!(record = %id, "press left to native navigation");
            self.navigated_elsewhere();
            return PressOutcome::Native(id);
        }

        let ticket = self.navigator.begin(id.clone());
        self.pending = Some(ticket.clone());
        self.store.cancel_outgoing(&QueryKey::records());
        tracing::debug!(record = %id, seq = ticket.seq(), "press intercepted, warming");

        let store = self.store.clone();
        let warm: WarmFuture = Box::pin(async move { store.warm_detail(&id).await.map(|_| ()) });
        PressOutcome::Intercepted { ticket, warm }
    }

    /// The warm-up for `ticket` settled. Returns the record to navigate to,
    /// or `None` if a newer press superseded it.
    pub fn settle(&mut self, ticket: &NavigationTicket) -> Option<RecordId> {
        let target = self.navigator.commit(ticket);
        if target.is_some() {
            self.pending = None;
        } else {
            tracing::debug!(record = %ticket.target(), seq = ticket.seq(), "stale press ignored");
        }
        target
    }

    /// Record whose press is currently awaiting its warm-up.
    pub fn pending_target(&self) -> Option<&RecordId> {
        self.pending.as_ref().map(NavigationTicket::target)
    }

    /// Navigation happened through some other path; outstanding presses must
    /// not navigate when they settle.
    pub fn navigated_elsewhere(&mut self) {
        self.navigator.invalidate();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_press_does_not_open_new_context() {
        assert!(!PressModifiers::default().opens_new_context());
    }

    #[test]
    fn any_modifier_opens_new_context() {
        let cases = [
            PressModifiers { ctrl: true, ..Default::default() },
            PressModifiers { shift: true, ..Default::default() },
            PressModifiers { alt: true, ..Default::default() },
            PressModifiers { meta: true, ..Default::default() },
            PressModifiers { secondary_button: true, ..Default::default() },
        ];
        for modifiers in cases {
            assert!(modifiers.opens_new_context(), "{:?}", modifiers);
        }
    }
}
