use std::sync::Arc;
use tokio::sync::watch;

use crate::ui::lifecycle::{LifecycleIntent, LifecycleReducer, RenderPhase};
use crate::ui::mvi::dispatch;

/// Single owner of the session's [`RenderPhase`].
///
/// Clones share the same phase. Consumers either read it
/// ([`phase`](Self::phase)) or subscribe to changes.
#[derive(Clone)]
pub struct LifecycleCoordinator {
    phase: Arc<watch::Sender<RenderPhase>>,
}

impl LifecycleCoordinator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(RenderPhase::Initial);
        Self {
            phase: Arc::new(tx),
        }
    }

    pub fn phase(&self) -> RenderPhase {
        *self.phase.borrow()
    }

    pub fn is_initial_render(&self) -> bool {
        self.phase().is_initial()
    }

    pub fn subscribe(&self) -> watch::Receiver<RenderPhase> {
        self.phase.subscribe()
    }

    /// Apply `FirstRenderSettled`. Returns true only for the call that
    /// actually moved the phase to `Steady`.
    pub fn complete_first_render(&self) -> bool {
        let changed = self.phase.send_if_modified(|phase| {
            dispatch::<LifecycleReducer>(phase, LifecycleIntent::FirstRenderSettled)
        });
        if changed {
            tracing::info!("first render settled");
        }
        changed
    }

    /// Resolves once the phase is `Steady`.
    pub async fn wait_steady(&self) {
        let mut rx = self.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|phase| !phase.is_initial()).await;
    }
}

impl Default for LifecycleCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
