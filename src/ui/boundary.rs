//! Loading boundaries.
//!
//! A view that depends on async data produces a [`Resource`]. A boundary
//! decides what to draw for it: the content, a fallback, an error, or
//! nothing at all because the suspension propagates to the boundary above.
//!
//! The page has one root boundary ([`compose_page`]) that always catches.
//! The detail pane sits inside a [`SuspenseAfterInitialRender`], which lets
//! suspensions through to the root during the first render (one page-wide
//! spinner for the initial load) and catches them itself afterwards (the
//! sidebar stays up while a new record loads).

use std::future::Future;

use crate::cache::CacheError;
use crate::ui::lifecycle::{LifecycleCoordinator, SettleSignal};

/// Data a view depends on.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Ready(T),
    Pending,
    Failed(CacheError),
}

/// Why a subtree could not render.
#[derive(Debug, Clone, PartialEq)]
pub enum Suspension {
    Pending,
    Failed(CacheError),
}

/// What a boundary decided for its child.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryOutcome<T> {
    Content(T),
    /// Caught a suspension: draw this boundary's fallback.
    Fallback,
    /// Caught a failure: draw this boundary's error indicator.
    Failed(CacheError),
    /// Not caught: the nearest ancestor boundary handles it.
    Suspend(Suspension),
}

/// Boundary that only starts catching after the first render settled.
pub struct SuspenseAfterInitialRender {
    lifecycle: LifecycleCoordinator,
    mounted: bool,
}

impl SuspenseAfterInitialRender {
    pub fn new(lifecycle: LifecycleCoordinator) -> Self {
        Self {
            lifecycle,
            mounted: false,
        }
    }

    /// First time the boundary is part of the tree: returns the one-time
    /// effect that flips the lifecycle once `signal` fires. Later calls
    /// return `None`.
    ///
    /// The effect resolves to true if it performed the transition.
    pub fn mount(
        &mut self,
        signal: SettleSignal,
    ) -> Option<impl Future<Output = bool> + Send + 'static> {
        if self.mounted {
            return None;
        }
        self.mounted = true;

        let lifecycle = self.lifecycle.clone();
        Some(async move {
            if signal.settled().await {
                lifecycle.complete_first_render()
            } else {
                false
            }
        })
    }

    /// Whether suspensions are caught here rather than propagated.
    pub fn is_catching(&self) -> bool {
        !self.lifecycle.is_initial_render()
    }

    pub fn resolve<T>(&self, child: Resource<T>) -> BoundaryOutcome<T> {
        let catching = self.is_catching();
        match child {
            Resource::Ready(value) => BoundaryOutcome::Content(value),
            Resource::Pending if catching => BoundaryOutcome::Fallback,
            Resource::Pending => BoundaryOutcome::Suspend(Suspension::Pending),
            Resource::Failed(err) if catching => BoundaryOutcome::Failed(err),
            Resource::Failed(err) => BoundaryOutcome::Suspend(Suspension::Failed(err)),
        }
    }
}

/// Detail pane after its boundary caught whatever it needed to.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPane<T> {
    Content(T),
    Fallback,
    Failed(CacheError),
}

/// Whole page after the root boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Page<S, D> {
    /// Page-wide fallback.
    Fallback,
    /// Page-wide error indicator.
    Failed(CacheError),
    Ready { sidebar: S, detail: DetailPane<D> },
}

/// Root boundary around the sidebar and the detail boundary.
///
/// Failures win over suspensions, mirroring an error boundary placed above
/// the root suspension boundary.
pub fn compose_page<S, D>(sidebar: Resource<S>, detail: BoundaryOutcome<D>) -> Page<S, D> {
    let detail = match detail {
        BoundaryOutcome::Suspend(Suspension::Failed(err)) => return Page::Failed(err),
        BoundaryOutcome::Suspend(Suspension::Pending) => None,
        BoundaryOutcome::Content(value) => Some(DetailPane::Content(value)),
        BoundaryOutcome::Fallback => Some(DetailPane::Fallback),
        BoundaryOutcome::Failed(err) => Some(DetailPane::Failed(err)),
    };

    match (sidebar, detail) {
        (Resource::Failed(err), _) => Page::Failed(err),
        (Resource::Pending, _) | (_, None) => Page::Fallback,
        (Resource::Ready(sidebar), Some(detail)) => Page::Ready { sidebar, detail },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::lifecycle::FirstRenderGate;

    fn failed() -> CacheError {
        CacheError::FetchFailed {
            key: "records/3".to_string(),
            message: "boom".to_string(),
        }
    }

    #[test]
    fn initial_render_propagates_suspension() {
        let boundary = SuspenseAfterInitialRender::new(LifecycleCoordinator::new());
        assert!(!boundary.is_catching());
        assert_eq!(
            boundary.resolve::<()>(Resource::Pending),
            BoundaryOutcome::Suspend(Suspension::Pending)
        );
        assert_eq!(
            boundary.resolve::<()>(Resource::Failed(failed())),
            BoundaryOutcome::Suspend(Suspension::Failed(failed()))
        );
    }

    #[test]
    fn steady_render_catches_locally() {
        let lifecycle = LifecycleCoordinator::new();
        lifecycle.complete_first_render();
        let boundary = SuspenseAfterInitialRender::new(lifecycle);

        assert_eq!(boundary.resolve::<()>(Resource::Pending), BoundaryOutcome::Fallback);
        assert_eq!(
            boundary.resolve::<()>(Resource::Failed(failed())),
            BoundaryOutcome::Failed(failed())
        );
        assert_eq!(boundary.resolve(Resource::Ready(7)), BoundaryOutcome::Content(7));
    }

    #[tokio::test]
    async fn mount_schedules_effect_once() {
        let lifecycle = LifecycleCoordinator::new();
        let mut boundary = SuspenseAfterInitialRender::new(lifecycle.clone());
        let (mut gate, signal) = FirstRenderGate::<&str>::new();
        let (_, second_signal) = FirstRenderGate::<&str>::new();

        let effect = boundary.mount(signal).expect("first mount schedules effect");
        assert!(boundary.mount(second_signal).is_none());

        gate.register("list");
        gate.commit();
        let handle = tokio::spawn(effect);
        assert!(lifecycle.is_initial_render());

        gate.settle(&"list");
        assert!(handle.await.unwrap());
        assert!(boundary.is_catching());
    }

    #[test]
    fn root_shows_fallback_while_sidebar_pending() {
        let page: Page<(), ()> = compose_page(Resource::Pending, BoundaryOutcome::Content(()));
        assert_eq!(page, Page::Fallback);
    }

    #[test]
    fn root_catches_propagated_detail_suspension() {
        let page: Page<u8, ()> = compose_page(
            Resource::Ready(1),
            BoundaryOutcome::Suspend(Suspension::Pending),
        );
        assert_eq!(page, Page::Fallback);
    }

    #[test]
    fn local_fallback_keeps_sidebar() {
        let page: Page<u8, ()> = compose_page(Resource::Ready(1), BoundaryOutcome::Fallback);
        assert_eq!(
            page,
            Page::Ready {
                sidebar: 1,
                detail: DetailPane::Fallback
            }
        );
    }

    #[test]
    fn failure_wins_over_pending() {
        let page: Page<u8, ()> = compose_page(
            Resource::Pending,
            BoundaryOutcome::Suspend(Suspension::Failed(failed())),
        );
        assert_eq!(page, Page::Failed(failed()));
    }
}
