//! State for the render lifecycle.

use crate::ui::mvi::UiState;

/// Render phase of the application session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPhase {
    /// First render has not settled yet. Suspensions propagate to the
    /// page-wide boundary.
    #[default]
    Initial,

    /// First render settled. Terminal for the session.
    Steady,
}

impl UiState for RenderPhase {}

impl RenderPhase {
    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_initial() {
        assert_eq!(RenderPhase::default(), RenderPhase::Initial);
        assert!(RenderPhase::default().is_initial());
        assert!(!RenderPhase::Steady.is_initial());
    }
}
