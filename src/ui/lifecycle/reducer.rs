//! Reducer for the render lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::LifecycleIntent;
use super::state::RenderPhase;

/// Pure phase transitions. `Steady` never goes back.
pub struct LifecycleReducer;

impl Reducer for LifecycleReducer {
    type State = RenderPhase;
    type Intent = LifecycleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (RenderPhase::Initial, LifecycleIntent::FirstRenderSettled) => RenderPhase::Steady,
            (RenderPhase::Steady, LifecycleIntent::FirstRenderSettled) => RenderPhase::Steady,
        }
    }
}
