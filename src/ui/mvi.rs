//! Model-View-Intent primitives for the UI state.
//!
//! ```text
//! key/mouse/fetch event ──→ Intent ──→ Reducer ──→ State ──→ draw
//! ```
//!
//! Reducers are pure. Side effects (fetches, gate bookkeeping) stay in
//! [`App`](crate::ui::app::App), which inspects the state after dispatch.

/// Snapshot of one slice of UI state. Replaced, never mutated in place.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened: user input or a settled fetch.
pub trait Intent: Send + 'static {}

/// `(State, Intent) -> State`, without side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over `state` in place. Returns whether the state changed.
pub fn dispatch<R: Reducer>(state: &mut R::State, intent: R::Intent) -> bool {
    let previous = state.clone();
    *state = R::reduce(std::mem::take(state), intent);
    *state != previous
}
