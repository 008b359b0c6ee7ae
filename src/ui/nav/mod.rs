//! Navigation feature module.
//!
//! Tracks the current route and the highlighted sidebar entry.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Route and highlight
//! - `intent.rs` - User actions (move highlight, navigate)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{NavState, Route};
