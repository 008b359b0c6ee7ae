//! Application render lifecycle.
//!
//! Tracks whether the first full render has settled. The phase starts at
//! `Initial` and moves to `Steady` exactly once.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Phase enum (Initial → Steady)
//! - `intent.rs` - Lifecycle events (FirstRenderSettled)
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! plus the pieces that drive it:
//! - `coordinator.rs` - Owns the phase, exposes subscribe/notify
//! - `gate.rs` - One-shot "first render settled" signal

mod coordinator;
mod gate;
mod intent;
mod reducer;
mod state;

pub use coordinator::LifecycleCoordinator;
pub use gate::{FirstRenderGate, SettleSignal};
pub use intent::LifecycleIntent;
pub use reducer::LifecycleReducer;
pub use state::RenderPhase;
