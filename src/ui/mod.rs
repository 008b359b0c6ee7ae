//! Terminal UI: a persistent record list on the left, the selected record on
//! the right, each behind its loading boundary.

pub mod app;
pub mod boundary;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod lifecycle;
pub mod mvi;
pub mod nav;
pub mod render;
pub mod runtime;
pub mod sidebar;
pub mod terminal_guard;
pub mod theme;
