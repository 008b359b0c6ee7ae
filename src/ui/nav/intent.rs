//! Intents for navigation.

use crate::ui::mvi::Intent;

use super::state::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// The sidebar list loaded with this many entries.
    EntriesLoaded { count: usize },
    /// Move the highlight by `delta`, clamped to the list.
    MoveHighlight { delta: i32 },
    /// Highlight the entry at `index` (pointer moved over it).
    Highlight { index: usize },
    Navigate(Route),
}

impl Intent for NavIntent {}
