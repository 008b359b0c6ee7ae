//! State for navigation.

use crate::records::RecordId;
use crate::ui::mvi::UiState;

/// Where the user is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// "All records": sidebar plus a placeholder pane.
    #[default]
    Index,
    Record(RecordId),
}

impl Route {
    /// Path-style name shown in the header.
    pub fn path(&self) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::Record(id) => format!("/records/{}", id),
        }
    }

    pub fn record(&self) -> Option<&RecordId> {
        match self {
            Route::Index => None,
            Route::Record(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub route: Route,
    /// Index of the highlighted sidebar entry.
    pub highlighted: usize,
    /// Number of sidebar entries; bounds `highlighted`.
    pub entry_count: usize,
}

impl UiState for NavState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::Index.path(), "/");
        assert_eq!(Route::Record(RecordId::from("3")).path(), "/records/3");
    }

    #[test]
    fn route_record() {
        assert_eq!(Route::Index.record(), None);
        assert_eq!(
            Route::Record(RecordId::from("7")).record(),
            Some(&RecordId::from("7"))
        );
    }
}
