//! Reducer for navigation.

use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::EntriesLoaded { count } => NavState {
                highlighted: clamp(state.highlighted, count),
                entry_count: count,
                ..state
            },

            NavIntent::MoveHighlight { delta } => {
                if state.entry_count == 0 {
                    return state;
                }
                let next = state.highlighted as i64 + delta as i64;
                let highlighted = next.clamp(0, state.entry_count as i64 - 1) as usize;
                NavState {
                    highlighted,
                    ..state
                }
            }

            NavIntent::Highlight { index } => {
                if index >= state.entry_count {
                    return state;
                }
                NavState {
                    highlighted: index,
                    ..state
                }
            }

            NavIntent::Navigate(route) => NavState { route, ..state },
        }
    }
}

fn clamp(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordId;
    use crate::ui::nav::Route;

    fn loaded(count: usize) -> NavState {
        NavReducer::reduce(NavState::default(), NavIntent::EntriesLoaded { count })
    }

    #[test]
    fn move_highlight_clamps_at_both_ends() {
        let state = loaded(3);
        let state = NavReducer::reduce(state, NavIntent::MoveHighlight { delta: -1 });
        assert_eq!(state.highlighted, 0);

        let state = NavReducer::reduce(state, NavIntent::MoveHighlight { delta: 5 });
        assert_eq!(state.highlighted, 2);
    }

    #[test]
    fn move_highlight_without_entries_is_noop() {
        let state = NavReducer::reduce(NavState::default(), NavIntent::MoveHighlight { delta: 1 });
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn highlight_out_of_range_is_ignored() {
        let state = loaded(2);
        let state = NavReducer::reduce(state, NavIntent::Highlight { index: 1 });
        assert_eq!(state.highlighted, 1);

        let state = NavReducer::reduce(state, NavIntent::Highlight { index: 9 });
        assert_eq!(state.highlighted, 1);
    }

    #[test]
    fn shrinking_list_pulls_highlight_back() {
        let state = loaded(10);
        let state = NavReducer::reduce(state, NavIntent::Highlight { index: 9 });
        let state = NavReducer::reduce(state, NavIntent::EntriesLoaded { count: 4 });
        assert_eq!(state.highlighted, 3);
    }

    #[test]
    fn navigate_keeps_highlight() {
        let state = loaded(5);
        let state = NavReducer::reduce(state, NavIntent::Highlight { index: 2 });
        let route = Route::Record(RecordId::from("3"));
        let state = NavReducer::reduce(state, NavIntent::Navigate(route.clone()));
        assert_eq!(state.route, route);
        assert_eq!(state.highlighted, 2);
    }
}
