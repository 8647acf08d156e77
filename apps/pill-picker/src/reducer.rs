//! Reducer - (state, action) -> state
//!
//! - fn(state: &mut AppState, action: Action) -> bool
//! - Returns true if state changed (triggers re-render)
//! - The only place `AppState` is written

use tracing::{debug, warn};

use crate::action::{Action, Pill};
use crate::state::{AppState, Verdict};

/// The reducer handles all state transitions
///
/// Red leads to the real world; every other pill, including values that
/// are neither red nor blue, leads back to the Matrix. Actions other than
/// `ChoosePill` leave the state untouched.
pub fn reducer(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::ChoosePill { pill } => {
            let next = match pill {
                Pill::Red => Verdict::RealWorld,
                Pill::Blue => Verdict::Matrix,
                Pill::Other(raw) => {
                    warn!(pill = %raw, "Unrecognised pill, using the blue outcome");
                    Verdict::Matrix
                }
            };
            let changed = state.result != next;
            state.result = next;
            changed
        }

        Action::Unknown { kind } => {
            debug!(kind = %kind, "Ignoring unknown action");
            false
        }

        // Handled in the main loop
        Action::Quit => false,
    }
}

/// Value-returning form of [`reducer`]; `None` starts from the default state
pub fn reduce(state: Option<&AppState>, action: Action) -> AppState {
    let mut next = state.cloned().unwrap_or_default();
    reducer(&mut next, action);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::choose;

    fn every_state() -> Vec<AppState> {
        Verdict::ALL
            .into_iter()
            .map(|result| AppState { result })
            .collect()
    }

    #[test]
    fn test_missing_state_defaults() {
        let state = reduce(
            None,
            Action::Unknown {
                kind: "@@init".into(),
            },
        );
        assert_eq!(state.result.message(), "Choose wisely");
    }

    #[test]
    fn test_red_from_any_state() {
        for start in every_state() {
            let next = reduce(Some(&start), choose("red"));
            assert_eq!(next.result.message(), "Welcome to the real world");
        }
    }

    #[test]
    fn test_blue_from_any_state() {
        for start in every_state() {
            let next = reduce(Some(&start), choose("blue"));
            assert_eq!(next.result.message(), "Stay in the Matrix");
        }
    }

    #[test]
    fn test_other_pill_takes_blue_outcome() {
        for start in every_state() {
            let next = reduce(Some(&start), choose("green"));
            assert_eq!(next.result, Verdict::Matrix);
        }
    }

    #[test]
    fn test_unknown_and_quit_are_identity() {
        for start in every_state() {
            let mut state = start.clone();
            assert!(!reducer(
                &mut state,
                Action::Unknown {
                    kind: "SOMETHING_ELSE".into()
                }
            ));
            assert_eq!(state, start);

            assert!(!reducer(&mut state, Action::Quit));
            assert_eq!(state, start);
        }
    }

    #[test]
    fn test_changed_flag() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, choose("red")));
        // Same verdict again: nothing to redraw
        assert!(!reducer(&mut state, choose("red")));
        assert!(reducer(&mut state, choose("blue")));
        assert!(!reducer(&mut state, choose("purple")));
    }
}
