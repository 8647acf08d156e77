//! View binding: the explicit link between the store and the screen
//!
//! The composition root hands a `PillBinding` to the run loop; the view
//! only ever sees props derived from state plus the dispatch entry point.

use std::cell::Cell;
use std::rc::Rc;

use redpill::{Keybindings, SubscriptionId};
use tracing::info;

use crate::action::{choose, Action};
use crate::components::PillScreenProps;
use crate::state::{AppState, Verdict};
use crate::store::AppStore;

/// Owns the store and tracks whether the screen needs a redraw
pub struct PillBinding {
    store: AppStore,
    dirty: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl PillBinding {
    /// Subscribe to the store; the first frame is always drawn
    pub fn new(mut store: AppStore) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let mut shown = store.state().result;

        let subscription = store.subscribe(move |state: &AppState| {
            if state.result != shown {
                info!(from = %shown, to = %state.result, "Result changed");
                shown = state.result;
                flag.set(true);
            }
        });

        Self {
            store,
            dirty,
            subscription,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Props for the screen, derived from the current state
    pub fn props<'a>(&self, keybindings: &'a Keybindings) -> PillScreenProps<'a> {
        PillScreenProps {
            result: self.store.state().result,
            keybindings,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        self.store.dispatch(action)
    }

    /// Dispatch a pill choice by its raw name
    pub fn choose(&mut self, pill: &str) -> Verdict {
        self.dispatch(choose(pill));
        self.store.state().result
    }

    /// Whether a redraw is due; clears the flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Force a redraw (e.g. after a resize)
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Detach from the store and hand it back
    pub fn into_store(mut self) -> AppStore {
        self.store.unsubscribe(self.subscription);
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InitialState;
    use crate::store::create_store;

    fn binding() -> PillBinding {
        PillBinding::new(create_store(InitialState::default()))
    }

    #[test]
    fn test_first_frame_is_dirty() {
        let binding = binding();
        assert!(binding.take_dirty());
        assert!(!binding.take_dirty());
    }

    #[test]
    fn test_choice_marks_dirty_once() {
        let mut binding = binding();
        binding.take_dirty();

        assert_eq!(binding.choose("red"), Verdict::RealWorld);
        assert!(binding.take_dirty());

        // Same outcome again: no redraw
        binding.choose("red");
        assert!(!binding.take_dirty());

        binding.choose("blue");
        assert!(binding.take_dirty());
    }

    #[test]
    fn test_unknown_action_does_not_redraw() {
        let mut binding = binding();
        binding.take_dirty();

        binding.dispatch(Action::Unknown {
            kind: "@@init".into(),
        });
        assert!(!binding.take_dirty());
        assert_eq!(binding.state().result, Verdict::Undecided);
    }

    #[test]
    fn test_props_follow_state() {
        let keys = crate::config::default_keybindings();
        let mut binding = binding();

        assert_eq!(binding.props(&keys).result, Verdict::Undecided);
        binding.choose("blue");
        assert_eq!(binding.props(&keys).result, Verdict::Matrix);
    }

    #[test]
    fn test_into_store_unsubscribes() {
        let binding = binding();
        let store = binding.into_store();
        assert_eq!(store.subscriber_count(), 0);
    }
}
