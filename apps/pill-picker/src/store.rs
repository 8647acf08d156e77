//! Store factory

use redpill::{ComposedMiddleware, StoreWithMiddleware};
use tracing::debug;

use crate::action::Action;
use crate::reducer::reducer;
use crate::state::{AppState, InitialState};

/// The app's store: state + reducer behind a middleware chain
pub type AppStore = StoreWithMiddleware<AppState, Action, ComposedMiddleware<Action>>;

/// Create the store with an empty (inert) middleware chain
pub fn create_store(initial: InitialState) -> AppStore {
    create_store_with(initial, ComposedMiddleware::new())
}

/// Create the store with the given middleware chain
pub fn create_store_with(
    initial: InitialState,
    middleware: ComposedMiddleware<Action>,
) -> AppStore {
    let state = initial.into_state();
    debug!(
        result = %state.result,
        middlewares = middleware.len(),
        "Creating store"
    );
    StoreWithMiddleware::new(state, reducer, middleware)
}
