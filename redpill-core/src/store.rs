//! Single-owner state container: reducer, listeners, middleware

use std::marker::PhantomData;

use crate::{Action, ActionSummary};

/// The only code allowed to change state
///
/// Returns whether anything changed, which callers use as a redraw hint.
/// Actions the reducer does not recognise must leave the state untouched
/// and return `false`.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Owns the application state and applies actions to it
///
/// The store owns the application state and is the only place it changes:
/// every write goes through [`Store::dispatch`]. Listeners registered with
/// [`Store::subscribe`] run synchronously after every dispatch.
///
/// The store is not `Send`; it is meant to live on the thread that runs
/// the event loop.
///
/// # Example
/// ```ignore
/// #[derive(Default)]
/// struct AppState {
///     picked: bool,
/// }
///
/// #[derive(Action, Clone, Debug)]
/// enum MyAction {
///     Pick,
/// }
///
/// fn reducer(state: &mut AppState, action: MyAction) -> bool {
///     match action {
///         MyAction::Pick => {
///             let changed = !state.picked;
///             state.picked = true;
///             changed
///         }
///     }
/// }
///
/// let mut store = Store::new(AppState::default(), reducer);
/// let id = store.subscribe(|state| println!("picked: {}", state.picked));
/// store.dispatch(MyAction::Pick);
/// store.unsubscribe(id);
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_subscription: u64,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            listeners: Vec::new(),
            next_subscription: 0,
            _marker: PhantomData,
        }
    }

    /// Reduce `action`, then tell every listener
    ///
    /// The reducer runs first, then every listener is notified in
    /// subscription order. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: A) -> bool {
        let changed = (self.reducer)(&mut self.state, action);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        changed
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Call `listener` with the new state after every dispatch,
    /// whether or not the reducer reported a change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&S) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::trace!(subscription = id.0, "Listener subscribed");
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of active listeners
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<S: std::fmt::Debug, A: Action> std::fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A [`Store`] behind a middleware
///
/// `dispatch` runs `before`, then the reducer and listeners, then `after`.
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Same contract as [`Store::dispatch`], wrapped in the middleware hooks
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = self.store.dispatch(action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// See [`Store::subscribe`]
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&S) + 'static,
    {
        self.store.subscribe(listener)
    }

    /// See [`Store::unsubscribe`]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}

/// Hooks around every reduction
///
/// `after` receives whether the reducer reported a change. Middleware sees
/// actions but never the state, so it cannot bypass the reducer.
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);

    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}

    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Logs dispatched actions as `tracing` events
///
/// [`LoggingMiddleware::new`] emits one `info` event per reduction.
/// [`LoggingMiddleware::verbose`] adds a `debug` event with the action
/// summary before the reducer runs.
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    with_summary: bool,
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self {
            with_summary: false,
        }
    }

    pub fn verbose() -> Self {
        Self { with_summary: true }
    }
}

impl<A: ActionSummary> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if !self.with_summary {
            return;
        }
        tracing::debug!(
            action = action.name(),
            summary = %action.summary(),
            "Dispatch"
        );
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::info!(action = action.name(), state_changed, "Reduced");
    }
}

/// A chain of middlewares run as one
///
/// `before` hooks run in insertion order and `after` hooks in reverse, so
/// the first middleware added wraps all the others. An empty chain does
/// nothing.
pub struct ComposedMiddleware<A: Action> {
    chain: Vec<Box<dyn Middleware<A>>>,
}

impl<A: Action> std::fmt::Debug for ComposedMiddleware<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("len", &self.chain.len())
            .finish()
    }
}

impl<A: Action> Default for ComposedMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ComposedMiddleware<A> {
    pub fn new() -> Self {
        Self { chain: Vec::new() }
    }

    /// Append to the end of the chain (innermost position)
    pub fn add<M: Middleware<A> + 'static>(&mut self, middleware: M) {
        self.chain.push(Box::new(middleware));
    }

    pub fn with<M: Middleware<A> + 'static>(mut self, middleware: M) -> Self {
        self.add(middleware);
        self
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl<A: Action> Middleware<A> for ComposedMiddleware<A> {
    fn before(&mut self, action: &A) {
        self.chain.iter_mut().for_each(|m| m.before(action));
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        self.chain
            .iter_mut()
            .rev()
            .for_each(|m| m.after(action, state_changed));
    }
}
