//! Core traits and types for redpill
//!
//! Redux/Elm-style state management for terminal screens.
//!
//! # Core Concepts
//!
//! - **Action**: Events that describe state changes
//! - **Store**: Centralized state container with reducer pattern, middleware
//!   and synchronous subscriptions
//! - **Component**: Pure UI elements that render based on props
//! - **Keybindings**: Command-to-key mapping loadable from JSON
//!
//! # Basic Example
//!
//! ```ignore
//! use redpill_core::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum MyAction {
//!     #[action(name = "TURN_ON")]
//!     TurnOn,
//! }
//!
//! #[derive(Default)]
//! struct AppState {
//!     on: bool,
//! }
//!
//! fn reducer(state: &mut AppState, action: MyAction) -> bool {
//!     match action {
//!         MyAction::TurnOn => {
//!             let changed = !state.on;
//!             state.on = true;
//!             changed
//!         }
//!     }
//! }
//!
//! let mut store = Store::new(AppState::default(), reducer);
//! store.subscribe(|state| tracing::info!(on = state.on, "state changed"));
//! store.dispatch(MyAction::TurnOn);
//! ```

pub mod action;
pub mod component;
pub mod event;
pub mod keybindings;
pub mod poller;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionSummary};
pub use component::Component;

// Event exports
pub use event::EventKind;
pub use poller::{process_raw_event, spawn_event_poller, PollerConfig, RawEvent};

// Keybindings exports
pub use keybindings::{format_key_for_display, parse_key_string, Keybindings};

// Store exports
pub use store::{
    ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
    StoreWithMiddleware, SubscriptionId,
};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{
    buffer_rect_to_string_plain, buffer_to_string_plain, char_key, click, ctrl_key, key,
    key_event, RenderHarness, TestHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionSummary};
    pub use crate::component::Component;
    pub use crate::event::EventKind;
    pub use crate::keybindings::{format_key_for_display, parse_key_string, Keybindings};
    pub use crate::poller::{process_raw_event, spawn_event_poller, PollerConfig, RawEvent};
    pub use crate::store::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware, SubscriptionId,
    };

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
