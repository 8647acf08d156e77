//! redpill: centralized state management for a terminal screen
//!
//! Like Redux, but for terminals. Components are pure functions of state,
//! and all state mutations happen through dispatched actions.
//!
//! # Example
//! ```ignore
//! use redpill::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(rename_all = "SCREAMING_SNAKE_CASE")]
//! enum MyAction {
//!     ChoosePill { pill: String },
//!     Quit,
//! }
//!
//! assert_eq!(MyAction::Quit.name(), "QUIT");
//! ```

// Re-export everything from core
pub use redpill_core::*;

// Re-export derive macros
pub use redpill_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use redpill_core::{Action, ActionSummary, Component};

    // Events
    pub use redpill_core::{
        process_raw_event, spawn_event_poller, EventKind, PollerConfig, RawEvent,
    };

    // Keybindings
    pub use redpill_core::{format_key_for_display, parse_key_string, Keybindings};

    // Store
    pub use redpill_core::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware, SubscriptionId,
    };

    // Derive macros
    pub use redpill_macros::Action;

    // Ratatui re-exports
    pub use redpill_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
