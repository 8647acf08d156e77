//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions represent intents to change state. They should be:
/// - Clone: middleware sees the action before the reducer consumes it
/// - Debug: for logging
/// - Send + 'static: actions travel over the runtime's mpsc channel
///
/// Use `#[derive(Action)]` from `redpill-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    ///
    /// For actions with a wire form this is the wire `type` tag
    /// (e.g. `"CHOOSE_PILL"`).
    fn name(&self) -> &'static str;
}

/// Short, human-readable description of an action for log lines
///
/// The default falls back to `Debug`; override it when the payload is
/// noisy or carries data that should not hit the logs verbatim.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
