//! Red pill / blue pill: one screen, two buttons, one message
//!
//! Flow: key press or click -> [`action::Action`] -> store (middleware +
//! [`reducer::reducer`]) -> subscription marks the screen dirty -> redraw.

pub mod action;
pub mod binding;
pub mod components;
pub mod config;
pub mod headless;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod store;

/// Name the app registers under (window title, log lines)
pub const APP_NAME: &str = "ReactNativeRedux";
