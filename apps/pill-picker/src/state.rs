//! Application state - single source of truth
//!
//! Components receive the state (or props derived from it) read-only;
//! only the reducer changes it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The message shown under the buttons
///
/// Serialized as the message text itself, so a state reads as
/// `{"result":"Choose wisely"}` and no other text can deserialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[default]
    #[serde(rename = "Choose wisely")]
    Undecided,
    #[serde(rename = "Welcome to the real world")]
    RealWorld,
    #[serde(rename = "Stay in the Matrix")]
    Matrix,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Undecided, Verdict::RealWorld, Verdict::Matrix];

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Undecided => "Choose wisely",
            Verdict::RealWorld => "Welcome to the real world",
            Verdict::Matrix => "Stay in the Matrix",
        }
    }

    /// Short name used on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Verdict::Undecided => "undecided",
            Verdict::RealWorld => "real-world",
            Verdict::Matrix => "matrix",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown verdict {0:?}; expected one of: undecided, real-world, matrix")]
pub struct ParseVerdictError(String);

impl FromStr for Verdict {
    type Err = ParseVerdictError;

    /// Accepts the slug or the full message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verdict::ALL
            .into_iter()
            .find(|v| v.slug() == s || v.message() == s)
            .ok_or_else(|| ParseVerdictError(s.to_string()))
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub result: Verdict,
}

/// Partial override applied over the default state when the store is created
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Verdict>,
}

impl InitialState {
    pub fn into_state(self) -> AppState {
        let defaults = AppState::default();
        AppState {
            result: self.result.unwrap_or(defaults.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_choose_wisely() {
        assert_eq!(AppState::default().result.message(), "Choose wisely");
    }

    #[test]
    fn test_state_json_uses_messages() {
        let state = AppState {
            result: Verdict::RealWorld,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"result":"Welcome to the real world"}"#);

        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_state_rejects_other_messages() {
        let parsed = serde_json::from_str::<AppState>(r#"{"result":"Take both"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_verdict_from_str() {
        assert_eq!("matrix".parse::<Verdict>(), Ok(Verdict::Matrix));
        assert_eq!(
            "Welcome to the real world".parse::<Verdict>(),
            Ok(Verdict::RealWorld)
        );
        assert!("purple".parse::<Verdict>().is_err());
    }

    #[test]
    fn test_initial_state_override() {
        assert_eq!(InitialState::default().into_state(), AppState::default());

        let partial: InitialState = serde_json::from_str("{}").unwrap();
        assert_eq!(partial.into_state().result, Verdict::Undecided);

        let state = InitialState {
            result: Some(Verdict::Matrix),
        }
        .into_state();
        assert_eq!(state.result, Verdict::Matrix);
    }
}
