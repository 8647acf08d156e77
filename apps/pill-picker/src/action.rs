//! Actions and their `{ "type", "pill" }` wire form
//!
//! The in-process action type is a closed enum so the reducer can match
//! exhaustively. Anything arriving from outside (headless input) goes
//! through [`ActionRecord`] first and unrecognised types become
//! [`Action::Unknown`].

use std::fmt;

use redpill::ActionSummary;
use serde::{Deserialize, Serialize};

/// Wire `type` tag of [`Action::ChoosePill`]
pub const CHOOSE_PILL: &str = "CHOOSE_PILL";
/// Wire `type` tag of [`Action::Quit`]
pub const QUIT: &str = "QUIT";

/// Which pill was picked
///
/// Raw values other than `"red"` and `"blue"` are kept verbatim in
/// [`Pill::Other`]; the match is exact and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pill {
    Red,
    Blue,
    Other(String),
}

impl Pill {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "red" => Pill::Red,
            "blue" => Pill::Blue,
            other => Pill::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pill::Red => "red",
            Pill::Blue => "blue",
            Pill::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Pill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application actions
#[derive(redpill::Action, Clone, Debug, PartialEq)]
#[action(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// The user picked a pill
    ChoosePill { pill: Pill },

    /// An action type this screen does not handle (e.g. `"@@init"`)
    Unknown { kind: String },

    /// Exit the application; handled by the main loop, not the reducer
    Quit,
}

/// Build a pill choice. No validation: unknown pills are reduced like blue.
pub fn choose(pill: &str) -> Action {
    Action::ChoosePill {
        pill: Pill::parse(pill),
    }
}

impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::ChoosePill { pill } => format!("ChoosePill({})", pill),
            Action::Unknown { kind } => format!("Unknown({:?})", kind),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// Serialized action: `{ "type": "CHOOSE_PILL", "pill": "red" }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pill: Option<String>,
}

impl From<ActionRecord> for Action {
    fn from(record: ActionRecord) -> Self {
        match record.kind.as_str() {
            // A missing pill is not "red", so it lands on the blue outcome
            CHOOSE_PILL => choose(record.pill.as_deref().unwrap_or_default()),
            QUIT => Action::Quit,
            _ => Action::Unknown { kind: record.kind },
        }
    }
}

impl From<&Action> for ActionRecord {
    fn from(action: &Action) -> Self {
        match action {
            Action::ChoosePill { pill } => ActionRecord {
                kind: CHOOSE_PILL.to_string(),
                pill: Some(pill.as_str().to_string()),
            },
            Action::Unknown { kind } => ActionRecord {
                kind: kind.clone(),
                pill: None,
            },
            Action::Quit => ActionRecord {
                kind: QUIT.to_string(),
                pill: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redpill::Action as _;

    #[test]
    fn test_choose_builds_choose_pill() {
        assert_eq!(choose("red"), Action::ChoosePill { pill: Pill::Red });
        assert_eq!(choose("blue"), Action::ChoosePill { pill: Pill::Blue });
        assert_eq!(
            choose("Red"),
            Action::ChoosePill {
                pill: Pill::Other("Red".into())
            }
        );
    }

    #[test]
    fn test_action_names_match_wire_tags() {
        assert_eq!(choose("red").name(), CHOOSE_PILL);
        assert_eq!(Action::Quit.name(), QUIT);
        assert_eq!(
            Action::Unknown {
                kind: "@@init".into()
            }
            .name(),
            "UNKNOWN"
        );
    }

    #[test]
    fn test_decode_wire_actions() {
        let record: ActionRecord =
            serde_json::from_str(r#"{"type":"CHOOSE_PILL","pill":"red"}"#).unwrap();
        assert_eq!(Action::from(record), Action::ChoosePill { pill: Pill::Red });

        let record: ActionRecord = serde_json::from_str(r#"{"type":"@@init"}"#).unwrap();
        assert_eq!(
            Action::from(record),
            Action::Unknown {
                kind: "@@init".into()
            }
        );
    }

    #[test]
    fn test_choose_pill_without_pill() {
        let record: ActionRecord = serde_json::from_str(r#"{"type":"CHOOSE_PILL"}"#).unwrap();
        assert_eq!(
            Action::from(record),
            Action::ChoosePill {
                pill: Pill::Other(String::new())
            }
        );
    }

    #[test]
    fn test_encode_omits_missing_pill() {
        let json = serde_json::to_string(&ActionRecord::from(&Action::Quit)).unwrap();
        assert_eq!(json, r#"{"type":"QUIT"}"#);

        let json = serde_json::to_string(&ActionRecord::from(&choose("blue"))).unwrap();
        assert_eq!(json, r#"{"type":"CHOOSE_PILL","pill":"blue"}"#);
    }

    #[test]
    fn test_summary() {
        assert_eq!(choose("green").summary(), "ChoosePill(green)");
    }
}
