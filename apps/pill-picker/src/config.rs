//! Keybinding configuration
//!
//! Defaults live in code; a JSON file passed with `--keys` overrides them
//! per command:
//!
//! ```json
//! { "choose_red": ["1"], "choose_blue": ["2"] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use redpill::Keybindings;
use thiserror::Error;

use crate::action::{choose, Action, Pill};

/// Errors that can occur when loading keybindings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read keybindings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse keybindings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown command '{command}' (expected one of: choose_red, choose_blue, quit)")]
    UnknownCommand { command: String },

    #[error("Invalid key {key:?} bound to '{command}'")]
    InvalidKey { command: String, key: String },
}

/// Commands that keys can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ChooseRed,
    ChooseBlue,
    Quit,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::ChooseRed, Command::ChooseBlue, Command::Quit];

    pub fn name(self) -> &'static str {
        match self {
            Command::ChooseRed => "choose_red",
            Command::ChooseBlue => "choose_blue",
            Command::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Label shown in the help bar
    pub fn label(self) -> &'static str {
        match self {
            Command::ChooseRed => "red",
            Command::ChooseBlue => "blue",
            Command::Quit => "quit",
        }
    }

    pub fn action(self) -> Action {
        match self {
            Command::ChooseRed => choose(Pill::Red.as_str()),
            Command::ChooseBlue => choose(Pill::Blue.as_str()),
            Command::Quit => Action::Quit,
        }
    }
}

pub fn default_keybindings() -> Keybindings {
    Keybindings::new()
        .with(Command::ChooseRed.name(), &["r", "left"])
        .with(Command::ChooseBlue.name(), &["b", "right"])
        .with(Command::Quit.name(), &["q", "esc", "ctrl+c"])
}

/// Merge user bindings over the defaults and validate the result
pub fn apply_user_bindings(user: Keybindings) -> Result<Keybindings, ConfigError> {
    if let Some(command) = user
        .bindings()
        .keys()
        .find(|command| Command::from_name(command).is_none())
    {
        return Err(ConfigError::UnknownCommand {
            command: command.clone(),
        });
    }

    let merged = Keybindings::merge(default_keybindings(), user);
    if let Some((command, key)) = merged.invalid_keys().first() {
        return Err(ConfigError::InvalidKey {
            command: command.to_string(),
            key: key.to_string(),
        });
    }
    Ok(merged)
}

/// Load keybindings, falling back to the defaults when no file is given
pub fn load_keybindings(path: Option<&Path>) -> Result<Keybindings, ConfigError> {
    let Some(path) = path else {
        return Ok(default_keybindings());
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let user: Keybindings = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        commands = user.bindings().len(),
        "Loaded keybindings"
    );
    apply_user_bindings(user)
}
