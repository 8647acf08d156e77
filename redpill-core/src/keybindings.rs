//! Keybindings: command name -> key strings, with JSON config support
//!
//! Bindings are stored as strings (`"q"`, `"ctrl+c"`, `"left"`) so they can
//! be written by hand in a config file and shown in help text unchanged.
//!
//! ```json
//! {
//!   "choose_red": ["r", "left"],
//!   "quit": ["q", "esc"]
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keybindings configuration
///
/// Commands are kept in a sorted map so lookups and help text are
/// deterministic when two commands share a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keybindings {
    commands: BTreeMap<String, Vec<String>>,
}

impl Keybindings {
    /// Create a new empty keybindings configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `keys` to `command`, replacing any previous binding
    pub fn add(&mut self, command: impl Into<String>, keys: Vec<String>) {
        self.commands.insert(command.into(), keys);
    }

    /// Builder-style [`Keybindings::add`]
    pub fn with(mut self, command: impl Into<String>, keys: &[&str]) -> Self {
        self.add(command, keys.iter().map(|k| k.to_string()).collect());
        self
    }

    /// All bindings, sorted by command name
    pub fn bindings(&self) -> &BTreeMap<String, Vec<String>> {
        &self.commands
    }

    /// Get the command bound to a key event, if any
    pub fn get_command(&self, key: KeyEvent) -> Option<&str> {
        self.commands
            .iter()
            .find(|(_, keys)| keys.iter().any(|k| key_matches(k, &key)))
            .map(|(command, _)| command.as_str())
    }

    /// Get the first keybinding string for a command
    pub fn get_first_keybinding(&self, command: &str) -> Option<&str> {
        self.commands
            .get(command)
            .and_then(|keys| keys.first())
            .map(String::as_str)
    }

    /// Key strings that fail to parse, as `(command, key)` pairs
    pub fn invalid_keys(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .flat_map(|(command, keys)| {
                keys.iter()
                    .filter(|k| parse_key_string(k).is_none())
                    .map(move |k| (command.as_str(), k.as_str()))
            })
            .collect()
    }

    /// Merge user config onto defaults - user config overrides defaults
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        for (command, keys) in user.commands {
            defaults.commands.insert(command, keys);
        }
        defaults
    }
}

fn key_matches(key_str: &str, key: &KeyEvent) -> bool {
    let Some(parsed) = parse_key_string(key_str) else {
        return false;
    };
    // Character keys compare case-insensitively; kind and state are ignored
    let codes_match = match (&parsed.code, &key.code) {
        (KeyCode::Char(c1), KeyCode::Char(c2)) => c1.eq_ignore_ascii_case(c2),
        _ => parsed.code == key.code,
    };
    // Terminals report SHIFT on uppercase letters, so it never decides a char match
    let (expected, actual) = match key.code {
        KeyCode::Char(_) => (
            parsed.modifiers.difference(KeyModifiers::SHIFT),
            key.modifiers.difference(KeyModifiers::SHIFT),
        ),
        _ => (parsed.modifiers, key.modifiers),
    };
    codes_match && expected == actual
}

/// Parse a key string like "q", "esc", "ctrl+c", "left" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();

    if key_str.is_empty() {
        return None;
    }

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // "+" on its own is a key, not a separator
    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", key_str.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts.split('+').filter(|p| !p.is_empty()) {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        c => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return None,
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Format a key string for display (e.g., "ctrl+c" -> "^C", "left" -> "←")
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();

    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }

    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", key_str.as_str()),
    };

    let prefix: String = modifier_parts
        .split('+')
        .filter_map(|part| match part.trim() {
            "ctrl" | "control" => Some("^"),
            "shift" => Some("Shift+"),
            "alt" => Some("Alt+"),
            _ => None,
        })
        .collect();

    let key_display = match key_part {
        "esc" | "escape" => "Esc".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "tab" => "Tab".to_string(),
        "backspace" => "Backspace".to_string(),
        "up" => "↑".to_string(),
        "down" => "↓".to_string(),
        "left" => "←".to_string(),
        "right" => "→".to_string(),
        "home" => "Home".to_string(),
        "end" => "End".to_string(),
        "space" => "Space".to_string(),
        // Letters stay lowercase unless a modifier is shown
        c if c.chars().count() == 1 && !prefix.is_empty() => c.to_uppercase(),
        other => other.to_string(),
    };

    format!("{}{}", prefix, key_display)
}
