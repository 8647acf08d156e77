//! Test utilities for redpill applications
//!
//! - [`key`]: Create `KeyEvent` from string (e.g., `key("ctrl+c")`)
//! - [`click`]: Left mouse press at a cell
//! - [`TestHarness`]: State plus an action channel for capturing emitted actions
//! - [`RenderHarness`]: Render into an in-memory terminal and read it back as text
//! - `assert_emitted!`, `assert_not_emitted!`, `count_emitted!` over collected actions
//!
//! # Example
//!
//! ```ignore
//! use redpill::testing::{key, TestHarness};
//!
//! let mut harness = TestHarness::<AppState, Action>::new(AppState::default());
//! harness.emit(Action::Quit);
//! let emitted = harness.drain_emitted();
//! assert_emitted!(emitted, Action::Quit);
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;

use crate::event::EventKind;
use crate::keybindings::parse_key_string;
use crate::Action;

/// Parse a key string such as `"r"`, `"esc"` or `"ctrl+c"`.
///
/// Panics on strings [`parse_key_string`] rejects, which is what a test wants.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// A bare character key
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// A character key with Ctrl held
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Wrap a key string as an [`EventKind`] for `Component::handle_event`.
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// A left mouse press at `(column, row)`.
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Generic test harness for redpill applications.
///
/// Holds the state under test and an action channel, so handlers that
/// emit through an `UnboundedSender` can be checked without a runtime.
pub struct TestHarness<S, A: Action> {
    /// Exposed so tests can arrange and inspect it directly
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// For code under test that emits through a channel
    pub fn sender(&self) -> mpsc::UnboundedSender<A> {
        self.tx.clone()
    }

    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Emit every action returned by a component's `handle_event`.
    pub fn emit_all(&self, actions: impl IntoIterator<Item = A>) {
        for action in actions {
            self.emit(action);
        }
    }

    /// Everything emitted since the last drain, oldest first
    pub fn drain_emitted(&mut self) -> Vec<A> {
        std::iter::from_fn(|| self.rx.try_recv().ok()).collect()
    }

    /// Feed all emitted actions through a reducer.
    ///
    /// Returns `true` if any of them changed the state.
    pub fn reduce_emitted(&mut self, reducer: crate::Reducer<S, A>) -> bool {
        let mut changed = false;
        for action in self.drain_emitted() {
            changed |= reducer(&mut self.state, action);
        }
        changed
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Renders into a [`TestBackend`] and converts the result to text.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with a `width` x `height` terminal.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {}", e));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer.
    pub fn render<F>(&mut self, draw: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("Failed to draw test frame: {}", e));
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return it as plain text, one line per row.
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(self.render(draw))
    }
}

/// Convert a buffer to plain text, trimming trailing spaces on each row.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    buffer_rect_to_string_plain(buffer, buffer.area)
}

/// Convert one region of a buffer to plain text.
pub fn buffer_rect_to_string_plain(buffer: &Buffer, area: Rect) -> String {
    let area = area.intersection(buffer.area);
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Fails unless some action in the collection matches the pattern
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "no action matched `{}`; emitted: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Fails if any action in the collection matches the pattern
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "an action matched `{}` but none should; emitted: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Number of actions in the collection matching the pattern
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_key_with_ctrl() {
        let k = key("ctrl+c");
        assert_eq!(k, ctrl_key('c'));
    }

    #[test]
    fn test_char_key_matches_parsed_key() {
        assert_eq!(char_key('r'), key("r"));
        assert_eq!(char_key(' '), key("space"));
        assert_ne!(char_key('c'), ctrl_key('c'));
    }

    #[test]
    #[should_panic(expected = "Invalid key string")]
    fn test_key_invalid_panics() {
        key("not-a-key");
    }

    #[test]
    fn test_click_is_left_press() {
        let event = click(2, 3);
        assert_eq!(event.left_click(), Some((2, 3).into()));
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Flip,
        Set(bool),
    }

    impl crate::Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Flip => "Flip",
                TestAction::Set(_) => "Set",
            }
        }
    }

    fn reducer(state: &mut bool, action: TestAction) -> bool {
        let before = *state;
        match action {
            TestAction::Flip => *state = !*state,
            TestAction::Set(value) => *state = value,
        }
        before != *state
    }

    #[test]
    fn test_harness_emit_and_drain() {
        let mut harness = TestHarness::<bool, TestAction>::default();

        harness.emit(TestAction::Flip);
        harness.emit_all([TestAction::Set(true)]);

        let actions = harness.drain_emitted();
        assert_eq!(actions, vec![TestAction::Flip, TestAction::Set(true)]);
        assert!(harness.drain_emitted().is_empty());
    }

    #[test]
    fn test_harness_reduce_emitted() {
        let mut harness = TestHarness::<bool, TestAction>::new(false);

        harness.emit(TestAction::Set(false));
        assert!(!harness.reduce_emitted(reducer));

        harness.emit(TestAction::Flip);
        assert!(harness.reduce_emitted(reducer));
        assert!(harness.state);
    }

    #[test]
    fn test_assert_macros() {
        let actions = vec![TestAction::Flip, TestAction::Set(true)];

        assert_emitted!(actions, TestAction::Flip);
        assert_emitted!(actions, TestAction::Set(v) if *v);
        assert_not_emitted!(actions, TestAction::Set(false));
        assert_eq!(count_emitted!(actions, TestAction::Set(_)), 1);
    }

    #[test]
    fn test_render_harness_plain_text() {
        let mut render = RenderHarness::new(12, 2);
        let output = render.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello"), frame.area());
        });

        assert_eq!(output, "hello\n");
    }
}
