//! Terminal events delivered to components

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// The event payload
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event (clicks, drags, moves)
    Mouse(MouseEvent),
    /// Scroll event with position and delta
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
}

impl EventKind {
    /// The cell under a left-button press, if this is one
    pub fn left_click(&self) -> Option<Position> {
        match self {
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(Position::new(mouse.column, mouse.row))
            }
            _ => None,
        }
    }

    /// Whether this is a left click landing inside `area`
    pub fn is_click_in(&self, area: Rect) -> bool {
        self.left_click()
            .map(|pos| area.contains(pos))
            .unwrap_or(false)
    }

    /// Whether the terminal changed size, which always needs a redraw
    pub fn is_resize(&self) -> bool {
        matches!(self, EventKind::Resize(_, _))
    }
}
