//! The view side: components turn props into frames and events into actions

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// Something drawable that may react to input
///
/// A component never touches the store. It is handed props derived from
/// state, draws them, and answers input with zero or more actions for the
/// caller to dispatch. The only thing a component may keep in `self` is
/// what it needs to interpret the next event, such as the rectangles it
/// drew last frame for mouse hit-testing.
///
/// ```ignore
/// use redpill::{Component, EventKind, Frame, Rect};
///
/// struct Toggle;
///
/// impl Component<LampAction> for Toggle {
///     type Props<'a> = bool;
///
///     fn handle_event(
///         &mut self,
///         event: &EventKind,
///         lit: bool,
///     ) -> impl IntoIterator<Item = LampAction> {
///         event.is_resize().then_some(LampAction::Set(!lit))
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, lit: bool) {
///         frame.render_widget(Paragraph::new(if lit { "on" } else { "off" }), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Read-only input for one render or one event
    type Props<'a>;

    /// Map an event to actions.
    ///
    /// `None`, `Some(action)` and `vec![..]` all work as return values.
    /// Display-only components keep the default, which emits nothing.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        std::iter::empty()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
