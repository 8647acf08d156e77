use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use redpill::EventKind;

use super::Component;
use crate::action::{choose, Action, Pill};
use crate::state::Verdict;

const BUTTON_WIDTH: u16 = 10;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;

/// Two pill buttons with the current verdict underneath
///
/// Keeps the button rectangles from the last render so mouse clicks can be
/// mapped back to a pill.
#[derive(Debug, Default)]
pub struct PillPicker {
    red_area: Rect,
    blue_area: Rect,
}

#[derive(Debug, Clone, Copy)]
pub struct PillPickerProps {
    pub result: Verdict,
}

impl PillPicker {
    /// Where the Red button was drawn last frame
    pub fn red_area(&self) -> Rect {
        self.red_area
    }

    /// Where the Blue button was drawn last frame
    pub fn blue_area(&self) -> Rect {
        self.blue_area
    }

    fn button(label: &str, background: Color) -> Paragraph<'_> {
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(background)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered().border_type(BorderType::Rounded))
    }

    fn verdict_style(result: Verdict) -> Style {
        match result {
            Verdict::Undecided => Style::default().fg(Color::Gray),
            Verdict::RealWorld => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Verdict::Matrix => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        }
    }
}

impl Component<Action> for PillPicker {
    type Props<'a> = PillPickerProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if event.is_click_in(self.red_area) {
            return Some(choose(Pill::Red.as_str()));
        }
        if event.is_click_in(self.blue_area) {
            return Some(choose(Pill::Blue.as_str()));
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [buttons_row, _, result_row] = Layout::vertical([
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [red_area, blue_area] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .flex(Flex::Center)
        .spacing(BUTTON_GAP)
        .areas(buttons_row);

        frame.render_widget(Self::button("Red", Color::Red), red_area);
        frame.render_widget(Self::button("Blue", Color::Blue), blue_area);
        self.red_area = red_area;
        self.blue_area = blue_area;

        let result = Paragraph::new(props.result.message())
            .alignment(Alignment::Center)
            .style(Self::verdict_style(props.result));
        frame.render_widget(result, result_row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redpill::testing::{click, key_event, RenderHarness};

    fn rendered_picker() -> PillPicker {
        let mut render = RenderHarness::new(40, 10);
        let mut picker = PillPicker::default();
        render.render(|frame| {
            picker.render(
                frame,
                frame.area(),
                PillPickerProps {
                    result: Verdict::Undecided,
                },
            )
        });
        picker
    }

    fn clicked(picker: &mut PillPicker, x: u16, y: u16) -> Vec<Action> {
        let props = PillPickerProps {
            result: Verdict::Undecided,
        };
        picker.handle_event(&click(x, y), props).into_iter().collect()
    }

    #[test]
    fn test_buttons_side_by_side() {
        let picker = rendered_picker();
        let (red, blue) = (picker.red_area(), picker.blue_area());

        assert_eq!(red.height, BUTTON_HEIGHT);
        assert_eq!(red.y, blue.y);
        assert_eq!(blue.x, red.right() + BUTTON_GAP);
    }

    #[test]
    fn test_click_red() {
        let mut picker = rendered_picker();
        let red = picker.red_area();

        let actions = clicked(&mut picker, red.x + 1, red.y + 1);
        assert_eq!(actions, vec![choose("red")]);
    }

    #[test]
    fn test_click_blue() {
        let mut picker = rendered_picker();
        let blue = picker.blue_area();

        let actions = clicked(&mut picker, blue.x, blue.y);
        assert_eq!(actions, vec![choose("blue")]);
    }

    #[test]
    fn test_click_outside_and_keys_ignored() {
        let mut picker = rendered_picker();
        assert!(clicked(&mut picker, 0, 0).is_empty());

        let props = PillPickerProps {
            result: Verdict::Undecided,
        };
        let actions: Vec<Action> = picker
            .handle_event(&key_event("r"), props)
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_before_first_render_nothing_is_clickable() {
        let mut picker = PillPicker::default();
        assert!(clicked(&mut picker, 0, 0).is_empty());
    }
}
