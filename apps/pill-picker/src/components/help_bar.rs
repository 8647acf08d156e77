use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use redpill::{format_key_for_display, Keybindings};

use super::Component;
use crate::action::Action;
use crate::config::Command;

pub struct HelpBar;

pub struct HelpBarProps<'a> {
    pub keybindings: &'a Keybindings,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::new();
        for command in Command::ALL {
            // Commands unbound by the user config simply drop out of the bar
            let Some(key) = props.keybindings.get_first_keybinding(command.name()) else {
                continue;
            };
            spans.push(Span::styled(
                format!(" {}", format_key_for_display(key)),
                Style::default().fg(Color::Cyan).bold(),
            ));
            spans.push(Span::styled(
                format!(" {} ", command.label()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
