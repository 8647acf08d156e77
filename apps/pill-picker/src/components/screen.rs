use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Block,
    Frame,
};
use redpill::{EventKind, Keybindings};

use super::{Component, HelpBar, HelpBarProps, PillPicker, PillPickerProps};
use crate::action::Action;
use crate::config::Command;
use crate::state::Verdict;
use crate::APP_NAME;

/// The whole screen: framed pill picker plus the help bar
#[derive(Debug, Default)]
pub struct PillScreen {
    picker: PillPicker,
}

#[derive(Clone, Copy)]
pub struct PillScreenProps<'a> {
    pub result: Verdict,
    pub keybindings: &'a Keybindings,
}

impl PillScreen {
    pub fn picker(&self) -> &PillPicker {
        &self.picker
    }
}

impl Component<Action> for PillScreen {
    type Props<'a> = PillScreenProps<'a>;

    /// Bound keys win over clicks; anything else goes to the picker.
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if let EventKind::Key(key) = event {
            let command = props
                .keybindings
                .get_command(*key)
                .and_then(Command::from_name);
            return command.map(Command::action);
        }

        let picker_props = PillPickerProps {
            result: props.result,
        };
        self.picker
            .handle_event(event, picker_props)
            .into_iter()
            .next()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let block = Block::bordered()
            .title(format!(" {} ", APP_NAME))
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(main_area);
        frame.render_widget(block, main_area);

        self.picker.render(
            frame,
            inner,
            PillPickerProps {
                result: props.result,
            },
        );

        HelpBar.render(
            frame,
            help_area,
            HelpBarProps {
                keybindings: props.keybindings,
            },
        );
    }
}
