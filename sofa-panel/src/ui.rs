//! Screen layout: document view above a one-line help bar

use filter_panel::{format_key_for_display, Command, Component, Document, Keymap};
use filter_panel_components::{DocumentView, DocumentViewProps};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{FilterField, FilterState};

/// Key hints shown in the help bar, in display order. Paired commands share
/// one hint as "Next/Prev label".
const HINTS: [(&[Command], &str); 5] = [
    (&[Command::FocusNext, Command::FocusPrev], "move"),
    (&[Command::OptionNext, Command::OptionPrev], "pick"),
    (&[Command::Activate], "press"),
    (&[Command::ScrollDown, Command::ScrollUp], "scroll"),
    (&[Command::Quit], "quit"),
];

pub struct HelpBarProps<'a> {
    pub keymap: &'a Keymap,
    pub state: &'a FilterState,
}

pub struct HelpBar;

impl Component for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::new();
        for (commands, label) in HINTS {
            let keys: Vec<String> = commands
                .iter()
                .filter_map(|command| props.keymap.first_key(*command))
                .map(format_key_for_display)
                .collect();
            if keys.is_empty() {
                continue;
            }
            spans.push(Span::styled(
                format!(" {}", keys.join("/")),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {label}"), Style::default().fg(Color::DarkGray)));
        }

        let active = FilterField::ALL
            .into_iter()
            .filter(|field| !props.state.get(*field).is_empty())
            .count();
        if active > 0 {
            spans.push(Span::styled(
                format!(" {active} active"),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Owns component state across frames
#[derive(Default)]
pub struct PanelUi {
    view: DocumentView,
}

impl PanelUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, document: &Document, state: &FilterState, keymap: &Keymap) {
        let [body, help] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        self.view.render(
            frame,
            body,
            DocumentViewProps {
                document,
                title: "Filters",
                empty_text: "No sofas match the current filters",
            },
        );
        HelpBar.render(frame, help, HelpBarProps { keymap, state });
    }
}
