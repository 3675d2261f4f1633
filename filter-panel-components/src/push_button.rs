//! Push button component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use filter_panel_core::{Button, Component};

/// Props for PushButton component
pub struct PushButtonProps<'a> {
    pub button: &'a Button,
    /// Whether this button has focus
    pub is_focused: bool,
}

/// Renders `[ Label ]`
#[derive(Debug, Default, Clone, Copy)]
pub struct PushButton;

impl Component for PushButton {
    type Props<'a> = PushButtonProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let style = if props.is_focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let line = Line::from(Span::styled(format!("[ {} ]", props.button.label()), style));
        frame.render_widget(Paragraph::new(line), area);
    }
}
