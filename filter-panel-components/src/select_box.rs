//! Single-row view of a select control

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use filter_panel_core::{Component, SelectControl};

/// Text shown for the empty option
pub const ANY_LABEL: &str = "any";

/// Props for SelectBox component
pub struct SelectBoxProps<'a> {
    pub select: &'a SelectControl,
    /// Whether this control has focus
    pub is_focused: bool,
    /// Columns reserved for the label, so rows line up
    pub label_width: u16,
}

/// Renders `Label  ‹ value ›`, highlighted when focused
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectBox;

impl Component for SelectBox {
    type Props<'a> = SelectBoxProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let select = props.select;
        let value = match select.value() {
            "" => ANY_LABEL,
            value => value,
        };

        let value_style = if props.is_focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if select.value().is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let at_first = select.selected_index() == 0;
        let at_last = select.selected_index() + 1 >= select.options().len();
        let arrow = |show: bool, glyph: &'static str| if show { glyph } else { " " };

        let line = Line::from(vec![
            Span::styled(
                format!("{:<width$}", select.label(), width = props.label_width as usize),
                Style::default().fg(Color::Gray),
            ),
            Span::raw(" "),
            Span::styled(
                format!(
                    "{} {} {}",
                    arrow(!at_first, "‹"),
                    value,
                    arrow(!at_last, "›")
                ),
                value_style,
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
