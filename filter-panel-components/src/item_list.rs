//! Scrollable view of an item list

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use filter_panel_core::{Component, ItemList};

/// Indent of wrapped continuation lines
const CONTINUATION: &str = "  ";

/// Props for ItemListView component
pub struct ItemListViewProps<'a> {
    pub list: &'a ItemList,
    /// Text shown when the list has no items
    pub empty_text: &'a str,
}

/// A bordered list that starts at the list's scroll offset
///
/// Items wider than the list wrap after their ", " separators. Drawing
/// clamps the list's offset so the last item never ends above the bottom
/// edge while earlier items are scrolled out.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemListView;

/// Split `item` into lines of at most `width` columns, breaking only after
/// ", ". A part wider than `width` keeps its own line and is cut by the
/// terminal.
fn wrap_item(item: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for part in item.split_inclusive(", ") {
        let part = part.trim_end();
        let fits = line.chars().count() + 1 + part.chars().count() <= width;
        if line.is_empty() {
            line.push_str(part);
        } else if fits {
            line.push(' ');
            line.push_str(part);
        } else {
            lines.push(std::mem::take(&mut line));
            line = format!("{CONTINUATION}{part}");
        }
    }
    lines.push(line);
    lines
}

/// Largest offset at which the items from there to the end still fill the
/// viewport
fn max_offset(heights: &[usize], viewport_height: usize) -> usize {
    let mut used = 0;
    let mut offset = heights.len();
    while offset > 0 && used + heights[offset - 1] <= viewport_height {
        used += heights[offset - 1];
        offset -= 1;
    }
    offset.min(heights.len().saturating_sub(1))
}

impl Component for ItemListView {
    type Props<'a> = ItemListViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        // Area minus borders
        let viewport_height = area.height.saturating_sub(2) as usize;
        let inner_width = area.width.saturating_sub(2) as usize;
        let list = props.list;

        let title = format!(" {} ({}) ", list.title(), list.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);

        if list.is_empty() {
            let items = vec![ListItem::new(Line::styled(
                props.empty_text,
                Style::default().fg(Color::DarkGray),
            ))];
            frame.render_widget(List::new(items).block(block), area);
            return;
        }

        let wrapped: Vec<Vec<String>> = list
            .items()
            .iter()
            .map(|item| wrap_item(item, inner_width))
            .collect();
        let heights: Vec<usize> = wrapped.iter().map(Vec::len).collect();
        list.clamp_scroll(max_offset(&heights, viewport_height));

        let items: Vec<ListItem> = wrapped
            .into_iter()
            .map(|lines| ListItem::new(Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>())))
            .collect();

        let mut state = ListState::default();
        *state.offset_mut() = list.scroll_offset();
        frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
    }
}
