//! Whole-document view: controls on top, lists below

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use filter_panel_core::{Component, Document, Element};

use crate::item_list::{ItemListView, ItemListViewProps};
use crate::push_button::{PushButton, PushButtonProps};
use crate::select_box::{SelectBox, SelectBoxProps};

/// Props for DocumentView component
pub struct DocumentViewProps<'a> {
    pub document: &'a Document,
    /// Title of the controls block
    pub title: &'a str,
    /// Text shown in an empty list
    pub empty_text: &'a str,
}

/// Lays out every element of a document in markup order
///
/// Selects and buttons take one row each inside a bordered block. Lists
/// share the remaining height.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentView;

impl Component for DocumentView {
    type Props<'a> = DocumentViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let document = props.document;
        let (controls, lists): (Vec<&Element>, Vec<&Element>) = document
            .elements()
            .iter()
            .partition(|element| element.is_focusable());

        let label_width = controls
            .iter()
            .filter_map(|element| match element {
                Element::Select(select) => Some(select.label().chars().count()),
                _ => None,
            })
            .max()
            .unwrap_or(0) as u16;

        let mut sections = vec![Constraint::Length(controls.len() as u16 + 2)];
        sections.extend(lists.iter().map(|_| Constraint::Fill(1)));
        let areas = Layout::vertical(sections).split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", props.title));
        let inner = block.inner(areas[0]);
        frame.render_widget(block, areas[0]);

        let rows = Layout::vertical(controls.iter().map(|_| Constraint::Length(1))).split(inner);
        for (element, row) in controls.iter().zip(rows.iter()) {
            let is_focused = document.is_focused(element.id().as_str());
            match element {
                Element::Select(select) => SelectBox.render(
                    frame,
                    *row,
                    SelectBoxProps {
                        select,
                        is_focused,
                        label_width,
                    },
                ),
                Element::Button(button) => {
                    PushButton.render(frame, *row, PushButtonProps { button, is_focused })
                }
                Element::List(_) => {}
            }
        }

        for (element, list_area) in lists.iter().zip(areas.iter().skip(1)) {
            if let Element::List(list) = element {
                ItemListView.render(
                    frame,
                    *list_area,
                    ItemListViewProps {
                        list,
                        empty_text: props.empty_text,
                    },
                );
            }
        }
    }
}
