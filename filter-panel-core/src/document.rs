//! The element tree a panel is wired against
//!
//! A [`Document`] plays the role a page plays in a browser: it holds the
//! select controls, buttons and list containers by identifier, tracks focus,
//! and turns navigation commands into [`UiEvent`]s. Wiring code looks
//! elements up by id and treats absence as a [`ConfigError`].
//!
//! Documents are built from a [`Markup`], which can be written in code or
//! loaded from JSON:
//!
//! ```
//! use filter_panel_core::{Document, Markup};
//!
//! let markup = Markup::from_json(r#"{
//!     "elements": [
//!         { "kind": "select", "id": "select-color", "label": "Color", "options": ["Red", "Blue"] },
//!         { "kind": "button", "id": "btn-reset-color", "label": "Reset" },
//!         { "kind": "list", "id": "list" }
//!     ]
//! }"#).unwrap();
//!
//! let document = Document::from_markup(&markup).unwrap();
//! assert_eq!(document.select("select-color").unwrap().value(), "");
//! ```

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::HashSet;

use crate::error::ConfigError;
use crate::event::{ControlId, UiEvent};
use crate::keybindings::Command;

/// Description of one element in a [`Markup`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementSpec {
    Select {
        id: ControlId,
        label: String,
        #[serde(default)]
        options: Vec<String>,
    },
    Button {
        id: ControlId,
        label: String,
    },
    List {
        id: ControlId,
        #[serde(default)]
        title: String,
    },
}

impl ElementSpec {
    pub fn id(&self) -> &ControlId {
        match self {
            ElementSpec::Select { id, .. }
            | ElementSpec::Button { id, .. }
            | ElementSpec::List { id, .. } => id,
        }
    }
}

/// Ordered element descriptions; document order is also focus order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markup {
    pub elements: Vec<ElementSpec>,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse markup from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Append a select control
    pub fn select(
        mut self,
        id: impl Into<ControlId>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = String>,
    ) -> Self {
        self.elements.push(ElementSpec::Select {
            id: id.into(),
            label: label.into(),
            options: options.into_iter().collect(),
        });
        self
    }

    /// Append a button
    pub fn button(mut self, id: impl Into<ControlId>, label: impl Into<String>) -> Self {
        self.elements.push(ElementSpec::Button {
            id: id.into(),
            label: label.into(),
        });
        self
    }

    /// Append a list container
    pub fn list(mut self, id: impl Into<ControlId>, title: impl Into<String>) -> Self {
        self.elements.push(ElementSpec::List {
            id: id.into(),
            title: title.into(),
        });
        self
    }
}

/// A drop-down style control holding one selected value
///
/// The first option is always the empty value, shown as "any".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectControl {
    id: ControlId,
    label: String,
    options: Vec<String>,
    selected: usize,
}

impl SelectControl {
    pub fn new(
        id: impl Into<ControlId>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut values = vec![String::new()];
        for option in options {
            if !values.contains(&option) {
                values.push(option);
            }
        }
        Self {
            id: id.into(),
            label: label.into(),
            options: values,
            selected: 0,
        }
    }

    pub fn id(&self) -> &ControlId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// All values, starting with the empty one
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected value (empty when nothing is chosen)
    pub fn value(&self) -> &str {
        &self.options[self.selected]
    }

    /// Select `value`. Unknown values fall back to the empty option and
    /// return `false`.
    pub fn set_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => {
                self.selected = 0;
                false
            }
        }
    }

    /// Move the selection by `delta`, clamped to the option range.
    /// Returns the new value if the selection moved.
    pub fn step(&mut self, delta: isize) -> Option<&str> {
        let last = self.options.len().saturating_sub(1);
        let next = self.selected.saturating_add_signed(delta).min(last);
        if next == self.selected {
            return None;
        }
        self.selected = next;
        Some(self.value())
    }
}

/// A push button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    id: ControlId,
    label: String,
}

impl Button {
    pub fn new(id: impl Into<ControlId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> &ControlId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A container of display items
///
/// The list also remembers which item is first on screen. Views pull that
/// offset back while drawing when the remaining items would leave rows
/// unused, so it is kept in a `Cell`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    id: ControlId,
    title: String,
    items: Vec<String>,
    scroll: Cell<usize>,
}

impl ItemList {
    pub fn new(id: impl Into<ControlId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
            scroll: Cell::new(0),
        }
    }

    pub fn id(&self) -> &ControlId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first item to show
    pub fn scroll_offset(&self) -> usize {
        self.scroll.get()
    }

    /// Move the first shown item by `delta`, staying on an existing item.
    /// Returns whether the offset moved.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let current = self.scroll.get();
        let last = self.items.len().saturating_sub(1);
        let next = current.saturating_add_signed(delta).min(last);
        self.scroll.set(next);
        next != current
    }

    /// Lower the offset to at most `max`
    pub fn clamp_scroll(&self, max: usize) {
        self.scroll.set(self.scroll.get().min(max));
    }

    /// Remove every item and scroll back to the top. Clearing an empty list
    /// is a no-op.
    pub fn clear(&mut self) {
        self.items.clear();
        self.scroll.set(0);
    }

    pub fn append(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }
}

/// One element of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Select(SelectControl),
    Button(Button),
    List(ItemList),
}

impl Element {
    pub fn id(&self) -> &ControlId {
        match self {
            Element::Select(select) => select.id(),
            Element::Button(button) => button.id(),
            Element::List(list) => list.id(),
        }
    }

    /// Element kind name, as used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Select(_) => "select",
            Element::Button(_) => "button",
            Element::List(_) => "list",
        }
    }

    /// Lists are display-only; selects and buttons take focus
    pub fn is_focusable(&self) -> bool {
        !matches!(self, Element::List(_))
    }
}

impl From<&ElementSpec> for Element {
    fn from(spec: &ElementSpec) -> Self {
        match spec {
            ElementSpec::Select { id, label, options } => {
                Element::Select(SelectControl::new(id.clone(), label.clone(), options.clone()))
            }
            ElementSpec::Button { id, label } => Element::Button(Button::new(id.clone(), label.clone())),
            ElementSpec::List { id, title } => Element::List(ItemList::new(id.clone(), title.clone())),
        }
    }
}

/// Result of feeding a navigation command to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Nothing happened
    Ignored,
    /// Only presentation changed (focus moved or a list scrolled)
    Redraw,
    /// An element raised an event
    Event(UiEvent),
}

/// The element tree: ordered elements plus the focused one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
    focus: Option<usize>,
}

impl Document {
    /// Build a document from markup. Element ids must be unique.
    pub fn from_markup(markup: &Markup) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for spec in &markup.elements {
            if !seen.insert(spec.id().clone()) {
                return Err(ConfigError::DuplicateId {
                    id: spec.id().clone(),
                });
            }
        }

        let elements: Vec<Element> = markup.elements.iter().map(Element::from).collect();
        let focus = elements.iter().position(Element::is_focusable);
        Ok(Self { elements, focus })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Look an element up by id
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id().as_str() == id)
    }

    fn find(&self, id: &str) -> Result<&Element, ConfigError> {
        self.get_element_by_id(id)
            .ok_or_else(|| ConfigError::MissingElement { id: id.into() })
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Element, ConfigError> {
        self.elements
            .iter_mut()
            .find(|element| element.id().as_str() == id)
            .ok_or_else(|| ConfigError::MissingElement { id: id.into() })
    }

    fn wrong_kind(element: &Element, expected: &'static str) -> ConfigError {
        ConfigError::WrongKind {
            id: element.id().clone(),
            expected,
            found: element.kind_name(),
        }
    }

    pub fn select(&self, id: &str) -> Result<&SelectControl, ConfigError> {
        match self.find(id)? {
            Element::Select(select) => Ok(select),
            other => Err(Self::wrong_kind(other, "select")),
        }
    }

    pub fn select_mut(&mut self, id: &str) -> Result<&mut SelectControl, ConfigError> {
        match self.find_mut(id)? {
            Element::Select(select) => Ok(select),
            other => Err(Self::wrong_kind(other, "select")),
        }
    }

    pub fn button(&self, id: &str) -> Result<&Button, ConfigError> {
        match self.find(id)? {
            Element::Button(button) => Ok(button),
            other => Err(Self::wrong_kind(other, "button")),
        }
    }

    pub fn list(&self, id: &str) -> Result<&ItemList, ConfigError> {
        match self.find(id)? {
            Element::List(list) => Ok(list),
            other => Err(Self::wrong_kind(other, "list")),
        }
    }

    pub fn list_mut(&mut self, id: &str) -> Result<&mut ItemList, ConfigError> {
        match self.find_mut(id)? {
            Element::List(list) => Ok(list),
            other => Err(Self::wrong_kind(other, "list")),
        }
    }

    /// Id of the focused element, if any element is focusable
    pub fn focused_id(&self) -> Option<&ControlId> {
        self.focus.map(|index| self.elements[index].id())
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id().is_some_and(|focused| focused.as_str() == id)
    }

    /// Move focus to the element with `id`
    pub fn focus(&mut self, id: &str) -> Result<(), ConfigError> {
        let index = self
            .elements
            .iter()
            .position(|element| element.id().as_str() == id)
            .ok_or_else(|| ConfigError::MissingElement { id: id.into() })?;
        if !self.elements[index].is_focusable() {
            return Err(ConfigError::WrongKind {
                id: id.into(),
                expected: "select or button",
                found: self.elements[index].kind_name(),
            });
        }
        self.focus = Some(index);
        Ok(())
    }

    fn cycle_focus(&mut self, forward: bool) -> bool {
        let focusable: Vec<usize> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.is_focusable())
            .map(|(index, _)| index)
            .collect();
        if focusable.len() < 2 {
            return false;
        }

        let current = self
            .focus
            .and_then(|focus| focusable.iter().position(|&index| index == focus))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % focusable.len()
        } else {
            (current + focusable.len() - 1) % focusable.len()
        };
        self.focus = Some(focusable[next]);
        true
    }

    /// Apply a navigation command to the focused element
    pub fn handle_command(&mut self, command: Command) -> Interaction {
        match command {
            Command::FocusNext | Command::FocusPrev => {
                if self.cycle_focus(command == Command::FocusNext) {
                    Interaction::Redraw
                } else {
                    Interaction::Ignored
                }
            }
            Command::OptionNext | Command::OptionPrev => {
                let delta = if command == Command::OptionNext { 1 } else { -1 };
                let Some(Element::Select(select)) = self.focus.map(|i| &mut self.elements[i]) else {
                    return Interaction::Ignored;
                };
                match select.step(delta) {
                    Some(value) => {
                        let value = value.to_string();
                        Interaction::Event(UiEvent::change(select.id().clone(), value))
                    }
                    None => Interaction::Ignored,
                }
            }
            Command::Activate => match self.focus.map(|i| &self.elements[i]) {
                Some(Element::Button(button)) => {
                    Interaction::Event(UiEvent::click(button.id().clone()))
                }
                _ => Interaction::Ignored,
            },
            Command::ScrollDown | Command::ScrollUp => {
                let delta = if command == Command::ScrollDown { 1 } else { -1 };
                // Lists never take focus; scrolling moves the first one
                let Some(list) = self.elements.iter_mut().find_map(|element| match element {
                    Element::List(list) => Some(list),
                    _ => None,
                }) else {
                    return Interaction::Ignored;
                };
                if list.scroll_by(delta) {
                    Interaction::Redraw
                } else {
                    Interaction::Ignored
                }
            }
            Command::Quit => Interaction::Ignored,
        }
    }
}
