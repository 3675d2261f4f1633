//! UI event types

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of an element in the [`Document`](crate::Document)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ControlId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ControlId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ControlId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Event types that sources can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A select control's value changed
    Change,
    /// A button was activated
    Click,
}

/// The event payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// New value of the select control
    Change(String),
    Click,
}

impl EventKind {
    /// Get the event type for this event kind
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Change(_) => EventType::Change,
            EventKind::Click => EventType::Click,
        }
    }
}

/// An event raised by an element of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    /// The element that raised the event
    pub target: ControlId,
    pub kind: EventKind,
}

impl UiEvent {
    /// A value change on a select control
    pub fn change(target: impl Into<ControlId>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: EventKind::Change(value.into()),
        }
    }

    /// An activation of a button
    pub fn click(target: impl Into<ControlId>) -> Self {
        Self {
            target: target.into(),
            kind: EventKind::Click,
        }
    }

    /// Get the event type
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }
}
