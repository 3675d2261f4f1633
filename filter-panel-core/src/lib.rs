//! Core traits and types for filter-panel
//!
//! This crate provides the building blocks for reactive filter panels in the
//! terminal, following a Redux/Elm-inspired architecture.
//!
//! # Core Concepts
//!
//! - **Action**: Events that describe requested state changes
//! - **Store**: Single state value, pure reducer, synchronous ordered subscribers
//! - **Document**: Identified elements (selects, buttons, lists) the panel is wired against
//! - **EventBus**: Merges element events into one action stream
//! - **Keymap**: Key strings bound to navigation commands
//! - **Component**: Pure views that render based on props
//!
//! # Basic Example
//!
//! ```ignore
//! use filter_panel_core::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum MyAction {
//!     ColorSelect(String),
//!     ColorReset,
//! }
//!
//! fn reducer(_state: &String, action: MyAction) -> String {
//!     match action {
//!         MyAction::ColorSelect(value) => value,
//!         MyAction::ColorReset => String::new(),
//!     }
//! }
//!
//! let document = Document::from_markup(&markup)?;
//! let mut bus = EventBus::new();
//! bus.on_change(&document, "select-color", MyAction::ColorSelect)?
//!     .on_click(&document, "btn-reset-color", MyAction::ColorReset)?;
//!
//! let mut store = Store::new(String::new(), reducer);
//! store.subscribe(|color| tracing::info!(%color, "color changed"));
//!
//! if let Some(action) = bus.route(&UiEvent::change("select-color", "Red")) {
//!     store.dispatch(action);
//! }
//! ```

pub mod action;
pub mod bus;
pub mod component;
pub mod document;
pub mod error;
pub mod event;
pub mod keybindings;
pub mod runtime;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionCategory, ActionSummary};
pub use component::Component;
pub use error::ConfigError;

// Event system exports
pub use bus::{spawn_event_poller, EventBus, RawEvent};
pub use document::{Button, Document, Element, ElementSpec, Interaction, ItemList, Markup, SelectControl};
pub use event::{ControlId, EventKind, EventType, UiEvent};

// Keymap exports
pub use keybindings::{format_key_for_display, parse_key_string, Command, Keymap};

// Store exports
pub use store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware, SubscriptionId};

// Runtime exports
pub use runtime::{DispatchRuntime, DispatchStore, KeyOutcome};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{buffer_rect_to_string_plain, buffer_to_string_plain, key, keys, RecordingMiddleware, RenderHarness};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory, ActionSummary};
    pub use crate::bus::EventBus;
    pub use crate::component::Component;
    pub use crate::document::{Document, Interaction, Markup};
    pub use crate::error::ConfigError;
    pub use crate::event::{ControlId, EventKind, EventType, UiEvent};
    pub use crate::keybindings::{Command, Keymap};
    pub use crate::runtime::{DispatchRuntime, KeyOutcome};
    pub use crate::store::{LoggingMiddleware, Middleware, Store, StoreWithMiddleware};

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
