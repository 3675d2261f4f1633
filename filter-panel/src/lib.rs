//! filter-panel: reactive filter panels for Rust TUI apps
//!
//! Like Redux/Elm, but for a panel of select controls. All state changes go
//! through dispatched actions; views, list contents and control values are
//! derived from the single state value held by the store.
//!
//! # Example
//! ```ignore
//! use filter_panel::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(infer_categories)]
//! enum PanelAction {
//!     ColorSelect(String),
//!     ColorReset,
//! }
//!
//! let document = Document::from_markup(&markup)?;
//! let mut bus = EventBus::new();
//! bus.on_change(&document, "select-color", PanelAction::ColorSelect)?;
//! ```

// Re-export everything from core
pub use filter_panel_core::*;

// Re-export derive macros
pub use filter_panel_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use filter_panel_core::{Action, ActionCategory, ActionSummary, Component};

    // Document and events
    pub use filter_panel_core::{
        Command, ConfigError, ControlId, Document, EventBus, EventKind, EventType, Interaction,
        Keymap, Markup, UiEvent,
    };

    // Store and runtime
    pub use filter_panel_core::{
        DispatchRuntime, KeyOutcome, LoggingMiddleware, Middleware, Store, StoreWithMiddleware,
    };

    // Derive macros
    pub use filter_panel_macros::Action;

    // Ratatui re-exports
    pub use filter_panel_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
