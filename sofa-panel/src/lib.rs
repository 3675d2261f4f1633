//! Sofa catalogue filter panel
//!
//! Select controls for style, material, color and origin narrow a static
//! catalogue shown as a list. Filters combine conjunctively and an empty
//! value matches everything. Reset buttons restore one field or all of them,
//! and the selects always show the current filter state.
//!
//! Event flow:
//! 1. Key press -> keymap command -> document event (`Change` / `Click`)
//! 2. Event bus -> `Action` (one per event, in emission order)
//! 3. Reducer merges the action's partial update over the state
//! 4. Store publishes to its subscribers in order: control sync, then
//!    pipeline + list renderer

pub mod action;
pub mod aggregator;
pub mod app;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fields;
pub mod markup;
pub mod pipeline;
pub mod record;
pub mod reducer;
pub mod renderer;
pub mod state;
pub mod sync;
pub mod ui;

pub use action::Action;
pub use app::{FilterPanel, PanelRuntime, PanelStore};
pub use error::PanelError;
pub use record::Record;
pub use state::{FilterField, FilterState, PartialFilterUpdate};
