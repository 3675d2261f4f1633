//! Pre-built views for filter-panel documents
//!
//! Components implement the `Component` trait and take everything they
//! draw through Props. They never mutate the document: input goes through
//! the runtime, not through the views.
//!
//! # Components
//!
//! - [`SelectBox`] - One select control on a single row
//! - [`PushButton`] - A labelled button
//! - [`ItemListView`] - Bordered, scrollable item list
//! - [`DocumentView`] - Every element of a document in markup order
//!
//! # Example
//!
//! ```ignore
//! use filter_panel_components::{DocumentView, DocumentViewProps};
//!
//! // In your render function:
//! DocumentView.render(frame, area, DocumentViewProps {
//!     document: &document,
//!     title: "Filters",
//!     empty_text: "no matches",
//! });
//! ```

mod document_view;
mod item_list;
mod push_button;
mod select_box;

pub use document_view::{DocumentView, DocumentViewProps};
pub use item_list::{ItemListView, ItemListViewProps};
pub use push_button::{PushButton, PushButtonProps};
pub use select_box::{SelectBox, SelectBoxProps, ANY_LABEL};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        DocumentView, DocumentViewProps, ItemListView, ItemListViewProps, PushButton,
        PushButtonProps, SelectBox, SelectBoxProps,
    };
}
