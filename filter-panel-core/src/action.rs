//! Action traits for type-safe state updates

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions describe a requested state change. They should be:
/// - Clone: Actions are passed to middleware and may be queued
/// - Debug: For logging
/// - Send + 'static: Actions cross the runtime's queue
///
/// Use `#[derive(Action)]` from `filter-panel-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Grouping of actions by name prefix
///
/// Generated by `#[action(infer_categories)]`: `FilterSelect` and `FilterReset`
/// both land in the `"filter"` category.
pub trait ActionCategory: Action {
    /// The category this action belongs to, if any
    fn category(&self) -> Option<&'static str>;
}

/// Short, human-readable description of an action for logs
///
/// The default uses `Debug`; override it for actions carrying bulky payloads.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
