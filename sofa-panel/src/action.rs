//! Aggregated filter events
//!
//! Every variant records where the event came from and reduces to one
//! `PartialFilterUpdate`. The `Filter` prefix puts all of them in the
//! `filter` category.

use filter_panel::ActionSummary;

use crate::state::{FilterField, PartialFilterUpdate};

#[derive(filter_panel::Action, Clone, Debug, PartialEq, Eq)]
#[action(infer_categories)]
pub enum Action {
    /// A select control changed value
    FilterSelect { field: FilterField, value: String },

    /// A per-field reset button was activated
    FilterReset(FilterField),

    /// The reset-all button was activated
    FilterResetAll,

    /// Programmatic update (command-line presets)
    FilterApply(PartialFilterUpdate),
}

impl Action {
    /// The partial update this event stands for
    pub fn update(&self) -> PartialFilterUpdate {
        match self {
            Action::FilterSelect { field, value } => PartialFilterUpdate::field(*field, value.as_str()),
            Action::FilterReset(field) => PartialFilterUpdate::reset(*field),
            Action::FilterResetAll => PartialFilterUpdate::reset_all(),
            Action::FilterApply(update) => update.clone(),
        }
    }
}

impl ActionSummary for Action {
    fn summary(&self) -> String {
        format!("{} {}", filter_panel::Action::name(self), self.update())
    }
}
