//! Default page layout built from the dataset

use filter_panel::Markup;

use crate::fields::{FIELD_BINDINGS, LIST_ID, RESET_ALL_ID};
use crate::record::Record;
use crate::state::FilterField;

/// Distinct values of `field`, in order of first appearance
pub fn distinct_values(records: &[Record], field: FilterField) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for record in records {
        let value = field.of(record);
        if !value.is_empty() && !values.iter().any(|seen| seen == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Selects for every field, their reset buttons, reset-all, then the list
pub fn default_markup(records: &[Record]) -> Markup {
    let markup = FIELD_BINDINGS.iter().fold(Markup::new(), |markup, binding| {
        markup.select(
            binding.select_id,
            binding.field.label(),
            distinct_values(records, binding.field),
        )
    });

    let markup = FIELD_BINDINGS.iter().fold(markup, |markup, binding| {
        markup.button(binding.reset_id, format!("Reset {}", binding.field.name()))
    });

    markup.button(RESET_ALL_ID, "Reset all").list(LIST_ID, "Sofas")
}
