//! Filter pipeline
//!
//! Four narrowing passes in fixed order: style, material, color, origin.
//! Each pass keeps a record when the state's value for its field is empty or
//! equal to the record's. The fold yields the same subset as
//! [`FilterState::matches`], in dataset order.

use crate::record::Record;
use crate::state::{FilterField, FilterState};

/// One narrowing pass over `records` for `field`
pub fn narrow<'r>(records: Vec<&'r Record>, state: &FilterState, field: FilterField) -> Vec<&'r Record> {
    if state.get(field).is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| state.admits(field, record))
        .collect()
}

/// Records matching every field of `state`, in their original order
pub fn apply<'r>(records: &'r [Record], state: &FilterState) -> Vec<&'r Record> {
    FilterField::ALL
        .into_iter()
        .fold(records.iter().collect(), |subset, field| narrow(subset, state, field))
}
