//! Reducer - pure function: (state, update) -> state

use crate::action::Action;
use crate::state::{FilterState, PartialFilterUpdate};

/// Merge `update` over `previous`: present fields overwrite, absent ones
/// stay unchanged.
pub fn reduce(previous: &FilterState, update: &PartialFilterUpdate) -> FilterState {
    previous.merged(update)
}

/// Store reducer. Every result is published, changed or not.
pub fn reducer(state: &FilterState, action: Action) -> FilterState {
    reduce(state, &action.update())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FilterField;

    #[test]
    fn test_updated_fields_take_new_values() {
        let previous = FilterState {
            style: "Modern".into(),
            origin: "Italy".into(),
            ..FilterState::default()
        };
        let update = PartialFilterUpdate::field(FilterField::Color, "Red").with(FilterField::Style, "Classic");

        let next = reduce(&previous, &update);

        assert_eq!(next.style, "Classic");
        assert_eq!(next.color, "Red");
        assert_eq!(next.material, "");
        assert_eq!(next.origin, "Italy");
        // previous is untouched
        assert_eq!(previous.style, "Modern");
    }

    #[test]
    fn test_empty_update_is_identity() {
        let previous = FilterState {
            material: "Velvet".into(),
            ..FilterState::default()
        };
        assert_eq!(reduce(&previous, &PartialFilterUpdate::new()), previous);
    }

    #[test]
    fn test_reset_all_from_constrained_state() {
        let previous = FilterState {
            style: "Chesterfield".into(),
            material: "Leather".into(),
            ..FilterState::default()
        };
        assert_eq!(reducer(&previous, Action::FilterResetAll), FilterState::default());
    }

    #[test]
    fn test_reset_single_field() {
        let previous = FilterState {
            style: "Chesterfield".into(),
            material: "Leather".into(),
            ..FilterState::default()
        };
        let next = reducer(&previous, Action::FilterReset(FilterField::Material));
        assert_eq!(next.style, "Chesterfield");
        assert_eq!(next.material, "");
    }
}
