//! Field to control table
//!
//! The aggregator, the synchronizer and the default markup all read control
//! identifiers from here.

use crate::state::FilterField;

/// Controls bound to one filter field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldBinding {
    pub field: FilterField,
    /// Select control carrying the field's value
    pub select_id: &'static str,
    /// Button resetting the field
    pub reset_id: &'static str,
}

pub const FIELD_BINDINGS: [FieldBinding; 4] = [
    FieldBinding {
        field: FilterField::Style,
        select_id: "select-style",
        reset_id: "btn-reset-style",
    },
    FieldBinding {
        field: FilterField::Material,
        select_id: "select-material",
        reset_id: "btn-reset-material",
    },
    FieldBinding {
        field: FilterField::Color,
        select_id: "select-color",
        reset_id: "btn-reset-color",
    },
    FieldBinding {
        field: FilterField::Origin,
        select_id: "select-origin",
        reset_id: "btn-reset-origin",
    },
];

pub const RESET_ALL_ID: &str = "btn-reset-all";
pub const LIST_ID: &str = "list";

/// Binding for `field`
pub fn binding(field: FilterField) -> &'static FieldBinding {
    // FIELD_BINDINGS is indexed in FilterField order
    &FIELD_BINDINGS[field as usize]
}
