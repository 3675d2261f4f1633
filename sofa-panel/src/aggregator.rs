//! Event aggregation
//!
//! Every select change, per-field reset and the reset-all button feed one
//! [`EventBus`]. One UI event yields exactly one action, in emission order.

use filter_panel::{ConfigError, Document, EventBus};

use crate::action::Action;
use crate::fields::{FIELD_BINDINGS, RESET_ALL_ID};

/// Bind every control of the field table against `document`.
///
/// Fails on the first control that is missing or of the wrong kind.
pub fn build_event_bus(document: &Document) -> Result<EventBus<Action>, ConfigError> {
    let mut bus = EventBus::new();

    for binding in &FIELD_BINDINGS {
        let field = binding.field;
        bus.on_change(document, binding.select_id, move |value| Action::FilterSelect {
            field,
            value,
        })?;
    }

    for binding in &FIELD_BINDINGS {
        bus.on_click(document, binding.reset_id, Action::FilterReset(binding.field))?;
    }

    bus.on_click(document, RESET_ALL_ID, Action::FilterResetAll)?;

    tracing::debug!(sources = bus.source_count(), "Event bus wired");
    Ok(bus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::default_markup;
    use crate::state::FilterField;
    use filter_panel::{EventType, Markup, UiEvent};

    fn document() -> Document {
        Document::from_markup(&default_markup(&crate::dataset::builtin())).unwrap()
    }

    #[test]
    fn test_binds_every_control() {
        let bus = build_event_bus(&document()).unwrap();
        assert_eq!(bus.source_count(), 9);
        assert!(bus.is_bound("select-origin", EventType::Change));
        assert!(bus.is_bound("btn-reset-all", EventType::Click));
        assert!(!bus.is_bound("select-origin", EventType::Click));
    }

    #[test]
    fn test_routes_to_actions() {
        let bus = build_event_bus(&document()).unwrap();

        assert_eq!(
            bus.route(&UiEvent::change("select-material", "Velvet")),
            Some(Action::FilterSelect {
                field: FilterField::Material,
                value: "Velvet".into()
            })
        );
        assert_eq!(
            bus.route(&UiEvent::click("btn-reset-color")),
            Some(Action::FilterReset(FilterField::Color))
        );
        assert_eq!(bus.route(&UiEvent::click("btn-reset-all")), Some(Action::FilterResetAll));
        assert_eq!(bus.route(&UiEvent::click("list")), None);
    }

    #[test]
    fn test_missing_control_fails() {
        let markup = Markup::new()
            .select("select-style", "Style", Vec::new())
            .select("select-material", "Material", Vec::new())
            .select("select-origin", "Origin", Vec::new())
            .list("list", "Sofas");
        let document = Document::from_markup(&markup).unwrap();

        assert_eq!(
            build_event_bus(&document).unwrap_err(),
            ConfigError::MissingElement {
                id: "select-color".into()
            }
        );
    }

    #[test]
    fn test_wrong_kind_fails() {
        let markup = Markup::new().button("select-style", "Style");
        let document = Document::from_markup(&markup).unwrap();

        assert!(matches!(
            build_event_bus(&document),
            Err(ConfigError::WrongKind { expected: "select", found: "button", .. })
        ));
    }
}
