//! Reflects filter state back onto the select controls

use std::cell::RefCell;
use std::rc::Rc;

use filter_panel::{ConfigError, Document};

use crate::fields::FIELD_BINDINGS;
use crate::state::FilterState;

/// Keeps each select showing its field's current value
#[derive(Debug, Clone)]
pub struct ControlSync {
    document: Rc<RefCell<Document>>,
}

impl ControlSync {
    /// Fails if any select of the field table is missing
    pub fn new(document: Rc<RefCell<Document>>) -> Result<Self, ConfigError> {
        {
            let doc = document.borrow();
            for binding in &FIELD_BINDINGS {
                doc.select(binding.select_id)?;
            }
        }
        Ok(Self { document })
    }

    /// Set every select to the state's value for its field
    pub fn sync(&self, state: &FilterState) -> Result<(), ConfigError> {
        let mut document = self.document.borrow_mut();
        for binding in &FIELD_BINDINGS {
            let value = state.get(binding.field);
            let select = document.select_mut(binding.select_id)?;
            if select.value() == value {
                continue;
            }
            if !select.set_value(value) {
                tracing::warn!(
                    select = binding.select_id,
                    value,
                    "Value is not an option of the select, showing empty"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::default_markup;
    use crate::record::Record;
    use filter_panel::Markup;

    fn document() -> Rc<RefCell<Document>> {
        let records = vec![
            Record::new("A", "Modern", "Leather", "Red", "IT"),
            Record::new("B", "Modern", "Fabric", "Blue", "SE"),
        ];
        Rc::new(RefCell::new(Document::from_markup(&default_markup(&records)).unwrap()))
    }

    fn value(document: &Rc<RefCell<Document>>, id: &str) -> String {
        document.borrow().select(id).unwrap().value().to_string()
    }

    #[test]
    fn test_sync_sets_each_select() {
        let document = document();
        let sync = ControlSync::new(document.clone()).unwrap();

        let state = FilterState {
            style: "Modern".into(),
            color: "Blue".into(),
            ..FilterState::default()
        };
        sync.sync(&state).unwrap();

        assert_eq!(value(&document, "select-style"), "Modern");
        assert_eq!(value(&document, "select-material"), "");
        assert_eq!(value(&document, "select-color"), "Blue");

        sync.sync(&FilterState::default()).unwrap();
        assert_eq!(value(&document, "select-style"), "");
        assert_eq!(value(&document, "select-color"), "");
    }

    #[test]
    fn test_unknown_value_shows_empty() {
        let document = document();
        let sync = ControlSync::new(document.clone()).unwrap();

        let state = FilterState {
            origin: "Narnia".into(),
            ..FilterState::default()
        };
        sync.sync(&state).unwrap();
        assert_eq!(value(&document, "select-origin"), "");
    }

    #[test]
    fn test_missing_select_fails() {
        let markup = Markup::new()
            .select("select-style", "Style", Vec::new())
            .list("list", "Sofas");
        let document = Rc::new(RefCell::new(Document::from_markup(&markup).unwrap()));

        assert_eq!(
            ControlSync::new(document).unwrap_err(),
            ConfigError::MissingElement {
                id: "select-material".into()
            }
        );
    }
}
