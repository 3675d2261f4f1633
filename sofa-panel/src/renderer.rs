//! Writes records into the list container

use std::cell::RefCell;
use std::rc::Rc;

use filter_panel::{ConfigError, ControlId, Document};

use crate::record::Record;

/// Renders record subsets into one list element of the document
#[derive(Debug, Clone)]
pub struct ListRenderer {
    document: Rc<RefCell<Document>>,
    list_id: ControlId,
}

impl ListRenderer {
    /// Fails if `list_id` is not a list in the document
    pub fn new(document: Rc<RefCell<Document>>, list_id: impl Into<ControlId>) -> Result<Self, ConfigError> {
        let list_id = list_id.into();
        document.borrow().list(list_id.as_str())?;
        Ok(Self { document, list_id })
    }

    /// Replace the list contents with one item per record, in order
    pub fn render(&self, records: &[&Record]) -> Result<(), ConfigError> {
        let mut document = self.document.borrow_mut();
        let list = document.list_mut(self.list_id.as_str())?;
        list.clear();
        for record in records {
            list.append(record.list_item());
        }
        tracing::debug!(list = %self.list_id, items = records.len(), "Rendered list");
        Ok(())
    }

    /// Remove every item. Idempotent.
    pub fn clear(&self) -> Result<(), ConfigError> {
        self.document
            .borrow_mut()
            .list_mut(self.list_id.as_str())?
            .clear();
        Ok(())
    }
}
