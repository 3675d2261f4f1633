//! Catalogue records

use serde::{Deserialize, Serialize};

/// One sofa in the catalogue. Records are never mutated after loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub style: String,
    pub material: String,
    pub color: String,
    pub origin: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        style: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            style: style.into(),
            material: material.into(),
            color: color.into(),
            origin: origin.into(),
        }
    }

    /// Text shown for this record in the list
    pub fn list_item(&self) -> String {
        format!(
            "Name: {}, style: {}, material: {}, color: {}, origin: {}.",
            self.name, self.style, self.material, self.color, self.origin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_shows_every_field() {
        let record = Record::new("Alto", "Modern", "Leather", "Red", "Italy");
        assert_eq!(
            record.list_item(),
            "Name: Alto, style: Modern, material: Leather, color: Red, origin: Italy."
        );
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"name":"Alto","style":"Modern","material":"Leather","color":"Red","origin":"Italy"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record, Record::new("Alto", "Modern", "Leather", "Red", "Italy"));
    }
}
