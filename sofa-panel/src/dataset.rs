//! Dataset provider
//!
//! The catalogue is loaded once and shared read-only as `Rc<[Record]>`.

use std::path::Path;
use std::rc::Rc;

use crate::error::PanelError;
use crate::record::Record;

/// Built-in sofa catalogue
pub fn builtin() -> Rc<[Record]> {
    const SOFAS: &[(&str, &str, &str, &str, &str)] = &[
        ("Oxford", "Chesterfield", "Leather", "Brown", "England"),
        ("Milano", "Modern", "Leather", "Black", "Italy"),
        ("Nordvik", "Scandinavian", "Fabric", "Grey", "Sweden"),
        ("Bellagio", "Modern", "Velvet", "Green", "Italy"),
        ("Windsor", "Chesterfield", "Velvet", "Blue", "England"),
        ("Lund", "Scandinavian", "Fabric", "Beige", "Sweden"),
        ("Verona", "Classic", "Leather", "Brown", "Italy"),
        ("Hudson", "Mid-century", "Fabric", "Blue", "USA"),
        ("Aarhus", "Scandinavian", "Leather", "Black", "Denmark"),
        ("Camden", "Chesterfield", "Leather", "Green", "England"),
        ("Palermo", "Classic", "Velvet", "Red", "Italy"),
        ("Brooklyn", "Mid-century", "Leather", "Grey", "USA"),
    ];

    SOFAS
        .iter()
        .map(|&(name, style, material, color, origin)| Record::new(name, style, material, color, origin))
        .collect()
}

/// Parse a JSON array of records
pub fn from_json(json: &str) -> serde_json::Result<Rc<[Record]>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    Ok(records.into())
}

/// Load a dataset file
pub fn load(path: &Path) -> Result<Rc<[Record]>, PanelError> {
    let json = std::fs::read_to_string(path).map_err(|source| PanelError::Read {
        what: "dataset",
        path: path.to_path_buf(),
        source,
    })?;
    let records = from_json(&json).map_err(|source| PanelError::Parse {
        what: "dataset",
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "Loaded dataset");
    Ok(records)
}
