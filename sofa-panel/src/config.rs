//! Command line, file loaders and logging setup

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use filter_panel::{Keymap, Markup};
use tracing_subscriber::EnvFilter;

use crate::error::PanelError;
use crate::state::{FilterField, PartialFilterUpdate};

/// Sofa catalogue filter panel
#[derive(Parser, Debug, Default)]
#[command(name = "sofa-panel")]
#[command(about = "Filter a sofa catalogue by style, material, color and origin")]
pub struct Args {
    /// JSON array of records (defaults to the built-in catalogue)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// JSON markup describing the controls and the list
    #[arg(long, value_name = "PATH")]
    pub layout: Option<PathBuf>,

    /// JSON keymap overrides, e.g. {"quit": ["q"]}
    #[arg(long, value_name = "PATH")]
    pub keymap: Option<PathBuf>,

    /// Initial filter, repeatable (an empty VALUE clears the field)
    #[arg(long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Print the matching records and exit instead of opening the panel
    #[arg(long)]
    pub print: bool,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Parse one `FIELD=VALUE` preset
pub fn parse_filter(spec: &str) -> Result<PartialFilterUpdate, PanelError> {
    let (name, value) = spec
        .split_once('=')
        .ok_or_else(|| PanelError::FilterSyntax(spec.to_string()))?;
    let name = name.trim();
    let field = FilterField::from_name(name).ok_or_else(|| PanelError::UnknownField(name.to_string()))?;
    Ok(PartialFilterUpdate::field(field, value))
}

/// Combine all presets; later ones win per field
pub fn parse_filters(specs: &[String]) -> Result<PartialFilterUpdate, PanelError> {
    specs.iter().try_fold(PartialFilterUpdate::new(), |update, spec| {
        Ok(update.merge(&parse_filter(spec)?))
    })
}

fn read(what: &'static str, path: &Path) -> Result<String, PanelError> {
    std::fs::read_to_string(path).map_err(|source| PanelError::Read {
        what,
        path: path.to_path_buf(),
        source,
    })
}

/// Load a markup file
pub fn load_markup(path: &Path) -> Result<Markup, PanelError> {
    let json = read("layout", path)?;
    Markup::from_json(&json).map_err(|source| PanelError::Parse {
        what: "layout",
        path: path.to_path_buf(),
        source,
    })
}

/// Load keymap overrides and merge them over the defaults
pub fn load_keymap(path: &Path) -> Result<Keymap, PanelError> {
    let json = read("keymap", path)?;
    let user: Keymap = serde_json::from_str(&json).map_err(|source| PanelError::Parse {
        what: "keymap",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Keymap::merge(Keymap::default(), user))
}

/// Send tracing output to `path`. Without a path, logging stays off so the
/// terminal UI is never written over.
pub fn init_logging(path: Option<&Path>) -> Result<(), PanelError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| PanelError::Create {
        what: "log",
        path: path.to_path_buf(),
        source,
    })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_panel::Command;

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("color=Red").unwrap(),
            PartialFilterUpdate::field(FilterField::Color, "Red")
        );
        assert_eq!(
            parse_filter("origin=").unwrap(),
            PartialFilterUpdate::field(FilterField::Origin, "")
        );
        assert!(matches!(parse_filter("color"), Err(PanelError::FilterSyntax(_))));
        assert!(matches!(parse_filter("price=1"), Err(PanelError::UnknownField(f)) if f == "price"));
    }

    #[test]
    fn test_parse_filters_later_wins() {
        let specs = vec!["style=Modern".to_string(), "color=Red".into(), "style=Classic".into()];
        let update = parse_filters(&specs).unwrap();
        assert_eq!(update.get(FilterField::Style), Some("Classic"));
        assert_eq!(update.get(FilterField::Color), Some("Red"));
        assert_eq!(update.get(FilterField::Origin), None);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "sofa-panel",
            "--filter",
            "style=Modern",
            "--filter",
            "color=Red",
            "--print",
        ]);
        assert_eq!(args.filters, vec!["style=Modern", "color=Red"]);
        assert!(args.print);
        assert!(args.data.is_none());
    }

    #[test]
    fn test_load_keymap_merges_over_defaults() {
        let path = std::env::temp_dir().join(format!("sofa-panel-keymap-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"quit": ["x"], "dance": ["d"]}"#).unwrap();

        let keymap = load_keymap(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(keymap.keys(Command::Quit), &["x".to_string()]);
        assert_eq!(keymap.first_key(Command::FocusNext), Some("tab"));
    }

    #[test]
    fn test_load_markup_parse_error() {
        let path = std::env::temp_dir().join(format!("sofa-panel-layout-{}.json", std::process::id()));
        std::fs::write(&path, "{not json").unwrap();

        let err = load_markup(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, PanelError::Parse { what: "layout", .. }));
    }

    #[test]
    fn test_init_logging_reports_uncreatable_file() {
        let path = std::env::temp_dir()
            .join(format!("sofa-panel-missing-{}", std::process::id()))
            .join("panel.log");

        // The file cannot be created, so no subscriber gets installed
        let err = init_logging(Some(&path)).unwrap_err();

        assert!(matches!(err, PanelError::Create { what: "log", .. }));
        assert!(init_logging(None).is_ok());
    }
}
