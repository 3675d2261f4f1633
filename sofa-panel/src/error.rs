//! Application errors

use std::io;
use std::path::PathBuf;

use filter_panel::ConfigError;
use thiserror::Error;

/// Everything that can stop the panel from starting
#[derive(Debug, Error)]
pub enum PanelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot open {what} file {}: {source}", path.display())]
    Read {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create {what} file {}: {source}", path.display())]
    Create {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse {what} file {}: {source}", path.display())]
    Parse {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid filter '{0}': expected FIELD=VALUE")]
    FilterSyntax(String),

    #[error("unknown filter field '{0}': expected one of style, material, color, origin")]
    UnknownField(String),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_errors_convert() {
        let err: PanelError = io::Error::new(io::ErrorKind::Unsupported, "not a tty").into();
        assert!(matches!(err, PanelError::Io(_)));
        assert_eq!(err.to_string(), "terminal error: not a tty");
    }

    #[test]
    fn test_file_errors_name_the_file() {
        let err = PanelError::Create {
            what: "log",
            path: PathBuf::from("/nowhere/panel.log"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("cannot create log file /nowhere/panel.log: "));
    }
}
