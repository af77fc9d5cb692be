use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while loading, summarizing or plotting FARS data.
#[derive(Error, Debug)]
pub enum FarsError {
    /// The requested year's file does not exist.
    #[error("file '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// The state code does not appear in the loaded year's STATE column.
    #[error("invalid STATE number: {0}")]
    InvalidState(u32),

    /// A required column is absent from the file's header row.
    #[error("file '{}' is missing required column {column}", path.display())]
    Schema { path: PathBuf, column: &'static str },

    /// Nothing could be counted: no years requested or every year skipped.
    #[error("no accident data loaded for years {requested:?}")]
    NoData { requested: Vec<i32> },

    /// The file could be opened but a row failed to parse.
    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// An I/O failure that is not a missing file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The plotting backend failed to draw or write the image.
    #[error("render error: {0}")]
    Render(String),

    /// A configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FarsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_file() {
        let err = FarsError::NotFound(PathBuf::from("accident_9999.csv.bz2"));
        assert_eq!(
            err.to_string(),
            "file 'accident_9999.csv.bz2' does not exist"
        );
    }

    #[test]
    fn test_invalid_state_display() {
        let err = FarsError::InvalidState(999);
        assert_eq!(err.to_string(), "invalid STATE number: 999");
    }

    #[test]
    fn test_schema_display() {
        let err = FarsError::Schema {
            path: PathBuf::from("/data/accident_2013.csv"),
            column: "LATITUDE",
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/accident_2013.csv"));
        assert!(msg.contains("LATITUDE"));
    }

    #[test]
    fn test_no_data_lists_years() {
        let err = FarsError::NoData {
            requested: vec![1999, 2000],
        };
        assert_eq!(
            err.to_string(),
            "no accident data loaded for years [1999, 2000]"
        );
    }

    #[test]
    fn test_io_keeps_source() {
        use std::error::Error as _;

        let err = FarsError::Io {
            path: PathBuf::from("x.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("denied"));
        assert!(err.source().is_some());
    }
}
