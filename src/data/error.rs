use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why the dataset could not be loaded. Both kinds are fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data source '{}' is unavailable", .path.display())]
    DataSourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// The source was readable but its content does not fit the event table.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: '{value}' is not a parsable date")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("malformed input{}: {message}", .row.map(|r| format!(" at row {r}")).unwrap_or_default())]
    Malformed { row: Option<usize>, message: String },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}
