//! Structured error types for catalog generation.
//!
//! Only run-fatal conditions live here: bad input data, bad configuration,
//! I/O. Per-card failures (a missing product photo, an unparsable unit
//! value) are not errors — the card layout engine degrades them to
//! placeholder content and the run continues.

use std::path::PathBuf;

use thiserror::Error;

/// The unified error type returned by the public API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The spreadsheet could not be read or parsed.
    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(#[from] csv::Error),

    /// A required data column is absent from the spreadsheet.
    ///
    /// This is fatal: without product codes or descriptions there is no
    /// catalog to lay out, and no partial output is written.
    #[error("spreadsheet is missing the required column '{0}'")]
    MissingColumn(&'static str),

    /// The accent color is not a valid `#RRGGBB` value.
    #[error("invalid hex color '{0}' (expected e.g. #3AA8FF)")]
    InvalidColor(String),

    /// A configuration file could not be parsed.
    #[error("invalid config file: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading input or writing the output document failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}
