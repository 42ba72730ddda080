//! Error types for the Geoclean library.
//!
//! All errors are represented by the [`GeoCleanError`] enum. The boundary
//! layer that drives a clean operation needs to distinguish exactly one
//! case: a missing state or district column carries a message meant to be
//! shown to the end user, while every other failure is an opaque
//! processing error.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Geoclean operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for specific error types.
#[derive(Error, Debug)]
pub enum GeoCleanError {
    /// A required column could not be located in the input table.
    /// The message is the user-facing text, rendered verbatim.
    #[error("{0}")]
    MissingColumn(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Delimited-text parsing or serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet reading or writing errors
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Dictionary configuration errors (colliding seed entries)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GeoCleanError.
pub type Result<T> = std::result::Result<T, GeoCleanError>;

impl GeoCleanError {
    /// Create a new missing-column error.
    pub fn missing_column<S: Into<String>>(msg: S) -> Self {
        GeoCleanError::MissingColumn(msg.into())
    }

    /// Create a new spreadsheet error.
    pub fn spreadsheet<S: Into<String>>(msg: S) -> Self {
        GeoCleanError::Spreadsheet(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        GeoCleanError::Dictionary(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GeoCleanError::Other(msg.into())
    }

    /// Whether this error names a missing column. Everything else is a
    /// generic processing failure the caller should not surface verbatim.
    pub fn is_missing_column(&self) -> bool {
        matches!(self, GeoCleanError::MissingColumn(_))
    }
}

impl From<calamine::Error> for GeoCleanError {
    fn from(err: calamine::Error) -> Self {
        GeoCleanError::Spreadsheet(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for GeoCleanError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        GeoCleanError::Spreadsheet(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GeoCleanError::missing_column("State column not found");
        assert_eq!(error.to_string(), "State column not found");

        let error = GeoCleanError::dictionary("Test dictionary error");
        assert_eq!(error.to_string(), "Dictionary error: Test dictionary error");

        let error = GeoCleanError::spreadsheet("Test spreadsheet error");
        assert_eq!(
            error.to_string(),
            "Spreadsheet error: Test spreadsheet error"
        );
    }

    #[test]
    fn test_missing_column_classification() {
        assert!(GeoCleanError::missing_column("District column not found").is_missing_column());
        assert!(!GeoCleanError::other("anything else").is_missing_column());

        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        assert!(!GeoCleanError::from(io_error).is_missing_column());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = GeoCleanError::from(io_error);

        match error {
            GeoCleanError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
