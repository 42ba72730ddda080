//! Cell values for loaded tables.
//!
//! Input formats are loosely typed: a cell may be absent, textual, numeric,
//! or boolean. [`CellValue`] makes that explicit so normalization has a
//! total contract instead of relying on implicit coercion. Missing cells
//! are kept distinct from empty text so correction can pass them through
//! untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell in a loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// An absent value (empty CSV field or empty spreadsheet cell).
    Missing,
    /// Textual content.
    Text(String),
    /// Integer content from a spreadsheet cell.
    Integer(i64),
    /// Floating-point content from a spreadsheet cell.
    Float(f64),
    /// Boolean content from a spreadsheet cell.
    Bool(bool),
}

impl CellValue {
    /// Check whether this cell holds no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Create a text cell.
    pub fn text<S: Into<String>>(text: S) -> Self {
        CellValue::Text(text.into())
    }

    /// Parse a CSV field. Empty fields are treated as missing.
    pub fn from_csv_field(field: &str) -> Self {
        if field.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(field.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing => Ok(()),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}
