//! Loading, cleaning, and serialization of tabular files.
//!
//! This module provides the in-memory table representation, the format
//! handling for delimited text and spreadsheets, and the cleaner that
//! applies the correction engine column-wise.

pub mod cleaner;
pub mod format;

// Re-export commonly used types
pub use cleaner::*;
pub use format::*;
