//! Canonical dictionaries and fuzzy correction of geographic names.
//!
//! This module provides the correction engine: sequence similarity
//! scoring, the canonical state and district dictionaries, and the
//! corrector that maps a raw cell value to its canonical form.

pub mod corrector;
pub mod dictionary;
pub mod similarity;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use similarity::*;
