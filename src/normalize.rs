//! Text normalization for canonical name matching.
//!
//! Raw names arrive with inconsistent casing, stray whitespace, and
//! punctuation ("WESTBENGAL", " Cuddapah! "). Normalization reduces every
//! value to a comparable key so that dictionary lookups and similarity
//! scoring see the same form regardless of how the cell was typed.

use lazy_static::lazy_static;
use regex::Regex;

use crate::cell::CellValue;

lazy_static! {
    /// Everything that is neither a word character nor whitespace.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").expect("valid literal pattern");
}

/// Normalize raw text into a comparable key.
///
/// The text is lower-cased, trimmed, and stripped of punctuation. An empty
/// result is a valid key.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_WORD.replace_all(lowered.trim(), "").into_owned()
}

/// Normalize a cell into a comparable key.
///
/// Missing cells normalize to `None`; that is propagation, not an error.
/// Any other cell is rendered as text and normalized. A cell that
/// normalizes to the empty string yields `Some("")`, which is distinct
/// from `None`.
pub fn normalize(value: &CellValue) -> Option<String> {
    if value.is_missing() {
        return None;
    }
    Some(normalize_text(&value.to_string()))
}
