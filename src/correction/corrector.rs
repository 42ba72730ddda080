//! Fuzzy correction of raw cell values against a canonical dictionary.

use crate::cell::CellValue;
use crate::correction::dictionary::CanonicalDictionary;
use crate::normalize::normalize;

/// Minimum similarity a fuzzy match must reach to be accepted.
pub const DEFAULT_CUTOFF: f64 = 0.85;

/// Corrects individual cell values against one canonical dictionary.
pub struct FuzzyCorrector<'a> {
    dictionary: &'a CanonicalDictionary,
    cutoff: f64,
}

impl<'a> FuzzyCorrector<'a> {
    /// Create a corrector with the default cutoff.
    pub fn new(dictionary: &'a CanonicalDictionary) -> Self {
        Self::with_cutoff(dictionary, DEFAULT_CUTOFF)
    }

    /// Create a corrector with a custom cutoff.
    pub fn with_cutoff(dictionary: &'a CanonicalDictionary, cutoff: f64) -> Self {
        FuzzyCorrector { dictionary, cutoff }
    }

    /// Get the similarity cutoff.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Correct a single cell value.
    ///
    /// Missing cells pass through untouched. Otherwise the value is
    /// normalized and looked up exactly, then fuzzily (top match at or
    /// above the cutoff). When neither lookup finds a canonical name the
    /// caller's original value is returned unchanged, not the normalized
    /// key.
    pub fn correct(&self, value: &CellValue) -> CellValue {
        let Some(key) = normalize(value) else {
            return value.clone();
        };

        if let Some(canonical) = self.dictionary.get(&key) {
            return CellValue::text(canonical);
        }

        match self.dictionary.closest(&key, self.cutoff) {
            Some(canonical) => CellValue::text(canonical),
            None => value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::dictionary::{district_renames, state_corrections};

    #[test]
    fn test_exact_match_after_normalization() {
        let districts = district_renames().unwrap();
        let corrector = FuzzyCorrector::new(&districts);

        assert_eq!(
            corrector.correct(&CellValue::text("Cuddapah ")),
            CellValue::text("Ysr Kadapa")
        );
        assert_eq!(
            corrector.correct(&CellValue::text("HUGLI")),
            CellValue::text("Hooghly")
        );
    }

    #[test]
    fn test_seed_entries_are_case_whitespace_punctuation_insensitive() {
        let districts = district_renames().unwrap();
        let states = state_corrections().unwrap();

        for (dict, entries) in [
            (
                &districts,
                vec![
                    ("Cuddapah", "Ysr Kadapa"),
                    ("Allahabad", "Prayagraj"),
                    ("Faizabad", "Ayodhya"),
                    ("Bardhaman", "Purba Bardhaman"),
                    ("Hugli", "Hooghly"),
                ],
            ),
            (
                &states,
                vec![
                    ("WESTBENGAL", "West Bengal"),
                    ("Orissa", "Odisha"),
                    ("andhra pradesh", "Andhra Pradesh"),
                    ("Uttaranchal", "Uttarakhand"),
                ],
            ),
        ] {
            let corrector = FuzzyCorrector::new(dict);
            for (original, canonical) in entries {
                let expected = CellValue::text(canonical);

                assert_eq!(corrector.correct(&CellValue::text(original)), expected);
                assert_eq!(
                    corrector.correct(&CellValue::text(original.to_uppercase())),
                    expected
                );
                assert_eq!(
                    corrector.correct(&CellValue::text(format!(" {original} "))),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_fuzzy_match_within_tolerance() {
        let districts = district_renames().unwrap();
        let corrector = FuzzyCorrector::new(&districts);

        // One deletion away from "cuddapah"
        assert_eq!(
            corrector.correct(&CellValue::text("Cudapah")),
            CellValue::text("Ysr Kadapa")
        );
    }

    #[test]
    fn test_below_cutoff_returns_original() {
        let districts = district_renames().unwrap();
        let corrector = FuzzyCorrector::new(&districts);

        assert_eq!(
            corrector.correct(&CellValue::text("Mumbai")),
            CellValue::text("Mumbai")
        );
        // The original representation is preserved, not the normalized key
        assert_eq!(
            corrector.correct(&CellValue::text(" Mumbai! ")),
            CellValue::text(" Mumbai! ")
        );
    }

    #[test]
    fn test_missing_passes_through() {
        let districts = district_renames().unwrap();
        let corrector = FuzzyCorrector::new(&districts);

        assert_eq!(corrector.correct(&CellValue::Missing), CellValue::Missing);
    }

    #[test]
    fn test_non_text_cells_pass_through_on_miss() {
        let states = state_corrections().unwrap();
        let corrector = FuzzyCorrector::new(&states);

        assert_eq!(
            corrector.correct(&CellValue::Integer(42)),
            CellValue::Integer(42)
        );
        assert_eq!(
            corrector.correct(&CellValue::Float(1.5)),
            CellValue::Float(1.5)
        );
    }

    #[test]
    fn test_canonical_values_are_fixed_points() {
        let districts = district_renames().unwrap();
        let states = state_corrections().unwrap();

        for (dict, _) in [(&districts, "district"), (&states, "state")] {
            let corrector = FuzzyCorrector::new(dict);
            let canonicals: Vec<String> =
                dict.entries().map(|(_, v)| v.to_string()).collect();
            for canonical in canonicals {
                let value = CellValue::text(canonical.clone());
                let once = corrector.correct(&value);
                let twice = corrector.correct(&once);
                assert_eq!(once, twice, "correction of {canonical:?} is not idempotent");
            }
        }
    }

    #[test]
    fn test_custom_cutoff() {
        let districts = district_renames().unwrap();
        let strict = FuzzyCorrector::with_cutoff(&districts, 1.0);
        assert_eq!(strict.cutoff(), 1.0);

        // Near miss no longer qualifies at cutoff 1.0
        assert_eq!(
            strict.correct(&CellValue::text("Cudapah")),
            CellValue::text("Cudapah")
        );
        // Exact key membership is unaffected by the cutoff
        assert_eq!(
            strict.correct(&CellValue::text("Cuddapah")),
            CellValue::text("Ysr Kadapa")
        );
    }
}
