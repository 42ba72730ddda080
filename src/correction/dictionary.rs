//! Canonical name dictionaries.
//!
//! Two fixed seed tables cover the corrections this crate knows about:
//! district renames and state spelling fixes. Both are normalized into
//! lookup form once at process start and never mutated afterwards, so the
//! shared statics are safe for unsynchronized concurrent reads.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::correction::similarity::SequenceMatcher;
use crate::error::{GeoCleanError, Result};
use crate::normalize::normalize_text;

/// Immutable mapping from normalized keys to canonical display names.
///
/// Entries keep their insertion order. Fuzzy lookups scan entries in that
/// order and ties resolve to the earliest entry, so a given dictionary and
/// cutoff always produce the same match.
#[derive(Debug, Clone)]
pub struct CanonicalDictionary {
    /// (normalized key, canonical name) in insertion order
    entries: Vec<(String, String)>,
    /// Normalized key to position in `entries`
    index: HashMap<String, usize>,
}

impl CanonicalDictionary {
    /// Build a dictionary from (original spelling, canonical name) pairs.
    ///
    /// Each original spelling is normalized into its lookup key. Two
    /// originals that normalize to the same key indicate a misconfigured
    /// seed table and are rejected rather than silently merged.
    pub fn from_entries<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (original, canonical) in pairs {
            let key = normalize_text(original.as_ref());
            if index.contains_key(&key) {
                return Err(GeoCleanError::dictionary(format!(
                    "entries {:?} collide on normalized key {:?}",
                    original.as_ref(),
                    key
                )));
            }
            index.insert(key.clone(), entries.len());
            entries.push((key, canonical.into()));
        }

        Ok(CanonicalDictionary { entries, index })
    }

    /// Look up a canonical name by its exact normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Check whether a normalized key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Find the canonical name whose key is most similar to `key`,
    /// restricted to similarity at or above `cutoff`, top match only.
    ///
    /// Returns `None` when no key qualifies. The scan runs in insertion
    /// order and keeps the first of equally scored keys.
    pub fn closest(&self, key: &str, cutoff: f64) -> Option<&str> {
        let matcher = SequenceMatcher::new(key);
        let mut best: Option<(f64, usize)> = None;

        for (pos, (candidate, _)) in self.entries.iter().enumerate() {
            if let Some(score) = matcher.ratio_above(candidate, cutoff) {
                if best.is_none_or(|(best_score, _)| score > best_score) {
                    best = Some((score, pos));
                }
            }
        }

        best.map(|(_, pos)| self.entries[pos].1.as_str())
    }

    /// Iterate over (normalized key, canonical name) pairs in insertion
    /// order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// District renames: old district name to current official name.
pub fn district_renames() -> Result<CanonicalDictionary> {
    CanonicalDictionary::from_entries([
        ("Cuddapah", "Ysr Kadapa"),
        ("Allahabad", "Prayagraj"),
        ("Faizabad", "Ayodhya"),
        ("Bardhaman", "Purba Bardhaman"),
        ("Hugli", "Hooghly"),
    ])
}

/// State spelling and casing corrections.
pub fn state_corrections() -> Result<CanonicalDictionary> {
    CanonicalDictionary::from_entries([
        ("WESTBENGAL", "West Bengal"),
        ("Orissa", "Odisha"),
        ("andhra pradesh", "Andhra Pradesh"),
        ("Uttaranchal", "Uttarakhand"),
    ])
}

lazy_static! {
    /// Shared district dictionary, built once at first use.
    pub static ref DISTRICT_MAP: CanonicalDictionary =
        district_renames().expect("builtin district entries must not collide");

    /// Shared state dictionary, built once at first use.
    pub static ref STATE_MAP: CanonicalDictionary =
        state_corrections().expect("builtin state entries must not collide");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_normalized_at_build() {
        let dict = state_corrections().unwrap();

        assert_eq!(dict.get("westbengal"), Some("West Bengal"));
        assert_eq!(dict.get("orissa"), Some("Odisha"));
        assert_eq!(dict.get("andhra pradesh"), Some("Andhra Pradesh"));
        // Raw, non-normalized keys are never looked up directly
        assert_eq!(dict.get("WESTBENGAL"), None);
        assert_eq!(dict.get("Orissa"), None);
    }

    #[test]
    fn test_builtin_seed_tables() {
        let districts = district_renames().unwrap();
        assert_eq!(districts.len(), 5);
        assert_eq!(districts.get("cuddapah"), Some("Ysr Kadapa"));
        assert_eq!(districts.get("allahabad"), Some("Prayagraj"));
        assert_eq!(districts.get("faizabad"), Some("Ayodhya"));
        assert_eq!(districts.get("bardhaman"), Some("Purba Bardhaman"));
        assert_eq!(districts.get("hugli"), Some("Hooghly"));

        let states = state_corrections().unwrap();
        assert_eq!(states.len(), 4);
        assert_eq!(states.get("uttaranchal"), Some("Uttarakhand"));
    }

    #[test]
    fn test_collision_is_rejected() {
        let result = CanonicalDictionary::from_entries([
            ("Hugli!", "Hooghly"),
            ("hugli", "Somewhere Else"),
        ]);

        match result {
            Err(GeoCleanError::Dictionary(_)) => {}
            other => panic!("Expected dictionary error, got {other:?}"),
        }
    }

    #[test]
    fn test_closest_match() {
        let districts = district_renames().unwrap();

        assert_eq!(districts.closest("cudapah", 0.85), Some("Ysr Kadapa"));
        assert_eq!(districts.closest("mumbai", 0.85), None);
        assert_eq!(districts.closest("", 0.85), None);
    }

    #[test]
    fn test_closest_tie_breaks_to_first_entry() {
        let dict = CanonicalDictionary::from_entries([
            ("abcd", "First"),
            ("abce", "Second"),
        ])
        .unwrap();

        // "abcf" scores 0.75 against both keys
        assert_eq!(dict.closest("abcf", 0.7), Some("First"));
    }

    #[test]
    fn test_shared_maps() {
        assert_eq!(DISTRICT_MAP.get("hugli"), Some("Hooghly"));
        assert_eq!(STATE_MAP.get("westbengal"), Some("West Bengal"));
        assert!(!DISTRICT_MAP.is_empty());
        assert!(!STATE_MAP.is_empty());
    }
}
