//! Sequence similarity scoring for fuzzy name matching.
//!
//! Implements the Ratcliff/Obershelp ratio: the longest matching block of
//! two strings is found, the same search recurses on the pieces to its
//! left and right, and the ratio is twice the total matched length divided
//! by the combined length of both strings.

use std::collections::HashMap;

/// Calculate the Ratcliff/Obershelp similarity between two strings.
/// Returns a ratio between 0.0 (no common characters) and 1.0 (identical).
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(b).ratio(a)
}

/// Matcher that scores many candidates against a fixed query string.
///
/// The query's character positions are indexed once so that scoring a
/// candidate only walks the candidate.
pub struct SequenceMatcher {
    query: String,
    query_chars: Vec<char>,
    /// Positions of each character in the query, ascending.
    char_positions: HashMap<char, Vec<usize>>,
    /// Character multiset of the query, for the quick upper bound.
    char_counts: HashMap<char, usize>,
}

impl SequenceMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: &str) -> Self {
        let query_chars: Vec<char> = query.chars().collect();
        let mut char_positions: HashMap<char, Vec<usize>> = HashMap::new();
        let mut char_counts: HashMap<char, usize> = HashMap::new();

        for (pos, &ch) in query_chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(pos);
            *char_counts.entry(ch).or_insert(0) += 1;
        }

        SequenceMatcher {
            query: query.to_string(),
            query_chars,
            char_positions,
            char_counts,
        }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate the similarity ratio to a candidate string.
    pub fn ratio(&self, candidate: &str) -> f64 {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        let total = candidate_chars.len() + self.query_chars.len();
        if total == 0 {
            return 1.0;
        }

        let matched = self.matching_chars(&candidate_chars);
        2.0 * matched as f64 / total as f64
    }

    /// Upper bound on `ratio` using only string lengths.
    pub fn real_quick_ratio(&self, candidate: &str) -> f64 {
        let la = candidate.chars().count();
        let lb = self.query_chars.len();
        if la + lb == 0 {
            return 1.0;
        }
        2.0 * la.min(lb) as f64 / (la + lb) as f64
    }

    /// Upper bound on `ratio` using character multiset overlap.
    pub fn quick_ratio(&self, candidate: &str) -> f64 {
        let mut candidate_counts: HashMap<char, usize> = HashMap::new();
        let mut candidate_len = 0usize;
        for ch in candidate.chars() {
            *candidate_counts.entry(ch).or_insert(0) += 1;
            candidate_len += 1;
        }

        let total = candidate_len + self.query_chars.len();
        if total == 0 {
            return 1.0;
        }

        let matched: usize = candidate_counts
            .iter()
            .map(|(ch, count)| {
                let available = self.char_counts.get(ch).copied().unwrap_or(0);
                (*count).min(available)
            })
            .sum();

        2.0 * matched as f64 / total as f64
    }

    /// Calculate the ratio if it reaches `cutoff`, checking the cheap
    /// upper bounds first so that clearly-distant candidates are skipped
    /// without the full block search.
    pub fn ratio_above(&self, candidate: &str, cutoff: f64) -> Option<f64> {
        if self.real_quick_ratio(candidate) < cutoff {
            return None;
        }
        if self.quick_ratio(candidate) < cutoff {
            return None;
        }
        let ratio = self.ratio(candidate);
        if ratio >= cutoff { Some(ratio) } else { None }
    }

    /// Total number of characters in matching blocks between the
    /// candidate and the query.
    fn matching_chars(&self, candidate: &[char]) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, candidate.len(), 0, self.query_chars.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, size) = self.longest_match(candidate, alo, ahi, blo, bhi);
            if size > 0 {
                total += size;
                queue.push((alo, i, blo, j));
                queue.push((i + size, ahi, j + size, bhi));
            }
        }

        total
    }

    /// Find the longest matching block between `candidate[alo..ahi]` and
    /// the query's `blo..bhi` range. Among equally long blocks the one
    /// starting earliest in the candidate, then earliest in the query,
    /// wins, keeping results deterministic.
    fn longest_match(
        &self,
        candidate: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let mut best_i = alo;
        let mut best_j = blo;
        let mut best_size = 0;

        // block_ends[j] is the length of the matching block ending at
        // candidate[i] and query[j]
        let mut block_ends: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut new_block_ends: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.char_positions.get(&candidate[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let size = if j == blo {
                        1
                    } else {
                        block_ends.get(&(j - 1)).copied().unwrap_or(0) + 1
                    };
                    new_block_ends.insert(j, size);
                    if size > best_size {
                        best_i = i + 1 - size;
                        best_j = j + 1 - size;
                        best_size = size;
                    }
                }
            }
            block_ends = new_block_ends;
        }

        (best_i, best_j, best_size)
    }
}
