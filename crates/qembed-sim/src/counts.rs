//! Outcome histograms.

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement outcome counts.
///
/// Maps fixed-width bitstrings (character `c` is classical bit `c`) to the
/// number of shots that produced them.
///
/// Classical bit 0 is the leftmost character. Qiskit-style reports print
/// bit 0 rightmost, so the same outcome reads reversed there: `"100"` here
/// is `"001"` in a Qiskit histogram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a specific bitstring.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no outcome was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(bitstring, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Relative frequency of a bitstring.
    pub fn probability(&self, bitstring: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(bitstring) as f64 / total as f64
        }
    }

    /// Combined relative frequency of a set of bitstrings.
    ///
    /// For a Bell pair, `support_probability(&["00", "11"])` is the fidelity
    /// estimate reported by the demos.
    pub fn support_probability(&self, bitstrings: &[&str]) -> f64 {
        bitstrings.iter().map(|b| self.probability(b)).sum()
    }

    /// Normalized distribution, ordered by bitstring.
    pub fn to_probabilities(&self) -> BTreeMap<String, f64> {
        let total = self.total();
        if total == 0 {
            return BTreeMap::new();
        }
        self.counts
            .iter()
            .map(|(bs, &count)| (bs.clone(), count as f64 / total as f64))
            .collect()
    }

    /// Outcomes sorted by count (descending), ties broken by bitstring.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }

    /// The most frequent outcome.
    pub fn most_common(&self) -> Option<(&str, u64)> {
        self.sorted().into_iter().next()
    }

    /// Add another histogram into this one.
    #[must_use]
    pub fn merge(mut self, other: Counts) -> Self {
        for (bitstring, count) in other.counts {
            self.insert(bitstring, count);
        }
        self
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        writeln!(f, "Counts ({total} shots):")?;

        let sorted = self.sorted();
        for (bitstring, count) in sorted.iter().take(16) {
            let prob = *count as f64 / total as f64;
            writeln!(f, "  {bitstring}: {count} ({:.2}%)", prob * 100.0)?;
        }

        if sorted.len() > 16 {
            writeln!(f, "  ... and {} more outcomes", sorted.len() - 16)?;
        }

        Ok(())
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Counts {
        let mut counts = Counts::new();
        counts.insert("00", 50);
        counts.insert("01", 30);
        counts.insert("11", 20);
        counts
    }

    #[test]
    fn test_counts_basic() {
        let counts = sample();
        assert_eq!(counts.get("00"), 50);
        assert_eq!(counts.get("10"), 0);
        assert_eq!(counts.total(), 100);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_insert_accumulates() {
        let mut counts = Counts::new();
        counts.insert("1", 1);
        counts.insert("1", 1);
        assert_eq!(counts.get("1"), 2);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_probabilities() {
        let counts = sample();
        assert!((counts.probability("01") - 0.3).abs() < 1e-12);
        assert!((counts.support_probability(&["00", "11"]) - 0.7).abs() < 1e-12);

        let probs = counts.to_probabilities();
        let keys: Vec<_> = probs.keys().cloned().collect();
        assert_eq!(keys, vec!["00", "01", "11"]);
        assert!((probs.values().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_counts() {
        let counts = Counts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.probability("0"), 0.0);
        assert!(counts.to_probabilities().is_empty());
        assert_eq!(counts.most_common(), None);
    }

    #[test]
    fn test_sorted_breaks_ties_by_key() {
        let mut counts = Counts::new();
        counts.insert("11", 5);
        counts.insert("00", 5);
        counts.insert("01", 9);
        assert_eq!(counts.sorted(), vec![("01", 9), ("00", 5), ("11", 5)]);
        assert_eq!(counts.most_common(), Some(("01", 9)));
    }

    #[test]
    fn test_merge_is_additive() {
        let mut other = Counts::new();
        other.insert("00", 5);
        other.insert("10", 7);

        let merged = sample().merge(other);
        assert_eq!(merged.get("00"), 55);
        assert_eq!(merged.get("10"), 7);
        assert_eq!(merged.total(), 112);
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.starts_with("Counts (100 shots):"));
        assert!(text.contains("00: 50 (50.00%)"));
    }
}
