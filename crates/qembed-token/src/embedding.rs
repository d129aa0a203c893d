//! Per-token measurement distributions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::encoding::{EncodingScheme, check_width};
use crate::error::TokenResult;

/// Outcome distribution produced by one encoded token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEmbedding {
    /// The encoded token id.
    pub token_id: u32,
    /// Scheme used to build the circuit.
    pub scheme: EncodingScheme,
    /// Width of the encoding circuit.
    pub num_qubits: u32,
    /// Observed probability per bitstring; sums to one.
    pub distribution: BTreeMap<String, f64>,
}

impl TokenEmbedding {
    /// Most probable outcome. Ties go to the lexicographically smallest key.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        self.distribution
            .iter()
            .fold(None, |best: Option<(&str, f64)>, (key, &p)| match best {
                Some((_, best_p)) if best_p >= p => best,
                _ => Some((key.as_str(), p)),
            })
    }

    /// Dense probability vector of length `2^num_qubits`.
    ///
    /// Entry `i` holds the probability of the key whose character `c` is bit
    /// `c` of `i`. Keys that are not bitstrings of that width are skipped.
    ///
    /// Fails with [`InvalidQubitCount`](crate::TokenError::InvalidQubitCount)
    /// for a width that cannot be simulated.
    pub fn to_vector(&self) -> TokenResult<Vec<f64>> {
        check_width(self.num_qubits)?;
        let width = self.num_qubits as usize;
        let mut vector = vec![0.0; 1usize << width];
        for (key, &p) in &self.distribution {
            let index = key
                .chars()
                .enumerate()
                .try_fold(0usize, |acc, (bit, c)| match c {
                    '0' if bit < width => Some(acc),
                    '1' if bit < width => Some(acc | (1 << bit)),
                    _ => None,
                });
            if let Some(slot) = index.and_then(|i| vector.get_mut(i)) {
                *slot += p;
            }
        }
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;

    fn embedding(entries: &[(&str, f64)]) -> TokenEmbedding {
        TokenEmbedding {
            token_id: 7,
            scheme: EncodingScheme::Amplitude,
            num_qubits: 2,
            distribution: entries.iter().map(|&(k, p)| (k.to_string(), p)).collect(),
        }
    }

    #[test]
    fn test_dominant() {
        let e = embedding(&[("00", 0.2), ("01", 0.5), ("11", 0.3)]);
        assert_eq!(e.dominant(), Some(("01", 0.5)));
    }

    #[test]
    fn test_dominant_tie_prefers_smallest_key() {
        let e = embedding(&[("11", 0.5), ("00", 0.5)]);
        assert_eq!(e.dominant(), Some(("00", 0.5)));
        assert_eq!(embedding(&[]).dominant(), None);
    }

    #[test]
    fn test_to_vector_bit_order() {
        // "10": classical bit 0 set -> index 1
        let e = embedding(&[("10", 0.25), ("01", 0.75)]);
        assert_eq!(e.to_vector().unwrap(), vec![0.0, 0.25, 0.75, 0.0]);
    }

    #[test]
    fn test_to_vector_skips_malformed_keys() {
        let e = embedding(&[("11", 0.5), ("1x", 0.25), ("0000000001", 0.25)]);
        assert_eq!(e.to_vector().unwrap(), vec![0.0, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_to_vector_rejects_oversized_width() {
        let mut e = embedding(&[("00", 1.0)]);
        e.num_qubits = 64;
        assert!(matches!(
            e.to_vector(),
            Err(TokenError::InvalidQubitCount { num_qubits: 64, .. })
        ));
    }
}
