//! Token pipeline: encode, simulate, normalize.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use qembed_sim::{SimulatorConfig, StatevectorSimulator};

use crate::config::ProcessorConfig;
use crate::embedding::TokenEmbedding;
use crate::encoding::EncodingScheme;
use crate::error::TokenResult;

/// Dominant outcome of one scheme for one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantOutcome {
    /// Scheme that produced the outcome.
    pub scheme: EncodingScheme,
    /// Most probable bitstring.
    pub bitstring: String,
    /// Its observed probability.
    pub probability: f64,
}

/// Dominant outcomes of every scheme for a single token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeComparison {
    /// The compared token.
    pub token_id: u32,
    /// One entry per scheme, in [`EncodingScheme::ALL`] order.
    pub outcomes: Vec<DominantOutcome>,
}

/// Turns token ids into measurement distributions.
///
/// Every token is encoded into a freshly built circuit and sampled
/// independently.
#[derive(Debug, Clone)]
pub struct TokenProcessor {
    config: ProcessorConfig,
    simulator: StatevectorSimulator,
}

impl TokenProcessor {
    /// Create a processor from a validated configuration.
    pub fn new(config: ProcessorConfig) -> TokenResult<Self> {
        config.validate()?;

        let mut sim_config = SimulatorConfig::new()
            .with_max_qubits(config.num_qubits)
            .with_shots(config.shots);
        sim_config.seed = config.seed;
        let simulator = StatevectorSimulator::with_config(sim_config)?;

        Ok(Self { config, simulator })
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Encode and sample a token with an explicit scheme.
    #[instrument(skip(self))]
    pub fn embed(&self, token_id: u32, scheme: EncodingScheme) -> TokenResult<TokenEmbedding> {
        let circuit = scheme.encode(token_id, self.config.num_qubits)?;
        debug!(
            "Encoded token {} into {} ops, depth {}",
            token_id,
            circuit.num_ops(),
            circuit.depth()
        );

        let counts = self.simulator.run_configured(&circuit)?;

        Ok(TokenEmbedding {
            token_id,
            scheme,
            num_qubits: self.config.num_qubits,
            distribution: counts.to_probabilities(),
        })
    }

    /// Encode and sample a token with the configured scheme.
    pub fn process_token(&self, token_id: u32) -> TokenResult<TokenEmbedding> {
        self.embed(token_id, self.config.scheme)
    }

    /// Process a token sequence in order.
    #[instrument(skip(self, token_ids), fields(tokens = token_ids.len()))]
    pub fn process_tokens(&self, token_ids: &[u32]) -> TokenResult<Vec<TokenEmbedding>> {
        let embeddings = token_ids
            .iter()
            .map(|&id| self.process_token(id))
            .collect::<TokenResult<Vec<_>>>()?;
        info!(
            "Processed {} tokens with {} encoding",
            embeddings.len(),
            self.config.scheme
        );
        Ok(embeddings)
    }

    /// Dominant outcome of every scheme for each token.
    #[instrument(skip(self, token_ids), fields(tokens = token_ids.len()))]
    pub fn compare_schemes(&self, token_ids: &[u32]) -> TokenResult<Vec<SchemeComparison>> {
        token_ids
            .iter()
            .map(|&token_id| {
                let outcomes = EncodingScheme::ALL
                    .iter()
                    .map(|&scheme| {
                        let embedding = self.embed(token_id, scheme)?;
                        let (bitstring, probability) = embedding
                            .dominant()
                            .map(|(k, p)| (k.to_string(), p))
                            .unwrap_or_default();
                        Ok(DominantOutcome {
                            scheme,
                            bitstring,
                            probability,
                        })
                    })
                    .collect::<TokenResult<Vec<_>>>()?;
                Ok(SchemeComparison { token_id, outcomes })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;

    fn processor(num_qubits: u32, scheme: EncodingScheme) -> TokenProcessor {
        TokenProcessor::new(
            ProcessorConfig::new()
                .with_num_qubits(num_qubits)
                .with_scheme(scheme)
                .with_seed(1234),
        )
        .unwrap()
    }

    #[test]
    fn test_amplitude_two_qubits() {
        let e = processor(2, EncodingScheme::Amplitude).process_token(2).unwrap();
        let keys: Vec<_> = e.distribution.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["00", "11"]);
        assert!((e.distribution["00"] - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let e = processor(4, EncodingScheme::Hybrid).process_token(31_337).unwrap();
        let total: f64 = e.distribution.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(e.distribution.keys().all(|k| k.len() == 4));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = TokenProcessor::new(ProcessorConfig::new().with_shots(0));
        assert!(matches!(result, Err(TokenError::InvalidConfig(_))));
    }

    #[test]
    fn test_compare_schemes_shape() {
        let rows = processor(3, EncodingScheme::Hybrid)
            .compare_schemes(&[1, 2])
            .unwrap();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            let schemes: Vec<_> = row.outcomes.iter().map(|o| o.scheme).collect();
            assert_eq!(schemes, EncodingScheme::ALL.to_vec());
            assert!(row.outcomes.iter().all(|o| o.bitstring.len() == 3));
        }
    }
}
