//! Token processor configuration.

use serde::{Deserialize, Serialize};

use crate::encoding::{EncodingScheme, check_width};
use crate::error::{TokenError, TokenResult};

/// Configuration for [`TokenProcessor`](crate::TokenProcessor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Qubits per token circuit.
    ///
    /// Default: 4
    pub num_qubits: u32,

    /// Shots sampled per token.
    ///
    /// Default: 1000
    pub shots: u32,

    /// Encoding used by [`TokenProcessor::process_token`](crate::TokenProcessor::process_token).
    /// Unrecognized names fall back to hybrid.
    pub scheme: EncodingScheme,

    /// Sampling seed. With a seed, the same token always yields the same
    /// distribution.
    pub seed: Option<u64>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            num_qubits: 4,
            shots: 1000,
            scheme: EncodingScheme::Hybrid,
            seed: None,
        }
    }
}

impl ProcessorConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> TokenResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the qubit width.
    pub fn with_num_qubits(mut self, num_qubits: u32) -> Self {
        self.num_qubits = num_qubits;
        self
    }

    /// Set the shot count.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Set the default scheme.
    pub fn with_scheme(mut self, scheme: EncodingScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> TokenResult<()> {
        check_width(self.num_qubits)?;
        if self.shots == 0 {
            return Err(TokenError::InvalidConfig(
                "shots must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProcessorConfig::default();
        assert_eq!(config.num_qubits, 4);
        assert_eq!(config.shots, 1000);
        assert_eq!(config.scheme, EncodingScheme::Hybrid);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = ProcessorConfig::from_json(r#"{"num_qubits": 3, "scheme": "phase"}"#).unwrap();
        assert_eq!(config.num_qubits, 3);
        assert_eq!(config.shots, 1000);
        assert_eq!(config.scheme, EncodingScheme::Phase);
    }

    #[test]
    fn test_from_json_unknown_scheme() {
        let config = ProcessorConfig::from_json(r#"{"scheme": "tensor"}"#).unwrap();
        assert_eq!(config.scheme, EncodingScheme::Hybrid);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            ProcessorConfig::from_json(r#"{"num_qubits": 0}"#),
            Err(TokenError::InvalidQubitCount { num_qubits: 0, .. })
        ));
        assert!(matches!(
            ProcessorConfig::from_json(r#"{"shots": 0}"#),
            Err(TokenError::InvalidConfig(_))
        ));
        assert!(matches!(
            ProcessorConfig::from_json("{"),
            Err(TokenError::Serialization(_))
        ));
    }
}
