//! Simulator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Hard ceiling on dense simulation width (2^30 amplitudes ≈ 16 GiB).
pub const MAX_SUPPORTED_QUBITS: u32 = 30;

/// Configuration for the statevector simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Largest circuit accepted, in qubits.
    ///
    /// Default: 20
    pub max_qubits: u32,

    /// Shots used by [`StatevectorSimulator::run_configured`].
    ///
    /// Default: 1000
    ///
    /// [`StatevectorSimulator::run_configured`]: crate::StatevectorSimulator::run_configured
    pub shots: u32,

    /// Random seed for reproducible sampling.
    ///
    /// If None, every run draws a fresh seed.
    pub seed: Option<u64>,

    /// Minimum shot count before sampling is spread over the rayon pool.
    ///
    /// Default: 4096
    pub parallel_threshold: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 20,
            shots: 1000,
            seed: None,
            parallel_threshold: 4096,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the qubit limit.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the default number of shots.
    #[must_use]
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Fix the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the parallel sampling threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: u32) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> SimResult<()> {
        if self.max_qubits == 0 || self.max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(SimError::InvalidConfig(format!(
                "max_qubits must be between 1 and {MAX_SUPPORTED_QUBITS}, got {}",
                self.max_qubits
            )));
        }
        if self.shots == 0 {
            return Err(SimError::InvalidShots(0));
        }
        Ok(())
    }
}
