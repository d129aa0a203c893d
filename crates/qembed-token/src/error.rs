//! Error types for token encoding.

use qembed_ir::IrError;
use qembed_sim::SimError;
use thiserror::Error;

/// Errors produced while encoding or processing tokens.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TokenError {
    /// Qubit width is zero or beyond what can be simulated densely.
    #[error("Invalid qubit count: {num_qubits} (supported: 1..={max})")]
    InvalidQubitCount {
        /// Requested width.
        num_qubits: u32,
        /// Largest supported width.
        max: u32,
    },

    /// Invalid processor configuration.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Scheme name not recognized by the strict parser.
    #[error("Unknown encoding scheme: '{0}' (expected amplitude, phase or hybrid)")]
    UnknownScheme(String),

    /// Circuit construction failed.
    #[error(transparent)]
    Ir(#[from] IrError),

    /// Simulation failed.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// Configuration could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for token operations.
pub type TokenResult<T> = Result<T, TokenError>;
