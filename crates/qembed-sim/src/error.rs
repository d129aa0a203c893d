//! Error types for the simulator crate.

use qembed_ir::QubitId;
use thiserror::Error;

/// Errors produced while executing or sampling a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// At least one shot is required.
    #[error("Invalid shots: {0}, at least one shot is required")]
    InvalidShots(u32),

    /// Circuit is wider than the simulator allows.
    #[error("Circuit has {num_qubits} qubits but simulator only supports {max_qubits}")]
    CircuitTooLarge {
        /// Qubits declared by the circuit.
        num_qubits: usize,
        /// Configured qubit limit.
        max_qubits: u32,
    },

    /// An instruction references a qubit outside the statevector.
    #[error("Qubit {qubit} is out of range for a {num_qubits}-qubit statevector")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: usize,
        /// Width of the statevector.
        num_qubits: usize,
    },

    /// Instruction operands do not match the gate.
    #[error("Malformed instruction: {0}")]
    MalformedInstruction(String),

    /// A gate acts on a qubit that was already measured.
    #[error("Gate '{gate_name}' acts on {qubit} after it was measured; measurements must be terminal")]
    MeasuredQubitReused {
        /// The measured qubit.
        qubit: QubitId,
        /// Name of the offending gate.
        gate_name: &'static str,
    },

    /// Squared amplitudes no longer sum to one.
    #[error("Statevector normalization violated: squared norm is {norm}")]
    Normalization {
        /// The observed squared norm.
        norm: f64,
    },

    /// An amplitude became NaN or infinite.
    #[error("Non-finite amplitude at basis index {index}")]
    NonFiniteAmplitude {
        /// Basis index of the offending amplitude.
        index: usize,
    },

    /// The outcome distribution could not be sampled.
    #[error("Sampling failed: {0}")]
    Sampling(String),

    /// Invalid simulator configuration.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
