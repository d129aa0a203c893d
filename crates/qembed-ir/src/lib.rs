//! qembed Circuit Representation
//!
//! Core data structures for describing small quantum circuits: qubit and
//! classical-bit identifiers, the supported gate set, instructions, and the
//! append-only [`Circuit`] builder. Named protocols (Bell pair, teleportation)
//! are provided as builder methods.
//!
//! Circuits are pure data. Execution lives in `qembed-sim`.
//!
//! # Bit ordering
//!
//! Qubit `k` is bit `k` of a statevector basis index. Measured bitstrings list
//! classical bits in declared order, so character `c` is classical bit `c`.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qembed_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2).unwrap();
//!
//! // |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X` | 1 | Pauli-X gate |
//! | `Ry` | 1 | Rotation around Y, `[[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]` |
//! | `Rz` | 1 | Rotation around Z, `diag(e^{-iθ/2}, e^{iθ/2})` |
//! | `CX` | 2 | Controlled-NOT (CNOT) |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod protocol;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
