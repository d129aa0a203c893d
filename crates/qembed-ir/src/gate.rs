//! Quantum gate types.
//!
//! Rotation conventions are fixed:
//!
//! - `Rz(θ) = diag(e^{-iθ/2}, e^{+iθ/2})`
//! - `Ry(θ) = [[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]`

use serde::{Deserialize, Serialize};

/// Standard gates with known semantics.
///
/// Angles are concrete radians; there is no symbolic parameter support.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X (bit flip) gate.
    X,
    /// Rotation around the Y axis.
    Ry(f64),
    /// Rotation around the Z axis.
    Rz(f64),
    /// Controlled-X (CNOT) gate; operands are `[control, target]`.
    CX,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H | StandardGate::X | StandardGate::Ry(_) | StandardGate::Rz(_) => 1,
            StandardGate::CX => 2,
        }
    }

    /// Rotation angle, for parameterized gates.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Ry(theta) | StandardGate::Rz(theta) => Some(*theta),
            _ => None,
        }
    }
}
