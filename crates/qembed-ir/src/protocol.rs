//! Named protocols composed from builder calls.
//!
//! These only append instructions; nothing is executed here.

use crate::circuit::Circuit;
use crate::error::IrResult;
use crate::qubit::{ClbitId, QubitId};

impl Circuit {
    /// Entangle qubits 0 and 1 into `(|00⟩ + |11⟩)/√2`.
    ///
    /// Appends `H(0)`, `CX(0, 1)`.
    pub fn create_bell_pair(&mut self) -> IrResult<&mut Self> {
        self.h(QubitId(0))?.cx(QubitId(0), QubitId(1))
    }

    /// Append the teleportation circuit up to the Bell-basis measurement.
    ///
    /// Qubit 0 is prepared from `state = [a, b]`: `X(0)` if `a != 0`, then
    /// `Rz(b)` on qubit 0 if `b != 0`. Qubits 1 and 2 form the channel
    /// (`H(1)`, `CX(1, 2)`), followed by `CX(0, 1)`, `H(0)` and measurement of
    /// qubits 0 and 1 into classical bits 0 and 1.
    ///
    /// No classically controlled X/Z corrections are applied to qubit 2, so
    /// qubit 2 only holds the input state up to a Pauli frame determined by
    /// the two measured bits.
    pub fn teleport(&mut self, state: [f64; 2]) -> IrResult<&mut Self> {
        let [a, b] = state;
        let (q0, q1, q2) = (QubitId(0), QubitId(1), QubitId(2));

        if a != 0.0 {
            self.x(q0)?;
        }
        if b != 0.0 {
            self.rz(b, q0)?;
        }

        self.h(q1)?.cx(q1, q2)?;
        self.cx(q0, q1)?.h(q0)?;

        self.measure(q0, ClbitId(0))?.measure(q1, ClbitId(1))
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a measured Bell state circuit on 2 qubits and 2 classical bits.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2)?;
        circuit.create_bell_pair()?.measure_all()?;
        Ok(circuit)
    }

    /// Create a teleportation circuit on 3 qubits and 3 classical bits.
    ///
    /// Classical bit 2 is never written and always reads `0`.
    pub fn teleportation(state: [f64; 2]) -> IrResult<Self> {
        let mut circuit = Self::with_size("teleportation", 3, 3)?;
        circuit.teleport(state)?;
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::IrError;
    use crate::gate::StandardGate;
    use crate::instruction::InstructionKind;

    use super::*;

    fn gate_names(circuit: &Circuit) -> Vec<&'static str> {
        circuit.instructions().iter().map(|i| i.name()).collect()
    }

    #[test]
    fn test_bell_pair_gates() {
        let mut circuit = Circuit::with_size("bell", 2, 2).unwrap();
        circuit.create_bell_pair().unwrap();
        assert_eq!(gate_names(&circuit), vec!["h", "cx"]);
        assert_eq!(
            circuit.instructions()[1].qubits,
            vec![QubitId(0), QubitId(1)]
        );
    }

    #[test]
    fn test_bell_prebuilt() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(gate_names(&circuit), vec!["h", "cx", "measure"]);
    }

    #[test]
    fn test_bell_pair_needs_two_qubits() {
        let mut circuit = Circuit::with_size("tiny", 1, 1).unwrap();
        assert!(matches!(
            circuit.create_bell_pair(),
            Err(IrError::QubitNotFound { .. })
        ));
    }

    #[test]
    fn test_teleport_full_preparation() {
        let circuit = Circuit::teleportation([1.0, 0.5]).unwrap();
        assert_eq!(
            gate_names(&circuit),
            vec!["x", "rz", "h", "cx", "cx", "h", "measure", "measure"]
        );
        assert_eq!(
            circuit.instructions()[1].kind,
            InstructionKind::Gate(StandardGate::Rz(0.5))
        );
    }

    #[test]
    fn test_teleport_skips_zero_components() {
        let circuit = Circuit::teleportation([0.0, 0.0]).unwrap();
        assert_eq!(
            gate_names(&circuit),
            vec!["h", "cx", "cx", "h", "measure", "measure"]
        );
    }

    #[test]
    fn test_teleport_measures_first_two_qubits() {
        let circuit = Circuit::teleportation([1.0, 0.0]).unwrap();
        let pairs: Vec<_> = circuit
            .instructions()
            .iter()
            .flat_map(|i| i.measured_pairs())
            .collect();
        assert_eq!(
            pairs,
            vec![(QubitId(0), ClbitId(0)), (QubitId(1), ClbitId(1))]
        );
    }
}
