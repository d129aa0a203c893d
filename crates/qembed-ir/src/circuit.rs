//! High-level circuit builder API.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// An append-only log of instructions over a fixed number of qubits and
/// classical bits. Operands are validated when an instruction is appended,
/// so every instruction in the log references existing wires. Executing a
/// circuit never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Instructions in program order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit with a given number of qubits and classical bits.
    ///
    /// Fails with [`IrError::InvalidQubitCount`] if `num_qubits` is zero.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> IrResult<Self> {
        if num_qubits == 0 {
            return Err(IrError::InvalidQubitCount(num_qubits));
        }
        Ok(Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        })
    }

    /// Append an instruction to the log after validating its operands.
    pub fn append(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.validate(&instruction)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        let gate_name = match &instruction.kind {
            InstructionKind::Gate(gate) => Some(gate.name().to_string()),
            InstructionKind::Measure => None,
        };

        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let got = instruction.qubits.len() as u32;
                if gate.num_qubits() != got || !instruction.clbits.is_empty() {
                    return Err(IrError::QubitCountMismatch {
                        gate_name: gate.name().to_string(),
                        expected: gate.num_qubits(),
                        got,
                    });
                }
            }
            InstructionKind::Measure => {
                if instruction.qubits.len() != instruction.clbits.len() {
                    return Err(IrError::MeasureArityMismatch {
                        qubits: instruction.qubits.len(),
                        clbits: instruction.clbits.len(),
                    });
                }
            }
        }

        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate_name: gate_name.clone(),
                });
            }
        }

        for &clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    num_clbits: self.num_clbits,
                    gate_name: gate_name.clone(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        Ok(())
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Ry(theta), qubit))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Rz(theta), qubit))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply a CX ladder `CX(i, i+1)` for every adjacent pair of qubits.
    pub fn cx_chain(&mut self) -> IrResult<&mut Self> {
        for i in 0..self.num_qubits.saturating_sub(1) {
            self.cx(QubitId(i), QubitId(i + 1))?;
        }
        Ok(self)
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.append(Instruction::measure(qubit, clbit))
    }

    /// Measure every qubit `i` into classical bit `i`.
    ///
    /// Requires at least as many classical bits as qubits.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        let qubits = (0..self.num_qubits).map(QubitId);
        let clbits = (0..self.num_qubits).map(ClbitId);
        self.append(Instruction::measure_all(qubits, clbits)?)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Instructions in the order they were appended.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions in the log.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the circuit declares any measurement.
    pub fn has_measurements(&self) -> bool {
        self.instructions.iter().any(Instruction::is_measure)
    }

    /// Get the circuit depth.
    ///
    /// Instructions sharing no qubit or classical bit occupy the same layer.
    pub fn depth(&self) -> usize {
        let mut qubit_front = vec![0usize; self.num_qubits()];
        let mut clbit_front = vec![0usize; self.num_clbits()];
        let mut depth = 0;

        for inst in &self.instructions {
            let layer = inst
                .qubits
                .iter()
                .filter_map(|q| qubit_front.get(q.index()))
                .chain(inst.clbits.iter().filter_map(|c| clbit_front.get(c.index())))
                .copied()
                .max()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                if let Some(front) = qubit_front.get_mut(q.index()) {
                    *front = layer;
                }
            }
            for c in &inst.clbits {
                if let Some(front) = clbit_front.get_mut(c.index()) {
                    *front = layer;
                }
            }
            depth = depth.max(layer);
        }

        depth
    }
}
