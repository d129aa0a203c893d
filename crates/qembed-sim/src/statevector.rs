//! Statevector simulation engine.
//!
//! Basis index `i` holds the amplitude of the computational state whose
//! qubit `k` equals bit `k` of `i`.

use num_complex::Complex64;

use qembed_ir::{Instruction, InstructionKind, StandardGate};

use crate::config::MAX_SUPPORTED_QUBITS;
use crate::error::{SimError, SimResult};

/// Maximum deviation of the squared norm from one before a run is aborted.
pub const NORM_TOLERANCE: f64 = 1e-9;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// 2x2 unitary as `[[m00, m01], [m10, m11]]`.
type Matrix2 = [[Complex64; 2]; 2];

/// A statevector representing a quantum state.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a statevector initialized to |0...0⟩.
    ///
    /// Fails with [`SimError::CircuitTooLarge`] beyond
    /// [`MAX_SUPPORTED_QUBITS`].
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        if num_qubits > MAX_SUPPORTED_QUBITS as usize {
            return Err(SimError::CircuitTooLarge {
                num_qubits,
                max_qubits: MAX_SUPPORTED_QUBITS,
            });
        }
        let mut amplitudes = vec![ZERO; 1 << num_qubits];
        amplitudes[0] = ONE;
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Born-rule probabilities `|amplitude|²` per basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Apply an instruction to the statevector.
    ///
    /// Measurements leave the statevector untouched; sampling happens once
    /// the full circuit has been applied.
    pub fn apply(&mut self, instruction: &Instruction) -> SimResult<()> {
        let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.index()).collect();
        match &instruction.kind {
            InstructionKind::Gate(gate) => self.apply_gate(gate, &qubits),
            InstructionKind::Measure => self.check_range(&qubits),
        }
    }

    /// Apply a gate to specific qubits, then verify normalization.
    pub fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) -> SimResult<()> {
        if qubits.len() != gate.num_qubits() as usize {
            return Err(SimError::MalformedInstruction(format!(
                "gate '{}' expects {} qubits, got {}",
                gate.name(),
                gate.num_qubits(),
                qubits.len()
            )));
        }
        self.check_range(qubits)?;

        match gate {
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Ry(theta) => self.apply_ry(qubits[0], *theta),
            StandardGate::Rz(theta) => self.apply_rz(qubits[0], *theta),
            StandardGate::CX => {
                if qubits[0] == qubits[1] {
                    return Err(SimError::MalformedInstruction(format!(
                        "cx control and target are both qubit {}",
                        qubits[0]
                    )));
                }
                self.apply_cx(qubits[0], qubits[1]);
            }
        }
        self.check_normalization()
    }

    fn check_range(&self, qubits: &[usize]) -> SimResult<()> {
        match qubits.iter().find(|&&q| q >= self.num_qubits) {
            Some(&qubit) => Err(SimError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            }),
            None => Ok(()),
        }
    }

    /// Verify that every amplitude is finite and the squared norm is one.
    pub fn check_normalization(&self) -> SimResult<()> {
        if let Some(index) = self
            .amplitudes
            .iter()
            .position(|a| !a.re.is_finite() || !a.im.is_finite())
        {
            return Err(SimError::NonFiniteAmplitude { index });
        }

        let norm = self.norm_sqr();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(SimError::Normalization { norm });
        }
        Ok(())
    }

    // =========================================================================
    // Kernels
    // =========================================================================

    /// Apply `matrix` to every amplitude pair differing only in `qubit`.
    fn apply_single(&mut self, qubit: usize, matrix: Matrix2) {
        let mask = 1 << qubit;
        let [[m00, m01], [m10, m11]] = matrix;
        for lo in (0..self.amplitudes.len()).filter(|i| i & mask == 0) {
            let hi = lo | mask;
            let (a, b) = (self.amplitudes[lo], self.amplitudes[hi]);
            self.amplitudes[lo] = m00 * a + m01 * b;
            self.amplitudes[hi] = m10 * a + m11 * b;
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let r = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        self.apply_single(qubit, [[r, r], [r, -r]]);
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let (s, c) = (theta / 2.0).sin_cos();
        let (s, c) = (Complex64::new(s, 0.0), Complex64::new(c, 0.0));
        self.apply_single(qubit, [[c, -s], [s, c]]);
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phases = [
            Complex64::from_polar(1.0, -theta / 2.0),
            Complex64::from_polar(1.0, theta / 2.0),
        ];
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp *= phases[usize::from(i & mask != 0)];
        }
    }

    /// Permutation-only gates swap amplitudes instead of multiplying.
    fn apply_x(&mut self, qubit: usize) {
        self.swap_pairs(0, 1 << qubit);
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        self.swap_pairs(1 << control, 1 << target);
    }

    /// Swap `i` with `i | flip` for every `i` that has all `require` bits
    /// set and the `flip` bit clear.
    fn swap_pairs(&mut self, require: usize, flip: usize) {
        for i in 0..self.amplitudes.len() {
            if i & require == require && i & flip == 0 {
                self.amplitudes.swap(i, i | flip);
            }
        }
    }
}
