//! Token encoding schemes.
//!
//! Every scheme is a pure function of `(token_id, num_qubits)`: each call
//! builds a fresh circuit, so no gate history leaks between tokens.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use qembed_ir::{Circuit, IrResult, QubitId};
use qembed_sim::config::MAX_SUPPORTED_QUBITS;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{TokenError, TokenResult};

/// How a token id is written into circuit parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EncodingScheme {
    /// `Ry` on qubit 0 by `(id mod 2^n) / 2^n · π`, then a CX chain.
    Amplitude,
    /// `H` on every qubit, `Rz` on qubit 0 by `(id mod 2^n) / 2^n · 2π`,
    /// then a CX chain.
    Phase,
    /// Amplitude encoding of `id mod 2^(n-1)` followed by phase encoding of
    /// `id div 2^(n-1)` on the same circuit.
    #[default]
    Hybrid,
}

impl EncodingScheme {
    /// All schemes, in reporting order.
    pub const ALL: [EncodingScheme; 3] = [Self::Amplitude, Self::Phase, Self::Hybrid];

    /// Get the scheme name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Amplitude => "amplitude",
            Self::Phase => "phase",
            Self::Hybrid => "hybrid",
        }
    }

    /// Parse a scheme name, falling back to [`EncodingScheme::Hybrid`] when
    /// it is not recognized.
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown encoding scheme '{}', falling back to hybrid", name);
            Self::Hybrid
        })
    }

    /// Build the measured circuit encoding `token_id` on `num_qubits` qubits.
    pub fn encode(&self, token_id: u32, num_qubits: u32) -> TokenResult<Circuit> {
        check_width(num_qubits)?;

        let mut circuit = Circuit::with_size(
            format!("{}_{}", self.name(), token_id),
            num_qubits,
            num_qubits,
        )?;
        let value = u64::from(token_id);

        match self {
            Self::Amplitude => encode_amplitude(&mut circuit, value)?,
            Self::Phase => encode_phase(&mut circuit, value)?,
            Self::Hybrid => {
                let half = 1u64 << (num_qubits - 1);
                encode_amplitude(&mut circuit, value % half)?;
                encode_phase(&mut circuit, value / half)?;
            }
        }

        circuit.measure_all()?;
        Ok(circuit)
    }
}

pub(crate) fn check_width(num_qubits: u32) -> TokenResult<()> {
    if num_qubits == 0 || num_qubits > MAX_SUPPORTED_QUBITS {
        return Err(TokenError::InvalidQubitCount {
            num_qubits,
            max: MAX_SUPPORTED_QUBITS,
        });
    }
    Ok(())
}

/// `(value mod 2^n) / 2^n`, always in `[0, 1)`.
fn fraction(value: u64, num_qubits: usize) -> f64 {
    let modulus = 1u64 << num_qubits;
    (value % modulus) as f64 / modulus as f64
}

fn encode_amplitude(circuit: &mut Circuit, value: u64) -> IrResult<()> {
    let angle = fraction(value, circuit.num_qubits()) * PI;
    circuit.ry(angle, QubitId(0))?.cx_chain()?;
    Ok(())
}

fn encode_phase(circuit: &mut Circuit, value: u64) -> IrResult<()> {
    for q in 0..circuit.num_qubits() as u32 {
        circuit.h(QubitId(q))?;
    }
    let phase = fraction(value, circuit.num_qubits()) * 2.0 * PI;
    circuit.rz(phase, QubitId(0))?.cx_chain()?;
    Ok(())
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodingScheme {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amplitude" => Ok(Self::Amplitude),
            "phase" => Ok(Self::Phase),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(TokenError::UnknownScheme(s.to_string())),
        }
    }
}

impl From<String> for EncodingScheme {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl From<EncodingScheme> for String {
    fn from(scheme: EncodingScheme) -> Self {
        scheme.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qembed_ir::StandardGate;

    fn gates(circuit: &Circuit) -> Vec<StandardGate> {
        circuit
            .instructions()
            .iter()
            .filter_map(|inst| inst.as_gate().copied())
            .collect()
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!("phase".parse::<EncodingScheme>().unwrap(), EncodingScheme::Phase);
        assert_eq!(" Amplitude ".parse::<EncodingScheme>().unwrap(), EncodingScheme::Amplitude);
        assert!(matches!(
            "quantum".parse::<EncodingScheme>(),
            Err(TokenError::UnknownScheme(name)) if name == "quantum"
        ));
    }

    #[test]
    fn test_parse_lossy_falls_back_to_hybrid() {
        assert_eq!(EncodingScheme::parse_lossy("bogus"), EncodingScheme::Hybrid);
        assert_eq!(EncodingScheme::parse_lossy("phase"), EncodingScheme::Phase);
    }

    #[test]
    fn test_amplitude_gates() {
        let circuit = EncodingScheme::Amplitude.encode(2, 2).unwrap();
        assert_eq!(
            gates(&circuit),
            vec![StandardGate::Ry(PI / 2.0), StandardGate::CX]
        );
        assert!(circuit.has_measurements());
    }

    #[test]
    fn test_amplitude_wraps_modulo() {
        // 18 mod 16 == 2
        let a = EncodingScheme::Amplitude.encode(18, 4).unwrap();
        let b = EncodingScheme::Amplitude.encode(2, 4).unwrap();
        assert_eq!(gates(&a), gates(&b));
    }

    #[test]
    fn test_phase_gates() {
        let circuit = EncodingScheme::Phase.encode(3, 3).unwrap();
        let g = gates(&circuit);
        assert_eq!(g.len(), 3 + 1 + 2);
        assert!(g[..3].iter().all(|gate| *gate == StandardGate::H));
        assert_eq!(g[3], StandardGate::Rz(3.0 / 8.0 * 2.0 * PI));
    }

    #[test]
    fn test_hybrid_splits_token() {
        // n = 3: amplitude part 13 mod 4 = 1, phase part 13 div 4 = 3
        let g = gates(&EncodingScheme::Hybrid.encode(13, 3).unwrap());
        assert_eq!(g[0], StandardGate::Ry(1.0 / 8.0 * PI));
        assert_eq!(g.len(), (1 + 2) + (3 + 1 + 2));
        assert_eq!(g[3 + 3], StandardGate::Rz(3.0 / 8.0 * 2.0 * PI));
    }

    #[test]
    fn test_single_qubit_has_no_chain() {
        let g = gates(&EncodingScheme::Amplitude.encode(1, 1).unwrap());
        assert_eq!(g, vec![StandardGate::Ry(PI / 2.0)]);
    }

    #[test]
    fn test_invalid_width() {
        assert!(matches!(
            EncodingScheme::Phase.encode(1, 0),
            Err(TokenError::InvalidQubitCount { num_qubits: 0, .. })
        ));
        assert!(matches!(
            EncodingScheme::Phase.encode(1, 64),
            Err(TokenError::InvalidQubitCount { num_qubits: 64, .. })
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&EncodingScheme::Amplitude).unwrap();
        assert_eq!(json, "\"amplitude\"");
        let parsed: EncodingScheme = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(parsed, EncodingScheme::Hybrid);
    }
}
